//! Public types for the sett survey API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Record types
// ============================================================================

pub use sett_core::{GridReference, Sett, SettType};

// ============================================================================
// Form and session types
// ============================================================================

pub use sett_core::{Field, FieldErrors, ReturnState, SettForm, SettSession, Target};

// ============================================================================
// Execution
// ============================================================================

pub use sett_executor::{Command, Executor, Output, Survey, SurveyConfig};

// Access control for opening an executor
pub use sett_security::{AccessMode, OpenOptions};
