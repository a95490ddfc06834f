//! Sett Details Test Suite
//!
//! End-to-end tests through the public `sett_survey` facade.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Field validator behaviour
//! - **Tier 2**: Submission handler (append, update, reject)
//! - **Tier 3**: Multi-step session flows (edit, delete, confirm, read-only)
//! - **Tier 4**: Session JSON wire format
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sett_details
//! ```

mod test_utils;

// Tier 1: Field validators
mod tier1_field_validators;

// Tier 2: Submission handler
mod tier2_submission;

// Tier 3: Session flows
mod tier3_session_flow;

// Tier 4: Wire format
mod tier4_session_wire;
