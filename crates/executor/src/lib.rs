//! Command execution layer for sett survey sessions.
//!
//! The web layer decodes a [`Command`] from the request, hands it to an
//! [`Executor`] together with the caller's [`SettSession`], and uses the
//! returned [`Output`] (usually a [`ReturnState`]) to pick the next view.
//!
//! # Layout
//!
//! - `handlers`: one function per command
//! - `api`: [`Survey`], a typed wrapper over the executor
//! - `config` / `logging`: TOML configuration and tracing setup

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
pub mod config;
mod convert;
mod error;
mod executor;
pub mod handlers;
pub mod logging;
mod output;

pub use api::Survey;
pub use command::Command;
pub use config::SurveyConfig;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;

pub use sett_core::{ReturnState, Sett, SettForm, SettSession, SettType, Target};
pub use sett_security::{AccessMode, OpenOptions};
