//! Docpilot CLI: command surface and pipeline orchestration.

pub mod cli;
pub mod commands;
pub mod error;
pub mod print;

pub use error::{CliError, Result};
