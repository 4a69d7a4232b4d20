//! Change classification and documentation action planning.
//!
//! This crate is the deterministic core of Docpilot:
//! - [`Classifier`] turns one raw change record into a structured
//!   descriptor (category, impact, breaking-change assessment).
//! - [`aggregate`] folds an ordered descriptor sequence into a change-set
//!   summary with counts, file lists and a strategy hint.
//! - [`Planner`] turns the summary, per-topic coverage results and the
//!   descriptors into the final prioritized action plan.
//!
//! Everything here is a pure, synchronous transformation: no I/O, no
//! shared state, no clocks. Given the same inputs and the same
//! [`AnalysisThresholds`], every function produces identical output.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod planner;

pub use aggregator::aggregate;
pub use classifier::Classifier;
pub use config::{AnalysisThresholds, PlannerConfig};
pub use planner::Planner;
