//! External collaborator clients for Docpilot.
//!
//! This crate holds everything that talks to the outside world:
//! - [`GithubSource`] fetches the changed-file list of a pull request
//!   (the [`ChangeSource`] capability).
//! - [`ConfluenceSource`] searches and reads knowledge-base pages (the
//!   [`DocSource`] capability, and the coverage analyzer's `PageLookup`).
//!
//! Clients are constructed explicitly and passed as dependencies; there
//! are no process-wide singletons, so the core stays testable with fakes.
//! All failures surface as a typed [`SourceError`].

pub mod confluence;
pub mod error;
pub mod github;

pub use confluence::{ConfluenceSource, DocSource, Page, SpaceRef};
pub use error::{Result, SourceError};
pub use github::{ChangeSource, GithubSource};
