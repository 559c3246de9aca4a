//! # Coffee Shop CLI
//!
//! Operator tooling for the Coffee Shop client environment configuration:
//! resolve the record for an environment, validate it before a deploy, and
//! print the derived identity-provider login link.

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
