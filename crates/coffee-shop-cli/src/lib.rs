//! # coffee-env
//!
//! Command-line access to the Coffee Shop environment configuration: show the
//! active values, validate them, export the frontend JSON and print the URLs
//! derived from them.

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
