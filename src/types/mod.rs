//! Shared types: configuration and the crate-wide error taxonomy.

pub mod config;
pub mod errors;

pub use config::Config;
pub use errors::{Error, ErrorKind, Result};
