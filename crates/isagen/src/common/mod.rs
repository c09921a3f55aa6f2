//! Common types shared across the generator.
//!
//! Currently this is the error model: the crate-wide [`IsaError`] and the
//! [`Result`] alias every fallible operation returns.

/// Error types for catalog construction and generation.
pub mod error;

pub use error::{IsaError, Result};
