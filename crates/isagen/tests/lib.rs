//! # Catalog Testing Library
//!
//! Entry point of the catalog test suite. Unit tests are grouped by crate
//! module; shared encoders and mocks live in [`common`].

/// Shared test infrastructure.
///
/// This module provides:
/// - **Encoders**: Builders for raw RV32/RV64 and compressed instruction words.
/// - **Mocks**: A mock artifact generator for emission tests.
/// - **Fixtures**: Prebuilt libraries and assemblers.
pub mod common;

/// Unit tests for the catalog components.
pub mod unit;
