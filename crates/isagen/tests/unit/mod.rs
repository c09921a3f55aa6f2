//! # Unit Tests
//!
//! Tests grouped by crate module: the encoding model, the assembler, artifact
//! emission and configuration.

/// Unit tests for the ISA assembler and decode priority.
pub mod assembler;

/// Unit tests for generator configuration loading.
pub mod config;

/// Unit tests for artifact rendering and write-if-changed promotion.
pub mod emit;

/// Unit tests for the encoding model.
///
/// This module aggregates tests for:
/// - Field source evaluation and insertion.
/// - The format catalog.
/// - Extension subset validation and labels.
/// - Reference decoding, disassembly and re-encoding.
pub mod isa;
