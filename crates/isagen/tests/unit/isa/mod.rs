//! # ISA Unit Tests

/// Reference matcher priority and disassembly.
pub mod decode;

/// Field source evaluation, sign extension and insertion.
pub mod field_source;

/// Format catalog registration and lookup.
pub mod format_catalog;

/// Decode and re-encode properties over arbitrary words.
pub mod round_trip;

/// Extension subset construction and table invariants.
pub mod subsets;
