//! RISC-V instruction-encoding catalog and decode-table generator.
//!
//! This crate builds the decode structure of a multi-extension RISC-V
//! simulator from an ISA descriptor such as `rv64imafdc`:
//! 1. **ISA Model:** Field sources, operand descriptors and the format
//!    catalog, plus validated per-extension instruction tables covering the
//!    standard, small-float, vector, privileged and vendor extensions.
//! 2. **Assembly:** Descriptor parsing, word-size-aware subset selection and
//!    decode priority, with privileged encodings always last.
//! 3. **Emission:** Artifact rendering behind a generator trait, promoted to
//!    disk only when contents change.
//! 4. **Configuration:** JSON-driven generator settings.

/// ISA assembler and the frozen decode structure it produces.
pub mod assembler;
/// Error types.
pub mod common;
/// Generator configuration.
pub mod config;
/// Artifact generation and write-if-changed promotion.
pub mod emit;
/// Encoding model, format catalog and extension tables.
pub mod isa;

/// Main entry point; parse a descriptor with `IsaAssembler::new`.
pub use crate::assembler::{AssembledIsa, DecodeBranch, Generation, IsaAssembler, WordSize};
/// Crate-wide error and result types.
pub use crate::common::{IsaError, Result};
/// Generation settings; use `GeneratorConfig::default()` or deserialize from JSON.
pub use crate::config::{GeneratorConfig, PrivilegeFlags};
/// Built-in renderer and the generator boundary.
pub use crate::emit::{Artifact, ArtifactGenerator, TableGenerator, WriteOutcome};
