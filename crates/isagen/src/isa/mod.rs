//! Instruction encoding model and extension tables.
//!
//! Leaves first:
//!
//! * `field`: where an operand's bits live in the instruction word.
//! * `operand`: typed instruction arguments built from fields.
//! * `format`: the tag to operand-layout catalog.
//! * `insn`: table rows and their validated, resolved descriptors.
//! * `subset`: immutable per-extension instruction lists.
//! * `tables`: the static extension tables and the library that builds them.
//! * `decode` / `disasm`: reference matcher and rendering over assembled branches.

/// Reference matcher following decode priority.
pub mod decode;

/// Rendering of decoded instructions with ABI register names.
pub mod disasm;

/// Field sources and value extraction.
pub mod field;

/// Format tag to operand-layout catalog.
pub mod format;

/// Instruction table rows and resolved descriptors.
pub mod insn;

/// Operand descriptors and decoded values.
pub mod operand;

/// Extension subsets.
pub mod subset;

/// Static extension tables.
pub mod tables;

pub use decode::DecodedInsn;
pub use field::{Chunk, FieldSource};
pub use format::FormatCatalog;
pub use insn::{InsnDescriptor, InsnSpec, Template};
pub use operand::{Kind, Operand, OperandValue, RegFile, Role};
pub use subset::ExtensionSubset;
pub use tables::{ExtensionLibrary, SubsetId};
