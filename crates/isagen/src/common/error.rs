//! Error definitions for catalog construction and artifact generation.
//!
//! Every failure in this crate is structural and fatal to the build step that
//! triggered it. The variants fall into three groups:
//! 1. **Catalog Errors:** Unknown or duplicated format tags.
//! 2. **Descriptor Errors:** Malformed bit-pattern templates and operand layouts that
//!    contradict their template.
//! 3. **Assembly and I/O Errors:** Bad ISA descriptors, unknown custom extensions,
//!    configuration parsing and filesystem failures during promotion.

use std::io;
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, IsaError>;

/// Structural errors raised while building, assembling or emitting an ISA catalog.
#[derive(Debug, thiserror::Error)]
pub enum IsaError {
    /// A descriptor referenced a format tag the catalog does not define.
    #[error("undefined instruction format `{tag}`")]
    UnknownFormat {
        /// The unresolved tag.
        tag: String,
    },

    /// The same format tag was registered twice.
    #[error("format `{tag}` is defined more than once")]
    DuplicateFormat {
        /// The duplicated tag.
        tag: String,
    },

    /// A bit-pattern template contains characters other than `0`, `1`, `-`.
    #[error("invalid template `{template}` for `{mnemonic}`: {reason}")]
    InvalidTemplate {
        /// Offending instruction.
        mnemonic: String,
        /// Template as written in the table.
        template: String,
        /// Human readable cause.
        reason: String,
    },

    /// A template's length does not match the width of its extension subset.
    #[error("template for `{mnemonic}` is {found} bits wide, expected {expected}")]
    TemplateWidth {
        /// Offending instruction.
        mnemonic: String,
        /// Width implied by the owning subset.
        expected: u8,
        /// Width of the template.
        found: u8,
    },

    /// Fixed template bits coincide with bits read by an operand.
    #[error("`{mnemonic}` reads operand bits {bits:#010x} that its template fixes")]
    FixedBitOverlap {
        /// Offending instruction.
        mnemonic: String,
        /// Mask of the conflicting bit positions.
        bits: u32,
    },

    /// An operand reads a bit beyond the instruction width.
    #[error("`{mnemonic}` reads bit {bit} of a {width}-bit instruction")]
    OperandOutOfRange {
        /// Offending instruction.
        mnemonic: String,
        /// First bit outside the word.
        bit: u8,
        /// Instruction width.
        width: u8,
    },

    /// A scattered field places bits beyond the 64-bit operand value.
    #[error("`{mnemonic}` places operand bits up to bit {end} of a 64-bit value")]
    FieldOverflow {
        /// Offending instruction.
        mnemonic: String,
        /// One past the highest bit placed.
        end: u32,
    },

    /// A hidden operand does not duplicate any displayed operand field.
    #[error("hidden operand in slot {slot} of `{mnemonic}` does not mirror a displayed field")]
    HiddenOperandUnmatched {
        /// Offending instruction.
        mnemonic: String,
        /// Slot index of the hidden operand.
        slot: u8,
    },

    /// The ISA descriptor does not start with `rv32` or `rv64`.
    #[error("ISA descriptor `{isa}` should start with either rv32 or rv64")]
    InvalidIsaPrefix {
        /// The rejected descriptor.
        isa: String,
    },

    /// A custom extension key has no registered decode branch.
    #[error("unknown custom extension `{key}`")]
    UnknownExtension {
        /// The rejected key.
        key: String,
    },

    /// Filesystem failure while rendering or promoting an artifact.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// An artifact generator failed to render its output.
    #[error("failed to render artifact `{artifact}`: {reason}")]
    Render {
        /// Artifact being rendered.
        artifact: String,
        /// Human readable cause.
        reason: String,
    },

    /// Malformed generator configuration.
    #[error("invalid generator configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl IsaError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
