//! Reference matcher over assembled decode branches.
//!
//! This is the priority model the generated tables encode, executed directly:
//! 1. **Length:** low bits `0b11` select a 32-bit instruction, anything else a
//!    16-bit one whose upper half is ignored.
//! 2. **Across Subsets:** branches and their subsets are walked in order; the
//!    first subset with a match wins.
//! 3. **Within a Subset:** the match with the most fixed bits wins.

use serde::Serialize;

use super::insn::{COMPRESSED_WIDTH, InsnDescriptor, STANDARD_WIDTH};
use super::operand::OperandValue;
use crate::assembler::DecodeBranch;

/// Low two bits marking a 32-bit encoding.
const STANDARD_LENGTH_BITS: u32 = 0b11;

/// A matched instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedInsn<'a> {
    /// The word that was decoded, truncated to its width.
    pub word: u32,
    /// Key of the branch that matched.
    pub branch: &'a str,
    /// Name of the subset that matched.
    pub subset: &'static str,
    /// The matched instruction.
    pub descriptor: &'a InsnDescriptor,
    /// Decoded operands, parallel to `descriptor.operands`.
    pub operands: Vec<OperandValue>,
}

impl DecodedInsn<'_> {
    /// Re-encodes the decoded operands onto the template.
    pub fn reencode(&self) -> u32 {
        self.descriptor.encode(&self.operands)
    }
}

/// Width in bits of the instruction starting with `word`.
pub const fn instruction_width(word: u32) -> u8 {
    if word & STANDARD_LENGTH_BITS == STANDARD_LENGTH_BITS {
        STANDARD_WIDTH
    } else {
        COMPRESSED_WIDTH
    }
}

/// Decodes `word` against `branches` in priority order.
///
/// # Arguments
///
/// * `branches` - Decode branches, highest priority first.
/// * `word` - Raw instruction bits; for 16-bit encodings only the low half
///   is considered.
///
/// # Returns
///
/// The first match, or `None` if no instruction of the right width matches.
pub fn decode(branches: &[DecodeBranch], word: u32) -> Option<DecodedInsn<'_>> {
    let width = instruction_width(word);
    let word = if width == COMPRESSED_WIDTH {
        word & 0xFFFF
    } else {
        word
    };

    branches.iter().find_map(|branch| {
        branch
            .subsets()
            .iter()
            .filter(|subset| subset.width() == width)
            .find_map(|subset| {
                subset.match_word(word).map(|descriptor| DecodedInsn {
                    word,
                    branch: branch.key(),
                    subset: subset.name(),
                    descriptor,
                    operands: descriptor.evaluate(word),
                })
            })
    })
}
