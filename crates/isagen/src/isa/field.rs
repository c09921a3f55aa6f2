//! Field sources: reading operand values out of raw instruction words.
//!
//! A field is one of three shapes:
//! 1. **Const:** A value implied by the encoding, independent of the word.
//! 2. **Range:** One contiguous bit run, right-aligned in the result.
//! 3. **Ranges:** Several runs, each placed at its own destination shift and
//!    OR-ed together. This covers the scattered branch, jump and compressed
//!    immediates. Chunks may be listed in any order.
//!
//! Sign extension always starts at the highest logical bit any chunk reaches,
//! never at the last chunk in the list.

use serde::Serialize;

/// One contiguous piece of a scattered field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Chunk {
    /// Lowest instruction bit of the piece.
    pub offset: u8,
    /// Number of bits in the piece.
    pub width: u8,
    /// Position of the piece's lowest bit in the reassembled value.
    pub shift: u8,
}

impl Chunk {
    /// Creates a chunk reading `width` bits at `offset` and placing them at `shift`.
    pub const fn new(offset: u8, width: u8, shift: u8) -> Self {
        Self {
            offset,
            width,
            shift,
        }
    }

    /// Bits of the instruction word read by this chunk.
    const fn word_mask(self) -> u64 {
        shl(low_mask(self.width), self.offset)
    }

    /// One past the highest instruction bit read, or zero for an empty chunk.
    pub fn word_end(self) -> u32 {
        if self.width == 0 {
            0
        } else {
            u32::from(self.offset) + u32::from(self.width)
        }
    }

    /// One past the highest bit placed in the reassembled value.
    pub fn value_end(self) -> u32 {
        u32::from(self.shift) + u32::from(self.width)
    }
}

/// Where an operand's value comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Fixed value implied by the encoding.
    Const(i64),
    /// `width` bits starting at `offset`.
    Range {
        /// Lowest instruction bit.
        offset: u8,
        /// Number of bits.
        width: u8,
    },
    /// Scattered bits reassembled chunk by chunk.
    Ranges(Vec<Chunk>),
}

/// Shorthand for [`FieldSource::Const`].
pub const fn fixed(value: i64) -> FieldSource {
    FieldSource::Const(value)
}

/// Shorthand for [`FieldSource::Range`].
pub const fn range(offset: u8, width: u8) -> FieldSource {
    FieldSource::Range { offset, width }
}

/// Shorthand for [`FieldSource::Ranges`] from `(offset, width, shift)` triples.
pub fn ranges(chunks: &[(u8, u8, u8)]) -> FieldSource {
    FieldSource::Ranges(
        chunks
            .iter()
            .map(|&(offset, width, shift)| Chunk::new(offset, width, shift))
            .collect(),
    )
}

impl FieldSource {
    /// Mask of the instruction bits this source reads.
    ///
    /// Returned as `u64` so that sources reaching past a 32-bit word are still
    /// visible to validation.
    pub fn word_mask(&self) -> u64 {
        match self {
            Self::Const(_) => 0,
            Self::Range { offset, width } => Chunk::new(*offset, *width, 0).word_mask(),
            Self::Ranges(chunks) => chunks.iter().fold(0, |acc, c| acc | c.word_mask()),
        }
    }

    /// The source's bit runs; a `Range` is one chunk placed at shift zero.
    pub fn chunks(&self) -> Vec<Chunk> {
        match self {
            Self::Const(_) => Vec::new(),
            Self::Range { offset, width } => vec![Chunk::new(*offset, *width, 0)],
            Self::Ranges(chunks) => chunks.clone(),
        }
    }

    /// Number of significant bits in the reassembled (unextended) value.
    pub fn logical_width(&self) -> u32 {
        match self {
            Self::Const(_) => 0,
            Self::Range { width, .. } => u32::from(*width),
            Self::Ranges(chunks) => chunks
                .iter()
                .filter(|c| c.width > 0)
                .map(|c| u32::from(c.shift) + u32::from(c.width))
                .max()
                .unwrap_or(0),
        }
    }

    /// Reads the raw, zero-extended value out of `word`.
    pub fn raw(&self, word: u32) -> u64 {
        let word = u64::from(word);
        match self {
            Self::Const(value) => *value as u64,
            Self::Range { offset, width } => shr(word, *offset) & low_mask(*width),
            Self::Ranges(chunks) => chunks.iter().fold(0, |acc, c| {
                acc | shl(shr(word, c.offset) & low_mask(c.width), c.shift)
            }),
        }
    }

    /// Evaluates the source against `word`, sign-extending when `signed` is set.
    ///
    /// # Arguments
    ///
    /// * `word` - The raw instruction word.
    /// * `signed` - Whether to sign-extend from the highest logical bit.
    ///
    /// # Returns
    ///
    /// The reconstructed operand value. Constants are returned unchanged.
    pub fn evaluate(&self, word: u32, signed: bool) -> i64 {
        if let Self::Const(value) = self {
            return *value;
        }
        let raw = self.raw(word);
        if signed {
            sign_extend(raw, self.logical_width())
        } else {
            raw as i64
        }
    }

    /// Writes `value` back into the bits this source reads.
    ///
    /// Bits of `value` above the source's logical width are ignored, so a
    /// sign-extended value inserts exactly like its truncated form.
    pub fn insert(&self, word: u32, value: i64) -> u32 {
        let value = value as u64;
        let mut word = u64::from(word);
        let mut place = |offset: u8, width: u8, shift: u8| {
            let field = shl(low_mask(width), offset);
            word = (word & !field) | (shl(shr(value, shift), offset) & field);
        };
        match self {
            Self::Const(_) => {}
            Self::Range { offset, width } => place(*offset, *width, 0),
            Self::Ranges(chunks) => chunks.iter().for_each(|c| place(c.offset, c.width, c.shift)),
        }
        word as u32
    }
}

/// Mask with the low `width` bits set.
const fn low_mask(width: u8) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Left shift that yields zero once every bit has been shifted out.
const fn shl(value: u64, by: u8) -> u64 {
    if by >= 64 {
        0
    } else {
        value << by
    }
}

/// Right shift that yields zero once every bit has been shifted out.
const fn shr(value: u64, by: u8) -> u64 {
    if by >= 64 {
        0
    } else {
        value >> by
    }
}

/// Sign extends the low `bits` bits of `val` to a 64-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`. Zero yields zero.
pub const fn sign_extend(val: u64, bits: u32) -> i64 {
    if bits == 0 {
        return 0;
    }
    if bits >= 64 {
        return val as i64;
    }
    let shift = 64 - bits;
    ((val << shift) as i64) >> shift
}
