//! Instruction descriptors.
//!
//! Extension tables are written as static [`InsnSpec`] lists: a mnemonic, a
//! format tag and a bit-pattern template, plus optional metadata attached with
//! `const` builder calls. Building a subset resolves every spec through the
//! [`FormatCatalog`] into an [`InsnDescriptor`] and checks it structurally:
//!
//! 1. **Template:** only `0`, `1`, `-` (spaces ignored), and exactly as wide as
//!    the subset's instructions.
//! 2. **Disjointness:** no fixed template bit is read by an operand.
//! 3. **Bounds:** no operand reads past the instruction width.
//! 4. **Hidden Operands:** every hidden operand reads the same field as a
//!    displayed one.

use serde::Serialize;

use super::field::FieldSource;
use super::format::FormatCatalog;
use super::operand::{Operand, OperandValue};
use crate::common::{IsaError, Result};

/// Width in bits of standard and custom 32-bit encodings.
pub const STANDARD_WIDTH: u8 = 32;

/// Width in bits of compressed encodings.
pub const COMPRESSED_WIDTH: u8 = 16;

/// One row of an extension table, before format resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsnSpec {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Format tag resolved through the catalog.
    pub format: &'static str,
    /// Bit-pattern template, most significant bit first.
    pub pattern: &'static str,
    /// Decode hook applied by the simulator after operand extraction.
    pub decode: Option<&'static str>,
    /// Trace label overriding the mnemonic.
    pub label: Option<&'static str>,
    /// Mnemonic whose handler this instruction reuses.
    pub map_to: Option<&'static str>,
    /// Eligible for the simulator's fast dispatch path.
    pub fast_path: bool,
    /// Classification tags (`load`, `fmadd`, ...).
    pub tags: &'static [&'static str],
    /// ISA sub-feature tags gating the instruction.
    pub isa_tags: &'static [&'static str],
    /// Expands into several micro-operations.
    pub macro_op: bool,
}

impl InsnSpec {
    /// Creates a spec with no optional metadata.
    pub const fn new(mnemonic: &'static str, format: &'static str, pattern: &'static str) -> Self {
        Self {
            mnemonic,
            format,
            pattern,
            decode: None,
            label: None,
            map_to: None,
            fast_path: false,
            tags: &[],
            isa_tags: &[],
            macro_op: false,
        }
    }

    /// Attaches a decode hook.
    #[must_use]
    pub const fn decode(mut self, hook: &'static str) -> Self {
        self.decode = Some(hook);
        self
    }

    /// Overrides the trace label.
    #[must_use]
    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Maps the instruction onto another mnemonic's handler.
    #[must_use]
    pub const fn map_to(mut self, target: &'static str) -> Self {
        self.map_to = Some(target);
        self
    }

    /// Marks the instruction as fast-path eligible.
    #[must_use]
    pub const fn fast(mut self) -> Self {
        self.fast_path = true;
        self
    }

    /// Sets classification tags.
    #[must_use]
    pub const fn tags(mut self, tags: &'static [&'static str]) -> Self {
        self.tags = tags;
        self
    }

    /// Sets ISA sub-feature tags.
    #[must_use]
    pub const fn isa_tags(mut self, tags: &'static [&'static str]) -> Self {
        self.isa_tags = tags;
        self
    }

    /// Marks the instruction as a macro-op.
    #[must_use]
    pub const fn macro_op(mut self) -> Self {
        self.macro_op = true;
        self
    }
}

/// A parsed bit-pattern template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Template {
    /// Pattern with grouping spaces removed.
    pub text: String,
    /// Width in bits.
    pub width: u8,
    /// Mask of fixed bit positions.
    pub mask: u32,
    /// Values of the fixed bits.
    pub matches: u32,
}

impl Template {
    /// Parses a template written most significant bit first.
    ///
    /// # Arguments
    ///
    /// * `mnemonic` - Owning instruction, used in error reports.
    /// * `pattern` - Characters `0`, `1`, `-`; spaces are ignored.
    ///
    /// # Returns
    ///
    /// The parsed template, or [`IsaError::InvalidTemplate`] on a bad character
    /// or a pattern longer than 32 bits.
    pub fn parse(mnemonic: &str, pattern: &str) -> Result<Self> {
        let text: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = |reason: String| IsaError::InvalidTemplate {
            mnemonic: mnemonic.to_owned(),
            template: pattern.to_owned(),
            reason,
        };
        if text.is_empty() || text.len() > 32 {
            return Err(invalid(format!("{} bits is not a valid width", text.len())));
        }

        let width = text.len() as u8;
        let mut mask = 0u32;
        let mut matches = 0u32;
        for (pos, c) in text.chars().enumerate() {
            let bit = 1u32 << (text.len() - 1 - pos);
            match c {
                '0' => mask |= bit,
                '1' => {
                    mask |= bit;
                    matches |= bit;
                }
                '-' => {}
                other => return Err(invalid(format!("unexpected character `{other}`"))),
            }
        }

        Ok(Self {
            text,
            width,
            mask,
            matches,
        })
    }

    /// All bit positions of the word.
    pub const fn full_mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// Whether `word` carries this template's fixed bits.
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.matches
    }

    /// Number of fixed bits.
    pub const fn fixed_bits(&self) -> u32 {
        self.mask.count_ones()
    }
}

/// A fully resolved and validated instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InsnDescriptor {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Format tag the operands were resolved from.
    pub format: &'static str,
    /// Parsed template.
    pub template: Template,
    /// Operand layout from the catalog.
    pub operands: Vec<Operand>,
    /// Decode hook.
    pub decode: Option<&'static str>,
    /// Trace label override.
    pub label: Option<&'static str>,
    /// Handler alias.
    pub map_to: Option<&'static str>,
    /// Fast-path eligibility.
    pub fast_path: bool,
    /// Classification tags.
    pub tags: &'static [&'static str],
    /// ISA sub-feature tags.
    pub isa_tags: &'static [&'static str],
    /// Macro-op flag.
    pub macro_op: bool,
}

impl InsnDescriptor {
    /// Resolves and validates one table row.
    ///
    /// # Arguments
    ///
    /// * `spec` - The table row.
    /// * `width` - Instruction width of the owning subset.
    /// * `catalog` - Format catalog used to resolve `spec.format`.
    pub fn resolve(spec: &InsnSpec, width: u8, catalog: &FormatCatalog) -> Result<Self> {
        let template = Template::parse(spec.mnemonic, spec.pattern)?;
        if template.width != width {
            return Err(IsaError::TemplateWidth {
                mnemonic: spec.mnemonic.to_owned(),
                expected: width,
                found: template.width,
            });
        }

        let descriptor = Self {
            mnemonic: spec.mnemonic,
            format: spec.format,
            template,
            operands: catalog.lookup(spec.format)?.to_vec(),
            decode: spec.decode,
            label: spec.label,
            map_to: spec.map_to,
            fast_path: spec.fast_path,
            tags: spec.tags,
            isa_tags: spec.isa_tags,
            macro_op: spec.macro_op,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    fn validate(&self) -> Result<()> {
        let width = u32::from(self.template.width);
        let chunks = self
            .operands
            .iter()
            .flat_map(Operand::leaves)
            .filter_map(Operand::source)
            .flat_map(FieldSource::chunks);
        for chunk in chunks {
            if chunk.word_end() > width {
                return Err(IsaError::OperandOutOfRange {
                    mnemonic: self.mnemonic.to_owned(),
                    bit: chunk.offset.max(self.template.width),
                    width: self.template.width,
                });
            }
            if chunk.value_end() > u64::BITS {
                return Err(IsaError::FieldOverflow {
                    mnemonic: self.mnemonic.to_owned(),
                    end: chunk.value_end(),
                });
            }
        }

        let read = self.operand_bits();
        let overlap = read as u32 & self.template.mask;
        if overlap != 0 {
            return Err(IsaError::FixedBitOverlap {
                mnemonic: self.mnemonic.to_owned(),
                bits: overlap,
            });
        }

        let leaves: Vec<&Operand> = self.operands.iter().flat_map(Operand::leaves).collect();
        for hidden in leaves.iter().filter(|leaf| !leaf.is_displayed()) {
            let mirrored = leaves
                .iter()
                .any(|leaf| leaf.is_displayed() && leaf.source() == hidden.source());
            if !mirrored {
                let slot = match hidden {
                    Operand::Reg(reg) => reg.slot,
                    Operand::Imm(imm) => imm.slot,
                    Operand::Indirect(_) => 0,
                };
                return Err(IsaError::HiddenOperandUnmatched {
                    mnemonic: self.mnemonic.to_owned(),
                    slot,
                });
            }
        }
        Ok(())
    }

    /// Label used in traces: the override if present, else the mnemonic.
    pub fn trace_label(&self) -> &'static str {
        self.label.unwrap_or(self.mnemonic)
    }

    /// Width of the instruction in bits.
    pub const fn width(&self) -> u8 {
        self.template.width
    }

    /// Whether `word` carries this instruction's fixed bits.
    pub const fn matches(&self, word: u32) -> bool {
        self.template.matches(word)
    }

    /// Mask of every bit read by any operand.
    pub fn operand_bits(&self) -> u64 {
        self.operands
            .iter()
            .fold(0, |acc, operand| acc | operand.word_mask())
    }

    /// Decodes every operand from `word`, in declaration order.
    pub fn evaluate(&self, word: u32) -> Vec<OperandValue> {
        self.operands.iter().map(|op| op.evaluate(word)).collect()
    }

    /// Re-encodes operand values on top of the template's fixed bits.
    ///
    /// Inverse of [`Self::evaluate`] on every bit that is either fixed or read
    /// by an operand.
    pub fn encode(&self, values: &[OperandValue]) -> u32 {
        self.operands
            .iter()
            .zip(values)
            .fold(self.template.matches, |word, (op, value)| op.encode(word, value))
    }
}
