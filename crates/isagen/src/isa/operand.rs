//! Operand descriptors.
//!
//! An [`Operand`] is one argument of an instruction: a register read or write,
//! an immediate, or a composite memory reference. Each leaf operand binds a
//! [`FieldSource`] that says where its value lives in the instruction word.
//!
//! Compressed register kinds remap their 3-bit field to `x8..x15` (or
//! `f8..f15`); the remap belongs to the kind, not to individual instructions.

use serde::Serialize;

use super::field::FieldSource;

/// First architectural register reachable through a 3-bit compressed field.
pub const COMPRESSED_REG_BASE: u8 = 8;

/// Whether an operand is read or written by the instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Source operand.
    In,
    /// Destination operand.
    Out,
}

/// Register file addressed by a register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegFile {
    /// General-purpose integer registers.
    Int,
    /// Integer register pair holding a 64-bit value on a 32-bit core.
    Int64,
    /// Floating-point registers.
    Float,
    /// Integer registers `x8..x15` through a 3-bit field.
    CompressedInt,
    /// Floating-point registers `f8..f15` through a 3-bit field.
    CompressedFloat,
}

impl RegFile {
    /// Maps a raw field value to an architectural register number.
    pub const fn architectural(self, raw: u8) -> u8 {
        match self {
            Self::CompressedInt | Self::CompressedFloat => raw + COMPRESSED_REG_BASE,
            Self::Int | Self::Int64 | Self::Float => raw,
        }
    }

    /// Maps an architectural register number back to its raw field value.
    pub const fn raw(self, index: u8) -> u8 {
        match self {
            Self::CompressedInt | Self::CompressedFloat => index.wrapping_sub(COMPRESSED_REG_BASE),
            Self::Int | Self::Int64 | Self::Float => index,
        }
    }

    /// Whether registers of this file are rendered with floating-point names.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::CompressedFloat)
    }
}

/// Flat classification of an operand, convenient for exhaustive matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Integer register.
    IntReg,
    /// 64-bit integer register (pair on 32-bit cores).
    WideIntReg,
    /// Floating-point register.
    FloatReg,
    /// Compressed integer register.
    CompressedIntReg,
    /// Compressed floating-point register.
    CompressedFloatReg,
    /// Signed immediate.
    SignedImm,
    /// Unsigned immediate.
    UnsignedImm,
    /// Base plus offset memory reference.
    Indirect,
}

/// A register read or written by the instruction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RegOperand {
    /// Read or write.
    pub role: Role,
    /// Position among operands of the same role.
    pub slot: u8,
    /// Register file.
    pub file: RegFile,
    /// Where the register number comes from.
    pub source: FieldSource,
    /// Whether the operand appears in rendered output.
    pub display: bool,
}

/// An immediate operand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ImmOperand {
    /// Position among immediates.
    pub slot: u8,
    /// Declared kind, either [`Kind::SignedImm`] or [`Kind::UnsignedImm`].
    pub kind: Kind,
    /// Whether the value is sign-extended when decoded. Usually follows
    /// `kind`, but scaled offsets are declared signed yet always positive.
    pub sign_extend: bool,
    /// Where the value comes from.
    pub source: FieldSource,
    /// Whether the operand appears in rendered output.
    pub display: bool,
}

/// A base register plus offset memory reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct IndirectOperand {
    /// Base address register.
    pub base: Box<Operand>,
    /// Offset, either an immediate or a second register.
    pub offset: Box<Operand>,
    /// Whether the base register is updated after the access.
    pub post_increment: bool,
}

/// One instruction argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operand {
    /// Register operand.
    Reg(RegOperand),
    /// Immediate operand.
    Imm(ImmOperand),
    /// Composite memory reference.
    Indirect(IndirectOperand),
}

impl Operand {
    const fn reg(role: Role, slot: u8, file: RegFile, source: FieldSource) -> Self {
        Self::Reg(RegOperand {
            role,
            slot,
            file,
            source,
            display: true,
        })
    }

    /// Integer source register.
    pub const fn in_reg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::In, slot, RegFile::Int, source)
    }

    /// Integer destination register.
    pub const fn out_reg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::Out, slot, RegFile::Int, source)
    }

    /// 64-bit integer source register.
    pub const fn in_reg64(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::In, slot, RegFile::Int64, source)
    }

    /// 64-bit integer destination register.
    pub const fn out_reg64(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::Out, slot, RegFile::Int64, source)
    }

    /// Floating-point source register.
    pub const fn in_freg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::In, slot, RegFile::Float, source)
    }

    /// Floating-point destination register.
    pub const fn out_freg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::Out, slot, RegFile::Float, source)
    }

    /// Compressed integer source register.
    pub const fn in_creg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::In, slot, RegFile::CompressedInt, source)
    }

    /// Compressed integer destination register.
    pub const fn out_creg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::Out, slot, RegFile::CompressedInt, source)
    }

    /// Compressed floating-point source register.
    pub const fn in_cfreg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::In, slot, RegFile::CompressedFloat, source)
    }

    /// Compressed floating-point destination register.
    pub const fn out_cfreg(slot: u8, source: FieldSource) -> Self {
        Self::reg(Role::Out, slot, RegFile::CompressedFloat, source)
    }

    /// Signed, sign-extended immediate.
    pub const fn simm(slot: u8, source: FieldSource) -> Self {
        Self::Imm(ImmOperand {
            slot,
            kind: Kind::SignedImm,
            sign_extend: true,
            source,
            display: true,
        })
    }

    /// Unsigned, zero-extended immediate.
    pub const fn uimm(slot: u8, source: FieldSource) -> Self {
        Self::Imm(ImmOperand {
            slot,
            kind: Kind::UnsignedImm,
            sign_extend: false,
            source,
            display: true,
        })
    }

    /// Memory reference built from a base register and an offset operand.
    pub fn indirect(base: Self, offset: Self) -> Self {
        Self::Indirect(IndirectOperand {
            base: Box::new(base),
            offset: Box::new(offset),
            post_increment: false,
        })
    }

    /// Marks an indirect operand as post-incrementing its base.
    #[must_use]
    pub fn post_increment(mut self) -> Self {
        if let Self::Indirect(ind) = &mut self {
            ind.post_increment = true;
        }
        self
    }

    /// Forces zero extension on an immediate.
    #[must_use]
    pub fn zero_extended(mut self) -> Self {
        if let Self::Imm(imm) = &mut self {
            imm.sign_extend = false;
        }
        self
    }

    /// Forces sign extension on an immediate.
    #[must_use]
    pub fn sign_extended(mut self) -> Self {
        if let Self::Imm(imm) = &mut self {
            imm.sign_extend = true;
        }
        self
    }

    /// Excludes the operand from rendered output.
    ///
    /// Hidden operands must read exactly the same field as a displayed one.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        match &mut self {
            Self::Reg(reg) => reg.display = false,
            Self::Imm(imm) => imm.display = false,
            Self::Indirect(_) => {}
        }
        self
    }

    /// Flat classification of this operand.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Reg(reg) => match reg.file {
                RegFile::Int => Kind::IntReg,
                RegFile::Int64 => Kind::WideIntReg,
                RegFile::Float => Kind::FloatReg,
                RegFile::CompressedInt => Kind::CompressedIntReg,
                RegFile::CompressedFloat => Kind::CompressedFloatReg,
            },
            Self::Imm(imm) => imm.kind,
            Self::Indirect(_) => Kind::Indirect,
        }
    }

    /// Whether the operand appears in rendered output.
    pub fn is_displayed(&self) -> bool {
        match self {
            Self::Reg(reg) => reg.display,
            Self::Imm(imm) => imm.display,
            Self::Indirect(ind) => ind.base.is_displayed() || ind.offset.is_displayed(),
        }
    }

    /// Leaf operands in declaration order, descending into indirect references.
    pub fn leaves(&self) -> Vec<&Self> {
        match self {
            Self::Indirect(ind) => {
                let mut out = ind.base.leaves();
                out.extend(ind.offset.leaves());
                out
            }
            Self::Reg(_) | Self::Imm(_) => vec![self],
        }
    }

    /// Field source of a leaf operand; `None` for indirect references.
    pub const fn source(&self) -> Option<&FieldSource> {
        match self {
            Self::Reg(reg) => Some(&reg.source),
            Self::Imm(imm) => Some(&imm.source),
            Self::Indirect(_) => None,
        }
    }

    /// Mask of every instruction bit this operand reads.
    pub fn word_mask(&self) -> u64 {
        self.leaves()
            .iter()
            .filter_map(|leaf| leaf.source())
            .fold(0, |acc, source| acc | source.word_mask())
    }

    /// Decodes this operand from `word`.
    pub fn evaluate(&self, word: u32) -> OperandValue {
        match self {
            Self::Reg(reg) => OperandValue::Reg {
                file: reg.file,
                index: reg.file.architectural(reg.source.evaluate(word, false) as u8),
            },
            Self::Imm(imm) => OperandValue::Imm(imm.source.evaluate(word, imm.sign_extend)),
            Self::Indirect(ind) => OperandValue::Indirect {
                base: Box::new(ind.base.evaluate(word)),
                offset: Box::new(ind.offset.evaluate(word)),
                post_increment: ind.post_increment,
            },
        }
    }

    /// Writes a decoded value back into `word`.
    ///
    /// Values whose shape does not match the operand leave `word` unchanged.
    pub fn encode(&self, word: u32, value: &OperandValue) -> u32 {
        match (self, value) {
            (Self::Reg(reg), OperandValue::Reg { index, .. }) => reg
                .source
                .insert(word, i64::from(reg.file.raw(*index))),
            (Self::Imm(imm), OperandValue::Imm(v)) => imm.source.insert(word, *v),
            (Self::Indirect(ind), OperandValue::Indirect { base, offset, .. }) => {
                let word = ind.base.encode(word, base);
                ind.offset.encode(word, offset)
            }
            _ => word,
        }
    }
}

/// A decoded operand value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandValue {
    /// Architectural register number in a given file.
    Reg {
        /// Register file.
        file: RegFile,
        /// Architectural index.
        index: u8,
    },
    /// Immediate value after sign or zero extension.
    Imm(i64),
    /// Memory reference.
    Indirect {
        /// Base register value.
        base: Box<OperandValue>,
        /// Offset value.
        offset: Box<OperandValue>,
        /// Whether the base is post-incremented.
        post_increment: bool,
    },
}
