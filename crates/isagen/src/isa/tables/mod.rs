//! Extension tables and the library that validates them.
//!
//! Each table module holds one or more static [`InsnSpec`] lists. The
//! [`ExtensionLibrary`] resolves all of them once against the format catalog
//! and hands out shared, immutable [`ExtensionSubset`]s.

/// CORE-V custom extension.
pub mod corev;
/// GAP9 custom additions.
pub mod gap9;
/// Register-pair 64-bit integer operations.
pub mod int64;
/// Privileged, trap-return and supervisor MMU instructions.
pub mod privileged;
/// PULP-NN extension.
pub mod pulpnn;
/// PULP v2 extension.
pub mod pulpv2;
/// RNN helper extension.
pub mod rnnext;
/// A extension.
pub mod rva;
/// C extension.
pub mod rvc;
/// D extension.
pub mod rvd;
/// F extension.
pub mod rvf;
/// I extension.
pub mod rvi;
/// M extension.
pub mod rvm;
/// V extension.
pub mod rvv;
/// Half-precision float.
pub mod xf16;
/// Alternate half-precision float.
pub mod xf16alt;
/// 8-bit float.
pub mod xf8;
/// Auxiliary small-float operations.
pub mod xfaux;
/// Packed small-float SIMD.
pub mod xfvec;
/// Compressed push/pop.
pub mod zcmp;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::format::FormatCatalog;
use super::insn::{COMPRESSED_WIDTH, InsnSpec, STANDARD_WIDTH};
use super::subset::ExtensionSubset;
use crate::common::Result;

/// Identifies one extension table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsetId {
    /// RV32I.
    Rv32i,
    /// RV64I additions.
    Rv64i,
    /// RV32M.
    Rv32m,
    /// RV64M additions.
    Rv64m,
    /// RV32A.
    Rv32a,
    /// RV64A additions.
    Rv64a,
    /// RV32F.
    Rv32f,
    /// RV32D.
    Rv32d,
    /// RV32C.
    Rv32c,
    /// RV64C.
    Rv64c,
    /// Zcmp.
    Zcmp,
    /// V.
    Vector,
    /// Half-precision float.
    Xf16,
    /// Alternate half-precision float.
    Xf16alt,
    /// 8-bit float.
    Xf8,
    /// Packed small-float SIMD.
    Xfvec,
    /// Auxiliary small-float operations.
    Xfaux,
    /// CSR access.
    Priv,
    /// Trap return.
    TrapReturn,
    /// Supervisor MMU fences.
    PrivSmmu,
    /// PULP v2.
    PulpV2,
    /// CORE-V.
    CoreV,
    /// PULP-NN.
    PulpNn,
    /// RNN helpers.
    RnnExt,
    /// GAP9.
    Gap9,
    /// Register-pair 64-bit integer.
    Int64,
}

impl SubsetId {
    /// Every table, in discriminant order.
    pub const ALL: [Self; 26] = [
        Self::Rv32i,
        Self::Rv64i,
        Self::Rv32m,
        Self::Rv64m,
        Self::Rv32a,
        Self::Rv64a,
        Self::Rv32f,
        Self::Rv32d,
        Self::Rv32c,
        Self::Rv64c,
        Self::Zcmp,
        Self::Vector,
        Self::Xf16,
        Self::Xf16alt,
        Self::Xf8,
        Self::Xfvec,
        Self::Xfaux,
        Self::Priv,
        Self::TrapReturn,
        Self::PrivSmmu,
        Self::PulpV2,
        Self::CoreV,
        Self::PulpNn,
        Self::RnnExt,
        Self::Gap9,
        Self::Int64,
    ];

    /// Subset name used in listings and generated artifacts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rv32i => "rv32i",
            Self::Rv64i => "rv64i",
            Self::Rv32m => "rv32m",
            Self::Rv64m => "rv64m",
            Self::Rv32a => "rv32a",
            Self::Rv64a => "rv64a",
            Self::Rv32f => "rv32f",
            Self::Rv32d => "rv32d",
            Self::Rv32c => "rv32c",
            Self::Rv64c => "rv64c",
            Self::Zcmp => "zcmp",
            Self::Vector => "v",
            Self::Xf16 => "f16",
            Self::Xf16alt => "f16alt",
            Self::Xf8 => "f8",
            Self::Xfvec => "fvec",
            Self::Xfaux => "faux",
            Self::Priv => "priv",
            Self::TrapReturn => "trap_return",
            Self::PrivSmmu => "priv_smmu",
            Self::PulpV2 => "pulpv2",
            Self::CoreV => "corev",
            Self::PulpNn => "pulpnn",
            Self::RnnExt => "rnnext",
            Self::Gap9 => "gap9",
            Self::Int64 => "int64",
        }
    }

    /// Instruction width of every row in the table.
    pub const fn width(self) -> u8 {
        match self {
            Self::Rv32c | Self::Rv64c | Self::Zcmp => COMPRESSED_WIDTH,
            _ => STANDARD_WIDTH,
        }
    }

    /// The static table.
    pub fn table(self) -> &'static [InsnSpec] {
        match self {
            Self::Rv32i => rvi::RV32I,
            Self::Rv64i => rvi::RV64I,
            Self::Rv32m => rvm::RV32M,
            Self::Rv64m => rvm::RV64M,
            Self::Rv32a => rva::RV32A,
            Self::Rv64a => rva::RV64A,
            Self::Rv32f => rvf::RV32F,
            Self::Rv32d => rvd::RV32D,
            Self::Rv32c => rvc::RV32C,
            Self::Rv64c => rvc::RV64C,
            Self::Zcmp => zcmp::ZCMP,
            Self::Vector => rvv::RVV,
            Self::Xf16 => xf16::XF16,
            Self::Xf16alt => xf16alt::XF16ALT,
            Self::Xf8 => xf8::XF8,
            Self::Xfvec => xfvec::XFVEC,
            Self::Xfaux => xfaux::XFAUX,
            Self::Priv => privileged::PRIV,
            Self::TrapReturn => privileged::TRAP_RETURN,
            Self::PrivSmmu => privileged::PRIV_SMMU,
            Self::PulpV2 => pulpv2::PULPV2,
            Self::CoreV => corev::COREV,
            Self::PulpNn => pulpnn::PULPNN,
            Self::RnnExt => rnnext::RNNEXT,
            Self::Gap9 => gap9::GAP9,
            Self::Int64 => int64::INT64,
        }
    }

    /// Whether the table holds compressed instructions.
    pub const fn is_compressed(self) -> bool {
        self.width() == COMPRESSED_WIDTH
    }
}

/// Custom decode branches that callers may append by key.
///
/// Each key maps to the subsets of its branch in priority order.
pub const CUSTOM_EXTENSIONS: &[(&str, &[SubsetId])] = &[
    ("v", &[SubsetId::Vector]),
    ("zcmp", &[SubsetId::Zcmp]),
    ("f16", &[SubsetId::Xf16]),
    ("f16alt", &[SubsetId::Xf16alt]),
    ("f8", &[SubsetId::Xf8]),
    ("fvec", &[SubsetId::Xfvec]),
    ("faux", &[SubsetId::Xfaux]),
    ("pulpv2", &[SubsetId::PulpV2]),
    ("corev", &[SubsetId::CoreV]),
    ("pulpnn", &[SubsetId::PulpNn]),
    ("rnnext", &[SubsetId::RnnExt]),
    ("gap9", &[SubsetId::Gap9]),
    ("int64", &[SubsetId::Int64]),
];

/// Looks up a custom decode branch by key.
pub fn custom_extension(key: &str) -> Option<&'static [SubsetId]> {
    CUSTOM_EXTENSIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, subsets)| *subsets)
}

/// Every extension subset, validated once and shared immutably.
#[derive(Clone, Debug)]
pub struct ExtensionLibrary {
    subsets: Vec<Arc<ExtensionSubset>>,
}

impl ExtensionLibrary {
    /// Builds the format catalog and every subset.
    ///
    /// # Arguments
    ///
    /// * `uncompressed_labels` - Trace compressed instructions under the
    ///   mnemonic of their 32-bit counterpart.
    pub fn new(uncompressed_labels: bool) -> Result<Self> {
        Self::with_catalog(&FormatCatalog::new()?, uncompressed_labels)
    }

    /// Builds every subset against an existing catalog.
    pub fn with_catalog(catalog: &FormatCatalog, uncompressed_labels: bool) -> Result<Self> {
        let mut subsets = Vec::with_capacity(SubsetId::ALL.len());
        for id in SubsetId::ALL {
            let mut subset = ExtensionSubset::build(id.name(), id.width(), id.table(), catalog)?;
            if uncompressed_labels && matches!(id, SubsetId::Rv32c | SubsetId::Rv64c) {
                subset.relabel(rvc::UNCOMPRESSED_LABELS);
            }
            debug!(subset = id.name(), instructions = subset.len(), "extension subset built");
            subsets.push(Arc::new(subset));
        }
        Ok(Self { subsets })
    }

    /// Shared handle to one subset.
    pub fn get(&self, id: SubsetId) -> Arc<ExtensionSubset> {
        Arc::clone(&self.subsets[id as usize])
    }

    /// Every subset paired with its identifier.
    pub fn iter(&self) -> impl Iterator<Item = (SubsetId, &Arc<ExtensionSubset>)> {
        SubsetId::ALL.into_iter().zip(&self.subsets)
    }
}
