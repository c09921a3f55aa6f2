//! Extension subsets: validated, immutable instruction lists.

use serde::Serialize;

use super::format::FormatCatalog;
use super::insn::{InsnDescriptor, InsnSpec};
use crate::common::Result;

/// An ordered list of resolved instructions belonging to one extension.
///
/// Built once from a static table and never modified afterwards; decode
/// branches share subsets through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtensionSubset {
    name: &'static str,
    width: u8,
    descriptors: Vec<InsnDescriptor>,
}

impl ExtensionSubset {
    /// Resolves and validates every row of `specs`.
    ///
    /// # Arguments
    ///
    /// * `name` - Subset name used in listings and generated artifacts.
    /// * `width` - Instruction width every template must have (16 or 32).
    /// * `specs` - Table rows in priority order.
    /// * `catalog` - Format catalog for operand resolution.
    ///
    /// # Returns
    ///
    /// The subset, or the first structural error found.
    pub fn build(
        name: &'static str,
        width: u8,
        specs: &[InsnSpec],
        catalog: &FormatCatalog,
    ) -> Result<Self> {
        let descriptors = specs
            .iter()
            .map(|spec| InsnDescriptor::resolve(spec, width, catalog))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name,
            width,
            descriptors,
        })
    }

    /// Applies trace labels by mnemonic to rows that carry no explicit label.
    pub(crate) fn relabel(&mut self, labels: &[(&str, &'static str)]) {
        for descriptor in self.descriptors.iter_mut().filter(|d| d.label.is_none()) {
            if let Some(&(_, label)) = labels.iter().find(|(m, _)| *m == descriptor.mnemonic) {
                descriptor.label = Some(label);
            }
        }
    }

    /// Subset name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Instruction width in bits.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Instructions in table order.
    pub fn descriptors(&self) -> &[InsnDescriptor] {
        &self.descriptors
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the subset is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// First instruction with the given mnemonic.
    pub fn find(&self, mnemonic: &str) -> Option<&InsnDescriptor> {
        self.descriptors.iter().find(|d| d.mnemonic == mnemonic)
    }

    /// Best match for `word` within this subset.
    ///
    /// Among matching rows the one with the most fixed bits wins, so a fully
    /// fixed alias such as `nop` beats the generic `addi`. Ties go to the
    /// earlier row.
    pub fn match_word(&self, word: u32) -> Option<&InsnDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| d.matches(word))
            .fold(None, |best: Option<&InsnDescriptor>, d| match best {
                Some(b) if b.template.fixed_bits() >= d.template.fixed_bits() => Some(b),
                _ => Some(d),
            })
    }
}
