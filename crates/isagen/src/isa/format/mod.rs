//! Format catalog: the tag to operand-layout table.
//!
//! Every encoding shape used by any extension table is registered here once,
//! keyed by its tag. The catalog is:
//! 1. **Total over the tables:** resolving an unknown tag is a configuration
//!    error raised while building subsets, never while decoding.
//! 2. **Unique:** registering a tag twice fails construction.
//! 3. **Pure:** the same tag always yields the same operand list.

/// Compressed (16-bit) layouts.
mod compressed;

/// Floating-point layouts.
mod float;

/// Integer, memory, dual-width and hardware-loop layouts.
mod scalar;

/// Vector layouts.
mod vector;

use std::collections::HashMap;

use tracing::debug;

use super::operand::Operand;
use crate::common::{IsaError, Result};

/// Lookup table from format tag to operand layout.
#[derive(Clone, Debug)]
pub struct FormatCatalog {
    formats: HashMap<&'static str, Vec<Operand>>,
}

impl FormatCatalog {
    /// Builds the catalog with every known layout.
    ///
    /// # Returns
    ///
    /// The catalog, or [`IsaError::DuplicateFormat`] if a tag was registered twice.
    pub fn new() -> Result<Self> {
        let mut catalog = Self::empty();
        scalar::define_integer(&mut catalog)?;
        scalar::define_memory(&mut catalog)?;
        scalar::define_wide(&mut catalog)?;
        scalar::define_loops(&mut catalog)?;
        float::define_float(&mut catalog)?;
        compressed::define_compressed(&mut catalog)?;
        vector::define_vector(&mut catalog)?;
        debug!(formats = catalog.len(), "format catalog built");
        Ok(catalog)
    }

    /// Creates a catalog with no layouts, for callers registering their own.
    pub fn empty() -> Self {
        Self {
            formats: HashMap::with_capacity(160),
        }
    }

    /// Registers a layout under `tag`.
    ///
    /// # Arguments
    ///
    /// * `tag` - Format tag referenced by instruction tables.
    /// * `operands` - Operand layout in declaration order.
    pub fn define(&mut self, tag: &'static str, operands: Vec<Operand>) -> Result<()> {
        if self.formats.contains_key(tag) {
            return Err(IsaError::DuplicateFormat {
                tag: tag.to_owned(),
            });
        }
        let _ = self.formats.insert(tag, operands);
        Ok(())
    }

    /// Returns the operand layout registered under `tag`.
    pub fn lookup(&self, tag: &str) -> Result<&[Operand]> {
        self.formats
            .get(tag)
            .map(Vec::as_slice)
            .ok_or_else(|| IsaError::UnknownFormat {
                tag: tag.to_owned(),
            })
    }

    /// Whether `tag` is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.formats.contains_key(tag)
    }

    /// Registered tags in lexical order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = self.formats.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered layouts.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether no layout is registered.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
