//! ISA assembler: from a descriptor string to prioritized decode branches.
//!
//! The assembler goes through three steps:
//! 1. **Descriptor Parsing:** `rv32`/`rv64` selects the word size. Each known
//!    extension letter adds one decode branch; `X` ends parsing and unknown
//!    letters are skipped with a warning.
//! 2. **Augmentation:** Callers append custom branches (`v`, `pulpv2`, ...)
//!    by key or as prebuilt [`DecodeBranch`]es.
//! 3. **Generation:** The frozen [`AssembledIsa`] is rendered at most once per
//!    assembler and written with write-if-changed promotion.
//!
//! The privilege branch is not stored with the others. It is appended when
//! assembling, so it is always last whatever order branches were added in.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::common::{IsaError, Result};
use crate::config::{GeneratorConfig, PrivilegeFlags};
use crate::emit::{ArtifactGenerator, WriteOutcome, write_if_changed};
use crate::isa::decode::{self, DecodedInsn};
use crate::isa::insn::InsnDescriptor;
use crate::isa::subset::ExtensionSubset;
use crate::isa::tables::{ExtensionLibrary, SubsetId, custom_extension};

/// Descriptor character that ends extension-letter parsing.
pub const CUSTOM_TERMINATOR: char = 'X';

/// Key of the privilege decode branch.
pub const PRIVILEGE_BRANCH: &str = "priv";

/// Native integer width of the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WordSize {
    /// 32-bit core.
    Rv32,
    /// 64-bit core.
    Rv64,
}

impl WordSize {
    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }

    /// Splits an ISA descriptor into its word size and extension letters.
    ///
    /// # Returns
    ///
    /// The word size and the remaining characters, or
    /// [`IsaError::InvalidIsaPrefix`] when the descriptor starts with neither
    /// `rv32` nor `rv64`.
    pub fn split_descriptor(isa: &str) -> Result<(Self, &str)> {
        if let Some(rest) = isa.strip_prefix("rv32") {
            Ok((Self::Rv32, rest))
        } else if let Some(rest) = isa.strip_prefix("rv64") {
            Ok((Self::Rv64, rest))
        } else {
            Err(IsaError::InvalidIsaPrefix {
                isa: isa.to_owned(),
            })
        }
    }

    /// Subsets making up the branch of a standard extension letter.
    ///
    /// On 64-bit cores the 64-bit subset comes first so it wins wherever its
    /// encodings overlap the 32-bit base. `None` for letters with no branch.
    pub const fn standard_subsets(self, letter: char) -> Option<&'static [SubsetId]> {
        Some(match (letter, self) {
            ('i', Self::Rv32) => &[SubsetId::Rv32i],
            ('i', Self::Rv64) => &[SubsetId::Rv64i, SubsetId::Rv32i],
            ('m', Self::Rv32) => &[SubsetId::Rv32m],
            ('m', Self::Rv64) => &[SubsetId::Rv64m, SubsetId::Rv32m],
            ('a', Self::Rv32) => &[SubsetId::Rv32a],
            ('a', Self::Rv64) => &[SubsetId::Rv64a, SubsetId::Rv32a],
            ('c', Self::Rv32) => &[SubsetId::Rv32c],
            ('c', Self::Rv64) => &[SubsetId::Rv64c],
            ('f', _) => &[SubsetId::Rv32f],
            ('d', _) => &[SubsetId::Rv32d],
            _ => return None,
        })
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rv{}", self.bits())
    }
}

/// A priority-ordered group of subsets decoded under one extension key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodeBranch {
    key: String,
    subsets: Vec<Arc<ExtensionSubset>>,
}

impl DecodeBranch {
    /// Creates a branch; earlier subsets take precedence.
    pub fn new(key: impl Into<String>, subsets: Vec<Arc<ExtensionSubset>>) -> Self {
        Self {
            key: key.into(),
            subsets,
        }
    }

    /// Creates a branch from library subsets.
    pub fn from_library(
        key: impl Into<String>,
        ids: &[SubsetId],
        library: &ExtensionLibrary,
    ) -> Self {
        Self::new(key, ids.iter().map(|&id| library.get(id)).collect())
    }

    /// Extension key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Subsets in priority order.
    pub fn subsets(&self) -> &[Arc<ExtensionSubset>] {
        &self.subsets
    }

    /// Total number of instructions across subsets.
    pub fn instruction_count(&self) -> usize {
        self.subsets.iter().map(|s| s.len()).sum()
    }
}

/// Outcome of [`IsaAssembler::generate`].
#[derive(Debug, PartialEq, Eq)]
pub enum Generation {
    /// Artifacts were rendered; each final path with its write outcome.
    Generated(Vec<(PathBuf, WriteOutcome)>),
    /// This assembler already generated; nothing was rendered or written.
    AlreadyGenerated,
}

/// Builds the decode structure for one ISA configuration.
#[derive(Debug)]
pub struct IsaAssembler {
    name: String,
    isa: String,
    word_size: WordSize,
    library: ExtensionLibrary,
    branches: Vec<DecodeBranch>,
    privilege: PrivilegeFlags,
    generated: bool,
}

impl IsaAssembler {
    /// Parses `isa` and builds the standard decode branches.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier the artifacts are named after.
    /// * `isa` - Descriptor such as `rv64imafdc`.
    /// * `privilege` - Privilege branch selection.
    ///
    /// # Returns
    ///
    /// The assembler, or [`IsaError::InvalidIsaPrefix`] for a bad descriptor.
    pub fn new(name: &str, isa: &str, privilege: PrivilegeFlags) -> Result<Self> {
        Self::with_library(name, isa, privilege, ExtensionLibrary::new(false)?)
    }

    /// Like [`Self::new`] but reusing an already built library.
    pub fn with_library(
        name: &str,
        isa: &str,
        privilege: PrivilegeFlags,
        library: ExtensionLibrary,
    ) -> Result<Self> {
        let (word_size, letters) = WordSize::split_descriptor(isa)?;
        let mut assembler = Self {
            name: name.to_owned(),
            isa: isa.to_owned(),
            word_size,
            library,
            branches: Vec::new(),
            privilege,
            generated: false,
        };

        for letter in letters.chars() {
            if letter == CUSTOM_TERMINATOR {
                break;
            }
            match word_size.standard_subsets(letter) {
                Some(ids) => {
                    let branch = DecodeBranch::from_library(letter, ids, &assembler.library);
                    assembler.add_branch(branch);
                }
                None => warn!(isa, %letter, "skipping unrecognized extension letter"),
            }
        }
        Ok(assembler)
    }

    /// Builds an assembler from a configuration, including its custom extensions.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let library = ExtensionLibrary::new(config.uncompressed_labels)?;
        let mut assembler =
            Self::with_library(&config.name, &config.isa, config.privilege, library)?;
        for key in &config.extensions {
            assembler.add_extension(key)?;
        }
        Ok(assembler)
    }

    /// Appends a branch after all existing extension branches.
    pub fn add_branch(&mut self, branch: DecodeBranch) {
        debug!(
            key = branch.key(),
            subsets = branch.subsets().len(),
            "decode branch added"
        );
        self.branches.push(branch);
    }

    /// Appends the custom branch registered under `key`.
    ///
    /// # Returns
    ///
    /// [`IsaError::UnknownExtension`] if no custom branch has that key.
    pub fn add_extension(&mut self, key: &str) -> Result<()> {
        let ids = custom_extension(key).ok_or_else(|| IsaError::UnknownExtension {
            key: key.to_owned(),
        })?;
        let branch = DecodeBranch::from_library(key, ids, &self.library);
        self.add_branch(branch);
        Ok(())
    }

    /// Identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISA descriptor as given.
    pub fn isa(&self) -> &str {
        &self.isa
    }

    /// Word size selected by the descriptor prefix.
    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    /// Privilege branch selection.
    pub const fn privilege(&self) -> PrivilegeFlags {
        self.privilege
    }

    /// Subset library the branches draw from.
    pub const fn library(&self) -> &ExtensionLibrary {
        &self.library
    }

    /// Whether [`Self::generate`] has already run.
    pub const fn is_generated(&self) -> bool {
        self.generated
    }

    /// Extension branches in insertion order, without the privilege branch.
    pub fn extension_branches(&self) -> &[DecodeBranch] {
        &self.branches
    }

    fn privilege_branch(&self) -> Option<DecodeBranch> {
        let flags = self.privilege;
        let ids: Vec<SubsetId> = [
            (flags.privileged, SubsetId::Priv),
            (flags.trap_return, SubsetId::TrapReturn),
            (flags.supervisor_mmu, SubsetId::PrivSmmu),
        ]
        .into_iter()
        .filter_map(|(on, id)| on.then_some(id))
        .collect();
        (!ids.is_empty()).then(|| DecodeBranch::from_library(PRIVILEGE_BRANCH, &ids, &self.library))
    }

    /// Snapshot of the complete, prioritized decode structure.
    pub fn assemble(&self) -> AssembledIsa {
        let mut branches = self.branches.clone();
        branches.extend(self.privilege_branch());
        AssembledIsa {
            name: self.name.clone(),
            isa: self.isa.clone(),
            word_size: self.word_size,
            branches,
        }
    }

    /// Renders the artifacts and promotes them under `build_dir`.
    ///
    /// Runs the generator at most once per assembler; later calls return
    /// [`Generation::AlreadyGenerated`] without touching the filesystem.
    ///
    /// # Arguments
    ///
    /// * `generator` - Renders the assembled structure to file contents.
    /// * `build_dir` - Output directory, created if missing.
    pub fn generate(
        &mut self,
        generator: &dyn ArtifactGenerator,
        build_dir: &Path,
    ) -> Result<Generation> {
        if self.generated {
            debug!(name = %self.name, "artifacts already generated");
            return Ok(Generation::AlreadyGenerated);
        }
        self.generated = true;

        let assembled = self.assemble();
        let artifacts = generator.render(&assembled)?;
        fs::create_dir_all(build_dir).map_err(|e| IsaError::io(build_dir, e))?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = build_dir.join(&artifact.file_name);
            let outcome = write_if_changed(&path, &artifact.bytes)?;
            info!(path = %path.display(), ?outcome, "artifact");
            written.push((path, outcome));
        }
        Ok(Generation::Generated(written))
    }
}

/// The frozen decode structure handed to artifact generators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssembledIsa {
    name: String,
    isa: String,
    word_size: WordSize,
    branches: Vec<DecodeBranch>,
}

impl AssembledIsa {
    /// Identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Artifact base name, `isa_<name>`.
    pub fn full_name(&self) -> String {
        format!("isa_{}", self.name)
    }

    /// ISA descriptor.
    pub fn isa(&self) -> &str {
        &self.isa
    }

    /// Word size.
    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    /// Branches in decode priority order, privilege branch last.
    pub fn branches(&self) -> &[DecodeBranch] {
        &self.branches
    }

    /// Every instruction in priority order with its branch key and subset.
    pub fn descriptors(&self) -> impl Iterator<Item = (&str, &ExtensionSubset, &InsnDescriptor)> {
        self.branches.iter().flat_map(|branch| {
            branch.subsets().iter().flat_map(move |subset| {
                subset
                    .descriptors()
                    .iter()
                    .map(move |d| (branch.key(), subset.as_ref(), d))
            })
        })
    }

    /// Decodes one instruction word with the reference matcher.
    pub fn decode(&self, word: u32) -> Option<DecodedInsn<'_>> {
        decode::decode(&self.branches, word)
    }
}
