//! Configuration for catalog generation.
//!
//! This module defines the inputs of one generation run. It provides:
//! 1. **Defaults:** Baseline values used when a field is omitted.
//! 2. **Structures:** [`GeneratorConfig`], deserialized from JSON, and the
//!    [`PrivilegeFlags`] it carries.
//!
//! Every switch that changes the generated catalog is a field here, threaded
//! through construction. Nothing is read from the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::{IsaError, Result};

/// Default configuration values.
mod defaults {
    /// Identifier the generated artifacts are named after.
    pub const NAME: &str = "core";

    /// ISA descriptor of a small embedded core.
    pub const ISA: &str = "rv32imfc";

    /// Output directory for generated artifacts.
    pub const BUILD_DIR: &str = "build";
}

/// Selection of the privilege decode branches.
///
/// Each flag adds one subset to the privilege branch, which is always decoded
/// after every extension branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivilegeFlags {
    /// CSR access instructions.
    #[serde(default = "enabled")]
    pub privileged: bool,

    /// `sret`, `mret`, `dret` and `wfi`.
    #[serde(default = "enabled")]
    pub trap_return: bool,

    /// `sfence.vma`.
    #[serde(default = "enabled")]
    pub supervisor_mmu: bool,
}

impl PrivilegeFlags {
    /// Every privilege branch enabled.
    pub const ALL: Self = Self {
        privileged: true,
        trap_return: true,
        supervisor_mmu: true,
    };

    /// No privilege branch.
    pub const NONE: Self = Self {
        privileged: false,
        trap_return: false,
        supervisor_mmu: false,
    };

    /// Whether any privilege subset is selected.
    pub const fn any(self) -> bool {
        self.privileged || self.trap_return || self.supervisor_mmu
    }
}

impl Default for PrivilegeFlags {
    fn default() -> Self {
        Self::ALL
    }
}

const fn enabled() -> bool {
    true
}

/// Inputs of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Identifier; artifacts are named `isa_<name>.*`.
    #[serde(default = "GeneratorConfig::default_name")]
    pub name: String,

    /// ISA descriptor such as `rv64imafdc`.
    #[serde(default = "GeneratorConfig::default_isa")]
    pub isa: String,

    /// Directory receiving the generated artifacts.
    #[serde(default = "GeneratorConfig::default_build_dir")]
    pub build_dir: PathBuf,

    /// Privilege branch selection.
    #[serde(flatten)]
    pub privilege: PrivilegeFlags,

    /// Trace compressed instructions under their 32-bit mnemonics.
    #[serde(default)]
    pub uncompressed_labels: bool,

    /// Custom extension keys appended after the descriptor's branches, in order.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl GeneratorConfig {
    fn default_name() -> String {
        defaults::NAME.to_owned()
    }

    fn default_isa() -> String {
        defaults::ISA.to_owned()
    }

    fn default_build_dir() -> PathBuf {
        PathBuf::from(defaults::BUILD_DIR)
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON object; omitted fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| IsaError::io(path, e))?;
        Self::from_json_str(&text)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            isa: Self::default_isa(),
            build_dir: Self::default_build_dir(),
            privilege: PrivilegeFlags::default(),
            uncompressed_labels: false,
            extensions: Vec::new(),
        }
    }
}
