//! Artifact generation boundary and idempotent file promotion.
//!
//! Generators turn an [`AssembledIsa`] into named file contents. Promotion is
//! separate and generator-agnostic: [`write_if_changed`] stages the new
//! contents next to the target and only replaces the target when the bytes
//! differ, so unchanged artifacts keep their modification time and do not
//! trigger downstream rebuilds.

/// Built-in Rust table and JSON manifest renderer.
mod table;

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::assembler::AssembledIsa;
use crate::common::{IsaError, Result};

pub use table::TableGenerator;

/// Suffix of the staging file written next to each artifact.
pub const STAGING_SUFFIX: &str = "new";

/// One rendered output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the build directory.
    pub file_name: String,
    /// Full file contents.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Creates an artifact.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Renders the assembled decode structure into artifacts.
///
/// Implementations must be deterministic: the same input yields the same
/// bytes, otherwise write-if-changed promotion cannot avoid rewrites.
pub trait ArtifactGenerator {
    /// Renders every artifact for `isa`.
    fn render(&self, isa: &AssembledIsa) -> Result<Vec<Artifact>>;
}

/// What [`write_if_changed`] did to the final path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The file did not exist and was created.
    Created,
    /// The file existed with different contents and was replaced.
    Updated,
    /// The file already had these contents and was left untouched.
    Unchanged,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        })
    }
}

/// Path of the staging file for `path`.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".");
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

/// Writes `bytes` to `path` only if its contents would change.
///
/// The contents are first written to a staging file (`<path>.new`). The
/// staging file is then renamed over `path` when `path` is missing or differs,
/// and deleted otherwise.
///
/// # Arguments
///
/// * `path` - Final artifact path.
/// * `bytes` - Freshly rendered contents.
///
/// # Returns
///
/// The outcome, or [`IsaError::Io`] on any filesystem failure.
pub fn write_if_changed(path: &Path, bytes: &[u8]) -> Result<WriteOutcome> {
    let staging = staging_path(path);
    fs::write(&staging, bytes).map_err(|e| discard(&staging, IsaError::io(&staging, e)))?;

    let outcome = match fs::read(path) {
        Ok(current) if current == bytes => WriteOutcome::Unchanged,
        Ok(_) => WriteOutcome::Updated,
        Err(e) if e.kind() == ErrorKind::NotFound => WriteOutcome::Created,
        Err(e) => return Err(discard(&staging, IsaError::io(path, e))),
    };

    if outcome == WriteOutcome::Unchanged {
        fs::remove_file(&staging).map_err(|e| IsaError::io(&staging, e))?;
    } else {
        fs::rename(&staging, path).map_err(|e| discard(&staging, IsaError::io(path, e)))?;
    }
    Ok(outcome)
}

/// Removes a staging file left behind by a failed promotion and passes `err` on.
fn discard(staging: &Path, err: IsaError) -> IsaError {
    if let Err(e) = fs::remove_file(staging)
        && e.kind() != ErrorKind::NotFound
    {
        warn!(path = %staging.display(), error = %e, "could not remove staging file");
    }
    err
}
