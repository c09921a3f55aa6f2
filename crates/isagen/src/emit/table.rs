//! Built-in artifact generator.
//!
//! Renders two artifacts named after the assembled ISA:
//! 1. **`isa_<name>.rs`:** Rust decode tables, one `const` slice of entries per
//!    branch in priority order, plus a `BRANCHES` index.
//! 2. **`isa_<name>.json`:** A serde manifest of the complete structure,
//!    including every operand layout.

use std::fmt::{self, Write};

use serde::Serialize;

use super::{Artifact, ArtifactGenerator};
use crate::assembler::{AssembledIsa, DecodeBranch};
use crate::common::{IsaError, Result};

/// Name recorded in generated file headers.
const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Renders Rust decode tables and a JSON manifest.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableGenerator;

impl TableGenerator {
    /// Creates the generator.
    pub const fn new() -> Self {
        Self
    }

    /// Renders the Rust table source.
    pub fn render_source(isa: &AssembledIsa) -> std::result::Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "// Generated by {GENERATOR_NAME} for `{}`. Do not edit.", isa.isa())?;
        writeln!(out)?;
        writeln!(out, "/// A decode table entry.")?;
        writeln!(out, "#[derive(Clone, Copy, Debug, PartialEq, Eq)]")?;
        writeln!(out, "pub struct Entry {{")?;
        for (field, ty) in [
            ("mnemonic", "&'static str"),
            ("label", "&'static str"),
            ("subset", "&'static str"),
            ("format", "&'static str"),
            ("width", "u8"),
            ("mask", "u32"),
            ("matches", "u32"),
            ("decode", "Option<&'static str>"),
            ("map_to", "Option<&'static str>"),
            ("fast_path", "bool"),
        ] {
            writeln!(out, "    pub {field}: {ty},")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "/// Native integer width of the core.")?;
        writeln!(out, "pub const WORD_SIZE: u32 = {};", isa.word_size().bits())?;

        let names: Vec<String> = isa
            .branches()
            .iter()
            .enumerate()
            .map(|(idx, branch)| const_name(idx, branch))
            .collect();

        for (branch, name) in isa.branches().iter().zip(&names) {
            writeln!(out)?;
            writeln!(out, "/// Decode branch `{}`.", branch.key())?;
            writeln!(out, "pub const {name}: &[Entry] = &[")?;
            for subset in branch.subsets() {
                for d in subset.descriptors() {
                    let digits = usize::from(d.width() / 4);
                    writeln!(
                        out,
                        "    Entry {{ mnemonic: {:?}, label: {:?}, subset: {:?}, format: {:?}, \
                         width: {}, mask: {:#0w$x}, matches: {:#0w$x}, decode: {:?}, \
                         map_to: {:?}, fast_path: {} }},",
                        d.mnemonic,
                        d.trace_label(),
                        subset.name(),
                        d.format,
                        d.width(),
                        d.template.mask,
                        d.template.matches,
                        d.decode,
                        d.map_to,
                        d.fast_path,
                        w = digits + 2,
                    )?;
                }
            }
            writeln!(out, "];")?;
        }

        writeln!(out)?;
        writeln!(out, "/// Branches in decode priority order.")?;
        writeln!(out, "pub const BRANCHES: &[(&str, &[Entry])] = &[")?;
        for (branch, name) in isa.branches().iter().zip(&names) {
            writeln!(out, "    ({:?}, {name}),", branch.key())?;
        }
        writeln!(out, "];")?;
        Ok(out)
    }

    /// Renders the JSON manifest.
    pub fn render_manifest(isa: &AssembledIsa) -> serde_json::Result<Vec<u8>> {
        #[derive(Serialize)]
        struct Manifest<'a> {
            generator: &'static str,
            version: &'static str,
            #[serde(flatten)]
            isa: &'a AssembledIsa,
        }

        let mut bytes = serde_json::to_vec_pretty(&Manifest {
            generator: GENERATOR_NAME,
            version: env!("CARGO_PKG_VERSION"),
            isa,
        })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl ArtifactGenerator for TableGenerator {
    fn render(&self, isa: &AssembledIsa) -> Result<Vec<Artifact>> {
        let base = isa.full_name();
        let source_name = format!("{base}.rs");
        let manifest_name = format!("{base}.json");

        let source = Self::render_source(isa).map_err(|e| IsaError::Render {
            artifact: source_name.clone(),
            reason: e.to_string(),
        })?;
        let manifest = Self::render_manifest(isa).map_err(|e| IsaError::Render {
            artifact: manifest_name.clone(),
            reason: e.to_string(),
        })?;

        Ok(vec![
            Artifact::new(source_name, source),
            Artifact::new(manifest_name, manifest),
        ])
    }
}

/// Constant name of a branch table, unique even for repeated keys.
fn const_name(idx: usize, branch: &DecodeBranch) -> String {
    let key: String = branch
        .key()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("BRANCH_{idx}_{key}")
}
