//! # Artifact Emission Tests
//!
//! Verifies the built-in table generator, write-if-changed promotion and the
//! at-most-once generation guard.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rvsim_isagen::emit::{STAGING_SUFFIX, staging_path, write_if_changed};
use rvsim_isagen::isa::{ExtensionSubset, FormatCatalog, InsnSpec};
use rvsim_isagen::{
    Artifact, ArtifactGenerator, DecodeBranch, Generation, IsaAssembler, IsaError,
    PrivilegeFlags, TableGenerator, WriteOutcome,
};
use tempfile::tempdir;

use crate::common::{LIBRARY, MockGenerator, assemble, init_tracing};

fn fresh_assembler(isa: &str) -> IsaAssembler {
    IsaAssembler::with_library("core", isa, PrivilegeFlags::ALL, LIBRARY.clone()).unwrap()
}

fn custom_assembler(pattern: &'static str) -> IsaAssembler {
    let catalog = FormatCatalog::new().unwrap();
    let specs = [InsnSpec::new("custom.op", "R", pattern)];
    let subset = ExtensionSubset::build("custom", 32, &specs, &catalog).unwrap();
    let mut assembler = fresh_assembler("rv32i");
    assembler.add_branch(DecodeBranch::new("xcustom", vec![Arc::new(subset)]));
    assembler
}

fn outcomes(written: &[(PathBuf, WriteOutcome)]) -> Vec<WriteOutcome> {
    written.iter().map(|(_, outcome)| *outcome).collect()
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_table_generator_artifacts() {
    let isa = assemble("rv32imc", &["v"]);
    let artifacts = TableGenerator::new().render(&isa).unwrap();
    let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, ["isa_core.rs", "isa_core.json"]);

    let source = String::from_utf8(artifacts[0].bytes.clone()).unwrap();
    assert!(source.contains("pub const WORD_SIZE: u32 = 32;"));
    assert!(source.contains("pub const BRANCH_0_I: &[Entry] = &["));
    assert!(source.contains("pub const BRANCH_3_V: &[Entry] = &["));
    assert!(source.contains("(\"priv\", BRANCH_4_PRIV),"));
    assert!(source.contains(
        "mnemonic: \"addi\", label: \"nop\", subset: \"rv32i\", format: \"Z\", width: 32, \
         mask: 0xffffffff, matches: 0x00000013"
    ));
    assert!(source.contains("subset: \"rv32c\", format: \"CL\", width: 16, mask: 0xe003"));
}

#[test]
fn test_table_generator_is_deterministic() {
    let isa = assemble("rv64imafdc", &[]);
    let generator = TableGenerator::new();
    assert_eq!(generator.render(&isa).unwrap(), generator.render(&isa).unwrap());
}

#[test]
fn test_manifest_describes_structure() {
    let isa = assemble("rv64imc", &[]);
    let json = TableGenerator::render_manifest(&isa).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

    assert_eq!(value["name"], "core");
    assert_eq!(value["isa"], "rv64imc");
    assert_eq!(value["generator"], "rvsim-isagen");
    let branches = value["branches"].as_array().unwrap();
    assert_eq!(branches.len(), 4);
    assert_eq!(branches[0]["key"], "i");
    assert_eq!(branches[0]["subsets"][0]["name"], "rv64i");
    assert_eq!(branches[3]["key"], "priv");
}

#[test]
fn test_write_if_changed_outcomes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.rs");

    assert_eq!(write_if_changed(&path, b"one").unwrap(), WriteOutcome::Created);
    assert_eq!(write_if_changed(&path, b"one").unwrap(), WriteOutcome::Unchanged);
    assert_eq!(write_if_changed(&path, b"two").unwrap(), WriteOutcome::Updated);
    assert_eq!(fs::read(&path).unwrap(), b"two");
    assert_eq!(dir_entries(dir.path()), ["table.rs"]);
}

#[test]
fn test_staging_path() {
    let path = Path::new("build/isa_core.rs");
    assert_eq!(
        staging_path(path),
        Path::new(&format!("build/isa_core.rs.{STAGING_SUFFIX}"))
    );
}

#[test]
fn test_generate_creates_then_preserves_mtime() {
    init_tracing();
    let dir = tempdir().unwrap();
    let build = dir.path().join("nested/build");

    let mut first = fresh_assembler("rv32imfc");
    let Generation::Generated(written) = first.generate(&TableGenerator, &build).unwrap() else {
        panic!("first run must generate");
    };
    assert!(written.iter().all(|(_, o)| *o == WriteOutcome::Created));
    assert_eq!(dir_entries(&build), ["isa_core.json", "isa_core.rs"]);

    let source = build.join("isa_core.rs");
    let before = fs::metadata(&source).unwrap().modified().unwrap();

    let mut second = fresh_assembler("rv32imfc");
    let Generation::Generated(written) = second.generate(&TableGenerator, &build).unwrap() else {
        panic!("a fresh assembler must generate");
    };
    assert!(written.iter().all(|(_, o)| *o == WriteOutcome::Unchanged));
    assert_eq!(fs::metadata(&source).unwrap().modified().unwrap(), before);
    assert_eq!(dir_entries(&build), ["isa_core.json", "isa_core.rs"]);
}

#[test]
fn test_one_template_bit_rewrites_each_artifact_once() {
    let dir = tempdir().unwrap();
    let mut first = custom_assembler("0000000 ----- ----- 000 ----- 0001011");
    let _ = first.generate(&TableGenerator, dir.path()).unwrap();
    let before = fs::read(dir.path().join("isa_core.rs")).unwrap();

    let mut second = custom_assembler("0000001 ----- ----- 000 ----- 0001011");
    let Generation::Generated(written) = second.generate(&TableGenerator, dir.path()).unwrap()
    else {
        panic!("a fresh assembler must generate");
    };
    assert_eq!(outcomes(&written), [WriteOutcome::Updated, WriteOutcome::Updated]);
    let after = fs::read(dir.path().join("isa_core.rs")).unwrap();
    assert_ne!(before, after);
    assert!(String::from_utf8(after).unwrap().contains("mask: 0xfe00707f, matches: 0x0200000b"));

    let mut third = custom_assembler("0000001 ----- ----- 000 ----- 0001011");
    let Generation::Generated(written) = third.generate(&TableGenerator, dir.path()).unwrap()
    else {
        panic!("a fresh assembler must generate");
    };
    assert_eq!(outcomes(&written), [WriteOutcome::Unchanged, WriteOutcome::Unchanged]);
    assert_eq!(dir_entries(dir.path()), ["isa_core.json", "isa_core.rs"]);
}

#[test]
fn test_unreadable_target_discards_staging_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("isa_core.rs");
    fs::create_dir(&target).unwrap();

    let err = write_if_changed(&target, b"table").unwrap_err();
    assert!(matches!(err, IsaError::Io { ref path, .. } if *path == target), "{err}");
    assert!(!staging_path(&target).exists());
    assert_eq!(dir_entries(dir.path()), ["isa_core.rs"]);
}

#[test]
fn test_generator_runs_at_most_once() {
    let dir = tempdir().unwrap();
    let mut generator = MockGenerator::new();
    let _ = generator
        .expect_render()
        .times(1)
        .returning(|isa| Ok(vec![Artifact::new(format!("{}.txt", isa.full_name()), "x")]));

    let mut assembler = fresh_assembler("rv32i");
    let first = assembler.generate(&generator, dir.path()).unwrap();
    assert_eq!(
        first,
        Generation::Generated(vec![(
            dir.path().join("isa_core.txt"),
            WriteOutcome::Created
        )])
    );
    assert!(assembler.is_generated());
    assert_eq!(
        assembler.generate(&generator, dir.path()).unwrap(),
        Generation::AlreadyGenerated
    );
}

#[test]
fn test_failed_render_still_marks_generated() {
    let dir = tempdir().unwrap();
    let mut generator = MockGenerator::new();
    let _ = generator.expect_render().times(1).returning(|_| {
        Err(IsaError::Render {
            artifact: "isa_core.rs".to_owned(),
            reason: "boom".to_owned(),
        })
    });

    let mut assembler = fresh_assembler("rv32i");
    let err = assembler.generate(&generator, dir.path()).unwrap_err();
    assert!(matches!(err, IsaError::Render { .. }));
    assert!(assembler.is_generated());
    assert_eq!(
        assembler.generate(&generator, dir.path()).unwrap(),
        Generation::AlreadyGenerated
    );
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn test_unwritable_build_dir_is_an_io_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, b"").unwrap();

    let mut assembler = fresh_assembler("rv32i");
    let err = assembler
        .generate(&TableGenerator, &blocker.join("build"))
        .unwrap_err();
    assert!(matches!(err, IsaError::Io { .. }), "{err}");
}
