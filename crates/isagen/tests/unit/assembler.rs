//! # ISA Assembler Tests
//!
//! Verifies descriptor parsing, word-size-aware subset selection, custom
//! branch augmentation and the placement of the privilege branch.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_isagen::isa::{ExtensionSubset, FormatCatalog, InsnSpec, SubsetId};
use rvsim_isagen::{
    DecodeBranch, GeneratorConfig, IsaAssembler, IsaError, PrivilegeFlags, WordSize,
};

use crate::common::{LIBRARY, init_tracing};

fn assembler(isa: &str, privilege: PrivilegeFlags) -> IsaAssembler {
    IsaAssembler::with_library("core", isa, privilege, LIBRARY.clone()).unwrap()
}

fn keys(assembler: &IsaAssembler) -> Vec<String> {
    assembler
        .assemble()
        .branches()
        .iter()
        .map(|b| b.key().to_owned())
        .collect()
}

fn subset_names(branch: &DecodeBranch) -> Vec<&'static str> {
    branch.subsets().iter().map(|s| s.name()).collect()
}

#[rstest]
#[case("rv128i")]
#[case("RV32I")]
#[case("imafdc")]
#[case("")]
fn test_invalid_prefix(#[case] isa: &str) {
    let err = IsaAssembler::new("core", isa, PrivilegeFlags::ALL).unwrap_err();
    assert!(matches!(err, IsaError::InvalidIsaPrefix { isa: ref got } if got == isa));
    assert!(err.to_string().contains("rv32 or rv64"));
}

#[rstest]
#[case("rv32imfc", WordSize::Rv32, &["i", "m", "f", "c", "priv"])]
#[case("rv64imafdc", WordSize::Rv64, &["i", "m", "a", "f", "d", "c", "priv"])]
#[case("rv32", WordSize::Rv32, &["priv"])]
#[case("rv32ii", WordSize::Rv32, &["i", "i", "priv"])]
fn test_branch_order_follows_descriptor(
    #[case] isa: &str,
    #[case] word_size: WordSize,
    #[case] expected: &[&str],
) {
    let assembler = assembler(isa, PrivilegeFlags::ALL);
    assert_eq!(assembler.word_size(), word_size);
    assert_eq!(keys(&assembler), expected);
}

#[rstest]
#[case("rv32i", &["rv32i"])]
#[case("rv64i", &["rv64i", "rv32i"])]
#[case("rv32m", &["rv32m"])]
#[case("rv64m", &["rv64m", "rv32m"])]
#[case("rv32a", &["rv32a"])]
#[case("rv64a", &["rv64a", "rv32a"])]
#[case("rv32c", &["rv32c"])]
#[case("rv64c", &["rv64c"])]
#[case("rv64f", &["rv32f"])]
#[case("rv64d", &["rv32d"])]
fn test_subsets_per_word_size(#[case] isa: &str, #[case] expected: &[&str]) {
    let assembler = assembler(isa, PrivilegeFlags::NONE);
    let isa = assembler.assemble();
    assert_eq!(isa.branches().len(), 1);
    assert_eq!(subset_names(&isa.branches()[0]), expected);
}

#[test]
fn test_rv64i_instruction_count() {
    let isa = assembler("rv64i", PrivilegeFlags::NONE).assemble();
    assert_eq!(isa.branches()[0].instruction_count(), 15 + 42);
}

#[test]
fn test_terminator_stops_parsing() {
    let assembler = assembler("rv32imXfdc", PrivilegeFlags::ALL);
    assert_eq!(keys(&assembler), ["i", "m", "priv"]);
}

#[test]
fn test_unknown_letters_are_skipped() {
    init_tracing();
    let assembler = assembler("rv32igzm_c", PrivilegeFlags::ALL);
    assert_eq!(keys(&assembler), ["i", "m", "c", "priv"]);
}

#[rstest]
fn test_privilege_branch_is_always_last(
    #[values(false, true)] privileged: bool,
    #[values(false, true)] trap_return: bool,
    #[values(false, true)] supervisor_mmu: bool,
) {
    let flags = PrivilegeFlags {
        privileged,
        trap_return,
        supervisor_mmu,
    };
    let mut assembler = assembler("rv32imc", flags);
    assembler.add_extension("v").unwrap();
    assembler.add_extension("pulpv2").unwrap();

    let isa = assembler.assemble();
    let expected: Vec<&str> = [
        (privileged, "priv"),
        (trap_return, "trap_return"),
        (supervisor_mmu, "priv_smmu"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    let last = isa.branches().last().unwrap();
    if flags.any() {
        assert_eq!(isa.branches().len(), 6);
        assert_eq!(last.key(), "priv");
        assert_eq!(subset_names(last), expected);
    } else {
        assert_eq!(isa.branches().len(), 5);
        assert_eq!(last.key(), "pulpv2");
        assert!(expected.is_empty());
    }
    assert_eq!(assembler.extension_branches().len(), 5);
}

#[test]
fn test_custom_extensions_keep_insertion_order() {
    let mut assembler = assembler("rv32imfc", PrivilegeFlags::ALL);
    for key in ["f16", "v", "corev"] {
        assembler.add_extension(key).unwrap();
    }
    assert_eq!(
        keys(&assembler),
        ["i", "m", "f", "c", "f16", "v", "corev", "priv"]
    );
}

#[test]
fn test_unknown_extension_key() {
    let mut assembler = assembler("rv32i", PrivilegeFlags::ALL);
    let err = assembler.add_extension("quantum").unwrap_err();
    assert!(matches!(err, IsaError::UnknownExtension { ref key } if key == "quantum"));
    assert_eq!(keys(&assembler), ["i", "priv"]);
}

#[test]
fn test_add_prebuilt_branch() {
    let catalog = FormatCatalog::new().unwrap();
    let specs = [InsnSpec::new("custom.op", "R", "0000000 ----- ----- 000 ----- 0001011")];
    let subset = ExtensionSubset::build("custom", 32, &specs, &catalog).unwrap();

    let mut assembler = assembler("rv32i", PrivilegeFlags::ALL);
    assembler.add_branch(DecodeBranch::new("xcustom", vec![Arc::new(subset)]));
    assert_eq!(keys(&assembler), ["i", "xcustom", "priv"]);

    let isa = assembler.assemble();
    let insn = isa.decode(0x00B5_050B).unwrap();
    assert_eq!(insn.branch, "xcustom");
    assert_eq!(insn.descriptor.mnemonic, "custom.op");
}

#[test]
fn test_from_config() {
    let config = GeneratorConfig {
        name: "cluster".to_owned(),
        isa: "rv32imfcXpulpv2".to_owned(),
        privilege: PrivilegeFlags {
            supervisor_mmu: false,
            ..PrivilegeFlags::ALL
        },
        extensions: vec!["pulpv2".to_owned(), "f16".to_owned()],
        ..GeneratorConfig::default()
    };
    let assembler = IsaAssembler::from_config(&config).unwrap();
    assert_eq!(assembler.name(), "cluster");
    assert_eq!(assembler.isa(), "rv32imfcXpulpv2");
    assert_eq!(
        keys(&assembler),
        ["i", "m", "f", "c", "pulpv2", "f16", "priv"]
    );

    let isa = assembler.assemble();
    assert_eq!(isa.full_name(), "isa_cluster");
    let privilege = isa.branches().last().unwrap();
    assert_eq!(subset_names(privilege), ["priv", "trap_return"]);
}

#[test]
fn test_from_config_rejects_unknown_extension() {
    let config = GeneratorConfig {
        extensions: vec!["nope".to_owned()],
        ..GeneratorConfig::default()
    };
    let err = IsaAssembler::from_config(&config).unwrap_err();
    assert!(matches!(err, IsaError::UnknownExtension { .. }));
}

#[test]
fn test_assembled_descriptors_in_priority_order() {
    let isa = assembler("rv64imc", PrivilegeFlags::ALL).assemble();
    let total: usize = isa.branches().iter().map(DecodeBranch::instruction_count).sum();
    assert_eq!(isa.descriptors().count(), total);

    let (branch, subset, first) = isa.descriptors().next().unwrap();
    assert_eq!(branch, "i");
    assert_eq!(subset.name(), "rv64i");
    assert_eq!(first.mnemonic, LIBRARY.get(SubsetId::Rv64i).descriptors()[0].mnemonic);

    let (branch, _, _) = isa.descriptors().last().unwrap();
    assert_eq!(branch, "priv");
}

#[test]
fn test_word_size_display_and_split() {
    assert_eq!(WordSize::Rv32.to_string(), "rv32");
    assert_eq!(WordSize::Rv64.bits(), 64);
    assert_eq!(
        WordSize::split_descriptor("rv64gc").unwrap(),
        (WordSize::Rv64, "gc")
    );
    assert!(WordSize::Rv32.standard_subsets('g').is_none());
    assert_eq!(
        WordSize::Rv64.standard_subsets('i'),
        Some(&[SubsetId::Rv64i, SubsetId::Rv32i][..])
    );
}

#[test]
fn test_assembler_accessors() {
    let assembler = IsaAssembler::new("core", "rv32i", PrivilegeFlags::NONE).unwrap();
    assert_eq!(assembler.name(), "core");
    assert_eq!(assembler.privilege(), PrivilegeFlags::NONE);
    assert!(!assembler.is_generated());
    assert_eq!(assembler.library().iter().count(), SubsetId::ALL.len());
    assert_eq!(keys(&assembler), ["i"]);
}
