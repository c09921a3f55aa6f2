//! # Extension Subset Tests
//!
//! Verifies that every table resolves against the catalog and honours the
//! structural rules: template width, operand bits inside the word, no operand
//! reading a fixed bit, and hidden operands mirroring displayed ones.

use rstest::rstest;
use rvsim_isagen::IsaError;
use rvsim_isagen::isa::field::{FieldSource, range, ranges};
use rvsim_isagen::isa::insn::{COMPRESSED_WIDTH, STANDARD_WIDTH};
use rvsim_isagen::isa::{
    ExtensionLibrary, ExtensionSubset, FormatCatalog, InsnSpec, Operand, SubsetId, Template,
};

use crate::common::LIBRARY;

#[rstest]
#[case(SubsetId::Rv32i, 42)]
#[case(SubsetId::Rv64i, 15)]
#[case(SubsetId::Rv32m, 8)]
#[case(SubsetId::Rv64m, 5)]
#[case(SubsetId::Rv32a, 11)]
#[case(SubsetId::Rv64a, 11)]
#[case(SubsetId::Rv32f, 30)]
#[case(SubsetId::Rv32d, 32)]
#[case(SubsetId::Rv32c, 33)]
#[case(SubsetId::Rv64c, 39)]
#[case(SubsetId::Zcmp, 4)]
#[case(SubsetId::Priv, 6)]
#[case(SubsetId::TrapReturn, 4)]
#[case(SubsetId::PrivSmmu, 1)]
#[case(SubsetId::Xf16, 32)]
#[case(SubsetId::Xf16alt, 32)]
#[case(SubsetId::Xf8, 36)]
#[case(SubsetId::Xfvec, 136)]
#[case(SubsetId::Xfaux, 24)]
#[case(SubsetId::Vector, 196)]
#[case(SubsetId::PulpV2, 307)]
#[case(SubsetId::CoreV, 102)]
#[case(SubsetId::PulpNn, 99)]
#[case(SubsetId::RnnExt, 4)]
#[case(SubsetId::Gap9, 21)]
#[case(SubsetId::Int64, 43)]
fn test_subset_sizes(#[case] id: SubsetId, #[case] expected: usize) {
    let subset = LIBRARY.get(id);
    assert_eq!(subset.len(), expected, "subset {}", id.name());
    assert_eq!(subset.len(), id.table().len());
    assert_eq!(subset.name(), id.name());
}

#[test]
fn test_every_descriptor_respects_width_and_overlap() {
    for (id, subset) in LIBRARY.iter() {
        assert!(!subset.is_empty());
        assert_eq!(subset.width(), id.width());
        for d in subset.descriptors() {
            assert_eq!(d.width(), subset.width(), "{}", d.mnemonic);
            assert_eq!(d.template.matches & !d.template.mask, 0, "{}", d.mnemonic);

            let read = d.operand_bits();
            assert_eq!(read & !u64::from(d.template.full_mask()), 0, "{}", d.mnemonic);
            assert_eq!(read as u32 & d.template.mask, 0, "{}", d.mnemonic);
        }
    }
}

#[test]
fn test_compressed_subsets_are_sixteen_bits() {
    for id in SubsetId::ALL {
        let expected = if id.is_compressed() {
            COMPRESSED_WIDTH
        } else {
            STANDARD_WIDTH
        };
        assert_eq!(id.width(), expected, "{}", id.name());
    }
    assert!(SubsetId::Zcmp.is_compressed());
    assert!(!SubsetId::Vector.is_compressed());
}

#[test]
fn test_template_parse() {
    let t = Template::parse("addi", "------- ----- ----- 000 ----- 0010011").unwrap();
    assert_eq!(t.width, 32);
    assert_eq!(t.mask, 0x0000_707F);
    assert_eq!(t.matches, 0x0000_0013);
    assert_eq!(t.fixed_bits(), 10);
    assert_eq!(t.full_mask(), u32::MAX);

    let c = Template::parse("c.nop", "000 000 000 00 000 01").unwrap();
    assert_eq!(c.width, 16);
    assert_eq!(c.full_mask(), 0xFFFF);
    assert!(c.matches(0x0001));
    assert!(!c.matches(0x0005));
}

#[rstest]
#[case("------- ----- ----- 0x0 ----- 0010011")]
#[case("")]
#[case("000000000000000000000000000000000")]
fn test_template_rejects_malformed_patterns(#[case] pattern: &str) {
    let err = Template::parse("bad", pattern).unwrap_err();
    assert!(matches!(err, IsaError::InvalidTemplate { .. }), "{err}");
}

#[test]
fn test_width_mismatch_is_rejected() {
    let catalog = FormatCatalog::new().unwrap();
    let specs = [InsnSpec::new("addi", "I", "------- ----- ----- 000 ----- 0010011")];
    let err = ExtensionSubset::build("narrow", COMPRESSED_WIDTH, &specs, &catalog).unwrap_err();
    assert!(matches!(
        err,
        IsaError::TemplateWidth {
            expected: 16,
            found: 32,
            ..
        }
    ));
}

#[test]
fn test_unknown_format_is_rejected() {
    let catalog = FormatCatalog::new().unwrap();
    let specs = [InsnSpec::new("odd", "NOPE", "------- ----- ----- 000 ----- 0010011")];
    let err = ExtensionSubset::build("odd", STANDARD_WIDTH, &specs, &catalog).unwrap_err();
    assert!(matches!(err, IsaError::UnknownFormat { .. }));
}

#[test]
fn test_operand_reading_fixed_bit_is_rejected() {
    let catalog = FormatCatalog::new().unwrap();
    // rd is fixed to zero but the R layout still reads it.
    let specs = [InsnSpec::new("add0", "R", "0000000 ----- ----- 000 00000 0110011")];
    let err = ExtensionSubset::build("bad", STANDARD_WIDTH, &specs, &catalog).unwrap_err();
    assert!(matches!(err, IsaError::FixedBitOverlap { bits: 0x0F80, .. }), "{err}");
}

#[test]
fn test_operand_outside_word_is_rejected() {
    let mut catalog = FormatCatalog::empty();
    catalog
        .define("WIDE", vec![Operand::uimm(0, range(14, 4))])
        .unwrap();
    let specs = [InsnSpec::new("c.wide", "WIDE", "00 ---- ------ -- 01")];
    let err = ExtensionSubset::build("bad", COMPRESSED_WIDTH, &specs, &catalog).unwrap_err();
    assert!(
        matches!(err, IsaError::OperandOutOfRange { bit: 16, width: 16, .. }),
        "{err}"
    );
}

#[rstest]
#[case(range(64, 1), 64)]
#[case(range(200, 8), 200)]
#[case(ranges(&[(7, 1, 1), (30, 4, 2)]), 32)]
fn test_operand_past_any_word_is_rejected(
    #[case] source: FieldSource,
    #[case] bit: u8,
) {
    let mut catalog = FormatCatalog::empty();
    catalog.define("FAR", vec![Operand::uimm(0, source)]).unwrap();
    let specs = [InsnSpec::new("far", "FAR", "------- ----- ----- 000 ----- 0001011")];
    let err = ExtensionSubset::build("bad", STANDARD_WIDTH, &specs, &catalog).unwrap_err();
    assert!(
        matches!(err, IsaError::OperandOutOfRange { bit: b, width: 32, .. } if b == bit),
        "{err}"
    );
}

#[test]
fn test_chunk_placed_past_value_width_is_rejected() {
    let mut catalog = FormatCatalog::empty();
    catalog
        .define("SHIFTED", vec![Operand::uimm(0, ranges(&[(7, 1, 70)]))])
        .unwrap();
    let specs = [InsnSpec::new("shifted", "SHIFTED", "------- ----- ----- 000 ----- 0001011")];
    let err = ExtensionSubset::build("bad", STANDARD_WIDTH, &specs, &catalog).unwrap_err();
    assert!(matches!(err, IsaError::FieldOverflow { end: 71, .. }), "{err}");
}

#[test]
fn test_unmirrored_hidden_operand_is_rejected() {
    let mut catalog = FormatCatalog::empty();
    catalog
        .define(
            "HID",
            vec![
                Operand::out_reg(0, range(7, 5)),
                Operand::in_reg(2, range(15, 5)).hidden(),
            ],
        )
        .unwrap();
    let specs = [InsnSpec::new("hid", "HID", "------- 00000 ----- 000 ----- 0001011")];
    let err = ExtensionSubset::build("bad", STANDARD_WIDTH, &specs, &catalog).unwrap_err();
    assert!(matches!(err, IsaError::HiddenOperandUnmatched { slot: 2, .. }), "{err}");
}

#[test]
fn test_find_returns_first_row() {
    let rv32i = LIBRARY.get(SubsetId::Rv32i);
    let addi = rv32i.find("addi").unwrap();
    assert_eq!(addi.format, "I");
    assert_eq!(addi.trace_label(), "addi");
    assert!(rv32i.find("mul").is_none());
}

#[test]
fn test_nop_alias_beats_generic_addi() {
    let rv32i = LIBRARY.get(SubsetId::Rv32i);
    let hit = rv32i.match_word(0x0000_0013).unwrap();
    assert_eq!(hit.trace_label(), "nop");
    assert_eq!(hit.map_to, Some("nop"));

    let addi = rv32i.match_word(0x0010_0093).unwrap();
    assert_eq!(addi.trace_label(), "addi");
}

#[test]
fn test_uncompressed_labels_apply_to_both_compressed_subsets() {
    let library = ExtensionLibrary::new(true).unwrap();
    let rv32c = library.get(SubsetId::Rv32c);
    let rv64c = library.get(SubsetId::Rv64c);

    assert_eq!(rv32c.find("c.lw").unwrap().trace_label(), "lw");
    assert_eq!(rv32c.find("c.li").unwrap().trace_label(), "addi");
    assert_eq!(rv64c.find("c.ld").unwrap().trace_label(), "ld");
    assert_eq!(rv64c.find("c.addiw").unwrap().trace_label(), "addiw");
    assert_eq!(rv32c.find("c.unimp").unwrap().trace_label(), "c.unimp");

    // Standard subsets are untouched.
    assert_eq!(library.get(SubsetId::Rv32i).find("addi").unwrap().label, None);
}

#[test]
fn test_default_labels_keep_compressed_mnemonics() {
    let rv32c = LIBRARY.get(SubsetId::Rv32c);
    assert_eq!(rv32c.find("c.lw").unwrap().trace_label(), "c.lw");
}
