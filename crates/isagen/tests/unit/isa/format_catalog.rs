//! # Format Catalog Tests
//!
//! Verifies the built-in layouts and registration rules of the catalog.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_isagen::IsaError;
use rvsim_isagen::isa::field::{fixed, range, ranges};
use rvsim_isagen::isa::{FormatCatalog, Kind, Operand};

#[test]
fn test_r_format_layout() {
    let catalog = FormatCatalog::new().unwrap();
    assert_eq!(
        catalog.lookup("R").unwrap(),
        &[
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ][..]
    );
}

#[test]
fn test_branch_format_layout() {
    let catalog = FormatCatalog::new().unwrap();
    let sb = catalog.lookup("SB").unwrap();
    assert_eq!(sb.len(), 3);
    assert_eq!(
        sb[2],
        Operand::simm(0, ranges(&[(7, 1, 11), (8, 4, 1), (25, 6, 5), (31, 1, 12)]))
    );
}

#[rstest]
#[case("R", 3)]
#[case("I", 3)]
#[case("Z", 0)]
#[case("U", 2)]
#[case("UJ", 2)]
#[case("L", 2)]
#[case("S", 2)]
#[case("CL", 2)]
#[case("CR2", 3)]
#[case("OPVLI", 5)]
fn test_operand_counts(#[case] tag: &str, #[case] count: usize) {
    let catalog = FormatCatalog::new().unwrap();
    assert_eq!(catalog.lookup(tag).unwrap().len(), count, "format {tag}");
}

#[test]
fn test_memory_formats_wrap_indirect() {
    let catalog = FormatCatalog::new().unwrap();
    let load = catalog.lookup("L").unwrap();
    assert_eq!(load[1].kind(), Kind::Indirect);
    assert_eq!(load[1].leaves().len(), 2);
}

#[test]
fn test_unknown_tag_is_an_error() {
    let catalog = FormatCatalog::new().unwrap();
    let err = catalog.lookup("NOPE").unwrap_err();
    assert!(matches!(err, IsaError::UnknownFormat { ref tag } if tag == "NOPE"));
    assert!(err.to_string().contains("NOPE"));
    assert!(!catalog.contains("NOPE"));
}

#[test]
fn test_duplicate_tag_is_rejected() {
    let mut catalog = FormatCatalog::empty();
    catalog.define("X1", vec![Operand::simm(0, fixed(1))]).unwrap();
    let err = catalog.define("X1", Vec::new()).unwrap_err();
    assert!(matches!(err, IsaError::DuplicateFormat { ref tag } if tag == "X1"));
    assert_eq!(catalog.lookup("X1").unwrap().len(), 1);
}

#[test]
fn test_catalog_size_and_ordering() {
    let catalog = FormatCatalog::new().unwrap();
    assert_eq!(catalog.len(), 128);
    assert!(!catalog.is_empty());

    let tags = catalog.tags();
    let mut sorted = tags.clone();
    sorted.sort_unstable();
    assert_eq!(tags, sorted);
    assert!(FormatCatalog::empty().is_empty());
}

#[test]
fn test_hidden_operands_mirror_displayed_fields() {
    let catalog = FormatCatalog::new().unwrap();
    for tag in catalog.tags() {
        let operands = catalog.lookup(tag).unwrap();
        let leaves: Vec<&Operand> = operands.iter().flat_map(Operand::leaves).collect();
        for hidden in leaves.iter().filter(|l| !l.is_displayed()) {
            assert!(
                leaves
                    .iter()
                    .any(|l| l.is_displayed() && l.source() == hidden.source()),
                "format {tag} has an unmirrored hidden operand"
            );
        }
    }
}
