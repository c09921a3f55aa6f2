//! # Field Source Tests
//!
//! Verifies contiguous and scattered field extraction, sign extension from
//! the highest logical bit, and insertion back into a word.
#![allow(unused_results)]

use proptest::prelude::*;
use rstest::rstest;
use rvsim_isagen::isa::field::{Chunk, FieldSource, fixed, range, ranges, sign_extend};

use crate::common::encode::{b_type, j_type};

/// Branch offset layout: imm[11] at 7, imm[4:1] at 11:8, imm[10:5] at 30:25,
/// imm[12] at 31.
fn branch_offset() -> FieldSource {
    ranges(&[(7, 1, 11), (8, 4, 1), (25, 6, 5), (31, 1, 12)])
}

#[test]
fn test_const_ignores_word() {
    let source = fixed(2);
    assert_eq!(source.evaluate(0xFFFF_FFFF, true), 2);
    assert_eq!(source.evaluate(0, false), 2);
    assert_eq!(source.word_mask(), 0);
    assert_eq!(source.logical_width(), 0);
}

#[test]
fn test_range_extracts_contiguous_bits() {
    let rd = range(7, 5);
    assert_eq!(rd.evaluate(0x0000_0F80, false), 31);
    assert_eq!(rd.word_mask(), 0x0000_0F80);
    assert_eq!(rd.logical_width(), 5);
}

#[test]
fn test_range_sign_extends_immediate() {
    let imm = range(20, 12);
    assert_eq!(imm.evaluate(0xFFF0_0013, true), -1);
    assert_eq!(imm.evaluate(0xFFF0_0013, false), 0xFFF);
    assert_eq!(imm.evaluate(0x7FF0_0013, true), 2047);
}

#[test]
fn test_branch_offset_plus_eight() {
    let word = b_type(0x63, 0, 1, 2, 8);
    assert_eq!(branch_offset().evaluate(word, true), 8);
}

#[rstest]
#[case(-4096)]
#[case(-8)]
#[case(-2)]
#[case(2)]
#[case(4094)]
fn test_branch_offset_values(#[case] imm: i32) {
    let word = b_type(0x63, 1, 5, 6, imm);
    assert_eq!(branch_offset().evaluate(word, true), i64::from(imm));
}

#[test]
fn test_jump_offset_negative() {
    let word = j_type(0x6F, 1, -2048);
    let source = ranges(&[(12, 8, 12), (20, 1, 11), (21, 10, 1), (31, 1, 20)]);
    assert_eq!(source.evaluate(word, true), -2048);
    assert_eq!(source.logical_width(), 21);
}

#[test]
fn test_unsorted_chunks_extend_from_highest_bit() {
    // The highest logical chunk is listed first.
    let unsorted = ranges(&[(31, 1, 12), (25, 6, 5), (8, 4, 1), (7, 1, 11)]);
    let word = b_type(0x63, 0, 1, 2, -16);
    assert_eq!(unsorted.logical_width(), 13);
    assert_eq!(unsorted.evaluate(word, true), -16);
    assert_eq!(unsorted.evaluate(word, true), branch_offset().evaluate(word, true));
}

#[test]
fn test_ranges_word_mask_covers_every_chunk() {
    assert_eq!(branch_offset().word_mask(), 0xFE00_0F80);
}

#[test]
fn test_chunk_constructor() {
    let chunk = Chunk::new(7, 1, 11);
    assert_eq!(chunk.offset, 7);
    assert_eq!(chunk.width, 1);
    assert_eq!(chunk.shift, 11);
    assert_eq!(ranges(&[(7, 1, 11)]), FieldSource::Ranges(vec![chunk]));
}

#[test]
fn test_shifts_past_u64_read_and_write_nothing() {
    let far = range(64, 1);
    assert_eq!(far.word_mask(), 0);
    assert_eq!(far.evaluate(u32::MAX, false), 0);
    assert_eq!(far.insert(0x1234, -1), 0x1234);

    let placed = ranges(&[(7, 1, 70)]);
    assert_eq!(placed.evaluate(0x80, false), 0);
    assert_eq!(placed.insert(0, -1), 0);
}

#[test]
fn test_chunk_bounds() {
    let chunk = Chunk::new(30, 4, 61);
    assert_eq!(chunk.word_end(), 34);
    assert_eq!(chunk.value_end(), 65);
    assert_eq!(Chunk::new(40, 0, 0).word_end(), 0);
    assert_eq!(range(7, 5).chunks(), vec![Chunk::new(7, 5, 0)]);
    assert!(fixed(3).chunks().is_empty());
}

#[test]
fn test_sign_extend_edges() {
    assert_eq!(sign_extend(0x1, 0), 0);
    assert_eq!(sign_extend(0x800, 12), -2048);
    assert_eq!(sign_extend(0x7FF, 12), 2047);
    assert_eq!(sign_extend(u64::MAX, 64), -1);
}

#[test]
fn test_insert_preserves_other_bits() {
    let word = range(7, 5).insert(0xFFFF_FFFF, 0);
    assert_eq!(word, 0xFFFF_F07F);
}

proptest! {
    #[test]
    fn prop_branch_offset_insert_evaluate(half in -2048i64..2048) {
        let imm = half * 2;
        let source = branch_offset();
        let word = source.insert(0x0000_0063, imm);
        prop_assert_eq!(source.evaluate(word, true), imm);
        prop_assert_eq!(word & 0x7F, 0x63);
    }

    #[test]
    fn prop_insert_of_evaluated_value_is_identity(word in any::<u32>()) {
        let source = branch_offset();
        let mask = source.word_mask() as u32;
        let cleared = word & !mask;
        prop_assert_eq!(source.insert(cleared, source.evaluate(word, true)), word);
    }
}
