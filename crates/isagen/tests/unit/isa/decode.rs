//! # Reference Decoder Tests
//!
//! Verifies decode priority across branches and subsets, operand values and
//! the rendered disassembly of common encodings.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvsim_isagen::isa::decode::instruction_width;
use rvsim_isagen::isa::disasm::{disassemble, freg, xreg};
use rvsim_isagen::isa::{OperandValue, RegFile};
use rvsim_isagen::{GeneratorConfig, IsaAssembler, PrivilegeFlags};

use crate::common::assemble;
use crate::common::encode::{b_type, c_lw, ci_type, i_type, j_type, r_type, s_type, u_type};

#[rstest]
#[case(0x0000_0013, "nop")]
#[case(r_type(0x33, 10, 0, 11, 12, 0), "add a0, a1, a2")]
#[case(r_type(0x33, 10, 0, 11, 12, 0x20), "sub a0, a1, a2")]
#[case(i_type(0x13, 10, 0, 10, -1), "addi a0, a0, -1")]
#[case(i_type(0x03, 10, 2, 2, 8), "lw a0, 8(sp)")]
#[case(s_type(0x23, 2, 2, 11, 12), "sw a1, 12(sp)")]
#[case(b_type(0x63, 0, 10, 11, -8), "beq a0, a1, -8")]
#[case(u_type(0x37, 10, 0x12345), "lui a0, 305418240")]
#[case(j_type(0x6F, 1, 2048), "jal ra, 2048")]
#[case(i_type(0x07, 10, 2, 2, 16), "flw fa0, 16(sp)")]
#[case(r_type(0x33, 5, 0, 6, 7, 1), "mul t0, t1, t2")]
#[case(c_lw(10, 11, 4), "c.lw a0, 4(a1)")]
#[case(ci_type(0, 10, -1, 1), "c.addi a0, a0, -1")]
#[case(0x9002, "c.ebreak")]
fn test_disassembly(#[case] word: u32, #[case] expected: &str) {
    let isa = assemble("rv32imafdc", &[]);
    let insn = isa.decode(word).unwrap();
    assert_eq!(disassemble(&insn), expected);
    assert_eq!(insn.reencode(), word);
}

#[test]
fn test_nop_alias_wins_over_addi() {
    let isa = assemble("rv32i", &[]);
    let insn = isa.decode(0x0000_0013).unwrap();
    assert_eq!(insn.descriptor.mnemonic, "addi");
    assert_eq!(insn.descriptor.trace_label(), "nop");
    assert_eq!(insn.descriptor.format, "Z");
    assert!(insn.operands.is_empty());
}

#[test]
fn test_rv64_shift_amount_above_31_decodes_from_rv64i() {
    let word = i_type(0x13, 10, 1, 10, 32);
    assert_eq!(word, 0x0205_1513);

    let rv64 = assemble("rv64i", &[]);
    let insn = rv64.decode(word).unwrap();
    assert_eq!(insn.subset, "rv64i");
    assert_eq!(insn.branch, "i");
    assert_eq!(disassemble(&insn), "slli a0, a0, 32");

    let rv32 = assemble("rv32i", &[]);
    assert!(rv32.decode(word).is_none());
}

#[test]
fn test_rv64_subset_shadows_rv32_base() {
    let rv64 = assemble("rv64i", &[]);
    let insn = rv64.decode(i_type(0x13, 10, 1, 10, 3)).unwrap();
    assert_eq!(insn.subset, "rv64i");

    let rv32 = assemble("rv32i", &[]);
    let insn = rv32.decode(i_type(0x13, 10, 1, 10, 3)).unwrap();
    assert_eq!(insn.subset, "rv32i");
}

#[test]
fn test_operand_values() {
    let isa = assemble("rv32i", &[]);
    let insn = isa.decode(b_type(0x63, 1, 5, 6, -4096)).unwrap();
    assert_eq!(insn.descriptor.mnemonic, "bne");
    assert_eq!(
        insn.operands,
        vec![
            OperandValue::Reg {
                file: RegFile::Int,
                index: 5
            },
            OperandValue::Reg {
                file: RegFile::Int,
                index: 6
            },
            OperandValue::Imm(-4096),
        ]
    );
}

#[test]
fn test_compressed_registers_are_offset_by_eight() {
    let isa = assemble("rv32ic", &[]);
    let insn = isa.decode(c_lw(15, 8, 64)).unwrap();
    assert_eq!(insn.subset, "rv32c");
    assert_eq!(
        insn.operands[0],
        OperandValue::Reg {
            file: RegFile::CompressedInt,
            index: 15
        }
    );
    assert_eq!(disassemble(&insn), "c.lw a5, 64(s0)");
}

#[test]
fn test_compressed_word_ignores_upper_half() {
    let isa = assemble("rv32ic", &[]);
    let insn = isa.decode(0xDEAD_0000 | c_lw(10, 11, 4)).unwrap();
    assert_eq!(insn.word, c_lw(10, 11, 4));
    assert_eq!(insn.descriptor.mnemonic, "c.lw");
}

#[test]
fn test_uncompressed_labels_in_disassembly() {
    let config = GeneratorConfig {
        isa: "rv32ic".to_owned(),
        uncompressed_labels: true,
        ..GeneratorConfig::default()
    };
    let isa = IsaAssembler::from_config(&config).unwrap().assemble();
    let insn = isa.decode(c_lw(10, 11, 4)).unwrap();
    assert_eq!(disassemble(&insn), "lw a0, 4(a1)");
    assert_eq!(insn.descriptor.mnemonic, "c.lw");
}

#[rstest]
#[case(i_type(0x73, 10, 1, 11, 0x300), "priv", "csrrw")]
#[case(0x3020_0073, "trap_return", "mret")]
#[case(0x1050_0073, "trap_return", "wfi")]
#[case(r_type(0x73, 0, 0, 10, 11, 0x09), "priv_smmu", "sfence.vma")]
fn test_privileged_encodings_decode_from_privilege_branch(
    #[case] word: u32,
    #[case] subset: &str,
    #[case] mnemonic: &str,
) {
    let isa = assemble("rv32i", &[]);
    let insn = isa.decode(word).unwrap();
    assert_eq!(insn.branch, "priv");
    assert_eq!(insn.subset, subset);
    assert_eq!(insn.descriptor.mnemonic, mnemonic);
}

#[test]
fn test_ecall_stays_in_base_branch() {
    let isa = assemble("rv32i", &[]);
    let insn = isa.decode(0x0000_0073).unwrap();
    assert_eq!(insn.branch, "i");
    assert_eq!(disassemble(&insn), "ecall");
}

#[test]
fn test_disabled_privilege_subset_is_not_decoded() {
    let flags = PrivilegeFlags {
        trap_return: false,
        ..PrivilegeFlags::ALL
    };
    let isa = IsaAssembler::new("core", "rv32i", flags).unwrap().assemble();
    assert!(isa.decode(0x3020_0073).is_none());
    assert!(isa.decode(i_type(0x73, 10, 1, 11, 0x300)).is_some());
}

#[test]
fn test_unknown_word() {
    let isa = assemble("rv32imafdc", &[]);
    assert!(isa.decode(0x0000_007F).is_none());
}

#[rstest]
#[case(0x0000_0013, 32)]
#[case(0xFFFF_FFFF, 32)]
#[case(0x0000_41C8, 16)]
#[case(0x0000_0001, 16)]
#[case(0x0000_0002, 16)]
fn test_instruction_width(#[case] word: u32, #[case] width: u8) {
    assert_eq!(instruction_width(word), width);
}

#[test]
fn test_register_names() {
    assert_eq!(xreg(0), "zero");
    assert_eq!(xreg(2), "sp");
    assert_eq!(xreg(31), "t6");
    assert_eq!(xreg(32), "x??");
    assert_eq!(freg(10), "fa0");
    assert_eq!(freg(40), "f??");
}
