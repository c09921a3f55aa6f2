//! Base integer instructions.
//!
//! `RV64I` holds only the 64-bit additions and the 6-bit shift-amount forms of
//! `slli`/`srli`/`srai`; a 64-bit core decodes it ahead of `RV32I`.

use crate::isa::insn::InsnSpec;

/// RV32I base integer instructions, including the `nop` alias of `addi`.
pub static RV32I: &[InsnSpec] = &[
    InsnSpec::new("lui", "U", "------- ----- ----- --- ----- 0110111")
        .decode("lui_decode"),
    InsnSpec::new("auipc", "U", "------- ----- ----- --- ----- 0010111")
        .decode("auipc_decode"),
    InsnSpec::new("jal", "UJ", "------- ----- ----- --- ----- 1101111")
        .decode("jal_decode")
        .fast(),
    InsnSpec::new("jalr", "I", "------- ----- ----- 000 ----- 1100111")
        .fast(),
    InsnSpec::new("beq", "SB", "------- ----- ----- 000 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("bne", "SB", "------- ----- ----- 001 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("blt", "SB", "------- ----- ----- 100 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("bge", "SB", "------- ----- ----- 101 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("bltu", "SB", "------- ----- ----- 110 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("bgeu", "SB", "------- ----- ----- 111 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("lb", "L", "------- ----- ----- 000 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("lh", "L", "------- ----- ----- 001 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("lw", "L", "------- ----- ----- 010 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("lbu", "L", "------- ----- ----- 100 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("lhu", "L", "------- ----- ----- 101 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("sb", "S", "------- ----- ----- 000 ----- 0100011")
        .fast()
        .tags(&["store"]),
    InsnSpec::new("sh", "S", "------- ----- ----- 001 ----- 0100011")
        .fast()
        .tags(&["store"]),
    InsnSpec::new("sw", "S", "------- ----- ----- 010 ----- 0100011")
        .fast()
        .tags(&["store"]),
    InsnSpec::new("addi", "I", "------- ----- ----- 000 ----- 0010011"),
    InsnSpec::new("addi", "Z", "0000000 00000 00000 000 00000 0010011")
        .label("nop")
        .map_to("nop"),
    InsnSpec::new("slti", "I", "------- ----- ----- 010 ----- 0010011"),
    InsnSpec::new("sltiu", "I", "------- ----- ----- 011 ----- 0010011"),
    InsnSpec::new("xori", "I", "------- ----- ----- 100 ----- 0010011"),
    InsnSpec::new("ori", "I", "------- ----- ----- 110 ----- 0010011"),
    InsnSpec::new("andi", "I", "------- ----- ----- 111 ----- 0010011"),
    InsnSpec::new("slli", "I1U", "0000000 ----- ----- 001 ----- 0010011"),
    InsnSpec::new("srli", "I1U", "0000000 ----- ----- 101 ----- 0010011"),
    InsnSpec::new("srai", "I1U", "0100000 ----- ----- 101 ----- 0010011"),
    InsnSpec::new("add", "R", "0000000 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("sub", "R", "0100000 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("sll", "R", "0000000 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("slt", "R", "0000000 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("sltu", "R", "0000000 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("xor", "R", "0000000 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("srl", "R", "0000000 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("sra", "R", "0100000 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("or", "R", "0000000 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("and", "R", "0000000 ----- ----- 111 ----- 0110011"),
    InsnSpec::new("fence", "I3U", "0000--- ----- 00000 000 00000 0001111"),
    InsnSpec::new("fence.i", "Z", "0000000 00000 00000 001 00000 0001111"),
    InsnSpec::new("ecall", "Z", "0000000 00000 00000 000 00000 1110011"),
    InsnSpec::new("ebreak", "Z", "0000000 00001 00000 000 00000 1110011"),
];

/// RV64I additions.
pub static RV64I: &[InsnSpec] = &[
    InsnSpec::new("lwu", "L", "------- ----- ----- 110 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("ld", "L", "------- ----- ----- 011 ----- 0000011")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("sd", "S", "------- ----- ----- 011 ----- 0100011")
        .fast()
        .tags(&["store"]),
    InsnSpec::new("slli", "I1U64", "000000- ----- ----- 001 ----- 0010011"),
    InsnSpec::new("srli", "I1U64", "000000- ----- ----- 101 ----- 0010011"),
    InsnSpec::new("srai", "I1U64", "010000- ----- ----- 101 ----- 0010011"),
    InsnSpec::new("addiw", "I", "------- ----- ----- 000 ----- 0011011"),
    InsnSpec::new("slliw", "I1U", "0000000 ----- ----- 001 ----- 0011011"),
    InsnSpec::new("srliw", "I1U", "0000000 ----- ----- 101 ----- 0011011"),
    InsnSpec::new("sraiw", "I1U", "0100000 ----- ----- 101 ----- 0011011"),
    InsnSpec::new("addw", "R", "0000000 ----- ----- 000 ----- 0111011"),
    InsnSpec::new("subw", "R", "0100000 ----- ----- 000 ----- 0111011"),
    InsnSpec::new("sllw", "R", "0000000 ----- ----- 001 ----- 0111011"),
    InsnSpec::new("srlw", "R", "0000000 ----- ----- 101 ----- 0111011"),
    InsnSpec::new("sraw", "R", "0100000 ----- ----- 101 ----- 0111011"),
];
