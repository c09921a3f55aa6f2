//! Compressed (16-bit) instructions.
//!
//! `RV64C` replaces `RV32C` on 64-bit cores: `c.jal` becomes `c.addiw` and the
//! single-precision compressed loads and stores become their doubleword forms.

use crate::isa::insn::InsnSpec;

/// RV32C compressed instructions, including the `cf`-tagged float accesses.
pub static RV32C: &[InsnSpec] = &[
    InsnSpec::new("c.unimp", "Z", "000 000 000 00 000 00"),
    InsnSpec::new("c.addi4spn", "CIW", "000 --- --- -- --- 00")
        .fast(),
    InsnSpec::new("c.lw", "CL", "010 --- --- -- --- 00")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.sw", "CS", "110 --- --- -- --- 00")
        .fast(),
    InsnSpec::new("c.nop", "Z", "000 000 000 00 000 01")
        .fast(),
    InsnSpec::new("c.addi", "CI1", "000 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.jal", "CJ1", "001 --- --- -- --- 01")
        .decode("jal_decode")
        .fast(),
    InsnSpec::new("c.li", "CI6", "010 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.addi16sp", "CI4", "011 -00 010 -- --- 01")
        .fast(),
    InsnSpec::new("c.lui", "CI5", "011 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.srli", "CB2", "100 -00 --- -- --- 01")
        .fast(),
    InsnSpec::new("c.srai", "CB2", "100 -01 --- -- --- 01")
        .fast(),
    InsnSpec::new("c.andi", "CB2S", "100 -10 --- -- --- 01")
        .fast(),
    InsnSpec::new("c.sub", "CS2", "100 011 --- 00 --- 01")
        .fast(),
    InsnSpec::new("c.xor", "CS2", "100 011 --- 01 --- 01")
        .fast(),
    InsnSpec::new("c.or", "CS2", "100 011 --- 10 --- 01")
        .fast(),
    InsnSpec::new("c.and", "CS2", "100 011 --- 11 --- 01")
        .fast(),
    InsnSpec::new("c.j", "CJ", "101 --- --- -- --- 01")
        .decode("jal_decode")
        .fast(),
    InsnSpec::new("c.beqz", "CB1", "110 --- --- -- --- 01")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("c.bnez", "CB1", "111 --- --- -- --- 01")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("c.slli", "CI1U", "000 --- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.lwsp", "CI3", "010 --- --- -- --- 10")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.jr", "CR1", "100 0-- --- 00 000 10")
        .fast(),
    InsnSpec::new("c.mv", "CR2", "100 0-- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.ebreak", "Z", "100 100 000 00 000 10"),
    InsnSpec::new("c.jalr", "CR3", "100 1-- --- 00 000 10")
        .fast(),
    InsnSpec::new("c.add", "CR", "100 1-- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.swsp", "CSS", "110 --- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.sbreak", "Z", "100 000 000 00 000 10"),
    InsnSpec::new("c.flwsp", "FCI3", "011 --- --- -- --- 10")
        .tags(&["load"])
        .isa_tags(&["cf"]),
    InsnSpec::new("c.fswsp", "FCSS", "111 --- --- -- --- 10")
        .isa_tags(&["cf"]),
    InsnSpec::new("c.fsw", "FCS", "111 --- --- -- --- 00")
        .isa_tags(&["cf"]),
    InsnSpec::new("c.flw", "FCL", "011 --- --- -- --- 00")
        .tags(&["load"])
        .isa_tags(&["cf"]),
];

/// RV64C compressed instructions.
pub static RV64C: &[InsnSpec] = &[
    InsnSpec::new("c.unimp", "Z", "000 000 000 00 000 00"),
    InsnSpec::new("c.addi4spn", "CIW", "000 --- --- -- --- 00")
        .fast(),
    InsnSpec::new("c.ld", "CLD", "011 --- --- -- --- 00")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.lw", "CL", "010 --- --- -- --- 00")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.fld", "CFLD", "001 --- --- -- --- 00")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.sw", "CS", "110 --- --- -- --- 00")
        .fast(),
    InsnSpec::new("c.sd", "CSD", "111 --- --- -- --- 00")
        .fast(),
    InsnSpec::new("c.fsd", "CFSD", "101 --- --- -- --- 00")
        .fast(),
    InsnSpec::new("c.nop", "Z", "000 000 000 00 000 01")
        .fast(),
    InsnSpec::new("c.addi", "CI1", "000 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.addiw", "CI1", "001 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.li", "CI6", "010 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.addi16sp", "CI4", "011 -00 010 -- --- 01")
        .fast(),
    InsnSpec::new("c.lui", "CI5", "011 --- --- -- --- 01")
        .fast(),
    InsnSpec::new("c.srli", "CB2", "100 -00 --- -- --- 01")
        .fast(),
    InsnSpec::new("c.srai", "CB2", "100 -01 --- -- --- 01")
        .fast(),
    InsnSpec::new("c.andi", "CB2S", "100 -10 --- -- --- 01")
        .fast(),
    InsnSpec::new("c.sub", "CS2", "100 011 --- 00 --- 01")
        .fast(),
    InsnSpec::new("c.xor", "CS2", "100 011 --- 01 --- 01")
        .fast(),
    InsnSpec::new("c.or", "CS2", "100 011 --- 10 --- 01")
        .fast(),
    InsnSpec::new("c.and", "CS2", "100 011 --- 11 --- 01")
        .fast(),
    InsnSpec::new("c.subw", "CS2", "100 111 --- 00 --- 01")
        .fast(),
    InsnSpec::new("c.addw", "CS2", "100 111 --- 01 --- 01")
        .fast(),
    InsnSpec::new("c.j", "CJ", "101 --- --- -- --- 01")
        .decode("jal_decode")
        .fast(),
    InsnSpec::new("c.beqz", "CB1", "110 --- --- -- --- 01")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("c.bnez", "CB1", "111 --- --- -- --- 01")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("c.slli", "CI1U", "000 --- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.lwsp", "CI3", "010 --- --- -- --- 10")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.ldsp", "DCI3", "011 --- --- -- --- 10")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("c.jr", "CR1", "100 0-- --- 00 000 10")
        .fast(),
    InsnSpec::new("c.mv", "CR2", "100 0-- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.ebreak", "Z", "100 100 000 00 000 10"),
    InsnSpec::new("c.jalr", "CR3", "100 1-- --- 00 000 10")
        .fast(),
    InsnSpec::new("c.add", "CR", "100 1-- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.swsp", "CSS", "110 --- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.sdsp", "DCSS", "111 --- --- -- --- 10")
        .fast(),
    InsnSpec::new("c.sbreak", "Z", "100 000 000 00 000 10"),
    InsnSpec::new("c.fsdsp", "FCSSD", "101 --- --- -- --- 10")
        .isa_tags(&["cf"]),
    InsnSpec::new("c.fldsp", "FCI3D", "001 --- --- -- --- 10")
        .tags(&["load"])
        .isa_tags(&["cf"]),
];

/// Trace labels of the 32-bit counterparts of compressed instructions.
///
/// Applied when a core is configured to trace compressed instructions under
/// their uncompressed names. Rows without a counterpart (`c.unimp`, the
/// float accesses) keep their own mnemonic.
pub const UNCOMPRESSED_LABELS: &[(&str, &str)] = &[
    ("c.addi4spn", "addi"),
    ("c.lw", "lw"),
    ("c.ld", "ld"),
    ("c.sw", "sw"),
    ("c.sd", "sd"),
    ("c.nop", "nop"),
    ("c.addi", "addi"),
    ("c.addiw", "addiw"),
    ("c.jal", "jal"),
    ("c.li", "addi"),
    ("c.addi16sp", "addi"),
    ("c.lui", "lui"),
    ("c.srli", "srli"),
    ("c.srai", "srai"),
    ("c.andi", "andi"),
    ("c.sub", "sub"),
    ("c.xor", "xor"),
    ("c.or", "or"),
    ("c.and", "and"),
    ("c.subw", "subw"),
    ("c.addw", "addw"),
    ("c.j", "j"),
    ("c.beqz", "beqz"),
    ("c.bnez", "bnez"),
    ("c.slli", "slli"),
    ("c.lwsp", "lw"),
    ("c.ldsp", "ld"),
    ("c.jr", "jr"),
    ("c.mv", "mv"),
    ("c.ebreak", "ebreak"),
    ("c.jalr", "jalr"),
    ("c.add", "add"),
    ("c.swsp", "sw"),
    ("c.sdsp", "sd"),
    ("c.sbreak", "sbreak"),
];
