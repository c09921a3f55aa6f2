//! 64-bit integer operations on register pairs for 32-bit cores.

use crate::isa::insn::InsnSpec;

/// Register-pair integer instructions.
pub static INT64: &[InsnSpec] = &[
    InsnSpec::new("add.d", "R2x64_W64", "0010000 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("sub.d", "R2x64_W64", "0110000 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("sll.d", "R2x64_W64", "0010000 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("slt.d", "R2x64_W32", "0011000 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("sltu.d", "R2x64_W32", "0011000 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("xor.d", "R2x64_W64", "0010000 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("srl.d", "R2x64_W64", "0010000 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("sra.d", "R2x64_W64", "0110000 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("or.d", "R2x64_W64", "0110000 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("and.d", "R2x64_W64", "0110000 ----- ----- 111 ----- 0110011"),
    InsnSpec::new("slli.d", "R1x64puImm_W64", "0010000 ----- ----- 001 ----- 0010011"),
    InsnSpec::new("srli.d", "R1x64puImm_W64", "0010010 ----- ----- 101 ----- 0010011"),
    InsnSpec::new("srai.d", "R1x64puImm_W64", "0110010 ----- ----- 101 ----- 0010011"),
    InsnSpec::new("addi.d", "R1x64psImm_W64", "0010001 ----- ----- 001 ----- 0010011"),
    InsnSpec::new("slti.d", "R1x64psImm_W32", "0011000 ----- ----- 010 ----- 0011011"),
    InsnSpec::new("sltiu.d", "R1x64puImm_W32", "0011000 ----- ----- 011 ----- 0011011"),
    InsnSpec::new("xori.d", "R1x64puImm_W64", "0010000 ----- ----- 100 ----- 0011011"),
    InsnSpec::new("ori.d", "R1x64puImm_W64", "0010000 ----- ----- 110 ----- 0011011"),
    InsnSpec::new("andi.d", "R1x64puImm_W64", "0010000 ----- ----- 111 ----- 0011011"),
    InsnSpec::new("p.abs.d", "R1x64_W64", "0010010 00000 ----- 000 ----- 0110011"),
    InsnSpec::new("p.seq.d", "R2x64_W32", "0011011 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.slet.d", "R2x64_W32", "0011010 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.sletu.d", "R2x64_W32", "0011010 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("p.sne.d", "R2x64_W32", "0011011 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("p.min.d", "R2x64_W64", "0010010 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("p.minu.d", "R2x64_W64", "0010010 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("p.max.d", "R2x64_W64", "0010010 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("p.maxu.d", "R2x64_W64", "0010010 ----- ----- 111 ----- 0110011"),
    InsnSpec::new("p.cnt.d", "R1x64_W32", "0011010 00000 ----- 001 ----- 0110011"),
    InsnSpec::new("p.exths.d", "R1x32_W64", "0110010 00000 ----- 000 ----- 0110011"),
    InsnSpec::new("p.exthz.d", "R1x32_W64", "0110010 00000 ----- 001 ----- 0110011"),
    InsnSpec::new("p.extbs.d", "R1x32_W64", "0110010 00000 ----- 010 ----- 0110011"),
    InsnSpec::new("p.extbz.d", "R1x32_W64", "0110010 00000 ----- 011 ----- 0110011"),
    InsnSpec::new("p.extws.d", "R1x32_W64", "0110010 00000 ----- 100 ----- 0110011"),
    InsnSpec::new("p.extwz.d", "R1x32_W64", "0110010 00000 ----- 101 ----- 0110011"),
    InsnSpec::new("p.mac.d", "R2x32p64_W64", "0111001 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("p.msu.d", "R2x32p64_W64", "0111001 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("p.macu.d", "R2x32p64_W64", "0111001 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.msuu.d", "R2x32p64_W64", "0111001 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("p.muls.d", "R2x32_W64", "0111001 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("p.mulu.d", "R2x32_W64", "0111001 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("p.mulsh.d", "R2x32_W64", "0111001 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("p.muluh.d", "R2x32_W64", "0111001 ----- ----- 111 ----- 0110011"),
];
