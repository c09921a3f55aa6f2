//! PULP-NN sub-byte SIMD extension for quantized neural networks.

use crate::isa::insn::InsnSpec;

/// PULP-NN instructions.
pub static PULPNN: &[InsnSpec] = &[
    InsnSpec::new("pv.add.n", "R", "0000000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.add.sc.n", "R", "0000000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.add.c", "R", "0000001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.add.sc.c", "R", "0000001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sub.n", "R", "0000100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sub.sc.n", "R", "0000100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sub.c", "R", "0000101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sub.sc.c", "R", "0000101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.avg.n", "R", "0001000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.avg.sc.n", "R", "0001000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.avg.c", "R", "0001001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.avg.sc.c", "R", "0001001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.avgu.n", "R", "0001100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.avgu.sc.n", "R", "0001100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.avgu.c", "R", "0001101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.avgu.sc.c", "R", "0001101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.max.n", "R", "0011000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.max.sc.n", "R", "0011000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.max.c", "R", "0011001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.max.sc.c", "R", "0011001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.maxu.n", "R", "0011100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.maxu.sc.n", "R", "0011100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.maxu.c", "R", "0011101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.maxu.sc.c", "R", "0011101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.min.n", "R", "0010000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.min.sc.n", "R", "0010000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.min.c", "R", "0010001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.min.sc.c", "R", "0010001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.minu.n", "R", "0010100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.minu.sc.n", "R", "0010100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.minu.c", "R", "0010101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.minu.sc.c", "R", "0010101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.srl.n", "R", "0100000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.srl.sc.n", "R", "0100000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.srl.c", "R", "0100001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.srl.sc.c", "R", "0100001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sra.n", "R", "0100100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sra.sc.n", "R", "0100100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sra.c", "R", "0100101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sra.sc.c", "R", "0100101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sll.n", "R", "0101000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sll.sc.n", "R", "0101000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sll.c", "R", "0101001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sll.sc.c", "R", "0101001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.or.n", "R", "0101100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.or.sc.n", "R", "0101100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.or.c", "R", "0101101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.or.sc.c", "R", "0101101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.xor.n", "R", "0110000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.xor.sc.n", "R", "0110000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.xor.c", "R", "0110001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.xor.sc.c", "R", "0110001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.and.n", "R", "0110100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.and.sc.n", "R", "0110100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.and.c", "R", "0110101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.and.sc.c", "R", "0110101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.abs.n", "R", "0111000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.abs.c", "R", "0111001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotup.n", "RRRR", "1000000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotup.n.sc", "RRRR", "1000000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.dotup.c", "RRRR", "1000001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotup.c.sc", "RRRR", "1000001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.dotusp.n", "RRRR", "1000100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotusp.n.sc", "RRRR", "1000100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.dotusp.c", "RRRR", "1000101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotusp.c.sc", "RRRR", "1000101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.dotsp.n", "RRRR", "1001100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotsp.n.sc", "RRRR", "1001100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.dotsp.c", "RRRR", "1001101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.dotsp.c.sc", "RRRR", "1001101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sdotup.n", "RRRR", "1010000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sdotup.n.sc", "RRRR", "1010000 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sdotup.c", "RRRR", "1010001 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sdotup.c.sc", "RRRR", "1010001 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.n", "RRRR", "1010100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.n.sc", "RRRR", "1010100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.c", "RRRR", "1010101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.c.sc", "RRRR", "1010101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.n", "RRRR", "1011100 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.n.sc", "RRRR", "1011100 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.c", "RRRR", "1011101 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.c.sc", "RRRR", "1011101 ----- ----- 011 ----- 1010111"),
    InsnSpec::new("pv.qnt.n", "LRR", "1110000 ----- ----- 010 ----- 1010111"),
    InsnSpec::new("pv.mlsdotup.h", "RRRU3", "1110000 ----- ----- 000 ----- 1110111"),
    InsnSpec::new("pv.mlsdotusp.h", "RRRU3", "1110100 ----- ----- 000 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsup.h", "RRRU3", "1101100 ----- ----- 000 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsp.h", "RRRU3", "1111100 ----- ----- 000 ----- 1110111"),
    InsnSpec::new("pv.mlsdotup.b", "RRRU3", "1110000 ----- ----- 001 ----- 1110111"),
    InsnSpec::new("pv.mlsdotusp.b", "RRRU3", "1110100 ----- ----- 001 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsup.b", "RRRU3", "1101100 ----- ----- 001 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsp.b", "RRRU3", "1111100 ----- ----- 001 ----- 1110111"),
    InsnSpec::new("pv.mlsdotup.n", "RRRU3", "1110000 ----- ----- 010 ----- 1110111"),
    InsnSpec::new("pv.mlsdotusp.n", "RRRU3", "1110100 ----- ----- 010 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsup.n", "RRRU3", "1101100 ----- ----- 010 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsp.n", "RRRU3", "1111100 ----- ----- 010 ----- 1110111"),
    InsnSpec::new("pv.mlsdotup.c", "RRRU3", "1110000 ----- ----- 011 ----- 1110111"),
    InsnSpec::new("pv.mlsdotusp.c", "RRRU3", "1110100 ----- ----- 011 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsup.c", "RRRU3", "1101100 ----- ----- 011 ----- 1110111"),
    InsnSpec::new("pv.mlsdotsp.c", "RRRU3", "1111100 ----- ----- 011 ----- 1110111"),
];
