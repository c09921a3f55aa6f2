//! GAP9 custom additions.

use crate::isa::insn::InsnSpec;

/// GAP9 instructions.
pub static GAP9: &[InsnSpec] = &[
    InsnSpec::new("pv.cplxmul.h.i", "RRRR", "0101011 ----- ----- 000 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_I"),
    InsnSpec::new("pv.cplxmul.h.i.div2", "RRRR", "0101011 ----- ----- 010 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_I_DIV2"),
    InsnSpec::new("pv.cplxmul.h.i.div4", "RRRR", "0101011 ----- ----- 100 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_I_DIV4"),
    InsnSpec::new("pv.cplxmul.h.i.div8", "RRRR", "0101011 ----- ----- 110 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_I_DIV8"),
    InsnSpec::new("pv.cplxmul.h.r", "RRRR", "0101010 ----- ----- 000 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_R"),
    InsnSpec::new("pv.cplxmul.h.r.div2", "RRRR", "0101010 ----- ----- 010 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_R_DIV2"),
    InsnSpec::new("pv.cplxmul.h.r.div4", "RRRR", "0101010 ----- ----- 100 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_R_DIV4"),
    InsnSpec::new("pv.cplxmul.h.r.div8", "RRRR", "0101010 ----- ----- 110 ----- 1010111")
        .map_to("gap9_CPLXMUL_H_R_DIV8"),
    InsnSpec::new("pv.subrotmj.h", "R", "0110110 ----- ----- 000 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_ROTMJ"),
    InsnSpec::new("pv.subrotmj.h.div2", "R", "0110110 ----- ----- 010 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_ROTMJ_DIV2"),
    InsnSpec::new("pv.subrotmj.h.div4", "R", "0110110 ----- ----- 100 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_ROTMJ_DIV4"),
    InsnSpec::new("pv.subrotmj.h.div8", "R", "0110110 ----- ----- 110 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_ROTMJ_DIV8"),
    InsnSpec::new("pv.cplxconj.h", "R1", "0101110 00000 ----- 000 ----- 1010111")
        .map_to("gap9_CPLX_CONJ_16"),
    InsnSpec::new("pv.add.h.div2", "R", "0111010 ----- ----- 010 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_DIV2"),
    InsnSpec::new("pv.add.h.div4", "R", "0111010 ----- ----- 100 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_DIV4"),
    InsnSpec::new("pv.add.h.div8", "R", "0111010 ----- ----- 110 ----- 1010111")
        .map_to("gap9_VEC_ADD_16_DIV8"),
    InsnSpec::new("pv.sub.h.div2", "R", "0110010 ----- ----- 010 ----- 1010111")
        .map_to("gap9_VEC_SUB_16_DIV2"),
    InsnSpec::new("pv.sub.h.div4", "R", "0110010 ----- ----- 100 ----- 1010111")
        .map_to("gap9_VEC_SUB_16_DIV4"),
    InsnSpec::new("pv.sub.h.div8", "R", "0110010 ----- ----- 110 ----- 1010111")
        .map_to("gap9_VEC_SUB_16_DIV8"),
    InsnSpec::new("pv.pack.h.h", "R", "1101001 ----- ----- 000 ----- 1010111")
        .map_to("gap9_VEC_PACK_SC_H_16"),
    InsnSpec::new("p.bitrev", "BITREV", "11000-- ----- ----- 101 ----- 0110011")
        .map_to("gap9_BITREV"),
];
