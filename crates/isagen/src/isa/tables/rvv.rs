//! Vector extension.
//!
//! Unit-stride, whole-register and configuration encodings that fix the
//! `vs2`/`vs1`/`lumop` fields use the narrower `OPVU`/`OPVV`/`OPVLS` layouts.

use crate::isa::insn::InsnSpec;

/// Vector instructions.
pub static RVV: &[InsnSpec] = &[
    InsnSpec::new("vadd.vv", "OPV", "000000 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vadd.vi", "OPIVI", "000000 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vadd.vx", "OPV", "000000 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vsub.vv", "OPV", "000010 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vsub.vx", "OPV", "000010 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vrsub.vi", "OPIVI", "000011 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vrsub.vx", "OPV", "000011 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vand.vv", "OPV", "001001 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vand.vi", "OPIVI", "001001 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vand.vx", "OPV", "001001 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vor.vv", "OPV", "001010 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vor.vi", "OPIVI", "001010 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vor.vx", "OPV", "001010 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vxor.vv", "OPV", "001011 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vxor.vi", "OPIVI", "001011 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vxor.vx", "OPV", "001011 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vmin.vv", "OPV", "000101 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vmin.vx", "OPV", "000101 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vminu.vv", "OPV", "000100 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vminu.vx", "OPV", "000100 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vmax.vv", "OPV", "000111 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vmax.vx", "OPV", "000111 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vmaxu.vv", "OPV", "000110 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vmaxu.vx", "OPV", "000110 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vmul.vv", "OPV", "100101 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vmul.vx", "OPV", "100101 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vmulh.vv", "OPV", "100111 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vmulh.vx", "OPV", "100111 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vmulhu.vv", "OPV", "100100 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vmulhu.vx", "OPV", "100100 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vmulhsu.vv", "OPV", "100110 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vmulhsu.vx", "OPV", "100110 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vmv.v.v", "OPV", "010111 - ----- ----- 000 ----- 1010111"),
    InsnSpec::new("vmv.v.i", "OPIVI", "010111 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vmv.v.x", "OPV", "010111 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vmv.s.x", "OPVU", "010000 - 00000 ----- 110 ----- 1010111"),
    InsnSpec::new("vmv.x.s", "OPVV", "010000 - ----- 00000 010 ----- 1010111"),
    InsnSpec::new("vwmul.vv", "OPV", "111011 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vwmul.vx", "OPV", "111011 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vwmulu.vv", "OPV", "111000 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vwmulu.vx", "OPV", "111000 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vwmulsu.vv", "OPV", "111010 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vwmulsu.vx", "OPV", "111010 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vmacc.vv", "OPV", "101101 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vmacc.vx", "OPV", "101101 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vmadd.vv", "OPV", "101001 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vmadd.vx", "OPV", "101001 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vnmsac.vv", "OPV", "101111 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vnmsac.vx", "OPV", "101111 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vnmsub.vv", "OPV", "101011 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vnmsub.vx", "OPV", "101011 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vwmacc.vv", "OPV", "111101 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vwmacc.vx", "OPV", "111101 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vwmaccu.vv", "OPV", "111100 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vwmaccu.vx", "OPV", "111100 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vwmaccus.vx", "OPV", "111110 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vwmaccsu.vv", "OPV", "111111 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vwmaccsu.vx", "OPV", "111111 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vredsum.vs", "OPV", "000000 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredand.vs", "OPV", "000001 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredor.vs", "OPV", "000010 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredxor.vs", "OPV", "000011 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredminu.vs", "OPV", "000100 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredmin.vs", "OPV", "000101 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredmaxu.vs", "OPV", "000110 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vredmax.vs", "OPV", "000111 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vslideup.vi", "OPIVI", "001110 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vslideup.vx", "OPV", "001110 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vslidedown.vi", "OPIVI", "001111 - ----- ----- 011 ----- 1010111"),
    InsnSpec::new("vslidedown.vx", "OPV", "001111 - ----- ----- 100 ----- 1010111"),
    InsnSpec::new("vslide1up.vx", "OPV", "001110 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vslide1down.vx", "OPV", "001111 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vdiv.vv", "OPV", "100001 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vdiv.vx", "OPV", "100001 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vdivu.vv", "OPV", "100000 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vdivu.vx", "OPV", "100000 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vrem.vv", "OPV", "100011 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vrem.vx", "OPV", "100011 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vremu.vv", "OPV", "100010 - ----- ----- 010 ----- 1010111"),
    InsnSpec::new("vremu.vx", "OPV", "100010 - ----- ----- 110 ----- 1010111"),
    InsnSpec::new("vfadd.vv", "OPV", "000000 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfadd.vf", "OPVF", "000000 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfsub.vv", "OPV", "000010 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfsub.vf", "OPVF", "000010 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfrsub.vf", "OPVF", "100111 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmin.vv", "OPV", "000100 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmin.vf", "OPVF", "000100 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmax.vv", "OPV", "000110 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmax.vf", "OPVF", "000110 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmul.vv", "OPV", "100100 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmul.vf", "OPVF", "100100 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmacc.vv", "OPV", "101100 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmacc.vf", "OPVF", "101100 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfnmacc.vv", "OPV", "101101 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfnmacc.vf", "OPVF", "101101 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmsac.vv", "OPV", "101110 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmsac.vf", "OPVF", "101110 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfnmsac.vv", "OPV", "101111 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfnmsac.vf", "OPVF", "101111 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmadd.vv", "OPV", "101000 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmadd.vf", "OPVF", "101000 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfnmadd.vv", "OPV", "101001 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfnmadd.vf", "OPVF", "101001 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmsub.vv", "OPV", "101010 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfmsub.vf", "OPVF", "101010 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfnmsub.vv", "OPV", "101011 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfnmsub.vf", "OPVF", "101011 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfredmax.vs", "OPV", "000111 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfredmin.vs", "OPV", "000101 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfredsum.vs", "OPV", "000001 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfredosum.vs", "OPV", "000011 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwadd.vv", "OPV", "110000 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwadd.vf", "OPVF", "110000 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwadd.wv", "OPV", "110100 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwadd.wf", "OPVF", "110100 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwsub.vv", "OPV", "110010 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwsub.vf", "OPVF", "110010 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwsub.wv", "OPV", "110110 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwsub.wf", "OPVF", "110110 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwmul.vv", "OPV", "111000 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwmul.vf", "OPVF", "111000 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwmacc.vv", "OPV", "111100 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwmacc.vf", "OPVF", "111100 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwmsac.vv", "OPV", "111110 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwmsac.vf", "OPVF", "111110 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfwnmsac.vv", "OPV", "111111 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfwnmsac.vf", "OPVF", "111111 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfsgnj.vv", "OPV", "001000 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfsgnj.vf", "OPVF", "001000 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfsgnjn.vv", "OPV", "001001 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfsgnjn.vf", "OPVF", "001001 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfsgnjx.vv", "OPV", "001010 - ----- ----- 001 ----- 1010111"),
    InsnSpec::new("vfsgnjx.vf", "OPVF", "001010 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfcvt.xu.f.v", "OPVV", "010010 - ----- 00000 001 ----- 1010111"),
    InsnSpec::new("vfcvt.x.f.v", "OPVV", "010010 - ----- 00001 001 ----- 1010111"),
    InsnSpec::new("vfcvt.f.xu.v", "OPVV", "010010 - ----- 00010 001 ----- 1010111"),
    InsnSpec::new("vfcvt.f.x.v", "OPVV", "010010 - ----- 00011 001 ----- 1010111"),
    InsnSpec::new("vfcvt.rtz.xu.f.v", "OPVV", "010010 - ----- 00110 001 ----- 1010111"),
    InsnSpec::new("vfcvt.rtz.x.f.v", "OPVV", "010010 - ----- 00111 001 ----- 1010111"),
    InsnSpec::new("vfncvt.xu.f.w", "OPVV", "010010 - ----- 10000 001 ----- 1010111"),
    InsnSpec::new("vfncvt.x.f.w", "OPVV", "010010 - ----- 10001 001 ----- 1010111"),
    InsnSpec::new("vfncvt.f.xu.w", "OPVV", "010010 - ----- 10010 001 ----- 1010111"),
    InsnSpec::new("vfncvt.f.x.w", "OPVV", "010010 - ----- 10011 001 ----- 1010111"),
    InsnSpec::new("vfncvt.f.f.w", "OPVV", "010010 - ----- 10100 001 ----- 1010111"),
    InsnSpec::new("vfncvt.rod.f.f.w", "OPVV", "010010 - ----- 10101 001 ----- 1010111"),
    InsnSpec::new("vfncvt.rtz.xu.f.w", "OPVV", "010010 - ----- 10110 001 ----- 1010111"),
    InsnSpec::new("vfncvt.rtz.x.f.w", "OPVV", "010010 - ----- 10111 001 ----- 1010111"),
    InsnSpec::new("vfmv.v.f", "OPVF", "010111 - ----- ----- 101 ----- 1010111"),
    InsnSpec::new("vfmv.s.f", "OPVFS", "010000 - 00000 ----- 101 ----- 1010111"),
    InsnSpec::new("vfmv.f.s", "OPVFV", "010000 - ----- 00000 001 ----- 1010111"),
    InsnSpec::new("vle8.v", "OPVU", "000 0 00 - 00000 ----- 000 ----- 0000111"),
    InsnSpec::new("vle16.v", "OPVU", "000 0 00 - 00000 ----- 101 ----- 0000111"),
    InsnSpec::new("vle32.v", "OPVU", "000 0 00 - 00000 ----- 110 ----- 0000111"),
    InsnSpec::new("vle64.v", "OPVU", "000 0 00 - 00000 ----- 111 ----- 0000111"),
    InsnSpec::new("vse8.v", "OPVU", "000 0 00 - 00000 ----- 000 ----- 0100111"),
    InsnSpec::new("vse16.v", "OPVU", "000 0 00 - 00000 ----- 101 ----- 0100111"),
    InsnSpec::new("vse32.v", "OPVU", "000 0 00 - 00000 ----- 110 ----- 0100111"),
    InsnSpec::new("vse64.v", "OPVU", "000 0 00 - 00000 ----- 111 ----- 0100111"),
    InsnSpec::new("vluxei8.v", "OPV", "000 0 01 - ----- ----- 000 ----- 0000111"),
    InsnSpec::new("vluxei16.v", "OPV", "000 0 01 - ----- ----- 101 ----- 0000111"),
    InsnSpec::new("vluxei32.v", "OPV", "000 0 01 - ----- ----- 110 ----- 0000111"),
    InsnSpec::new("vluxei64.v", "OPV", "000 0 01 - ----- ----- 111 ----- 0000111"),
    InsnSpec::new("vsuxei8.v", "OPV", "000 0 01 - ----- ----- 000 ----- 0100111"),
    InsnSpec::new("vsuxei16.v", "OPV", "000 0 01 - ----- ----- 101 ----- 0100111"),
    InsnSpec::new("vsuxei32.v", "OPV", "000 0 01 - ----- ----- 110 ----- 0100111"),
    InsnSpec::new("vsuxei64.v", "OPV", "000 0 01 - ----- ----- 111 ----- 0100111"),
    InsnSpec::new("vlse8.v", "OPV", "000 0 10 - ----- ----- 000 ----- 0000111"),
    InsnSpec::new("vlse16.v", "OPV", "000 0 10 - ----- ----- 101 ----- 0000111"),
    InsnSpec::new("vlse32.v", "OPV", "000 0 10 - ----- ----- 110 ----- 0000111"),
    InsnSpec::new("vlse64.v", "OPV", "000 0 10 - ----- ----- 111 ----- 0000111"),
    InsnSpec::new("vsse8.v", "OPV", "000 0 10 - ----- ----- 000 ----- 0100111"),
    InsnSpec::new("vsse16.v", "OPV", "000 0 10 - ----- ----- 101 ----- 0100111"),
    InsnSpec::new("vsse32.v", "OPV", "000 0 10 - ----- ----- 110 ----- 0100111"),
    InsnSpec::new("vsse64.v", "OPV", "000 0 10 - ----- ----- 111 ----- 0100111"),
    InsnSpec::new("vl1r.v", "OPVLS", "000 0 001 01000 ----- 000 ----- 0000111"),
    InsnSpec::new("vl1re16.v", "OPVLS", "000 0 001 01000 ----- 101 ----- 0000111"),
    InsnSpec::new("vl1re32.v", "OPVLS", "000 0 001 01000 ----- 110 ----- 0000111"),
    InsnSpec::new("vl1re64.v", "OPVLS", "000 0 001 01000 ----- 111 ----- 0000111"),
    InsnSpec::new("vl2r.v", "OPVLS", "001 0 001 01000 ----- 000 ----- 0000111"),
    InsnSpec::new("vl2re16.v", "OPVLS", "001 0 001 01000 ----- 101 ----- 0000111"),
    InsnSpec::new("vl2re32.v", "OPVLS", "001 0 001 01000 ----- 110 ----- 0000111"),
    InsnSpec::new("vl2re64.v", "OPVLS", "001 0 001 01000 ----- 111 ----- 0000111"),
    InsnSpec::new("vl4r.v", "OPVLS", "011 0 001 01000 ----- 000 ----- 0000111"),
    InsnSpec::new("vl4re16.v", "OPVLS", "011 0 001 01000 ----- 101 ----- 0000111"),
    InsnSpec::new("vl4re32.v", "OPVLS", "011 0 001 01000 ----- 110 ----- 0000111"),
    InsnSpec::new("vl4re64.v", "OPVLS", "011 0 001 01000 ----- 111 ----- 0000111"),
    InsnSpec::new("vl8r.v", "OPVLS", "111 0 001 01000 ----- 000 ----- 0000111"),
    InsnSpec::new("vl8re16.v", "OPVLS", "111 0 001 01000 ----- 101 ----- 0000111"),
    InsnSpec::new("vl8re32.v", "OPVLS", "111 0 001 01000 ----- 110 ----- 0000111"),
    InsnSpec::new("vl8re64.v", "OPVLS", "111 0 001 01000 ----- 111 ----- 0000111"),
    InsnSpec::new("vs1r.v", "OPVLS", "000 0 001 01000 ----- 000 ----- 0100111"),
    InsnSpec::new("vs2r.v", "OPVLS", "001 0 001 01000 ----- 000 ----- 0100111"),
    InsnSpec::new("vs4r.v", "OPVLS", "011 0 001 01000 ----- 000 ----- 0100111"),
    InsnSpec::new("vs8r.v", "OPVLS", "111 0 001 01000 ----- 000 ----- 0100111"),
    InsnSpec::new("vsetvli", "OPVLI", "- ----------- ----- 111 ----- 1010111"),
    InsnSpec::new("vsetvl", "OPVL", "1000000 ----- ----- 111 ----- 1010111"),
];
