//! Single-precision floating point.

use crate::isa::insn::InsnSpec;

/// RV32F single-precision instructions; `rv64f`-tagged rows need a 64-bit core.
pub static RV32F: &[InsnSpec] = &[
    InsnSpec::new("flw", "FL", "------- ----- ----- 010 ----- 0000111")
        .tags(&["load"]),
    InsnSpec::new("fsw", "FS", "------- ----- ----- 010 ----- 0100111"),
    InsnSpec::new("fmadd.s", "R4U", "-----00 ----- ----- --- ----- 1000011")
        .tags(&["fmadd"]),
    InsnSpec::new("fmsub.s", "R4U", "-----00 ----- ----- --- ----- 1000111")
        .tags(&["fmadd"]),
    InsnSpec::new("fnmsub.s", "R4U", "-----00 ----- ----- --- ----- 1001011")
        .tags(&["fmadd"]),
    InsnSpec::new("fnmadd.s", "R4U", "-----00 ----- ----- --- ----- 1001111")
        .tags(&["fmadd"]),
    InsnSpec::new("fadd.s", "RF", "0000000 ----- ----- --- ----- 1010011")
        .tags(&["fadd"]),
    InsnSpec::new("fsub.s", "RF", "0000100 ----- ----- --- ----- 1010011")
        .tags(&["fadd"]),
    InsnSpec::new("fmul.s", "RF", "0001000 ----- ----- --- ----- 1010011")
        .tags(&["fmul"]),
    InsnSpec::new("fdiv.s", "RF", "0001100 ----- ----- --- ----- 1010011")
        .tags(&["fdiv"]),
    InsnSpec::new("fsqrt.s", "R2F3", "0101100 00000 ----- --- ----- 1010011")
        .tags(&["fdiv"]),
    InsnSpec::new("fsgnj.s", "RVF", "0010000 ----- ----- 000 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fsgnjn.s", "RVF", "0010000 ----- ----- 001 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fsgnjx.s", "RVF", "0010000 ----- ----- 010 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fmin.s", "RVF", "0010100 ----- ----- 000 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fmax.s", "RVF", "0010100 ----- ----- 001 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("feq.s", "R2VF", "1010000 ----- ----- 010 ----- 1010011"),
    InsnSpec::new("flt.s", "R2VF", "1010000 ----- ----- 001 ----- 1010011"),
    InsnSpec::new("fle.s", "R2VF", "1010000 ----- ----- 000 ----- 1010011"),
    InsnSpec::new("fcvt.w.s", "R2F1", "1100000 00000 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.wu.s", "R2F1", "1100000 00001 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.s.w", "R2F2", "1101000 00000 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.s.wu", "R2F2", "1101000 00001 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fmv.x.s", "R3F", "1110000 00000 ----- 000 ----- 1010011"),
    InsnSpec::new("fclass.s", "R3F", "1110000 00000 ----- 001 ----- 1010011"),
    InsnSpec::new("fmv.s.x", "R3F2", "1111000 00000 ----- 000 ----- 1010011"),
    InsnSpec::new("fcvt.l.s", "R2F1", "1100000 00010 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fcvt.lu.s", "R2F1", "1100000 00011 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fcvt.s.l", "R2F2", "1101000 00010 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fcvt.s.lu", "R2F2", "1101000 00011 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
];
