//! Double-precision floating point.

use crate::isa::insn::InsnSpec;

/// RV32D double-precision instructions.
pub static RV32D: &[InsnSpec] = &[
    InsnSpec::new("fld", "FL", "------- ----- ----- 011 ----- 0000111")
        .tags(&["load"]),
    InsnSpec::new("fsd", "FS", "------- ----- ----- 011 ----- 0100111"),
    InsnSpec::new("fmadd.d", "R4U", "-----01 ----- ----- --- ----- 1000011")
        .tags(&["fmadd"]),
    InsnSpec::new("fmsub.d", "R4U", "-----01 ----- ----- --- ----- 1000111")
        .tags(&["fmadd"]),
    InsnSpec::new("fnmsub.d", "R4U", "-----01 ----- ----- --- ----- 1001011")
        .tags(&["fmadd"]),
    InsnSpec::new("fnmadd.d", "R4U", "-----01 ----- ----- --- ----- 1001111")
        .tags(&["fmadd"]),
    InsnSpec::new("fadd.d", "RF", "0000001 ----- ----- --- ----- 1010011")
        .tags(&["fadd"]),
    InsnSpec::new("fsub.d", "RF", "0000101 ----- ----- --- ----- 1010011")
        .tags(&["fadd"]),
    InsnSpec::new("fmul.d", "RF", "0001001 ----- ----- --- ----- 1010011")
        .tags(&["fmul"]),
    InsnSpec::new("fdiv.d", "RF", "0001101 ----- ----- --- ----- 1010011")
        .tags(&["fdiv"]),
    InsnSpec::new("fsqrt.d", "R2F3", "0101101 00000 ----- --- ----- 1010011")
        .tags(&["fdiv"]),
    InsnSpec::new("fsgnj.d", "RVF", "0010001 ----- ----- 000 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fsgnjn.d", "RVF", "0010001 ----- ----- 001 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fsgnjx.d", "RVF", "0010001 ----- ----- 010 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fmin.d", "RVF", "0010101 ----- ----- 000 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fmax.d", "RVF", "0010101 ----- ----- 001 ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.s.d", "R2F3", "0100000 00001 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.d.s", "R2F3", "0100001 00000 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("feq.d", "R2VF", "1010001 ----- ----- 010 ----- 1010011"),
    InsnSpec::new("flt.d", "R2VF", "1010001 ----- ----- 001 ----- 1010011"),
    InsnSpec::new("fle.d", "R2VF", "1010001 ----- ----- 000 ----- 1010011"),
    InsnSpec::new("fcvt.w.d", "R2F1", "1100001 00000 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.wu.d", "R2F1", "1100001 00001 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.d.w", "R2F2", "1101001 00000 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fcvt.d.wu", "R2F2", "1101001 00001 ----- --- ----- 1010011")
        .tags(&["fconv"]),
    InsnSpec::new("fclass.d", "R3F", "1110001 00000 ----- 001 ----- 1010011"),
    InsnSpec::new("fcvt.l.d", "R2F1", "1100001 00010 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fcvt.lu.d", "R2F1", "1100001 00011 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fmv.x.d", "R3F", "1110001 00000 ----- 000 ----- 1010011"),
    InsnSpec::new("fcvt.d.l", "R2F2", "1101001 00010 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fcvt.d.lu", "R2F2", "1101001 00011 ----- --- ----- 1010011")
        .tags(&["fconv"])
        .isa_tags(&["rv64f"]),
    InsnSpec::new("fmv.d.x", "R3F2", "1111001 00000 ----- 000 ----- 1010011"),
];
