//! Quarter-precision (8-bit) floating point.

use crate::isa::insn::InsnSpec;

/// Scalar 8-bit float instructions.
pub static XF8: &[InsnSpec] = &[
    InsnSpec::new("flb", "FL", "------- ----- ----- 000 ----- 0000111")
        .tags(&["load"]),
    InsnSpec::new("fsb", "FS", "------- ----- ----- 000 ----- 0100111"),
    InsnSpec::new("fmadd.b", "R4U", "-----11 ----- ----- --- ----- 1000011")
        .tags(&["sfmadd"]),
    InsnSpec::new("fmsub.b", "R4U", "-----11 ----- ----- --- ----- 1000111")
        .tags(&["sfmadd"]),
    InsnSpec::new("fnmsub.b", "R4U", "-----11 ----- ----- --- ----- 1001011")
        .tags(&["sfmadd"]),
    InsnSpec::new("fnmadd.b", "R4U", "-----11 ----- ----- --- ----- 1001111")
        .tags(&["sfmadd"]),
    InsnSpec::new("fadd.b", "RF", "0000011 ----- ----- --- ----- 1010011")
        .tags(&["sfadd"]),
    InsnSpec::new("fsub.b", "RF", "0000111 ----- ----- --- ----- 1010011")
        .tags(&["sfadd"]),
    InsnSpec::new("fmul.b", "RF", "0001011 ----- ----- --- ----- 1010011")
        .tags(&["sfmul"]),
    InsnSpec::new("fdiv.b", "RF", "0001111 ----- ----- --- ----- 1010011")
        .tags(&["sfdiv"]),
    InsnSpec::new("fsqrt.b", "R2F3", "0101111 00000 ----- --- ----- 1010011")
        .tags(&["sfdiv"]),
    InsnSpec::new("fsgnj.b", "RVF", "0010011 ----- ----- 000 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fsgnjn.b", "RVF", "0010011 ----- ----- 001 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fsgnjx.b", "RVF", "0010011 ----- ----- 010 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmin.b", "RVF", "0010111 ----- ----- 000 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmax.b", "RVF", "0010111 ----- ----- 001 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("feq.b", "R2VF", "1010011 ----- ----- 010 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("flt.b", "R2VF", "1010011 ----- ----- 001 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fle.b", "R2VF", "1010011 ----- ----- 000 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fcvt.w.b", "R2F1", "1100011 00000 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.wu.b", "R2F1", "1100011 00001 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.b.w", "R2F2", "1101011 00000 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.b.wu", "R2F2", "1101011 00001 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmv.x.b", "R3F", "1110011 00000 ----- 000 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fclass.b", "R3F", "1110011 00000 ----- 001 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fmv.b.x", "R3F2", "1111011 00000 ----- 000 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fcvt.l.b", "R2F1", "1100011 00010 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f8"]),
    InsnSpec::new("fcvt.lu.b", "R2F1", "1100011 00011 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f8"]),
    InsnSpec::new("fcvt.b.l", "R2F2", "1101011 00010 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f8"]),
    InsnSpec::new("fcvt.b.lu", "R2F2", "1101011 00011 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f8"]),
    InsnSpec::new("fcvt.s.b", "RVF2", "0100000 00011 ----- 000 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f8f"]),
    InsnSpec::new("fcvt.b.s", "R2F3", "0100011 00000 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f8f"]),
    InsnSpec::new("fcvt.h.b", "RVF2", "0100010 00011 ----- 000 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f8f16"]),
    InsnSpec::new("fcvt.b.h", "R2F3", "0100011 00010 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f8f16"]),
    InsnSpec::new("fcvt.ah.b", "RVF2", "0100010 00011 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f8f16alt"]),
    InsnSpec::new("fcvt.b.ah", "R2F3", "0100011 00110 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f8f16alt"]),
];
