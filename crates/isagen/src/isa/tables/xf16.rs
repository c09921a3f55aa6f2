//! IEEE half-precision (`binary16`) floating point.

use crate::isa::insn::InsnSpec;

/// Scalar half-precision instructions.
pub static XF16: &[InsnSpec] = &[
    InsnSpec::new("flh", "FL", "------- ----- ----- 001 ----- 0000111")
        .tags(&["load"]),
    InsnSpec::new("fsh", "FS", "------- ----- ----- 001 ----- 0100111"),
    InsnSpec::new("fmadd.h", "R4U", "-----10 ----- ----- --- ----- 1000011")
        .tags(&["sfmadd"]),
    InsnSpec::new("fmsub.h", "R4U", "-----10 ----- ----- --- ----- 1000111")
        .tags(&["sfmadd"]),
    InsnSpec::new("fnmsub.h", "R4U", "-----10 ----- ----- --- ----- 1001011")
        .tags(&["sfmadd"]),
    InsnSpec::new("fnmadd.h", "R4U", "-----10 ----- ----- --- ----- 1001111")
        .tags(&["sfmadd"]),
    InsnSpec::new("fadd.h", "RF", "0000010 ----- ----- --- ----- 1010011")
        .tags(&["sfadd"]),
    InsnSpec::new("fsub.h", "RF", "0000110 ----- ----- --- ----- 1010011")
        .tags(&["sfadd"]),
    InsnSpec::new("fmul.h", "RF", "0001010 ----- ----- --- ----- 1010011")
        .tags(&["sfmul"]),
    InsnSpec::new("fdiv.h", "RF", "0001110 ----- ----- --- ----- 1010011")
        .tags(&["sfdiv"]),
    InsnSpec::new("fsqrt.h", "R2F3", "0101110 00000 ----- --- ----- 1010011")
        .tags(&["sfdiv"]),
    InsnSpec::new("fsgnj.h", "RVF", "0010010 ----- ----- 000 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fsgnjn.h", "RVF", "0010010 ----- ----- 001 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fsgnjx.h", "RVF", "0010010 ----- ----- 010 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmin.h", "RVF", "0010110 ----- ----- 000 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmax.h", "RVF", "0010110 ----- ----- 001 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("feq.h", "R2VF", "1010010 ----- ----- 010 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("flt.h", "R2VF", "1010010 ----- ----- 001 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fle.h", "R2VF", "1010010 ----- ----- 000 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fcvt.w.h", "R2F1", "1100010 00000 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.wu.h", "R2F1", "1100010 00001 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.h.w", "R2F2", "1101010 00000 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.h.wu", "R2F2", "1101010 00001 ----- --- ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmv.x.h", "R3F", "1110010 00000 ----- 000 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fclass.h", "R3F", "1110010 00000 ----- 001 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fmv.h.x", "R3F2", "1111010 00000 ----- 000 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fcvt.l.h", "R2F1", "1100010 00010 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16"]),
    InsnSpec::new("fcvt.lu.h", "R2F1", "1100010 00011 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16"]),
    InsnSpec::new("fcvt.h.l", "R2F2", "1101010 00010 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16"]),
    InsnSpec::new("fcvt.h.lu", "R2F2", "1101010 00011 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16"]),
    InsnSpec::new("fcvt.s.h", "RVF2", "0100000 00010 ----- 000 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f16f"]),
    InsnSpec::new("fcvt.h.s", "R2F3", "0100010 00000 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f16f"]),
];
