//! Alternate half-precision (`bfloat16`-style) floating point.

use crate::isa::insn::InsnSpec;

/// Scalar alternate half-precision instructions.
pub static XF16ALT: &[InsnSpec] = &[
    InsnSpec::new("fmadd.ah", "R4", "-----10 ----- ----- 101 ----- 1000011")
        .tags(&["sfmadd"]),
    InsnSpec::new("fmsub.ah", "R4", "-----10 ----- ----- 101 ----- 1000111")
        .tags(&["sfmadd"]),
    InsnSpec::new("fnmsub.ah", "R4", "-----10 ----- ----- 101 ----- 1001011")
        .tags(&["sfmadd"]),
    InsnSpec::new("fnmadd.ah", "R4", "-----10 ----- ----- 101 ----- 1001111")
        .tags(&["sfmadd"]),
    InsnSpec::new("fadd.ah", "RVF", "0000010 ----- ----- 101 ----- 1010011")
        .tags(&["sfadd"]),
    InsnSpec::new("fsub.ah", "RVF", "0000110 ----- ----- 101 ----- 1010011")
        .tags(&["sfadd"]),
    InsnSpec::new("fmul.ah", "RVF", "0001010 ----- ----- 101 ----- 1010011")
        .tags(&["sfmul"]),
    InsnSpec::new("fdiv.ah", "RVF", "0001110 ----- ----- 101 ----- 1010011")
        .tags(&["sfdiv"]),
    InsnSpec::new("fsqrt.ah", "RVF2", "0101110 00000 ----- 101 ----- 1010011")
        .tags(&["sfdiv"]),
    InsnSpec::new("fsgnj.ah", "RVF", "0010010 ----- ----- 100 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fsgnjn.ah", "RVF", "0010010 ----- ----- 101 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fsgnjx.ah", "RVF", "0010010 ----- ----- 110 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmin.ah", "RVF", "0010110 ----- ----- 100 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmax.ah", "RVF", "0010110 ----- ----- 101 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("feq.ah", "R2VF", "1010010 ----- ----- 110 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("flt.ah", "R2VF", "1010010 ----- ----- 101 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fle.ah", "R2VF", "1010010 ----- ----- 100 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fcvt.w.ah", "R2VF2", "1100010 00000 ----- 101 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.wu.ah", "R2VF2", "1100010 00001 ----- 101 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.ah.w", "R3F2", "1101010 00000 ----- 101 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fcvt.ah.wu", "R3F2", "1101010 00001 ----- 101 ----- 1010011")
        .tags(&["sfconv"]),
    InsnSpec::new("fmv.x.ah", "R3F", "1110010 00000 ----- 100 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fclass.ah", "R3F", "1110010 00000 ----- 101 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fmv.ah.x", "R3F2", "1111010 00000 ----- 100 ----- 1010011")
        .tags(&["sfother"]),
    InsnSpec::new("fcvt.l.ah", "R2VF2", "1100010 00010 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16alt"]),
    InsnSpec::new("fcvt.lu.ah", "R2VF2", "1100010 00011 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16alt"]),
    InsnSpec::new("fcvt.ah.l", "R3F2", "1101010 00010 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16alt"]),
    InsnSpec::new("fcvt.ah.lu", "R3F2", "1101010 00011 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["rv64f16alt"]),
    InsnSpec::new("fcvt.s.ah", "RVF2", "0100000 00110 ----- 000 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f16altf"]),
    InsnSpec::new("fcvt.ah.s", "RVF2", "0100010 00000 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f16altf"]),
    InsnSpec::new("fcvt.h.ah", "R2F3", "0100010 00110 ----- --- ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f16altf16"]),
    InsnSpec::new("fcvt.ah.h", "RVF2", "0100010 00010 ----- 101 ----- 1010011")
        .tags(&["sfconv"])
        .isa_tags(&["f16altf16"]),
];
