//! Auxiliary small-float operations (expanding multiply-accumulate, dot products).

use crate::isa::insn::InsnSpec;

/// Auxiliary small-float instructions.
pub static XFAUX: &[InsnSpec] = &[
    InsnSpec::new("fmulex.s.h", "RF", "0100110 ----- ----- --- ----- 1010011")
        .tags(&["fmul"])
        .isa_tags(&["f16aux"]),
    InsnSpec::new("fmacex.s.h", "RF4", "0101010 ----- ----- --- ----- 1010011")
        .tags(&["fmadd"])
        .isa_tags(&["f16aux"]),
    InsnSpec::new("vfdotp.h", "RVF", "1001010 ----- ----- 010 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16auxvec"]),
    InsnSpec::new("vfdotp.r.h", "RVF", "1001010 ----- ----- 110 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16auxvec"]),
    InsnSpec::new("vfdotpex.s.h", "RVF", "1001011 ----- ----- 010 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16auxvec"]),
    InsnSpec::new("vfdotpex.s.r.h", "RVF", "1001011 ----- ----- 110 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16auxvec"]),
    InsnSpec::new("vfavg.h", "RVF", "1010110 ----- ----- 010 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16auxvec"]),
    InsnSpec::new("vfavg.r.h", "RVF", "1010110 ----- ----- 110 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16auxvec"]),
    InsnSpec::new("fmulex.s.ah", "RVF", "0100110 ----- ----- 101 ----- 1010011")
        .tags(&["fmul"])
        .isa_tags(&["f16altaux"]),
    InsnSpec::new("fmacex.s.ah", "RVF4", "0101010 ----- ----- 101 ----- 1010011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altaux"]),
    InsnSpec::new("vfdotp.ah", "RVF", "1001010 ----- ----- 001 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altauxvec"]),
    InsnSpec::new("vfdotp.r.ah", "RVF", "1001010 ----- ----- 101 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altauxvec"]),
    InsnSpec::new("vfdotpex.s.ah", "RVF", "1001011 ----- ----- 001 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altauxvec"]),
    InsnSpec::new("vfdotpex.s.r.ah", "RVF", "1001011 ----- ----- 101 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altauxvec"]),
    InsnSpec::new("vfavg.ah", "RVF", "1010110 ----- ----- 001 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16altauxvec"]),
    InsnSpec::new("vfavg.r.ah", "RVF", "1010110 ----- ----- 101 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16altauxvec"]),
    InsnSpec::new("fmulex.s.b", "RF", "0100111 ----- ----- --- ----- 1010011")
        .tags(&["fmul"])
        .isa_tags(&["f8aux"]),
    InsnSpec::new("fmacex.s.b", "RF4", "0101011 ----- ----- --- ----- 1010011")
        .tags(&["fmadd"])
        .isa_tags(&["f8aux"]),
    InsnSpec::new("vfdotp.b", "RVF", "1001010 ----- ----- 011 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8auxvec"]),
    InsnSpec::new("vfdotp.r.b", "RVF", "1001010 ----- ----- 111 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8auxvec"]),
    InsnSpec::new("vfdotpex.s.b", "RVF", "1001011 ----- ----- 011 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8auxvec"]),
    InsnSpec::new("vfdotpex.s.r.b", "RVF", "1001011 ----- ----- 111 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8auxvec"]),
    InsnSpec::new("vfavg.b", "RVF", "1010110 ----- ----- 011 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f8auxvec"]),
    InsnSpec::new("vfavg.r.b", "RVF", "1010110 ----- ----- 111 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f8auxvec"]),
];
