//! Packed-SIMD small floating point.
//!
//! Operates on several narrow floats packed into one floating-point register.

use crate::isa::insn::InsnSpec;

/// Packed small-float instructions.
pub static XFVEC: &[InsnSpec] = &[
    InsnSpec::new("vfadd.h", "RVF", "1000001 ----- ----- 010 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfadd.r.h", "RVF", "1000001 ----- ----- 110 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsub.h", "RVF", "1000010 ----- ----- 010 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsub.r.h", "RVF", "1000010 ----- ----- 110 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmul.h", "RVF", "1000011 ----- ----- 010 ----- 0110011")
        .tags(&["fmul"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmul.r.h", "RVF", "1000011 ----- ----- 110 ----- 0110011")
        .tags(&["fmul"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfdiv.h", "RVF", "1000100 ----- ----- 010 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfdiv.r.h", "RVF", "1000100 ----- ----- 110 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmin.h", "RVF", "1000101 ----- ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmin.r.h", "RVF", "1000101 ----- ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmax.h", "RVF", "1000110 ----- ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmax.r.h", "RVF", "1000110 ----- ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsqrt.h", "RVF2", "1000111 00000 ----- 010 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmac.h", "RVF4", "1001000 ----- ----- 010 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmac.r.h", "RVF4", "1001000 ----- ----- 110 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmre.h", "RVF4", "1001001 ----- ----- 010 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmre.r.h", "RVF4", "1001001 ----- ----- 110 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfclass.h", "R2VF2", "1001100 00001 ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsgnj.h", "RVF", "1001101 ----- ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsgnj.r.h", "RVF", "1001101 ----- ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsgnjn.h", "RVF", "1001110 ----- ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsgnjn.r.h", "RVF", "1001110 ----- ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsgnjx.h", "RVF", "1001111 ----- ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfsgnjx.r.h", "RVF", "1001111 ----- ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfeq.h", "R2VF", "1010000 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfeq.r.h", "R2VF", "1010000 ----- ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfne.h", "R2VF", "1010001 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfne.r.h", "R2VF", "1010001 ----- ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vflt.h", "R2VF", "1010010 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vflt.r.h", "R2VF", "1010010 ----- ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfge.h", "R2VF", "1010011 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfge.r.h", "R2VF", "1010011 ----- ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfle.h", "R2VF", "1010100 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfle.r.h", "R2VF", "1010100 ----- ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfgt.h", "R2VF", "1010101 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfgt.r.h", "R2VF", "1010101 ----- ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfcpka.h.s", "R2VF", "1011000 ----- ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vec"]),
    InsnSpec::new("vfmv.x.h", "R3F", "1001100 00000 ----- 010 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vecno32d"]),
    InsnSpec::new("vfmv.h.x", "R3F2", "1001100 00000 ----- 110 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16vecno32d"]),
    InsnSpec::new("vfcvt.x.h", "R3F", "1001100 00010 ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vecno32d"]),
    InsnSpec::new("vfcvt.xu.h", "R3F", "1001100 00010 ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vecno32d"]),
    InsnSpec::new("vfcvt.h.x", "R3F2", "1001100 00011 ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vecno32d"]),
    InsnSpec::new("vfcvt.h.xu", "R3F2", "1001100 00011 ----- 110 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16vecno32d"]),
    InsnSpec::new("vfadd.ah", "RVF", "1000001 ----- ----- 001 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfadd.r.ah", "RVF", "1000001 ----- ----- 101 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsub.ah", "RVF", "1000010 ----- ----- 001 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsub.r.ah", "RVF", "1000010 ----- ----- 101 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmul.ah", "RVF", "1000011 ----- ----- 001 ----- 0110011")
        .tags(&["fmul"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmul.r.ah", "RVF", "1000011 ----- ----- 101 ----- 0110011")
        .tags(&["fmul"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfdiv.ah", "RVF", "1000100 ----- ----- 001 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfdiv.r.ah", "RVF", "1000100 ----- ----- 101 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmin.ah", "RVF", "1000101 ----- ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmin.r.ah", "RVF", "1000101 ----- ----- 101 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmax.ah", "RVF", "1000110 ----- ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmax.r.ah", "RVF", "1000110 ----- ----- 101 ----- 0110011")
        .tags(&["fconv"]),
    InsnSpec::new("vfsqrt.ah", "RVF2", "1000111 00000 ----- 001 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmac.ah", "RVF4", "1001000 ----- ----- 001 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmac.r.ah", "RVF4", "1001000 ----- ----- 101 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmre.ah", "RVF4", "1001001 ----- ----- 001 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmre.r.ah", "RVF4", "1001001 ----- ----- 101 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfclass.ah", "R2VF2", "1001100 00001 ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsgnj.r.ah", "RVF", "1001101 ----- ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsgnj.ah", "RVF", "1001101 ----- ----- 101 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsgnjn.ah", "RVF", "1001110 ----- ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsgnjn.r.ah", "RVF", "1001110 ----- ----- 101 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsgnjx.ah", "RVF", "1001111 ----- ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfsgnjx.r.ah", "RVF", "1001111 ----- ----- 101 ----- 0110011")
        .tags(&["fconv"]),
    InsnSpec::new("vfeq.ah", "R2VF", "1010000 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfeq.r.ah", "R2VF", "1010000 ----- ----- 101 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfne.ah", "R2VF", "1010001 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfne.r.ah", "R2VF", "1010001 ----- ----- 101 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vflt.ah", "R2VF", "1010010 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vflt.r.ah", "R2VF", "1010010 ----- ----- 101 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfge.ah", "R2VF", "1010011 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfge.r.ah", "R2VF", "1010011 ----- ----- 101 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfle.ah", "R2VF", "1010100 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfle.r.ah", "R2VF", "1010100 ----- ----- 101 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfgt.ah", "R2VF", "1010101 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfgt.r.ah", "R2VF", "1010101 ----- ----- 101 ----- 0110011")
        .tags(&["fother"]),
    InsnSpec::new("vfcpka.ah.s", "R2VF", "1011000 ----- ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvec"]),
    InsnSpec::new("vfmv.x.ah", "R3F", "1001100 00000 ----- 001 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvecno32d"]),
    InsnSpec::new("vfmv.ah.x", "R3F2", "1001100 00000 ----- 101 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f16altvecno32d"]),
    InsnSpec::new("vfcvt.x.ah", "R3F", "1001100 00010 ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvecno32d"]),
    InsnSpec::new("vfcvt.xu.ah", "R3F", "1001100 00010 ----- 101 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvecno32d"]),
    InsnSpec::new("vfcvt.ah.x", "R3F2", "1001100 00011 ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvecno32d"]),
    InsnSpec::new("vfcvt.ah.xu", "R3F2", "1001100 00011 ----- 101 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvecno32d"]),
    InsnSpec::new("vfcvt.h.ah", "RVF2", "1001100 00101 ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvecf16"]),
    InsnSpec::new("vfcvt.ah.h", "RVF2", "1001100 00110 ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f16altvecf16"]),
    InsnSpec::new("vfadd.b", "RVF", "1000001 ----- ----- 011 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfadd.r.b", "RVF", "1000001 ----- ----- 111 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsub.b", "RVF", "1000010 ----- ----- 011 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsub.r.b", "RVF", "1000010 ----- ----- 111 ----- 0110011")
        .tags(&["fadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmul.b", "RVF", "1000011 ----- ----- 011 ----- 0110011")
        .tags(&["fmul"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmul.r.b", "RVF", "1000011 ----- ----- 111 ----- 0110011")
        .tags(&["fmul"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfdiv.b", "RVF", "1000100 ----- ----- 011 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfdiv.r.b", "RVF", "1000100 ----- ----- 111 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmin.b", "RVF", "1000101 ----- ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmin.r.b", "RVF", "1000101 ----- ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmax.b", "RVF", "1000110 ----- ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmax.r.b", "RVF", "1000110 ----- ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsqrt.b", "RVF2", "1000111 00000 ----- 011 ----- 0110011")
        .tags(&["fdiv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmac.b", "RVF4", "1001000 ----- ----- 011 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmac.r.b", "RVF4", "1001000 ----- ----- 111 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmre.b", "RVF4", "1001001 ----- ----- 011 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmre.r.b", "RVF4", "1001001 ----- ----- 111 ----- 0110011")
        .tags(&["fmadd"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfclass.b", "R2VF2", "1001100 00001 ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsgnj.r.b", "RVF", "1001101 ----- ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsgnj.b", "RVF", "1001101 ----- ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsgnjn.b", "RVF", "1001110 ----- ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsgnjn.r.b", "RVF", "1001110 ----- ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsgnjx.b", "RVF", "1001111 ----- ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfsgnjx.r.b", "RVF", "1001111 ----- ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfeq.b", "R2VF", "1010000 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfeq.r.b", "R2VF", "1010000 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfne.b", "R2VF", "1010001 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfne.r.b", "R2VF", "1010001 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vflt.b", "R2VF", "1010010 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vflt.r.b", "R2VF", "1010010 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfge.b", "R2VF", "1010011 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfge.r.b", "R2VF", "1010011 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfle.b", "R2VF", "1010100 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfle.r.b", "R2VF", "1010100 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfgt.b", "R2VF", "1010101 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfgt.r.b", "R2VF", "1010101 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vec"]),
    InsnSpec::new("vfmv.x.b", "R3F", "1001100 00000 ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vecno32d"]),
    InsnSpec::new("vfmv.b.x", "R3F2", "1001100 00000 ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vecno32d"]),
    InsnSpec::new("vfcvt.x.b", "R3F", "1001100 00010 ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecno32d"]),
    InsnSpec::new("vfcvt.xu.b", "R3F", "1001100 00010 ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecno32d"]),
    InsnSpec::new("vfcvt.b.x", "R3F2", "1001100 00011 ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecno32d"]),
    InsnSpec::new("vfcvt.b.xu", "R3F2", "1001100 00011 ----- 111 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecno32d"]),
    InsnSpec::new("vfcpka.b.s", "R2VF", "1011000 ----- ----- 011 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vecf"]),
    InsnSpec::new("vfcpkb.b.s", "R2VF", "1011000 ----- ----- 111 ----- 0110011")
        .tags(&["fother"])
        .isa_tags(&["f8vecf"]),
    InsnSpec::new("vfcvt.h.b", "RVF2", "1001100 00111 ----- 010 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecf16"]),
    InsnSpec::new("vfcvt.b.h", "RVF2", "1001100 00110 ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecf16"]),
    InsnSpec::new("vfcvt.ah.b", "RVF2", "1001100 00111 ----- 001 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecf16alt"]),
    InsnSpec::new("vfcvt.b.ah", "RVF2", "1001100 00101 ----- 011 ----- 0110011")
        .tags(&["fconv"])
        .isa_tags(&["f8vecf16alt"]),
];
