//! Integer multiply and divide.

use crate::isa::insn::InsnSpec;

/// RV32M multiply/divide.
pub static RV32M: &[InsnSpec] = &[
    InsnSpec::new("mul", "R", "0000001 ----- ----- 000 ----- 0110011")
        .tags(&["mul"]),
    InsnSpec::new("mulh", "R", "0000001 ----- ----- 001 ----- 0110011")
        .tags(&["mulh"]),
    InsnSpec::new("mulhsu", "R", "0000001 ----- ----- 010 ----- 0110011")
        .tags(&["mulh"]),
    InsnSpec::new("mulhu", "R", "0000001 ----- ----- 011 ----- 0110011")
        .tags(&["mulh"]),
    InsnSpec::new("div", "R", "0000001 ----- ----- 100 ----- 0110011")
        .tags(&["div"]),
    InsnSpec::new("divu", "R", "0000001 ----- ----- 101 ----- 0110011")
        .tags(&["div"]),
    InsnSpec::new("rem", "R", "0000001 ----- ----- 110 ----- 0110011")
        .tags(&["div"]),
    InsnSpec::new("remu", "R", "0000001 ----- ----- 111 ----- 0110011")
        .tags(&["div"]),
];

/// RV64M word-sized multiply/divide.
pub static RV64M: &[InsnSpec] = &[
    InsnSpec::new("mulw", "R", "0000001 ----- ----- 000 ----- 0111011")
        .tags(&["mul"]),
    InsnSpec::new("divw", "R", "0000001 ----- ----- 100 ----- 0111011")
        .tags(&["div"]),
    InsnSpec::new("divuw", "R", "0000001 ----- ----- 101 ----- 0111011")
        .tags(&["div"]),
    InsnSpec::new("remw", "R", "0000001 ----- ----- 110 ----- 0111011")
        .tags(&["div"]),
    InsnSpec::new("remuw", "R", "0000001 ----- ----- 111 ----- 0111011")
        .tags(&["div"]),
];
