//! Atomic memory operations.

use crate::isa::insn::InsnSpec;

/// RV32A word atomics.
pub static RV32A: &[InsnSpec] = &[
    InsnSpec::new("lr.w", "LRES", "00010 -- 00000 ----- 010 ----- 0101111"),
    InsnSpec::new("sc.w", "AMO", "00011 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amoswap.w", "AMO", "00001 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amoadd.w", "AMO", "00000 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amoxor.w", "AMO", "00100 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amoand.w", "AMO", "01100 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amoor.w", "AMO", "01000 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amomin.w", "AMO", "10000 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amomax.w", "AMO", "10100 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amominu.w", "AMO", "11000 -- ----- ----- 010 ----- 0101111"),
    InsnSpec::new("amomaxu.w", "AMO", "11100 -- ----- ----- 010 ----- 0101111"),
];

/// RV64A doubleword atomics.
pub static RV64A: &[InsnSpec] = &[
    InsnSpec::new("lr.d", "LRES", "00010 -- 00000 ----- 011 ----- 0101111"),
    InsnSpec::new("sc.d", "AMO", "00011 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amoswap.d", "AMO", "00001 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amoadd.d", "AMO", "00000 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amoxor.d", "AMO", "00100 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amoand.d", "AMO", "01100 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amoor.d", "AMO", "01000 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amomin.d", "AMO", "10000 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amomax.d", "AMO", "10100 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amominu.d", "AMO", "11000 -- ----- ----- 011 ----- 0101111"),
    InsnSpec::new("amomaxu.d", "AMO", "11100 -- ----- ----- 011 ----- 0101111"),
];
