//! Privileged instructions.
//!
//! These are always decoded last so that they never shadow a standard or
//! custom encoding.

use crate::isa::insn::InsnSpec;

/// CSR access instructions.
pub static PRIV: &[InsnSpec] = &[
    InsnSpec::new("csrrw", "IU", "------- ----- ----- 001 ----- 1110011")
        .decode("csr_decode"),
    InsnSpec::new("csrrs", "IU", "------- ----- ----- 010 ----- 1110011")
        .decode("csr_decode"),
    InsnSpec::new("csrrc", "IU", "------- ----- ----- 011 ----- 1110011")
        .decode("csr_decode"),
    InsnSpec::new("csrrwi", "IUR", "------- ----- ----- 101 ----- 1110011")
        .decode("csr_decode"),
    InsnSpec::new("csrrsi", "IUR", "------- ----- ----- 110 ----- 1110011")
        .decode("csr_decode"),
    InsnSpec::new("csrrci", "IUR", "------- ----- ----- 111 ----- 1110011")
        .decode("csr_decode"),
];

/// Trap-return and wait-for-interrupt instructions.
pub static TRAP_RETURN: &[InsnSpec] = &[
    InsnSpec::new("sret", "Z", "0001000 00010 00000 000 00000 1110011"),
    InsnSpec::new("mret", "Z", "0011000 00010 00000 000 00000 1110011"),
    InsnSpec::new("dret", "Z", "0111101 10010 00000 000 00000 1110011"),
    InsnSpec::new("wfi", "Z", "0001000 00101 00000 000 00000 1110011"),
];

/// Supervisor memory-management fences.
pub static PRIV_SMMU: &[InsnSpec] = &[
    InsnSpec::new("sfence.vma", "INRR", "0001001 ----- ----- 000 00000 1110011"),
];
