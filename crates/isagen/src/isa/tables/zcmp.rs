//! Compressed push/pop macro-ops.

use crate::isa::insn::InsnSpec;

/// Zcmp stack push/pop sequences.
pub static ZCMP: &[InsnSpec] = &[
    InsnSpec::new("cm.push", "CMPUSH", "101 110 00- -- --- 10")
        .macro_op(),
    InsnSpec::new("cm.pop", "CMPUSH", "101 110 10- -- --- 10")
        .macro_op(),
    InsnSpec::new("cm.popretz", "CMPUSH", "101 111 00- -- --- 10")
        .macro_op(),
    InsnSpec::new("cm.popret", "CMPUSH", "101 111 10- -- --- 10")
        .macro_op(),
];
