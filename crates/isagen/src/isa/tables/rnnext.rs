//! Recurrent neural-network helper extension.

use crate::isa::insn::InsnSpec;

/// RNN helper instructions.
pub static RNNEXT: &[InsnSpec] = &[
    InsnSpec::new("pl.sdotsp.h.0", "LRRRR", "101110- ----- ----- 000 ----- 1110111"),
    InsnSpec::new("pl.sdotsp.h.1", "LRRRR", "101111- ----- ----- 000 ----- 1110111"),
    InsnSpec::new("pl.tanh", "R1", "1111100 00000 ----- 000 ----- 1110111"),
    InsnSpec::new("pl.sig", "R1", "1111100 00000 ----- 001 ----- 1110111"),
];
