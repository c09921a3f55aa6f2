//! CORE-V custom extension (`cv.` prefix).

use crate::isa::insn::InsnSpec;

/// CORE-V instructions.
pub static COREV: &[InsnSpec] = &[
    InsnSpec::new("LB_POSTINC", "LPOST", "------- ----- ----- 000 ----- 0001011")
        .label("cv.lb")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LBU_POSTINC", "LPOST", "------- ----- ----- 100 ----- 0001011")
        .label("cv.lbu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LH_POSTINC", "LPOST", "------- ----- ----- 001 ----- 0001011")
        .label("cv.lh")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LHU_POSTINC", "LPOST", "------- ----- ----- 101 ----- 0001011")
        .label("cv.lhu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LW_POSTINC", "LPOST", "------- ----- ----- 010 ----- 0001011")
        .label("cv.lw")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LB_RR_POSTINC", "LRPOST", "0000000 ----- ----- 111 ----- 0001011")
        .label("cv.lb")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LBU_RR_POSTINC", "LRPOST", "0100000 ----- ----- 111 ----- 0001011")
        .label("cv.lbu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LH_RR_POSTINC", "LRPOST", "0001000 ----- ----- 111 ----- 0001011")
        .label("cv.lh")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LHU_RR_POSTINC", "LRPOST", "0101000 ----- ----- 111 ----- 0001011")
        .label("cv.lhu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LW_RR_POSTINC", "LRPOST", "0010000 ----- ----- 111 ----- 0001011")
        .label("cv.lw")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LB_RR", "LR", "0000000 ----- ----- 111 ----- 0000011")
        .label("cv.lb")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LBU_RR", "LR", "0100000 ----- ----- 111 ----- 0000011")
        .label("cv.lbu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LH_RR", "LR", "0001000 ----- ----- 111 ----- 0000011")
        .label("cv.lh")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LHU_RR", "LR", "0101000 ----- ----- 111 ----- 0000011")
        .label("cv.lhu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LW_RR", "LR", "0010000 ----- ----- 111 ----- 0000011")
        .label("cv.lw")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("SB_POSTINC", "SPOST", "------- ----- ----- 000 ----- 0101011")
        .label("cv.sb")
        .fast(),
    InsnSpec::new("SH_POSTINC", "SPOST", "------- ----- ----- 001 ----- 0101011")
        .label("cv.sh")
        .fast(),
    InsnSpec::new("SW_POSTINC", "SPOST", "------- ----- ----- 010 ----- 0101011")
        .label("cv.sw")
        .fast(),
    InsnSpec::new("SB_RR_POSTINC", "SRPOST", "0000000 ----- ----- 100 ----- 0101011")
        .label("cv.sb")
        .fast(),
    InsnSpec::new("SH_RR_POSTINC", "SRPOST", "0000000 ----- ----- 101 ----- 0101011")
        .label("cv.sh")
        .fast(),
    InsnSpec::new("SW_RR_POSTINC", "SRPOST", "0000000 ----- ----- 110 ----- 0101011")
        .label("cv.sw")
        .fast(),
    InsnSpec::new("SB_RR", "SR", "0000000 ----- ----- 100 ----- 0100011")
        .label("cv.sb")
        .fast(),
    InsnSpec::new("SH_RR", "SR", "0000000 ----- ----- 101 ----- 0100011")
        .label("cv.sh")
        .fast(),
    InsnSpec::new("SW_RR", "SR", "0000000 ----- ----- 110 ----- 0100011")
        .label("cv.sw")
        .fast(),
    InsnSpec::new("cv.elw", "L", "------- ----- ----- 110 ----- 0000011")
        .tags(&["load"]),
    InsnSpec::new("cv.starti", "HLI", "------- ----- 00000 000 0000- 1111011"),
    InsnSpec::new("cv.endi", "HLI", "------- ----- 00000 001 0000- 1111011"),
    InsnSpec::new("cv.count", "HLR", "0000000 00000 ----- 010 0000- 1111011"),
    InsnSpec::new("cv.counti", "HLI", "------- ----- 00000 011 0000- 1111011"),
    InsnSpec::new("cv.setup", "HL0", "------- ----- ----- 100 0000- 1111011"),
    InsnSpec::new("cv.setupi", "HL1", "------- ----- ----- 101 0000- 1111011"),
    InsnSpec::new("cv.extract", "I4U", "11----- ----- ----- 000 ----- 0110011"),
    InsnSpec::new("cv.extractu", "I4U", "11----- ----- ----- 001 ----- 0110011"),
    InsnSpec::new("cv.insert", "I5U", "11----- ----- ----- 010 ----- 0110011"),
    InsnSpec::new("cv.bclr", "I4U", "11----- ----- ----- 011 ----- 0110011"),
    InsnSpec::new("cv.bset", "I4U", "11----- ----- ----- 100 ----- 0110011"),
    InsnSpec::new("cv.extractr", "R", "1000000 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("cv.extractur", "R", "1000000 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("cv.insertr", "I5U2", "1000000 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("cv.bclrr", "R", "1000000 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("cv.bsetr", "R", "1000000 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("cv.bitrev", "BITREV", "11000-- ----- ----- 101 ----- 0110011")
        .map_to("cv_bitrev"),
    InsnSpec::new("cv.ror", "R", "0000100 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("cv.ff1", "R1", "0001000 00000 ----- 000 ----- 0110011"),
    InsnSpec::new("cv.fl1", "R1", "0001000 00000 ----- 001 ----- 0110011"),
    InsnSpec::new("cv.clb", "R1", "0001000 00000 ----- 010 ----- 0110011"),
    InsnSpec::new("cv.cnt", "R1", "0001000 00000 ----- 011 ----- 0110011"),
    InsnSpec::new("cv.abs", "R1", "0000010 00000 ----- 000 ----- 0110011"),
    InsnSpec::new("cv.slet", "R", "0000010 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("cv.sletu", "R", "0000010 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("cv.min", "R", "0000010 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("cv.minu", "R", "0000010 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("cv.max", "R", "0000010 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("cv.maxu", "R", "0000010 ----- ----- 111 ----- 0110011"),
    InsnSpec::new("cv.exths", "R1", "0001000 00000 ----- 100 ----- 0110011"),
    InsnSpec::new("cv.exthz", "R1", "0001000 00000 ----- 101 ----- 0110011"),
    InsnSpec::new("cv.extbs", "R1", "0001000 00000 ----- 110 ----- 0110011"),
    InsnSpec::new("cv.extbz", "R1", "0001000 00000 ----- 111 ----- 0110011"),
    InsnSpec::new("cv.clip", "I1U", "0001010 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("cv.clipu", "I1U", "0001010 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("cv.clipr", "R", "0001010 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("cv.clipur", "R", "0001010 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("cv.addN", "RRRU2", "00----- ----- ----- 010 ----- 1011011"),
    InsnSpec::new("cv.adduN", "RRRU2", "10----- ----- ----- 010 ----- 1011011"),
    InsnSpec::new("cv.addRN", "RRRU2", "00----- ----- ----- 110 ----- 1011011"),
    InsnSpec::new("cv.adduRN", "RRRU2", "10----- ----- ----- 110 ----- 1011011"),
    InsnSpec::new("cv.subN", "RRRU2", "00----- ----- ----- 011 ----- 1011011"),
    InsnSpec::new("cv.subuN", "RRRU2", "10----- ----- ----- 011 ----- 1011011"),
    InsnSpec::new("cv.subRN", "RRRU2", "00----- ----- ----- 111 ----- 1011011"),
    InsnSpec::new("cv.subuRN", "RRRU2", "10----- ----- ----- 111 ----- 1011011"),
    InsnSpec::new("cv.addNr", "RRRR2", "0100000 ----- ----- 010 ----- 1011011"),
    InsnSpec::new("cv.adduNr", "RRRR2", "1100000 ----- ----- 010 ----- 1011011"),
    InsnSpec::new("cv.addRNr", "RRRR2", "0100000 ----- ----- 110 ----- 1011011"),
    InsnSpec::new("cv.adduRNr", "RRRR2", "1100000 ----- ----- 110 ----- 1011011"),
    InsnSpec::new("cv.subNr", "RRRR2", "0100000 ----- ----- 011 ----- 1011011"),
    InsnSpec::new("cv.subuNr", "RRRR2", "1100000 ----- ----- 011 ----- 1011011"),
    InsnSpec::new("cv.subRNr", "RRRR2", "0100000 ----- ----- 111 ----- 1011011"),
    InsnSpec::new("cv.subuRNr", "RRRR2", "1100000 ----- ----- 111 ----- 1011011"),
    InsnSpec::new("cv.beqimm", "SB2", "------- ----- ----- 010 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("cv.bneimm", "SB2", "------- ----- ----- 011 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("cv.mac", "RRRR", "0100001 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("cv.msu", "RRRR", "0100001 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("cv.muls", "R", "1000000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.mulhhs", "R", "1100000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.mulsN", "RRRU2", "10----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.mulhhsN", "RRRU2", "11----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.mulsRN", "RRRU2", "10----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("cv.mulhhsRN", "RRRU2", "11----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("cv.mulu", "R", "0000000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.mulhhu", "R", "0100000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.muluN", "RRRU2", "00----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.mulhhuN", "RRRU2", "01----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("cv.muluRN", "RRRU2", "00----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("cv.mulhhuRN", "RRRU2", "01----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("cv.macsN", "RRRRU", "10----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("cv.machhsN", "RRRRU", "11----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("cv.macsRN", "RRRRU", "10----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("cv.machhsRN", "RRRRU", "11----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("cv.macuN", "RRRRU", "00----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("cv.machhuN", "RRRRU", "01----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("cv.macuRN", "RRRRU", "00----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("cv.machhuRN", "RRRRU", "01----- ----- ----- 101 ----- 1011011"),
];
