//! PULP v2 custom extension: post-increment memory accesses, hardware
//! loops, bit manipulation and packed SIMD.

use crate::isa::insn::InsnSpec;

/// PULP v2 instructions.
pub static PULPV2: &[InsnSpec] = &[
    InsnSpec::new("LB_RR", "LR", "0000000 ----- ----- 111 ----- 0000011")
        .label("p.lb")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LH_RR", "LR", "0001000 ----- ----- 111 ----- 0000011")
        .label("p.lh")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LW_RR", "LR", "0010000 ----- ----- 111 ----- 0000011")
        .label("p.lw")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LBU_RR", "LR", "0100000 ----- ----- 111 ----- 0000011")
        .label("p.lbu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LHU_RR", "LR", "0101000 ----- ----- 111 ----- 0000011")
        .label("p.lhu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LB_POSTINC", "LPOST", "------- ----- ----- 000 ----- 0001011")
        .label("p.lb")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LH_POSTINC", "LPOST", "------- ----- ----- 001 ----- 0001011")
        .label("p.lh")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LW_POSTINC", "LPOST", "------- ----- ----- 010 ----- 0001011")
        .label("p.lw")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LBU_POSTINC", "LPOST", "------- ----- ----- 100 ----- 0001011")
        .label("p.lbu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LHU_POSTINC", "LPOST", "------- ----- ----- 101 ----- 0001011")
        .label("p.lhu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("SB_POSTINC", "SPOST", "------- ----- ----- 000 ----- 0101011")
        .label("p.sb")
        .fast(),
    InsnSpec::new("SH_POSTINC", "SPOST", "------- ----- ----- 001 ----- 0101011")
        .label("p.sh")
        .fast(),
    InsnSpec::new("SW_POSTINC", "SPOST", "------- ----- ----- 010 ----- 0101011")
        .label("p.sw")
        .fast(),
    InsnSpec::new("LB_RR_POSTINC", "LRPOST", "0000000 ----- ----- 111 ----- 0001011")
        .label("p.lb")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LH_RR_POSTINC", "LRPOST", "0001000 ----- ----- 111 ----- 0001011")
        .label("p.lh")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LW_RR_POSTINC", "LRPOST", "0010000 ----- ----- 111 ----- 0001011")
        .label("p.lw")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LBU_RR_POSTINC", "LRPOST", "0100000 ----- ----- 111 ----- 0001011")
        .label("p.lbu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("LHU_RR_POSTINC", "LRPOST", "0101000 ----- ----- 111 ----- 0001011")
        .label("p.lhu")
        .fast()
        .tags(&["load"]),
    InsnSpec::new("SB_RR_POSTINC", "SRPOST", "0000000 ----- ----- 100 ----- 0101011")
        .label("p.sb")
        .fast(),
    InsnSpec::new("SH_RR_POSTINC", "SRPOST", "0000000 ----- ----- 101 ----- 0101011")
        .label("p.sh")
        .fast(),
    InsnSpec::new("SW_RR_POSTINC", "SRPOST", "0000000 ----- ----- 110 ----- 0101011")
        .label("p.sw")
        .fast(),
    InsnSpec::new("p.avgu", "R", "0000010 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("p.slet", "R", "0000010 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.sletu", "R", "0000010 ----- ----- 011 ----- 0110011"),
    InsnSpec::new("p.min", "R", "0000010 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("p.minu", "R", "0000010 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("p.max", "R", "0000010 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("p.maxu", "R", "0000010 ----- ----- 111 ----- 0110011"),
    InsnSpec::new("p.ror", "R", "0000100 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("p.ff1", "R1", "0001000 00000 ----- 000 ----- 0110011"),
    InsnSpec::new("p.fl1", "R1", "0001000 00000 ----- 001 ----- 0110011"),
    InsnSpec::new("p.clb", "R1", "0001000 00000 ----- 010 ----- 0110011"),
    InsnSpec::new("p.cnt", "R1", "0001000 00000 ----- 011 ----- 0110011"),
    InsnSpec::new("p.exths", "R1", "0001000 00000 ----- 100 ----- 0110011"),
    InsnSpec::new("p.exthz", "R1", "0001000 00000 ----- 101 ----- 0110011"),
    InsnSpec::new("p.extbs", "R1", "0001000 00000 ----- 110 ----- 0110011"),
    InsnSpec::new("p.extbz", "R1", "0001000 00000 ----- 111 ----- 0110011"),
    InsnSpec::new("lp.starti", "HL0", "------- ----- ----- 000 0000- 1111011"),
    InsnSpec::new("lp.endi", "HL0", "------- ----- ----- 001 0000- 1111011"),
    InsnSpec::new("lp.count", "HL0", "------- ----- ----- 010 0000- 1111011"),
    InsnSpec::new("lp.counti", "HL0", "------- ----- ----- 011 0000- 1111011"),
    InsnSpec::new("lp.setup", "HL0", "------- ----- ----- 100 0000- 1111011"),
    InsnSpec::new("lp.setupi", "HL1", "------- ----- ----- 101 0000- 1111011"),
    InsnSpec::new("p.abs", "R1", "0000010 00000 ----- 000 ----- 0110011"),
    InsnSpec::new("SB_RR", "SR", "0000000 ----- ----- 100 ----- 0100011")
        .label("p.sb")
        .fast(),
    InsnSpec::new("SH_RR", "SR", "0000000 ----- ----- 101 ----- 0100011")
        .label("p.sh")
        .fast(),
    InsnSpec::new("SW_RR", "SR", "0000000 ----- ----- 110 ----- 0100011")
        .label("p.sw")
        .fast(),
    InsnSpec::new("p.elw", "L", "------- ----- ----- 110 ----- 0000011")
        .tags(&["load"]),
    InsnSpec::new("pv.add.h", "R", "000000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.add.sc.h", "R", "000000- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.add.sci.h", "RRS", "000000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.add.b", "R", "000000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.add.sc.b", "R", "000000- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.add.sci.b", "RRS", "000000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.sub.h", "R", "000010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.sub.sc.h", "R", "000010- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.sub.sci.h", "RRS", "000010- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.sub.b", "R", "000010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.sub.sc.b", "R", "000010- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.sub.sci.b", "RRS", "000010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.avg.h", "R", "000100- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.avg.sc.h", "R", "000100- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.avg.sci.h", "RRS", "000100- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.avg.b", "R", "000100- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.avg.sc.b", "R", "000100- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.avg.sci.b", "RRS", "000100- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.avgu.h", "R", "000110- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.avgu.sc.h", "R", "000110- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.avgu.sci.h", "RRU", "000110- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.avgu.b", "R", "000110- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.avgu.sc.b", "R", "000110- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.avgu.sci.b", "RRU", "000110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.min.h", "R", "001000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.min.sc.h", "R", "001000- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.min.sci.h", "RRS", "001000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.min.b", "R", "001000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.min.sc.b", "R", "001000- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.min.sci.b", "RRS", "001000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.minu.h", "R", "001010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.minu.sc.h", "R", "001010- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.minu.sci.h", "RRU", "001010- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.minu.b", "R", "001010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.minu.sc.b", "R", "001010- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.minu.sci.b", "RRU", "001010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.max.h", "R", "001100- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.max.sc.h", "R", "001100- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.max.sci.h", "RRS", "001100- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.max.b", "R", "001100- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.max.sc.b", "R", "001100- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.max.sci.b", "RRS", "001100- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.maxu.h", "R", "001110- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.maxu.sc.h", "R", "001110- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.maxu.sci.h", "RRU", "001110- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.maxu.b", "R", "001110- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.maxu.sc.b", "R", "001110- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.maxu.sci.b", "RRU", "001110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.srl.h", "R", "010000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.srl.sc.h", "R", "010000- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.srl.sci.h", "RRU", "010000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.srl.b", "R", "010000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.srl.sc.b", "R", "010000- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.srl.sci.b", "RRU", "010000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.sra.h", "R", "010010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.sra.sc.h", "R", "010010- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.sra.sci.h", "RRS", "010010- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.sra.b", "R", "010010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.sra.sc.b", "R", "010010- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.sra.sci.b", "RRS", "010010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.sll.h", "R", "010100- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.sll.sc.h", "R", "010100- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.sll.sci.h", "RRU", "010100- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.sll.b", "R", "010100- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.sll.sc.b", "R", "010100- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.sll.sci.b", "RRU", "010100- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.or.h", "R", "010110- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.or.sc.h", "R", "010110- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.or.sci.h", "RRS", "010110- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.or.b", "R", "010110- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.or.sc.b", "R", "010110- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.or.sci.b", "RRS", "010110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.xor.h", "R", "011000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.xor.sc.h", "R", "011000- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.xor.sci.h", "RRS", "011000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.xor.b", "R", "011000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.xor.sc.b", "R", "011000- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.xor.sci.b", "RRS", "011000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.and.h", "R", "011010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.and.sc.h", "R", "011010- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.and.sci.h", "RRS", "011010- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.and.b", "R", "011010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.and.sc.b", "R", "011010- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.and.sci.b", "RRS", "011010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.abs.h", "R1", "0111000 ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.abs.b", "R1", "0111000 ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.extract.h", "RRU", "011110- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.extract.b", "RRU", "011110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.extractu.h", "RRU", "100100- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.extractu.b", "RRU", "100100- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.insert.h", "RRRU", "101100- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.insert.b", "RRRU", "101100- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.dotsp.h", "R", "100110- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.dotsp.h.sc", "R", "100110- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.dotsp.h.sci", "RRS", "100110- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.dotsp.b", "R", "100110- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.dotsp.b.sc", "R", "100110- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.dotsp.b.sci", "RRS", "100110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.dotup.h", "R", "100000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.dotup.h.sc", "R", "100000- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.dotup.h.sci", "RRU", "100000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.dotup.b", "R", "100000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.dotup.b.sc", "R", "100000- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.dotup.b.sci", "RRU", "100000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.dotusp.h", "R", "100010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.dotusp.h.sc", "R", "100010- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.dotusp.h.sci", "RRS", "100010- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.dotusp.b", "R", "100010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.dotusp.b.sc", "R", "100010- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.dotusp.b.sci", "RRS", "100010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.h", "RRRR", "101110- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.h.sc", "RRRR", "101110- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.h.sci", "RRRS", "101110- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.b", "RRRR", "101110- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.b.sc", "RRRR", "101110- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.sdotsp.b.sci", "RRRS", "101110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.sdotup.h", "RRRR", "101000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.sdotup.h.sc", "RRRR", "101000- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.sdotup.h.sci", "RRRU", "101000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.sdotup.b", "RRRR", "101000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.sdotup.b.sc", "RRRR", "101000- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.sdotup.b.sci", "RRRU", "101000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.h", "RRRR", "101010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.h.sc", "RRRR", "101010- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.h.sci", "RRRS", "101010- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.b", "RRRR", "101010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.b.sc", "RRRR", "101010- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.sdotusp.b.sci", "RRRS", "101010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.shuffle.h", "R", "110000- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.shuffle.h.sci", "RRU", "110000- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.shuffle.b", "R", "110000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.shufflei0.b.sci", "RRU2", "110000- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.shufflei1.b.sci", "RRU2", "111010- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.shufflei2.b.sci", "RRU2", "111100- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.shufflei3.b.sci", "RRU2", "111110- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.shuffle2.h", "RRRR", "110010- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.shuffle2.b", "RRRR", "110010- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.pack.h", "RRRR", "1101000 ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.packhi.b", "RRRR", "110110- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.packlo.b", "RRRR", "111000- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpeq.h", "R", "000001- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpeq.sc.h", "R", "000001- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpeq.sci.h", "RRS", "000001- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpeq.b", "R", "000001- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpeq.sc.b", "R", "000001- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpeq.sci.b", "RRS", "000001- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpne.h", "R", "000011- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpne.sc.h", "R", "000011- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpne.sci.h", "RRS", "000011- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpne.b", "R", "000011- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpne.sc.b", "R", "000011- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpne.sci.b", "RRS", "000011- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpgt.h", "R", "000101- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpgt.sc.h", "R", "000101- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpgt.sci.h", "RRS", "000101- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpgt.b", "R", "000101- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpgt.sc.b", "R", "000101- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpgt.sci.b", "RRS", "000101- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpge.h", "R", "000111- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpge.sc.h", "R", "000111- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpge.sci.h", "RRS", "000111- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpge.b", "R", "000111- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpge.sc.b", "R", "000111- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpge.sci.b", "RRS", "000111- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmplt.h", "R", "001001- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmplt.sc.h", "R", "001001- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmplt.sci.h", "RRS", "001001- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmplt.b", "R", "001001- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmplt.sc.b", "R", "001001- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmplt.sci.b", "RRS", "001001- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmple.h", "R", "001011- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmple.sc.h", "R", "001011- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmple.sci.h", "RRS", "001011- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmple.b", "R", "001011- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmple.sc.b", "R", "001011- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmple.sci.b", "RRS", "001011- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpgtu.h", "R", "001101- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpgtu.sc.h", "R", "001101- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpgtu.sci.h", "RRU", "001101- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpgtu.b", "R", "001101- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpgtu.sc.b", "R", "001101- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpgtu.sci.b", "RRU", "001101- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpgeu.h", "R", "001111- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpgeu.sc.h", "R", "001111- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpgeu.sci.h", "RRU", "001111- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpgeu.b", "R", "001111- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpgeu.sc.b", "R", "001111- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpgeu.sci.b", "RRU", "001111- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpltu.h", "R", "010001- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpltu.sc.h", "R", "010001- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpltu.sci.h", "RRU", "010001- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpltu.b", "R", "010001- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpltu.sc.b", "R", "010001- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpltu.sci.b", "RRU", "010001- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("pv.cmpleu.h", "R", "010011- ----- ----- 000 ----- 1010111"),
    InsnSpec::new("pv.cmpleu.sc.h", "R", "010011- ----- ----- 100 ----- 1010111"),
    InsnSpec::new("pv.cmpleu.sci.h", "RRU", "010011- ----- ----- 110 ----- 1010111"),
    InsnSpec::new("pv.cmpleu.b", "R", "010011- ----- ----- 001 ----- 1010111"),
    InsnSpec::new("pv.cmpleu.sc.b", "R", "010011- ----- ----- 101 ----- 1010111"),
    InsnSpec::new("pv.cmpleu.sci.b", "RRU", "010011- ----- ----- 111 ----- 1010111"),
    InsnSpec::new("p.beqimm", "SB2", "------- ----- ----- 010 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("p.bneimm", "SB2", "------- ----- ----- 011 ----- 1100011")
        .decode("bxx_decode")
        .fast(),
    InsnSpec::new("p.mac", "RRRR", "0100001 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("p.msu", "RRRR", "0100001 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("p.mul", "R", "0000001 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("p.muls", "R", "1000000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.mulhhs", "R", "1100000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.mulsN", "RRRU2", "10----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.mulhhsN", "RRRU2", "11----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.mulsNR", "RRRU2", "10----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("p.mulhhsNR", "RRRU2", "11----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("p.mulu", "R", "0000000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.mulhhu", "R", "0100000 ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.muluN", "RRRU2", "00----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.mulhhuN", "RRRU2", "01----- ----- ----- 000 ----- 1011011"),
    InsnSpec::new("p.muluNR", "RRRU2", "00----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("p.mulhhuNR", "RRRU2", "01----- ----- ----- 100 ----- 1011011"),
    InsnSpec::new("p.macs", "RRRR", "1000000 ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.machhs", "RRRR", "1100000 ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.macsN", "RRRRU", "10----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.machhsN", "RRRRU", "11----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.macsNR", "RRRRU", "10----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("p.machhsNR", "RRRRU", "11----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("p.macu", "RRRR", "0000000 ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.machhu", "RRRR", "0100000 ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.macuN", "RRRRU", "00----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.machhuN", "RRRRU", "01----- ----- ----- 001 ----- 1011011"),
    InsnSpec::new("p.macuNR", "RRRRU", "00----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("p.machhuNR", "RRRRU", "01----- ----- ----- 101 ----- 1011011"),
    InsnSpec::new("p.addNi", "RRRU2", "00----- ----- ----- 010 ----- 1011011"),
    InsnSpec::new("p.adduNi", "RRRU2", "10----- ----- ----- 010 ----- 1011011"),
    InsnSpec::new("p.addRNi", "RRRU2", "00----- ----- ----- 110 ----- 1011011"),
    InsnSpec::new("p.adduRNi", "RRRU2", "10----- ----- ----- 110 ----- 1011011"),
    InsnSpec::new("p.subNi", "RRRU2", "00----- ----- ----- 011 ----- 1011011"),
    InsnSpec::new("p.subuNi", "RRRU2", "10----- ----- ----- 011 ----- 1011011"),
    InsnSpec::new("p.subRNi", "RRRU2", "00----- ----- ----- 111 ----- 1011011"),
    InsnSpec::new("p.subuRNi", "RRRU2", "10----- ----- ----- 111 ----- 1011011"),
    InsnSpec::new("p.addN", "RRRR2", "0100000 ----- ----- 010 ----- 1011011"),
    InsnSpec::new("p.adduN", "RRRR2", "1100000 ----- ----- 010 ----- 1011011"),
    InsnSpec::new("p.addRN", "RRRR2", "0100000 ----- ----- 110 ----- 1011011"),
    InsnSpec::new("p.adduRN", "RRRR2", "1100000 ----- ----- 110 ----- 1011011"),
    InsnSpec::new("p.subN", "RRRR2", "0100000 ----- ----- 011 ----- 1011011"),
    InsnSpec::new("p.subuN", "RRRR2", "1100000 ----- ----- 011 ----- 1011011"),
    InsnSpec::new("p.subRN", "RRRR2", "0100000 ----- ----- 111 ----- 1011011"),
    InsnSpec::new("p.subuRN", "RRRR2", "1100000 ----- ----- 111 ----- 1011011"),
    InsnSpec::new("p.clipi", "I1U", "0001010 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("p.clipui", "I1U", "0001010 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.clip", "R", "0001010 ----- ----- 101 ----- 0110011"),
    InsnSpec::new("p.clipu", "R", "0001010 ----- ----- 110 ----- 0110011"),
    InsnSpec::new("p.extracti", "I4U", "11----- ----- ----- 000 ----- 0110011"),
    InsnSpec::new("p.extractui", "I4U", "11----- ----- ----- 001 ----- 0110011"),
    InsnSpec::new("p.extract", "R", "1000000 ----- ----- 000 ----- 0110011"),
    InsnSpec::new("p.extractu", "R", "1000000 ----- ----- 001 ----- 0110011"),
    InsnSpec::new("p.inserti", "I5U", "11----- ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.insert", "I5U2", "1000000 ----- ----- 010 ----- 0110011"),
    InsnSpec::new("p.bseti", "I4U", "11----- ----- ----- 100 ----- 0110011"),
    InsnSpec::new("p.bclri", "I4U", "11----- ----- ----- 011 ----- 0110011"),
    InsnSpec::new("p.bset", "R", "1000000 ----- ----- 100 ----- 0110011"),
    InsnSpec::new("p.bclr", "R", "1000000 ----- ----- 011 ----- 0110011"),
];
