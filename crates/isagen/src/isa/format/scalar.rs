//! Integer, memory, dual-width and hardware-loop layouts.
//!
//! Register fields sit at the standard positions: `rd` at bits 11:7, `rs1` at
//! 19:15, `rs2` at 24:20 and, for the PULP three-source forms, `rs3` at 29:25.
//! Memory layouts wrap the address operands in an indirect reference.

use super::FormatCatalog;
use crate::common::Result;
use crate::isa::field::{range, ranges};
use crate::isa::operand::Operand;

/// Registers the plain integer layouts (R, I, S/SB, U/J families).
pub(super) fn define_integer(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "R",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "RR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::in_reg(2, range(25, 5)),
        ],
    )?;
    catalog.define(
        "RRRR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(2, range(7, 5)).hidden(),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "RRRR2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)).hidden(),
            Operand::in_reg(1, range(15, 5)),
            Operand::in_reg(2, range(20, 5)),
        ],
    )?;
    catalog.define(
        "RRRS",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::in_reg(1, range(15, 5)),
            Operand::simm(0, ranges(&[(25, 1, 0), (20, 5, 1)])),
        ],
    )?;
    catalog.define(
        "RRRU",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::in_reg(1, range(15, 5)),
            Operand::uimm(0, ranges(&[(25, 1, 0), (20, 5, 1)])),
        ],
    )?;
    catalog.define(
        "RRRU2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 5)),
        ],
    )?;
    catalog.define(
        "RRRU3",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::in_reg(1, range(15, 5)),
            Operand::uimm(0, range(20, 5)),
        ],
    )?;
    catalog.define(
        "RRRRU",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(2, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 5)),
        ],
    )?;
    catalog.define(
        "RRU",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, ranges(&[(25, 1, 0), (20, 5, 1)])),
        ],
    )?;
    catalog.define(
        "RRS",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::simm(0, ranges(&[(25, 1, 0), (20, 5, 1)])),
        ],
    )?;
    catalog.define(
        "RRU2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, ranges(&[(25, 1, 0), (20, 5, 1)])),
        ],
    )?;
    catalog.define(
        "BITREV",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(20, 5)),
            Operand::uimm(1, range(25, 2)),
        ],
    )?;
    catalog.define(
        "I",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::simm(0, range(20, 12)),
        ],
    )?;
    catalog.define(
        "IU",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(20, 12)),
        ],
    )?;
    catalog.define(
        "IUR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::uimm(1, range(15, 5)),
            Operand::uimm(0, range(20, 12)),
        ],
    )?;
    catalog.define(
        "I1U",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(20, 5)),
        ],
    )?;
    catalog.define(
        "I1U64",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(20, 6)),
        ],
    )?;
    catalog.define(
        "I2U",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::uimm(0, range(20, 12)),
            Operand::uimm(1, range(15, 5)),
        ],
    )?;
    catalog.define(
        "I3U",
        vec![
            Operand::uimm(0, range(20, 8)),
        ],
    )?;
    catalog.define(
        "I4U",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(25, 5)),
            Operand::uimm(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "I5U",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(1, range(7, 5)).hidden(),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(25, 5)),
            Operand::uimm(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "I5U2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(1, range(7, 5)).hidden(),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(2, range(20, 5)),
        ],
    )?;
    catalog.define(
        "IOU",
        vec![
            Operand::uimm(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "I64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::simm(0, range(20, 5)),
        ],
    )?;
    catalog.define("Z", Vec::new())?;
    catalog.define(
        "F",
        vec![
            Operand::in_reg(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "INRR",
        vec![
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "U",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::uimm(0, ranges(&[(12, 20, 12)])),
        ],
    )?;
    catalog.define(
        "UJ",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::simm(0, ranges(&[(12, 8, 12), (20, 1, 11), (21, 10, 1), (31, 1, 20)])),
        ],
    )?;
    catalog.define(
        "SB",
        vec![
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::simm(0, ranges(&[(7, 1, 11), (8, 4, 1), (25, 6, 5), (31, 1, 12)])),
        ],
    )?;
    catalog.define(
        "SB2",
        vec![
            Operand::in_reg(0, range(15, 5)),
            Operand::simm(0, ranges(&[(7, 1, 11), (8, 4, 1), (25, 6, 5), (31, 1, 12)])),
            Operand::simm(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "S1",
        vec![
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::in_reg(2, range(25, 5)),
        ],
    )?;
    catalog.define(
        "AMO",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(25, 1)),
            Operand::uimm(1, range(26, 1)),
        ],
    )?;
    catalog.define(
        "LRES",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(25, 1)),
            Operand::uimm(1, range(26, 1)),
        ],
    )?;
    Ok(())
}

/// Registers load and store layouts, including register-offset and post-increment forms.
pub(super) fn define_memory(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "L",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, range(20, 12)),
            ),
        ],
    )?;
    catalog.define(
        "LPOST",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, range(20, 12)),
            )
            .post_increment(),
        ],
    )?;
    catalog.define(
        "LR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::in_reg(1, range(20, 5)),
            ),
        ],
    )?;
    catalog.define(
        "LRPOST",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::in_reg(1, range(20, 5)),
            )
            .post_increment(),
        ],
    )?;
    catalog.define(
        "LRR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::indirect(
                Operand::in_reg(1, range(20, 5)),
                Operand::simm(0, ranges(&[])),
            ),
        ],
    )?;
    catalog.define(
        "LRRRR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(2, range(7, 5)).hidden(),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, ranges(&[])),
            ),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "S",
        vec![
            Operand::in_reg(1, range(20, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, ranges(&[(7, 5, 0), (25, 7, 5)])),
            ),
        ],
    )?;
    catalog.define(
        "SPOST",
        vec![
            Operand::in_reg(1, range(20, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, ranges(&[(7, 5, 0), (25, 7, 5)])),
            )
            .post_increment(),
        ],
    )?;
    catalog.define(
        "SR",
        vec![
            Operand::in_reg(1, range(20, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::in_reg(2, range(7, 5)),
            ),
        ],
    )?;
    catalog.define(
        "SR_OLD",
        vec![
            Operand::in_reg(1, range(20, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::in_reg(2, range(25, 5)),
            ),
        ],
    )?;
    catalog.define(
        "SRPOST",
        vec![
            Operand::in_reg(1, range(20, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::in_reg(2, range(7, 5)),
            )
            .post_increment(),
        ],
    )?;
    catalog.define(
        "FL",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, range(20, 12)),
            ),
        ],
    )?;
    catalog.define(
        "FS",
        vec![
            Operand::in_freg(1, range(20, 5)),
            Operand::indirect(
                Operand::in_reg(0, range(15, 5)),
                Operand::simm(0, ranges(&[(7, 5, 0), (25, 7, 5)])),
            ),
        ],
    )?;
    Ok(())
}

/// Registers layouts that mix 32-bit registers with 64-bit register pairs.
///
/// The `_W32` / `_W64` suffix names the width of the destination.
pub(super) fn define_wide(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "R1x64_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "R2x64_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::in_reg64(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1x64puImm_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::uimm(0, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1x64psImm_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::simm(0, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1x64puImm_W32",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::uimm(0, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1x64psImm_W32",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::simm(0, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1x64_W32",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "R2x64_W32",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::in_reg64(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R1x32_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "R2x32_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R2x32_W32",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R2x32p64_W64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::in_reg64(2, range(7, 5)),
        ],
    )?;
    catalog.define(
        "R1_64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "RR64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(0, range(15, 5)),
            Operand::in_reg64(1, range(20, 5)),
            Operand::in_reg64(2, range(7, 5)),
        ],
    )?;
    catalog.define(
        "RRRR64",
        vec![
            Operand::out_reg64(0, range(7, 5)),
            Operand::in_reg64(2, range(7, 5)).hidden(),
            Operand::in_reg64(0, range(15, 5)),
            Operand::in_reg64(1, range(20, 5)),
        ],
    )?;
    Ok(())
}

/// Registers hardware-loop setup layouts.
pub(super) fn define_loops(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "HL0",
        vec![
            Operand::uimm(0, range(7, 1)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(1, range(20, 12)),
        ],
    )?;
    catalog.define(
        "HL1",
        vec![
            Operand::uimm(0, range(7, 1)),
            Operand::uimm(1, range(20, 12)),
            Operand::uimm(2, range(15, 5)),
        ],
    )?;
    catalog.define(
        "HLI",
        vec![
            Operand::uimm(0, range(7, 1)),
            Operand::uimm(1, range(20, 12)),
        ],
    )?;
    catalog.define(
        "HLR",
        vec![
            Operand::uimm(0, range(7, 1)),
            Operand::in_reg(0, range(15, 5)),
        ],
    )?;
    Ok(())
}
