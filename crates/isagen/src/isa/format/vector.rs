//! Vector layouts.
//!
//! Vector registers are carried in the integer register slots; bit 25 is the
//! mask-enable flag. `OPVLI` splits the `vtype` immediate into its `vlmul`
//! (bits 22:20) and `vsew` (bits 25:23) sub-fields, and also exposes the full
//! 12-bit configuration word.

use super::FormatCatalog;
use crate::common::Result;
use crate::isa::field::range;
use crate::isa::operand::Operand;

/// Registers the vector layouts.
pub(super) fn define_vector(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "OPV",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVF",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVFF",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPIVI",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::simm(0, range(15, 5)),
            Operand::in_reg(0, range(20, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVLS",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(25, 0)),
        ],
    )?;
    catalog.define(
        "OPVU",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVV",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVFS",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVFV",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_reg(1, range(20, 5)),
            Operand::uimm(0, range(25, 1)),
        ],
    )?;
    catalog.define(
        "OPVLI",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(20, 3)),  // vlmul
            Operand::uimm(1, range(23, 3)),  // vsew
            Operand::uimm(2, range(20, 12)), // vtype
        ],
    )?;
    catalog.define(
        "OPVL",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::in_reg(1, range(20, 5)),
        ],
    )?;
    Ok(())
}
