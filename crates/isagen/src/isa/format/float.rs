//! Floating-point layouts.
//!
//! The `RF`-style layouts expose the rounding-mode field (bits 14:12) as an
//! unsigned immediate. Encodings that fix that field use the `RV`-style twins,
//! which leave it out.

use super::FormatCatalog;
use crate::common::Result;
use crate::isa::field::range;
use crate::isa::operand::Operand;

/// Registers the scalar and vectorial floating-point layouts.
pub(super) fn define_float(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "RF",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "RF2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "RF4",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(2, range(7, 5)).hidden(),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "R2F1",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "R2F2",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "R2F3",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "R3F",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "R3F2",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_reg(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "R4U",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
            Operand::in_freg(2, range(27, 5)),
            Operand::uimm(0, range(12, 3)),
        ],
    )?;
    catalog.define(
        "R4",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
            Operand::in_freg(2, range(27, 5)),
        ],
    )?;
    catalog.define(
        "RVF",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "RVF2",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
        ],
    )?;
    catalog.define(
        "RVF4",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::in_freg(2, range(7, 5)).hidden(),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R2VF",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
            Operand::in_freg(1, range(20, 5)),
        ],
    )?;
    catalog.define(
        "R2VF2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_freg(0, range(15, 5)),
        ],
    )?;
    Ok(())
}
