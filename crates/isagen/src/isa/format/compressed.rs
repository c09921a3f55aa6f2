//! Compressed (16-bit) layouts.
//!
//! Three-bit register fields use the compressed register kinds. Stack-relative
//! forms use a constant `sp` base (x2). Scaled load/store offsets are
//! declared as signed immediates but decode zero-extended.

use super::FormatCatalog;
use crate::common::Result;
use crate::isa::field::{fixed, range, ranges};
use crate::isa::operand::Operand;

/// Registers the compressed layouts.
pub(super) fn define_compressed(catalog: &mut FormatCatalog) -> Result<()> {
    catalog.define(
        "CR",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::in_reg(1, range(2, 5)),
        ],
    )?;
    catalog.define(
        "CR1",
        vec![
            Operand::out_reg(0, fixed(0)),
            Operand::in_reg(0, range(7, 5)),
            Operand::in_reg(1, fixed(0)),
            Operand::simm(0, fixed(0)),
        ],
    )?;
    catalog.define(
        "CR2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, fixed(0)),
            Operand::in_reg(1, range(2, 5)),
        ],
    )?;
    catalog.define(
        "CR3",
        vec![
            Operand::out_reg(0, fixed(1)),
            Operand::in_reg(0, range(7, 5)),
            Operand::in_reg(1, fixed(0)),
            Operand::simm(0, fixed(0)),
        ],
    )?;
    catalog.define(
        "CI1",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::simm(0, ranges(&[(2, 5, 0), (12, 1, 5)])),
        ],
    )?;
    catalog.define(
        "CI1U",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::uimm(0, ranges(&[(2, 5, 0), (12, 1, 5)])),
        ],
    )?;
    catalog.define(
        "CI2",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, range(7, 5)),
            Operand::simm(0, ranges(&[(2, 5, 2), (12, 1, 7)])),
        ],
    )?;
    catalog.define(
        "CI3",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(4, 3, 2), (12, 1, 5), (2, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "DCI3",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(5, 2, 3), (12, 1, 5), (2, 3, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "FCI3",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(4, 3, 2), (12, 1, 5), (2, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "FCI3D",
        vec![
            Operand::out_freg(0, range(7, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(5, 2, 2), (12, 1, 5), (2, 3, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CI4",
        vec![
            Operand::out_reg(0, fixed(2)),
            Operand::in_reg(0, fixed(2)),
            Operand::simm(0, ranges(&[(6, 1, 4), (2, 1, 5), (5, 1, 6), (3, 2, 7), (12, 1, 9)])),
        ],
    )?;
    catalog.define(
        "CI5",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::uimm(0, ranges(&[(2, 5, 12), (12, 1, 17)])).sign_extended(),
        ],
    )?;
    catalog.define(
        "CI6",
        vec![
            Operand::out_reg(0, range(7, 5)),
            Operand::in_reg(0, fixed(0)),
            Operand::simm(0, ranges(&[(2, 5, 0), (12, 1, 5)])),
        ],
    )?;
    catalog.define(
        "CSS",
        vec![
            Operand::in_reg(1, range(2, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(9, 4, 2), (7, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "DCSS",
        vec![
            Operand::in_reg(1, range(2, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(10, 3, 3), (7, 3, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "FCSS",
        vec![
            Operand::in_freg(1, range(2, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(9, 4, 2), (7, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "FCSSD",
        vec![
            Operand::in_freg(1, range(2, 5)),
            Operand::indirect(
                Operand::in_reg(0, fixed(2)),
                Operand::simm(0, ranges(&[(10, 3, 3), (7, 3, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CIW",
        vec![
            Operand::out_creg(0, range(2, 3)),
            Operand::in_reg(0, fixed(2)),
            Operand::simm(0, ranges(&[(6, 1, 2), (5, 1, 3), (11, 2, 4), (7, 4, 6)]))
                .zero_extended(),
        ],
    )?;
    catalog.define(
        "CL",
        vec![
            Operand::out_creg(0, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(6, 1, 2), (10, 3, 3), (5, 1, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CLD",
        vec![
            Operand::out_creg(0, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(10, 3, 3), (5, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CFLD",
        vec![
            Operand::out_cfreg(0, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(10, 3, 3), (5, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "FCL",
        vec![
            Operand::out_cfreg(0, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(6, 1, 2), (10, 3, 3), (5, 1, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CS",
        vec![
            Operand::in_creg(1, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(6, 1, 2), (10, 3, 3), (5, 1, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CSD",
        vec![
            Operand::in_creg(1, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(10, 3, 3), (5, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CFSD",
        vec![
            Operand::in_creg(1, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(10, 3, 3), (5, 2, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "FCS",
        vec![
            Operand::in_cfreg(1, range(2, 3)),
            Operand::indirect(
                Operand::in_creg(0, range(7, 3)),
                Operand::simm(0, ranges(&[(6, 1, 2), (10, 3, 3), (5, 1, 6)])).zero_extended(),
            ),
        ],
    )?;
    catalog.define(
        "CS2",
        vec![
            Operand::out_creg(0, range(7, 3)),
            Operand::in_creg(0, range(7, 3)),
            Operand::in_creg(1, range(2, 3)),
        ],
    )?;
    catalog.define(
        "CB1",
        vec![
            Operand::in_creg(0, range(7, 3)),
            Operand::in_reg(1, fixed(0)),
            Operand::simm(0, ranges(&[(3, 2, 1), (10, 2, 3), (2, 1, 5), (5, 2, 6), (12, 1, 8)])),
        ],
    )?;
    catalog.define(
        "CB2",
        vec![
            Operand::out_creg(0, range(7, 3)),
            Operand::in_creg(0, range(7, 3)),
            Operand::uimm(0, ranges(&[(2, 5, 0), (12, 1, 5)])),
        ],
    )?;
    catalog.define(
        "CB2S",
        vec![
            Operand::out_creg(0, range(7, 3)),
            Operand::in_creg(0, range(7, 3)),
            Operand::simm(0, ranges(&[(2, 5, 0), (12, 1, 5)])),
        ],
    )?;
    let jump_offset = ranges(&[
        (3, 3, 1),
        (11, 1, 4),
        (2, 1, 5),
        (7, 1, 6),
        (6, 1, 7),
        (9, 2, 8),
        (8, 1, 10),
        (12, 1, 11),
    ]);
    catalog.define(
        "CJ",
        vec![
            Operand::out_reg(0, fixed(0)),
            Operand::simm(0, jump_offset.clone()),
        ],
    )?;
    catalog.define(
        "CJ1",
        vec![
            Operand::out_reg(0, fixed(1)),
            Operand::simm(0, jump_offset),
        ],
    )?;
    catalog.define(
        "CMPUSH",
        vec![
            Operand::uimm(0, range(4, 4)),
            Operand::uimm(1, range(2, 2)),
        ],
    )?;
    Ok(())
}
