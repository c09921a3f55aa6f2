//! Rendering of decoded instructions.
//!
//! Output follows assembler syntax: the trace label, then displayed operands
//! separated by commas. Memory references print as `offset(base)`, with a `!`
//! after the base when it is post-incremented. Hidden operands are skipped.

use super::decode::DecodedInsn;
use super::operand::{Operand, OperandValue};

/// Integer register ABI names, indexed by architectural number.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Floating-point register ABI names, indexed by architectural number.
const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Returns the ABI name for an integer register index.
pub fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Returns the ABI name for a floating-point register index.
pub fn freg(idx: usize) -> &'static str {
    FREG_NAMES.get(idx).copied().unwrap_or("f??")
}

/// Renders a decoded instruction, e.g. `"lw a0, 8(sp)"`.
pub fn disassemble(insn: &DecodedInsn<'_>) -> String {
    let operands: Vec<String> = insn
        .descriptor
        .operands
        .iter()
        .zip(&insn.operands)
        .filter(|(op, _)| op.is_displayed())
        .map(|(op, value)| render(op, value))
        .collect();

    let label = insn.descriptor.trace_label();
    if operands.is_empty() {
        label.to_owned()
    } else {
        format!("{label} {}", operands.join(", "))
    }
}

fn render(op: &Operand, value: &OperandValue) -> String {
    match (op, value) {
        (Operand::Indirect(ind), OperandValue::Indirect { base, offset, .. }) => {
            let marker = if ind.post_increment { "!" } else { "" };
            format!(
                "{}({}{marker})",
                render(&ind.offset, offset),
                render(&ind.base, base)
            )
        }
        (_, value) => render_value(value),
    }
}

fn render_value(value: &OperandValue) -> String {
    match value {
        OperandValue::Reg { file, index } if file.is_float() => freg(*index as usize).to_owned(),
        OperandValue::Reg { index, .. } => xreg(*index as usize).to_owned(),
        OperandValue::Imm(v) => v.to_string(),
        OperandValue::Indirect { base, offset, .. } => {
            format!("{}({})", render_value(offset), render_value(base))
        }
    }
}
