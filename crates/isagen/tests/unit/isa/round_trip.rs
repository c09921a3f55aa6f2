//! # Decode Round-Trip Properties
//!
//! For any word the reference matcher accepts, re-encoding the decoded
//! operands onto the template must reproduce every fixed or operand-read bit.
#![allow(unused_results)]

use std::sync::LazyLock;

use proptest::prelude::*;
use rvsim_isagen::AssembledIsa;
use rvsim_isagen::isa::decode::instruction_width;
use rvsim_isagen::isa::tables::CUSTOM_EXTENSIONS;

use crate::common::assemble;

static RV32_CUSTOM: LazyLock<AssembledIsa> = LazyLock::new(|| {
    let keys: Vec<&str> = CUSTOM_EXTENSIONS.iter().map(|(key, _)| *key).collect();
    assemble("rv32imafdc", &keys)
});

static RV64: LazyLock<AssembledIsa> = LazyLock::new(|| assemble("rv64imafdc", &["v"]));

fn check(isa: &AssembledIsa, word: u32) -> Result<(), TestCaseError> {
    if let Some(insn) = isa.decode(word) {
        let d = insn.descriptor;
        let covered = d.template.mask | d.operand_bits() as u32;
        prop_assert!(d.matches(insn.word));
        prop_assert_eq!(d.width(), instruction_width(word));
        prop_assert_eq!(
            insn.reencode(),
            insn.word & covered,
            "{} at {:#010x}",
            d.mnemonic,
            word
        );
        prop_assert_eq!(d.evaluate(insn.reencode()), insn.operands);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn prop_rv32_custom_round_trip(word in any::<u32>()) {
        check(&RV32_CUSTOM, word)?;
    }

    #[test]
    fn prop_rv64_round_trip(word in any::<u32>()) {
        check(&RV64, word)?;
    }

    #[test]
    fn prop_rv64_compressed_round_trip(half in any::<u16>()) {
        check(&RV64, u32::from(half))?;
    }
}
