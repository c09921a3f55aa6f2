//! # Shared Test Utilities
//!
//! Instruction encoders, an artifact generator mock and fixtures used across
//! the unit tests.

use std::sync::LazyLock;

use mockall::mock;
use rvsim_isagen::isa::ExtensionLibrary;
use rvsim_isagen::{Artifact, ArtifactGenerator, AssembledIsa, IsaAssembler, PrivilegeFlags};

pub mod encode;

mock! {
    pub Generator {}
    impl ArtifactGenerator for Generator {
        fn render(&self, isa: &AssembledIsa) -> rvsim_isagen::Result<Vec<Artifact>>;
    }
}

/// Library built once and shared by tests that only read it.
pub static LIBRARY: LazyLock<ExtensionLibrary> =
    LazyLock::new(|| ExtensionLibrary::new(false).unwrap());

/// Routes `tracing` output through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("rvsim_isagen=debug")
        .try_init();
}

/// Assembles `isa` with every privilege branch and the given custom keys.
pub fn assemble(isa: &str, extensions: &[&str]) -> AssembledIsa {
    let mut assembler =
        IsaAssembler::with_library("core", isa, PrivilegeFlags::ALL, LIBRARY.clone()).unwrap();
    for key in extensions {
        assembler.add_extension(key).unwrap();
    }
    assembler.assemble()
}
