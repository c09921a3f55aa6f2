//! RISC-V decode-table generator CLI.
//!
//! This binary drives the catalog from the command line. It supports:
//! 1. **Generate:** Assemble an ISA and write its artifacts to a build
//!    directory, reporting whether each file was created, updated or kept.
//! 2. **List:** Print the decode branches, subsets and encodings in priority
//!    order.
//! 3. **Decode:** Match one instruction word with the reference matcher and
//!    print its disassembly.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvsim_isagen::isa::disasm;
use rvsim_isagen::{Generation, GeneratorConfig, IsaAssembler, Result, TableGenerator};

#[derive(Parser, Debug)]
#[command(
    name = "isagen",
    author,
    version,
    about = "RISC-V instruction catalog and decode-table generator",
    long_about = "Assemble a RISC-V ISA descriptor into prioritized decode tables.\n\nExamples:\n  isagen generate --isa rv64imafdc --ext v --build-dir build\n  isagen list --isa rv32imc\n  isagen decode 0x00a50533 --isa rv64i"
)]
struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// ISA selection shared by the inspection subcommands.
#[derive(Args, Debug)]
struct Selection {
    /// ISA descriptor, e.g. `rv64imafdc`.
    #[arg(long)]
    isa: Option<String>,

    /// Custom extension key to append; may be repeated.
    #[arg(long = "ext", value_name = "KEY")]
    extensions: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble the ISA and write its artifacts.
    Generate {
        /// JSON configuration file; flags below override its fields.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Artifact identifier; files are named `isa_<name>.*`.
        #[arg(long)]
        name: Option<String>,

        /// Output directory.
        #[arg(long)]
        build_dir: Option<PathBuf>,

        /// Omit CSR access instructions.
        #[arg(long)]
        no_priv: bool,

        /// Omit trap-return instructions.
        #[arg(long)]
        no_trap_return: bool,

        /// Omit `sfence.vma`.
        #[arg(long)]
        no_supervisor: bool,

        /// Trace compressed instructions under their 32-bit mnemonics.
        #[arg(long)]
        uncompressed_labels: bool,

        #[command(flatten)]
        selection: Selection,
    },

    /// Print the assembled decode structure.
    List {
        #[command(flatten)]
        selection: Selection,
    },

    /// Decode one hexadecimal instruction word.
    Decode {
        /// Instruction word, with or without a `0x` prefix.
        #[arg(value_parser = parse_word)]
        word: u32,

        #[command(flatten)]
        selection: Selection,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            config,
            name,
            build_dir,
            no_priv,
            no_trap_return,
            no_supervisor,
            uncompressed_labels,
            selection,
        } => load_config(config.as_deref(), selection).and_then(|mut config| {
            if let Some(name) = name {
                config.name = name;
            }
            if let Some(dir) = build_dir {
                config.build_dir = dir;
            }
            config.privilege.privileged &= !no_priv;
            config.privilege.trap_return &= !no_trap_return;
            config.privilege.supervisor_mmu &= !no_supervisor;
            config.uncompressed_labels |= uncompressed_labels;
            cmd_generate(&config)
        }),
        Commands::List { selection } => load_config(None, selection).and_then(|c| cmd_list(&c)),
        Commands::Decode { word, selection } => {
            load_config(None, selection).and_then(|c| cmd_decode(&c, word))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the `tracing` subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and the
/// default is `info`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Loads the configuration file if given and applies the ISA selection.
fn load_config(path: Option<&Path>, selection: Selection) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(isa) = selection.isa {
        config.isa = isa;
    }
    config.extensions.extend(selection.extensions);
    Ok(config)
}

fn cmd_generate(config: &GeneratorConfig) -> Result<ExitCode> {
    let mut assembler = IsaAssembler::from_config(config)?;
    match assembler.generate(&TableGenerator::new(), &config.build_dir)? {
        Generation::Generated(written) => {
            for (path, outcome) in written {
                println!("{outcome:>9}  {}", path.display());
            }
        }
        Generation::AlreadyGenerated => println!("already generated"),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_list(config: &GeneratorConfig) -> Result<ExitCode> {
    let isa = IsaAssembler::from_config(config)?.assemble();
    println!("{} ({})", isa.isa(), isa.word_size());
    for branch in isa.branches() {
        println!(
            "branch {} ({} instructions)",
            branch.key(),
            branch.instruction_count()
        );
        for subset in branch.subsets() {
            println!("  subset {} ({}-bit)", subset.name(), subset.width());
            for d in subset.descriptors() {
                println!(
                    "    {:<20} {:<8} mask={:#010x} match={:#010x}",
                    d.trace_label(),
                    d.format,
                    d.template.mask,
                    d.template.matches
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_decode(config: &GeneratorConfig, word: u32) -> Result<ExitCode> {
    let isa = IsaAssembler::from_config(config)?.assemble();
    let Some(insn) = isa.decode(word) else {
        println!("{word:#010x}: unknown instruction");
        return Ok(ExitCode::FAILURE);
    };
    println!(
        "{word:#010x}: {}    [{} / {} / {}]",
        disasm::disassemble(&insn),
        insn.branch,
        insn.subset,
        insn.descriptor.format
    );
    Ok(ExitCode::SUCCESS)
}

/// Parses a hexadecimal instruction word.
fn parse_word(s: &str) -> std::result::Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
        .replace('_', "");
    u32::from_str_radix(&digits, 16).map_err(|e| format!("invalid instruction word `{s}`: {e}"))
}
