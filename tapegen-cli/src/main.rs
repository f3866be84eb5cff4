//! tapegen - generate and run tape machine programs
//!
//! # Usage
//!
//! ```text
//! # Print the add-two-bytes program
//! tapegen emit
//!
//! # Print the annotated, indented listing instead
//! tapegen emit --debug
//!
//! # Generate the program and run it on two input bytes
//! tapegen run 5 7
//!
//! # Run any tape machine program file
//! tapegen exec program.b 65
//! ```

mod driver;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tapegen_codegen::Generator;
use tapegen_runtime::{EofPolicy, HaltReason, VMConfig, VM};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tapegen", version, about = "Tape machine code generator")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the generated add-two-bytes program
    Emit {
        /// Print the annotated listing instead of the bare program
        #[arg(long)]
        debug: bool,
    },

    /// Generate the add-two-bytes program and execute it
    Run {
        /// Input bytes
        inputs: Vec<u8>,

        #[command(flatten)]
        vm: VmArgs,
    },

    /// Execute a tape machine program file
    Exec {
        /// Program file; non-symbol bytes are ignored
        file: PathBuf,

        /// Input bytes
        inputs: Vec<u8>,

        #[command(flatten)]
        vm: VmArgs,
    },
}

#[derive(clap::Args)]
struct VmArgs {
    /// Stop after this many cycles
    #[arg(long, default_value_t = 10_000_000)]
    max_cycles: u64,

    /// What `,` does once the input runs out
    #[arg(long, value_enum, default_value_t = Eof::Halt)]
    eof: Eof,

    /// Log every executed op (needs -vv)
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Eof {
    Halt,
    Zero,
    Unchanged,
}

impl From<&VmArgs> for VMConfig {
    fn from(args: &VmArgs) -> Self {
        VMConfig {
            max_cycles: args.max_cycles,
            trace: args.trace,
            eof: match args.eof {
                Eof::Halt => EofPolicy::Halt,
                Eof::Zero => EofPolicy::Zero,
                Eof::Unchanged => EofPolicy::Unchanged,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Emit { debug } => {
            let generator = build()?;
            if debug {
                print!("{}", generator.export_full());
            } else {
                println!("{}", generator.export_program());
            }
        }
        Command::Run { inputs, vm } => {
            let generator = build()?;
            execute(&generator.export_program(), inputs, &vm)?;
        }
        Command::Exec { file, inputs, vm } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            execute(&text, inputs, &vm)?;
        }
    }

    Ok(())
}

/// Filter forced by `-v` flags; `None` defers to `RUST_LOG`
fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbosity_directive(verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build() -> Result<Generator> {
    let mut generator = Generator::new();
    driver::add_two_bytes(&mut generator).context("code generation failed")?;
    tracing::info!(
        symbols = generator.export_program().len(),
        "generated add-two-bytes program"
    );
    Ok(generator)
}

fn execute(program: &str, inputs: Vec<u8>, args: &VmArgs) -> Result<()> {
    let vm = VM::new(program, inputs, VMConfig::from(args)).context("invalid program")?;
    let result = vm.run().context("execution failed")?;

    let rendered: Vec<String> = result.outputs.iter().map(u8::to_string).collect();
    println!("{}", rendered.join(" "));

    match result.halt_reason {
        HaltReason::Completed => {}
        other => tracing::warn!(reason = ?other, cycles = result.cycles, "program did not complete"),
    }
    Ok(())
}
