//! Bytecode machine CLI.
//!
//! Loads a bytecode image and runs it on the reference machine:
//! 1. **Usage:** With no input file, prints a usage line and exits successfully.
//! 2. **Budget:** An optional second argument caps the instructions executed; it is
//!    parsed like C's `atoi`, so non-numeric text means "run until halt".
//! 3. **Diagnostics:** `DEBUG` in the environment dumps registers after the run;
//!    `RUST_LOG` controls tracing output on stderr.
//!
//! Exit status is 0 for a usage message or a run that halted or used up its budget,
//! and 1 for a load failure, a machine that could not be built, or a fatal fault.
//! There are no flags: every argument is positional, so `-h` is a path or a budget.

use std::env;
use std::ffi::OsString;
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use svm_core::Config;
use svm_core::sim::{self, InstructionBudget};

#[derive(Parser, Debug)]
#[command(
    name = "svm",
    about = "Run a bytecode image on the svm register machine",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Bytecode file to execute; any text is a path, including one that starts with `-`.
    #[arg(allow_hyphen_values = true)]
    input_file: Option<PathBuf>,

    /// Maximum number of instructions to execute (0 or non-numeric: until halt).
    #[arg(allow_hyphen_values = true)]
    max_instructions: Option<OsString>,

    /// Extra arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "extra arguments ignored");
    }

    let Some(input) = cli.input_file else {
        let argv0 = env::args_os()
            .next()
            .map_or_else(|| "svm".to_string(), |arg| arg.to_string_lossy().into_owned());
        println!("Usage: {argv0} input-file");
        return ExitCode::SUCCESS;
    };

    let budget = cli
        .max_instructions
        .map_or(InstructionBudget::Unbounded, |text| {
            InstructionBudget::parse(&text.to_string_lossy())
        });
    let config = Config::from_env();

    match sim::run_file(&input, &config, budget) {
        Ok(outcome) if outcome.is_fatal() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Prints an error and its causes on one stderr line.
fn report(err: &svm_core::Error) {
    let mut line = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        line.push_str(": ");
        line.push_str(&inner.to_string());
        cause = inner.source();
    }
    eprintln!("{line}");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
