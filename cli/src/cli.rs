//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use dynarray::script::MAX_SIZE;

/// dynarray - A growable integer array with rotation and search
#[derive(Parser, Debug)]
#[command(name = "dynarray", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Render error reports with ASCII characters only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through every array operation and print the results
    Demo(DemoArgs),

    /// Run a script file
    Run(RunArgs),

    /// Run a script given on the command line
    Eval(EvalArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Initial number of elements
    #[arg(long, default_value_t = 5, value_parser = parse_size)]
    pub size: usize,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file to run ("-" reads stdin)
    pub file: String,

    /// Initial number of elements
    #[arg(long, default_value_t = 1, value_parser = parse_size)]
    pub size: usize,
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Script to run; separate commands with `;`
    pub script: String,

    /// Initial number of elements
    #[arg(long, default_value_t = 1, value_parser = parse_size)]
    pub size: usize,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Parses `--size`, rejecting anything above [`MAX_SIZE`].
fn parse_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|e| format!("{e}"))?;
    if size > MAX_SIZE {
        return Err(format!("sizes are limited to {MAX_SIZE} elements"));
    }
    Ok(size)
}
