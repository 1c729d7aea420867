//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// dynarr - a growable array you can poke at from the shell
#[derive(Parser, Debug)]
#[command(name = "dynarr", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in demo sequence, printing every step
    Demo,

    /// Run operations given on the command line, separated by `;`
    Eval(EvalArgs),

    /// Run an operation script from a file
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Operations to run, e.g. "append 1; add 2; pop"
    pub script: String,

    /// Print the array after every operation
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file, one operation per line (use `-` for stdin)
    pub file: String,

    /// Print the array after every operation
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
