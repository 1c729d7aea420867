//! The `run` command - run an operation script file.

use crate::cli::RunArgs;
use crate::common::{CliResult, error::CliError, input::read_input, script::interpret_input};

/// Run the run command.
///
/// A leading shebang (`#!/usr/bin/env dynarr run`) is just a comment line.
pub fn run(args: RunArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.file).map_err(CliError::Input)?;
    interpret_input(&content, &display_name, args.steps)
}
