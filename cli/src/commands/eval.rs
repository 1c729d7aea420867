//! The `eval` command - run operations given inline.

use crate::cli::EvalArgs;
use crate::common::{CliResult, script::interpret_input};

/// Run the eval command.
pub fn run(args: EvalArgs) -> CliResult<()> {
    interpret_input(&args.script, "<eval>", args.steps)
}
