//! The `demo` command - the canonical usage walkthrough.

use crate::common::{CliResult, script::interpret_input};

/// Seven appends that force two growths, then one positional removal.
pub const DEMO_SCRIPT: &str = "\
append 1
append 2
append 3
append 4
append 55
append 6
append 7
remove_one 4
";

/// Run the demo command.
pub fn run() -> CliResult<()> {
    interpret_input(DEMO_SCRIPT, "<demo>", true)
}
