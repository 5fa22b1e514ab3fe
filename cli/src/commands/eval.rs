//! The `eval` command - execute a script given inline.

use crate::cli::EvalArgs;
use crate::commands::run::execute;
use crate::common::CliResult;

/// Run the eval command.
pub fn run(args: EvalArgs) -> CliResult<()> {
    execute(&args.script, Some("<eval>"), args.size)
}
