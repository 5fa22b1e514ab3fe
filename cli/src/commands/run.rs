//! The `run` command - execute a script file.

use dynarray::Session;
use dynarray::script::parse;

use crate::cli::RunArgs;
use crate::common::{CliError, CliResult, input::read_script};

/// Run the run command.
pub fn run(args: RunArgs) -> CliResult<()> {
    let input = read_script(&args.file)?;
    execute(&input.text, Some(&input.name), args.size)
}

/// Parse and execute `source` against a fresh array, printing to stdout.
pub fn execute(source: &str, filename: Option<&str>, size: usize) -> CliResult<()> {
    let script = parse(source).map_err(|e| CliError::from_script(e, source, filename))?;
    tracing::debug!(
        statements = script.statements.len(),
        size,
        "Parsed script"
    );

    let mut session = Session::new(size);
    let mut stdout = std::io::stdout().lock();
    session
        .execute(&script, &mut stdout)
        .map_err(|e| CliError::from_exec(e, source, filename))
}
