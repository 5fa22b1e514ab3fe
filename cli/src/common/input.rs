//! Script input.

use std::io::Read;

use super::{CliError, CliResult};

/// A script's text and the name to show in error reports.
pub struct Input {
    pub text: String,
    pub name: String,
}

/// Read a script from `path`, or from stdin when `path` is "-".
pub fn read_script(path: &str) -> CliResult<Input> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::Input(format!("<stdin>: {e}")))?;
        return Ok(Input {
            text,
            name: "<stdin>".to_string(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| CliError::Input(format!("{path}: {e}")))?;
    Ok(Input {
        text,
        name: path.to_string(),
    })
}
