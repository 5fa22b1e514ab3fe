//! Error handling utilities for the CLI.

use dynarray::{CharSet, ExecError, RenderConfig, ScriptError, render_error_to};
use nu_ansi_term::Color;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// A script failed to parse or run. Keeps the source for rendering.
    #[error("{error}")]
    Script {
        error: ScriptError,
        source_text: String,
        filename: Option<String>,
    },

    #[error(transparent)]
    Array(#[from] dynarray::Error),

    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Attach the script source to an execution error.
    pub fn from_exec(error: ExecError, source_text: &str, filename: Option<&str>) -> Self {
        match error {
            ExecError::Script(error) => Self::from_script(error, source_text, filename),
            ExecError::Io(e) => CliError::Io(e),
        }
    }

    pub fn from_script(error: ScriptError, source_text: &str, filename: Option<&str>) -> Self {
        CliError::Script {
            error,
            source_text: source_text.to_string(),
            filename: filename.map(str::to_string),
        }
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool, ascii: bool) -> ! {
    render_to(&error, &mut std::io::stderr(), no_color, ascii).ok();
    std::process::exit(1);
}

/// Render an error to a writer.
pub fn render_to(
    error: &CliError,
    writer: &mut dyn std::io::Write,
    no_color: bool,
    ascii: bool,
) -> std::io::Result<()> {
    match error {
        CliError::Script {
            error,
            source_text,
            filename,
        } => {
            let config = RenderConfig {
                color: !no_color,
                filename: filename.as_deref(),
                charset: if ascii { CharSet::Ascii } else { CharSet::Unicode },
            };
            render_error_to(error, source_text, writer, &config)
        }
        other => {
            let label = if no_color {
                "error:".to_string()
            } else {
                Color::Red.bold().paint("error:").to_string()
            };
            writeln!(writer, "{label} {other}")
        }
    }
}
