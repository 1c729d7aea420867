//! Error handling utilities for the CLI.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// The script could not be read.
    #[diagnostic(code(dynarr::input))]
    #[error("{0}")]
    Input(String),

    /// A statement is not a valid operation.
    #[diagnostic(code(dynarr::parse_error))]
    #[error("{message}")]
    Parse {
        message: String,

        #[source_code]
        src: NamedSource<String>,

        #[label("not understood")]
        span: SourceSpan,

        #[help]
        help: Option<String>,
    },

    /// The array rejected an operation.
    #[diagnostic(code(dynarr::rejected))]
    #[error("{message}")]
    Rejected {
        message: String,

        #[source_code]
        src: NamedSource<String>,

        #[label("rejected here")]
        span: SourceSpan,
    },
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let handler = if no_color {
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
    } else {
        GraphicalReportHandler::new()
    };

    let mut report = String::new();
    if handler.render_report(&mut report, &error).is_err() {
        report = format!("error: {error}\n");
    }
    eprint!("{report}");
    std::process::exit(1);
}
