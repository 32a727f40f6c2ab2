use std::fmt::Display;

use colored::Colorize;

use crate::lexer::Position;

/// A single structured compile diagnostic. The front-end stops at the
/// first error, so a failed compile carries exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    /// 1-based line of the offending site
    pub line: usize,
    /// 1-based column of the offending site
    pub col: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(position: Position, message: impl ToString) -> Diagnostic {
        Diagnostic {
            line: position.0,
            col: position.1,
            message: message.to_string(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}: {}\n --> {}:{}",
            "error".red().bold(),
            self.message,
            self.line,
            self.col
        ))
    }
}
