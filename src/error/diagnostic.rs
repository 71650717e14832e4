//! Diagnostic formatting for parse errors
//!
//! Presentation only: the parser never prints, callers decide where the
//! formatted text goes.

use super::ParseError;
use colored::Colorize;

/// A parse error ready for display
pub struct Diagnostic<'a> {
    error: &'a ParseError,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a ParseError) -> Self {
        Self { error }
    }

    /// Format the diagnostic with color
    pub fn format(&self) -> String {
        format!(
            "{}: {} {}",
            "Parse Error".red().bold(),
            self.error,
            format!("[{}]", self.error.kind()).dimmed()
        )
    }

    /// Format every error in order, followed by a summary line
    pub fn report(errors: &[ParseError]) -> String {
        let mut output = String::new();

        for error in errors {
            output.push_str(&Diagnostic::new(error).format());
            output.push('\n');
        }

        let summary = match errors.len() {
            0 => "no errors".green().bold(),
            1 => "1 error".red().bold(),
            n => format!("{} errors", n).red().bold(),
        };
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), summary));

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
