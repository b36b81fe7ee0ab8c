//! User-visible shell errors
//!
//! This module defines [`ShellError`], the errors a command can report back
//! to the terminal. None of them is fatal: each becomes a single
//! [`LineKind::Error`](crate::render::LineKind::Error) line in the session
//! log and the session carries on.
//!
//! The `Display` text of each variant is exactly what the user sees.

use crate::render::DisplayLine;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// `cd` target does not resolve to a directory
    #[error("cd: {path}: No such file or directory")]
    PathNotFound { path: String },

    /// `ls` target does not resolve to a directory
    #[error("ls: {path}: No such file or directory")]
    ListNotFound { path: String },

    /// `cat` argument does not name a file
    #[error("cat: {file}: No such file or directory")]
    FileNotFound { file: String },

    /// Unrecognized command token, reported as typed
    #[error("Command not found: {command}. Type \"help\" for available commands.")]
    CommandNotFound { command: String },

    /// `skills <category>` with a category that does not exist
    #[error("skills: {category}: No such skill category")]
    UnknownCategory { category: String },
}

impl From<ShellError> for DisplayLine {
    fn from(err: ShellError) -> Self {
        DisplayLine::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ShellError::CommandNotFound {
            command: "sudo".into(),
        };
        assert_eq!(
            err.to_string(),
            "Command not found: sudo. Type \"help\" for available commands."
        );

        let line: DisplayLine = ShellError::PathNotFound {
            path: "nonexistent".into(),
        }
        .into();
        assert!(line.is_error());
        assert_eq!(line.text(), "cd: nonexistent: No such file or directory");
    }
}
