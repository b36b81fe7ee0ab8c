//! Application-level errors
//!
//! Interpreter errors never escape a session (see
//! [`ShellError`](crate::shell::ShellError)); [`AppError`] covers what can
//! go wrong around it: loading configuration and driving the terminal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn fail() -> Result<(), AppError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty closed"))?;
            Ok(())
        }
        let err = fail().unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "terminal I/O failed: tty closed");
    }
}
