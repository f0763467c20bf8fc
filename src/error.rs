use crate::command::ExitCode;
use thiserror::Error;

/// Result type alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while tokenizing or running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be split into words, e.g. an unterminated quote.
    #[error("failed to tokenize command: {0}")]
    Parse(#[from] shell_words::ParseError),

    /// Tokenization succeeded but produced no words to execute.
    #[error("invalid command: no executable given")]
    InvalidCommand,

    /// The host operating system has no known shell to dispatch to.
    #[error("platform not supported: {os}")]
    UnsupportedPlatform { os: String },

    /// The child process could not be started or waited on.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process ran and exited with a non-zero code.
    #[error("{program} exited with code {code}")]
    NonZeroExit { program: String, code: ExitCode },
}

impl Error {
    /// Exit code reported by the child, if the error came from a finished process.
    pub fn exit_code(&self) -> Option<ExitCode> {
        match self {
            Error::NonZeroExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_only_for_non_zero_exit() {
        let err = Error::NonZeroExit {
            program: "false".to_string(),
            code: 1,
        };
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.to_string(), "false exited with code 1");

        assert_eq!(Error::InvalidCommand.exit_code(), None);
    }

    #[test]
    fn test_launch_error_keeps_io_source() {
        use std::error::Error as _;

        let err = Error::Launch {
            program: "nope".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to launch nope"));
        assert!(err.source().is_some());
    }
}
