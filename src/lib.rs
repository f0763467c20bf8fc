//! Small helpers for running commands through the operating system.
//!
//! The crate splits command lines into shell words ([`tokenize`]), runs them
//! directly ([`run_shell`], [`run_command`]) or through the platform shell
//! ([`run_shell_async`]), and recognises simple flag tokens ([`is_flag`],
//! [`flag_value`]). Every child process inherits the caller's standard
//! streams and is waited for before the call returns.
//!
//! Failures are reported through [`Error`], including non-zero exit codes of
//! the child.
//!
//! ```
//! use shell_exec::{tokenize, flag_value};
//!
//! let tokens = tokenize("deploy --env=prod 'release notes.md'").unwrap();
//! assert_eq!(tokens, ["deploy", "--env=prod", "release notes.md"]);
//! assert_eq!(flag_value(&tokens[1], "-e", "--env"), "prod");
//! ```

pub mod command;
mod error;
mod executor;
mod flags;
mod lexer;
mod platform;

pub use error::{Error, Result};
pub use executor::{run_command, run_shell, run_shell_async, run_shell_on};
pub use flags::{Flag, flag_value, is_flag};
pub use lexer::tokenize;
pub use platform::{Platform, ShellInvocation};
