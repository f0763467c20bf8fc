//! Splitting of command lines into shell words.

use crate::error::Result;

/// Split a command line into words the way a POSIX shell would.
///
/// Whitespace separates words; single quotes, double quotes and backslash
/// escapes are honored and removed. No expansion of any kind happens, so
/// `|`, `>` or `*` inside the input come back as ordinary characters.
///
/// # Errors
/// Returns [`Error::Parse`](crate::Error::Parse) for an unterminated quote or a
/// trailing backslash.
///
/// # Example
/// ```
/// let tokens = shell_exec::tokenize("echo 'hello world'").unwrap();
/// assert_eq!(tokens, ["echo", "hello world"]);
/// ```
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    Ok(shell_words::split(command)?)
}
