//! Helpers for recognising command-line flag tokens.
//!
//! For [`is_flag`] an empty spelling means "this form does not exist", so a
//! flag with only a long form is written `is_flag(token, "", "--force")`.
//! [`flag_value`] compares plain prefixes, and an empty prefix matches any
//! token.

/// Returns whether `token` is exactly the short or the long spelling of a flag.
///
/// ```
/// use shell_exec::is_flag;
/// assert!(is_flag("-v", "-v", "--verbose"));
/// assert!(is_flag("--verbose", "-v", "--verbose"));
/// assert!(!is_flag("-x", "-v", "--verbose"));
/// assert!(!is_flag("", "", ""));
/// ```
pub fn is_flag(token: &str, short_flag: &str, long_flag: &str) -> bool {
    (!short_flag.is_empty() && token == short_flag) || (!long_flag.is_empty() && token == long_flag)
}

/// Returns the value of an `=`-style flag, e.g. `foo` for `--name=foo`.
///
/// The token matches when it starts with either spelling, compared as a
/// literal prefix; an empty spelling therefore matches every token. The value
/// is everything after the first `=`. A non-matching token, or a matching one
/// without `=`, yields an empty string.
///
/// ```
/// use shell_exec::flag_value;
/// assert_eq!(flag_value("--name=foo", "-n", "--name"), "foo");
/// assert_eq!(flag_value("--name", "-n", "--name"), "");
/// assert_eq!(flag_value("--other=foo", "-n", "--name"), "");
/// ```
pub fn flag_value<'a>(token: &'a str, short_flag: &str, long_flag: &str) -> &'a str {
    if !token.starts_with(short_flag) && !token.starts_with(long_flag) {
        return "";
    }
    token.split_once('=').map_or("", |(_, value)| value)
}

/// A flag with optional short and long spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag<'a> {
    pub short: &'a str,
    pub long: &'a str,
}

impl<'a> Flag<'a> {
    pub const fn new(short: &'a str, long: &'a str) -> Self {
        Self { short, long }
    }

    /// See [`is_flag`].
    pub fn matches(&self, token: &str) -> bool {
        is_flag(token, self.short, self.long)
    }

    /// See [`flag_value`].
    pub fn value<'t>(&self, token: &'t str) -> &'t str {
        flag_value(token, self.short, self.long)
    }
}
