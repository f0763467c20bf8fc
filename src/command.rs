use std::process::ExitStatus;

/// Exit code of a child started by one of the executors.
///
/// Carried by [`Error::NonZeroExit`](crate::Error::NonZeroExit) and passed on
/// by `shexec` as its own exit status.
pub type ExitCode = i32;

/// Map a finished child's status to the code reported to the caller.
///
/// A normal exit keeps its code. On Unix a child killed by a signal has none,
/// so it gets `128 + signal`, the value `$?` holds in a POSIX shell.
pub(crate) fn exit_code(status: ExitStatus) -> ExitCode {
    status.code().unwrap_or_else(|| signal_exit_code(status))
}

#[cfg(unix)]
fn signal_exit_code(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match (status.signal(), status.core_dumped()) {
        (Some(signal), _) => 128 + signal,
        (None, true) => 255,
        (None, false) => -1,
    }
}

// Without a code, non-Unix statuses carry nothing further to report.
#[cfg(not(unix))]
fn signal_exit_code(_status: ExitStatus) -> ExitCode {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_plain_exit_codes_pass_through() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status: exit code lives in the second byte.
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    #[cfg(unix)]
    fn test_signal_maps_to_128_plus_signal() {
        use std::os::unix::process::ExitStatusExt;

        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }
}
