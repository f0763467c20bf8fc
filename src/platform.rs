use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::process::Command;

/// Matches a command that invokes a PowerShell script, e.g. `deploy.ps1 -Force`.
static POWERSHELL_SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.ps1($| )").expect("valid PowerShell pattern"));

static CURRENT: Lazy<Platform> = Lazy::new(|| Platform::from_os(std::env::consts::OS));

/// Host family that decides which shell interprets a raw command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Linux and macOS: commands go through `sh -c`.
    Posix,
    /// Windows: commands go through `cmd.exe /c`, or `powershell` for `.ps1` scripts.
    Windows,
    /// Anything else. Carries the OS name for error reporting.
    Unsupported(String),
}

impl Platform {
    /// Platform of the running process, resolved once.
    pub fn current() -> &'static Platform {
        &CURRENT
    }

    /// Classify an OS name as reported by [`std::env::consts::OS`].
    ///
    /// ```
    /// use shell_exec::Platform;
    /// assert_eq!(Platform::from_os("macos"), Platform::Posix);
    /// assert_eq!(Platform::from_os("windows"), Platform::Windows);
    /// assert!(matches!(Platform::from_os("freebsd"), Platform::Unsupported(_)));
    /// ```
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" | "macos" => Platform::Posix,
            "windows" => Platform::Windows,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Build the shell invocation that runs `command` on this platform.
    ///
    /// Fails with [`Error::UnsupportedPlatform`] for platforms without a known shell.
    pub fn shell_invocation(&self, command: &str) -> Result<ShellInvocation> {
        let (program, args) = match self {
            Platform::Posix => ("sh", vec!["-c".to_string(), command.to_string()]),
            Platform::Windows if POWERSHELL_SCRIPT.is_match(command) => {
                ("powershell", vec!["&".to_string(), format!("'{command}'")])
            }
            Platform::Windows => ("cmd.exe", vec!["/c".to_string(), command.to_string()]),
            Platform::Unsupported(os) => {
                return Err(Error::UnsupportedPlatform { os: os.clone() });
            }
        };
        Ok(ShellInvocation { program, args })
    }
}

/// Program and arguments used to hand a raw command string to a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl ShellInvocation {
    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args(&self.args);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(Platform::from_os("linux"), Platform::Posix);
        assert_eq!(Platform::from_os("macos"), Platform::Posix);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(
            Platform::from_os("plan9"),
            Platform::Unsupported("plan9".to_string())
        );
    }

    #[test]
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    fn test_current_is_posix() {
        assert_eq!(Platform::current(), &Platform::Posix);
    }

    #[test]
    fn test_posix_uses_sh() {
        let inv = Platform::Posix.shell_invocation("echo hi | wc -c").unwrap();
        assert_eq!(inv.program, "sh");
        assert_eq!(inv.args, vec!["-c", "echo hi | wc -c"]);
    }

    #[test]
    fn test_windows_uses_cmd() {
        let inv = Platform::Windows.shell_invocation("dir /b").unwrap();
        assert_eq!(inv.program, "cmd.exe");
        assert_eq!(inv.args, vec!["/c", "dir /b"]);
    }

    #[test]
    fn test_windows_detects_powershell_scripts() {
        let inv = Platform::Windows.shell_invocation("build.ps1").unwrap();
        assert_eq!(inv.program, "powershell");
        assert_eq!(inv.args, vec!["&", "'build.ps1'"]);

        let inv = Platform::Windows
            .shell_invocation(r"C:\scripts\deploy.ps1 -Force")
            .unwrap();
        assert_eq!(inv.program, "powershell");
        assert_eq!(inv.args[1], r"'C:\scripts\deploy.ps1 -Force'");
    }

    #[test]
    fn test_ps1_must_end_the_word() {
        let inv = Platform::Windows.shell_invocation("type notes.ps1x").unwrap();
        assert_eq!(inv.program, "cmd.exe");
    }

    #[test]
    fn test_unsupported_has_no_invocation() {
        let err = Platform::Unsupported("haiku".to_string())
            .shell_invocation("ls")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform { os } if os == "haiku"));
    }
}
