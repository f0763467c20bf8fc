//! Blocking execution of child processes with inherited standard streams.

use crate::command::exit_code;
use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::platform::Platform;
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::debug;

/// Tokenize `command` and run it directly, without a shell.
///
/// The first word is the program, looked up on `PATH` by the OS; the remaining
/// words are passed as literal arguments. Pipes, redirections and globs are
/// therefore not interpreted. The child shares this process's stdin, stdout
/// and stderr, and the call blocks until it exits.
///
/// # Errors
/// - [`Error::Parse`] if the command line is malformed.
/// - [`Error::InvalidCommand`] if it contains no words.
/// - [`Error::Launch`] if the program cannot be started.
/// - [`Error::NonZeroExit`] if it exits with a non-zero code.
pub fn run_shell(command: &str) -> Result<()> {
    let tokens = tokenize(command)?;
    let (program, args) = tokens.split_first().ok_or(Error::InvalidCommand)?;
    let mut cmd = Command::new(program);
    cmd.args(args);
    spawn_and_wait(program, cmd)
}

/// Hand `command` to the shell of the current platform and wait for it.
///
/// Uses `sh -c` on Linux and macOS, `cmd.exe /c` on Windows, or
/// `powershell & '<command>'` when the command runs a `.ps1` script. Despite
/// the name this call blocks; backgrounding is up to the shell itself.
///
/// # Errors
/// - [`Error::UnsupportedPlatform`] on any other OS; nothing is spawned.
/// - [`Error::Launch`] and [`Error::NonZeroExit`] as for [`run_shell`].
pub fn run_shell_async(command: &str) -> Result<()> {
    run_shell_on(Platform::current(), command)
}

/// Same as [`run_shell_async`], for an explicitly chosen platform.
pub fn run_shell_on(platform: &Platform, command: &str) -> Result<()> {
    let invocation = platform.shell_invocation(command)?;
    spawn_and_wait(invocation.program, invocation.to_command())
}

/// Run `program` with literal `args`: no tokenization and no shell.
///
/// Streams and exit handling are the same as for [`run_shell`].
pub fn run_command<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    spawn_and_wait(program, cmd)
}

fn spawn_and_wait(program: &str, mut cmd: Command) -> Result<()> {
    let launch_error = |source| Error::Launch {
        program: program.to_string(),
        source,
    };

    debug!(program, args = cmd.get_args().len(), "spawning child process");
    let mut child = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(launch_error)?;
    let status = child.wait().map_err(launch_error)?;

    let code = exit_code(status);
    debug!(program, code, "child process exited");
    if status.success() {
        Ok(())
    } else {
        Err(Error::NonZeroExit {
            program: program.to_string(),
            code,
        })
    }
}
