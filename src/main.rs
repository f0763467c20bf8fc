use anyhow::Context;
use argh::FromArgs;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use shell_exec::{Error, run_command, run_shell, run_shell_async, tokenize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(FromArgs)]
/// Run commands through the operating system with inherited standard streams.
struct Cli {
    #[argh(switch, short = 'v')]
    /// log every spawned process; RUST_LOG takes precedence when set.
    verbose: bool,

    #[argh(subcommand)]
    command: Subcommand,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Run(Run),
    Sh(Sh),
    Exec(Exec),
    Tokens(Tokens),
    Repl(Repl),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "run")]
/// split a command line into words and run it without a shell.
struct Run {
    #[argh(positional)]
    /// the command line, quoted as one argument.
    command: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "sh")]
/// run a command line through the platform shell (sh, cmd.exe or powershell).
struct Sh {
    #[argh(positional)]
    /// the command line, quoted as one argument.
    command: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "exec")]
/// run a program with literal arguments.
struct Exec {
    #[argh(positional)]
    /// program name or path.
    program: String,

    #[argh(positional, greedy)]
    /// arguments passed as-is.
    args: Vec<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "tokens")]
/// print the words of a command line, one per line.
struct Tokens {
    #[argh(positional)]
    /// the command line, quoted as one argument.
    command: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "repl")]
/// read command lines interactively and run each one.
struct Repl {
    #[argh(switch)]
    /// hand lines to the platform shell instead of running them directly.
    shell: bool,
}

fn main() {
    let cli: Cli = argh::from_env();
    init_logging(cli.verbose);

    let code = match execute(cli.command) {
        Ok(()) => 0,
        Err(err) => match err.downcast_ref::<Error>().and_then(Error::exit_code) {
            // The child already reported its own failure.
            Some(code) => code,
            None => {
                eprintln!("shexec: {err:#}");
                1
            }
        },
    };
    std::process::exit(code);
}

fn execute(command: Subcommand) -> anyhow::Result<()> {
    match command {
        Subcommand::Run(Run { command }) => {
            run_shell(&command).with_context(|| format!("run `{command}`"))
        }
        Subcommand::Sh(Sh { command }) => {
            run_shell_async(&command).with_context(|| format!("sh `{command}`"))
        }
        Subcommand::Exec(Exec { program, args }) => {
            run_command(&program, &args).with_context(|| format!("exec `{program}`"))
        }
        Subcommand::Tokens(Tokens { command }) => {
            for token in tokenize(&command)? {
                println!("{token}");
            }
            Ok(())
        }
        Subcommand::Repl(Repl { shell }) => repl(shell),
    }
}

fn repl(use_shell: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("shexec$ ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if line == "exit" {
                    break;
                }

                let result = if use_shell {
                    run_shell_async(line)
                } else {
                    run_shell(line)
                };
                match result {
                    Ok(()) => {}
                    Err(Error::NonZeroExit { code, .. }) => eprintln!("[exit {code}]"),
                    Err(err) => eprintln!("shexec: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
