//! Theme stylesheet generator commands (`css-themegen`).
//!
//! The crate is a thin CLI layer over [`css_theme`]: [`cli`] turns arguments into a typed
//! [`Command`], and [`run`] loads the theme and renders it to a file or the given writer.

pub mod cli;

use std::io::Write;

use css_theme::{load_theme, ThemeError, ThemeResult};

pub use cli::Command;

/// Executes the binary using the current process arguments, writing to stdout.
pub fn execute_from_env() -> ThemeResult<()> {
    let command = cli::parse(std::env::args().skip(1).collect())?;
    let stdout = std::io::stdout();
    run(command, &mut stdout.lock())
}

/// Executes `command`, writing any printed output to `out`.
pub fn run<W: Write>(command: Command, out: &mut W) -> ThemeResult<()> {
    match command {
        Command::Build { config, out: None } => {
            let theme = load_theme(&config)?;
            out.write_all(theme.to_stylesheet().as_bytes())?;
            Ok(())
        }
        Command::Build {
            config,
            out: Some(path),
        } => {
            let theme = load_theme(&config)?;
            theme.write_to(&path)?;
            tracing::info!(
                config = %config.display(),
                out = %path.display(),
                declarations = theme.resolved().len(),
                "generated theme stylesheet"
            );
            Ok(())
        }
        Command::Vars { config } => {
            let theme = load_theme(&config)?;
            let json = serde_json::to_string_pretty(&theme.resolved()).map_err(|err| {
                ThemeError::validation(format!("failed to serialize declarations: {err}"))
            })?;
            writeln!(out, "{json}")?;
            Ok(())
        }
        Command::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts a command result into a stable process exit code.
///
/// All failures map to exit code `1` after printing the formatted [`ThemeError`] to stderr.
pub fn exit_code(result: ThemeResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
