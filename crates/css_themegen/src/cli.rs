//! Command-line parsing and help output.

use std::path::PathBuf;

use css_theme::{ThemeError, ThemeResult};

/// Parsed `css-themegen` invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Render the stylesheet to `out`, or stdout when absent.
    Build {
        /// Theme TOML path.
        config: PathBuf,
        /// Output stylesheet path.
        out: Option<PathBuf>,
    },
    /// Print resolved declarations as JSON.
    Vars {
        /// Theme TOML path.
        config: PathBuf,
    },
    /// Print usage.
    Help,
}

/// Parse raw command-line arguments (without the program name).
pub fn parse(args: Vec<String>) -> ThemeResult<Command> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(Command::Help);
    };

    let rest = &args[1..];
    match cmd.as_str() {
        "build" => {
            let options = parse_options(rest, &["--config", "--out"])?;
            Ok(Command::Build {
                config: required_config(&options)?,
                out: option_value(&options, "--out").map(PathBuf::from),
            })
        }
        "vars" => {
            let options = parse_options(rest, &["--config"])?;
            Ok(Command::Vars {
                config: required_config(&options)?,
            })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(ThemeError::validation(format!("unknown command: {other}"))
            .with_hint("run `css-themegen help` for usage")),
    }
}

fn parse_options(args: &[String], allowed: &[&str]) -> ThemeResult<Vec<(String, String)>> {
    let mut options = Vec::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        if !allowed.contains(&flag.as_str()) {
            return Err(ThemeError::validation(format!("unknown argument: {flag}")));
        }
        let Some(value) = iter.next() else {
            return Err(ThemeError::validation(format!("missing value for {flag}")));
        };
        options.push((flag.clone(), value.clone()));
    }
    Ok(options)
}

fn option_value<'a>(options: &'a [(String, String)], flag: &str) -> Option<&'a str> {
    options
        .iter()
        .rev()
        .find(|(name, _)| name == flag)
        .map(|(_, value)| value.as_str())
}

fn required_config(options: &[(String, String)]) -> ThemeResult<PathBuf> {
    option_value(options, "--config")
        .map(PathBuf::from)
        .ok_or_else(|| ThemeError::validation("missing required --config <theme.toml>"))
}

/// Print the usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: css-themegen <command> [args]\n\
         \n\
         Commands:\n\
           build --config <theme.toml> [--out <file.css>]\n\
                               Render the theme stylesheet (stdout without --out)\n\
           vars --config <theme.toml>\n\
                               Print resolved declarations as JSON\n\
           help                Show this message\n\
         \n\
         Set RUST_LOG=debug for diagnostic output.\n"
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use css_theme::ThemeErrorCategory;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()).expect("parse"), Command::Help);
        assert_eq!(parse(args(&["-h"])).expect("parse"), Command::Help);
    }

    #[test]
    fn parses_build_with_output() {
        let command = parse(args(&["build", "--config", "theme.toml", "--out", "dist/theme.css"]))
            .expect("parse");
        assert_eq!(
            command,
            Command::Build {
                config: PathBuf::from("theme.toml"),
                out: Some(PathBuf::from("dist/theme.css")),
            }
        );
    }

    #[test]
    fn build_requires_config() {
        let err = parse(args(&["build", "--out", "theme.css"])).expect_err("missing config");
        assert_eq!(err.category, ThemeErrorCategory::Validation);
        assert!(err.message.contains("--config"));
    }

    #[test]
    fn vars_rejects_out_flag() {
        let err = parse(args(&["vars", "--config", "a.toml", "--out", "b.css"]))
            .expect_err("unknown flag");
        assert!(err.message.contains("--out"));
    }

    #[test]
    fn flag_without_value_is_rejected() {
        let err = parse(args(&["vars", "--config"])).expect_err("missing value");
        assert_eq!(err.message, "missing value for --config");
    }

    #[test]
    fn unknown_command_is_validation_error() {
        let err = parse(args(&["serve"])).expect_err("unknown command");
        assert_eq!(err.category, ThemeErrorCategory::Validation);
        assert!(err.to_string().contains("[hint:"));
    }
}
