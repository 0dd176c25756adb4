//! Errors raised while loading themes and writing stylesheets.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::variable::InvalidName;

/// Which stage of theme generation failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThemeErrorCategory {
    /// The theme TOML is missing, unreadable, or does not match the theme schema.
    Config,
    /// The stylesheet could not be written.
    Io,
    /// A variable name or command-line argument was rejected.
    Validation,
}

/// Failure reported by the theme loader, the stylesheet writer, or `css-themegen`.
///
/// Renders as `message [target: ...] [hint: ...]`, leaving out whichever context is absent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThemeError {
    /// Failing stage.
    pub category: ThemeErrorCategory,
    /// What went wrong.
    pub message: String,
    /// Theme or stylesheet path involved, if any.
    pub target: Option<String>,
    /// Suggested fix shown after the message.
    pub hint: Option<String>,
}

/// Result alias used across theme loading, rendering, and writing.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Error in `category` with no path or hint yet.
    pub fn new(category: ThemeErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            target: None,
            hint: None,
        }
    }

    /// Theme TOML could not be read or parsed.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ThemeErrorCategory::Config, message)
    }

    /// Stylesheet output failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ThemeErrorCategory::Io, message)
    }

    /// A name or argument was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ThemeErrorCategory::Validation, message)
    }

    /// Records the theme or stylesheet path the error concerns.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Adds a suggested fix, such as the expected TOML table.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        let context = [("target", &self.target), ("hint", &self.hint)];
        for (label, value) in context {
            if let Some(value) = value {
                write!(f, " [{label}: {value}]")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(value: std::io::Error) -> Self {
        ThemeError::io(value.to_string())
    }
}

impl From<InvalidName> for ThemeError {
    fn from(value: InvalidName) -> Self {
        ThemeError::validation(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_appends_context() {
        let err = ThemeError::config("failed to parse theme")
            .with_path(Path::new("themes/dark.toml"))
            .with_hint("check the [colors] table");
        assert_eq!(
            err.to_string(),
            "failed to parse theme [target: themes/dark.toml] [hint: check the [colors] table]"
        );
    }

    #[test]
    fn invalid_names_become_validation_errors() {
        let err = ThemeError::from(InvalidName::Empty);
        assert_eq!(err.category, ThemeErrorCategory::Validation);
        assert_eq!(err.hint, None);
    }

    #[test]
    fn display_skips_absent_context() {
        assert_eq!(ThemeError::io("disk full").to_string(), "disk full");
        assert_eq!(
            ThemeError::validation("unknown command: serve")
                .with_hint("run `css-themegen help`")
                .to_string(),
            "unknown command: serve [hint: run `css-themegen help`]"
        );
    }
}
