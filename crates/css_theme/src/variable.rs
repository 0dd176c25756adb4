//! Variable names and declarations produced by variable groups.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected variable or property names.
pub enum InvalidName {
    /// The name is empty or whitespace.
    #[error("variable name must not be empty")]
    Empty,
    /// The name carries its own `--` prefix.
    #[error("variable name `{0}` must be given without the leading `--`")]
    LeadingDashes(String),
    /// The name contains a character outside `[A-Za-z0-9_-]`.
    #[error("variable name `{name}` contains invalid character `{character}`")]
    InvalidCharacter {
        /// Offending name.
        name: String,
        /// First invalid character.
        character: char,
    },
}

/// Validated custom-property or property name, stored without the `--` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssVariableName(String);

impl CssVariableName {
    /// Validates `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidName`] for empty names, names starting with `--`, and names containing
    /// characters other than ASCII letters, digits, `_`, and `-`.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidName> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidName::Empty);
        }
        if trimmed.starts_with("--") {
            return Err(InvalidName::LeadingDashes(trimmed.to_string()));
        }
        if let Some(character) = trimmed
            .chars()
            .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-'))
        {
            return Err(InvalidName::InvalidCharacter {
                name: trimmed.to_string(),
                character,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Name without prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CssVariableName {
    type Error = InvalidName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CssVariableName> for String {
    fn from(value: CssVariableName) -> Self {
        value.0
    }
}

impl Display for CssVariableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a declaration is written.
pub enum DeclarationKind {
    /// `--name: value;`
    #[default]
    Custom,
    /// `name: value;`
    Property,
}

/// One overridable declaration of a variable group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Custom property or direct property.
    pub kind: DeclarationKind,
    /// Name without `--` prefix.
    pub name: Cow<'static, str>,
    /// Override value; `None` or empty values are not emitted.
    pub value: Option<String>,
}

impl Declaration {
    /// Custom property declaration (`--name`).
    pub fn custom(name: impl Into<Cow<'static, str>>, value: Option<&str>) -> Self {
        Self {
            kind: DeclarationKind::Custom,
            name: name.into(),
            value: value.map(str::to_string),
        }
    }

    /// Direct property declaration.
    pub fn property(name: impl Into<Cow<'static, str>>, value: Option<&str>) -> Self {
        Self {
            kind: DeclarationKind::Property,
            name: name.into(),
            value: value.map(str::to_string),
        }
    }

    /// Value as given, or `None` when unset or empty.
    pub fn effective_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }

    /// Name as written in the stylesheet.
    pub fn property_name(&self) -> String {
        match self.kind {
            DeclarationKind::Custom => format!("--{}", self.name),
            DeclarationKind::Property => self.name.to_string(),
        }
    }
}
