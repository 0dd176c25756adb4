use serde::{Deserialize, Deserializer};

use crate::group::CssVariableGroup;
use crate::variable::{CssVariableName, Declaration, DeclarationKind};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
/// One named entry of a [`CustomGroup`].
pub struct CustomVariable {
    /// Validated name without `--`.
    pub name: CssVariableName,
    /// Override value.
    #[serde(default)]
    pub value: Option<String>,
    /// Custom property (default) or direct property.
    #[serde(default)]
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
/// Application-defined group with an arbitrary selector and ordered entries.
pub struct CustomGroup {
    /// Target selector; must not be blank.
    #[serde(deserialize_with = "non_blank_selector")]
    pub selector: String,
    /// Entries in output order.
    #[serde(default)]
    pub variables: Vec<CustomVariable>,
}

impl CustomGroup {
    /// Creates an empty group for `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            variables: Vec::new(),
        }
    }

    /// Appends a custom property entry.
    pub fn with_variable(mut self, name: CssVariableName, value: impl Into<String>) -> Self {
        self.variables.push(CustomVariable {
            name,
            value: Some(value.into()),
            kind: DeclarationKind::Custom,
        });
        self
    }

    /// Appends a direct property entry.
    pub fn with_property(mut self, name: CssVariableName, value: impl Into<String>) -> Self {
        self.variables.push(CustomVariable {
            name,
            value: Some(value.into()),
            kind: DeclarationKind::Property,
        });
        self
    }
}

fn non_blank_selector<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let selector = String::deserialize(deserializer)?;
    if selector.trim().is_empty() {
        return Err(serde::de::Error::custom("custom group selector must not be blank"));
    }
    Ok(selector)
}

impl CssVariableGroup for CustomGroup {
    fn selector(&self) -> &str {
        &self.selector
    }

    fn declarations(&self) -> Vec<Declaration> {
        self.variables
            .iter()
            .map(|variable| Declaration {
                kind: variable.kind,
                name: variable.name.as_str().to_string().into(),
                value: variable.value.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::emitter::{resolve, ResolvedDeclaration};

    fn name(value: &str) -> CssVariableName {
        CssVariableName::new(value).expect("valid name")
    }

    #[test]
    fn keeps_entry_order_and_kind() {
        let group = CustomGroup::new(".sidebar")
            .with_variable(name("sidebar-width"), "16rem")
            .with_property(name("overflow-y"), "auto");
        let lines: Vec<_> = resolve([&group as &dyn CssVariableGroup])
            .iter()
            .map(ResolvedDeclaration::to_line)
            .collect();
        assert_eq!(
            lines,
            ["  --sidebar-width: 16rem;", "  overflow-y: auto;"]
        );
    }

    #[test]
    fn rejects_blank_selector() {
        let err = toml::from_str::<CustomGroup>("selector = \"  \"\n")
            .expect_err("blank selector should fail");
        assert!(err.to_string().contains("selector must not be blank"));

        let group: CustomGroup =
            toml::from_str("selector = \".sidebar\"\n").expect("selector only");
        assert_eq!(group, CustomGroup::new(".sidebar"));
    }
}
