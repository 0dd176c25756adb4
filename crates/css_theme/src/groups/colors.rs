use serde::Deserialize;

use crate::group::CssVariableGroup;
use crate::variable::Declaration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Palette and body colors on `:root`.
pub struct RootColors {
    /// `--bs-primary`
    pub primary: Option<String>,
    /// `--bs-secondary`
    pub secondary: Option<String>,
    /// `--bs-success`
    pub success: Option<String>,
    /// `--bs-info`
    pub info: Option<String>,
    /// `--bs-warning`
    pub warning: Option<String>,
    /// `--bs-danger`
    pub danger: Option<String>,
    /// `--bs-light`
    pub light: Option<String>,
    /// `--bs-dark`
    pub dark: Option<String>,
    /// `--bs-body-color`
    pub body_color: Option<String>,
    /// `--bs-body-bg`
    pub body_bg: Option<String>,
    /// `--bs-link-color`
    pub link_color: Option<String>,
    /// `--bs-border-color`
    pub border_color: Option<String>,
}

impl CssVariableGroup for RootColors {
    fn selector(&self) -> &str {
        ":root"
    }

    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::custom("bs-primary", self.primary.as_deref()),
            Declaration::custom("bs-secondary", self.secondary.as_deref()),
            Declaration::custom("bs-success", self.success.as_deref()),
            Declaration::custom("bs-info", self.info.as_deref()),
            Declaration::custom("bs-warning", self.warning.as_deref()),
            Declaration::custom("bs-danger", self.danger.as_deref()),
            Declaration::custom("bs-light", self.light.as_deref()),
            Declaration::custom("bs-dark", self.dark.as_deref()),
            Declaration::custom("bs-body-color", self.body_color.as_deref()),
            Declaration::custom("bs-body-bg", self.body_bg.as_deref()),
            Declaration::custom("bs-link-color", self.link_color.as_deref()),
            Declaration::custom("bs-border-color", self.border_color.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::emitter::{resolve, ResolvedDeclaration};

    #[test]
    fn enumerates_in_declaration_order() {
        let colors = RootColors {
            danger: Some("#dc3545".to_string()),
            primary: Some("#0d6efd".to_string()),
            ..RootColors::default()
        };
        let lines: Vec<_> = resolve([&colors as &dyn CssVariableGroup])
            .iter()
            .map(ResolvedDeclaration::to_line)
            .collect();
        assert_eq!(
            lines,
            ["  --bs-primary: #0d6efd;", "  --bs-danger: #dc3545;"]
        );
    }

    #[test]
    fn default_has_no_values() {
        assert!(!RootColors::default().has_values());
        assert_eq!(RootColors::default().declarations().len(), 12);
    }
}
