use serde::Deserialize;

use crate::group::CssVariableGroup;
use crate::variable::Declaration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Font stacks and body metrics on `:root`.
pub struct Typography {
    /// `--bs-font-sans-serif`
    pub font_sans_serif: Option<String>,
    /// `--bs-font-monospace`
    pub font_monospace: Option<String>,
    /// `--bs-body-font-size`
    pub body_font_size: Option<String>,
    /// `--bs-body-font-weight`
    pub body_font_weight: Option<String>,
    /// `--bs-body-line-height`
    pub body_line_height: Option<String>,
}

impl CssVariableGroup for Typography {
    fn selector(&self) -> &str {
        ":root"
    }

    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::custom("bs-font-sans-serif", self.font_sans_serif.as_deref()),
            Declaration::custom("bs-font-monospace", self.font_monospace.as_deref()),
            Declaration::custom("bs-body-font-size", self.body_font_size.as_deref()),
            Declaration::custom("bs-body-font-weight", self.body_font_weight.as_deref()),
            Declaration::custom("bs-body-line-height", self.body_line_height.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Direct property overrides on `body`.
pub struct BodyOverrides {
    /// `font-family`
    pub font_family: Option<String>,
    /// `color`
    pub color: Option<String>,
    /// `background-color`
    pub background_color: Option<String>,
}

impl CssVariableGroup for BodyOverrides {
    fn selector(&self) -> &str {
        "body"
    }

    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::property("font-family", self.font_family.as_deref()),
            Declaration::property("color", self.color.as_deref()),
            Declaration::property("background-color", self.background_color.as_deref()),
        ]
    }
}
