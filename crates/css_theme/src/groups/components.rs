use serde::Deserialize;

use crate::group::CssVariableGroup;
use crate::variable::Declaration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Button overrides on `.btn`.
pub struct ButtonVariables {
    /// `--bs-btn-padding-x`
    pub padding_x: Option<String>,
    /// `--bs-btn-padding-y`
    pub padding_y: Option<String>,
    /// `--bs-btn-font-size`
    pub font_size: Option<String>,
    /// `--bs-btn-font-weight`
    pub font_weight: Option<String>,
    /// `--bs-btn-border-width`
    pub border_width: Option<String>,
    /// `--bs-btn-border-radius`
    pub border_radius: Option<String>,
}

impl CssVariableGroup for ButtonVariables {
    fn selector(&self) -> &str {
        ".btn"
    }

    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::custom("bs-btn-padding-x", self.padding_x.as_deref()),
            Declaration::custom("bs-btn-padding-y", self.padding_y.as_deref()),
            Declaration::custom("bs-btn-font-size", self.font_size.as_deref()),
            Declaration::custom("bs-btn-font-weight", self.font_weight.as_deref()),
            Declaration::custom("bs-btn-border-width", self.border_width.as_deref()),
            Declaration::custom("bs-btn-border-radius", self.border_radius.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Card overrides on `.card`.
pub struct CardVariables {
    /// `--bs-card-spacer-y`
    pub spacer_y: Option<String>,
    /// `--bs-card-spacer-x`
    pub spacer_x: Option<String>,
    /// `--bs-card-border-color`
    pub border_color: Option<String>,
    /// `--bs-card-border-radius`
    pub border_radius: Option<String>,
    /// `--bs-card-cap-bg`
    pub cap_bg: Option<String>,
    /// `--bs-card-bg`
    pub bg: Option<String>,
}

impl CssVariableGroup for CardVariables {
    fn selector(&self) -> &str {
        ".card"
    }

    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::custom("bs-card-spacer-y", self.spacer_y.as_deref()),
            Declaration::custom("bs-card-spacer-x", self.spacer_x.as_deref()),
            Declaration::custom("bs-card-border-color", self.border_color.as_deref()),
            Declaration::custom("bs-card-border-radius", self.border_radius.as_deref()),
            Declaration::custom("bs-card-cap-bg", self.cap_bg.as_deref()),
            Declaration::custom("bs-card-bg", self.bg.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Modal overrides on `.modal`.
pub struct ModalVariables {
    /// `--bs-modal-width`
    pub width: Option<String>,
    /// `--bs-modal-padding`
    pub padding: Option<String>,
    /// `--bs-modal-bg`
    pub bg: Option<String>,
    /// `--bs-modal-border-radius`
    pub border_radius: Option<String>,
    /// `--bs-modal-header-padding`
    pub header_padding: Option<String>,
}

impl CssVariableGroup for ModalVariables {
    fn selector(&self) -> &str {
        ".modal"
    }

    fn declarations(&self) -> Vec<Declaration> {
        vec![
            Declaration::custom("bs-modal-width", self.width.as_deref()),
            Declaration::custom("bs-modal-padding", self.padding.as_deref()),
            Declaration::custom("bs-modal-bg", self.bg.as_deref()),
            Declaration::custom("bs-modal-border-radius", self.border_radius.as_deref()),
            Declaration::custom("bs-modal-header-padding", self.header_padding.as_deref()),
        ]
    }
}
