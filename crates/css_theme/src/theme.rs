//! Theme aggregate.

use std::path::Path;

use serde::Deserialize;

use crate::emitter::{emit_stylesheet, resolve, ResolvedDeclaration};
use crate::error::ThemeResult;
use crate::group::CssVariableGroup;
use crate::groups::{
    BodyOverrides, ButtonVariables, CardVariables, CustomGroup, ModalVariables, RootColors,
    Typography,
};
use crate::writer::write_stylesheet;

/// Every variable group of one theme.
///
/// Deserializes from TOML with one table per group (`[colors]`, `[typography]`, `[body]`,
/// `[button]`, `[card]`, `[modal]`) plus any number of `[[custom]]` groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Display name, informational only.
    pub name: Option<String>,
    /// `:root` palette.
    pub colors: RootColors,
    /// `:root` font variables.
    pub typography: Typography,
    /// `body` direct properties.
    pub body: BodyOverrides,
    /// `.btn` variables.
    pub button: ButtonVariables,
    /// `.card` variables.
    pub card: CardVariables,
    /// `.modal` variables.
    pub modal: ModalVariables,
    /// Application-defined groups, emitted after the built-in ones.
    pub custom: Vec<CustomGroup>,
}

impl Theme {
    /// Groups in emission order.
    pub fn groups(&self) -> Vec<&dyn CssVariableGroup> {
        let builtin: [&dyn CssVariableGroup; 6] = [
            &self.colors,
            &self.typography,
            &self.body,
            &self.button,
            &self.card,
            &self.modal,
        ];
        let mut groups = builtin.to_vec();
        groups.extend(
            self.custom
                .iter()
                .map(|group| group as &dyn CssVariableGroup),
        );
        groups
    }

    /// Set declarations of every group.
    pub fn resolved(&self) -> Vec<ResolvedDeclaration> {
        resolve(self.groups())
    }

    /// Renders the theme stylesheet.
    pub fn to_stylesheet(&self) -> String {
        emit_stylesheet(self.groups())
    }

    /// Renders the stylesheet and writes it to `path`.
    pub fn write_to(&self, path: &Path) -> ThemeResult<()> {
        write_stylesheet(path, &self.to_stylesheet())
    }
}
