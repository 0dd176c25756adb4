//! Stylesheet rendering for variable groups.
//!
//! Groups are resolved into flat [`ResolvedDeclaration`]s first, then folded into one rule body
//! per distinct selector. Selectors appear in the order they are first seen; declarations keep
//! group order and, within a group, declaration order. A selector whose declarations are all
//! unset emits nothing.

use serde::Serialize;

use crate::group::CssVariableGroup;
use crate::variable::DeclarationKind;

/// A declaration with a value, tagged with the selector it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDeclaration {
    /// Target selector.
    pub selector: String,
    /// Name as written in the stylesheet (`--bs-primary`, `font-family`).
    pub name: String,
    /// Value exactly as configured.
    pub value: String,
    /// Custom property or direct property.
    pub kind: DeclarationKind,
}

impl ResolvedDeclaration {
    /// Indented stylesheet line without the trailing newline: `  --name: value;`.
    pub fn to_line(&self) -> String {
        format!("  {}: {};", self.name, self.value)
    }
}

/// Flattens `groups` into their set declarations, dropping unset and empty values.
pub fn resolve<'a, I>(groups: I) -> Vec<ResolvedDeclaration>
where
    I: IntoIterator<Item = &'a dyn CssVariableGroup>,
{
    let mut resolved = Vec::new();
    for group in groups {
        if !group.has_values() {
            tracing::trace!(selector = group.selector(), "skipping group without values");
            continue;
        }
        for declaration in group.declarations() {
            let Some(value) = declaration.effective_value() else {
                continue;
            };
            resolved.push(ResolvedDeclaration {
                selector: group.selector().to_string(),
                name: declaration.property_name(),
                value: value.to_string(),
                kind: declaration.kind,
            });
        }
    }
    resolved
}

/// Renders `groups` as stylesheet text.
///
/// ```
/// use css_theme::{emit_stylesheet, CssVariableGroup, RootColors};
///
/// let colors = RootColors {
///     primary: Some("#0d6efd".into()),
///     ..RootColors::default()
/// };
/// let css = emit_stylesheet([&colors as &dyn CssVariableGroup]);
/// assert_eq!(css, ":root {\n  --bs-primary: #0d6efd;\n}\n");
/// ```
pub fn emit_stylesheet<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = &'a dyn CssVariableGroup>,
{
    render_blocks(&resolve(groups))
}

/// Renders already resolved declarations grouped by selector.
pub fn render_blocks(declarations: &[ResolvedDeclaration]) -> String {
    let mut blocks: Vec<(&str, Vec<&ResolvedDeclaration>)> = Vec::new();
    for declaration in declarations {
        match blocks
            .iter_mut()
            .find(|(selector, _)| *selector == declaration.selector)
        {
            Some((_, entries)) => entries.push(declaration),
            None => blocks.push((declaration.selector.as_str(), vec![declaration])),
        }
    }

    let mut css = String::new();
    for (index, (selector, entries)) in blocks.iter().enumerate() {
        if index > 0 {
            css.push('\n');
        }
        css.push_str(selector);
        css.push_str(" {\n");
        for entry in entries {
            css.push_str(&entry.to_line());
            css.push('\n');
        }
        css.push_str("}\n");
    }
    css
}
