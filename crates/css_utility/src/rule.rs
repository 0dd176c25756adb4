//! Single rule records accumulated by [`RuleBuilder`](crate::builder::RuleBuilder).

use std::borrow::Cow;

use crate::breakpoint::Breakpoint;
use crate::builder::Utility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One utility token with an optional responsive breakpoint.
pub struct Rule<U: Utility> {
    value: U,
    breakpoint: Option<U::Breakpoint>,
}

impl<U: Utility> Rule<U> {
    /// Creates a rule that applies at every screen size.
    pub fn new(value: U) -> Self {
        Self {
            value,
            breakpoint: None,
        }
    }

    /// Returns a copy of this rule bound to `breakpoint`.
    pub fn with_breakpoint(self, breakpoint: U::Breakpoint) -> Self {
        Self {
            breakpoint: Some(breakpoint),
            ..self
        }
    }

    /// Utility token.
    pub fn value(&self) -> U {
        self.value
    }

    /// Breakpoint, if any.
    pub fn breakpoint(&self) -> Option<U::Breakpoint> {
        self.breakpoint
    }

    /// Rendered class, or `None` when the token has no class mapping.
    pub fn class(&self) -> Option<String> {
        let base = self.value.class_name();
        if base.is_empty() {
            return None;
        }
        Some(match self.breakpoint {
            Some(breakpoint) => breakpoint.apply(&base),
            None => base.into_owned(),
        })
    }

    /// Inline declaration, or `None` when the token has no style mapping.
    ///
    /// Breakpoints never reach inline styles.
    pub fn style(&self) -> Option<Cow<'static, str>> {
        let style = self.value.style();
        (!style.is_empty()).then_some(style)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::breakpoint::DeviceBreakpoint;
    use crate::utilities::{BoxShadow, Opacity};

    #[test]
    fn with_breakpoint_keeps_value() {
        let rule = Rule::new(BoxShadow::Large).with_breakpoint(DeviceBreakpoint::Tablet);
        assert_eq!(rule.value(), BoxShadow::Large);
        assert_eq!(rule.breakpoint(), Some(DeviceBreakpoint::Tablet));
        assert_eq!(rule.class().as_deref(), Some("shadow-md-lg"));
    }

    #[test]
    fn unmapped_class_yields_none() {
        let rule = Rule::new(Opacity::V10).with_breakpoint(DeviceBreakpoint::Laptop);
        assert_eq!(rule.class(), None);
        assert_eq!(rule.style().as_deref(), Some("opacity: .1"));
    }

    #[test]
    fn style_ignores_breakpoint() {
        let plain = Rule::new(Opacity::V50);
        let responsive = plain.with_breakpoint(DeviceBreakpoint::Desktop);
        assert_eq!(plain.style(), responsive.style());
    }
}
