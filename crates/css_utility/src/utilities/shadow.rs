use std::borrow::Cow;

use crate::breakpoint::DeviceBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Box shadow elevation.
pub enum BoxShadow {
    /// Removes the shadow.
    None,
    /// Subtle shadow.
    Small,
    /// Standard shadow.
    Regular,
    /// Large shadow.
    Large,
}

/// Builder for [`BoxShadow`] rules.
pub type BoxShadowBuilder = RuleBuilder<BoxShadow>;

impl Utility for BoxShadow {
    type Breakpoint = DeviceBreakpoint;

    const DEFAULT: Self = Self::Regular;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::None => "shadow-none",
            Self::Small => "shadow-sm",
            Self::Regular => "shadow",
            Self::Large => "shadow-lg",
        })
    }

    fn style(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::None => "box-shadow: none",
            Self::Small => "box-shadow: var(--bs-box-shadow-sm)",
            Self::Regular => "box-shadow: var(--bs-box-shadow)",
            Self::Large => "box-shadow: var(--bs-box-shadow-lg)",
        })
    }
}

fluent_tokens!(BoxShadow {
    none => None,
    small => Small,
    regular => Regular,
    large => Large,
});
