use std::borrow::Cow;

use crate::breakpoint::DeviceBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// CSS `visibility`.
pub enum Visibility {
    /// `visible`
    Visible,
    /// `invisible`
    Invisible,
}

/// Builder for [`Visibility`] rules.
pub type VisibilityBuilder = RuleBuilder<Visibility>;

impl Utility for Visibility {
    type Breakpoint = DeviceBreakpoint;

    const DEFAULT: Self = Self::Visible;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Visible => "visible",
            Self::Invisible => "invisible",
        })
    }

    fn style(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Visible => "visibility: visible",
            Self::Invisible => "visibility: hidden",
        })
    }
}

fluent_tokens!(Visibility {
    visible => Visible,
    invisible => Invisible,
});
