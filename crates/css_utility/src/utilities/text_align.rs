use std::borrow::Cow;

use crate::breakpoint::DeviceBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Horizontal text alignment.
///
/// `Justify` has no utility class and only renders as an inline style.
pub enum TextAlignment {
    /// `text-start`
    Start,
    /// `text-center`
    Center,
    /// `text-end`
    End,
    /// `text-align: justify`
    Justify,
}

/// Builder for [`TextAlignment`] rules.
pub type TextAlignmentBuilder = RuleBuilder<TextAlignment>;

impl Utility for TextAlignment {
    type Breakpoint = DeviceBreakpoint;

    const DEFAULT: Self = Self::Start;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Start => "text-start",
            Self::Center => "text-center",
            Self::End => "text-end",
            Self::Justify => "",
        })
    }

    fn style(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Start => "text-align: start",
            Self::Center => "text-align: center",
            Self::End => "text-align: end",
            Self::Justify => "text-align: justify",
        })
    }
}

fluent_tokens!(TextAlignment {
    start => Start,
    center => Center,
    end => End,
    justify => Justify,
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aligns_per_breakpoint() {
        let builder = TextAlignment::center().start().on_laptop();
        assert_eq!(builder.to_class(), "text-center text-lg-start");
    }

    #[test]
    fn justify_is_style_only() {
        let builder = TextAlignment::justify().on_tablet().end();
        assert_eq!(builder.to_class(), "text-end");
        assert_eq!(
            builder.to_style(),
            "text-align: justify; text-align: end"
        );
    }
}
