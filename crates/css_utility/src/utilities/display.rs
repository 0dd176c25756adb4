use std::borrow::Cow;

use crate::breakpoint::DeviceBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// CSS `display` value.
pub enum Display {
    /// `d-none`
    None,
    /// `d-inline`
    Inline,
    /// `d-inline-block`
    InlineBlock,
    /// `d-block`
    Block,
    /// `d-grid`
    Grid,
    /// `d-table`
    Table,
    /// `d-flex`
    Flex,
    /// `d-inline-flex`
    InlineFlex,
}

/// Builder for [`Display`] rules.
pub type DisplayBuilder = RuleBuilder<Display>;

impl Display {
    fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inline => "inline",
            Self::InlineBlock => "inline-block",
            Self::Block => "block",
            Self::Grid => "grid",
            Self::Table => "table",
            Self::Flex => "flex",
            Self::InlineFlex => "inline-flex",
        }
    }
}

impl Utility for Display {
    type Breakpoint = DeviceBreakpoint;

    const DEFAULT: Self = Self::Block;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("d-{}", self.value()))
    }

    fn style(&self) -> Cow<'static, str> {
        Cow::Owned(format!("display: {}", self.value()))
    }
}

fluent_tokens!(Display {
    none => None,
    inline => Inline,
    inline_block => InlineBlock,
    block => Block,
    grid => Grid,
    table => Table,
    flex => Flex,
    inline_flex => InlineFlex,
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hides_below_breakpoint() {
        let builder = Display::none().flex().on_tablet();
        assert_eq!(builder.to_class(), "d-none d-md-flex");
        assert_eq!(builder.to_style(), "display: none; display: flex");
    }

    #[test]
    fn compound_values_keep_their_dashes() {
        assert_eq!(
            Display::inline_block().on_laptop().to_class(),
            "d-lg-inline-block"
        );
    }
}
