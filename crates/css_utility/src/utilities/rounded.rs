use std::borrow::Cow;

use crate::breakpoint::ScreenBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Border radius. Class-only: rounded rules never render inline styles.
pub enum Rounded {
    /// `rounded-none`
    None,
    /// `rounded-sm`
    Sm,
    /// `rounded`
    Regular,
    /// `rounded-md`
    Md,
    /// `rounded-lg`
    Lg,
    /// `rounded-xl`
    Xl,
    /// `rounded-full`
    Full,
}

/// Builder for [`Rounded`] rules.
pub type RoundedBuilder = RuleBuilder<Rounded>;

impl Utility for Rounded {
    type Breakpoint = ScreenBreakpoint;

    const DEFAULT: Self = Self::Regular;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::None => "rounded-none",
            Self::Sm => "rounded-sm",
            Self::Regular => "rounded",
            Self::Md => "rounded-md",
            Self::Lg => "rounded-lg",
            Self::Xl => "rounded-xl",
            Self::Full => "rounded-full",
        })
    }
}

fluent_tokens!(Rounded {
    none => None,
    sm => Sm,
    regular => Regular,
    md => Md,
    lg => Lg,
    xl => Xl,
    full => Full,
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_rule_renders_plain_rounded() {
        assert_eq!(RoundedBuilder::new().on_sm().to_class(), "sm:rounded");
    }

    #[test]
    fn never_renders_style() {
        let builder = Rounded::none().sm().md().xl().full();
        assert_eq!(
            builder.to_class(),
            "rounded-none rounded-sm rounded-md rounded-xl rounded-full"
        );
        assert_eq!(builder.to_style(), "");
    }
}
