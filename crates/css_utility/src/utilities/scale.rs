use std::borrow::Cow;

use crate::breakpoint::ScreenBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Uniform scale transform in percent.
pub enum Scale {
    /// 0%
    S0,
    /// 50%
    S50,
    /// 75%
    S75,
    /// 90%
    S90,
    /// 95%
    S95,
    /// 100%
    S100,
    /// 105%
    S105,
    /// 110%
    S110,
    /// 125%
    S125,
    /// 150%
    S150,
}

/// Builder for [`Scale`] rules.
pub type ScaleBuilder = RuleBuilder<Scale>;

impl Scale {
    fn percent(self) -> u16 {
        match self {
            Self::S0 => 0,
            Self::S50 => 50,
            Self::S75 => 75,
            Self::S90 => 90,
            Self::S95 => 95,
            Self::S100 => 100,
            Self::S105 => 105,
            Self::S110 => 110,
            Self::S125 => 125,
            Self::S150 => 150,
        }
    }
}

impl Utility for Scale {
    type Breakpoint = ScreenBreakpoint;

    const DEFAULT: Self = Self::S100;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("scale-{}", self.percent()))
    }

    fn style(&self) -> Cow<'static, str> {
        let percent = self.percent();
        Cow::Owned(format!(
            "transform: scale({}.{:02})",
            percent / 100,
            percent % 100
        ))
    }
}

fluent_tokens!(Scale {
    s0 => S0,
    s50 => S50,
    s75 => S75,
    s90 => S90,
    s95 => S95,
    s100 => S100,
    s105 => S105,
    s110 => S110,
    s125 => S125,
    s150 => S150,
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_classes_with_variant_prefix() {
        let builder = Scale::s95().s105().on_md().s110().on_xl();
        assert_eq!(builder.to_class(), "scale-95 md:scale-105 xl:scale-110");
    }

    #[test]
    fn renders_transform_style() {
        assert_eq!(
            Scale::s50().s125().s0().to_style(),
            "transform: scale(0.50); transform: scale(1.25); transform: scale(0.00)"
        );
    }
}
