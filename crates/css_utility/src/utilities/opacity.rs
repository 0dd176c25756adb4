use std::borrow::Cow;

use crate::breakpoint::DeviceBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Element opacity in percent.
///
/// `V10` and `V90` have no utility class and only render as inline styles.
pub enum Opacity {
    /// 0%
    V0,
    /// 10%
    V10,
    /// 25%
    V25,
    /// 50%
    V50,
    /// 75%
    V75,
    /// 90%
    V90,
    /// 100%
    V100,
}

/// Builder for [`Opacity`] rules.
pub type OpacityBuilder = RuleBuilder<Opacity>;

impl Utility for Opacity {
    type Breakpoint = DeviceBreakpoint;

    const DEFAULT: Self = Self::V100;

    fn class_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::V0 => "opacity-0",
            Self::V25 => "opacity-25",
            Self::V50 => "opacity-50",
            Self::V75 => "opacity-75",
            Self::V100 => "opacity-100",
            Self::V10 | Self::V90 => "",
        })
    }

    fn style(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::V0 => "opacity: 0",
            Self::V10 => "opacity: .1",
            Self::V25 => "opacity: .25",
            Self::V50 => "opacity: .5",
            Self::V75 => "opacity: .75",
            Self::V90 => "opacity: .9",
            Self::V100 => "opacity: 1",
        })
    }
}

fluent_tokens!(Opacity {
    v0 => V0,
    v10 => V10,
    v25 => V25,
    v50 => V50,
    v75 => V75,
    v90 => V90,
    v100 => V100,
});
