//! Margin and padding utilities.

use std::borrow::Cow;

use crate::breakpoint::DeviceBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Spaced property.
pub enum SpacingProperty {
    /// `m*` classes.
    Margin,
    /// `p*` classes.
    Padding,
}

impl SpacingProperty {
    fn class_prefix(self) -> &'static str {
        match self {
            Self::Margin => "m",
            Self::Padding => "p",
        }
    }

    fn css_property(self) -> &'static str {
        match self {
            Self::Margin => "margin",
            Self::Padding => "padding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Box side targeted by a spacing rule.
pub enum Side {
    /// Every side.
    All,
    /// Top.
    Top,
    /// Inline end.
    End,
    /// Bottom.
    Bottom,
    /// Inline start.
    Start,
    /// Both inline sides.
    X,
    /// Both block sides.
    Y,
}

impl Side {
    fn class_infix(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Top => "t",
            Self::End => "e",
            Self::Bottom => "b",
            Self::Start => "s",
            Self::X => "x",
            Self::Y => "y",
        }
    }

    fn property_suffix(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Top => "-top",
            Self::End => "-inline-end",
            Self::Bottom => "-bottom",
            Self::Start => "-inline-start",
            Self::X => "-inline",
            Self::Y => "-block",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Spacing scale step.
pub enum SpaceSize {
    /// `0`
    S0,
    /// `.25rem`
    S1,
    /// `.5rem`
    S2,
    /// `1rem`
    S3,
    /// `1.5rem`
    S4,
    /// `3rem`
    S5,
    /// `auto`, margins only.
    Auto,
}

impl SpaceSize {
    fn token(self) -> &'static str {
        match self {
            Self::S0 => "0",
            Self::S1 => "1",
            Self::S2 => "2",
            Self::S3 => "3",
            Self::S4 => "4",
            Self::S5 => "5",
            Self::Auto => "auto",
        }
    }

    fn length(self) -> &'static str {
        match self {
            Self::S0 => "0",
            Self::S1 => ".25rem",
            Self::S2 => ".5rem",
            Self::S3 => "1rem",
            Self::S4 => "1.5rem",
            Self::S5 => "3rem",
            Self::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One margin or padding rule.
///
/// Padding has no `auto` step; such rules render nothing.
pub struct Spacing {
    /// Margin or padding.
    pub property: SpacingProperty,
    /// Targeted side.
    pub side: Side,
    /// Scale step.
    pub size: SpaceSize,
}

/// Builder for [`Spacing`] rules.
pub type SpacingBuilder = RuleBuilder<Spacing>;

impl Spacing {
    /// Creates a spacing token.
    pub const fn new(property: SpacingProperty, side: Side, size: SpaceSize) -> Self {
        Self {
            property,
            side,
            size,
        }
    }

    fn is_supported(&self) -> bool {
        !(self.property == SpacingProperty::Padding && self.size == SpaceSize::Auto)
    }
}

impl Utility for Spacing {
    type Breakpoint = DeviceBreakpoint;

    const DEFAULT: Self = Self::new(SpacingProperty::Margin, Side::All, SpaceSize::S0);

    fn class_name(&self) -> Cow<'static, str> {
        if !self.is_supported() {
            return Cow::Borrowed("");
        }
        Cow::Owned(format!(
            "{}{}-{}",
            self.property.class_prefix(),
            self.side.class_infix(),
            self.size.token()
        ))
    }

    fn style(&self) -> Cow<'static, str> {
        if !self.is_supported() {
            return Cow::Borrowed("");
        }
        Cow::Owned(format!(
            "{}{}: {}",
            self.property.css_property(),
            self.side.property_suffix(),
            self.size.length()
        ))
    }
}

/// Entry points for margin rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Margin;

/// Entry points for padding rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Padding;

impl Margin {
    /// Starts a builder with a margin rule on `side`.
    pub fn on(side: Side, size: SpaceSize) -> SpacingBuilder {
        RuleBuilder::from_token(Spacing::new(SpacingProperty::Margin, side, size))
    }

    /// Margin on every side.
    pub fn all(size: SpaceSize) -> SpacingBuilder {
        Self::on(Side::All, size)
    }

    /// Horizontal auto margins.
    pub fn auto_x() -> SpacingBuilder {
        Self::on(Side::X, SpaceSize::Auto)
    }
}

impl Padding {
    /// Starts a builder with a padding rule on `side`.
    pub fn on(side: Side, size: SpaceSize) -> SpacingBuilder {
        RuleBuilder::from_token(Spacing::new(SpacingProperty::Padding, side, size))
    }

    /// Padding on every side.
    pub fn all(size: SpaceSize) -> SpacingBuilder {
        Self::on(Side::All, size)
    }
}

impl RuleBuilder<Spacing> {
    /// Appends a margin rule.
    pub fn margin(self, side: Side, size: SpaceSize) -> Self {
        self.push(Spacing::new(SpacingProperty::Margin, side, size))
    }

    /// Appends a padding rule.
    pub fn padding(self, side: Side, size: SpaceSize) -> Self {
        self.push(Spacing::new(SpacingProperty::Padding, side, size))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_side_and_size() {
        let builder = Margin::all(SpaceSize::S3)
            .margin(Side::Top, SpaceSize::S0)
            .padding(Side::X, SpaceSize::S2);
        assert_eq!(builder.to_class(), "m-3 mt-0 px-2");
        assert_eq!(
            builder.to_style(),
            "margin: 1rem; margin-top: 0; padding-inline: .5rem"
        );
    }

    #[test]
    fn responsive_spacing_uses_infix() {
        let builder = Padding::on(Side::Bottom, SpaceSize::S1)
            .padding(Side::Bottom, SpaceSize::S5)
            .on_desktop();
        assert_eq!(builder.to_class(), "pb-1 pb-xl-5");
        assert_eq!(Margin::auto_x().on_tablet().to_class(), "mx-md-auto");
    }

    #[test]
    fn padding_auto_is_dropped() {
        let builder = Padding::all(SpaceSize::Auto).padding(Side::Start, SpaceSize::S4);
        assert_eq!(builder.to_class(), "ps-4");
        assert_eq!(builder.to_style(), "padding-inline-start: 1.5rem");
    }

    #[test]
    fn default_rule_is_zero_margin() {
        assert_eq!(SpacingBuilder::new().on_phone().to_class(), "m-sm-0");
    }
}
