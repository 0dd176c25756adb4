//! Utility families and their token tables.
//!
//! Device-family utilities ([`BoxShadow`], [`Display`], [`Opacity`], [`Spacing`],
//! [`TextAlignment`], [`Visibility`]) render Bootstrap classes with infix breakpoints. Screen-family
//! utilities ([`Rounded`], [`Scale`], [`TextStyle`]) render Tailwind classes with variant
//! prefixes.

/// Generates the factory functions and chain methods for unit tokens of a utility.
///
/// `factory => Variant` produces both `Utility::factory()` starting a new builder and
/// `RuleBuilder::<Utility>::factory(self)` appending to an existing one.
macro_rules! fluent_tokens {
    ($utility:ident { $($method:ident => $variant:ident),+ $(,)? }) => {
        impl $utility {
            $(
                #[doc = concat!("Starts a builder with a `", stringify!($variant), "` rule.")]
                pub fn $method() -> $crate::builder::RuleBuilder<$utility> {
                    $crate::builder::RuleBuilder::from_token($utility::$variant)
                }
            )+
        }

        impl $crate::builder::RuleBuilder<$utility> {
            $(
                #[doc = concat!("Appends a `", stringify!($variant), "` rule.")]
                pub fn $method(self) -> Self {
                    self.push($utility::$variant)
                }
            )+
        }
    };
}

mod display;
mod opacity;
mod rounded;
mod scale;
mod shadow;
mod spacing;
mod text_align;
mod text_style;
mod visibility;

pub use display::{Display, DisplayBuilder};
pub use opacity::{Opacity, OpacityBuilder};
pub use rounded::{Rounded, RoundedBuilder};
pub use scale::{Scale, ScaleBuilder};
pub use shadow::{BoxShadow, BoxShadowBuilder};
pub use spacing::{Margin, Padding, Side, SpaceSize, Spacing, SpacingBuilder, SpacingProperty};
pub use text_align::{TextAlignment, TextAlignmentBuilder};
pub use text_style::{FontWeight, TextSize, TextStyle, TextStyleBuilder};
pub use visibility::{Visibility, VisibilityBuilder};
