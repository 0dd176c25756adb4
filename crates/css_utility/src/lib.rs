//! Fluent utility-class and inline-style builders.
//!
//! Each utility family (shadows, opacity, spacing, typography, ...) exposes factory functions
//! that start a [`RuleBuilder`], chain methods that append further rules, and `on_*` methods
//! that bind the most recent rule to a responsive breakpoint. [`RuleBuilder::to_class`] and
//! [`RuleBuilder::to_style`] render the accumulated rules as `class` and `style` attribute values.
//!
//! ```
//! use css_utility::prelude::*;
//!
//! let shadow = BoxShadow::small().large().on_laptop();
//! assert_eq!(shadow.to_class(), "shadow-sm shadow-lg-lg");
//!
//! let scale = Scale::s95().s105().on_md();
//! assert_eq!(scale.to_class(), "scale-95 md:scale-105");
//! ```
//!
//! Tokens without a class form (for example [`Opacity::V10`]) are dropped from class output
//! without error; they still render through `to_style`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod breakpoint;
pub mod builder;
mod compose;
#[cfg(feature = "leptos")]
mod leptos;
pub mod rule;
pub mod utilities;

pub use breakpoint::{Breakpoint, BreakpointStrategy, DeviceBreakpoint, ScreenBreakpoint};
pub use builder::{RuleBuilder, Utility};
pub use compose::{ClassList, StyleList};
pub use rule::Rule;
pub use utilities::{
    BoxShadow, BoxShadowBuilder, Display, DisplayBuilder, FontWeight, Margin, Opacity,
    OpacityBuilder, Padding, Rounded, RoundedBuilder, Scale, ScaleBuilder, Side, SpaceSize,
    Spacing, SpacingBuilder, SpacingProperty, TextAlignment, TextAlignmentBuilder, TextSize,
    TextStyle, TextStyleBuilder, Visibility, VisibilityBuilder,
};

/// Convenience imports for crates rendering utility classes.
pub mod prelude {
    pub use crate::{
        BoxShadow, ClassList, Display, FontWeight, Margin, Opacity, Padding, Rounded,
        RuleBuilder, Scale, Side, SpaceSize, StyleList, TextAlignment, TextSize, TextStyle,
        Utility, Visibility,
    };
}
