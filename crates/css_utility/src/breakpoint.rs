//! Responsive breakpoint tokens and the two class-name insertion strategies.
//!
//! Utility families differ in how a breakpoint reaches the rendered class. The device family
//! follows the Bootstrap infix convention (`shadow-lg` on tablets becomes `shadow-md-lg`), while
//! the screen family follows the Tailwind variant convention (`scale-50` on tablets becomes
//! `md:scale-50`). Consumers depend on the exact framework output, so the two strategies stay
//! separate and each family names the one it uses through [`Breakpoint::STRATEGY`].

use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Placement of a breakpoint token inside a rendered class name.
pub enum BreakpointStrategy {
    /// Infix after the first dash, or a `token-` prefix when the class has no inner dash.
    Midfix,
    /// `token:` variant prefix.
    Prefix,
}

impl BreakpointStrategy {
    /// Combines a base class name with a breakpoint token.
    pub fn apply(self, class_name: &str, token: &str) -> String {
        match self {
            Self::Midfix => insert_midfix(class_name, token),
            Self::Prefix => insert_prefix(class_name, token),
        }
    }
}

/// Inserts `token` after the first dash of `class_name`.
///
/// A class without a dash, or whose only leading character is a dash, gets the token as a
/// dash-separated prefix instead.
///
/// ```
/// use css_utility::breakpoint::insert_midfix;
///
/// assert_eq!(insert_midfix("shadow-lg", "md"), "shadow-md-lg");
/// assert_eq!(insert_midfix("shadow", "md"), "md-shadow");
/// ```
pub fn insert_midfix(class_name: &str, token: &str) -> String {
    match class_name.find('-') {
        Some(index) if index > 0 => {
            let (head, tail) = class_name.split_at(index);
            format!("{head}-{token}{tail}")
        }
        _ => format!("{token}-{class_name}"),
    }
}

/// Prepends `token` as a variant prefix (`md:rounded-lg`).
pub fn insert_prefix(class_name: &str, token: &str) -> String {
    format!("{token}:{class_name}")
}

/// A breakpoint family usable by a utility.
pub trait Breakpoint: Copy + Debug + Eq {
    /// Insertion strategy shared by every utility of this family.
    const STRATEGY: BreakpointStrategy;

    /// Fixed token inserted into class names.
    fn token(self) -> &'static str;

    /// Renders `class_name` for this breakpoint using the family strategy.
    fn apply(self, class_name: &str) -> String {
        Self::STRATEGY.apply(class_name, self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Device-oriented breakpoints for the infix (Bootstrap) family.
pub enum DeviceBreakpoint {
    /// Small screens, `sm`.
    Phone,
    /// Medium screens, `md`.
    Tablet,
    /// Large screens, `lg`.
    Laptop,
    /// Extra large screens, `xl`.
    Desktop,
    /// Extra extra large screens, `xxl`.
    Widescreen,
    /// Beyond the standard grid tiers, `xxxl`.
    Ultrawide,
}

impl Breakpoint for DeviceBreakpoint {
    const STRATEGY: BreakpointStrategy = BreakpointStrategy::Midfix;

    fn token(self) -> &'static str {
        match self {
            Self::Phone => "sm",
            Self::Tablet => "md",
            Self::Laptop => "lg",
            Self::Desktop => "xl",
            Self::Widescreen => "xxl",
            Self::Ultrawide => "xxxl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Screen-width breakpoints for the variant-prefix (Tailwind) family.
pub enum ScreenBreakpoint {
    /// `sm`
    Sm,
    /// `md`
    Md,
    /// `lg`
    Lg,
    /// `xl`
    Xl,
    /// `2xl`
    Xxl,
}

impl Breakpoint for ScreenBreakpoint {
    const STRATEGY: BreakpointStrategy = BreakpointStrategy::Prefix;

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn midfix_inserts_after_first_dash() {
        assert_eq!(insert_midfix("shadow-lg", "md"), "shadow-md-lg");
        assert_eq!(insert_midfix("d-none", "lg"), "d-lg-none");
        assert_eq!(insert_midfix("text-start", "xxl"), "text-xxl-start");
    }

    #[test]
    fn midfix_only_uses_the_first_dash() {
        assert_eq!(insert_midfix("d-inline-block", "sm"), "d-sm-inline-block");
    }

    #[test]
    fn midfix_prefixes_names_without_inner_dash() {
        assert_eq!(insert_midfix("shadow", "md"), "md-shadow");
        assert_eq!(insert_midfix("-translate", "md"), "md--translate");
    }

    #[test]
    fn prefix_uses_variant_separator() {
        assert_eq!(insert_prefix("scale-50", "md"), "md:scale-50");
        assert_eq!(
            ScreenBreakpoint::Xxl.apply("rounded-full"),
            "2xl:rounded-full"
        );
    }

    #[test]
    fn device_tokens_follow_grid_tiers() {
        let tokens: Vec<_> = [
            DeviceBreakpoint::Phone,
            DeviceBreakpoint::Tablet,
            DeviceBreakpoint::Laptop,
            DeviceBreakpoint::Desktop,
            DeviceBreakpoint::Widescreen,
            DeviceBreakpoint::Ultrawide,
        ]
        .into_iter()
        .map(Breakpoint::token)
        .collect();
        assert_eq!(tokens, ["sm", "md", "lg", "xl", "xxl", "xxxl"]);
    }

    #[test]
    fn families_carry_their_strategy() {
        assert_eq!(DeviceBreakpoint::STRATEGY, BreakpointStrategy::Midfix);
        assert_eq!(ScreenBreakpoint::STRATEGY, BreakpointStrategy::Prefix);
        assert_eq!(DeviceBreakpoint::Laptop.apply("shadow-lg"), "shadow-lg-lg");
    }
}
