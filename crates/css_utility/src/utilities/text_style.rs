//! Typography utilities (font size, weight, style, decoration, and case).

use std::borrow::Cow;

use crate::breakpoint::ScreenBreakpoint;
use crate::builder::{RuleBuilder, Utility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Font size step.
pub enum TextSize {
    /// `0.75rem`
    Xs,
    /// `0.875rem`
    Sm,
    /// `1rem`
    Base,
    /// `1.125rem`
    Lg,
    /// `1.25rem`
    Xl,
    /// `1.5rem`
    Xl2,
}

impl TextSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
        }
    }

    fn length(self) -> &'static str {
        match self {
            Self::Xs => "0.75rem",
            Self::Sm => "0.875rem",
            Self::Base => "1rem",
            Self::Lg => "1.125rem",
            Self::Xl => "1.25rem",
            Self::Xl2 => "1.5rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Font weight.
pub enum FontWeight {
    /// 300
    Light,
    /// 400
    Normal,
    /// 500
    Medium,
    /// 600
    Semibold,
    /// 700
    Bold,
}

impl FontWeight {
    fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }

    fn numeric(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One typography rule.
pub enum TextStyle {
    /// `text-{size}`
    Size(TextSize),
    /// `font-{weight}`
    Weight(FontWeight),
    /// `italic`
    Italic,
    /// `not-italic`
    NotItalic,
    /// `underline`
    Underline,
    /// `line-through`
    LineThrough,
    /// `no-underline`
    NoUnderline,
    /// `uppercase`
    Uppercase,
    /// `lowercase`
    Lowercase,
    /// `capitalize`
    Capitalize,
}

/// Builder for [`TextStyle`] rules.
pub type TextStyleBuilder = RuleBuilder<TextStyle>;

impl Utility for TextStyle {
    type Breakpoint = ScreenBreakpoint;

    const DEFAULT: Self = Self::Size(TextSize::Base);

    fn class_name(&self) -> Cow<'static, str> {
        match self {
            Self::Size(size) => Cow::Owned(format!("text-{}", size.token())),
            Self::Weight(weight) => Cow::Owned(format!("font-{}", weight.token())),
            Self::Italic => Cow::Borrowed("italic"),
            Self::NotItalic => Cow::Borrowed("not-italic"),
            Self::Underline => Cow::Borrowed("underline"),
            Self::LineThrough => Cow::Borrowed("line-through"),
            Self::NoUnderline => Cow::Borrowed("no-underline"),
            Self::Uppercase => Cow::Borrowed("uppercase"),
            Self::Lowercase => Cow::Borrowed("lowercase"),
            Self::Capitalize => Cow::Borrowed("capitalize"),
        }
    }

    fn style(&self) -> Cow<'static, str> {
        match self {
            Self::Size(size) => Cow::Owned(format!("font-size: {}", size.length())),
            Self::Weight(weight) => Cow::Owned(format!("font-weight: {}", weight.numeric())),
            Self::Italic => Cow::Borrowed("font-style: italic"),
            Self::NotItalic => Cow::Borrowed("font-style: normal"),
            Self::Underline => Cow::Borrowed("text-decoration-line: underline"),
            Self::LineThrough => Cow::Borrowed("text-decoration-line: line-through"),
            Self::NoUnderline => Cow::Borrowed("text-decoration-line: none"),
            Self::Uppercase => Cow::Borrowed("text-transform: uppercase"),
            Self::Lowercase => Cow::Borrowed("text-transform: lowercase"),
            Self::Capitalize => Cow::Borrowed("text-transform: capitalize"),
        }
    }
}

impl TextStyle {
    /// Starts a builder with a font size rule.
    pub fn size(size: TextSize) -> TextStyleBuilder {
        RuleBuilder::from_token(Self::Size(size))
    }

    /// Starts a builder with a font weight rule.
    pub fn weight(weight: FontWeight) -> TextStyleBuilder {
        RuleBuilder::from_token(Self::Weight(weight))
    }

    /// Starts a builder with a bold weight rule.
    pub fn bold() -> TextStyleBuilder {
        Self::weight(FontWeight::Bold)
    }
}

impl RuleBuilder<TextStyle> {
    /// Appends a font size rule.
    pub fn size(self, size: TextSize) -> Self {
        self.push(TextStyle::Size(size))
    }

    /// Appends a font weight rule.
    pub fn weight(self, weight: FontWeight) -> Self {
        self.push(TextStyle::Weight(weight))
    }

    /// Appends a bold weight rule.
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }
}

fluent_tokens!(TextStyle {
    italic => Italic,
    not_italic => NotItalic,
    underline => Underline,
    line_through => LineThrough,
    no_underline => NoUnderline,
    uppercase => Uppercase,
    lowercase => Lowercase,
    capitalize => Capitalize,
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn combines_typography_rules() {
        let builder = TextStyle::size(TextSize::Sm)
            .size(TextSize::Xl2)
            .on_lg()
            .bold()
            .italic()
            .uppercase();
        assert_eq!(
            builder.to_class(),
            "text-sm lg:text-2xl font-bold italic uppercase"
        );
        assert_eq!(
            builder.to_style(),
            "font-size: 0.875rem; font-size: 1.5rem; font-weight: 700; font-style: italic; text-transform: uppercase"
        );
    }

    #[test]
    fn chained_calls_leave_earlier_builders_untouched() {
        let heading = TextStyle::weight(FontWeight::Semibold);
        let emphasized = heading.clone().underline();
        assert_eq!(heading.to_class(), "font-semibold");
        assert_eq!(emphasized.to_class(), "font-semibold underline");
    }

    #[test]
    fn default_rule_is_base_size() {
        assert_eq!(TextStyleBuilder::new().on_md().to_class(), "md:text-base");
    }
}
