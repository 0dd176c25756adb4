//! Generic fluent rule builder shared by every utility family.
//!
//! A utility family only supplies a token type implementing [`Utility`]: its breakpoint family,
//! the default token synthesized when a breakpoint is requested on an empty builder, and the
//! class/style lookup tables. Everything else (chaining, breakpoint binding, serialization) lives
//! here so that all families render identically.
//!
//! Chain calls consume the builder and return the next one. The rule list is shared
//! copy-on-write, so cloning a builder and extending both copies never lets one copy observe the
//! other's rules.

use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use crate::breakpoint::{Breakpoint, DeviceBreakpoint, ScreenBreakpoint};
use crate::compose::join_non_empty;
use crate::rule::Rule;

/// Token vocabulary of one utility family.
pub trait Utility: Copy + Debug + Eq {
    /// Breakpoint family used by `on_*` chain methods.
    type Breakpoint: Breakpoint;

    /// Base token used when a breakpoint is applied to an empty builder.
    const DEFAULT: Self;

    /// Base class for the token. An empty string means the token has no class form and is
    /// dropped from class output.
    fn class_name(&self) -> Cow<'static, str>;

    /// Inline declaration for the token. An empty string means the token has no inline form.
    ///
    /// Class-first utilities keep the default, which renders no inline style at all.
    fn style(&self) -> Cow<'static, str> {
        Cow::Borrowed("")
    }
}

/// Ordered accumulator of [`Rule`]s for one utility family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBuilder<U: Utility> {
    rules: Arc<Vec<Rule<U>>>,
}

impl<U: Utility> Default for RuleBuilder<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Utility> RuleBuilder<U> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            rules: Arc::new(Vec::new()),
        }
    }

    /// Creates a builder holding a single `value` rule.
    pub fn from_token(value: U) -> Self {
        Self::new().push(value)
    }

    /// Appends a rule without breakpoint.
    pub fn push(mut self, value: U) -> Self {
        Arc::make_mut(&mut self.rules).push(Rule::new(value));
        self
    }

    /// Binds the most recently added rule to `breakpoint`.
    ///
    /// An empty builder first receives a [`Utility::DEFAULT`] rule.
    pub fn with_breakpoint(mut self, breakpoint: U::Breakpoint) -> Self {
        let rules = Arc::make_mut(&mut self.rules);
        match rules.last_mut() {
            Some(last) => *last = last.with_breakpoint(breakpoint),
            None => rules.push(Rule::new(U::DEFAULT).with_breakpoint(breakpoint)),
        }
        self
    }

    /// Accumulated rules in insertion order.
    pub fn rules(&self) -> &[Rule<U>] {
        &self.rules
    }

    /// Number of accumulated rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rendered classes in rule order, skipping tokens without class mapping.
    pub fn class_names(&self) -> impl Iterator<Item = String> + '_ {
        self.rules.iter().filter_map(|rule| {
            let class = rule.class();
            if class.is_none() {
                tracing::trace!(token = ?rule.value(), "utility token has no class mapping");
            }
            class
        })
    }

    /// Space-separated class attribute value.
    pub fn to_class(&self) -> String {
        join_non_empty(self.class_names(), " ")
    }

    /// `; `-separated inline style attribute value.
    pub fn to_style(&self) -> String {
        join_non_empty(self.rules.iter().filter_map(Rule::style), "; ")
    }
}

impl<U: Utility> Display for RuleBuilder<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_class())
    }
}

impl<U> RuleBuilder<U>
where
    U: Utility<Breakpoint = DeviceBreakpoint>,
{
    /// Binds the last rule to phones and up (`sm`).
    pub fn on_phone(self) -> Self {
        self.with_breakpoint(DeviceBreakpoint::Phone)
    }

    /// Binds the last rule to tablets and up (`md`).
    pub fn on_tablet(self) -> Self {
        self.with_breakpoint(DeviceBreakpoint::Tablet)
    }

    /// Binds the last rule to laptops and up (`lg`).
    pub fn on_laptop(self) -> Self {
        self.with_breakpoint(DeviceBreakpoint::Laptop)
    }

    /// Binds the last rule to desktops and up (`xl`).
    pub fn on_desktop(self) -> Self {
        self.with_breakpoint(DeviceBreakpoint::Desktop)
    }

    /// Binds the last rule to widescreens and up (`xxl`).
    pub fn on_widescreen(self) -> Self {
        self.with_breakpoint(DeviceBreakpoint::Widescreen)
    }

    /// Binds the last rule to ultrawide screens (`xxxl`).
    pub fn on_ultrawide(self) -> Self {
        self.with_breakpoint(DeviceBreakpoint::Ultrawide)
    }
}

impl<U> RuleBuilder<U>
where
    U: Utility<Breakpoint = ScreenBreakpoint>,
{
    /// `sm:` variant.
    pub fn on_sm(self) -> Self {
        self.with_breakpoint(ScreenBreakpoint::Sm)
    }

    /// `md:` variant.
    pub fn on_md(self) -> Self {
        self.with_breakpoint(ScreenBreakpoint::Md)
    }

    /// `lg:` variant.
    pub fn on_lg(self) -> Self {
        self.with_breakpoint(ScreenBreakpoint::Lg)
    }

    /// `xl:` variant.
    pub fn on_xl(self) -> Self {
        self.with_breakpoint(ScreenBreakpoint::Xl)
    }

    /// `2xl:` variant.
    pub fn on_2xl(self) -> Self {
        self.with_breakpoint(ScreenBreakpoint::Xxl)
    }
}
