//! Attribute composition across several builders and ad hoc classes or declarations.

use crate::builder::{RuleBuilder, Utility};

/// Joins the non-empty parts with `separator`.
pub(crate) fn join_non_empty<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(part);
    }
    joined
}

/// Accumulates a `class` attribute value from fixed classes, conditional classes, and rule
/// builders.
///
/// Empty or whitespace-only entries are ignored so callers can pass optional consumer classes
/// straight through.
///
/// ```
/// use css_utility::{BoxShadow, ClassList};
///
/// let class = ClassList::new()
///     .add("card")
///     .add_if("card-active", true)
///     .add_builder(&BoxShadow::large().on_tablet())
///     .build();
/// assert_eq!(class, "card card-active shadow-md-lg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class (or several space-separated classes).
    pub fn add(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let trimmed = class.trim();
        if !trimmed.is_empty() {
            self.classes.push(trimmed.to_string());
        }
        self
    }

    /// Appends `class` only when `condition` holds.
    pub fn add_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    /// Appends an optional consumer-supplied class.
    pub fn add_option<S: Into<String>>(self, class: Option<S>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    /// Appends the rendered classes of a rule builder.
    pub fn add_builder<U: Utility>(self, builder: &RuleBuilder<U>) -> Self {
        self.add(builder.to_class())
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Space-separated class attribute value.
    pub fn build(&self) -> String {
        join_non_empty(&self.classes, " ")
    }
}

/// Accumulates a `style` attribute value.
///
/// Declarations are stored without trailing semicolons and joined with `"; "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleList {
    declarations: Vec<String>,
}

impl StyleList {
    /// Creates an empty style list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `property: value`; an empty value adds nothing.
    pub fn add(self, property: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return self;
        }
        self.add_raw(format!("{property}: {value}"))
    }

    /// Appends `property: value` only when `condition` holds.
    pub fn add_if(self, property: &str, value: impl AsRef<str>, condition: bool) -> Self {
        if condition {
            self.add(property, value)
        } else {
            self
        }
    }

    /// Appends a literal declaration fragment such as `color: red;`.
    pub fn add_raw(mut self, declaration: impl Into<String>) -> Self {
        let declaration = declaration.into();
        let trimmed = declaration.trim().trim_end_matches(';').trim_end();
        if !trimmed.is_empty() {
            self.declarations.push(trimmed.to_string());
        }
        self
    }

    /// Appends the inline styles of a rule builder.
    pub fn add_builder<U: Utility>(self, builder: &RuleBuilder<U>) -> Self {
        self.add_raw(builder.to_style())
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// `; `-separated style attribute value without trailing semicolon.
    pub fn build(&self) -> String {
        join_non_empty(&self.declarations, "; ")
    }
}
