//! Leptos attribute integration.
//!
//! Builders and lists can be passed directly as attribute values:
//! `class=BoxShadow::large().on_tablet()` or `style=StyleList::new().add("width", "4rem")`.

use ::leptos::{Attribute, IntoAttribute};

use crate::builder::{RuleBuilder, Utility};
use crate::compose::{ClassList, StyleList};

impl<U: Utility> IntoAttribute for RuleBuilder<U> {
    fn into_attribute(self) -> Attribute {
        Attribute::String(self.to_class().into())
    }

    fn into_attribute_boxed(self: Box<Self>) -> Attribute {
        (*self).into_attribute()
    }
}

impl IntoAttribute for ClassList {
    fn into_attribute(self) -> Attribute {
        Attribute::String(self.build().into())
    }

    fn into_attribute_boxed(self: Box<Self>) -> Attribute {
        (*self).into_attribute()
    }
}

impl IntoAttribute for StyleList {
    fn into_attribute(self) -> Attribute {
        Attribute::String(self.build().into())
    }

    fn into_attribute_boxed(self: Box<Self>) -> Attribute {
        (*self).into_attribute()
    }
}
