//! Theme CSS custom-property generation.
//!
//! A theme is a set of [`CssVariableGroup`]s: plain data structs whose optional fields map to
//! custom properties (`--bs-primary`) or direct properties (`font-family`) under one selector.
//! [`emit_stylesheet`] renders any set of groups into one rule body per selector, omitting unset
//! values. [`Theme`] bundles the built-in groups, loads from TOML through [`load_theme`], and
//! writes its stylesheet with [`write_stylesheet`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod group;
pub mod groups;
pub mod theme;
pub mod variable;
pub mod writer;

pub use config::{load_theme, ConfigLoader};
pub use emitter::{emit_stylesheet, render_blocks, resolve, ResolvedDeclaration};
pub use error::{ThemeError, ThemeErrorCategory, ThemeResult};
pub use group::CssVariableGroup;
pub use groups::{
    BodyOverrides, ButtonVariables, CardVariables, CustomGroup, CustomVariable, ModalVariables,
    RootColors, Typography,
};
pub use theme::Theme;
pub use variable::{CssVariableName, Declaration, DeclarationKind, InvalidName};
pub use writer::write_stylesheet;
