//! Built-in variable groups.
//!
//! Every group is a plain data struct of optional overrides that deserializes from its own theme
//! TOML table. Unset fields never reach the stylesheet.

mod colors;
mod components;
mod custom;
mod typography;

pub use colors::RootColors;
pub use components::{ButtonVariables, CardVariables, ModalVariables};
pub use custom::{CustomGroup, CustomVariable};
pub use typography::{BodyOverrides, Typography};
