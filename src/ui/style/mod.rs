//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI. Everything
//! else about appearance lives next to the component that draws it.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, definitions, names};
