//! Interactive terminal browser for `world-analyzer`.
//!
//! [`AnalyzerUi`] is the public entry point. The remaining submodules hold
//! the event loop, the key and pointer mapping, rendering, and the widgets
//! and themes those draw with. All browsing state lives in
//! [`Session`](crate::session::Session); the UI only feeds it input and
//! draws what it derives.

mod actions;
mod builder;
pub mod components;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod style;
pub mod title;


pub use builder::AnalyzerUi;
pub use state::{App, DEFAULT_TITLE, LoadState};
