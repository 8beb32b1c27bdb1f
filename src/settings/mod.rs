//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers default files, `--config` files,
//! environment variables and CLI flags, then resolves the result into a
//! validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{DisplaySettings, ResolvedConfig};
