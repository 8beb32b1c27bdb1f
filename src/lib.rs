//! Core crate for `world-analyzer`, a terminal browser over the world's
//! countries.
//!
//! The browsing logic (filtering, keyboard navigation, the saved set and
//! pairwise comparison) lives in plain modules around [`Session`] and can
//! be driven without a terminal. The [`ui`] module wraps it in an
//! interactive screen.

pub mod app_dirs;
pub mod compare;
pub mod country;
pub mod dataset;
pub mod filter;
pub mod logging;
pub mod navigation;
pub mod saved;
pub mod session;
pub mod source;
pub mod ui;

pub use compare::{Comparison, Standing};
pub use country::Country;
pub use dataset::Dataset;
pub use filter::{RegionFilter, filter_countries, region_options};
pub use navigation::{NavKey, Navigator};
pub use saved::{FileStore, KeyValueStore, MemoryStore, SavedCodes, StoreError};
pub use session::{Session, SessionError, SessionOutcome};
pub use source::{DataSource, LoadEvent, SourceError};
pub use ui::AnalyzerUi;
pub use ui::style::{Theme, default_theme};
