use std::path::PathBuf;

use world_analyzer::filter::RegionFilter;
use world_analyzer::logging::LoggingOptions;
use world_analyzer::source::DataSource;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: DataSource,
	pub display: DisplaySettings,
	pub storage_dir: PathBuf,
	pub logging: LoggingOptions,
	/// Files that fed the configuration, lowest precedence first.
	pub config_files: Vec<PathBuf>,
}

/// How the browser starts out and looks.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
	pub cap: usize,
	pub initial_query: String,
	pub region: RegionFilter,
	pub theme: String,
	pub typing_effect: bool,
	pub title: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
