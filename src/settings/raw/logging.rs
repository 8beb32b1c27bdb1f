use std::path::PathBuf;

use serde::Deserialize;
use world_analyzer::app_dirs;
use world_analyzer::logging::{LOG_FILE_NAME, LoggingOptions};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	/// Without an explicit file, logs go to the cache directory. When that
	/// cannot be determined logging stays off.
	pub(super) fn resolve(self) -> LoggingOptions {
		let file = self.file.or_else(|| {
			app_dirs::get_cache_dir()
				.ok()
				.map(|dir| dir.join(LOG_FILE_NAME))
		});
		LoggingOptions {
			level: self.level,
			file,
		}
	}
}
