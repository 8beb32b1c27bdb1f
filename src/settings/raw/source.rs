use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use world_analyzer::source::{DEFAULT_TIMEOUT, DEFAULT_URL, DataSource};

use crate::cli::CliArgs;

/// Where the country list comes from, as written in configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) url: Option<String>,
	pub(super) file: Option<PathBuf>,
	pub(super) timeout_secs: Option<u64>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.url.clone() {
			self.url = Some(url);
			self.file = None;
		}
		if let Some(file) = cli.data_file.clone() {
			self.file = Some(file);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	/// A configured file wins over any URL.
	pub(super) fn resolve(self) -> DataSource {
		if let Some(path) = self.file {
			return DataSource::File(path);
		}
		let timeout = match self.timeout_secs {
			Some(0) => None,
			Some(secs) => Some(Duration::from_secs(secs)),
			None => Some(DEFAULT_TIMEOUT),
		};
		DataSource::Remote {
			url: self.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
			timeout,
		}
	}
}
