use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use world_analyzer::app_dirs;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) dir: Option<PathBuf>,
}

impl StorageSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.storage_dir.clone() {
			self.dir = Some(dir);
		}
	}

	/// The saved set lives in the platform data directory unless overridden.
	pub(super) fn resolve(self) -> Result<PathBuf> {
		match self.dir {
			Some(dir) => Ok(dir),
			None => app_dirs::get_data_dir(),
		}
	}
}
