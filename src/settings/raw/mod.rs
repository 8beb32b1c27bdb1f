use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod display;
mod logging;
mod source;
mod storage;

use display::DisplaySection;
use logging::LoggingSection;
use source::SourceSection;
use storage::StorageSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	display: DisplaySection,
	storage: StorageSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.source.apply_cli_overrides(cli);
		self.display.apply_cli_overrides(cli);
		self.storage.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	pub(super) fn with_cli_overrides(mut self, cli: &CliArgs) -> Self {
		self.apply_cli_overrides(cli);
		self
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			display_cap: detect_source(
				cli.cap.is_some(),
				self.display.cap.is_some(),
				"WORLD_ANALYZER__DISPLAY__CAP",
				"--cap",
				"display.cap",
			),
			display_theme: detect_source(
				cli.theme.is_some(),
				self.display.theme.is_some(),
				"WORLD_ANALYZER__DISPLAY__THEME",
				"--theme",
				"display.theme",
			),
			source_url: detect_source(
				cli.url.is_some(),
				self.source.url.is_some(),
				"WORLD_ANALYZER__SOURCE__URL",
				"--url",
				"source.url",
			),
		};

		let config = ResolvedConfig {
			source: self.source.resolve(),
			display: self.display.resolve(),
			storage_dir: self.storage.resolve()?,
			logging: self.logging.resolve(),
			config_files: Vec::new(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
