use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use world_analyzer::app_dirs;

use crate::cli::CliArgs;

/// Prefix of `WORLD_ANALYZER__SECTION__KEY` overrides.
pub(super) const ENV_PREFIX: &str = "WORLD_ANALYZER";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".world-analyzer.toml"));
		files.push(current_dir.join("world-analyzer.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".world-analyzer.toml")));
		assert!(files.iter().any(|path| path.ends_with("world-analyzer.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("extra.toml");
		fs::write(&path, "[display]\ncap = 7\ntheme = \"amber\"\n").unwrap();

		let cli = CliArgs::parse_from([
			"world-analyzer",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("display.cap").unwrap(), 7);
		assert_eq!(config.get_string("display.theme").unwrap(), "amber");
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let cli = CliArgs::parse_from([
			"world-analyzer",
			"--no-config",
			"--config",
			"/definitely/not/here.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
