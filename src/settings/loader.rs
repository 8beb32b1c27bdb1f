use std::path::PathBuf;

use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, default_config_files};
use crate::cli::CliArgs;

/// Layer default files, `--config` files, `WORLD_ANALYZER__*` variables and
/// CLI flags into a validated [`ResolvedConfig`].
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected sections")?;

	let mut resolved = raw.with_cli_overrides(cli).resolve(cli)?;
	resolved.config_files = files_in_use(cli);
	Ok(resolved)
}

/// Default files only count when they exist; explicit ones are required.
fn files_in_use(cli: &CliArgs) -> Vec<PathBuf> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	defaults
		.into_iter()
		.filter(|path| path.is_file())
		.chain(cli.config.iter().cloned())
		.collect()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn cli_with(path: &std::path::Path) -> CliArgs {
		CliArgs::parse_from([
			"world-analyzer",
			"--no-config",
			"--storage-dir",
			path.parent().and_then(|dir| dir.to_str()).unwrap(),
			"--config",
			path.to_str().unwrap(),
		])
	}

	#[test]
	fn explicit_file_values_reach_the_resolved_config() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("atlas.toml");
		fs::write(&path, "[display]\ncap = 7\nregion = \"Asia\"\n").unwrap();

		let resolved = load(&cli_with(&path)).unwrap();
		assert_eq!(resolved.display.cap, 7);
		assert_eq!(resolved.display.region.to_string(), "Asia");
		assert_eq!(resolved.config_files, vec![path]);
	}

	#[test]
	fn skipped_defaults_are_not_reported() {
		let cli = CliArgs::parse_from(["world-analyzer", "--no-config"]);
		assert!(files_in_use(&cli).is_empty());
	}

	#[test]
	fn mistyped_values_name_the_failing_step() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("atlas.toml");
		fs::write(&path, "[display]\ncap = \"many\"\n").unwrap();

		let err = load(&cli_with(&path)).unwrap_err();
		assert!(format!("{err:#}").contains("expected sections"));
	}
}
