use world_analyzer::source::DataSource;
use world_analyzer::ui::style::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.display.cap == 0 {
		return Err(ConfigError::invalid(
			"display.cap",
			"0",
			sources.source_for_cap(),
			"must be at least 1",
		));
	}

	if theme::by_name(&config.display.theme).is_none() {
		return Err(ConfigError::invalid(
			"display.theme",
			config.display.theme.clone(),
			sources.source_for_theme(),
			format!("expected one of {}", theme::names().join(", ")),
		));
	}

	if let DataSource::Remote { url, .. } = &config.source
		&& !is_http_url(url)
	{
		return Err(ConfigError::invalid(
			"source.url",
			url.clone(),
			sources.source_for_url(),
			"must be an http:// or https:// URL",
		));
	}

	Ok(())
}

fn is_http_url(url: &str) -> bool {
	let lower = url.trim().to_ascii_lowercase();
	["http://", "https://"].iter().any(|scheme| {
		lower
			.strip_prefix(scheme)
			.is_some_and(|rest| !rest.is_empty())
	})
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use world_analyzer::filter::RegionFilter;
	use world_analyzer::logging::LoggingOptions;

	use super::super::{DisplaySettings, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			source: DataSource::default(),
			display: DisplaySettings {
				cap: 20,
				initial_query: String::new(),
				region: RegionFilter::All,
				theme: "cyber".into(),
				typing_effect: true,
				title: "WORLD_ANALYZER".into(),
			},
			storage_dir: PathBuf::from("/tmp"),
			logging: LoggingOptions::default(),
			config_files: Vec::new(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_cap() {
		let mut config = config();
		config.display.cap = 0;
		let sources = ConfigSources {
			display_cap: Some(SettingSource::CliFlag("--cap")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "display.cap");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let mut config = config();
		config.display.theme = "solarized".into();
		let sources = ConfigSources {
			display_theme: Some(SettingSource::Environment("WORLD_ANALYZER__DISPLAY__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "display.theme");
		let message = err.to_string();
		assert!(message.contains("environment variable"));
		assert!(message.contains("amber"));
	}

	#[test]
	fn validation_rejects_non_http_urls() {
		let mut config = config();
		config.source = DataSource::Remote {
			url: "ftp://example.com/all".into(),
			timeout: None,
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "source.url");
		assert!(err.to_string().contains("configuration key `source.url`"));
	}

	#[test]
	fn file_sources_skip_url_checks() {
		let mut config = config();
		config.source = DataSource::File(PathBuf::from("countries.json"));
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn url_scheme_check() {
		assert!(is_http_url("https://restcountries.com/v3.1/all"));
		assert!(is_http_url("HTTP://localhost:8080"));
		assert!(!is_http_url("https://"));
		assert!(!is_http_url("restcountries.com"));
	}
}
