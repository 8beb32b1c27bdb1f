use anyhow::{Context, Result};
use tracing::info;
use world_analyzer::saved::{FileStore, SavedCodes};
use world_analyzer::source::{self, DataSource};
use world_analyzer::{AnalyzerUi, Session, SessionOutcome};

use crate::settings::{DisplaySettings, ResolvedConfig};

/// Coordinates building and running the interactive browser.
pub(crate) struct BrowseWorkflow {
	analyzer_ui: AnalyzerUi,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self {
			analyzer_ui: AnalyzerUiFactory::build(config),
		}
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.analyzer_ui.run()
	}
}

/// Load synchronously and derive the display list without a terminal.
pub(crate) fn list_session(config: ResolvedConfig) -> Result<Session> {
	let ResolvedConfig {
		source,
		display,
		storage_dir,
		..
	} = config;
	info!(source = %source.describe(), "loading entities for listing");
	let records = source::load(&source)
		.with_context(|| format!("failed to load entities from {}", source.describe()))?;
	let saved = SavedCodes::restore(FileStore::new(storage_dir));
	Ok(Session::with_records(records, saved)
		.with_cap(display.cap)
		.with_query(display.initial_query)
		.with_region(display.region))
}

/// Translates resolved configuration into a configured [`AnalyzerUi`].
struct AnalyzerUiFactory {
	analyzer_ui: AnalyzerUi,
}

impl AnalyzerUiFactory {
	fn build(config: ResolvedConfig) -> AnalyzerUi {
		let ResolvedConfig {
			source,
			display,
			storage_dir,
			..
		} = config;

		Self::new(source)
			.with_display(display)
			.with_storage(storage_dir)
			.finish()
	}

	fn new(source: DataSource) -> Self {
		Self {
			analyzer_ui: AnalyzerUi::new(source),
		}
	}

	fn with_display(mut self, display: DisplaySettings) -> Self {
		let DisplaySettings {
			cap,
			initial_query,
			region,
			theme,
			typing_effect,
			title,
		} = display;
		self.analyzer_ui = self
			.analyzer_ui
			.with_cap(cap)
			.with_initial_query(initial_query)
			.with_region(region)
			.with_theme_name(&theme)
			.with_typing_effect(typing_effect)
			.with_title(title);
		self
	}

	fn with_storage(mut self, dir: std::path::PathBuf) -> Self {
		let saved = SavedCodes::restore(FileStore::new(dir));
		self.analyzer_ui = self.analyzer_ui.with_saved(saved);
		self
	}

	fn finish(self) -> AnalyzerUi {
		self.analyzer_ui
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use tempfile::tempdir;
	use world_analyzer::filter::RegionFilter;
	use world_analyzer::logging::LoggingOptions;

	use super::*;

	const COUNTRIES: &str = r#"[
		{"name":{"common":"Alpha"},"capital":["A City"],"region":"X","population":10,"cca3":"AAA","area":1,"flags":{"svg":"a.svg"}},
		{"name":{"common":"Beta"},"capital":["B City"],"region":"Y","population":20,"cca3":"BBB","area":2,"flags":{"svg":"b.svg"}}
	]"#;

	fn config(data: PathBuf, storage: PathBuf, region: &str, query: &str) -> ResolvedConfig {
		ResolvedConfig {
			source: DataSource::File(data),
			display: DisplaySettings {
				cap: 20,
				initial_query: query.into(),
				region: RegionFilter::from_label(region),
				theme: "cyber".into(),
				typing_effect: false,
				title: "T".into(),
			},
			storage_dir: storage,
			logging: LoggingOptions::default(),
			config_files: Vec::new(),
		}
	}

	#[test]
	fn list_session_applies_filters_and_saved_set() {
		let dir = tempdir().unwrap();
		let data = dir.path().join("countries.json");
		fs::write(&data, COUNTRIES).unwrap();
		fs::write(dir.path().join("saved_countries.json"), r#"["BBB"]"#).unwrap();

		let session = list_session(config(data, dir.path().to_path_buf(), "Y", "")).unwrap();
		let codes: Vec<_> = session
			.display()
			.into_iter()
			.map(|country| country.country_code.as_str())
			.collect();
		assert_eq!(codes, ["BBB"]);
		assert!(session.is_saved("BBB"));
	}

	#[test]
	fn list_session_reports_missing_data_files() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("nope.json");
		let err = list_session(config(missing, dir.path().to_path_buf(), "All", "")).unwrap_err();
		assert!(err.to_string().contains("failed to load entities"));
	}
}
