use world_analyzer::source::DataSource;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	for line in summary_lines(config) {
		println!("  {line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = Vec::new();
	match &config.source {
		DataSource::Remote { url, timeout } => {
			lines.push(format!("Source: {url}"));
			lines.push(match timeout {
				Some(timeout) => format!("Timeout: {}s", timeout.as_secs()),
				None => "Timeout: none".to_string(),
			});
		}
		DataSource::File(path) => lines.push(format!("Source file: {}", path.display())),
	}

	let display = &config.display;
	lines.push(format!("Display cap: {}", display.cap));
	if !display.initial_query.is_empty() {
		lines.push(format!("Initial query: {}", display.initial_query));
	}
	lines.push(format!("Region: {}", display.region));
	lines.push(format!("Theme: {}", display.theme));
	lines.push(format!("Typing effect: {}", bool_to_word(display.typing_effect)));
	lines.push(format!("Title: {}", display.title));

	lines.push(format!("Storage directory: {}", config.storage_dir.display()));
	lines.push(format!(
		"Log level: {}",
		config
			.logging
			.level
			.as_deref()
			.unwrap_or("(RUST_LOG or info)")
	));
	lines.push(match &config.logging.file {
		Some(path) => format!("Log file: {}", path.display()),
		None => "Log file: (disabled)".to_string(),
	});
	lines.push(if config.config_files.is_empty() {
		"Config files: (none)".to_string()
	} else {
		let files: Vec<_> = config
			.config_files
			.iter()
			.map(|path| path.display().to_string())
			.collect();
		format!("Config files: {}", files.join(", "))
	});
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use world_analyzer::filter::RegionFilter;
	use world_analyzer::logging::LoggingOptions;

	use super::super::DisplaySettings;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_every_section() {
		let config = ResolvedConfig {
			source: DataSource::Remote {
				url: "https://example.com/all".into(),
				timeout: Some(Duration::from_secs(5)),
			},
			display: DisplaySettings {
				cap: 30,
				initial_query: "ice".into(),
				region: RegionFilter::from_label("Europe"),
				theme: "amber".into(),
				typing_effect: false,
				title: "ATLAS".into(),
			},
			storage_dir: PathBuf::from("/tmp/store"),
			logging: LoggingOptions {
				level: Some("debug".into()),
				file: None,
			},
			config_files: vec![PathBuf::from("/etc/wa.toml"), PathBuf::from("local.toml")],
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"Source: https://example.com/all".to_string()));
		assert!(lines.contains(&"Timeout: 5s".to_string()));
		assert!(lines.contains(&"Region: Europe".to_string()));
		assert!(lines.contains(&"Typing effect: no".to_string()));
		assert!(lines.contains(&"Log file: (disabled)".to_string()));
		assert!(lines.contains(&"Config files: /etc/wa.toml, local.toml".to_string()));
		print_summary(&config);
	}
}
