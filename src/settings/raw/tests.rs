use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use world_analyzer::filter::RegionFilter;
use world_analyzer::source::{DEFAULT_TIMEOUT, DEFAULT_URL, DataSource};

use super::RawConfig;
use crate::cli::CliArgs;

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("world-analyzer").chain(args.iter().copied()))
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--cap",
		"30",
		"-q",
		"ice",
		"-r",
		"Europe",
		"--theme",
		"amber",
		"--typing",
		"false",
		"--title",
		"ATLAS",
		"--storage-dir",
		"/tmp/store",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/wa.log",
		"--timeout",
		"5",
	]);

	let mut config = RawConfig::default();
	config.display.cap = Some(5);
	config.display.theme = Some("mono".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.display.cap, Some(30));
	assert_eq!(config.display.initial_query.as_deref(), Some("ice"));
	assert_eq!(config.display.region.as_deref(), Some("Europe"));
	assert_eq!(config.display.theme.as_deref(), Some("amber"));
	assert_eq!(config.display.typing_effect, Some(false));
	assert_eq!(config.display.title.as_deref(), Some("ATLAS"));
	assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/store")));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
	assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/wa.log")));
	assert_eq!(config.source.timeout_secs, Some(5));
}

#[test]
fn cli_url_replaces_a_configured_file() {
	let mut config = RawConfig::default();
	config.source.file = Some(PathBuf::from("countries.json"));
	config.apply_cli_overrides(&cli(&["--url", "https://example.com/all"]));

	assert_eq!(
		config.source.resolve(),
		DataSource::Remote {
			url: "https://example.com/all".into(),
			timeout: Some(DEFAULT_TIMEOUT),
		}
	);
}

#[test]
fn configured_file_wins_over_url() {
	let mut config = RawConfig::default();
	config.source.url = Some("https://example.com/all".into());
	config.apply_cli_overrides(&cli(&["--data-file", "countries.json"]));

	assert_eq!(
		config.source.resolve(),
		DataSource::File(PathBuf::from("countries.json"))
	);
}

#[test]
fn zero_timeout_waits_forever() {
	let mut config = RawConfig::default();
	config.source.timeout_secs = Some(0);
	assert_eq!(
		config.source.resolve(),
		DataSource::Remote {
			url: DEFAULT_URL.into(),
			timeout: None,
		}
	);

	let mut config = RawConfig::default();
	config.source.timeout_secs = Some(12);
	assert!(matches!(
		config.source.resolve(),
		DataSource::Remote { timeout: Some(timeout), .. } if timeout == Duration::from_secs(12)
	));
}

#[test]
fn display_defaults_fill_gaps() {
	let display = RawConfig::default().display.resolve();
	assert_eq!(display.cap, 20);
	assert_eq!(display.region, RegionFilter::All);
	assert_eq!(display.theme, "cyber");
	assert!(display.typing_effect);
	assert_eq!(display.title, "WORLD_ANALYZER");
}

#[test]
fn no_typing_flag_disables_the_effect() {
	let mut config = RawConfig::default();
	config.display.typing_effect = Some(true);
	config.apply_cli_overrides(&cli(&["--no-typing"]));
	assert_eq!(config.display.typing_effect, Some(false));
}

#[test]
fn region_all_label_resolves_to_all() {
	let mut config = RawConfig::default();
	config.display.region = Some("All".into());
	assert_eq!(config.display.resolve().region, RegionFilter::All);
}

#[test]
fn resolve_reports_the_flag_behind_a_bad_value() {
	let cli = cli(&["--no-config", "--cap", "0", "--storage-dir", "/tmp"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("display.cap"));
	assert!(message.contains("`--cap`"));
}

#[test]
fn deserializes_sections_from_toml() {
	let raw: RawConfig = config::Config::builder()
		.add_source(config::File::from_str(
			"[source]\nfile = \"countries.json\"\n[display]\ncap = 30\nregion = \"Asia\"\n[logging]\nlevel = \"warn\"\n",
			config::FileFormat::Toml,
		))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();

	assert_eq!(raw.source.file, Some(PathBuf::from("countries.json")));
	assert_eq!(raw.display.cap, Some(30));
	assert_eq!(raw.display.region.as_deref(), Some("Asia"));
	assert_eq!(raw.logging.level.as_deref(), Some("warn"));
}
