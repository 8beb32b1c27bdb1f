use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	CliArgs::try_parse_from(std::iter::once("world-analyzer").chain(args.iter().copied()))
		.expect("arguments parse")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_to_plain_output_without_overrides() {
	let parsed = parse(&[]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(parsed.url.is_none());
	assert!(parsed.typing.is_none());
	assert!(!parsed.list);
}

#[test]
fn typing_flag_accepts_boolish_values() {
	assert_eq!(parse(&["--typing", "off"]).typing, Some(false));
	assert_eq!(parse(&["--typing", "yes"]).typing, Some(true));
	assert!(parse(&["--no-typing"]).no_typing);
	assert!(CliArgs::try_parse_from(["world-analyzer", "--typing", "on", "--no-typing"]).is_err());
}

#[test]
fn config_flag_repeats() {
	let parsed = parse(&["-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn url_and_data_file_conflict() {
	let result = CliArgs::try_parse_from([
		"world-analyzer",
		"--url",
		"https://example.com",
		"--data-file",
		"countries.json",
	]);
	assert!(result.is_err());
}

#[test]
fn list_mode_with_json_output() {
	let parsed = parse(&["--list", "-o", "json", "-r", "Europe", "-q", "ia"]);
	assert!(parsed.list);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.region.as_deref(), Some("Europe"));
	assert_eq!(parsed.query.as_deref(), Some("ia"));
}

#[test]
fn output_format_picks_the_renderer() {
	use world_analyzer::{Country, SessionOutcome};

	let country = Country::new("Alpha", "X", "AAA", 10, 1.0);
	assert_eq!(OutputFormat::Plain.render_list(&[]).unwrap(), "No entities");
	let json = OutputFormat::Json.render_list(&[&country]).unwrap();
	assert!(json.trim_start().starts_with('['));
	assert!(json.contains("\"AAA\""));

	let outcome = SessionOutcome::default();
	assert_eq!(OutputFormat::Plain.render_outcome(&outcome).unwrap(), "No selection");
	assert!(OutputFormat::Json.render_outcome(&outcome).unwrap().contains("\"selection\": null"));
}
