use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `world-analyzer` binary.
#[derive(Parser, Debug)]
#[command(
	name = "world-analyzer",
	version,
	long_version = long_version(),
	about = "Browse, filter, save and compare the world's countries from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "WORLD_ANALYZER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long,
		value_name = "URL",
		conflicts_with = "data_file",
		help = "Fetch the country list from this URL (default: restcountries.com)"
	)]
	pub(crate) url: Option<String>,
	#[arg(
		short = 'f',
		long = "data-file",
		value_name = "PATH",
		help = "Read the country list from a local JSON file instead of the network"
	)]
	pub(crate) data_file: Option<PathBuf>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Give up on the network fetch after this many seconds, 0 waits forever (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Maximum number of entities listed at once (default: 20)"
	)]
	pub(crate) cap: Option<usize>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial name filter (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'r',
		long,
		value_name = "REGION",
		help = "Start filtered to one region (default: All)"
	)]
	pub(crate) region: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: cyber)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "typing",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Reveal the title one character at a time (default: enabled)"
	)]
	pub(crate) typing: Option<bool>,
	#[arg(
		long = "no-typing",
		conflicts_with = "typing",
		help = "Show the title immediately, same as `--typing false`"
	)]
	pub(crate) no_typing: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the header title (default: WORLD_ANALYZER)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "storage-dir",
		value_name = "PATH",
		help = "Directory holding the saved set (default: platform data directory)"
	)]
	pub(crate) storage_dir: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive such as `debug` or `world_analyzer=trace` (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write logs to this file (default: platform cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list",
		help = "Load and filter without the interactive screen, print the list and exit"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
