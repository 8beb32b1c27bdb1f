use anyhow::Result;
use clap::ValueEnum;
use world_analyzer::{Country, SessionOutcome};

use crate::cli::output;

/// How results are written to stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Tab-separated lines
	Plain,
	/// Pretty-printed JSON
	Json,
}

impl OutputFormat {
	/// Text printed after the browser exits.
	pub(crate) fn render_outcome(self, outcome: &SessionOutcome) -> Result<String> {
		match self {
			OutputFormat::Plain => Ok(output::format_outcome_plain(outcome)),
			OutputFormat::Json => output::format_outcome_json(outcome),
		}
	}

	/// Text printed for `--list`.
	pub(crate) fn render_list(self, countries: &[&Country]) -> Result<String> {
		match self {
			OutputFormat::Plain => Ok(output::format_list_plain(countries)),
			OutputFormat::Json => output::format_list_json(countries),
		}
	}
}
