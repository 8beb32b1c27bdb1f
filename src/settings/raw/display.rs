use serde::Deserialize;
use world_analyzer::filter::{DEFAULT_DISPLAY_CAP, RegionFilter};
use world_analyzer::ui::DEFAULT_TITLE;
use world_analyzer::ui::style::theme;

use crate::cli::CliArgs;

use super::super::resolved::DisplaySettings;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DisplaySection {
	pub(super) cap: Option<usize>,
	pub(super) initial_query: Option<String>,
	pub(super) region: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) typing_effect: Option<bool>,
	pub(super) title: Option<String>,
}

impl DisplaySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(cap) = cli.cap {
			self.cap = Some(cap);
		}
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(region) = cli.region.clone() {
			self.region = Some(region);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(typing) = cli.typing {
			self.typing_effect = Some(typing);
		}
		if cli.no_typing {
			self.typing_effect = Some(false);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	pub(super) fn resolve(self) -> DisplaySettings {
		DisplaySettings {
			cap: self.cap.unwrap_or(DEFAULT_DISPLAY_CAP),
			initial_query: self.initial_query.unwrap_or_default(),
			region: self
				.region
				.map(RegionFilter::from_label)
				.unwrap_or(RegionFilter::All),
			theme: self
				.theme
				.unwrap_or_else(|| theme::DEFAULT_THEME_NAME.to_string()),
			typing_effect: self.typing_effect.unwrap_or(true),
			title: self
				.title
				.filter(|title| !title.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
		}
	}
}
