use anyhow::Result;
use tracing::info;

use super::App;
use super::state::DEFAULT_TITLE;
use super::style::{Theme, theme};
use super::title::TypingTitle;
use crate::filter::{DEFAULT_DISPLAY_CAP, RegionFilter};
use crate::saved::SavedCodes;
use crate::session::{Session, SessionOutcome};
use crate::source::{DataSource, spawn_loader};

/// Configures and launches the interactive browser.
///
/// The dataset is loaded on a background thread once [`AnalyzerUi::run`]
/// starts, so the first frame shows the loading state straight away.
pub struct AnalyzerUi {
	source: DataSource,
	cap: usize,
	initial_query: String,
	region: RegionFilter,
	theme: Option<Theme>,
	typing_effect: bool,
	title: String,
	saved: SavedCodes,
}

impl AnalyzerUi {
	pub fn new(source: DataSource) -> Self {
		Self {
			source,
			cap: DEFAULT_DISPLAY_CAP,
			initial_query: String::new(),
			region: RegionFilter::All,
			theme: None,
			typing_effect: true,
			title: DEFAULT_TITLE.to_string(),
			saved: SavedCodes::default(),
		}
	}

	pub fn with_cap(mut self, cap: usize) -> Self {
		self.cap = cap;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_region(mut self, region: RegionFilter) -> Self {
		self.region = region;
		self
	}

	/// Unknown names leave the current theme in place.
	pub fn with_theme_name(self, name: &str) -> Self {
		match theme::by_name(name) {
			Some(theme) => self.with_theme(theme),
			None => self,
		}
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_typing_effect(mut self, enabled: bool) -> Self {
		self.typing_effect = enabled;
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Use a previously restored saved set instead of an in-memory one.
	pub fn with_saved(mut self, saved: SavedCodes) -> Self {
		self.saved = saved;
		self
	}

	/// Build the app state without starting the loader or the terminal.
	pub fn into_app<'a>(self) -> (App<'a>, DataSource) {
		let session = Session::new(self.saved)
			.with_cap(self.cap)
			.with_query(self.initial_query)
			.with_region(self.region);
		let mut app = App::new(session);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_title(TypingTitle::new(self.title, self.typing_effect));
		(app, self.source)
	}

	/// Start loading and run the browser until the user quits.
	pub fn run(self) -> Result<SessionOutcome> {
		let (mut app, source) = self.into_app();
		info!(source = %source.describe(), "loading entities");
		app.set_loader(spawn_loader(source));
		app.run()
	}
}
