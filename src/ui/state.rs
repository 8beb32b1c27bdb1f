use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tracing::{error, info, warn};

use super::input::SearchInput;
use super::style::Theme;
use super::title::TypingTitle;
use crate::session::{Session, SessionError};
use crate::source::LoadEvent;

pub const DEFAULT_TITLE: &str = "WORLD_ANALYZER";

/// Where the dataset is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
	Loading,
	Ready,
	Failed(String),
}

pub struct App<'a> {
	pub session: Session,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub theme: Theme,
	pub(crate) title: TypingTitle,
	pub(crate) load_state: LoadState,
	pub(crate) loader: Option<Receiver<LoadEvent>>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) status: Option<String>,
	/// Where the result table was last drawn, for pointer hit tests.
	pub(crate) list_area: Rect,
	pub(crate) region_hitboxes: Vec<Rect>,
}

impl<'a> App<'a> {
	pub fn new(session: Session) -> Self {
		let load_state = if session.is_loaded() {
			LoadState::Ready
		} else {
			LoadState::Loading
		};
		let theme = Theme::default();
		let mut search_input = SearchInput::new(session.query());
		search_input.apply_theme(&theme);
		Self {
			session,
			search_input,
			table_state: TableState::default(),
			theme,
			title: TypingTitle::new(DEFAULT_TITLE, false),
			load_state,
			loader: None,
			throbber_state: ThrobberState::default(),
			status: None,
			list_area: Rect::default(),
			region_hitboxes: Vec::new(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input.apply_theme(&self.theme);
	}

	pub fn set_title(&mut self, title: TypingTitle) {
		self.title = title;
		self.title.restart_at(Instant::now());
	}

	/// Attach the receiving end of a background loader.
	pub fn set_loader(&mut self, loader: Receiver<LoadEvent>) {
		if !self.session.is_loaded() {
			self.load_state = LoadState::Loading;
		}
		self.loader = Some(loader);
	}

	#[must_use]
	pub fn load_state(&self) -> &LoadState {
		&self.load_state
	}

	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	/// Drain the loader channel without blocking.
	pub(crate) fn pump_loader(&mut self) {
		let Some(loader) = self.loader.as_ref() else {
			return;
		};
		let event = match loader.try_recv() {
			Ok(event) => event,
			Err(TryRecvError::Empty) => return,
			Err(TryRecvError::Disconnected) => {
				LoadEvent::Failed("loader stopped without a result".to_string())
			}
		};
		self.loader = None;
		self.apply_load_event(event);
	}

	pub(crate) fn apply_load_event(&mut self, event: LoadEvent) {
		match event {
			LoadEvent::Loaded(records) => match self.session.install(records) {
				Ok(()) => {
					info!(total = self.session.total(), "entities ready");
					self.load_state = LoadState::Ready;
				}
				Err(SessionError::AlreadyLoaded) => {
					warn!("ignoring a second dataset");
				}
				Err(err) => {
					error!(%err, "failed to install dataset");
					self.load_state = LoadState::Failed(err.to_string());
				}
			},
			LoadEvent::Failed(reason) => {
				error!(%reason, "dataset load failed");
				self.load_state = LoadState::Failed(reason);
			}
		}
	}

	/// Push the editor text into the session after an edit.
	pub(crate) fn sync_query(&mut self) {
		let text = self.search_input.text().to_string();
		self.session.set_query(text);
	}
}
