//! Single-line query editor built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

use super::style::Theme;

/// Placeholder shown while the query is empty.
pub const PLACEHOLDER: &str = "PROBE ENTITY NAME...";

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.move_cursor(CursorMove::End);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(PLACEHOLDER);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Keys that would split the line are swallowed so the query always
	/// stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Enter => false,
			KeyCode::Char('m' | 'j') if ctrl => false,
			_ => self.textarea.input(key),
		}
	}

	pub fn apply_theme(&mut self, theme: &Theme) {
		self.textarea.set_style(theme.text_style());
		self.textarea.set_placeholder_style(theme.muted_style());
		self.textarea.set_cursor_style(theme.region_style(true));
		self.textarea.set_block(
			Block::bordered()
				.title(" PROBE ")
				.title_style(theme.title_style())
				.border_style(theme.border_style()),
		);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
