//! Typewriter reveal for the header title.
//!
//! Purely cosmetic: the title never feeds back into session state.

use std::time::{Duration, Instant};

/// Delay between revealed characters.
pub const DEFAULT_STEP: Duration = Duration::from_millis(100);

const CURSOR: &str = "▌";

#[derive(Debug, Clone)]
pub struct TypingTitle {
	text: String,
	started: Instant,
	step: Duration,
	enabled: bool,
}

impl TypingTitle {
	pub fn new(text: impl Into<String>, enabled: bool) -> Self {
		Self {
			text: text.into(),
			started: Instant::now(),
			step: DEFAULT_STEP,
			enabled,
		}
	}

	pub fn with_step(mut self, step: Duration) -> Self {
		self.step = step;
		self
	}

	pub fn restart_at(&mut self, now: Instant) {
		self.started = now;
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The portion of the title visible at `now`.
	#[must_use]
	pub fn visible_at(&self, now: Instant) -> &str {
		if !self.enabled || self.step.as_millis() == 0 {
			return &self.text;
		}
		let elapsed = now.saturating_duration_since(self.started);
		let shown = (elapsed.as_millis() / self.step.as_millis()) as usize;
		match self.text.char_indices().nth(shown) {
			Some((end, _)) => &self.text[..end],
			None => &self.text,
		}
	}

	#[must_use]
	pub fn is_complete_at(&self, now: Instant) -> bool {
		self.visible_at(now).len() == self.text.len()
	}

	/// Visible text plus a block cursor while typing is in progress.
	#[must_use]
	pub fn render_at(&self, now: Instant) -> String {
		let visible = self.visible_at(now);
		if self.is_complete_at(now) {
			visible.to_string()
		} else {
			format!("{visible}{CURSOR}")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveals_one_character_per_step() {
		let start = Instant::now();
		let mut title = TypingTitle::new("WORLD", true).with_step(Duration::from_millis(10));
		title.restart_at(start);

		assert_eq!(title.visible_at(start), "");
		assert_eq!(title.visible_at(start + Duration::from_millis(25)), "WO");
		assert_eq!(title.render_at(start + Duration::from_millis(25)), "WO▌");
		assert_eq!(title.visible_at(start + Duration::from_secs(1)), "WORLD");
		assert!(title.is_complete_at(start + Duration::from_secs(1)));
	}

	#[test]
	fn disabled_effect_shows_everything_immediately() {
		let title = TypingTitle::new("WORLD ANALYZER", false);
		assert_eq!(title.render_at(Instant::now()), "WORLD ANALYZER");
	}

	#[test]
	fn multibyte_titles_split_on_char_boundaries() {
		let start = Instant::now();
		let mut title = TypingTitle::new("ÉTAT", true).with_step(Duration::from_millis(10));
		title.restart_at(start);
		assert_eq!(title.visible_at(start + Duration::from_millis(15)), "É");
	}
}
