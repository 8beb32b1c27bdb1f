//! Keyboard highlight state over the display list.

/// Keys the navigator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
	Up,
	Down,
	Enter,
	Escape,
}

/// Result of feeding a key to the [`Navigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
	/// The highlight moved (or stayed clamped).
	Moved,
	/// `Enter` on a valid highlight: select this display index.
	Select(usize),
	/// `Escape`: drop the selection.
	Clear,
	/// Nothing to do (`Enter` with no valid highlight).
	Ignored,
}

/// Tracks the highlighted row of the display list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
	highlighted: Option<usize>,
}

impl Navigator {
	#[must_use]
	pub fn highlighted(&self) -> Option<usize> {
		self.highlighted
	}

	pub fn reset(&mut self) {
		self.highlighted = None;
	}

	/// Apply `key` against a list of `len` rows.
	pub fn apply(&mut self, key: NavKey, len: usize) -> NavOutcome {
		match key {
			NavKey::Down => {
				if len == 0 {
					self.highlighted = None;
				} else {
					let next = self.highlighted.map_or(0, |index| index + 1);
					self.highlighted = Some(next.min(len - 1));
				}
				NavOutcome::Moved
			}
			NavKey::Up => {
				if len == 0 {
					self.highlighted = None;
				} else {
					let next = self.highlighted.map_or(0, |index| index.saturating_sub(1));
					self.highlighted = Some(next.min(len - 1));
				}
				NavOutcome::Moved
			}
			NavKey::Enter => match self.highlighted {
				Some(index) if index < len => {
					self.highlighted = None;
					NavOutcome::Select(index)
				}
				_ => NavOutcome::Ignored,
			},
			NavKey::Escape => {
				self.highlighted = None;
				NavOutcome::Clear
			}
		}
	}

	/// Keep the highlight inside a list that now has `len` rows.
	pub fn clamp(&mut self, len: usize) {
		self.highlighted = match self.highlighted {
			Some(_) if len == 0 => None,
			Some(index) => Some(index.min(len - 1)),
			None => None,
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_down_lands_on_zero() {
		let mut nav = Navigator::default();
		assert_eq!(nav.apply(NavKey::Down, 3), NavOutcome::Moved);
		assert_eq!(nav.highlighted(), Some(0));
	}

	#[test]
	fn down_stops_at_last_row() {
		let mut nav = Navigator::default();
		for _ in 0..10 {
			nav.apply(NavKey::Down, 3);
			assert!(nav.highlighted().is_some_and(|index| index <= 2));
		}
		assert_eq!(nav.highlighted(), Some(2));
	}

	#[test]
	fn down_on_empty_list_keeps_nothing_highlighted() {
		let mut nav = Navigator::default();
		nav.apply(NavKey::Down, 0);
		assert_eq!(nav.highlighted(), None);
	}

	#[test]
	fn up_stops_at_first_row() {
		let mut nav = Navigator::default();
		nav.apply(NavKey::Down, 5);
		nav.apply(NavKey::Down, 5);
		nav.apply(NavKey::Up, 5);
		nav.apply(NavKey::Up, 5);
		nav.apply(NavKey::Up, 5);
		assert_eq!(nav.highlighted(), Some(0));
	}

	#[test]
	fn up_from_none_lands_on_zero() {
		let mut nav = Navigator::default();
		assert_eq!(nav.apply(NavKey::Up, 3), NavOutcome::Moved);
		assert_eq!(nav.highlighted(), Some(0));
	}

	#[test]
	fn up_on_empty_list_keeps_nothing_highlighted() {
		let mut nav = Navigator::default();
		nav.apply(NavKey::Up, 0);
		assert_eq!(nav.highlighted(), None);
	}

	#[test]
	fn enter_without_highlight_is_ignored() {
		let mut nav = Navigator::default();
		assert_eq!(nav.apply(NavKey::Enter, 4), NavOutcome::Ignored);
	}

	#[test]
	fn enter_selects_and_resets_highlight() {
		let mut nav = Navigator::default();
		nav.apply(NavKey::Down, 4);
		nav.apply(NavKey::Down, 4);
		assert_eq!(nav.apply(NavKey::Enter, 4), NavOutcome::Select(1));
		assert_eq!(nav.highlighted(), None);
	}

	#[test]
	fn enter_with_stale_highlight_is_ignored() {
		let mut nav = Navigator::default();
		for _ in 0..5 {
			nav.apply(NavKey::Down, 6);
		}
		assert_eq!(nav.apply(NavKey::Enter, 2), NavOutcome::Ignored);
	}

	#[test]
	fn escape_clears_highlight() {
		let mut nav = Navigator::default();
		nav.apply(NavKey::Down, 2);
		assert_eq!(nav.apply(NavKey::Escape, 2), NavOutcome::Clear);
		assert_eq!(nav.highlighted(), None);
	}

	#[test]
	fn clamp_follows_a_shrinking_list() {
		let mut nav = Navigator::default();
		for _ in 0..8 {
			nav.apply(NavKey::Down, 10);
		}
		nav.clamp(3);
		assert_eq!(nav.highlighted(), Some(2));
		nav.clamp(0);
		assert_eq!(nav.highlighted(), None);
	}
}
