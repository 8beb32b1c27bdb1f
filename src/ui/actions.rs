use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::error;

use super::App;
use super::components::results::row_at;
use crate::navigation::NavKey;
use crate::session::{SessionError, SessionOutcome};

impl<'a> App<'a> {
	/// Apply one key press. Returns the outcome once the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		self.status = None;
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c' | 'q') if ctrl => return Some(self.session.outcome()),
			KeyCode::Char('s') if ctrl => self.toggle_saved(),
			KeyCode::Char('n') if ctrl => {
				self.session.cycle_comparison(true);
			}
			KeyCode::Char('p') if ctrl => {
				self.session.cycle_comparison(false);
			}
			KeyCode::Char('x') if ctrl => self.session.clear_comparison(),
			KeyCode::Tab => self.session.cycle_region(true),
			KeyCode::BackTab => self.session.cycle_region(false),
			KeyCode::Up => self.navigate(NavKey::Up),
			KeyCode::Down => self.navigate(NavKey::Down),
			KeyCode::Enter => self.navigate(NavKey::Enter),
			KeyCode::Esc => self.navigate(NavKey::Escape),
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
		None
	}

	/// Left clicks pick a region button or a result row.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let position = Position::new(mouse.column, mouse.row);

		if let Some(index) = self
			.region_hitboxes
			.iter()
			.position(|hitbox| hitbox.contains(position))
		{
			if let Some(region) = self.session.regions().get(index).cloned() {
				self.session.set_region(region);
			}
			return;
		}

		if let Some(index) = row_at(
			self.list_area,
			self.table_state.offset(),
			mouse.column,
			mouse.row,
			self.session.display_len(),
		) {
			self.session.select_display_index(index);
			self.session.clear_comparison();
		}
	}

	fn navigate(&mut self, key: NavKey) {
		self.session.navigate(key);
	}

	fn toggle_saved(&mut self) {
		match self.session.toggle_saved_selected() {
			Ok(_) => {}
			Err(SessionError::NothingSelected) => {
				self.status = Some("SELECT AN ENTITY BEFORE SAVING".to_string());
			}
			Err(err) => {
				error!(%err, "could not persist saved entities");
				self.status = Some(format!("SAVE FAILED: {err}"));
			}
		}
	}
}
