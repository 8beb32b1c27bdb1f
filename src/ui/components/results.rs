use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::country::Country;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const SELECTED_MARKER: &str = "◆";
const SAVED_MARKER: &str = "★";

/// Rows taken by the header and its bottom margin.
pub const HEADER_ROWS: u16 = 2;

/// One display row, already resolved to its record.
pub struct ResultRow<'a> {
	pub country: &'a Country,
	pub selected: bool,
	pub saved: bool,
}

pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	rows: &[ResultRow<'_>],
	theme: &Theme,
) {
	let header = Row::new(["", "ENTITY", "REGION // ID"].map(Cell::from))
		.style(theme.muted_style())
		.height(1)
		.bottom_margin(1);

	let body = rows.iter().map(|row| {
		let marker = match (row.selected, row.saved) {
			(true, _) => SELECTED_MARKER,
			(false, true) => SAVED_MARKER,
			(false, false) => " ",
		};
		let name_style = if row.selected {
			theme.selected_style()
		} else {
			theme.text_style()
		};
		Row::new(vec![
			Cell::from(Span::styled(marker, theme.accent_style())),
			Cell::from(Span::styled(row.country.common_name.to_uppercase(), name_style)),
			Cell::from(Span::styled(
				format!("{} // {}", row.country.region, row.country.country_code),
				theme.muted_style(),
			)),
		])
	});

	let widths = [
		Constraint::Length(1),
		Constraint::Percentage(55),
		Constraint::Min(8),
	];
	let table = Table::new(body, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
}

/// Map a terminal row inside `area` to a display index.
#[must_use]
pub fn row_at(area: Rect, offset: usize, column: u16, row: u16, len: usize) -> Option<usize> {
	let body_top = area.y.saturating_add(HEADER_ROWS);
	let inside = column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= body_top
		&& row < area.y.saturating_add(area.height);
	if !inside {
		return None;
	}
	let index = offset + usize::from(row - body_top);
	(index < len).then_some(index)
}

pub fn render_loading(frame: &mut Frame, area: Rect, throbber_state: &ThrobberState, theme: &Theme) {
	let spinner = Throbber::default()
		.style(theme.accent_style())
		.throbber_style(theme.accent_style());
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled("ACCESSING SATELLITE FEED...", theme.accent_style()),
	]);
	render_centered(frame, area, Paragraph::new(line).alignment(Alignment::Center));
}

pub fn render_empty(frame: &mut Frame, area: Rect, query: &str, theme: &Theme) {
	let message = if query.is_empty() {
		"NO ENTITIES IN THIS SECTOR".to_string()
	} else {
		format!("NO ENTITIES MATCH \"{query}\"")
	};
	let paragraph = Paragraph::new(message)
		.style(theme.empty_style())
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	render_centered(frame, area, paragraph);
}

pub fn render_failed(frame: &mut Frame, area: Rect, reason: &str, theme: &Theme) {
	let lines = vec![
		Line::styled("SATELLITE FEED LOST", theme.error_style()),
		Line::default(),
		Line::styled(reason.to_string(), theme.muted_style()),
	];
	let paragraph = Paragraph::new(lines)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	render_centered(frame, area, paragraph);
}

fn render_centered(frame: &mut Frame, area: Rect, paragraph: Paragraph<'_>) {
	if area.height == 0 {
		return;
	}
	let top = area.height.saturating_sub(3) / 2;
	let target = Rect {
		y: area.y + top,
		height: area.height - top,
		..area
	};
	frame.render_widget(paragraph, target);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clicks_map_to_display_indices() {
		let area = Rect::new(0, 10, 40, 12);
		assert_eq!(row_at(area, 0, 5, 12, 5), Some(0));
		assert_eq!(row_at(area, 0, 5, 14, 5), Some(2));
		assert_eq!(row_at(area, 3, 5, 12, 10), Some(3));
	}

	#[test]
	fn clicks_outside_rows_are_ignored() {
		let area = Rect::new(0, 10, 40, 12);
		assert_eq!(row_at(area, 0, 5, 10, 5), None, "header row");
		assert_eq!(row_at(area, 0, 5, 11, 5), None, "header margin");
		assert_eq!(row_at(area, 0, 45, 12, 5), None, "right of the table");
		assert_eq!(row_at(area, 0, 5, 20, 5), None, "past the last row");
	}
}
