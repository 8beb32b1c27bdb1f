use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::style::Theme;

pub const SUBTITLE: &str = "MK_OS-X // GEOPOLITICAL DATA UNIT";

/// Everything the header shows.
pub struct HeaderContext<'a> {
	pub title: &'a str,
	pub shown: usize,
	pub total: usize,
	pub region: Option<&'a str>,
	pub saved: usize,
	pub theme: &'a Theme,
}

pub fn render_header(frame: &mut Frame, area: Rect, header: HeaderContext<'_>) {
	let HeaderContext {
		title,
		shown,
		total,
		region,
		saved,
		theme,
	} = header;

	let block = Block::default()
		.borders(Borders::BOTTOM)
		.border_style(theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [left, right] =
		Layout::horizontal([Constraint::Min(20), Constraint::Length(56)]).areas(inner);

	let heading = vec![
		Line::from(vec![
			Span::styled("◉ ", theme.accent_style()),
			Span::styled(title.to_string(), theme.title_style()),
		]),
		Line::styled(SUBTITLE, theme.muted_style()),
	];
	frame.render_widget(Paragraph::new(heading), left);

	frame.render_widget(
		Paragraph::new(status_lines(shown, total, region, saved, theme)).alignment(Alignment::Right),
		right,
	);
}

fn status_lines<'a>(
	shown: usize,
	total: usize,
	region: Option<&'a str>,
	saved: usize,
	theme: &Theme,
) -> Vec<Line<'a>> {
	let mut first = vec![
		Span::styled("SYSTEM: STABLE", theme.muted_style()),
		Span::raw("  "),
		Span::styled(format!("DATA: {shown}/{total} ENTITIES"), theme.accent_style()),
	];
	if let Some(region) = region {
		first.push(Span::raw("  "));
		first.push(Span::styled(
			format!("REGION: {}", region.to_uppercase()),
			theme.selected_style(),
		));
	}
	vec![
		Line::from(first),
		Line::styled(format!("SAVED: {saved}"), theme.muted_style()),
	]
}
