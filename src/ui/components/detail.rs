use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::compare::Comparison;
use crate::country::{Country, format_area, group_thousands};
use crate::ui::style::Theme;

/// Data the detail pane needs for one frame.
pub struct DetailContext<'a> {
	pub selected: Option<&'a Country>,
	pub saved: bool,
	pub comparison: Option<Comparison<'a>>,
	pub theme: &'a Theme,
}

pub fn render_detail(frame: &mut Frame, area: Rect, detail: DetailContext<'_>) {
	let block = Block::default()
		.borders(Borders::LEFT)
		.border_style(detail.theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let inner = Rect {
		x: inner.x.saturating_add(2),
		width: inner.width.saturating_sub(4),
		y: inner.y.saturating_add(1),
		height: inner.height.saturating_sub(1),
	};

	match detail.selected {
		Some(country) => {
			let lines = detail_lines(country, detail.saved, detail.comparison.as_ref(), detail.theme);
			frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
		}
		None => render_awaiting(frame, inner, detail.theme),
	}
}

fn detail_lines<'a>(
	country: &'a Country,
	saved: bool,
	comparison: Option<&Comparison<'_>>,
	theme: &Theme,
) -> Vec<Line<'a>> {
	let mut title = vec![Span::styled(
		country.common_name.to_uppercase(),
		theme.title_style(),
	)];
	if saved {
		title.push(Span::styled("  ★ SAVED", theme.selected_style()));
	}

	let mut lines = vec![
		Line::from(title),
		Line::default(),
		Line::from(vec![
			tag("REGION", &country.region, theme),
			Span::raw("   "),
			tag("CAPITAL", country.primary_capital(), theme),
		]),
		Line::default(),
		field("POPULATION", country.population_display(), theme),
		field("AREA", country.area_display(), theme),
		field("ENTITY ID", country.country_code.clone(), theme),
	];
	if !country.flag_image_url.is_empty() {
		lines.push(field("FLAG", country.flag_image_url.clone(), theme));
	}

	lines.push(Line::default());
	lines.push(Line::styled("── COMPARISON ──", theme.accent_style()));
	match comparison {
		Some(comparison) => lines.extend(comparison_lines(comparison, theme)),
		None => lines.push(Line::styled(
			"Ctrl-N / Ctrl-P to pick a comparison target",
			theme.muted_style(),
		)),
	}

	lines.push(Line::default());
	lines.push(Line::styled("── GEOPOLITICAL ASSESSMENT ──", theme.accent_style()));
	lines.push(Line::styled(
		format!(
			"Analyzing localized data for {}. Stability indices reflect standard regional variances. \
			 No immediate anomalies detected in {} sector. Monitoring continues...",
			country.common_name, country.region
		),
		theme.text_style(),
	));
	lines
}

fn comparison_lines<'a>(comparison: &Comparison<'_>, theme: &Theme) -> Vec<Line<'a>> {
	let population_delta = signed(
		group_thousands(comparison.population_delta.unsigned_abs() as u64),
		comparison.population_delta < 0,
	);
	let area_delta = signed(
		format_area(comparison.area_delta.abs()),
		comparison.area_delta < 0.0,
	);
	vec![
		Line::from(vec![
			Span::styled("VS ", theme.muted_style()),
			Span::styled(comparison.right.common_name.to_uppercase(), theme.selected_style()),
		]),
		Line::from(vec![
			Span::styled(comparison.population_label().to_uppercase(), theme.text_style()),
			Span::styled(format!("  ({population_delta})"), theme.muted_style()),
		]),
		Line::from(vec![
			Span::styled(comparison.area_label().to_uppercase(), theme.text_style()),
			Span::styled(format!("  ({area_delta} km²)"), theme.muted_style()),
		]),
	]
}

fn signed(magnitude: String, negative: bool) -> String {
	if magnitude == "0" {
		magnitude
	} else if negative {
		format!("-{magnitude}")
	} else {
		format!("+{magnitude}")
	}
}

fn tag<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Span<'a> {
	Span::styled(format!("[{label}: {value}]"), theme.accent_style())
}

fn field<'a>(label: &'a str, value: String, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(format!("{label:<12}"), theme.muted_style()),
		Span::styled(value, theme.text_style()),
	])
}

fn render_awaiting(frame: &mut Frame, area: Rect, theme: &Theme) {
	let top = area.height.saturating_sub(4) / 2;
	let target = Rect {
		y: area.y + top,
		height: area.height - top,
		..area
	};
	let lines = vec![
		Line::styled("◍", theme.muted_style()),
		Line::styled("AWAITING SELECTION", theme.title_style()),
		Line::styled(
			"Initialize probe by selecting a global entity from the primary list unit.",
			theme.muted_style(),
		),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true }),
		target,
	);
}
