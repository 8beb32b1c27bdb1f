use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::filter::RegionFilter;
use crate::ui::style::Theme;

/// Horizontal gap between buttons.
const BUTTON_GAP: u16 = 1;

/// Lay out region buttons left to right, wrapping onto new rows when the
/// next button would overflow `area`. Buttons that do not fit vertically
/// are dropped from the result.
#[must_use]
pub fn layout_buttons(labels: &[String], area: Rect) -> Vec<Rect> {
	let mut rects = Vec::with_capacity(labels.len());
	let mut x = area.x;
	let mut y = area.y;
	let right = area.x.saturating_add(area.width);
	let bottom = area.y.saturating_add(area.height);

	for label in labels {
		let width = button_width(label).min(area.width);
		if width == 0 {
			break;
		}
		if x > area.x && x.saturating_add(width) > right {
			x = area.x;
			y = y.saturating_add(1);
		}
		if y >= bottom {
			break;
		}
		rects.push(Rect::new(x, y, width, 1));
		x = x.saturating_add(width).saturating_add(BUTTON_GAP);
	}
	rects
}

/// Rows needed to show every button at `width` columns.
#[must_use]
pub fn rows_needed(labels: &[String], width: u16) -> u16 {
	let unbounded = Rect::new(0, 0, width, u16::MAX);
	layout_buttons(labels, unbounded)
		.last()
		.map_or(0, |rect| rect.y + 1)
}

fn button_width(label: &str) -> u16 {
	let text = unicode_width::UnicodeWidthStr::width(label) as u16;
	text.saturating_add(2)
}

pub fn labels(regions: &[RegionFilter]) -> Vec<String> {
	regions
		.iter()
		.map(|region| region.label().to_uppercase())
		.collect()
}

/// Draw the region buttons and return their hit boxes, in option order.
pub fn render_regions(
	frame: &mut Frame,
	area: Rect,
	regions: &[RegionFilter],
	active: &RegionFilter,
	theme: &Theme,
) -> Vec<Rect> {
	let labels = labels(regions);
	let rects = layout_buttons(&labels, area);
	let buffer: &mut Buffer = frame.buffer_mut();
	for ((label, region), rect) in labels.iter().zip(regions).zip(&rects) {
		let style = theme.region_style(region == active);
		let span = Span::styled(format!(" {label} "), style);
		buffer.set_span(rect.x, rect.y, &span, rect.width);
	}
	rects
}
