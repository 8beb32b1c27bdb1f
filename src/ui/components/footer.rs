use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::style::Theme;

const KEY_HINTS: &[(&str, &str)] = &[
	("↑↓", "move"),
	("enter", "select"),
	("esc", "clear"),
	("tab", "region"),
	("^S", "save"),
	("^N/^P", "compare"),
	("^X", "drop compare"),
	("^Q", "quit"),
];

/// Bottom line: a transient status message when there is one, key hints
/// otherwise.
pub fn render_footer(frame: &mut Frame, area: Rect, status: Option<&str>, theme: &Theme) {
	let line = match status {
		Some(message) => Line::styled(message.to_string(), theme.error_style()),
		None => hints(theme),
	};
	frame.render_widget(Paragraph::new(line), area);
}

fn hints(theme: &Theme) -> Line<'static> {
	let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
	for (key, action) in KEY_HINTS {
		spans.push(Span::styled(format!(" {key}"), theme.accent_style()));
		spans.push(Span::styled(format!(" {action} "), theme.muted_style()));
	}
	Line::from(spans)
}
