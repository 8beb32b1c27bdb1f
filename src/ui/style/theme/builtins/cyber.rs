use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

const CYAN: Color = Color::Rgb(6, 182, 212);
const CYAN_BRIGHT: Color = Color::Rgb(34, 211, 238);
const CYAN_DIM: Color = Color::Rgb(14, 116, 144);
const DEEP: Color = Color::Rgb(2, 6, 23);
const PANEL: Color = Color::Rgb(8, 47, 73);

pub const CYBER: Theme = Theme {
	accent: Style::new().fg(CYAN),
	text: Style::new().fg(Color::White),
	muted: Style::new().fg(CYAN_DIM),
	border: Style::new().fg(CYAN_DIM),
	row_highlight: Style::new()
		.fg(Color::White)
		.bg(PANEL)
		.add_modifier(Modifier::BOLD),
	selected: Style::new().fg(CYAN_BRIGHT).add_modifier(Modifier::BOLD),
	region_active: Style::new()
		.fg(DEEP)
		.bg(CYAN)
		.add_modifier(Modifier::BOLD),
	region_inactive: Style::new().fg(CYAN).bg(DEEP),
	empty: Style::new().fg(CYAN_DIM).add_modifier(Modifier::ITALIC),
	error: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(Modifier::BOLD),
};

pub(super) const DEFINITION: ThemeDefinition =
	ThemeDefinition::new("cyber", CYBER).with_aliases(&["default", "cyan", "terminal"]);
