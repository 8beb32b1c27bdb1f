use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

const AMBER_FG: Color = Color::Rgb(251, 191, 36);
const AMBER_DIM: Color = Color::Rgb(146, 64, 14);
const AMBER_PANEL: Color = Color::Rgb(69, 26, 3);

pub const AMBER: Theme = Theme {
	accent: Style::new().fg(AMBER_FG),
	text: Style::new().fg(Color::Rgb(254, 243, 199)),
	muted: Style::new().fg(AMBER_DIM),
	border: Style::new().fg(AMBER_DIM),
	row_highlight: Style::new()
		.fg(Color::Rgb(254, 243, 199))
		.bg(AMBER_PANEL)
		.add_modifier(Modifier::BOLD),
	selected: Style::new().fg(AMBER_FG).add_modifier(Modifier::BOLD),
	region_active: Style::new()
		.fg(Color::Black)
		.bg(AMBER_FG)
		.add_modifier(Modifier::BOLD),
	region_inactive: Style::new().fg(AMBER_FG),
	empty: Style::new().fg(AMBER_DIM).add_modifier(Modifier::ITALIC),
	error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
};

pub(super) const DEFINITION: ThemeDefinition =
	ThemeDefinition::new("amber", AMBER).with_aliases(&["crt", "phosphor"]);
