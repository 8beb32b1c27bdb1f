use ratatui::style::{Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

/// Attribute-only theme for terminals without colour.
pub const MONO: Theme = Theme {
	accent: Style::new().add_modifier(Modifier::BOLD),
	text: Style::new(),
	muted: Style::new().add_modifier(Modifier::DIM),
	border: Style::new(),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	selected: Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED)),
	region_active: Style::new().add_modifier(Modifier::REVERSED),
	region_inactive: Style::new(),
	empty: Style::new().add_modifier(Modifier::ITALIC),
	error: Style::new().add_modifier(Modifier::BOLD),
};

pub(super) const DEFINITION: ThemeDefinition =
	ThemeDefinition::new("mono", MONO).with_aliases(&["plain", "no-color"]);
