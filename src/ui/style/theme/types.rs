use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub accent: Style,
	pub text: Style,
	pub muted: Style,
	pub border: Style,
	pub row_highlight: Style,
	pub selected: Style,
	pub region_active: Style,
	pub region_inactive: Style,
	pub empty: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.accent.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn text_style(&self) -> Style {
		self.text
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn region_style(&self, active: bool) -> Style {
		if active {
			self.region_active
		} else {
			self.region_inactive
		}
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn accent_fg(&self) -> Color {
		self.accent.fg.unwrap_or(Color::Reset)
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Case-insensitive match against the name or any alias.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = name.trim();
		self.name.eq_ignore_ascii_case(wanted)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(wanted))
	}
}
