mod builtins;
mod types;

pub use builtins::{AMBER, CYBER, MONO};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Name of [`default_theme`].
pub const DEFAULT_THEME_NAME: &str = "cyber";

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	CYBER
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical names of every bundled theme, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// All bundled theme definitions.
#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	BUILT_IN_DEFINITIONS
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_case_insensitively() {
		assert_eq!(by_name("AMBER"), Some(AMBER));
		assert_eq!(by_name("crt"), Some(AMBER));
		assert_eq!(by_name(" Default "), Some(CYBER));
		assert!(by_name("solarized").is_none());
	}

	#[test]
	fn names_list_every_builtin() {
		assert_eq!(names(), vec!["cyber", "amber", "mono"]);
		assert_eq!(definitions().len(), 3);
		assert_eq!(by_name(DEFAULT_THEME_NAME), Some(default_theme()));
	}
}
