use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) display_cap: Option<SettingSource>,
	pub(crate) display_theme: Option<SettingSource>,
	pub(crate) source_url: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_cap(&self) -> SettingSource {
		self.display_cap
			.clone()
			.unwrap_or(SettingSource::ConfigKey("display.cap"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.display_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("display.theme"))
	}

	pub(crate) fn source_for_url(&self) -> SettingSource {
		self.source_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("source.url"))
	}
}
