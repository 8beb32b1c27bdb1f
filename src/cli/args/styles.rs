use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use world_analyzer::app_dirs;

/// Version banner listing the directories the binary reads and writes.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("world-analyzer {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	for (label, dir) in [
		("config", app_dirs::get_config_dir()),
		("data", app_dirs::get_data_dir()),
		("cache", app_dirs::get_cache_dir()),
	] {
		let shown = match dir {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};
		let _ = writeln!(details, "{label} directory: {shown}");
	}

	Box::leak(details.into_boxed_str())
}

/// Colours for help output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Green.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
