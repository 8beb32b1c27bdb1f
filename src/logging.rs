//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while the application runs, so log lines
//! never go to stdout. They are written through a non-blocking appender to a
//! single file; the returned guard must outlive the UI so buffered lines are
//! flushed on exit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default file name inside the cache directory.
pub const LOG_FILE_NAME: &str = "world-analyzer.log";

const DEFAULT_LEVEL: &str = "info";

/// Logging knobs resolved from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingOptions {
	/// `EnvFilter` directive, e.g. `debug` or `world_analyzer=trace`.
	/// `None` defers to `RUST_LOG`, then to `info`.
	pub level: Option<String>,
	/// Destination file. `None` disables logging entirely.
	pub file: Option<PathBuf>,
}

/// Install the global subscriber. Returns `None` when logging is disabled.
pub fn initialize(options: &LoggingOptions) -> Result<Option<WorkerGuard>> {
	let Some(path) = options.file.as_deref() else {
		return Ok(None);
	};

	let filter = build_filter(options.level.as_deref())?;
	let (dir, file_name) = split_log_path(path)?;
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(dir, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::fmt()
		.with_writer(writer)
		.with_env_filter(filter)
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::debug!(path = %path.display(), "logging initialized");
	Ok(Some(guard))
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
	match level {
		Some(directive) => EnvFilter::try_new(directive)
			.with_context(|| format!("invalid log level directive `{directive}`")),
		None => Ok(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))),
	}
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
	let file_name = path
		.file_name()
		.ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn disabled_logging_installs_nothing() {
		let guard = initialize(&LoggingOptions::default()).expect("no-op");
		assert!(guard.is_none());
	}

	#[test]
	fn bare_file_name_logs_to_current_directory() {
		let (dir, name) = split_log_path(Path::new("app.log")).unwrap();
		assert_eq!(dir, Path::new("."));
		assert_eq!(name, "app.log");
	}

	#[test]
	fn path_without_file_name_is_rejected() {
		assert!(split_log_path(Path::new("/")).is_err());
	}

	#[test]
	fn invalid_directive_is_reported() {
		assert!(build_filter(Some("world_analyzer=loudest")).is_err());
		assert!(build_filter(Some("world_analyzer=debug")).is_ok());
	}
}
