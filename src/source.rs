//! One-shot loading of the country list.
//!
//! The list is pulled exactly once, either from the REST endpoint or from a
//! local JSON file, on a background thread. The UI thread polls the returned
//! channel and installs the records when the single [`LoadEvent`] arrives.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{error, info};
use ureq::Agent;

use crate::country::Country;

/// Public endpoint serving the full country list with just the fields we use.
pub const DEFAULT_URL: &str =
	"https://restcountries.com/v3.1/all?fields=name,capital,region,population,flags,cca3,area";

/// Default request timeout for the remote source.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on the response size accepted from the endpoint.
const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum SourceError {
	#[error("request to {url} failed: {source}")]
	Http {
		url: String,
		#[source]
		source: Box<ureq::Error>,
	},
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("country list is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Where the country list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
	/// HTTP GET against `url`; `timeout` of `None` waits indefinitely.
	Remote {
		url: String,
		timeout: Option<Duration>,
	},
	/// A JSON array on disk in the same shape the endpoint returns.
	File(PathBuf),
}

impl Default for DataSource {
	fn default() -> Self {
		Self::Remote {
			url: DEFAULT_URL.to_string(),
			timeout: Some(DEFAULT_TIMEOUT),
		}
	}
}

impl DataSource {
	/// Short human readable description used in logs and the summary.
	#[must_use]
	pub fn describe(&self) -> String {
		match self {
			Self::Remote { url, .. } => url.clone(),
			Self::File(path) => path.display().to_string(),
		}
	}
}

/// The single message a loader thread delivers.
#[derive(Debug)]
pub enum LoadEvent {
	Loaded(Vec<Country>),
	Failed(String),
}

/// Parse a JSON array of country records.
pub fn parse_countries(json: &str) -> Result<Vec<Country>, SourceError> {
	Ok(serde_json::from_str(json)?)
}

/// Load the list synchronously.
pub fn load(source: &DataSource) -> Result<Vec<Country>, SourceError> {
	let started = Instant::now();
	let records = match source {
		DataSource::Remote { url, timeout } => fetch(url, *timeout)?,
		DataSource::File(path) => {
			let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
				path: path.clone(),
				source,
			})?;
			parse_countries(&contents)?
		}
	};
	info!(
		source = %source.describe(),
		records = records.len(),
		elapsed_ms = started.elapsed().as_millis() as u64,
		"country list loaded"
	);
	Ok(records)
}

fn fetch(url: &str, timeout: Option<Duration>) -> Result<Vec<Country>, SourceError> {
	let agent: Agent = Agent::config_builder()
		.timeout_global(timeout)
		.build()
		.into();
	let http_error = |source: ureq::Error| SourceError::Http {
		url: url.to_string(),
		source: Box::new(source),
	};

	let mut response = agent.get(url).call().map_err(http_error)?;
	response
		.body_mut()
		.with_config()
		.limit(MAX_BODY_BYTES)
		.read_json::<Vec<Country>>()
		.map_err(http_error)
}

/// Run [`load`] on a background thread and hand back the receiving end.
pub fn spawn_loader(source: DataSource) -> Receiver<LoadEvent> {
	let (tx, rx) = mpsc::channel();
	let spawned = thread::Builder::new()
		.name("country-loader".into())
		.spawn({
			let tx = tx.clone();
			let source = source.clone();
			move || {
				let event = match load(&source) {
					Ok(records) => LoadEvent::Loaded(records),
					Err(err) => {
						error!("failed to load country list: {err}");
						LoadEvent::Failed(err.to_string())
					}
				};
				let _ = tx.send(event);
			}
		});

	if let Err(err) = spawned {
		error!("failed to start loader thread: {err}");
		let _ = tx.send(LoadEvent::Failed(format!(
			"could not start loader for {}: {err}",
			source.describe()
		)));
	}
	rx
}
