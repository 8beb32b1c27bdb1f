//! The user's saved set of country codes and its durable storage.
//!
//! Every toggle writes the whole set through to the store before returning.
//! A failed write rolls the in-memory change back so memory never runs
//! ahead of what is on disk.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the saved set.
pub const SAVED_KEY: &str = "saved_countries";

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to access {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to encode saved set: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Minimal string key/value store.
pub trait KeyValueStore: Send {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	#[must_use]
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	#[must_use]
	pub fn path_for(&self, key: &str) -> PathBuf {
		self.dir.join(format!("{key}.json"))
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		let path = self.path_for(key);
		match fs::read_to_string(&path) {
			Ok(contents) => Ok(Some(contents)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(source) => Err(StoreError::Io { path, source }),
		}
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
			path: self.dir.clone(),
			source,
		})?;
		let path = self.path_for(key);
		let staging = path.with_extension("json.tmp");
		fs::write(&staging, value).map_err(|source| StoreError::Io {
			path: staging.clone(),
			source,
		})?;
		fs::rename(&staging, &path).map_err(|source| StoreError::Io {
			path: path.clone(),
			source,
		})?;
		debug!(path = %path.display(), "wrote {key}");
		Ok(())
	}
}

/// Volatile store for tests and embedders that do not want disk state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		self.entries.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Insertion-ordered set of saved country codes bound to a store.
pub struct SavedCodes {
	codes: IndexSet<String>,
	store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for SavedCodes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SavedCodes")
			.field("codes", &self.codes)
			.finish_non_exhaustive()
	}
}

impl Default for SavedCodes {
	fn default() -> Self {
		Self::restore(MemoryStore::new())
	}
}

impl SavedCodes {
	/// Load the saved set from `store`. Missing, unreadable or malformed
	/// content yields an empty set.
	pub fn restore(store: impl KeyValueStore + 'static) -> Self {
		let codes = match store.get(SAVED_KEY) {
			Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
				Ok(codes) => codes.into_iter().collect(),
				Err(err) => {
					warn!("ignoring malformed saved set: {err}");
					IndexSet::new()
				}
			},
			Ok(None) => IndexSet::new(),
			Err(err) => {
				warn!("saved set unavailable, starting empty: {err}");
				IndexSet::new()
			}
		};
		debug!(count = codes.len(), "restored saved set");
		Self {
			codes,
			store: Box::new(store),
		}
	}

	/// Flip membership of `code` and persist. Returns whether `code` is now
	/// saved.
	pub fn toggle(&mut self, code: &str) -> Result<bool, StoreError> {
		let removed_at = self.codes.get_index_of(code);
		match removed_at {
			Some(index) => {
				self.codes.shift_remove_index(index);
			}
			None => {
				self.codes.insert(code.to_string());
			}
		}

		if let Err(err) = self.persist() {
			match removed_at {
				Some(index) => {
					self.codes.shift_insert(index, code.to_string());
				}
				None => {
					self.codes.shift_remove(code);
				}
			}
			return Err(err);
		}
		Ok(removed_at.is_none())
	}

	fn persist(&mut self) -> Result<(), StoreError> {
		let encoded = serde_json::to_string(&self.to_vec())?;
		self.store.set(SAVED_KEY, &encoded)
	}

	#[must_use]
	pub fn contains(&self, code: &str) -> bool {
		self.codes.contains(code)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.codes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.codes.iter().map(String::as_str)
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<String> {
		self.iter().map(str::to_string).collect()
	}

	/// Raw stored value, for checking that disk and memory agree.
	pub fn stored(&self) -> Result<Option<String>, StoreError> {
		self.store.get(SAVED_KEY)
	}
}
