//! The single state object behind the browser.
//!
//! [`Session`] owns the dataset, the filter inputs, the derived display
//! list and everything the user has picked. Every mutating operation ends
//! with [`Session::recompute`], so derived state is always current before
//! the navigator or the renderer reads it.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::compare::{self, Comparison};
use crate::country::Country;
use crate::dataset::Dataset;
use crate::filter::{self, DEFAULT_DISPLAY_CAP, RegionFilter};
use crate::navigation::{NavKey, NavOutcome, Navigator};
use crate::saved::{SavedCodes, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("the dataset has already been loaded")]
	AlreadyLoaded,
	#[error("no record is selected")]
	NothingSelected,
	#[error(transparent)]
	Store(#[from] StoreError),
}

/// What the user ended the session with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionOutcome {
	pub selection: Option<Country>,
	pub saved: Vec<String>,
	pub query: String,
	pub region: String,
}

#[derive(Debug)]
pub struct Session {
	dataset: Option<Dataset>,
	query: String,
	region: RegionFilter,
	cap: usize,
	display: Vec<usize>,
	regions: Vec<RegionFilter>,
	navigator: Navigator,
	selected: Option<String>,
	comparison: Option<String>,
	saved: SavedCodes,
}

impl Default for Session {
	fn default() -> Self {
		Self::new(SavedCodes::default())
	}
}

impl Session {
	/// An empty session waiting for its dataset.
	pub fn new(saved: SavedCodes) -> Self {
		let mut session = Self {
			dataset: None,
			query: String::new(),
			region: RegionFilter::All,
			cap: DEFAULT_DISPLAY_CAP,
			display: Vec::new(),
			regions: Vec::new(),
			navigator: Navigator::default(),
			selected: None,
			comparison: None,
			saved,
		};
		session.recompute();
		session
	}

	/// Convenience constructor for an already-loaded session.
	pub fn with_records(records: impl IntoIterator<Item = Country>, saved: SavedCodes) -> Self {
		let mut session = Self::new(saved);
		session.dataset = Some(Dataset::new(records));
		session.recompute();
		session
	}

	pub fn with_cap(mut self, cap: usize) -> Self {
		self.cap = cap;
		self.recompute();
		self
	}

	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();
		self.recompute();
		self
	}

	pub fn with_region(mut self, region: RegionFilter) -> Self {
		self.region = region;
		self.recompute();
		self
	}

	/// Install the dataset. Only the first call succeeds.
	pub fn install(&mut self, records: Vec<Country>) -> Result<(), SessionError> {
		if self.dataset.is_some() {
			return Err(SessionError::AlreadyLoaded);
		}
		let dataset = Dataset::new(records);
		info!(records = dataset.len(), "dataset installed");
		self.dataset = Some(dataset);
		self.recompute();
		Ok(())
	}

	/// Re-derive the display list and region options, then re-clamp the
	/// highlight so it always points inside the display list.
	pub fn recompute(&mut self) {
		let records = self.dataset.as_deref().unwrap_or(&[]);
		self.display = filter::filter_indices(records, &self.region, &self.query, self.cap);
		self.regions = filter::region_options(records);
		self.navigator.clamp(self.display.len());
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		if query == self.query {
			return;
		}
		self.query = query;
		self.recompute();
		debug!(query = %self.query, shown = self.display.len(), "query changed");
	}

	pub fn set_region(&mut self, region: RegionFilter) {
		if region == self.region {
			return;
		}
		self.region = region;
		self.recompute();
		debug!(region = %self.region, shown = self.display.len(), "region changed");
	}

	/// Step to the next (or previous) region option, wrapping around.
	pub fn cycle_region(&mut self, forward: bool) {
		let count = self.regions.len();
		if count == 0 {
			return;
		}
		let current = self
			.regions
			.iter()
			.position(|option| *option == self.region)
			.unwrap_or(0);
		let next = if forward {
			(current + 1) % count
		} else {
			(current + count - 1) % count
		};
		let region = self.regions[next].clone();
		self.set_region(region);
	}

	/// Feed a navigation key. Returns `true` when the key was consumed.
	pub fn navigate(&mut self, key: NavKey) -> bool {
		match self.navigator.apply(key, self.display.len()) {
			NavOutcome::Moved => true,
			NavOutcome::Select(index) => {
				self.select_display_index(index);
				true
			}
			NavOutcome::Clear => {
				self.clear_selection();
				true
			}
			NavOutcome::Ignored => false,
		}
	}

	/// Select by code, as a pointer click does. Unknown codes are ignored.
	pub fn select_code(&mut self, code: &str) -> bool {
		if !self.dataset.as_ref().is_some_and(|data| data.contains(code)) {
			return false;
		}
		self.set_selected(Some(code.to_string()));
		true
	}

	/// Select the record shown at `index` in the display list.
	pub fn select_display_index(&mut self, index: usize) -> bool {
		let Some(code) = self
			.display_record(index)
			.map(|record| record.country_code.clone())
		else {
			return false;
		};
		self.set_selected(Some(code));
		true
	}

	pub fn clear_selection(&mut self) {
		self.navigator.reset();
		self.set_selected(None);
	}

	fn set_selected(&mut self, code: Option<String>) {
		if self.selected != code {
			self.comparison = None;
		}
		debug!(selected = ?code, "selection changed");
		self.selected = code;
	}

	/// Flip saved membership of `code`. Returns whether it is now saved.
	pub fn toggle_saved(&mut self, code: &str) -> Result<bool, SessionError> {
		let saved = self.saved.toggle(code)?;
		info!(code, saved, "saved set toggled");
		Ok(saved)
	}

	pub fn toggle_saved_selected(&mut self) -> Result<bool, SessionError> {
		let code = self.selected.clone().ok_or(SessionError::NothingSelected)?;
		self.toggle_saved(&code)
	}

	/// Pick `code` as comparison target. Fails silently (returns `false`)
	/// without a selection, for unknown codes, or for the selection itself.
	pub fn set_comparison(&mut self, code: &str) -> bool {
		let Some(selected) = self.selected.as_deref() else {
			return false;
		};
		if selected == code || !self.dataset.as_ref().is_some_and(|data| data.contains(code)) {
			return false;
		}
		self.comparison = Some(code.to_string());
		true
	}

	/// Step through the comparison candidates, wrapping around.
	pub fn cycle_comparison(&mut self, forward: bool) -> bool {
		let pool: Vec<String> = self
			.comparison_candidates()
			.into_iter()
			.map(|record| record.country_code.clone())
			.collect();
		if pool.is_empty() || self.selected.is_none() {
			return false;
		}
		let current = self
			.comparison
			.as_ref()
			.and_then(|code| pool.iter().position(|candidate| candidate == code));
		let next = match (current, forward) {
			(None, true) => 0,
			(None, false) => pool.len() - 1,
			(Some(index), true) => (index + 1) % pool.len(),
			(Some(index), false) => (index + pool.len() - 1) % pool.len(),
		};
		self.set_comparison(&pool[next])
	}

	pub fn clear_comparison(&mut self) {
		self.comparison = None;
	}

	#[must_use]
	pub fn comparison_candidates(&self) -> Vec<&Country> {
		compare::candidates(self.records(), self.selected.as_deref())
	}

	#[must_use]
	pub fn comparison(&self) -> Option<Comparison<'_>> {
		Some(Comparison::between(
			self.selected()?,
			self.comparison_target()?,
		))
	}

	#[must_use]
	pub fn records(&self) -> &[Country] {
		self.dataset.as_deref().unwrap_or(&[])
	}

	#[must_use]
	pub fn is_loaded(&self) -> bool {
		self.dataset.is_some()
	}

	#[must_use]
	pub fn total(&self) -> usize {
		self.records().len()
	}

	#[must_use]
	pub fn display(&self) -> Vec<&Country> {
		let records = self.records();
		self.display.iter().map(|&index| &records[index]).collect()
	}

	#[must_use]
	pub fn display_len(&self) -> usize {
		self.display.len()
	}

	#[must_use]
	pub fn display_record(&self, index: usize) -> Option<&Country> {
		let position = *self.display.get(index)?;
		self.records().get(position)
	}

	#[must_use]
	pub fn regions(&self) -> &[RegionFilter] {
		&self.regions
	}

	#[must_use]
	pub fn region(&self) -> &RegionFilter {
		&self.region
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn cap(&self) -> usize {
		self.cap
	}

	#[must_use]
	pub fn highlighted(&self) -> Option<usize> {
		self.navigator.highlighted()
	}

	#[must_use]
	pub fn highlighted_country(&self) -> Option<&Country> {
		self.display_record(self.highlighted()?)
	}

	#[must_use]
	pub fn selected(&self) -> Option<&Country> {
		self.lookup(self.selected.as_deref()?)
	}

	#[must_use]
	pub fn comparison_target(&self) -> Option<&Country> {
		self.lookup(self.comparison.as_deref()?)
	}

	#[must_use]
	pub fn saved(&self) -> &SavedCodes {
		&self.saved
	}

	#[must_use]
	pub fn is_saved(&self, code: &str) -> bool {
		self.saved.contains(code)
	}

	fn lookup(&self, code: &str) -> Option<&Country> {
		self.dataset.as_ref()?.get(code)
	}

	/// Snapshot of the session for printing on exit.
	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			selection: self.selected().cloned(),
			saved: self.saved.to_vec(),
			query: self.query.clone(),
			region: self.region.label().to_string(),
		}
	}
}
