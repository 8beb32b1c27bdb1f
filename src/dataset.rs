//! The loaded country list, keyed by country code.

use std::collections::HashMap;
use std::ops::Deref;

use tracing::warn;

use crate::country::Country;

/// Read-only collection of records with unique country codes.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
	records: Vec<Country>,
	by_code: HashMap<String, usize>,
}

impl Dataset {
	/// Build a dataset, keeping the first record for any repeated code.
	pub fn new(records: impl IntoIterator<Item = Country>) -> Self {
		let mut kept = Vec::new();
		let mut by_code = HashMap::new();
		for record in records {
			if by_code.contains_key(&record.country_code) {
				warn!(
					code = %record.country_code,
					name = %record.common_name,
					"dropping record with duplicate country code"
				);
				continue;
			}
			by_code.insert(record.country_code.clone(), kept.len());
			kept.push(record);
		}
		Self {
			records: kept,
			by_code,
		}
	}

	#[must_use]
	pub fn records(&self) -> &[Country] {
		&self.records
	}

	#[must_use]
	pub fn position(&self, code: &str) -> Option<usize> {
		self.by_code.get(code).copied()
	}

	#[must_use]
	pub fn get(&self, code: &str) -> Option<&Country> {
		self.position(code).map(|index| &self.records[index])
	}

	#[must_use]
	pub fn contains(&self, code: &str) -> bool {
		self.by_code.contains_key(code)
	}
}

impl Deref for Dataset {
	type Target = [Country];

	fn deref(&self) -> &Self::Target {
		&self.records
	}
}
