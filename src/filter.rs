//! Derive the bounded display list from the dataset.
//!
//! Filtering is a plain linear scan: region first, then a case-insensitive
//! substring match on the common name, then truncation to the display cap.
//! The cap only bounds what is shown; it never reorders anything.

use std::collections::BTreeSet;
use std::fmt;

use crate::country::Country;

/// Label of the sentinel region option that disables region filtering.
pub const ALL_REGIONS: &str = "All";

/// Default maximum number of records shown at once.
pub const DEFAULT_DISPLAY_CAP: usize = 20;

/// Region selector: everything, or exactly one region value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
	#[default]
	All,
	Only(String),
}

impl RegionFilter {
	/// Map a button label back to a filter. [`ALL_REGIONS`] is the sentinel.
	pub fn from_label(label: impl Into<String>) -> Self {
		let label = label.into();
		if label == ALL_REGIONS {
			Self::All
		} else {
			Self::Only(label)
		}
	}

	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Self::All => ALL_REGIONS,
			Self::Only(region) => region,
		}
	}

	/// Exact, case-sensitive match.
	#[must_use]
	pub fn matches(&self, region: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(expected) => expected == region,
		}
	}

	#[must_use]
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

impl fmt::Display for RegionFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Positions of the records that pass the region and query filters, in
/// dataset order, truncated to `cap`.
#[must_use]
pub fn filter_indices(
	records: &[Country],
	region: &RegionFilter,
	query: &str,
	cap: usize,
) -> Vec<usize> {
	let needle = query.to_lowercase();
	records
		.iter()
		.enumerate()
		.filter(|(_, record)| region.matches(&record.region))
		.filter(|(_, record)| {
			needle.is_empty() || record.common_name.to_lowercase().contains(&needle)
		})
		.map(|(index, _)| index)
		.take(cap)
		.collect()
}

/// Same as [`filter_indices`] but yields the records themselves.
#[must_use]
pub fn filter_countries<'a>(
	records: &'a [Country],
	region: &RegionFilter,
	query: &str,
	cap: usize,
) -> Vec<&'a Country> {
	filter_indices(records, region, query, cap)
		.into_iter()
		.map(|index| &records[index])
		.collect()
}

/// `All` followed by every distinct region in `records`, sorted.
#[must_use]
pub fn region_options(records: &[Country]) -> Vec<RegionFilter> {
	let distinct: BTreeSet<&str> = records
		.iter()
		.map(|record| record.region.as_str())
		.filter(|region| *region != ALL_REGIONS)
		.collect();

	std::iter::once(RegionFilter::All)
		.chain(
			distinct
				.into_iter()
				.map(|region| RegionFilter::Only(region.to_string())),
		)
		.collect()
}
