//! Side-by-side comparison between the selected record and a second one.
//!
//! Nothing here is stored. A [`Comparison`] is derived on demand from the
//! two records and thrown away after rendering.

use std::fmt;

use serde::Serialize;

use crate::country::Country;

/// Maximum number of entries offered as comparison targets.
pub const CANDIDATE_LIMIT: usize = 100;

/// Where the left-hand record stands relative to the right-hand one.
///
/// Equal values resolve to [`Standing::Lower`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
	Higher,
	Lower,
}

impl Standing {
	fn of<T: PartialOrd>(left: T, right: T) -> Self {
		if left > right {
			Self::Higher
		} else {
			Self::Lower
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Higher => "higher",
			Self::Lower => "lower",
		}
	}
}

impl fmt::Display for Standing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Derived contrast between `left` (the selection) and `right` (the target).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<'a> {
	pub left: &'a Country,
	pub right: &'a Country,
	pub population: Standing,
	pub area: Standing,
	/// `left.population - right.population`.
	pub population_delta: i128,
	/// `left.area - right.area`.
	pub area_delta: f64,
}

impl<'a> Comparison<'a> {
	#[must_use]
	pub fn between(left: &'a Country, right: &'a Country) -> Self {
		Self {
			left,
			right,
			population: Standing::of(left.population, right.population),
			area: Standing::of(left.area, right.area),
			population_delta: i128::from(left.population) - i128::from(right.population),
			area_delta: left.area - right.area,
		}
	}

	/// Label for the left side, e.g. `"lower population"`.
	#[must_use]
	pub fn population_label(&self) -> String {
		format!("{} population", self.population)
	}

	#[must_use]
	pub fn area_label(&self) -> String {
		format!("{} area", self.area)
	}
}

/// Records that may be picked as a comparison target: sorted by name,
/// without the selected record, capped at [`CANDIDATE_LIMIT`].
#[must_use]
pub fn candidates<'a>(records: &'a [Country], selected_code: Option<&str>) -> Vec<&'a Country> {
	let mut pool: Vec<&Country> = records
		.iter()
		.filter(|record| Some(record.country_code.as_str()) != selected_code)
		.collect();
	pool.sort_by(|a, b| {
		a.common_name
			.cmp(&b.common_name)
			.then_with(|| a.country_code.cmp(&b.country_code))
	});
	pool.truncate(CANDIDATE_LIMIT);
	pool
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn smaller_population_reads_lower() {
		let alpha = Country::new("Alpha", "X", "AAA", 10, 1.0);
		let beta = Country::new("Beta", "Y", "BBB", 20, 2.0);
		let comparison = Comparison::between(&alpha, &beta);
		assert_eq!(comparison.population_label(), "lower population");
		assert_eq!(comparison.population_delta, -10);
		assert_eq!(comparison.area, Standing::Lower);

		let reversed = Comparison::between(&beta, &alpha);
		assert_eq!(reversed.population_label(), "higher population");
		assert_eq!(reversed.area_label(), "higher area");
	}

	#[test]
	fn ties_resolve_to_lower() {
		let left = Country::new("Left", "X", "LLL", 500, 3.0);
		let right = Country::new("Right", "X", "RRR", 500, 3.0);
		let comparison = Comparison::between(&left, &right);
		assert_eq!(comparison.population, Standing::Lower);
		assert_eq!(comparison.area, Standing::Lower);
		assert_eq!(comparison.population_delta, 0);
	}

	#[test]
	fn candidates_exclude_selection_and_sort_by_name() {
		let records = vec![
			Country::new("Chile", "Americas", "CHL", 1, 1.0),
			Country::new("Austria", "Europe", "AUT", 1, 1.0),
			Country::new("Benin", "Africa", "BEN", 1, 1.0),
		];
		let names: Vec<_> = candidates(&records, Some("BEN"))
			.iter()
			.map(|c| c.common_name.as_str())
			.collect();
		assert_eq!(names, vec!["Austria", "Chile"]);
	}

	#[test]
	fn candidates_are_capped() {
		let records: Vec<_> = (0..250)
			.map(|index| Country::new(format!("C{index:03}"), "R", format!("{index:03}"), 1, 1.0))
			.collect();
		let pool = candidates(&records, None);
		assert_eq!(pool.len(), CANDIDATE_LIMIT);
		assert_eq!(pool[0].common_name, "C000");
		assert_eq!(pool[CANDIDATE_LIMIT - 1].common_name, "C099");
	}
}
