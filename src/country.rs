//! Country records as delivered by the REST Countries API.
//!
//! The wire shape nests a few fields (`name.common`, `flags.svg`) that the
//! rest of the crate never needs nested, so [`Country`] deserializes through
//! a private mirror of the wire format and flattens on the way in.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a record carries no capital.
pub const MISSING_CAPITAL: &str = "N/A";

/// One country record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "wire::CountryWire")]
pub struct Country {
	pub common_name: String,
	pub capital_names: Vec<String>,
	pub region: String,
	pub population: u64,
	pub area: f64,
	pub flag_image_url: String,
	pub country_code: String,
}

impl Country {
	/// Build a record directly, mostly useful for tests and embedders that
	/// bring their own data.
	pub fn new(
		common_name: impl Into<String>,
		region: impl Into<String>,
		country_code: impl Into<String>,
		population: u64,
		area: f64,
	) -> Self {
		Self {
			common_name: common_name.into(),
			capital_names: Vec::new(),
			region: region.into(),
			population,
			area,
			flag_image_url: String::new(),
			country_code: country_code.into(),
		}
	}

	pub fn with_capitals<I, S>(mut self, capitals: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.capital_names = capitals.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_flag(mut self, url: impl Into<String>) -> Self {
		self.flag_image_url = url.into();
		self
	}

	/// The first listed capital, or [`MISSING_CAPITAL`].
	#[must_use]
	pub fn primary_capital(&self) -> &str {
		self.capital_names
			.first()
			.map(String::as_str)
			.unwrap_or(MISSING_CAPITAL)
	}

	#[must_use]
	pub fn population_display(&self) -> String {
		group_thousands(self.population)
	}

	#[must_use]
	pub fn area_display(&self) -> String {
		format!("{} km²", format_area(self.area))
	}
}

/// Format an integer with `,` every three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, ch) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}

/// Format an area with grouped thousands and at most one decimal place.
#[must_use]
pub fn format_area(area: f64) -> String {
	if !area.is_finite() || area <= 0.0 {
		return "0".to_string();
	}
	let tenths = (area * 10.0).round() as u64;
	let whole = group_thousands(tenths / 10);
	match tenths % 10 {
		0 => whole,
		fraction => format!("{whole}.{fraction}"),
	}
}

mod wire {
	use serde::Deserialize;

	use super::Country;

	#[derive(Debug, Default, Deserialize)]
	#[serde(default)]
	pub(super) struct NameWire {
		pub(super) common: String,
	}

	#[derive(Debug, Default, Deserialize)]
	#[serde(default)]
	pub(super) struct FlagsWire {
		pub(super) svg: String,
	}

	/// Accepts both the nested REST Countries layout and the flat layout
	/// this crate serializes, so saved JSON output can be fed back in.
	#[derive(Debug, Default, Deserialize)]
	#[serde(default)]
	pub(super) struct CountryWire {
		name: Option<NameWire>,
		common_name: Option<String>,
		#[serde(alias = "capital_names")]
		capital: Option<Vec<String>>,
		region: String,
		population: Option<u64>,
		area: Option<f64>,
		flags: Option<FlagsWire>,
		flag_image_url: Option<String>,
		#[serde(alias = "country_code")]
		cca3: String,
	}

	impl From<CountryWire> for Country {
		fn from(wire: CountryWire) -> Self {
			let common_name = wire
				.common_name
				.or_else(|| wire.name.map(|name| name.common))
				.unwrap_or_default();
			let flag_image_url = wire
				.flag_image_url
				.or_else(|| wire.flags.map(|flags| flags.svg))
				.unwrap_or_default();
			Self {
				common_name,
				capital_names: wire.capital.unwrap_or_default(),
				region: wire.region,
				population: wire.population.unwrap_or_default(),
				area: wire.area.unwrap_or_default(),
				flag_image_url,
				country_code: wire.cca3,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"name": {"common": "Iceland", "official": "Iceland"},
		"capital": ["Reykjavik"],
		"region": "Europe",
		"population": 366425,
		"flags": {"png": "https://flagcdn.com/w320/is.png", "svg": "https://flagcdn.com/is.svg"},
		"cca3": "ISL",
		"area": 103000.0
	}"#;

	#[test]
	fn deserializes_rest_countries_shape() {
		let country: Country = serde_json::from_str(SAMPLE).expect("parses");
		assert_eq!(country.common_name, "Iceland");
		assert_eq!(country.capital_names, vec!["Reykjavik"]);
		assert_eq!(country.region, "Europe");
		assert_eq!(country.population, 366_425);
		assert_eq!(country.flag_image_url, "https://flagcdn.com/is.svg");
		assert_eq!(country.country_code, "ISL");
	}

	#[test]
	fn missing_capital_falls_back_to_placeholder() {
		let country: Country = serde_json::from_str(
			r#"{"name":{"common":"Antarctica"},"region":"Antarctic","population":1000,"cca3":"ATA","area":14000000}"#,
		)
		.expect("parses");
		assert!(country.capital_names.is_empty());
		assert_eq!(country.primary_capital(), MISSING_CAPITAL);
	}

	#[test]
	fn null_numbers_read_as_zero() {
		let country: Country = serde_json::from_str(
			r#"{"name":{"common":"Nowhere"},"region":"X","population":null,"cca3":"NWH","area":null}"#,
		)
		.expect("parses");
		assert_eq!(country.population, 0);
		assert_eq!(country.area, 0.0);
	}

	#[test]
	fn one_null_area_does_not_sink_the_list() {
		let countries: Vec<Country> = serde_json::from_str(
			r#"[{"name":{"common":"Alpha"},"region":"X","population":10,"cca3":"AAA","area":null},
			    {"name":{"common":"Beta"},"region":"Y","population":20,"cca3":"BBB","area":2}]"#,
		)
		.expect("parses");
		assert_eq!(countries.len(), 2);
		assert_eq!(countries[1].area, 2.0);
	}

	#[test]
	fn serialized_form_reads_back() {
		let original = Country::new("Alpha", "X", "AAA", 10, 1.5)
			.with_capitals(["A City"])
			.with_flag("https://flagcdn.com/aaa.svg");
		let json = serde_json::to_string(&original).expect("serializes");
		let parsed: Country = serde_json::from_str(&json).expect("parses");
		assert_eq!(parsed, original);
		assert_eq!(parsed.flag_image_url, "https://flagcdn.com/aaa.svg");
	}

	#[test]
	fn thousands_are_grouped() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(999), "999");
		assert_eq!(group_thousands(1_000), "1,000");
		assert_eq!(group_thousands(1_234_567), "1,234,567");
	}

	#[test]
	fn area_keeps_one_decimal_only_when_needed() {
		assert_eq!(format_area(9_984_670.0), "9,984,670");
		assert_eq!(format_area(0.44), "0.4");
		assert_eq!(format_area(2_586.25), "2,586.3");
		assert_eq!(
			Country::new("x", "y", "ZZZ", 0, 61.0).area_display(),
			"61 km²"
		);
	}
}
