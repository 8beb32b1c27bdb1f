use anyhow::Result;
use serde_json::json;
use world_analyzer::{Country, SessionOutcome};

/// Plain-text summary of how the session ended.
pub(crate) fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	let mut lines = vec![match &outcome.selection {
		Some(country) => describe(country),
		None => "No selection".to_string(),
	}];
	if !outcome.saved.is_empty() {
		lines.push(format!("saved: {}", outcome.saved.join(", ")));
	}
	lines.join("\n")
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"region": outcome.region,
		"selection": outcome.selection,
		"saved": outcome.saved,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// One line per entity, for `--list`.
pub(crate) fn format_list_plain(countries: &[&Country]) -> String {
	if countries.is_empty() {
		return "No entities".to_string();
	}
	countries
		.iter()
		.map(|country| describe(country))
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn format_list_json(countries: &[&Country]) -> Result<String> {
	Ok(serde_json::to_string_pretty(countries)?)
}

fn describe(country: &Country) -> String {
	format!(
		"{}\t{}\t{}\t{}\tpop {}\t{}",
		country.country_code,
		country.common_name,
		country.region,
		country.primary_capital(),
		country.population_display(),
		country.area_display(),
	)
}
