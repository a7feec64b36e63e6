// File: crates/popchart-core/src/record.rs
// Summary: One ranked row of the population API response.

use serde::{Deserialize, Serialize};

/// A country's population for the requested year.
/// `region` stays raw text: the API may send names outside the six known regions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "Country name")]
    pub country: String,
    #[serde(rename = "Population")]
    pub population: u64,
    #[serde(rename = "Region")]
    pub region: String,
}

impl PopulationRecord {
    pub fn new(country: impl Into<String>, population: u64, region: impl Into<String>) -> Self {
        Self { country: country.into(), population, region: region.into() }
    }
}

/// Sum of `population` over all records; `None` for the empty ("no data") state.
pub fn total_population(records: &[PopulationRecord]) -> Option<u64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| r.population).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_field_names_and_ignores_extras() {
        let body = r#"[{"Country name":"India","Population":1407563842,"Region":"Asia","Year":2021,"_id":"x"}]"#;
        let rows: Vec<PopulationRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(rows, vec![PopulationRecord::new("India", 1_407_563_842, "Asia")]);
    }

    #[test]
    fn total_sums_or_none() {
        assert_eq!(total_population(&[]), None);
        let rows = [PopulationRecord::new("A", 100, "Asia"), PopulationRecord::new("B", 250, "Europe")];
        assert_eq!(total_population(&rows), Some(350));
    }
}
