// File: crates/popchart-core/src/query.rs
// Summary: Derives the `/api/barchart` request from the current filter state.

use std::str::FromStr;

use crate::region::Region;

/// Path of the aggregation endpoint, appended to the configured base URL.
pub const ENDPOINT_PATH: &str = "/api/barchart";

/// The configured base could not be turned into a request URL.
#[derive(Debug, thiserror::Error)]
#[error("invalid API base '{base}': {source}")]
pub struct InvalidBaseUrl {
    pub base: String,
    #[source]
    pub source: <reqwest::Url as FromStr>::Err,
}

/// One ranked-population request: top `limit` countries for `year`, excluding `disabled`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarchartQuery {
    pub limit: u32,
    pub year: i32,
    /// Kept in the order the regions were switched off.
    pub disabled: Vec<Region>,
}

impl BarchartQuery {
    pub fn from_filters(year: i32, disabled: &[Region], limit: u32) -> Self {
        Self { limit, year, disabled: disabled.to_vec() }
    }

    /// Comma-joined region names, empty when every region is active.
    pub fn disabled_csv(&self) -> String {
        self.disabled.iter().map(|r| r.name()).collect::<Vec<_>>().join(",")
    }

    /// Query parameters in wire order. Sorting is always population-descending, filtered by year.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("sort", "Population".to_string()),
            ("sort_type", "-1".to_string()),
            ("filter", "Year".to_string()),
            ("filter_value", self.year.to_string()),
            ("disabled_regions", self.disabled_csv()),
        ]
    }

    /// Full request URL against `base` (scheme + host + optional prefix).
    pub fn url(&self, base: &str) -> Result<reqwest::Url, InvalidBaseUrl> {
        let endpoint = format!("{}{}", base.trim_end_matches('/'), ENDPOINT_PATH);
        reqwest::Url::parse_with_params(&endpoint, self.query_pairs())
            .map_err(|source| InvalidBaseUrl { base: base.to_string(), source })
    }
}
