// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use freedom_atlas_model::{CountryYearRecord, DatasetIndex, Geography, IsoCode, Metric, Year};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethCell<'a> {
    pub feature_id: Option<&'a str>,
    pub name: Option<&'a str>,
    /// `None` when the country has no row that year or the score is missing;
    /// the renderer paints those features neutral.
    pub value: Option<f64>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethFeed<'a> {
    pub year: Year,
    pub metric: Metric,
    pub cells: Vec<ChoroplethCell<'a>>,
    pub matched: usize,
}

/// Joins every geography feature to its record at `year`, in feature order.
/// The geography is only borrowed.
#[must_use]
pub fn choropleth_feed<'a>(
    index: &'a DatasetIndex,
    geography: &'a Geography,
    year: Year,
    metric: Metric,
    selection: &[IsoCode],
) -> ChoroplethFeed<'a> {
    let mut by_iso: HashMap<&str, &CountryYearRecord> = HashMap::new();
    for record in index.records(year) {
        by_iso.entry(record.iso.as_str()).or_insert(record);
    }

    let mut matched = 0;
    let cells = geography
        .features
        .iter()
        .map(|feature| {
            let id = feature.id.as_deref();
            let record = id.and_then(|id| by_iso.get(id).copied());
            if record.is_some() {
                matched += 1;
            }
            ChoroplethCell {
                feature_id: id,
                name: feature
                    .properties
                    .name
                    .as_deref()
                    .or_else(|| record.map(|r| r.country.as_str())),
                value: record.and_then(|r| r.finite_score(metric)),
                selected: id.is_some_and(|id| selection.iter().any(|iso| iso.as_str() == id)),
            }
        })
        .collect();

    ChoroplethFeed {
        year,
        metric,
        cells,
        matched,
    }
}
