// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{CountryYearRecord, DatasetIndex, IsoCode, Year};
use serde::Serialize;

use crate::filters::record_for_country;

/// One slot of a country's history. `record` is `None` when the country has
/// no row that year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint<'a> {
    pub year: Year,
    pub record: Option<&'a CountryYearRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries<'a> {
    pub iso: IsoCode,
    pub points: Vec<SeriesPoint<'a>>,
}

impl<'a> TimeSeries<'a> {
    /// Display name taken from the first year that has a record.
    #[must_use]
    pub fn country(&self) -> Option<&'a str> {
        self.points
            .iter()
            .find_map(|point| point.record.map(|record| record.country.as_str()))
    }

    #[must_use]
    pub fn present_years(&self) -> usize {
        self.points.iter().filter(|point| point.record.is_some()).count()
    }
}

/// Per-country history over every index year, in index year order. Series
/// follow the order of `isos` with repeats collapsed. Never fails: absent
/// (year, iso) pairs become `None` slots.
#[must_use]
pub fn time_series_for_countries<'a>(
    index: &'a DatasetIndex,
    isos: &[IsoCode],
) -> Vec<TimeSeries<'a>> {
    let mut series: Vec<TimeSeries<'a>> = Vec::with_capacity(isos.len());
    for iso in isos {
        if series.iter().any(|existing| &existing.iso == iso) {
            continue;
        }
        let points = index
            .years()
            .map(|year| SeriesPoint {
                year,
                record: record_for_country(index, year, iso),
            })
            .collect();
        series.push(TimeSeries {
            iso: iso.clone(),
            points,
        });
    }
    series
}
