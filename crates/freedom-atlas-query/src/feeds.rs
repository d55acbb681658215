// SPDX-License-Identifier: Apache-2.0

//! Record sequences each view draws, derived from the index and the current
//! selection. Nothing here knows about layout or colour.

use std::slice;

use freedom_atlas_model::{CountryYearRecord, DatasetIndex, IsoCode, Metric, Region, Year};
use serde::Serialize;

use crate::filters::{records_for_countries, records_for_regions, regions_for_countries};
use crate::series::time_series_for_countries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarChartMode {
    /// Nothing selected: one bar per country of the default region.
    Regional,
    /// One group of bars per selected country, one bar per metric.
    Grouped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartFeed<'a> {
    pub mode: BarChartMode,
    pub year: Year,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub metrics: Vec<Metric>,
    pub records: Vec<&'a CountryYearRecord>,
}

#[must_use]
pub fn bar_chart_feed<'a>(
    index: &'a DatasetIndex,
    selection: &[IsoCode],
    year: Year,
    default_region: &Region,
) -> BarChartFeed<'a> {
    if selection.is_empty() {
        return BarChartFeed {
            mode: BarChartMode::Regional,
            year,
            region: Some(default_region.clone()),
            metrics: vec![Metric::HfScore],
            records: records_for_regions(index, year, slice::from_ref(default_region)),
        };
    }
    BarChartFeed {
        mode: BarChartMode::Grouped,
        year,
        region: None,
        metrics: Metric::ALL.to_vec(),
        records: records_for_countries(index, year, selection),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub year: Year,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries<'a> {
    pub iso: IsoCode,
    pub country: Option<&'a str>,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartFeed<'a> {
    pub metric: Metric,
    /// True when the selection was empty and the fallback country is shown.
    pub fallback: bool,
    pub series: Vec<LineSeries<'a>>,
}

/// One series per selected country in selection order. Years without a row
/// or with a missing score are left out of the series.
#[must_use]
pub fn line_chart_feed<'a>(
    index: &'a DatasetIndex,
    selection: &[IsoCode],
    metric: Metric,
    fallback_iso: &IsoCode,
) -> LineChartFeed<'a> {
    let fallback = selection.is_empty();
    let isos = if fallback {
        slice::from_ref(fallback_iso)
    } else {
        selection
    };
    let series = time_series_for_countries(index, isos)
        .into_iter()
        .map(|ts| {
            let country = ts.country();
            let points = ts
                .points
                .iter()
                .filter_map(|point| {
                    let value = point.record?.finite_score(metric)?;
                    Some(LinePoint {
                        year: point.year,
                        value,
                    })
                })
                .collect();
            LineSeries {
                iso: ts.iso,
                country,
                points,
            }
        })
        .collect();
    LineChartFeed {
        metric,
        fallback,
        series,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    pub iso: &'a IsoCode,
    pub country: &'a str,
    pub region: &'a Region,
    pub x: f64,
    pub y: f64,
    pub selected: bool,
    /// The country shares a region with at least one selected country.
    pub peer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFeed<'a> {
    pub year: Year,
    pub x_metric: Metric,
    pub y_metric: Metric,
    pub points: Vec<ScatterPoint<'a>>,
    /// Records left out because either coordinate was missing.
    pub excluded: usize,
}

#[must_use]
pub fn scatter_feed<'a>(
    index: &'a DatasetIndex,
    year: Year,
    x_metric: Metric,
    y_metric: Metric,
    selection: &[IsoCode],
) -> ScatterFeed<'a> {
    let peer_regions = regions_for_countries(index, year, selection);
    let records = index.records(year);
    let points: Vec<ScatterPoint<'a>> = records
        .iter()
        .filter_map(|record| {
            let x = record.finite_score(x_metric)?;
            let y = record.finite_score(y_metric)?;
            Some(ScatterPoint {
                iso: &record.iso,
                country: &record.country,
                region: &record.region,
                x,
                y,
                selected: selection.contains(&record.iso),
                peer: peer_regions.contains(&&record.region),
            })
        })
        .collect();
    ScatterFeed {
        year,
        x_metric,
        y_metric,
        excluded: records.len() - points.len(),
        points,
    }
}
