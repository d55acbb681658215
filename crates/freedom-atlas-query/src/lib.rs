// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Read-only queries over the year index and the per-view feeds built on
//! them. Every function borrows the index and allocates only its result.

mod choropleth;
mod feeds;
mod filters;
mod series;

pub use choropleth::{choropleth_feed, ChoroplethCell, ChoroplethFeed};
pub use feeds::{
    bar_chart_feed, line_chart_feed, scatter_feed, BarChartFeed, BarChartMode, LineChartFeed,
    LinePoint, LineSeries, ScatterFeed, ScatterPoint,
};
pub use filters::{
    all_records_for_year, distinct_regions, record_for_country, records_for_countries,
    records_for_regions, regions_for_countries, years,
};
pub use series::{time_series_for_countries, SeriesPoint, TimeSeries};

pub const CRATE_NAME: &str = "freedom-atlas-query";
