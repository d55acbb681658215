// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Freedom atlas model SSOT: country-year records, the year index they live
//! in, the region catalogue and the map's geography document.

mod country;
mod dataset;
mod defaults;
mod geo;
mod region;

pub use country::{CountryYearRecord, IsoCode, Metric, ParseError, Year, ISO_LEN};
pub use dataset::{DatasetIndex, DatasetIndexBuilder, YearBucket};
pub use defaults::{
    DEFAULT_REGION, DEFAULT_YEAR, FALLBACK_LINE_ISO, MAX_SELECTIONS, SELECTION_DELIMITER,
    SESSION_STORAGE_KEY,
};
pub use geo::{GeoFeature, GeoProperties, Geography, GeographyError};
pub use region::{known_regions, Region, KNOWN_REGIONS};

pub const CRATE_NAME: &str = "freedom-atlas-model";
