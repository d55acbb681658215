// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{CountryYearRecord, DatasetIndex, IsoCode, Region, Year};

/// Every record of `year` in source order; empty when the year is absent.
#[must_use]
pub fn all_records_for_year(index: &DatasetIndex, year: Year) -> &[CountryYearRecord] {
    index.records(year)
}

/// Records whose region is one of `regions`. Matching is exact and
/// case-sensitive.
#[must_use]
pub fn records_for_regions<'a>(
    index: &'a DatasetIndex,
    year: Year,
    regions: &[Region],
) -> Vec<&'a CountryYearRecord> {
    index
        .records(year)
        .iter()
        .filter(|record| regions.contains(&record.region))
        .collect()
}

#[must_use]
pub fn records_for_countries<'a>(
    index: &'a DatasetIndex,
    year: Year,
    isos: &[IsoCode],
) -> Vec<&'a CountryYearRecord> {
    index
        .records(year)
        .iter()
        .filter(|record| isos.contains(&record.iso))
        .collect()
}

/// First record for `iso` at `year` in source order.
#[must_use]
pub fn record_for_country<'a>(
    index: &'a DatasetIndex,
    year: Year,
    iso: &IsoCode,
) -> Option<&'a CountryYearRecord> {
    index.records(year).iter().find(|record| &record.iso == iso)
}

/// Distinct regions of the selected countries, in the order the isos are
/// given. An iso without a record at `year` contributes nothing.
#[must_use]
pub fn regions_for_countries<'a>(
    index: &'a DatasetIndex,
    year: Year,
    isos: &[IsoCode],
) -> Vec<&'a Region> {
    let mut regions: Vec<&Region> = Vec::new();
    for iso in isos {
        let Some(record) = record_for_country(index, year, iso) else {
            continue;
        };
        if !regions.contains(&&record.region) {
            regions.push(&record.region);
        }
    }
    regions
}

#[must_use]
pub fn distinct_regions(index: &DatasetIndex, year: Year) -> Vec<&Region> {
    let mut regions: Vec<&Region> = Vec::new();
    for record in index.records(year) {
        if !regions.contains(&&record.region) {
            regions.push(&record.region);
        }
    }
    regions
}

#[must_use]
pub fn years(index: &DatasetIndex) -> Vec<Year> {
    index.years().collect()
}
