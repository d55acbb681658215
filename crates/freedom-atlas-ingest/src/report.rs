// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{IsoCode, Year};
use serde::Serialize;

use crate::DuplicateRowPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: Year,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePair {
    pub year: Year,
    pub iso: IsoCode,
}

/// Row that could not be placed in any year bucket. `row` counts data rows
/// from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub row: u64,
    pub year: String,
    pub iso: String,
}

/// What one load saw. Anomalies are reported here instead of failing the
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub rows_read: u64,
    pub records_indexed: u64,
    pub years: Vec<YearCount>,
    pub duplicate_policy: DuplicateRowPolicy,
    pub duplicate_pairs: Vec<DuplicatePair>,
    pub duplicates_dropped: u64,
    pub nan_fields: u64,
    pub unknown_regions: Vec<String>,
    pub skipped_rows: Vec<SkippedRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_sha256: Option<String>,
}

impl IngestReport {
    #[must_use]
    pub fn has_anomalies(&self) -> bool {
        !self.duplicate_pairs.is_empty()
            || !self.unknown_regions.is_empty()
            || !self.skipped_rows.is_empty()
    }
}
