// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeSet, HashSet};

use freedom_atlas_model::{DatasetIndex, IsoCode, Year};

use crate::logging::{fields, IngestLog, IngestStage};
use crate::raw::{decode_row, RawRow};
use crate::report::{DuplicatePair, IngestReport, SkippedRow, YearCount};
use crate::{DuplicateRowPolicy, IngestError, IngestOptions};

pub(crate) fn build_index<I>(
    rows: I,
    opts: &IngestOptions,
    log: &mut IngestLog,
) -> Result<(DatasetIndex, IngestReport), IngestError>
where
    I: IntoIterator<Item = Result<RawRow, IngestError>>,
{
    log.emit(
        IngestStage::Index,
        "index.begin",
        fields([("duplicate_policy", opts.duplicate_policy.as_str().to_string())]),
    );

    let mut builder = DatasetIndex::builder();
    let mut seen: HashSet<(Year, IsoCode)> = HashSet::new();
    let mut duplicate_pairs = Vec::new();
    let mut unknown_regions = BTreeSet::new();
    let mut skipped_rows = Vec::new();
    let mut rows_read = 0_u64;
    let mut records_indexed = 0_u64;
    let mut duplicates_dropped = 0_u64;
    let mut nan_fields = 0_u64;

    for row in rows {
        let row = row?;
        rows_read += 1;
        let (raw_year, raw_iso) = (row.year.clone(), row.iso_code.clone());
        let Some(decoded) = decode_row(row) else {
            tracing::warn!(
                row = rows_read,
                year = %raw_year,
                iso = %raw_iso,
                "skipping row with unparseable year"
            );
            skipped_rows.push(SkippedRow {
                row: rows_read,
                year: raw_year,
                iso: raw_iso,
            });
            continue;
        };

        let key = (decoded.year, decoded.record.iso.clone());
        if !seen.insert(key) {
            duplicate_pairs.push(DuplicatePair {
                year: decoded.year,
                iso: decoded.record.iso.clone(),
            });
            if opts.duplicate_policy == DuplicateRowPolicy::KeepFirst {
                duplicates_dropped += 1;
                continue;
            }
        }
        if !decoded.record.region.is_known() {
            unknown_regions.insert(decoded.record.region.as_str().to_string());
        }
        nan_fields += decoded.nan_fields;
        builder.push(decoded.year, decoded.record);
        records_indexed += 1;
    }

    let index = builder.finish();
    let years = index
        .buckets()
        .iter()
        .map(|bucket| YearCount {
            year: bucket.year,
            records: bucket.records.len(),
        })
        .collect();

    if !duplicate_pairs.is_empty() {
        tracing::warn!(
            count = duplicate_pairs.len(),
            policy = opts.duplicate_policy.as_str(),
            "duplicate (year, iso) rows in input"
        );
    }
    log.emit(
        IngestStage::Index,
        "index.complete",
        fields([
            ("rows_read", rows_read.to_string()),
            ("records_indexed", records_indexed.to_string()),
            ("years", index.year_count().to_string()),
        ]),
    );

    let report = IngestReport {
        rows_read,
        records_indexed,
        years,
        duplicate_policy: opts.duplicate_policy,
        duplicate_pairs,
        duplicates_dropped,
        nan_fields,
        unknown_regions: unknown_regions.into_iter().collect(),
        skipped_rows,
        input_sha256: None,
    };
    Ok((index, report))
}
