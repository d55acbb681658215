// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod csv_source;
mod geography;
mod hashing;
mod index;
mod logging;
mod raw;
mod report;

use std::fmt::{Display, Formatter};
use std::io::Read;
use std::path::Path;

use freedom_atlas_model::DatasetIndex;
use logging::fields;
use serde::Serialize;

pub const CRATE_NAME: &str = "freedom-atlas-ingest";

#[cfg(feature = "remote-geo")]
pub use geography::HttpFetch;
pub use geography::{load_geography, OfflineFetch, StaticFetch};
pub use hashing::{hash_file, read_and_hash};
pub use logging::{IngestEvent, IngestLog, IngestStage};
pub use raw::{coerce_score, coerce_year, RawRow, REQUIRED_COLUMNS};
pub use report::{DuplicatePair, IngestReport, SkippedRow, YearCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestErrorCode {
    Io,
    Csv,
    MissingColumn,
    Fetch,
    Geography,
}

impl IngestErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "io_error",
            Self::Csv => "malformed_input",
            Self::MissingColumn => "missing_column",
            Self::Fetch => "fetch_failed",
            Self::Geography => "invalid_geography",
        }
    }

    /// True when the failure lies outside the input itself (disk, network).
    #[must_use]
    pub const fn is_dependency_failure(self) -> bool {
        matches!(self, Self::Io | Self::Fetch)
    }
}

/// Load-time failure. Always fatal for the session; never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestError {
    pub code: IngestErrorCode,
    pub message: String,
}

impl IngestError {
    #[must_use]
    pub fn new(code: IngestErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for IngestError {}

/// What happens to a second row for a (year, iso) pair already indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateRowPolicy {
    /// Keep every row; filters return all of them in source order.
    #[default]
    KeepAll,
    KeepFirst,
}

impl DuplicateRowPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepAll => "keep_all",
            Self::KeepFirst => "keep_first",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub delimiter: u8,
    pub duplicate_policy: DuplicateRowPolicy,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            duplicate_policy: DuplicateRowPolicy::KeepAll,
        }
    }
}

/// A built index together with what the load observed.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub index: DatasetIndex,
    pub report: IngestReport,
    pub events: Vec<IngestEvent>,
}

/// Builds the year index from already-typed rows with default options.
pub fn load<I>(rows: I) -> Result<DatasetIndex, IngestError>
where
    I: IntoIterator<Item = RawRow>,
{
    load_rows(rows, &IngestOptions::default()).map(|loaded| loaded.index)
}

pub fn load_rows<I>(rows: I, opts: &IngestOptions) -> Result<LoadedDataset, IngestError>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut log = IngestLog::default();
    log.emit(IngestStage::Prepare, "ingest.start", fields([("source", "rows".to_string())]));
    let (index, report) = index::build_index(rows.into_iter().map(Ok), opts, &mut log)?;
    Ok(finish(index, report, log))
}

pub fn load_csv_reader<R: Read>(
    reader: R,
    opts: &IngestOptions,
) -> Result<LoadedDataset, IngestError> {
    let mut log = IngestLog::default();
    log.emit(IngestStage::Prepare, "ingest.start", fields([("source", "reader".to_string())]));
    let rows = csv_source::read_rows(reader, opts)?;
    log.emit(IngestStage::Decode, "ingest.header.ok", Default::default());
    let (index, report) = index::build_index(rows, opts, &mut log)?;
    Ok(finish(index, report, log))
}

pub fn load_csv_path(path: &Path, opts: &IngestOptions) -> Result<LoadedDataset, IngestError> {
    let mut log = IngestLog::default();
    log.emit(
        IngestStage::Prepare,
        "ingest.start",
        fields([("source", path.display().to_string())]),
    );
    let (bytes, digest) = read_and_hash(path)?;
    log.emit(
        IngestStage::Decode,
        "ingest.input.read",
        fields([("bytes", bytes.len().to_string()), ("sha256", digest.clone())]),
    );
    let rows = csv_source::read_rows(bytes.as_slice(), opts)?;
    let (index, mut report) = index::build_index(rows, opts, &mut log)?;
    report.input_sha256 = Some(digest);
    tracing::info!(
        path = %path.display(),
        years = index.year_count(),
        records = index.record_count(),
        "dataset loaded"
    );
    Ok(finish(index, report, log))
}

fn finish(index: DatasetIndex, report: IngestReport, mut log: IngestLog) -> LoadedDataset {
    log.emit(
        IngestStage::Finalize,
        "ingest.complete",
        fields([("anomalies", report.has_anomalies().to_string())]),
    );
    LoadedDataset {
        index,
        report,
        events: log.into_events(),
    }
}

#[cfg(test)]
mod tests;
