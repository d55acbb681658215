// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use csv::ReaderBuilder;

use crate::raw::{RawRow, REQUIRED_COLUMNS};
use crate::{IngestError, IngestErrorCode, IngestOptions};

/// Streams typed rows out of delimited text. The header is checked up front
/// so a missing column fails before any row is decoded.
pub(crate) fn read_rows<R: Read>(
    reader: R,
    opts: &IngestOptions,
) -> Result<impl Iterator<Item = Result<RawRow, IngestError>>, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h.trim_start_matches('\u{feff}') == *col))
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::new(
            IngestErrorCode::MissingColumn,
            format!("input is missing required columns: {}", missing.join(", ")),
        ));
    }

    Ok(rdr
        .into_deserialize::<RawRow>()
        .map(|row| row.map_err(csv_error)))
}

fn csv_error(err: csv::Error) -> IngestError {
    let code = if err.is_io_error() {
        IngestErrorCode::Io
    } else {
        IngestErrorCode::Csv
    };
    IngestError::new(code, format!("malformed delimited input: {err}"))
}
