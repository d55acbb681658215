// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use freedom_atlas_ingest::{load_csv_path, load_csv_reader, IngestErrorCode, IngestOptions};
use tempfile::tempdir;

#[test]
fn missing_file_is_an_io_failure() {
    let dir = tempdir().expect("tmp");
    let err = load_csv_path(&dir.path().join("absent.csv"), &IngestOptions::default())
        .expect_err("missing file must fail");
    assert_eq!(err.code, IngestErrorCode::Io);
    assert!(err.code.is_dependency_failure());
}

#[test]
fn missing_required_column_fails_before_rows() {
    let text = "year,ISO_code,countries,hf_score,pf_score,ef_score\n2016,AUT,Austria,8,9,7\n";
    let err = load_csv_reader(text.as_bytes(), &IngestOptions::default())
        .expect_err("missing region must fail");
    assert_eq!(err.code, IngestErrorCode::MissingColumn);
    assert!(err.message.contains("region"), "unexpected error: {}", err.message);
}

#[test]
fn ragged_rows_are_malformed_input() {
    let dir = tempdir().expect("tmp");
    let path = dir.path().join("ragged.csv");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(file, "year,ISO_code,countries,region,hf_score,pf_score,ef_score").expect("write");
    writeln!(file, "2016,AUT,Austria,Western Europe,8.5").expect("write");
    drop(file);

    let err = load_csv_path(&path, &IngestOptions::default()).expect_err("ragged must fail");
    assert_eq!(err.code, IngestErrorCode::Csv);
    assert!(!err.code.is_dependency_failure());
}
