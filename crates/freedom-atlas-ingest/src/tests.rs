// SPDX-License-Identifier: Apache-2.0

use super::*;

fn row(year: &str, iso: &str, region: &str, hf: &str) -> RawRow {
    RawRow::new(year, iso, iso, region, [hf, "8.0", "7.0"])
}

#[test]
fn load_buckets_rows_by_year_in_file_order() {
    let index = load(vec![
        row("2008", "AUT", "Western Europe", "8.1"),
        row("2009", "AUT", "Western Europe", "8.2"),
        row("2008", "DEU", "Western Europe", "8.0"),
    ])
    .expect("load");
    assert_eq!(index.years().collect::<Vec<_>>(), vec![2008, 2009]);
    assert_eq!(index.records(2008).len(), 2);
    assert_eq!(index.records(2008)[1].iso.as_str(), "DEU");
}

#[test]
fn duplicates_are_kept_by_default_and_reported() {
    let loaded = load_rows(
        vec![
            row("2016", "AUT", "Western Europe", "8.5"),
            row("2016", "AUT", "Western Europe", "1.0"),
        ],
        &IngestOptions::default(),
    )
    .expect("load");
    assert_eq!(loaded.index.records(2016).len(), 2);
    assert_eq!(loaded.report.duplicate_pairs.len(), 1);
    assert_eq!(loaded.report.duplicates_dropped, 0);
}

#[test]
fn keep_first_policy_drops_later_duplicates() {
    let opts = IngestOptions {
        duplicate_policy: DuplicateRowPolicy::KeepFirst,
        ..IngestOptions::default()
    };
    let loaded = load_rows(
        vec![
            row("2016", "AUT", "Western Europe", "8.5"),
            row("2016", "AUT", "Western Europe", "1.0"),
        ],
        &opts,
    )
    .expect("load");
    let records = loaded.index.records(2016);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hf_score, 8.5);
    assert_eq!(loaded.report.duplicates_dropped, 1);
}

#[test]
fn rows_without_a_year_are_skipped_not_fatal() {
    let loaded = load_rows(
        vec![
            row("", "AUT", "Western Europe", "8.5"),
            row("2016", "DEU", "Western Europe", "8.4"),
        ],
        &IngestOptions::default(),
    )
    .expect("load");
    assert_eq!(loaded.report.rows_read, 2);
    assert_eq!(loaded.report.records_indexed, 1);
    assert_eq!(loaded.report.skipped_rows.len(), 1);
    assert_eq!(loaded.report.skipped_rows[0].row, 1);
    assert!(loaded.report.has_anomalies());
}

#[test]
fn unknown_regions_are_kept_and_listed() {
    let loaded = load_rows(
        vec![row("2016", "ATL", "Atlantis", "9.9")],
        &IngestOptions::default(),
    )
    .expect("load");
    assert_eq!(loaded.index.records(2016).len(), 1);
    assert_eq!(loaded.report.unknown_regions, vec!["Atlantis".to_string()]);
}

#[test]
fn csv_reader_honours_custom_delimiter() {
    let text = "year;ISO_code;countries;region;hf_score;pf_score;ef_score\n\
                2016;AUT;Austria;Western Europe;8.57;9.18;7.69\n";
    let opts = IngestOptions {
        delimiter: b';',
        ..IngestOptions::default()
    };
    let loaded = load_csv_reader(text.as_bytes(), &opts).expect("load");
    assert_eq!(loaded.index.records(2016)[0].pf_score, 9.18);
}

#[test]
fn events_cover_every_stage() {
    let loaded = load_rows(
        vec![row("2016", "AUT", "Western Europe", "8.5")],
        &IngestOptions::default(),
    )
    .expect("load");
    let stages: Vec<IngestStage> = loaded.events.iter().map(|e| e.stage).collect();
    assert_eq!(stages.first(), Some(&IngestStage::Prepare));
    assert!(stages.contains(&IngestStage::Index));
    assert_eq!(stages.last(), Some(&IngestStage::Finalize));
}

#[test]
fn static_fetch_feeds_geography_loader() {
    let url = "https://example.org/world.geojson";
    let fetch = StaticFetch::default().with_document(
        url,
        r#"{"type":"FeatureCollection","features":[{"id":"AUT","properties":{"name":"Austria"},"geometry":null}]}"#,
    );
    let mut log = IngestLog::default();
    let geo = load_geography(
        &freedom_atlas_core::GeoSource::Url(url.to_string()),
        &fetch,
        &mut log,
    )
    .expect("geography");
    assert_eq!(geo.features.len(), 1);
    assert!(log.events().iter().any(|e| e.name == "geography.loaded"));
}

#[test]
fn geography_fetch_failure_is_fatal() {
    let mut log = IngestLog::default();
    let err = load_geography(
        &freedom_atlas_core::GeoSource::Url("https://example.org/missing".to_string()),
        &OfflineFetch,
        &mut log,
    )
    .expect_err("must fail");
    assert_eq!(err.code, IngestErrorCode::Fetch);
    assert!(err.code.is_dependency_failure());
}
