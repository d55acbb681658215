// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{CountryYearRecord, IsoCode, Metric, Region};

#[test]
fn record_serializes_missing_scores_as_null() {
    let record = CountryYearRecord::new(
        IsoCode::from_source("AUT"),
        "Austria",
        Region::new("Western Europe"),
        8.57,
        f64::NAN,
        7.69,
    );
    let value = serde_json::to_value(&record).expect("encode");
    assert_eq!(value["iso"], "AUT");
    assert_eq!(value["region"], "Western Europe");
    assert_eq!(value["hf_score"], 8.57);
    assert!(value["pf_score"].is_null());
}

#[test]
fn record_reads_back_its_own_output() {
    let record = CountryYearRecord::new(
        IsoCode::from_source("SYR"),
        "Syria",
        Region::new("Middle East & North Africa"),
        f64::NAN,
        4.1,
        f64::NAN,
    );
    let text = serde_json::to_string(&record).expect("encode");
    let decoded: CountryYearRecord = serde_json::from_str(&text).expect("decode");
    assert_eq!(decoded.iso.as_str(), "SYR");
    assert!(decoded.hf_score.is_nan());
    assert!(decoded.ef_score.is_nan());
    assert_eq!(decoded.pf_score, 4.1);
}

#[test]
fn metric_uses_source_column_names_on_the_wire() {
    assert_eq!(
        serde_json::to_string(&Metric::PfScore).expect("encode"),
        "\"pf_score\""
    );
    let decoded: Metric = serde_json::from_str("\"ef_score\"").expect("decode");
    assert_eq!(decoded, Metric::EfScore);
    assert!(serde_json::from_str::<Metric>("\"gdp\"").is_err());
}

#[test]
fn iso_and_region_are_transparent_strings() {
    let iso: IsoCode = serde_json::from_str("\"DEU\"").expect("iso");
    assert_eq!(iso.as_str(), "DEU");
    let region: Region = serde_json::from_str("\"East Asia\"").expect("region");
    assert_eq!(region.short_name(), "East Asia");
}
