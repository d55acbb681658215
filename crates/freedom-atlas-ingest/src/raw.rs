// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{CountryYearRecord, IsoCode, Region, Year};
use serde::Deserialize;

/// Column names the loader understands; every other column is dropped.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "year",
    "ISO_code",
    "countries",
    "region",
    "hf_score",
    "pf_score",
    "ef_score",
];

/// One input row with only the recognized fields extracted, all still text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub year: String,
    #[serde(rename = "ISO_code")]
    pub iso_code: String,
    pub countries: String,
    pub region: String,
    pub hf_score: String,
    pub pf_score: String,
    pub ef_score: String,
}

impl RawRow {
    #[must_use]
    pub fn new(
        year: &str,
        iso_code: &str,
        countries: &str,
        region: &str,
        scores: [&str; 3],
    ) -> Self {
        Self {
            year: year.to_string(),
            iso_code: iso_code.to_string(),
            countries: countries.to_string(),
            region: region.to_string(),
            hf_score: scores[0].to_string(),
            pf_score: scores[1].to_string(),
            ef_score: scores[2].to_string(),
        }
    }
}

/// Text to score. Blank, placeholder (`-`) and non-finite values become
/// `NaN`, never zero.
#[must_use]
pub fn coerce_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

#[must_use]
pub fn coerce_year(raw: &str) -> Option<Year> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<Year>() {
        return Some(year);
    }
    // "2016.0" style exports
    match trimmed.parse::<f64>() {
        Ok(value)
            if value.fract() == 0.0
                && (f64::from(Year::MIN)..=f64::from(Year::MAX)).contains(&value) =>
        {
            Some(value as Year)
        }
        _ => None,
    }
}

pub(crate) struct DecodedRow {
    pub year: Year,
    pub record: CountryYearRecord,
    pub nan_fields: u64,
}

pub(crate) fn decode_row(row: RawRow) -> Option<DecodedRow> {
    let year = coerce_year(&row.year)?;
    let scores = [
        coerce_score(&row.hf_score),
        coerce_score(&row.pf_score),
        coerce_score(&row.ef_score),
    ];
    let nan_fields = scores.iter().filter(|s| s.is_nan()).count() as u64;
    Some(DecodedRow {
        year,
        record: CountryYearRecord::new(
            IsoCode::from_source(&row.iso_code),
            row.countries,
            Region::new(row.region),
            scores[0],
            scores[1],
            scores[2],
        ),
        nan_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_coerce_permissively() {
        assert_eq!(coerce_score("7.5"), 7.5);
        assert_eq!(coerce_score(" 6.25 "), 6.25);
        assert!(coerce_score("-").is_nan());
        assert!(coerce_score("").is_nan());
        assert!(coerce_score("n/a").is_nan());
        assert!(coerce_score("inf").is_nan());
    }

    #[test]
    fn years_accept_integer_like_text_only() {
        assert_eq!(coerce_year("2016"), Some(2016));
        assert_eq!(coerce_year(" 2008 "), Some(2008));
        assert_eq!(coerce_year("2016.0"), Some(2016));
        assert_eq!(coerce_year("2016.5"), None);
        assert_eq!(coerce_year("1e12"), None);
        assert_eq!(coerce_year("-1e12"), None);
        assert_eq!(coerce_year("NaN"), None);
        assert_eq!(coerce_year("year"), None);
    }

    #[test]
    fn decode_counts_nan_fields() {
        let decoded = decode_row(RawRow::new(
            "2016",
            "AUT",
            "Austria",
            "Western Europe",
            ["8.5", "-", ""],
        ))
        .expect("decoded");
        assert_eq!(decoded.year, 2016);
        assert_eq!(decoded.nan_fields, 2);
        assert_eq!(decoded.record.iso.as_str(), "AUT");
        assert_eq!(decoded.record.country, "Austria");
    }
}
