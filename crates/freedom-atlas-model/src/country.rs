// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

use crate::Region;

pub type Year = i32;

pub const ISO_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    InvalidLength(&'static str, usize),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::InvalidLength(name, len) => write!(f, "{name} must be exactly {len} characters"),
            Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Three-letter country code, the primary country key everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct IsoCode(String);

impl IsoCode {
    /// Strict parse for codes typed by a user: three ASCII letters, upper-cased.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ParseError::Empty("iso code"));
        }
        if s.chars().count() != ISO_LEN {
            return Err(ParseError::InvalidLength("iso code", ISO_LEN));
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseError::InvalidFormat(
                "iso code must contain only ASCII letters",
            ));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Code as found in the source table. Ingestion does not validate codes.
    #[must_use]
    pub fn from_source(input: &str) -> Self {
        Self(input.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for IsoCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the three freedom sub-scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    #[serde(rename = "hf_score")]
    HfScore,
    #[serde(rename = "pf_score")]
    PfScore,
    #[serde(rename = "ef_score")]
    EfScore,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::HfScore, Self::PfScore, Self::EfScore];

    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::HfScore => "hf_score",
            Self::PfScore => "pf_score",
            Self::EfScore => "ef_score",
        }
    }

    #[must_use]
    pub const fn speakable_name(self) -> &'static str {
        match self {
            Self::HfScore => "Human Freedom Score",
            Self::PfScore => "Personal Freedom Score",
            Self::EfScore => "Economic Freedom Score",
        }
    }

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::HfScore => "hf score",
            Self::PfScore => "pf score",
            Self::EfScore => "ef score",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match input.trim() {
            "hf_score" | "hf" => Ok(Self::HfScore),
            "pf_score" | "pf" => Ok(Self::PfScore),
            "ef_score" | "ef" => Ok(Self::EfScore),
            _ => Err(ParseError::InvalidFormat(
                "metric must be one of hf_score, pf_score, ef_score",
            )),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// One row of the freedom index: a country in a given year. Scores missing
/// from the source are `NaN` and serialize as `null`; `null` reads back as
/// `NaN`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub struct CountryYearRecord {
    pub iso: IsoCode,
    pub country: String,
    pub region: Region,
    #[serde(deserialize_with = "score_or_nan")]
    pub hf_score: f64,
    #[serde(deserialize_with = "score_or_nan")]
    pub pf_score: f64,
    #[serde(deserialize_with = "score_or_nan")]
    pub ef_score: f64,
}

fn score_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl CountryYearRecord {
    #[must_use]
    pub fn new(
        iso: IsoCode,
        country: impl Into<String>,
        region: Region,
        hf_score: f64,
        pf_score: f64,
        ef_score: f64,
    ) -> Self {
        Self {
            iso,
            country: country.into(),
            region,
            hf_score,
            pf_score,
            ef_score,
        }
    }

    #[must_use]
    pub const fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::HfScore => self.hf_score,
            Metric::PfScore => self.pf_score,
            Metric::EfScore => self.ef_score,
        }
    }

    /// `false` when the score was missing or unparseable in the source.
    #[must_use]
    pub fn has_score(&self, metric: Metric) -> bool {
        self.score(metric).is_finite()
    }

    #[must_use]
    pub fn finite_score(&self, metric: Metric) -> Option<f64> {
        let value = self.score(metric);
        value.is_finite().then_some(value)
    }
}
