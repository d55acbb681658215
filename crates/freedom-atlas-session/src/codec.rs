// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_model::{IsoCode, SELECTION_DELIMITER};

use crate::Selection;

/// Stored form of a selection: every iso followed by a `,`, so two countries
/// read `"AUT,DEU,"` and an empty selection is `""`.
#[must_use]
pub fn serialize(selection: &Selection) -> String {
    let mut out = String::with_capacity(selection.len() * 4);
    for iso in selection {
        out.push_str(iso.as_str());
        out.push(SELECTION_DELIMITER);
    }
    out
}

/// Inverse of [`serialize`]. Empty tokens (the trailing one included) are
/// dropped and the result is sanitized like [`Selection::from_isos`].
#[must_use]
pub fn deserialize(raw: &str) -> Selection {
    Selection::from_isos(tokens(raw))
}

pub(crate) fn tokens(raw: &str) -> impl Iterator<Item = IsoCode> + '_ {
    raw.split(SELECTION_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(IsoCode::from_source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(codes: &[&str]) -> Selection {
        Selection::from_isos(codes.iter().map(|c| IsoCode::from_source(c)))
    }

    #[test]
    fn wire_form_has_trailing_delimiter() {
        assert_eq!(serialize(&sel(&[])), "");
        assert_eq!(serialize(&sel(&["AUT"])), "AUT,");
        assert_eq!(serialize(&sel(&["AUT", "DEU", "FRA", "USA"])), "AUT,DEU,FRA,USA,");
    }

    #[test]
    fn round_trips_reference_selections() {
        for codes in [&[][..], &["AUT"][..], &["AUT", "DEU", "FRA", "USA"][..]] {
            let original = sel(codes);
            assert_eq!(deserialize(&serialize(&original)), original);
        }
    }

    #[test]
    fn tolerates_hand_edited_values() {
        assert_eq!(deserialize("AUT,,DEU"), sel(&["AUT", "DEU"]));
        assert_eq!(deserialize(" AUT , AUT ,"), sel(&["AUT"]));
        assert_eq!(deserialize("A,B,C,D,E,"), sel(&["A", "B", "C", "D"]));
        assert!(deserialize(",,").is_empty());
    }
}
