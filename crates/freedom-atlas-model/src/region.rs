// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The ten regions of the index with their short axis labels, in catalogue
/// order.
pub const KNOWN_REGIONS: [(&str, &str); 10] = [
    ("Eastern Europe", "Eastern Europe"),
    ("Middle East & North Africa", "Middle East/North Africa"),
    ("Sub-Saharan Africa", "Sub-Saharan Africa"),
    ("Latin America & the Caribbean", "Latin America"),
    ("Caucasus & Central Asia", "Central Asia"),
    ("Oceania", "Oceania"),
    ("Western Europe", "Western Europe"),
    ("South Asia", "South Asia"),
    ("North America", "North America"),
    ("East Asia", "East Asia"),
];

/// Region name exactly as it appears in the source; comparisons are
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        KNOWN_REGIONS.iter().any(|(name, _)| *name == self.0)
    }

    /// Short label for axes; unknown regions keep their full name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        KNOWN_REGIONS
            .iter()
            .find(|(name, _)| *name == self.0)
            .map_or(self.0.as_str(), |(_, short)| short)
    }

    /// Position in the catalogue, used for stable colour assignment.
    #[must_use]
    pub fn catalogue_index(&self) -> Option<usize> {
        KNOWN_REGIONS.iter().position(|(name, _)| *name == self.0)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[must_use]
pub fn known_regions() -> Vec<Region> {
    KNOWN_REGIONS.iter().map(|(name, _)| Region::new(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_follow_catalogue() {
        assert_eq!(
            Region::new("Latin America & the Caribbean").short_name(),
            "Latin America"
        );
        assert_eq!(Region::new("Atlantis").short_name(), "Atlantis");
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(Region::new("Western Europe").is_known());
        assert!(!Region::new("western europe").is_known());
        assert_eq!(Region::new("Western Europe").catalogue_index(), Some(6));
    }

    #[test]
    fn catalogue_has_ten_distinct_regions() {
        let regions = known_regions();
        assert_eq!(regions.len(), 10);
        let mut names: Vec<&str> = regions.iter().map(Region::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }
}
