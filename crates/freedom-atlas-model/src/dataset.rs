// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{CountryYearRecord, Year};

/// All records of one year, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBucket {
    pub year: Year,
    pub records: Vec<CountryYearRecord>,
}

/// Year-keyed table built once at load time. Years keep their first-seen
/// order; nothing mutates the index after [`DatasetIndexBuilder::finish`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetIndex {
    buckets: Vec<YearBucket>,
    positions: BTreeMap<Year, usize>,
}

impl DatasetIndex {
    #[must_use]
    pub fn builder() -> DatasetIndexBuilder {
        DatasetIndexBuilder::default()
    }

    /// Records for `year`; empty when the year is absent.
    #[must_use]
    pub fn records(&self, year: Year) -> &[CountryYearRecord] {
        self.positions
            .get(&year)
            .map_or(&[], |&pos| self.buckets[pos].records.as_slice())
    }

    #[must_use]
    pub fn contains_year(&self, year: Year) -> bool {
        self.positions.contains_key(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.buckets.iter().map(|bucket| bucket.year)
    }

    #[must_use]
    pub fn buckets(&self) -> &[YearBucket] {
        &self.buckets
    }

    #[must_use]
    pub fn year_count(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|b| b.records.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DatasetIndexBuilder {
    index: DatasetIndex,
}

impl DatasetIndexBuilder {
    /// Appends to the year's bucket, creating it after the existing ones on
    /// first sight.
    pub fn push(&mut self, year: Year, record: CountryYearRecord) -> &mut Self {
        let index = &mut self.index;
        let pos = match index.positions.get(&year) {
            Some(&pos) => pos,
            None => {
                index.buckets.push(YearBucket {
                    year,
                    records: Vec::new(),
                });
                let pos = index.buckets.len() - 1;
                index.positions.insert(year, pos);
                pos
            }
        };
        index.buckets[pos].records.push(record);
        self
    }

    #[must_use]
    pub fn records(&self, year: Year) -> &[CountryYearRecord] {
        self.index.records(year)
    }

    #[must_use]
    pub fn finish(self) -> DatasetIndex {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IsoCode, Region};

    fn rec(iso: &str) -> CountryYearRecord {
        CountryYearRecord::new(
            IsoCode::from_source(iso),
            iso,
            Region::new("Western Europe"),
            7.0,
            7.0,
            7.0,
        )
    }

    #[test]
    fn buckets_keep_first_seen_year_order() {
        let mut builder = DatasetIndex::builder();
        builder.push(2016, rec("AUT"));
        builder.push(2008, rec("AUT"));
        builder.push(2016, rec("DEU"));
        let index = builder.finish();

        assert_eq!(index.years().collect::<Vec<_>>(), vec![2016, 2008]);
        let isos: Vec<&str> = index.records(2016).iter().map(|r| r.iso.as_str()).collect();
        assert_eq!(isos, vec!["AUT", "DEU"]);
        assert_eq!(index.record_count(), 3);
    }

    #[test]
    fn absent_year_yields_empty_slice() {
        let index = DatasetIndex::builder().finish();
        assert!(index.records(1999).is_empty());
        assert!(!index.contains_year(1999));
        assert!(index.is_empty());
    }
}
