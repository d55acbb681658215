// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freedom_atlas_model::{
    CountryYearRecord, DatasetIndex, IsoCode, Metric, Region, KNOWN_REGIONS,
};
use freedom_atlas_query::{
    records_for_countries, records_for_regions, scatter_feed, time_series_for_countries,
};

fn synthetic_index() -> DatasetIndex {
    let mut builder = DatasetIndex::builder();
    for year in 2008..=2016 {
        for n in 0..162_u32 {
            let iso = format!("C{:02}", n % 100);
            let (region, _) = KNOWN_REGIONS[(n as usize) % KNOWN_REGIONS.len()];
            let score = f64::from(n % 10);
            builder.push(
                year,
                CountryYearRecord::new(
                    IsoCode::from_source(&format!("{iso}{}", n / 100)),
                    iso,
                    Region::new(region),
                    score,
                    score,
                    score,
                ),
            );
        }
    }
    builder.finish()
}

fn bench_queries(c: &mut Criterion) {
    let index = synthetic_index();
    let selection: Vec<IsoCode> = ["C010", "C420", "C991", "C051"]
        .iter()
        .map(|s| IsoCode::from_source(s))
        .collect();
    let western = [Region::new("Western Europe")];

    c.bench_function("records_for_countries", |b| {
        b.iter(|| records_for_countries(black_box(&index), 2016, black_box(&selection)).len())
    });
    c.bench_function("records_for_regions", |b| {
        b.iter(|| records_for_regions(black_box(&index), 2016, black_box(&western)).len())
    });
    c.bench_function("time_series_four_countries", |b| {
        b.iter(|| time_series_for_countries(black_box(&index), black_box(&selection)).len())
    });
    c.bench_function("scatter_feed", |b| {
        b.iter(|| {
            scatter_feed(black_box(&index), 2016, Metric::HfScore, Metric::PfScore, &selection)
                .points
                .len()
        })
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
