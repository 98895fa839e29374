//! FILENAME: core/engine/benches/pipeline.rs
//! Benchmarks for normalize -> filter -> sort -> aggregate on a synthetic survey.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use survey_engine::{
    aggregate, filter, normalize, sort, ColumnMapping, FilterState, RecordField, SortDirection,
};

const PLATFORMS: [&str; 6] = ["Twitter", "facebook", "INSTAGRAM", "Snapchat", "Tiktok", "None"];

fn synthetic_rows(count: usize) -> Vec<HashMap<String, String>> {
    (0..count)
        .map(|i| {
            let mut row = HashMap::new();
            let (segment_type, description) = if i % 3 == 0 {
                ("Gender".to_string(), if i % 2 == 0 { "Male" } else { "Female" }.to_string())
            } else {
                ("University".to_string(), format!("University {}", i % 97))
            };
            row.insert("Segment Type".to_string(), segment_type);
            row.insert("Segment Description".to_string(), description);
            row.insert("Answer".to_string(), PLATFORMS[i % PLATFORMS.len()].to_string());
            row.insert("Count".to_string(), ((i * 7) % 50 + 1).to_string());
            row
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let mapping = ColumnMapping::default();

    for size in [1_000usize, 10_000, 100_000] {
        let rows = synthetic_rows(size);

        group.bench_with_input(BenchmarkId::new("normalize", size), &rows, |b, rows| {
            b.iter(|| normalize(black_box(rows), &mapping))
        });

        let records = normalize(&rows, &mapping);
        let state = FilterState {
            segment_type: "University".to_string(),
            ..FilterState::default()
        };

        group.bench_with_input(BenchmarkId::new("filter_sort_aggregate", size), &records, |b, records| {
            b.iter(|| {
                let filtered = filter(black_box(records), &state);
                let sorted = sort(&filtered, RecordField::Count, SortDirection::Descending);
                aggregate(&sorted)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
