//! History benchmark: append at capacity, correlation, and CSV export.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use severity_engine::features::FeatureVector;
use severity_engine::history::{
    export_csv, feature_correlations, HistoryStore, PredictionRecord,
};
use severity_engine::severity::SeverityClass;

fn full_store() -> HistoryStore {
    let mut store = HistoryStore::default();
    for i in 0..50 {
        let f = FeatureVector {
            distance: f64::from(i),
            time_duration: f64::from(i * 3 + 1),
            ..FeatureVector::default()
        };
        let class = SeverityClass::from_raw(i64::from(i % 4)).unwrap();
        store.append(PredictionRecord::new(f, class));
    }
    store
}

fn bench_append_at_capacity(c: &mut Criterion) {
    let mut store = full_store();
    c.bench_function("append_evicting", |b| {
        b.iter(|| {
            store.append(black_box(PredictionRecord::new(
                FeatureVector::default(),
                SeverityClass::Minor,
            )))
        })
    });
}

fn bench_feature_correlations(c: &mut Criterion) {
    let records = full_store().snapshot();
    c.bench_function("feature_correlations_50", |b| {
        b.iter(|| feature_correlations(black_box(&records)))
    });
}

fn bench_export_csv(c: &mut Criterion) {
    let records = full_store().snapshot();
    c.bench_function("export_csv_50", |b| {
        b.iter(|| export_csv(black_box(&records)))
    });
}

criterion_group!(
    benches,
    bench_append_at_capacity,
    bench_feature_correlations,
    bench_export_csv
);
criterion_main!(benches);
