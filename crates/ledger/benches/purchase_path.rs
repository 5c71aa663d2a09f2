//! Benchmark for the hot path: a purchase with both file writes.

use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use shopbook_ledger::{ItemId, Ledger, StorePaths, Timestamp};

fn bench_purchase_item(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut ledger = Ledger::new(StorePaths::in_dir(dir.path()));
    let item_id = ItemId::new("BENCH1");
    let added: Timestamp = "2024-01-01 00:00:00".parse().expect("parse timestamp");
    ledger
        .add_item(item_id.clone(), "widget", "acme", dec!(10.0), i64::MAX / 2, added)
        .expect("seed item");

    c.bench_function("purchase_item", |b| {
        b.iter(|| {
            ledger
                .purchase_item(&item_id, 1, "Jane Doe", "jane@x.com")
                .expect("purchase")
        });
    });
}

criterion_group!(benches, bench_purchase_item);
criterion_main!(benches);
