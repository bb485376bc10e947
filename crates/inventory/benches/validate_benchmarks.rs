use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

use stockroom_inventory::validate;

fn valid_payload(i: usize) -> Value {
    let sku = if i % 2 == 0 { format!("SKU-{i}") } else { String::new() };
    json!({
        "name": format!("Widget {i}"),
        "sku": sku,
        "listing_price": (i as f64) * 1.25,
        "default_cogs": (i as f64) * 0.5,
        "inventory_group_id": format!("{}", i % 17 + 1),
    })
}

fn invalid_payload(i: usize) -> Value {
    json!({
        "name": "W",
        "sku": i,
        "listing_price": -1.0 - i as f64,
        "inventory_group_id": "",
    })
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [1usize, 100, 1_000] {
        let valid: Vec<Value> = (0..size).map(valid_payload).collect();
        let invalid: Vec<Value> = (0..size).map(invalid_payload).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("accepted", size), &valid, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    let _ = black_box(validate(black_box(input)));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("rejected", size), &invalid, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    let _ = black_box(validate(black_box(input)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
