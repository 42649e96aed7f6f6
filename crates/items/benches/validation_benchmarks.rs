use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use itemservice_items::{ItemPayload, MessageCatalog, RuleSet, RuleSetConfig};

fn sample_payloads() -> Vec<(&'static str, ItemPayload)> {
    vec![
        ("valid", ItemPayload::new("TV", 100_000, 10)),
        ("low_price", ItemPayload::new("book", 500, 10)),
        ("blank_name", ItemPayload::new("", 1000, 1)),
        ("empty", ItemPayload::default()),
    ]
}

fn bench_rule_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_set_validate");
    group.throughput(Throughput::Elements(1));

    let strict = RuleSet::default();
    let lenient = RuleSet::new(RuleSetConfig {
        validate_name_and_price_and_quantity: false,
    });

    for (label, payload) in sample_payloads() {
        group.bench_with_input(BenchmarkId::new("strict", label), &payload, |b, p| {
            b.iter(|| black_box(strict.validate(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("cross_field_only", label), &payload, |b, p| {
            b.iter(|| black_box(lenient.validate(black_box(p))));
        });
    }

    group.finish();
}

fn bench_message_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_rendering");
    let catalog = MessageCatalog::default();
    let violations = RuleSet::default().validate(&ItemPayload::default());

    group.bench_function("render_all_fields", |b| {
        b.iter(|| {
            for v in &violations {
                black_box(catalog.render(black_box(v)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rule_set, bench_message_rendering);
criterion_main!(benches);
