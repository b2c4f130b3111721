// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for class-set composition and component rendering.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use strapline_components::{Button, Col, Table};
use strapline_style::{Attributes, ClassSet, Size, StyleProps, Variant, class_set, split_style_props};

fn bench_class_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("style/class_set");

    let props = StyleProps::new()
        .with_base_class("btn")
        .with_size(Size::Large)
        .with_variant(Variant::PRIMARY);
    group.bench_function("base_size_variant", |b| {
        b.iter(|| black_box(class_set(black_box(&props))));
    });

    for tokens in [4_usize, 16, 64] {
        group.bench_function(BenchmarkId::new("insert_override", tokens), |b| {
            b.iter(|| {
                let mut set = ClassSet::new();
                for i in 0..tokens {
                    set.insert(format!("c{}", i % (tokens / 2)), i % 3 != 0);
                }
                black_box(set.to_class_name(Some("extra")))
            });
        });
    }

    let attrs: Attributes = [
        ("bs-class", "btn"),
        ("bs-size", "lg"),
        ("id", "save"),
        ("title", "Save"),
        ("aria-label", "Save"),
    ]
    .into_iter()
    .collect();
    group.bench_function("split_style_props", |b| {
        b.iter_batched(
            || attrs.clone(),
            |attrs| black_box(split_style_props(attrs, &[])),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("components/render");

    let button = Button::new()
        .with_size(Size::Small)
        .with_variant(Variant::SUCCESS)
        .with_active(true)
        .with_child("Save");
    group.bench_function("button", |b| b.iter(|| black_box(button.render())));
    group.bench_function("button_html", |b| {
        b.iter(|| black_box(button.render().to_string()));
    });

    let col = Col::new()
        .with_span(Size::XSmall, 12)
        .with_span(Size::Medium, 6)
        .with_offset(Size::Medium, 3)
        .with_hidden(Size::Large);
    group.bench_function("col", |b| b.iter(|| black_box(col.render())));

    let table = Table::new()
        .with_striped(true)
        .with_bordered(true)
        .with_responsive(true);
    group.bench_function("responsive_table", |b| b.iter(|| black_box(table.render())));

    group.finish();
}

criterion_group!(benches, bench_class_set, bench_render);
criterion_main!(benches);
