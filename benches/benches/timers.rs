// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for timer queue churn and debounced overlay triggers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use strapline_overlay::{OverlayTrigger, TriggerConfig, TriggerEvent};
use strapline_timing::TimerQueue;

fn bench_timer_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/queue");

    for pending in [8_u64, 64, 512] {
        group.bench_function(BenchmarkId::new("schedule_cancel", pending), |b| {
            let mut timers = TimerQueue::new();
            let ids: Vec<_> = (0..pending)
                .map(|i| timers.schedule(i * 7 % 1_000, i))
                .collect();
            let mut next = 0_usize;
            b.iter(|| {
                let id = ids[next % ids.len()];
                next += 1;
                if let Some(payload) = timers.cancel(id) {
                    black_box(timers.schedule(payload * 7 % 1_000, payload));
                }
            });
        });

        group.bench_function(BenchmarkId::new("drain", pending), |b| {
            b.iter(|| {
                let mut timers = TimerQueue::new();
                for i in 0..pending {
                    timers.schedule_after(0, i * 13 % 500, i);
                }
                black_box(timers.drain_due(u64::MAX))
            });
        });
    }

    group.finish();
}

fn bench_hover_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/hover");

    // Rapid enter/leave pairs: every request cancels the opposite one.
    group.bench_function("enter_leave_pairs", |b| {
        let config = TriggerConfig::new().with_delay_show(100).with_delay_hide(500);
        let mut trigger = OverlayTrigger::new(1_u32, config);
        let mut now = 0_u64;
        b.iter(|| {
            now += 10;
            black_box(trigger.handle(&TriggerEvent::PointerEnter, now, &()));
            black_box(trigger.handle(&TriggerEvent::PointerLeave, now + 5, &()));
            black_box(trigger.poll(now + 5))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_timer_queue, bench_hover_churn);
criterion_main!(benches);
