//! Compare serial vs parallel optimization run times.
//!
//! Run with: `cargo bench -p rc-optimizer --bench optimizer`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rc_optimizer::Optimizer;
use rc_types::{OptimizationConfig, Parallelism, Skill};

/// A shortened window over a gear-heavy roster so each iteration stays fast.
fn roster() -> Vec<Skill> {
    vec![
        Skill::new("Fireball", 1.0, 6.7, 10300.0).with_gear(vec![0.0, 15.0]),
        Skill::new("Fire Storm", 3.0, 15.0, 11100.0).with_gear(vec![0.0, 30.0]),
        Skill::new("Ice Blast", 4.0, 20.0, 14000.0),
        Skill::new("Ice Shards", 2.0, 15.0, 11765.0).with_gear(vec![0.0, 30.0]),
        Skill::new("Pet", 1.0, 15.0, 2400.0),
    ]
}

fn bench_optimizer_serial_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizer");
    group.sample_size(20);

    let base = OptimizationConfig::new(roster(), 20.0).with_time_limit(12.0);
    for (label, parallelism) in [
        ("serial", Parallelism::Serial),
        ("assignments", Parallelism::Assignments),
        ("full", Parallelism::Full),
    ] {
        let config = base.clone().with_parallelism(parallelism);
        let optimizer = Optimizer::new(config).expect("valid roster");
        group.bench_function(label, |b| {
            b.iter(|| black_box(optimizer.run().expect("optimization")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optimizer_serial_vs_parallel);
criterion_main!(benches);
