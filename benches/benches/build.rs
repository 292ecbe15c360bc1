use criterion::{criterion_group, criterion_main, Criterion};
use unicode_ucd_properties::{Config, Ucd};

mod group;

fn build(c: &mut Criterion)
{
    let mut group = c.benchmark_group("build");

    let files = group::read_dir(group::DATA_DIR);
    let sources = group::sources(&files);

    group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

    group.bench_function("parse", |b| {
        b.iter(|| Ucd::parse(criterion::black_box(&sources), Config::default()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, build);
criterion_main!(benches);
