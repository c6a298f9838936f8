use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stride_core::{Biometrics, Calculator, parse_steps_record, parse_training_record};

fn bench_summarize(c: &mut Criterion) {
    let calc = Calculator::default();
    let bio = Biometrics::new(85.0, 1.85);

    c.bench_function("summarize_training_record", |b| {
        b.iter(|| {
            let parsed = parse_training_record(black_box("3456,Running,3h00m")).expect("parsed");
            calc.summarize(&parsed, bio).expect("summary")
        })
    });

    c.bench_function("summarize_steps_record", |b| {
        b.iter(|| {
            let parsed = parse_steps_record(black_box("678,0h50m")).expect("parsed");
            calc.summarize(&parsed, bio).expect("summary")
        })
    });
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
