use config_doctor::{analyze_build, analyze_propeller, parse_build_inputs, FlightStyle, FormFields, PresetTable, PropellerSpec};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_propeller(c: &mut Criterion) {
    let prop = PropellerSpec::new(5.1, 4.3, 3).unwrap();
    c.bench_function("analyze_propeller", |b| {
        b.iter(|| analyze_propeller(black_box(&prop), black_box(FlightStyle::Racing)))
    });
}

fn bench_full_build(c: &mut Criterion) {
    let table = PresetTable::embedded().unwrap();
    let fields: FormFields = [("style", "racing"), ("mode", "pro"), ("blades", "3")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    c.bench_function("parse_and_analyze_build", |b| {
        b.iter(|| {
            let inputs = parse_build_inputs(black_box(&fields)).unwrap();
            analyze_build(&inputs, Some(&table))
        })
    });
}

criterion_group!(benches, bench_propeller, bench_full_build);
criterion_main!(benches);
