use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use boil::{Boiler, GenerateOptions, Plate, PlateRequest, TemplateStore};

fn function_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("func_{}", i)).collect()
}

fn bench_generate(c: &mut Criterion) {
    let store = TemplateStore::builtin().unwrap();
    let template = store.resolve(Some("java"), None).unwrap();
    let plate = Plate::parse(template);

    let mut group = c.benchmark_group("generate_java");
    for count in [0, 10, 100] {
        let options = GenerateOptions::new()
            .with_name("Bench")
            .with_functions(function_names(count))
            .with_newlines(true)
            .with_spaces(4);

        group.bench_with_input(BenchmarkId::from_parameter(count), &options, |b, options| {
            b.iter(|| plate.generate(black_box(options)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let store = TemplateStore::builtin().unwrap();
    let template = store.resolve(Some("c++"), None).unwrap();

    c.bench_function("parse_cpp", |b| b.iter(|| Plate::parse(black_box(template))));
}

fn bench_boiler_cached(c: &mut Criterion) {
    let boiler = Boiler::new(TemplateStore::builtin().unwrap());
    let request = PlateRequest::new()
        .with_extension(".py")
        .with_options(GenerateOptions::new().with_functions(["green"]));

    c.bench_function("boiler_plate_python", |b| {
        b.iter(|| boiler.plate(black_box(&request)).unwrap())
    });
}

criterion_group!(benches, bench_generate, bench_parse, bench_boiler_cached);
criterion_main!(benches);
