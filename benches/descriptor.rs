use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xmss_params::export::render;
use xmss_params::{registry, Descriptor, Format};

fn descriptor_benchmarks(c: &mut Criterion) {
    let alg_name = "descriptor";
    let mut group = c.benchmark_group(format!("XMSS_{}", alg_name));

    group.bench_function(BenchmarkId::new(alg_name, "catalog"), |b| {
        b.iter(|| {
            for param in registry::iter() {
                black_box(Descriptor::new(black_box(param)));
            }
        });
    });

    let descriptor = Descriptor::new(registry::lookup("XMSSMT-SHA2_60/12_512").unwrap());
    group.bench_function(BenchmarkId::new(alg_name, "render_yaml"), |b| {
        b.iter(|| {
            black_box(render(black_box(&descriptor), Format::Yaml).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, descriptor_benchmarks);
criterion_main!(benches);
