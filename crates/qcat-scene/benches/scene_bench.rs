//! Benchmarks for scene construction
//!
//! Run with: cargo bench -p qcat-scene

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use qcat_scene::bloch::map_to_sphere;
use qcat_scene::geometry::generate_solid;
use qcat_scene::{MapperConfig, Scene, SceneStyle, SphereMesh, TerminalRenderer};
use qcat_sim::{RotationParameters, simulate};

/// Benchmark the numeric pipeline: simulate, map, generate
fn bench_pipeline(c: &mut Criterion) {
    let params = RotationParameters::default();
    let config = MapperConfig::default();

    c.bench_function("pipeline", |b| {
        b.iter(|| {
            let state = simulate(black_box(&params)).unwrap();
            let point = map_to_sphere(&state, &config).unwrap();
            generate_solid(&point, black_box(0.15))
        });
    });
}

/// Benchmark sphere mesh generation
fn bench_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_mesh");

    for resolution in &[10, 50, 200] {
        group.bench_with_input(
            BenchmarkId::new("uniform", resolution),
            resolution,
            |b, &n| {
                b.iter(|| SphereMesh::uniform(black_box(n)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark terminal rasterization
fn bench_terminal_frame(c: &mut Criterion) {
    let state = simulate(&RotationParameters::default()).unwrap();
    let point = map_to_sphere(&state, &MapperConfig::default()).unwrap();
    let scene = Scene::new(
        SphereMesh::default(),
        generate_solid(&point, 0.15),
        point,
        &SceneStyle::default(),
    );
    let renderer = TerminalRenderer::new(Vec::new());

    c.bench_function("terminal_frame", |b| {
        b.iter(|| renderer.frame(black_box(&scene)).unwrap());
    });
}

criterion_group!(benches, bench_pipeline, bench_mesh, bench_terminal_frame);
criterion_main!(benches);
