// Scoring and similarity benchmarks over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matsel::prelude::*;
use matsel::{Material, ThermalPreference};

/// Builtin catalog repeated `copies` times with perturbed numeric properties
fn synthetic_catalog(copies: usize) -> Vec<Material> {
    let builtin = Catalog::builtin();
    let mut materials = Vec::with_capacity(copies * builtin.len());
    let mut next_id = 1;

    for copy in 0..copies {
        let factor = 1.0 + (copy % 7) as f64 * 0.05;
        for base in builtin.materials() {
            let mut material = base.clone();
            material.id = next_id;
            material.strength_mpa *= factor;
            material.cost_per_unit *= factor;
            material.durability_years += copy as u32 % 5;
            materials.push(material);
            next_id += 1;
        }
    }
    materials
}

fn full_spec() -> ProjectSpecification {
    ProjectSpecification::builder([Application::Structural, Application::Facade])
        .material_types([MaterialType::Steel, MaterialType::Aluminum])
        .min_strength_mpa(200.0)
        .min_durability_years(40.0)
        .fire_resistance(1.0)
        .water_resistance(6.0)
        .thermal(ThermalPreference::Low)
        .eco_friendly(5.0)
        .budget(2500.0)
        .environment(WeatherCondition::Humidity, 8.0)
        .environment(WeatherCondition::Uv, 5.0)
        .build()
        .expect("valid spec")
}

fn benchmark_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let engine = ScoringEngine::default();
    let spec = full_spec();

    for copies in [1, 10, 100].iter() {
        let materials = synthetic_catalog(*copies);
        group.bench_with_input(
            BenchmarkId::new("all_criteria", materials.len()),
            &materials,
            |b, materials| {
                b.iter(|| black_box(engine.score(black_box(materials), &spec)));
            },
        );
    }

    group.finish();
}

fn benchmark_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");

    for copies in [1, 10, 100].iter() {
        let materials = synthetic_catalog(*copies);
        let index = SimilarityIndex::build(&materials).expect("non-empty catalog");
        group.bench_with_input(BenchmarkId::new("k5", materials.len()), &index, |b, index| {
            b.iter(|| black_box(index.nearest(black_box(8), 5)));
        });
    }

    group.finish();
}

fn benchmark_index_build(c: &mut Criterion) {
    let materials = synthetic_catalog(100);
    c.bench_function("index_build_1500", |b| {
        b.iter(|| black_box(SimilarityIndex::build(black_box(&materials))));
    });
}

criterion_group!(benches, benchmark_score, benchmark_nearest, benchmark_index_build);
criterion_main!(benches);
