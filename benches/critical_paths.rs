//! Criterion benchmarks for Patterndex critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Color: hex parsing and lighten/darken
//! - Sprite: layered document synthesis per body
//! - Radar: chart synthesis
//! - SVG: markup serialization
//! - Raster: PNG-bound rasterization at several scales
//! - Catalogue: JSON5 parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use patterndex::bodies::Body;
use patterndex::catalogue::parse_catalogue;
use patterndex::color::{lighten, Color};
use patterndex::features::Feature;
use patterndex::memo::SpriteCache;
use patterndex::models::{Stats, Visual};
use patterndex::radar::{self, RadarStyle};
use patterndex::sprite::{self, CreatureColors};
use patterndex::{raster, svg};

// =============================================================================
// Test Data Generators
// =============================================================================

fn colors() -> CreatureColors {
    CreatureColors::new(Color::rgb(0xf0, 0x80, 0x30), Color::rgb(0x68, 0x90, 0xf0))
}

/// A descriptor carrying every feature, so every drawing path runs.
fn busy_visual(body: Body) -> Visual {
    Feature::ALL.iter().fold(Visual::new(body), |v, f| v.with_feature(*f)).with_accent(Feature::Wings)
}

/// Catalogue JSON with `n` creatures cycling through bodies and types.
fn make_catalogue(n: usize) -> String {
    let types = ["fire", "water", "grass", "poison"];
    let creatures: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id": "{:03}", "name": "Bench{}", "types": ["{}"], "stats": {{"complexity": {}}}, "visual": {{"body": "{}", "features": ["horns", "tail"]}}}}"#,
                i,
                i,
                types[i % types.len()],
                i % 11,
                Body::ALL[i % Body::ALL.len()]
            )
        })
        .collect();

    format!(
        r##"{{"types": {{"fire": {{"color": "#f08030"}}, "water": {{"color": "#6890f0"}}, "grass": {{"color": "#78c850"}}, "poison": {{"color": "#a040a0"}}}}, "creatures": [{}]}}"##,
        creatures.join(", ")
    )
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("from_hex_3", |b| b.iter(|| Color::from_hex(black_box("#f80"))));
    group.bench_function("from_hex_6", |b| b.iter(|| Color::from_hex(black_box("#f08030"))));
    group.bench_function("lighten_str", |b| b.iter(|| lighten(black_box("#6890f0"), black_box(20))));

    group.finish();
}

fn bench_sprite(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprite");

    for body in Body::ALL {
        let visual = busy_visual(body);
        group.bench_with_input(BenchmarkId::new("generate", body), &visual, |b, visual| {
            b.iter(|| sprite::generate(black_box(Some(visual)), colors()))
        });
    }

    group.bench_function("fallback", |b| b.iter(|| sprite::generate_fallback(Color::GRAY, Some("000"))));

    let cache = SpriteCache::new();
    let visual = busy_visual(Body::Round);
    group.bench_function("cached", |b| b.iter(|| cache.get_or_generate(black_box(Some(&visual)), colors())));

    group.finish();
}

fn bench_radar(c: &mut Criterion) {
    let mut group = c.benchmark_group("radar");
    let style = RadarStyle::default();
    let stats = Stats::uniform(7);

    group.bench_function("generate", |b| b.iter(|| radar::generate(black_box(&stats), Color::WHITE, &style)));
    group.bench_function("generate_radar_chart", |b| {
        b.iter(|| radar::generate_radar_chart(black_box(&stats), Color::WHITE))
    });

    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg");

    let doc = sprite::generate(Some(&busy_visual(Body::Multi)), colors());
    group.throughput(Throughput::Elements(doc.primitives().count() as u64));
    group.bench_function("render_sprite", |b| b.iter(|| svg::render(black_box(&doc))));

    group.finish();
}

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");
    let doc = sprite::generate(Some(&busy_visual(Body::Wide)), colors());

    for scale in [1u32, 4, 16] {
        group.throughput(Throughput::Elements(u64::from(64 * scale) * u64::from(64 * scale)));
        group.bench_with_input(BenchmarkId::new("render", scale), &scale, |b, &scale| {
            b.iter(|| raster::render(black_box(&doc), scale))
        });
    }

    group.finish();
}

fn bench_catalogue(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalogue");

    for size in [10usize, 150] {
        let content = make_catalogue(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &content, |b, content| {
            b.iter(|| parse_catalogue(black_box(content), "bench"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_color, bench_sprite, bench_radar, bench_svg, bench_raster, bench_catalogue);
criterion_main!(benches);
