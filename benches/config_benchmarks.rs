use criterion::{criterion_group, criterion_main, Criterion};
use mappr_config::config::loader::{self, FileFormat};
use mappr_config::config::{merge_defaults, parse_project_config, PartialRenderSettings, RenderSettings};
use serde_json::{json, Value};
use std::hint::black_box;

fn bench_parse(c: &mut Criterion) {
    let content = loader::sample_project_content();
    let raw: Value = serde_json::from_str(content).unwrap();

    c.bench_function("parse_sample_project", |b| {
        b.iter(|| parse_project_config(black_box(&raw)))
    });

    c.bench_function("parse_sample_from_text", |b| {
        b.iter(|| loader::parse_project(black_box(content), FileFormat::Json))
    });
}

fn bench_merge_defaults(c: &mut Criterion) {
    let empty = PartialRenderSettings::new();
    let partial = match json!({ "drawEdges": true, "nodeSizeMin": 4, "labelColor": "#333333" }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    c.bench_function("merge_defaults_empty", |b| {
        b.iter(|| merge_defaults(black_box(&empty)))
    });

    c.bench_function("merge_defaults_partial", |b| {
        b.iter(|| merge_defaults(black_box(&partial)))
    });

    c.bench_function("render_settings_default", |b| b.iter(RenderSettings::default));
}

fn bench_serialize(c: &mut Criterion) {
    let project = loader::sample_project().unwrap();

    c.bench_function("project_to_json", |b| {
        b.iter(|| loader::to_string(black_box(&project), FileFormat::Json))
    });

    c.bench_function("project_to_yaml", |b| {
        b.iter(|| loader::to_string(black_box(&project), FileFormat::Yaml))
    });

    c.bench_function("project_to_toml", |b| {
        b.iter(|| loader::to_string(black_box(&project), FileFormat::Toml))
    });
}

criterion_group!(benches, bench_parse, bench_merge_defaults, bench_serialize);
criterion_main!(benches);
