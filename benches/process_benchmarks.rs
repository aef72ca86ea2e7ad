//! Performance benchmarks for the conversion pipeline.
//!
//! These benchmarks measure:
//! - A full conversion of a typical record
//! - Validation and presentation separately
//! - Records with growing numbers of work entries

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resume_conversion::{Process, RawResume};
use serde::Deserialize;
use serde_json::{json, Value};

fn work_entry(index: usize) -> Value {
    json!({
        "companyName": format!("Company {}", index),
        "location": { "city": "Austin", "state": "TX", "remote": index % 2 == 0 },
        "title": "Engineer",
        "startDate": format!("{}-{:02}", 2000 + index % 25, index % 12 + 1),
        "endDate": if index == 0 { Value::Null } else { json!("2024-12") },
        "contributions": (0..5)
            .map(|rank| json!({ "rank": 5 - rank, "text": format!("Contribution {}", rank) }))
            .collect::<Vec<_>>()
    })
}

fn create_record(work_entries: usize) -> Value {
    json!({
        "profile": {
            "name": "Ada Lovelace",
            "phoneNumber": "+1 (555) 123-4567",
            "email": "ada@example.com"
        },
        "workExperience": (0..work_entries).map(work_entry).collect::<Vec<_>>(),
        "education": [{
            "degree": { "program": "BSc", "major": "Mathematics", "minor": "Physics" },
            "institution": "State University",
            "location": { "city": "Boulder", "state": "CO" },
            "startDate": "2010-09",
            "endDate": "2014-05",
            "notableCoursework": ["Topology", "analysis", "Algebra"],
            "involvement": [{
                "organization": "Chess Club",
                "levels": [
                    { "title": "Member", "startDate": "2010-09", "endDate": "2012-05" },
                    { "title": "Captain", "startDate": "2012-09", "endDate": "2014-05" }
                ]
            }],
            "gpa": 3.91
        }],
        "technicalKnowledge": [{
            "rank": 1,
            "category": "Languages",
            "proficiencies": [{ "rank": 2, "text": "Go" }, { "rank": 1, "text": "Rust" }]
        }],
        "projects": [{ "rank": 1, "title": "Engine", "description": "An analytical engine" }]
    })
}

/// Benchmark a full conversion from untyped JSON.
fn bench_run_with(c: &mut Criterion) {
    let process = Process::default();
    let record = create_record(5);

    c.bench_function("run_with", |b| {
        b.iter(|| process.run_with(black_box(&record)).unwrap())
    });
}

/// Benchmark the two phases on their own.
fn bench_phases(c: &mut Criterion) {
    let process = Process::default();
    let raw = RawResume::deserialize(&create_record(5)).unwrap();
    let resume = process.validate(&raw).unwrap();

    c.bench_function("validate", |b| {
        b.iter(|| process.validate(black_box(&raw)).unwrap())
    });
    c.bench_function("present", |b| b.iter(|| process.present(black_box(&resume))));
}

/// Benchmark conversion as the work history grows.
fn bench_work_history_sizes(c: &mut Criterion) {
    let process = Process::default();
    let mut group = c.benchmark_group("work_history");

    for size in [1, 10, 100] {
        let record = create_record(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &record, |b, record| {
            b.iter(|| process.run_with(record).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_with, bench_phases, bench_work_history_sizes);
criterion_main!(benches);
