use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::Value;
use std::fs;
use std::hint::black_box;
use workout_tracker::db::{MemoryStore, WorkoutDb};
use workout_tracker::models::{Coordinates, NewWorkout, Workout, WorkoutRecord};
use workout_tracker::services::{reconcile, WorkoutService};

fn benchmark_reconcile(c: &mut Criterion) {
    // Load the browser fixture (includes records that fail to reconcile)
    let fixture_content = fs::read_to_string("tests/fixtures/browser_workouts.json")
        .expect("Failed to read fixture");
    let fixture: Vec<Value> =
        serde_json::from_str(&fixture_content).expect("Failed to parse fixture");

    // A larger, all-valid collection
    let here = Coordinates::new(38.72, -9.14);
    let records: Vec<WorkoutRecord> = (0..1_000)
        .map(|i| {
            let input = if i % 2 == 0 {
                NewWorkout::running(here, 5.0 + i as f64 / 100.0, 30.0, 170)
            } else {
                NewWorkout::cycling(here, 20.0 + i as f64 / 100.0, 60.0, 200.0)
            };
            let workout = Workout::new(&input).expect("Failed to build workout");
            WorkoutRecord::from(&workout)
        })
        .collect();

    let mut group = c.benchmark_group("reconcile");

    group.bench_function("single_record", |b| {
        b.iter(|| reconcile(black_box(records[0].clone())))
    });

    group.bench_function("browser_fixture_load", |b| {
        b.iter(|| {
            let mut service = WorkoutService::new(WorkoutDb::new(MemoryStore::new()));
            service.load_from_snapshot(black_box(fixture.clone()))
        })
    });

    group.bench_function("thousand_records_load", |b| {
        b.iter(|| {
            let mut service = WorkoutService::new(WorkoutDb::new(MemoryStore::new()));
            service.load_from_snapshot(black_box(records.clone()))
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_reconcile);
criterion_main!(benches);
