// ABOUTME: Criterion benchmarks for the weekly planner and the synthesizer write path
// ABOUTME: Measures goal classification, pure week building, and a full in-memory plan run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for plan generation.

#![allow(clippy::missing_docs_in_private_items, missing_docs, clippy::expect_used)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trainplan_core::models::{ExperienceLevel, TrainingArchetype};
use trainplan_intelligence::{build_week, classify, AdherenceSignal, WeekInputs};
use trainplan_server::database::Database;
use trainplan_server::services::plan_synthesizer::{
    PlanRequest, RestDayPolicy, WeeklyPlanSynthesizer,
};

const GOALS: [&str; 5] = [
    "Get stronger for powerlifting meet",
    "marathon endurance base",
    "recomp while cutting",
    "build muscle",
    "just stay healthy",
];

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_goals", |b| {
        b.iter(|| {
            for goal in GOALS {
                black_box(classify(black_box(goal)));
            }
        });
    });
}

fn bench_build_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_week");

    for day_count in [3_usize, 7, 14] {
        let inputs = WeekInputs {
            archetype: TrainingArchetype::Hypertrophy,
            experience: ExperienceLevel::Advanced,
            day_count,
            start_date: start_date(),
            adherence: AdherenceSignal::from_volumes(&[14, 16, 12, 18, 15]),
        };

        group.bench_with_input(BenchmarkId::from_parameter(day_count), &inputs, |b, inputs| {
            b.iter(|| black_box(build_week(black_box(inputs))));
        });
    }

    group.finish();
}

fn bench_synthesize(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let database = runtime
        .block_on(Database::new("sqlite::memory:"))
        .expect("in-memory database");
    let synthesizer = WeeklyPlanSynthesizer::from_database(&database, RestDayPolicy::Persist);

    let request = PlanRequest {
        user_id: Some("bench-user".to_owned()),
        start_date: Some(start_date()),
        days: Some(7),
        goal: Some("strength".to_owned()),
        experience_level: ExperienceLevel::Intermediate,
        plan_id: Some("bench".to_owned()),
    };

    // Every iteration after the first takes the update path
    c.bench_function("synthesize_week_rerun", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(
                synthesizer
                    .synthesize(&request)
                    .await
                    .expect("plan synthesis"),
            )
        });
    });
}

criterion_group!(benches, bench_classify, bench_build_week, bench_synthesize);
criterion_main!(benches);
