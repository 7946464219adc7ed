//! Benchmark for judgment formatting
//!
//! Judging runs once or twice per note cut, so it should stay well under a
//! microsecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hit_score_judge::template::{Grammar, RenderContext, Template};
use hit_score_judge::{judge, DisplayConfig, DisplayMode, Judge, ScoreInput, SegmentTier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default config plus timing segments so `%T` is exercised
fn create_test_config() -> DisplayConfig {
    let mut config = DisplayConfig::default();
    config.time_dependence_judgments = Some(vec![
        SegmentTier::new(0.3, "<color=red>%t</color>"),
        SegmentTier::new(0.1, "%t"),
        SegmentTier::new(0.0, ""),
    ]);
    for judgment in &mut config.judgments {
        judgment.text.push_str("%n%T");
    }
    config.prepare().expect("benchmark config is valid")
}

/// Seeded cut scores spread over the realistic range
fn create_test_inputs(count: usize) -> Vec<ScoreInput> {
    let mut rng = StdRng::seed_from_u64(115);
    (0..count)
        .map(|_| {
            let before = rng.gen_range(0..=70);
            let after = rng.gen_range(0..=30);
            let accuracy = rng.gen_range(0..=15);
            let time_dependence = rng.gen_range(0.0..0.5);
            ScoreInput::new(before + after + accuracy, before, after, accuracy, time_dependence)
        })
        .collect()
}

fn benchmark_judge(c: &mut Criterion) {
    let config = create_test_config();
    let inputs = create_test_inputs(1024);
    let precompiled = Judge::new(config.clone());

    c.bench_function("judge_one_off", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % inputs.len();
            black_box(judge(black_box(&inputs[i]), &config))
        })
    });

    c.bench_function("judge_precompiled", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % inputs.len();
            black_box(precompiled.judge(black_box(&inputs[i])))
        })
    });

    let mut numeric = config.clone();
    numeric.display_mode = DisplayMode::Numeric;
    c.bench_function("judge_numeric", |b| {
        b.iter(|| black_box(judge(black_box(&inputs[0]), &numeric)))
    });
}

fn benchmark_template(c: &mut Criterion) {
    let config = create_test_config();
    let input = ScoreInput::new(108, 70, 25, 13, 0.21);
    let source = "<size=80%>%BExcellent%A</size>%n%s (%p%%)%n%T";

    c.bench_function("template_compile", |b| {
        b.iter(|| black_box(Template::compile(black_box(source), Grammar::Full)))
    });

    let template = Template::compile(source, Grammar::Full);
    c.bench_function("template_render", |b| {
        let ctx = RenderContext::new(&input, &config);
        b.iter(|| black_box(template.render(&ctx)))
    });
}

criterion_group!(benches, benchmark_judge, benchmark_template);
criterion_main!(benches);
