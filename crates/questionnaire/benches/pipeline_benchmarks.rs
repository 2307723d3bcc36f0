//! Cleaning pipeline performance benchmarks.
//!
//! Measures parsing, email filtering, imputation and scoring on synthetic surveys.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use questionnaire::{EmailValidator, Parser, ScoreImputer, SubjectScorer, TableFormat};

/// Generate a JSON survey with occasional bad emails and missing answers.
fn generate_survey(rows: usize) -> String {
    let genders = ["Male", "Female", "Other"];
    let records: Vec<String> = (0..rows)
        .map(|row| {
            let email = match row % 17 {
                0 => format!("user{row}@"),
                1 => format!("user{row}.example.com"),
                _ => format!("user{row}@example.com"),
            };
            let answers: Vec<String> = (0..5)
                .map(|q| {
                    if (row + q) % 7 == 0 {
                        "null".to_string()
                    } else {
                        ((row + q) % 5 + 1).to_string()
                    }
                })
                .collect();
            format!(
                r#"{{"id": {row}, "gender": "{}", "age": {}, "email": "{email}", "q1": {}, "q2": {}, "q3": {}, "q4": {}, "q5": {}}}"#,
                genders[row % genders.len()],
                18 + row % 70,
                answers[0],
                answers[1],
                answers[2],
                answers[3],
                answers[4],
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_json");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_survey(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| parser.parse_bytes(black_box(data.as_bytes()), TableFormat::Json).unwrap());
        });
    }

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    for rows in [100, 1_000, 10_000].iter() {
        let table = Parser::new()
            .parse_bytes(generate_survey(*rows).as_bytes(), TableFormat::Json)
            .unwrap();
        group.throughput(Throughput::Elements(*rows as u64));

        group.bench_with_input(BenchmarkId::new("filter_valid", rows), &table, |b, table| {
            let validator = EmailValidator::new();
            b.iter(|| validator.filter_valid(black_box(table)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("impute", rows), &table, |b, table| {
            let imputer = ScoreImputer::new();
            b.iter(|| imputer.impute(black_box(table)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("score", rows), &table, |b, table| {
            let scorer = SubjectScorer::default();
            b.iter(|| scorer.score(black_box(table)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_transforms);
criterion_main!(benches);
