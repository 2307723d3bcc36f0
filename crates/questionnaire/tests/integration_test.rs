//! Integration tests for the questionnaire pipeline.

use std::io::Write;
use tempfile::NamedTempFile;

use questionnaire::{
    Cell, ColumnType, EmailValidator, QuestionnaireAnalysis, QuestionnaireError, ScoreImputer,
    SubjectScorer,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// Three respondents: complete, bad email with one gap, and no answers at all.
const THREE_ROWS: &str = r#"[
    {"id": 0, "first_name": "Ann", "last_name": "A", "gender": "Female", "age": 34.0,
     "email": "ann@example.com", "q1": 5, "q2": 5, "q3": 5, "q4": 5, "q5": 5},
    {"id": 1, "first_name": "Ben", "last_name": "B", "gender": "Male", "age": 52.0,
     "email": "bad@", "q1": 4, "q2": null, "q3": 4, "q4": 4, "q5": 4},
    {"id": 2, "first_name": "Cat", "last_name": "C", "gender": "Female", "age": null,
     "email": "cat@example.org", "q1": null, "q2": null, "q3": null, "q4": null, "q5": null}
]"#;

fn load(content: &str, suffix: &str) -> (NamedTempFile, QuestionnaireAnalysis) {
    let file = create_test_file(content, suffix);
    let mut analysis = QuestionnaireAnalysis::new(file.path()).expect("File should exist");
    analysis.read_data().expect("Read failed");
    (file, analysis)
}

fn column(table: &questionnaire::DataTable, name: &str) -> Vec<Cell> {
    let index = table.column_index(name).expect("column exists");
    table.column_values(index).cloned().collect()
}

// =============================================================================
// End-to-end Scenario
// =============================================================================

#[test]
fn test_end_to_end_filter() {
    let (_file, analysis) = load(THREE_ROWS, ".json");

    let filtered = analysis.remove_rows_without_mail().unwrap();

    assert_eq!(filtered.row_count(), 2);
    assert_eq!(
        column(&filtered, "email"),
        vec![Cell::from("ann@example.com"), Cell::from("cat@example.org")]
    );
}

#[test]
fn test_end_to_end_impute() {
    let (_file, analysis) = load(THREE_ROWS, ".json");
    let original = analysis.data().unwrap().clone();

    let imputation = analysis.fill_na_with_mean().unwrap();

    assert_eq!(imputation.touched_rows, vec![1]);
    assert_eq!(imputation.table.rows[0], original.rows[0]);
    assert_eq!(imputation.table.rows[2], original.rows[2]);
    assert_eq!(column(&imputation.table, "q2")[1], Cell::Number(4.0));
    // Non-question columns are untouched.
    assert_eq!(column(&imputation.table, "email"), column(&original, "email"));
    assert_eq!(column(&imputation.table, "age"), column(&original, "age"));
    // The loaded data is not modified.
    assert_eq!(analysis.data().unwrap(), &original);
}

#[test]
fn test_end_to_end_score() {
    let (_file, analysis) = load(THREE_ROWS, ".json");

    let scored = analysis.score_subjects(1).unwrap();

    assert_eq!(scored.column("score").unwrap().column_type, ColumnType::UInt8);
    assert_eq!(
        SubjectScorer::read_scores(&scored).unwrap(),
        vec![Some(5), Some(4), None]
    );
}

#[test]
fn test_scoring_after_imputation_sees_no_gaps() {
    let content = r#"[
        {"email": "a@b.com", "q1": 5, "q2": 5, "q3": 5, "q4": null, "q5": null}
    ]"#;
    let (_file, analysis) = load(content, ".json");

    let direct = SubjectScorer::default().score(analysis.data().unwrap()).unwrap();
    assert_eq!(SubjectScorer::read_scores(&direct).unwrap(), vec![None]);

    let imputed = ScoreImputer::new().impute(analysis.data().unwrap()).unwrap();
    let after = SubjectScorer::default().score(&imputed.table).unwrap();
    assert_eq!(SubjectScorer::read_scores(&after).unwrap(), vec![Some(5)]);
}

#[test]
fn test_report() {
    let (_file, analysis) = load(THREE_ROWS, ".json");

    let report = analysis.report().unwrap();

    assert_eq!(report.source.row_count, 3);
    assert_eq!(report.source.format, "json");
    assert!(report.source.hash.starts_with("sha256:"));
    assert_eq!(report.invalid_emails.len(), 1);
    assert_eq!(report.invalid_emails[0].row, 1);
    assert_eq!(report.imputed_rows, vec![1]);
    assert_eq!(report.imputed_values, 1);
    assert_eq!(report.scored_rows, 2);
    assert_eq!(report.unscored_rows, 1);
    assert_eq!(report.age_histogram.total(), 2);
    // Cat has no age, so only Ann and Ben are grouped.
    assert_eq!(report.gender_age_means.len(), 2);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["scored_rows"], 2);
}

// =============================================================================
// Data Source Tests
// =============================================================================

#[test]
fn test_csv_input() {
    let content = "gender,age,email,q1,q2,q3,q4,q5\n\
                   Male,23,a@b.com,1,2,3,4,5\n\
                   Female,NA,c@d.org,2,,2,2,2\n";
    let (_file, analysis) = load(content, ".csv");

    let hist = analysis.show_age_distrib().unwrap();
    assert_eq!(hist.counts[2], 1);
    assert_eq!(hist.total(), 1);

    let imputation = analysis.fill_na_with_mean().unwrap();
    assert_eq!(imputation.touched_rows, vec![1]);
}

#[test]
fn test_unknown_extension() {
    let file = create_test_file("q1\n1\n", ".dat");
    let mut analysis = QuestionnaireAnalysis::new(file.path()).unwrap();
    let err = analysis.read_data().unwrap_err();
    assert!(matches!(err, QuestionnaireError::UnsupportedFormat(_)));
}

#[test]
fn test_malformed_json() {
    let file = create_test_file("{\"q1\": 1}", ".json");
    let mut analysis = QuestionnaireAnalysis::new(file.path()).unwrap();
    assert!(matches!(analysis.read_data(), Err(QuestionnaireError::Json(_))));
}

// =============================================================================
// Error Taxonomy
// =============================================================================

#[test]
fn test_non_numeric_question_is_schema_error() {
    let content = r#"[{"email": "a@b.com", "q1": "five", "q2": 1, "q3": 1, "q4": 1, "q5": 1}]"#;
    let (_file, analysis) = load(content, ".json");

    assert!(matches!(
        analysis.fill_na_with_mean(),
        Err(QuestionnaireError::Schema { .. })
    ));
    assert!(matches!(
        analysis.score_subjects(1),
        Err(QuestionnaireError::Schema { .. })
    ));
}

#[test]
fn test_boolean_question_is_schema_error() {
    let content = r#"[{"email": "a@b.com", "q1": 1, "q2": true, "q3": 1, "q4": 1, "q5": 1}]"#;
    let (_file, analysis) = load(content, ".json");
    assert!(matches!(
        analysis.fill_na_with_mean(),
        Err(QuestionnaireError::Schema { .. })
    ));
}

#[test]
fn test_negative_tolerance_is_invalid_argument() {
    let (_file, analysis) = load(THREE_ROWS, ".json");
    assert!(matches!(
        analysis.score_subjects(-1),
        Err(QuestionnaireError::InvalidArgument(_))
    ));
}

#[test]
fn test_numeric_email_is_invalid_input() {
    let content = r#"[
        {"email": "a@b.com", "q1": 1, "q2": 1, "q3": 1, "q4": 1, "q5": 1},
        {"email": 12, "q1": 1, "q2": 1, "q3": 1, "q4": 1, "q5": 1}
    ]"#;
    let (_file, analysis) = load(content, ".json");

    let err = EmailValidator::new()
        .filter_valid(analysis.data().unwrap())
        .unwrap_err();
    assert!(matches!(err, QuestionnaireError::InvalidInput { row: 1, .. }));
}

#[test]
fn test_out_of_range_score_fails() {
    let content = r#"[{"email": "a@b.com", "q1": 400, "q2": 400, "q3": 400, "q4": 400, "q5": 400}]"#;
    let (_file, analysis) = load(content, ".json");
    assert!(matches!(
        analysis.score_subjects(1),
        Err(QuestionnaireError::InvalidArgument(_))
    ));
}
