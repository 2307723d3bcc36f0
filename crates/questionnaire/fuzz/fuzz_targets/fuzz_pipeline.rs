//! Fuzz target for the cleaning transforms.
//!
//! Feeds arbitrary CSV through filtering, imputation and scoring. Schema
//! problems must surface as errors and successful transforms must keep the
//! row count (or shrink it, for the email filter).

#![no_main]

use libfuzzer_sys::fuzz_target;
use questionnaire::{EmailValidator, Parser, ScoreImputer, SubjectScorer, TableFormat};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let mut csv = b"email,age,gender,q1,q2,q3,q4,q5\n".to_vec();
    csv.extend_from_slice(data);

    let Ok(table) = Parser::new().parse_bytes(&csv, TableFormat::Csv) else {
        return;
    };

    if let Ok(filtered) = EmailValidator::new().filter_valid(&table) {
        assert!(filtered.row_count() <= table.row_count());
    }

    if let Ok(imputation) = ScoreImputer::new().impute(&table) {
        assert_eq!(imputation.table.row_count(), table.row_count());
    }

    for max_missing in 0..=5 {
        if let Ok(scorer) = SubjectScorer::new(max_missing) {
            if let Ok(scored) = scorer.score(&table) {
                assert_eq!(scored.row_count(), table.row_count());
            }
        }
    }
});
