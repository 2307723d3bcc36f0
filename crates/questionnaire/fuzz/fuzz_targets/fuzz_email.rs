//! Fuzz target for EmailValidator.
//!
//! The validator must never panic, and an accepted address always has
//! exactly one `@` and at least one `.`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use questionnaire::EmailValidator;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if EmailValidator::is_valid(&input) {
        assert_eq!(input.matches('@').count(), 1);
        assert!(input.contains('.'));
        assert!(!input.starts_with(['@', '.']));
        assert!(!input.ends_with(['@', '.']));
    }
});
