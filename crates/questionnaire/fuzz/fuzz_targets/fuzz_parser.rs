//! Fuzz target for the table parser.
//!
//! Every format must reject malformed bytes with an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use questionnaire::{Parser, TableFormat};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    for format in [TableFormat::Json, TableFormat::Csv, TableFormat::Tsv] {
        if let Ok(table) = parser.parse_bytes(data, format) {
            let mut out = Vec::new();
            let _ = table.write_to(&mut out, format);
        }
    }
});
