#![no_main]

use libfuzzer_sys::fuzz_target;
use qicompare::measurement::ParsedFileName;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Some(parsed) = ParsedFileName::parse(name) {
            // A match always carries a non-empty algorithm without '-'
            assert!(!parsed.algorithm.is_empty());
            assert!(!parsed.algorithm.contains('-'));
            assert!(!parsed.case_study.is_empty());
        }
    }
});
