#![no_main]

use libfuzzer_sys::fuzz_target;
use qicompare::comparison::{mann_whitney_u, vargha_delaney_a12};
use qicompare::loader::parse_values;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let Ok(values) = parse_values(&content, Path::new("fuzz.csv")) else {
        return;
    };
    assert!(values.iter().all(|v| v.is_finite()));
    if values.is_empty() {
        return;
    }

    let (first, second) = values.split_at(values.len() / 2);
    if let Ok(result) = mann_whitney_u(first, second) {
        assert!((0.0..=1.0).contains(&result.p_value));
    }
    if let Ok(a12) = vargha_delaney_a12(first, second) {
        assert!((0.0..=1.0).contains(&a12));
    }
});
