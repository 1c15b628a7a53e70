//! Fuzz target for number detection and formatting.
//!
//! Formatting must never panic, must be idempotent and must only keep a
//! prefix of the input digits.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::format::{split_into_groups, strip_non_digits};
use card_form::{detect_network, format_number, validate_number, CardNetwork};

fuzz_target!(|data: &str| {
    let detected = detect_network(data);

    for network in CardNetwork::KNOWN.into_iter().chain([CardNetwork::Unknown]) {
        let formatted = format_number(data, network);
        assert_eq!(format_number(&formatted, network), formatted, "not idempotent");

        let kept = strip_non_digits(&formatted);
        assert!(strip_non_digits(data).starts_with(&kept), "digits reordered");
        assert!(kept.len() <= network.max_length(), "not truncated");

        let _ = split_into_groups(data, network);
        let _ = validate_number(&formatted, network);
        let _ = validate_number(data, network);
    }

    // detection only looks at digits
    assert_eq!(detect_network(&format_number(data, detected)), detected);
});
