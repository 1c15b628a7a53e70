//! Fuzz target for expiry formatting and validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::expiry::{
    format_expiry, format_expiry_edit, parse_expiry, validate_expiry_with_options, YearMonth,
};
use card_form::ValidationState;

fuzz_target!(|input: (&str, &str)| {
    let (previous, raw) = input;
    let reference = YearMonth::new(2024, 6).unwrap();

    let formatted = format_expiry(raw);
    assert!(formatted.len() <= 5, "expiry too long: {:?}", formatted);
    assert_eq!(format_expiry(&formatted), formatted, "not idempotent");

    let edited = format_expiry_edit(previous, raw);
    let _ = validate_expiry_with_options(&edited, reference, Some(20));

    let state = validate_expiry_with_options(&formatted, reference, None);
    if let Some(date) = parse_expiry(&formatted) {
        let expected = if date < reference {
            ValidationState::Invalid
        } else {
            ValidationState::Valid
        };
        assert_eq!(state, expected);
        let _ = date.format_short();
        let _ = reference.months_until(date);
    }
});
