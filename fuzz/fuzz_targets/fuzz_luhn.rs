//! Fuzz target for the Luhn checksum.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::luhn;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::validate(&digits);
    let _ = luhn::compute_checksum(&digits);

    let text: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    assert_eq!(luhn::passes(&text), luhn::validate(&digits));

    if !digits.is_empty() && digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "adding the check digit should pass");
    }
});
