//! Fuzz target for security code formatting and validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::cvc::format_cvc;
use card_form::{validate_cvc, CardNetwork, ValidationState};

fuzz_target!(|data: &str| {
    for network in CardNetwork::KNOWN.into_iter().chain([CardNetwork::Unknown]) {
        let _ = validate_cvc(data, network);

        let formatted = format_cvc(data, network);
        assert!(formatted.len() <= network.cvc_length());
        assert_ne!(validate_cvc(&formatted, network), ValidationState::Invalid);
    }
});
