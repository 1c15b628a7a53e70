//! Integration tests for card_form.
//!
//! These drive the engine the way a form does: one raw value per keystroke,
//! checking the snapshot after each step.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use card_form::feedback::{ErrorMessages, FieldMessages};
use card_form::{
    create_form_engine, detect_network, format_number, is_valid_number, validate_cvc,
    validate_expiry, validate_number, CardNetwork, FieldName, FormConfig, FormEngine, FormError,
    FormSnapshot, ValidationState, YearMonth,
};

// =============================================================================
// TEST CARD NUMBERS
// =============================================================================
// Published processor test numbers. They pass Luhn but belong to no account.

mod test_cards {
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4242424242424242";

    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_2SERIES: &str = "2223000048400011";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";

    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";

    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";

    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";

    pub const UNIONPAY: &str = "6200000000000005";
}

use test_cards::*;

fn reference() -> YearMonth {
    YearMonth::new(2024, 6).unwrap()
}

fn engine() -> FormEngine {
    FormEngine::new(FormConfig::default().with_reference_date(reference()))
}

/// Types `number` one digit at a time and returns every snapshot.
fn type_number(engine: &mut FormEngine, number: &str) -> Vec<Arc<FormSnapshot>> {
    (1..=number.len())
        .map(|end| {
            engine.update_field(FieldName::Number, &number[..end]);
            engine.current_snapshot()
        })
        .collect()
}

// =============================================================================
// NETWORK DETECTION
// =============================================================================

#[test]
fn test_detects_every_network() {
    let cases = [
        (VISA_1, CardNetwork::Visa),
        (VISA_2, CardNetwork::Visa),
        (MC_1, CardNetwork::Mastercard),
        (MC_2SERIES, CardNetwork::Mastercard),
        (AMEX_1, CardNetwork::Amex),
        (DISCOVER_1, CardNetwork::Discover),
        (DINERS_1, CardNetwork::DinersClub),
        (DINERS_2, CardNetwork::DinersClub),
        (JCB_1, CardNetwork::Jcb),
        (UNIONPAY, CardNetwork::UnionPay),
    ];

    for (number, expected) in cases {
        assert_eq!(detect_network(number), expected, "{}", number);
    }
}

#[test]
fn test_detection_never_switches_network_while_typing() {
    let all = [
        VISA_1, VISA_2, VISA_3, MC_1, MC_2, MC_2SERIES, AMEX_1, AMEX_2, DISCOVER_1, DISCOVER_2,
        DINERS_1, DINERS_2, JCB_1, JCB_2, UNIONPAY,
    ];

    for number in all {
        let mut first_known = None;
        for end in 1..=number.len() {
            let network = detect_network(&number[..end]);
            if network == CardNetwork::Unknown {
                assert!(first_known.is_none(), "{} regressed at {}", number, end);
                continue;
            }
            match first_known {
                None => first_known = Some(network),
                Some(known) => assert_eq!(known, network, "{} changed at {}", number, end),
            }
        }
        assert!(first_known.is_some(), "{} never detected", number);
    }
}

#[test]
fn test_ambiguous_prefixes_stay_unknown() {
    // 3 could be amex, diners or jcb; 35 could still be jcb 3528-3589
    for prefix in ["", "3", "35", "352", "5", "6", "60", "601", "2", "22", "222"] {
        assert_eq!(detect_network(prefix), CardNetwork::Unknown, "{:?}", prefix);
    }
}

// =============================================================================
// NUMBER FIELD
// =============================================================================

#[test]
fn test_luhn_scenario() {
    assert_eq!(
        validate_number("4111111111111111", CardNetwork::Visa),
        ValidationState::Valid
    );
    assert_eq!(
        validate_number("4111111111111112", CardNetwork::Visa),
        ValidationState::Invalid
    );
}

#[test]
fn test_every_test_card_ends_valid() {
    let all = [
        VISA_1, VISA_2, VISA_3, MC_1, MC_2, MC_2SERIES, AMEX_1, AMEX_2, DISCOVER_1, DISCOVER_2,
        DINERS_1, DINERS_2, JCB_1, JCB_2, UNIONPAY,
    ];

    for number in all {
        let mut engine = engine();
        let snapshots = type_number(&mut engine, number);
        let last = snapshots.last().unwrap();
        assert_eq!(last.status.number, ValidationState::Valid, "{}", number);
        assert!(is_valid_number(number), "{}", number);
    }
}

#[test]
fn test_incomplete_while_typing_a_visa() {
    let mut engine = engine();
    let snapshots = type_number(&mut engine, VISA_1);

    for snapshot in &snapshots[..15] {
        assert_eq!(snapshot.status.number, ValidationState::Incomplete);
    }
    assert_eq!(snapshots[15].values.number, "4111 1111 1111 1111");
    assert_eq!(snapshots[15].status.number, ValidationState::Valid);
}

#[test]
fn test_extra_digits_are_truncated() {
    let mut engine = engine();
    engine.update_field(FieldName::Number, "3782822463100051234");
    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.values.number, "3782 822463 10005");
    assert_eq!(snapshot.status.number, ValidationState::Valid);
}

#[test]
fn test_separators_in_raw_input_are_discarded() {
    let mut engine = engine();
    engine.update_field(FieldName::Number, "4111-1111.1111/1111");
    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.values.number, "4111 1111 1111 1111");
    assert_eq!(snapshot.status.number, ValidationState::Valid);
}

#[test]
fn test_unmatched_prefix_is_invalid() {
    let mut engine = engine();
    engine.update_field(FieldName::Number, "9999");
    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.network(), CardNetwork::Unknown);
    assert_eq!(snapshot.status.number, ValidationState::Invalid);
}

#[test]
fn test_grouping_per_network() {
    assert_eq!(format_number(AMEX_1, CardNetwork::Amex), "3782 822463 10005");
    assert_eq!(format_number(DINERS_1, CardNetwork::DinersClub), "3056 930902 5904");
    assert_eq!(format_number(MC_1, CardNetwork::Mastercard), "5555 5555 5555 4444");
    assert_eq!(
        format_number("4111111111111111111", CardNetwork::Visa),
        "4111 1111 1111 1111 111"
    );
}

// =============================================================================
// EXPIRY FIELD
// =============================================================================

#[test]
fn test_expiry_boundary() {
    let reference = reference();
    assert_eq!(validate_expiry("0624", reference), ValidationState::Valid);
    assert_eq!(validate_expiry("0524", reference), ValidationState::Invalid);
    assert_eq!(validate_expiry("1324", reference), ValidationState::Invalid);
    assert_eq!(validate_expiry("06", reference), ValidationState::Incomplete);
}

#[test]
fn test_expiry_typed_through_engine() {
    let mut engine = engine();
    let mut seen = Vec::new();
    for raw in ["0", "06", "06/2", "06/24"] {
        engine.update_field(FieldName::Expiry, raw);
        let snapshot = engine.current_snapshot();
        seen.push((snapshot.values.expiry.clone(), snapshot.status.expiry));
    }

    assert_eq!(
        seen,
        vec![
            ("0".to_string(), ValidationState::Incomplete),
            ("06/".to_string(), ValidationState::Incomplete),
            ("06/2".to_string(), ValidationState::Incomplete),
            ("06/24".to_string(), ValidationState::Valid),
        ]
    );
}

#[test]
fn test_expiry_bad_first_digit() {
    let mut engine = engine();
    engine.update_field(FieldName::Expiry, "2");
    assert_eq!(
        engine.current_snapshot().status.expiry,
        ValidationState::Invalid
    );
}

// =============================================================================
// CVC FIELD
// =============================================================================

#[test]
fn test_cvc_length_by_network() {
    assert_eq!(validate_cvc("123", CardNetwork::Amex), ValidationState::Incomplete);
    assert_eq!(validate_cvc("1234", CardNetwork::Amex), ValidationState::Valid);
    assert_eq!(validate_cvc("12345", CardNetwork::Amex), ValidationState::Invalid);
    assert_eq!(validate_cvc("123", CardNetwork::Visa), ValidationState::Valid);
}

#[test]
fn test_cvc_follows_number_changes() {
    let mut engine = engine();
    engine.update_field(FieldName::Number, VISA_1);
    engine.update_field(FieldName::Cvc, "123");
    assert_eq!(engine.current_snapshot().status.cvc, ValidationState::Valid);

    engine.update_field(FieldName::Number, AMEX_1);
    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.values.cvc, "123");
    assert_eq!(snapshot.status.cvc, ValidationState::Incomplete);

    engine.update_field(FieldName::Cvc, "1234");
    assert_eq!(engine.current_snapshot().status.cvc, ValidationState::Valid);
}

// =============================================================================
// AGGREGATE VALIDITY AND CALLBACKS
// =============================================================================

#[test]
fn test_required_empty_name_is_never_valid() {
    let mut engine = FormEngine::new(
        FormConfig::default()
            .with_requires_name(true)
            .with_reference_date(reference()),
    );
    engine.update_field(FieldName::Number, VISA_1);
    engine.update_field(FieldName::Expiry, "1230");
    engine.update_field(FieldName::Cvc, "123");

    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.status.number, ValidationState::Valid);
    assert_eq!(snapshot.status.expiry, ValidationState::Valid);
    assert_eq!(snapshot.status.cvc, ValidationState::Valid);
    assert_eq!(snapshot.status.name, ValidationState::Incomplete);
    assert!(!snapshot.valid);
}

#[test]
fn test_end_to_end_visa() {
    let received: Rc<RefCell<Vec<Arc<FormSnapshot>>>> = Rc::default();
    let sink = Rc::clone(&received);
    let mut engine = create_form_engine(false, move |snapshot| sink.borrow_mut().push(snapshot));

    engine.update_field(FieldName::Number, "4");
    engine.update_field(FieldName::Number, "41111111");
    engine.update_field(FieldName::Number, "4111111111111111");

    let received = received.borrow();
    assert_eq!(received.len(), 3);

    let last = received.last().unwrap();
    assert_eq!(last.values.network, CardNetwork::Visa);
    assert_eq!(last.values.number, "4111 1111 1111 1111");
    assert_eq!(last.status.number, ValidationState::Valid);
    assert_eq!(**last, *engine.current_snapshot());
}

#[test]
fn test_every_snapshot_is_consistent() {
    let mut engine = engine();
    for snapshot in type_number(&mut engine, AMEX_1) {
        assert_eq!(snapshot.network(), detect_network(&snapshot.values.number));
        assert_eq!(
            snapshot.status.number,
            validate_number(&snapshot.values.number, snapshot.network())
        );
        assert_eq!(
            snapshot.status.cvc,
            validate_cvc(&snapshot.values.cvc, snapshot.network())
        );
    }
}

#[test]
fn test_unknown_field_name_is_rejected() {
    let mut engine = engine();
    assert_eq!(
        engine.update_field_named("postcode", "12345"),
        Err(FormError::UnknownField("postcode".into()))
    );
    assert_eq!(
        engine.update_field_named("Number", "4"),
        Err(FormError::UnknownField("Number".into()))
    );
    assert!(engine.update_field_named("number", "4").is_ok());
}

// =============================================================================
// ERROR MESSAGES
// =============================================================================

#[test]
fn test_messages_follow_focus() {
    let messages = ErrorMessages {
        number: FieldMessages::new("Card number is invalid", "Card number is incomplete"),
        expiry: FieldMessages::new("Expiry is invalid", "Expiry is incomplete"),
        cvc: FieldMessages::new("CVC is invalid", "CVC is incomplete"),
        name: Some("Name is required".into()),
    };
    let mut engine = FormEngine::new(
        FormConfig::default()
            .with_reference_date(reference())
            .with_messages(messages),
    );

    engine.update_field(FieldName::Number, "4111 1111");
    engine.update_field(FieldName::Expiry, "0524");

    let snapshot = engine.current_snapshot();
    let messages = &engine.config().messages;

    assert_eq!(
        messages.message_for(&snapshot, FieldName::Number, Some(FieldName::Number)),
        None
    );
    assert_eq!(
        messages.message_for(&snapshot, FieldName::Number, Some(FieldName::Expiry)),
        Some("Card number is incomplete")
    );
    assert_eq!(
        messages.message_for(&snapshot, FieldName::Expiry, Some(FieldName::Expiry)),
        Some("Expiry is invalid")
    );
    assert_eq!(messages.message_for(&snapshot, FieldName::Cvc, None), None);
    assert_eq!(messages.message_for(&snapshot, FieldName::Name, None), None);
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_debug_output_is_masked() {
    let mut engine = engine();
    engine.update_field(FieldName::Number, VISA_2);
    engine.update_field(FieldName::Cvc, "737");

    let debug = format!("{:?}", engine.current_snapshot());
    assert!(!debug.contains("4012 8888"));
    assert!(debug.contains("1881"));
    assert!(!debug.contains("737"));
}

/// Pulls the masked number out of a snapshot's `Debug` output.
fn debug_number(debug: &str) -> String {
    let start = debug.find("number: \"").map(|i| i + "number: \"".len());
    let start = start.expect("number field in debug output");
    let len = debug[start..].find('"').expect("closing quote");
    debug[start..start + len].to_string()
}

#[test]
fn test_debug_while_typing_reveals_only_last_four() {
    let mut engine = engine();
    let mut revealed: Vec<Option<char>> = vec![None; VISA_2.len()];

    for end in 1..=VISA_2.len() {
        engine.update_field(FieldName::Number, &VISA_2[..end]);
        let masked = debug_number(&format!("{:?}", engine.current_snapshot()));
        let digits = masked.chars().filter(|c| *c != ' ');
        for (i, c) in digits.enumerate() {
            if c.is_ascii_digit() {
                revealed[i] = Some(c);
            }
        }
    }

    let recovered: String = revealed.iter().map(|c| c.unwrap_or('?')).collect();
    assert_eq!(recovered, "????????????1881");
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let mut engine = engine();
        engine.update_field(FieldName::Number, AMEX_1);

        let json = serde_json::to_value(engine.current_snapshot().as_ref()).unwrap();
        assert_eq!(json["values"]["type"], "amex");
        assert_eq!(json["values"]["number"], "3782 822463 10005");
        assert_eq!(json["status"]["number"], "valid");
        assert_eq!(json["status"]["cvc"], "incomplete");
        assert_eq!(json["valid"], false);
    }
}
