//! Fuzz target for the form engine.
//!
//! Replays arbitrary edit sequences and checks that every snapshot agrees
//! with the standalone validators.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_form::expiry::YearMonth;
use card_form::{
    detect_network, validate_cvc, validate_number, FieldName, FormConfig, FormEngine,
};

#[derive(Debug, Arbitrary)]
enum Field {
    Number,
    Expiry,
    Cvc,
    Name,
}

impl From<Field> for FieldName {
    fn from(field: Field) -> Self {
        match field {
            Field::Number => FieldName::Number,
            Field::Expiry => FieldName::Expiry,
            Field::Cvc => FieldName::Cvc,
            Field::Name => FieldName::Name,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    requires_name: bool,
    edits: Vec<(Field, String)>,
}

fuzz_target!(|input: Input| {
    let config = FormConfig::default()
        .with_requires_name(input.requires_name)
        .with_reference_date(YearMonth::new(2024, 6).unwrap());
    let mut engine = FormEngine::new(config);

    for (field, raw) in input.edits {
        engine.update_field(field.into(), &raw);

        let snapshot = engine.current_snapshot();
        let network = snapshot.values.network;
        assert_eq!(network, detect_network(&snapshot.values.number));
        assert_eq!(snapshot.status.number, validate_number(&snapshot.values.number, network));
        assert_eq!(snapshot.status.cvc, validate_cvc(&snapshot.values.cvc, network));
        assert_eq!(snapshot.valid, snapshot.status.all_valid());
        let _ = format!("{:?}", snapshot);
    }
});
