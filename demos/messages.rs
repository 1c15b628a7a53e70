//! Choosing error messages for a view.
//!
//! Run with: `cargo run --example messages`

use card_form::expiry::YearMonth;
use card_form::feedback::{ErrorMessages, FieldMessages};
use card_form::{FieldName, FormConfig, FormEngine};

fn main() {
    println!("=== Error Messages ===\n");

    let messages = ErrorMessages {
        number: FieldMessages::new("Card number is invalid", "Card number is incomplete"),
        expiry: FieldMessages::new("Expiry date is invalid", "Expiry date is incomplete"),
        cvc: FieldMessages::new("Security code is invalid", "Security code is incomplete"),
        name: Some("Name on card is required".to_string()),
    };

    let mut config = FormConfig::default()
        .with_requires_name(true)
        .with_messages(messages);
    if let Ok(reference) = YearMonth::new(2024, 6) {
        config = config.with_reference_date(reference);
    }

    let mut engine = FormEngine::new(config);
    engine.update_field(FieldName::Number, "4111 1111");
    engine.update_field(FieldName::Expiry, "05/24");
    engine.update_field(FieldName::Cvc, "12");
    engine.update_field(FieldName::Name, " ");

    let snapshot = engine.current_snapshot();
    let messages = &engine.config().messages;

    // walk focus through the form the way a user tabs through it
    let focus_order = [
        Some(FieldName::Number),
        Some(FieldName::Expiry),
        Some(FieldName::Cvc),
        Some(FieldName::Name),
        None,
    ];

    for focused in focus_order {
        match focused {
            Some(field) => println!("Focus on {}:", field),
            None => println!("Nothing focused:"),
        }
        for field in FieldName::ALL {
            let shown = messages
                .message_for(&snapshot, field, focused)
                .unwrap_or("-");
            println!("  {:<7} {:<11} {}", field, snapshot.status.get(field), shown);
        }
        println!();
    }
}
