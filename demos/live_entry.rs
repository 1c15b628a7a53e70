//! Replays a user typing into a card form and prints each snapshot.
//!
//! Run with: `cargo run --example live_entry`
//! Add `RUST_LOG`-style tracing by installing a subscriber in your own app;
//! the engine emits `debug` events for every update.

use card_form::{create_form_engine, FieldName, FormSnapshot};

fn render(snapshot: &FormSnapshot) {
    let values = &snapshot.values;
    println!(
        "  [{:<10}] number={:<22} expiry={:<6} cvc={:<5} name={:<10} valid={}",
        values.network.tag(),
        format!("{:?}", values.number),
        format!("{:?}", values.expiry),
        format!("{:?}", values.cvc),
        format!("{:?}", values.name),
        snapshot.valid,
    );
    println!(
        "  {:<12} number={:<22} expiry={:<6} cvc={:<5} name={}",
        "",
        snapshot.status.number,
        snapshot.status.expiry,
        snapshot.status.cvc,
        snapshot.status.name,
    );
}

fn main() {
    println!("=== Live Card Entry ===\n");

    let mut engine = create_form_engine(true, |snapshot| render(&snapshot));

    // each entry is the full text of the input after one keystroke
    let keystrokes: &[(FieldName, &str)] = &[
        (FieldName::Number, "3"),
        (FieldName::Number, "37"),
        (FieldName::Number, "3782"),
        (FieldName::Number, "3782 8224"),
        (FieldName::Number, "3782 822463 10005"),
        (FieldName::Expiry, "1"),
        (FieldName::Expiry, "12"),
        (FieldName::Expiry, "12/"),
        (FieldName::Expiry, "12"),
        (FieldName::Expiry, "123"),
        (FieldName::Expiry, "12/30"),
        (FieldName::Cvc, "123"),
        (FieldName::Cvc, "1234"),
        (FieldName::Name, "J"),
        (FieldName::Name, "Jane Doe"),
    ];

    for (field, raw) in keystrokes {
        println!("{} <- {:?}", field, raw);
        engine.update_field(*field, raw);
    }

    let snapshot = engine.current_snapshot();
    println!("\nFinal: {:?}", snapshot.values);
    println!("Form is {}", if snapshot.valid { "ready to submit" } else { "not ready" });
}
