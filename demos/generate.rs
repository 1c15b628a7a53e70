//! Generating test card numbers.
//!
//! Run with: `cargo run --example generate --features generate`

use card_form::generate::{generate_card_deterministic, generate_cards, CardGenerator};
use card_form::{format_number, is_valid_number, CardNetwork};

fn main() {
    println!("=== Test Card Generation ===\n");

    println!("Deterministic (same output every run):");
    for network in CardNetwork::KNOWN {
        let number = generate_card_deterministic(network);
        println!(
            "  {:<18} {:<24} {}",
            network.name(),
            format_number(&number, network),
            if is_valid_number(&number) { "valid" } else { "INVALID" }
        );
    }
    println!();

    println!("Random Mastercard numbers:");
    for number in generate_cards(CardNetwork::Mastercard, 3) {
        println!("  {}", format_number(&number, CardNetwork::Mastercard));
    }
    println!();

    println!("19-digit Visa:");
    let number = CardGenerator::new(CardNetwork::Visa).length(19).generate();
    println!("  {}", format_number(&number, CardNetwork::Visa));
}
