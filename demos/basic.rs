//! Standalone field helpers.
//!
//! Run with: `cargo run --example basic`

use card_form::expiry::YearMonth;
use card_form::{
    detect_network, format_number, is_valid_number, validate_cvc, validate_expiry,
    validate_number, CardNetwork,
};

fn main() {
    println!("=== Card Field Helpers ===\n");

    // Example 1: Detect and format
    let numbers = [
        "4111111111111111",
        "5555555555554444",
        "378282246310005",
        "6011111111111117",
        "30569309025904",
        "3530111333300000",
        "6200000000000005",
    ];

    println!("Detection and grouping:");
    for number in numbers {
        let network = detect_network(number);
        println!("  {:<18} {:<12} {}", number, network.name(), format_number(number, network));
    }
    println!();

    // Example 2: Number states
    let cases = [
        ("4111 1111 1111 1111", CardNetwork::Visa),
        ("4111 1111 1111 1112", CardNetwork::Visa),
        ("4111 11", CardNetwork::Visa),
        ("3782 822463 1000", CardNetwork::Amex),
    ];

    println!("Number validation:");
    for (formatted, network) in cases {
        println!("  {:<22} {}", formatted, validate_number(formatted, network));
    }
    println!();

    // Example 3: Quick boolean check
    println!("Complete number checks:");
    for number in ["4012888888881881", "4012888888881882"] {
        println!(
            "  {} - {}",
            number,
            if is_valid_number(number) { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 4: Expiry against a fixed month
    let reference = match YearMonth::new(2024, 6) {
        Ok(reference) => reference,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    println!("Expiry (reference {}):", reference);
    for expiry in ["0624", "05/24", "13/", "1", "12/2"] {
        println!("  {:<6} {}", expiry, validate_expiry(expiry, reference));
    }
    println!();

    // Example 5: Security code length follows the network
    println!("Security codes:");
    for (cvc, network) in [
        ("123", CardNetwork::Visa),
        ("123", CardNetwork::Amex),
        ("1234", CardNetwork::Amex),
        ("12345", CardNetwork::Amex),
    ] {
        println!("  {:<6} {:<18} {}", cvc, network.name(), validate_cvc(cvc, network));
    }
}
