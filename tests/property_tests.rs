/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use proptest::prelude::*;
use rust_consig_api::normalizer::{
    digits_only, format_cpf, format_phone, validate_cpf, validate_phone,
};

fn first_digits(s: &str, n: usize) -> String {
    digits_only(s).chars().take(n).collect()
}

/// Appends the two check digits to a 9-digit base.
fn complete_cpf(base: &str) -> String {
    let mut digits: Vec<u32> = base.chars().filter_map(|c| c.to_digit(10)).collect();
    for _ in 0..2 {
        let top = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (top - i as u32))
            .sum();
        let check = (sum * 10) % 11;
        digits.push(if check >= 10 { 0 } else { check });
    }
    digits.iter().map(|d| d.to_string()).collect()
}

// Property: Validation should never panic
proptest! {
    #[test]
    fn cpf_validation_never_panics(raw in "\\PC*") {
        let _ = validate_cpf(&raw);
    }

    #[test]
    fn phone_validation_never_panics(raw in "\\PC*") {
        let _ = validate_phone(&raw);
    }
}

// Property: Formatting never alters digit content
proptest! {
    #[test]
    fn cpf_format_preserves_digits(raw in "\\PC*") {
        prop_assert_eq!(digits_only(&format_cpf(&raw)), first_digits(&raw, 11));
    }

    #[test]
    fn phone_format_preserves_digits(raw in "\\PC*") {
        prop_assert_eq!(digits_only(&format_phone(&raw)), first_digits(&raw, 11));
    }

    #[test]
    fn cpf_format_is_idempotent(raw in "\\PC*") {
        let once = format_cpf(&raw);
        prop_assert_eq!(format_cpf(&once), once);
    }

    #[test]
    fn phone_format_is_idempotent(raw in "\\PC*") {
        let once = format_phone(&raw);
        prop_assert_eq!(format_phone(&once), once);
    }
}

// Property: CPF checksum
proptest! {
    #[test]
    fn generated_cpfs_validate(base in "[0-9]{9}") {
        let cpf = complete_cpf(&base);
        let repeated = cpf.chars().all(|c| Some(c) == cpf.chars().next());
        prop_assert_eq!(validate_cpf(&cpf), !repeated);
        prop_assert_eq!(validate_cpf(&format_cpf(&cpf)), !repeated);
    }

    #[test]
    fn corrupted_last_digit_rejected(base in "[0-9]{9}", bump in 1u32..=9) {
        let cpf = complete_cpf(&base);
        let last = cpf.chars().last().and_then(|c| c.to_digit(10)).unwrap();
        let corrupted = format!("{}{}", &cpf[..10], (last + bump) % 10);
        prop_assert!(!validate_cpf(&corrupted));
    }

    #[test]
    fn repeated_digit_cpfs_rejected(d in 0u8..=9) {
        let cpf = d.to_string().repeat(11);
        prop_assert!(!validate_cpf(&cpf));
    }

    #[test]
    fn wrong_length_cpfs_rejected(raw in "[0-9]{0,10}|[0-9]{12,20}") {
        prop_assert!(!validate_cpf(&raw));
    }
}

// Property: Phone structure
proptest! {
    #[test]
    fn formatted_mobiles_accepted(ddd in 11u8..=99u8, rest in 10000000u32..=99999999u32) {
        let raw = format!("{}9{}", ddd, rest);
        prop_assert!(validate_phone(&raw));
        prop_assert!(validate_phone(&format_phone(&raw)));
    }

    #[test]
    fn mobiles_without_nine_rejected(ddd in 11u8..=99u8, first in 0u8..=8u8, rest in 10000000u32..=99999999u32) {
        let raw = format!("{}{}{}", ddd, first, rest);
        prop_assert!(!validate_phone(&raw));
    }

    #[test]
    fn area_code_zero_rejected(second in 0u8..=9u8, rest in "[0-9]{8,9}") {
        let raw = format!("0{}{}", second, rest);
        prop_assert!(!validate_phone(&raw));
    }

    #[test]
    fn short_and_long_phones_rejected(raw in "[0-9]{0,9}|[0-9]{12,20}") {
        prop_assert!(!validate_phone(&raw));
    }
}
