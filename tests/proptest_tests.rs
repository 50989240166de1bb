//! Property-based tests for normalization, validation, and generation.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "generate")]

use brdocs::core::*;
use brdocs::generate::{DigitSource, RandomDigits};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_kind() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![Just(DocumentKind::Cpf), Just(DocumentKind::Cnpj)]
}

/// A digit string of exactly `len` ASCII digits.
fn arb_digits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Replays digits from a proptest-chosen vector, cycling.
struct Replay(Vec<u8>, usize);

impl DigitSource for Replay {
    fn next_digit(&mut self) -> u8 {
        let d = self.0[self.1 % self.0.len()];
        self.1 += 1;
        d
    }
}

// ── Normalization ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_keeps_only_ascii_digits(input in ".*") {
        prop_assert!(normalize(&input).bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn normalize_preserves_digit_order(digits in "[0-9]{0,20}", noise in "[ ./a-z-]{0,5}") {
        let mut mixed = String::new();
        for c in digits.chars() {
            mixed.push(c);
            mixed.push_str(&noise);
        }
        prop_assert_eq!(normalize(&mixed), digits);
    }

    #[test]
    fn arbitrary_text_never_panics(kind in arb_kind(), input in ".*") {
        let _ = is_valid(kind, &input);
        let _ = validate(kind, &input);
    }
}

// ── Validation ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_digits_never_valid(d in 0u8..10) {
        let c = char::from(b'0' + d);
        let cpf: String = std::iter::repeat_n(c, 11).collect();
        let cnpj: String = std::iter::repeat_n(c, 14).collect();
        prop_assert!(!Cpf::is_valid(&cpf));
        prop_assert!(!Cnpj::is_valid(&cnpj));
    }

    #[test]
    fn wrong_length_never_valid(kind in arb_kind(), len in 0usize..20) {
        prop_assume!(len != kind.digit_count());
        let input = "7".repeat(len.saturating_sub(1)) + if len > 0 { "3" } else { "" };
        prop_assert!(!is_valid(kind, &input));
    }

    #[test]
    fn completing_a_prefix_makes_it_valid(prefix in arb_digits(9)) {
        let digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        prop_assume!(digits.iter().any(|&d| d != digits[0]));
        let [a, b] = check_digits(DocumentKind::Cpf, &digits);
        let full = format!("{prefix}{a}{b}");
        prop_assert!(Cpf::is_valid(&full));
    }

    #[test]
    fn changing_a_check_digit_invalidates(prefix in arb_digits(12), bump in 1u8..10) {
        let digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        let [a, b] = check_digits(DocumentKind::Cnpj, &digits);
        let wrong = (b + bump) % 10;
        let full = format!("{prefix}{a}{wrong}");
        prop_assert!(!Cnpj::is_valid(&full));
    }

    #[test]
    fn create_agrees_with_is_valid(kind in arb_kind(), digits in arb_digits(14)) {
        let input = &digits[..kind.digit_count()];
        let created = match kind {
            DocumentKind::Cpf => Cpf::create(input).is_ok(),
            DocumentKind::Cnpj => Cnpj::create(input).is_ok(),
        };
        prop_assert_eq!(created, is_valid(kind, input));
    }
}

// ── Generation ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_cpf_is_valid(seed: u64) {
        let cpf = Cpf::generate_with(&mut RandomDigits::from_rng(StdRng::seed_from_u64(seed)));
        prop_assert!(is_valid(DocumentKind::Cpf, cpf.as_str()));
        prop_assert_eq!(cpf.as_str().len(), 11);
    }

    #[test]
    fn generated_cnpj_is_valid_headquarters(seed: u64) {
        let cnpj = Cnpj::generate_with(&mut RandomDigits::from_rng(StdRng::seed_from_u64(seed)));
        prop_assert!(is_valid(DocumentKind::Cnpj, cnpj.as_str()));
        prop_assert_eq!(&cnpj.as_str()[8..12], "0001");
    }

    #[test]
    fn generated_from_any_digits_is_valid(digits in prop::collection::vec(0u8..10, 1..40)) {
        let cpf = Cpf::generate_with(&mut Replay(digits.clone(), 0));
        prop_assert!(Cpf::is_valid(cpf.as_str()));
        prop_assert!(Cpf::create(cpf.as_str()).is_ok());
    }

    #[test]
    fn format_then_normalize_is_identity(seed: u64) {
        let mut source = RandomDigits::from_rng(StdRng::seed_from_u64(seed));
        let cpf = Cpf::generate_with(&mut source);
        let cnpj = Cnpj::generate_with(&mut source);
        prop_assert_eq!(normalize(&cpf.format()), cpf.as_str());
        prop_assert_eq!(normalize(&cnpj.format()), cnpj.as_str());
    }

    #[test]
    fn formatted_input_creates_equal_document(seed: u64) {
        let cnpj = Cnpj::generate_with(&mut RandomDigits::from_rng(StdRng::seed_from_u64(seed)));
        let reparsed = Cnpj::create(&cnpj.format()).unwrap();
        prop_assert_eq!(reparsed, cnpj);
    }
}
