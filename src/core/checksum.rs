//! Modulo-11 check digits shared by CPF and CNPJ.
//!
//! Both registries append two check digits to a fixed-length prefix. Each
//! digit is a weighted sum of the digits before it, reduced modulo 11:
//! a remainder below 2 gives `0`, anything else gives `11 - remainder`.
//! The second digit's sum includes the first check digit.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::DocumentError;
use super::normalize::normalize;

/// The two supported registry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas: individual taxpayer, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: legal entity, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// The static check-digit and layout constants for this kind.
    pub fn scheme(self) -> &'static Scheme {
        match self {
            Self::Cpf => &CPF_SCHEME,
            Self::Cnpj => &CNPJ_SCHEME,
        }
    }

    /// Required number of digits after normalization.
    pub fn digit_count(self) -> usize {
        self.scheme().len
    }

    /// Short uppercase name ("CPF" / "CNPJ").
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind constants: lengths, weight tables, generator suffix, layout.
#[derive(Debug)]
pub struct Scheme {
    /// Total digit count including both check digits.
    pub len: usize,
    /// Number of digits the generator draws at random.
    pub random_len: usize,
    /// Digits appended after the random part when generating.
    pub fixed_suffix: &'static [u8],
    /// Weights for the first check digit, most-significant digit first.
    pub first_weights: &'static [u32],
    /// Weights for the second check digit, most-significant digit first.
    pub second_weights: &'static [u32],
    /// Display groups as (width, separator written after the group).
    pub layout: &'static [(usize, &'static str)],
}

impl Scheme {
    /// Length of the prefix the check digits are computed over.
    pub fn prefix_len(&self) -> usize {
        self.len - 2
    }
}

/// CPF: 9 digits + 2 check digits, displayed `DDD.DDD.DDD-DD`.
pub static CPF_SCHEME: Scheme = Scheme {
    len: 11,
    random_len: 9,
    fixed_suffix: &[],
    first_weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    layout: &[(3, "."), (3, "."), (3, "-"), (2, "")],
};

/// CNPJ: 8-digit root + 4-digit branch + 2 check digits, displayed
/// `DD.DDD.DDD/DDDD-DD`. Generated values use the headquarters branch `0001`.
pub static CNPJ_SCHEME: Scheme = Scheme {
    len: 14,
    random_len: 8,
    fixed_suffix: &[0, 0, 0, 1],
    first_weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    layout: &[(2, "."), (3, "."), (3, "/"), (4, "-"), (2, "")],
};

/// Compute one check digit over `digits` with the given weights.
///
/// `digits` and `weights` are paired from the front; extra digits are ignored.
pub fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Compute both check digits for a prefix of `kind.scheme().prefix_len()` digits.
pub fn check_digits(kind: DocumentKind, prefix: &[u8]) -> [u8; 2] {
    let scheme = kind.scheme();
    debug_assert_eq!(prefix.len(), scheme.prefix_len());

    let first = check_digit(prefix, scheme.first_weights);
    let mut extended = Vec::with_capacity(prefix.len() + 1);
    extended.extend_from_slice(prefix);
    extended.push(first);
    let second = check_digit(&extended, scheme.second_weights);
    [first, second]
}

/// Whether every digit of a non-empty slice is the same.
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Check an already-normalized digit string for `kind`.
fn digits_are_valid(kind: DocumentKind, normalized: &str) -> bool {
    let scheme = kind.scheme();
    if normalized.len() != scheme.len {
        return false;
    }
    let digits: Vec<u8> = normalized.bytes().map(|b| b - b'0').collect();

    // Repeated-digit strings pass the checksum for CPF but are never issued.
    if is_repeated(&digits) {
        return false;
    }

    let (prefix, actual) = digits.split_at(scheme.prefix_len());
    check_digits(kind, prefix).as_slice() == actual
}

/// Whether `input` normalizes to a valid document of `kind`.
///
/// This is a predicate: wrong length, repeated digits, and mismatched check
/// digits all give `false`, never an error.
pub fn is_valid(kind: DocumentKind, input: &str) -> bool {
    digits_are_valid(kind, &normalize(input))
}

/// Normalize and check `input`, returning the normalized digits on success.
///
/// Both the strict and the lenient constructors go through this.
pub fn validate(kind: DocumentKind, input: &str) -> Result<String, DocumentError> {
    let normalized = normalize(input);
    if digits_are_valid(kind, &normalized) {
        Ok(normalized)
    } else {
        debug!(%kind, input_len = input.len(), "rejected document input");
        Err(DocumentError::InvalidDocumentFormat {
            kind,
            input: input.to_owned(),
        })
    }
}

/// Render normalized digits in the kind's display layout.
///
/// Callers guarantee `digits.len() == kind.digit_count()`.
pub(crate) fn format_digits(kind: DocumentKind, digits: &str) -> String {
    let scheme = kind.scheme();
    let mut out = String::with_capacity(scheme.len + scheme.layout.len());
    let mut rest = digits;
    for &(width, separator) in scheme.layout {
        let (group, tail) = rest.split_at(width);
        out.push_str(group);
        out.push_str(separator);
        rest = tail;
    }
    out
}
