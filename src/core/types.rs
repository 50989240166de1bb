use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::checksum::{self, DocumentKind};
use super::error::DocumentError;
use super::normalize::normalize as strip_non_digits;

mod sealed {
    pub trait Sealed {}
}

/// Type-level marker selecting a document kind.
///
/// Sealed: only [`Individual`] and [`LegalEntity`] implement it.
pub trait Registry: sealed::Sealed + 'static {
    /// The runtime kind this marker stands for.
    const KIND: DocumentKind;
}

/// Marker for the individual taxpayer registry (CPF).
#[derive(Debug)]
pub enum Individual {}

/// Marker for the legal-entity registry (CNPJ).
#[derive(Debug)]
pub enum LegalEntity {}

impl sealed::Sealed for Individual {}
impl sealed::Sealed for LegalEntity {}

impl Registry for Individual {
    const KIND: DocumentKind = DocumentKind::Cpf;
}

impl Registry for LegalEntity {
    const KIND: DocumentKind = DocumentKind::Cnpj;
}

/// A validated registry document holding its normalized digits.
///
/// Instances only come from [`Document::create`] (and the conversions built
/// on it) or from the generator, so the digits always have the right length,
/// are not one repeated digit, and end in matching check digits.
pub struct Document<K: Registry> {
    digits: String,
    kind: PhantomData<fn() -> K>,
}

/// Individual taxpayer registry number, e.g. `529.982.247-25`.
pub type Cpf = Document<Individual>;

/// Legal-entity registry number, e.g. `04.252.011/0001-10`.
pub type Cnpj = Document<LegalEntity>;

impl<K: Registry> Document<K> {
    /// Wrap digits already known to be valid.
    pub(crate) fn from_valid_digits(digits: String) -> Self {
        debug_assert!(checksum::is_valid(K::KIND, &digits));
        Self {
            digits,
            kind: PhantomData,
        }
    }

    /// Create a document from text with or without punctuation.
    ///
    /// Returns [`DocumentError::InvalidDocumentFormat`] if the input does not
    /// normalize to a valid document of this kind.
    pub fn create(input: &str) -> Result<Self, DocumentError> {
        checksum::validate(K::KIND, input).map(Self::from_valid_digits)
    }

    /// Like [`create`](Self::create), but returns `None` instead of an error.
    pub fn try_create(input: &str) -> Option<Self> {
        Self::create(input).ok()
    }

    /// Whether `input` would be accepted by [`create`](Self::create).
    pub fn is_valid(input: &str) -> bool {
        checksum::is_valid(K::KIND, input)
    }

    /// Strip everything but ASCII digits from `input`.
    pub fn normalize(input: &str) -> String {
        strip_non_digits(input)
    }

    /// The document kind.
    pub fn kind(&self) -> DocumentKind {
        K::KIND
    }

    /// Normalized digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Consume the document, returning its normalized digits.
    pub fn into_string(self) -> String {
        self.digits
    }

    /// Numeric value of each digit, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.bytes().map(|b| b - b'0')
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.digits[self.digits.len() - 2..]
    }

    /// Canonical punctuated form: `DDD.DDD.DDD-DD` or `DD.DDD.DDD/DDDD-DD`.
    pub fn format(&self) -> String {
        checksum::format_digits(K::KIND, &self.digits)
    }
}

impl Cpf {
    /// Fiscal region digit (9th digit) identifying the issuing tax region.
    pub fn fiscal_region(&self) -> u8 {
        self.digits.as_bytes()[8] - b'0'
    }
}

impl Cnpj {
    /// The 8-digit root shared by all establishments of the entity.
    pub fn root(&self) -> &str {
        &self.digits[..8]
    }

    /// The 4-digit branch (establishment) number.
    pub fn branch(&self) -> &str {
        &self.digits[8..12]
    }

    /// Whether this is the primary establishment (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == "0001"
    }
}

impl<K: Registry> Clone for Document<K> {
    fn clone(&self) -> Self {
        Self {
            digits: self.digits.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: Registry> PartialEq for Document<K> {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl<K: Registry> Eq for Document<K> {}

impl<K: Registry> Hash for Document<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl<K: Registry> PartialOrd for Document<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Registry> Ord for Document<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.cmp(&other.digits)
    }
}

impl<K: Registry> fmt::Debug for Document<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match K::KIND {
            DocumentKind::Cpf => "Cpf",
            DocumentKind::Cnpj => "Cnpj",
        };
        f.debug_tuple(name).field(&self.digits).finish()
    }
}

impl<K: Registry> fmt::Display for Document<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl<K: Registry> FromStr for Document<K> {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl<K: Registry> TryFrom<&str> for Document<K> {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl<K: Registry> TryFrom<String> for Document<K> {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl<K: Registry> AsRef<str> for Document<K> {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl<K: Registry> From<Document<K>> for String {
    fn from(doc: Document<K>) -> Self {
        doc.digits
    }
}

impl<K: Registry> Serialize for Document<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.digits)
    }
}

impl<'de, K: Registry> Deserialize<'de> for Document<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::create(&raw).map_err(de::Error::custom)
    }
}
