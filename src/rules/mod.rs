//! Field rules for host validation frameworks.
//!
//! A [`FieldRule`] is a predicate over an opaque field value. Frameworks that
//! hold fields as `dyn Any` can attach [`CpfRule`] / [`CnpjRule`] to a field
//! and call [`FieldRule::is_valid`] without knowing anything about documents.
//! Non-text values are never valid.
//!
//! # Example
//!
//! ```rust
//! use brdocs::rules::{CpfRule, FieldRule, validate_field};
//!
//! let tax_id = String::from("529.982.247-25");
//! assert!(CpfRule.is_valid(&tax_id));
//! assert!(!CpfRule.is_valid(&52998224725u64));
//!
//! let err = validate_field(&CpfRule, "customer.tax_id", &"000.000.000-00").unwrap_err();
//! assert_eq!(err.field, "customer.tax_id");
//! ```

use std::any::Any;
use std::borrow::Cow;

use crate::core::{DocumentKind, is_valid};

/// A predicate over an arbitrary field value.
pub trait FieldRule {
    /// Short rule name used in violation reports (e.g. "cpf").
    fn name(&self) -> &'static str;

    /// Whether `value` satisfies the rule. Values of unsupported types fail.
    fn is_valid(&self, value: &dyn Any) -> bool;
}

/// Accepts text that is a valid CPF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpfRule;

/// Accepts text that is a valid CNPJ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CnpjRule;

impl FieldRule for CpfRule {
    fn name(&self) -> &'static str {
        "cpf"
    }

    fn is_valid(&self, value: &dyn Any) -> bool {
        text_of(value).is_some_and(|text| is_valid(DocumentKind::Cpf, text))
    }
}

impl FieldRule for CnpjRule {
    fn name(&self) -> &'static str {
        "cnpj"
    }

    fn is_valid(&self, value: &dyn Any) -> bool {
        text_of(value).is_some_and(|text| is_valid(DocumentKind::Cnpj, text))
    }
}

/// Borrow the text inside a supported string carrier.
fn text_of(value: &dyn Any) -> Option<&str> {
    if let Some(s) = value.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    if let Some(s) = value.downcast_ref::<Box<str>>() {
        return Some(&**s);
    }
    if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        return Some(s.as_ref());
    }
    if let Some(opt) = value.downcast_ref::<Option<String>>() {
        return opt.as_deref();
    }
    None
}

/// A failed field rule, with the dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Dot-separated path to the invalid field (e.g. "buyer.tax_id").
    pub field: String,
    /// Name of the rule that failed.
    pub rule: &'static str,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.field, self.message)
    }
}

impl std::error::Error for FieldViolation {}

/// Run `rule` against a field value, reporting a violation on failure.
pub fn validate_field<R: FieldRule + ?Sized>(
    rule: &R,
    field: impl Into<String>,
    value: &dyn Any,
) -> Result<(), FieldViolation> {
    if rule.is_valid(value) {
        return Ok(());
    }
    Err(FieldViolation {
        field: field.into(),
        rule: rule.name(),
        message: format!("must be a valid {}", rule.name().to_uppercase()),
    })
}
