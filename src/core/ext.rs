//! Convenience predicates on string slices.

use super::checksum::{DocumentKind, is_valid};

/// Check-digit predicates callable directly on text.
///
/// ```rust
/// use brdocs::DocumentStrExt;
///
/// assert!("529.982.247-25".is_valid_cpf());
/// assert!("04.252.011/0001-10".is_valid_cnpj());
/// ```
pub trait DocumentStrExt {
    /// Whether the text is a valid individual registry number (CPF).
    fn is_valid_cpf(&self) -> bool;

    /// Whether the text is a valid legal-entity registry number (CNPJ).
    fn is_valid_cnpj(&self) -> bool;
}

impl DocumentStrExt for str {
    fn is_valid_cpf(&self) -> bool {
        is_valid(DocumentKind::Cpf, self)
    }

    fn is_valid_cnpj(&self) -> bool {
        is_valid(DocumentKind::Cnpj, self)
    }
}
