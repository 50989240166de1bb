//! Core document types, check-digit validation, and formatting.
//!
//! This module holds the single modulo-11 algorithm shared by CPF and
//! CNPJ, the normalizer feeding it, and the value types built on top.

mod checksum;
mod error;
mod ext;
mod normalize;
mod types;

pub use checksum::*;
pub(crate) use checksum::is_repeated;
pub use error::*;
pub use ext::DocumentStrExt;
pub use normalize::*;
pub use types::*;
