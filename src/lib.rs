//! # brdocs
//!
//! Brazilian registry documents as validated, immutable value types:
//! the individual taxpayer registry ([`Cpf`], 11 digits) and the
//! legal-entity registry ([`Cnpj`], 14 digits).
//!
//! Both kinds share one modulo-11 check-digit algorithm, parameterized by
//! digit count and weight tables. A value of either type can only exist
//! if its digits passed that check.
//!
//! ## Quick Start
//!
//! ```rust
//! use brdocs::{Cnpj, Cpf, DocumentStrExt};
//!
//! let cpf = Cpf::create("529.982.247-25").unwrap();
//! assert_eq!(cpf.as_str(), "52998224725");
//! assert_eq!(cpf.format(), "529.982.247-25");
//!
//! assert!(Cnpj::try_create("04.252.011/0001-10").is_some());
//! assert!(!"123.456.789-00".is_valid_cpf());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Normalization, check digits, value types, formatting |
//! | `generate` (default) | Random valid documents, injectable digit source |
//! | `rules` | Field-rule adapter for host validation frameworks |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "rules")]
pub mod rules;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
