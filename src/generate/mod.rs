//! Random generation of valid documents.
//!
//! Generated values are correct by construction: the random prefix is
//! completed with its computed check digits. Useful for test fixtures.
//!
//! # Example
//!
//! ```rust
//! use brdocs::{Cnpj, Cpf};
//!
//! let cpf = Cpf::generate();
//! assert!(Cpf::is_valid(cpf.as_str()));
//!
//! let cnpj = Cnpj::generate();
//! assert_eq!(cnpj.branch(), "0001");
//! ```

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::trace;

use crate::core::{Document, Registry, check_digits};

/// A source of uniformly distributed decimal digits.
///
/// The generator draws from this instead of a global RNG, so callers can
/// plug in a seeded RNG or a fixed digit sequence.
pub trait DigitSource {
    /// Next digit in `0..=9`. The generator reduces larger values modulo 10.
    fn next_digit(&mut self) -> u8;
}

/// Adapts any [`rand::Rng`] into a [`DigitSource`].
#[derive(Debug, Clone)]
pub struct RandomDigits<R> {
    rng: R,
}

impl RandomDigits<ThreadRng> {
    /// Digits from the thread-local RNG.
    pub fn thread() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> RandomDigits<R> {
    /// Digits from the given RNG (e.g. a seeded `StdRng`).
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..10)
    }
}

impl<K: Registry> Document<K> {
    /// Generate a random valid document from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut RandomDigits::thread())
    }

    /// Generate a random valid document drawing digits from `source`.
    ///
    /// Draws exactly `random_len` digits, each reduced modulo 10. CNPJs
    /// always get the headquarters branch `0001`. A CPF prefix made of one
    /// repeated digit `d` gets its last digit replaced by `(d + 1) % 10`,
    /// since it could only produce a repeated-digit number.
    pub fn generate_with<S: DigitSource + ?Sized>(source: &mut S) -> Self {
        let scheme = K::KIND.scheme();
        let mut prefix = Vec::with_capacity(scheme.len);

        prefix.extend((0..scheme.random_len).map(|_| source.next_digit() % 10));
        prefix.extend_from_slice(scheme.fixed_suffix);
        if crate::core::is_repeated(&prefix) {
            let last = scheme.random_len - 1;
            prefix[last] = (prefix[last] + 1) % 10;
            trace!(kind = %K::KIND, "adjusted repeated-digit prefix");
        }

        let [first, second] = check_digits(K::KIND, &prefix);
        prefix.push(first);
        prefix.push(second);

        let digits: String = prefix.iter().map(|&d| char::from(b'0' + d)).collect();
        trace!(kind = %K::KIND, digits = %digits, "generated document");
        Self::from_valid_digits(digits)
    }

    /// Generate `count` random valid documents.
    pub fn generate_many(count: usize) -> Vec<Self> {
        let mut source = RandomDigits::thread();
        (0..count).map(|_| Self::generate_with(&mut source)).collect()
    }
}
