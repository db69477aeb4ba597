//! # Polynomial Rolling Hash
//!
//! This module implements the **polynomial rolling hash** that drives Rabin-Karp substring
//! search. A window `[s_0, s_1, ..., s_{m-1}]` is read as the digits of a number in base `B`
//! and reduced modulo a prime `P`:
//!
//! ```text
//!   H(s) = ( ( (s_0 * B + s_1) * B + s_2 ) * B + ... + s_{m-1} ) mod P
//! ```
//!
//! Sliding the window one position to the right is O(1): the outgoing symbol's weighted
//! contribution `s_0 * B^(m-1)` is subtracted, the remainder is shifted by one digit and the
//! incoming symbol is added.
//!
//! ## Key Features
//! - **Configurable base** (radix) and **prime modulus** through [`PolyHashBuilder`].
//! - **Generic symbols**: bytes, `u16` code units and `char`s, via the [`Symbol`] trait.
//! - **128-bit intermediates**, so any modulus below `2^63` is overflow-free.
//!
//! **Note**: This is **not** cryptographically secure. Equal windows always hash equally,
//! but distinct windows may collide, so callers must verify hash hits.

use num_prime::nt_funcs::is_prime64;

use crate::cs::error::{Error, Result};

/// Default base (radix). Strictly greater than every 8-bit code.
pub const DEFAULT_BASE: u64 = 257;
/// Default prime modulus.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;
/// Smallest prime greater than the largest Unicode scalar value (`0x10FFFF`).
pub const WIDE_BASE: u64 = 1_114_117;

const MODULUS_LIMIT: u64 = 1 << 63;

/// A sequence element that can be hashed as a polynomial digit.
pub trait Symbol: Copy + Eq {
    /// Largest code any value of this type maps to.
    const MAX_CODE: u64;

    /// The digit value of this symbol.
    fn code(self) -> u64;
}

impl Symbol for u8 {
    const MAX_CODE: u64 = u8::MAX as u64;

    #[inline]
    fn code(self) -> u64 {
        self as u64
    }
}

impl Symbol for u16 {
    const MAX_CODE: u64 = u16::MAX as u64;

    #[inline]
    fn code(self) -> u64 {
        self as u64
    }
}

impl Symbol for char {
    const MAX_CODE: u64 = char::MAX as u64;

    #[inline]
    fn code(self) -> u64 {
        self as u64
    }
}

/// Validated base/modulus pair shared by every hash computed in one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl HashParams {
    /// Parameters able to encode every `char`: [`WIDE_BASE`] with the default modulus.
    pub const fn wide() -> Self {
        Self {
            base: WIDE_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns true if every symbol of type `T` is a distinct digit in this base.
    pub fn supports<T: Symbol>(&self) -> bool {
        self.base > T::MAX_CODE
    }

    pub(crate) fn check_alphabet<T: Symbol>(&self) -> Result<()> {
        if self.supports::<T>() {
            Ok(())
        } else {
            Err(Error::AlphabetTooWide {
                base: self.base,
                max_code: T::MAX_CODE,
            })
        }
    }

    /// Hashes `window` from scratch: `hash = (hash * base + code) mod modulus` per symbol.
    pub fn hash<T: Symbol>(&self, window: &[T]) -> u64 {
        window.iter().fold(0, |hash, &sym| {
            add_mod(
                mul_mod(hash, self.base, self.modulus),
                sym.code() % self.modulus,
                self.modulus,
            )
        })
    }

    /// `base^(len-1) mod modulus`, the weight of the leading symbol of a `len`-long window.
    ///
    /// A window of length 0 or 1 has weight 1.
    pub fn leading_power(&self, len: usize) -> u64 {
        pow_mod(self.base, len.saturating_sub(1) as u64, self.modulus)
    }
}

/// A builder for [`HashParams`], validating base and modulus.
#[derive(Debug, Clone)]
pub struct PolyHashBuilder {
    base: u64,
    modulus: u64,
}

impl Default for PolyHashBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolyHashBuilder {
    /// Creates a new builder with default base/modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the radix of the polynomial).
    /// Must exceed the largest symbol code of the alphabet being searched.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus. Must be a prime below `2^63`.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Validates the configuration and returns the parameters.
    pub fn build(self) -> Result<HashParams> {
        if self.base < 2 {
            return Err(Error::invalid_parameter(format!(
                "base must be >= 2, got {}",
                self.base
            )));
        }
        if self.modulus >= MODULUS_LIMIT {
            return Err(Error::invalid_parameter(format!(
                "modulus must be < 2^63, got {}",
                self.modulus
            )));
        }
        if !is_prime64(self.modulus) {
            return Err(Error::invalid_parameter(format!(
                "modulus must be prime, got {}",
                self.modulus
            )));
        }
        Ok(HashParams {
            base: self.base,
            modulus: self.modulus,
        })
    }
}

/// The hash of a fixed-length window sliding over a sequence.
#[derive(Debug, Clone)]
pub struct RollingHash {
    params: HashParams,
    /// Hash of the current window, in `[0, modulus)`.
    hash: u64,
    /// `base^(len-1) mod modulus`, used to cancel the outgoing symbol.
    leading_power: u64,
    len: usize,
}

impl RollingHash {
    /// Hashes the initial `window`; its length is fixed for the life of the hash.
    pub fn new<T: Symbol>(params: HashParams, window: &[T]) -> Self {
        Self {
            params,
            hash: params.hash(window),
            leading_power: params.leading_power(window.len()),
            len: window.len(),
        }
    }

    pub fn current_hash(&self) -> u64 {
        self.hash
    }

    pub fn window_len(&self) -> usize {
        self.len
    }

    /// Slides the window one position: drops `outgoing` (the current first symbol)
    /// and appends `incoming`.
    #[inline]
    pub fn roll<T: Symbol>(&mut self, outgoing: T, incoming: T) {
        let modulus = self.params.modulus;
        let leading = mul_mod(outgoing.code(), self.leading_power, modulus);
        let shifted = mul_mod(sub_mod(self.hash, leading, modulus), self.params.base, modulus);
        self.hash = add_mod(shifted, incoming.code() % modulus, modulus);
    }
}

// internal ops; add_mod and sub_mod expect operands already reduced below `m`

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        (a + m) - b
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}
