//! Hashing primitives.
//!
//! - Polynomial rolling hash over a sliding window, used by Rabin-Karp search

pub mod polynomial_rolling;
