//! String algorithms.
//!
//! This module provides exact substring search:
//! - Rabin-Karp search over bytes, `str` and `char` sequences
//!
//! # Examples
//!
//! ```rust
//! use rabin_karp::string::rabin_karp::search_str;
//!
//! assert_eq!(search_str("abracadabra", "abra"), vec![0, 7]);
//! ```

pub mod rabin_karp;
