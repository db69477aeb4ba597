//! # Rabin-Karp Substring Search
//!
//! Finds every position where a pattern occurs as a contiguous run of a text, using a
//! [`RollingHash`] over a pattern-sized window. Each window whose hash equals the pattern's
//! hash is confirmed by direct comparison, so hash collisions ("spurious hits") never
//! surface as matches, and unequal hashes reject a window without looking at it.
//!
//! Overlapping occurrences are all reported, in ascending order.
//!
//! # Usage
//!
//! ```rust
//! use rabin_karp::{search, search_chars, PolyHashBuilder, RabinKarp};
//!
//! assert_eq!(search(b"aaa", b"aa"), vec![0, 1]);
//! assert_eq!(search_chars("naïve café", "é"), vec![9]);
//!
//! let params = PolyHashBuilder::new().with_modulus(101).build().unwrap();
//! let searcher = RabinKarp::with_params(params);
//! assert_eq!(searcher.find_all(b"abracadabra", b"abra").unwrap(), vec![0, 7]);
//! ```
//!
//! # Complexity
//! * Time: O(n + m) expected, O(n * m) worst case when nearly every window is a hash hit
//! * Space: O(1) beyond the returned positions

use std::iter::FusedIterator;

use log::{debug, trace};
use rayon::prelude::*;

use crate::cs::error::Result;
use crate::cs::hashing::polynomial_rolling::{HashParams, RollingHash, Symbol};

/// Searches `text` for every occurrence of `pattern`, byte-wise.
///
/// Returns the ascending start offsets of all (possibly overlapping) occurrences.
/// An empty pattern, or one longer than the text, yields no matches.
///
/// # Examples
/// ```
/// use rabin_karp::search;
///
/// assert_eq!(search(b"abracadabra", b"abra"), vec![0, 7]);
/// assert!(search(b"hello world", b"goodbye").is_empty());
/// ```
pub fn search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    Matches::new(HashParams::default(), text, pattern).collect()
}

/// Byte-wise search over UTF-8 strings. Positions are byte offsets into `text`.
pub fn search_str(text: &str, pattern: &str) -> Vec<usize> {
    search(text.as_bytes(), pattern.as_bytes())
}

/// Searches `text` by Unicode scalar value. Positions are character indices, not byte offsets.
pub fn search_chars(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    Matches::new(HashParams::wide(), &text, &pattern).collect()
}

/// Runs [`search`] on every `(text, pattern)` pair in parallel.
///
/// The result at index `i` holds the positions for `pairs[i]`.
pub fn search_batch(pairs: &[(&[u8], &[u8])]) -> Vec<Vec<usize>> {
    pairs
        .par_iter()
        .map(|&(text, pattern)| search(text, pattern))
        .collect()
}

/// A Rabin-Karp searcher with fixed hash parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RabinKarp {
    params: HashParams,
}

impl RabinKarp {
    /// Creates a searcher with the default base (257) and modulus (1,000,000,007).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: HashParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> HashParams {
        self.params
    }

    /// Returns a lazy iterator over the match positions of `pattern` in `text`.
    ///
    /// # Errors
    /// `Error::AlphabetTooWide` if the base cannot encode every value of `T`.
    pub fn find_iter<'a, T: Symbol>(
        &self,
        text: &'a [T],
        pattern: &'a [T],
    ) -> Result<Matches<'a, T>> {
        self.params.check_alphabet::<T>()?;
        Ok(Matches::new(self.params, text, pattern))
    }

    /// Collects every match position, ascending.
    pub fn find_all<T: Symbol>(&self, text: &[T], pattern: &[T]) -> Result<Vec<usize>> {
        Ok(self.find_iter(text, pattern)?.collect())
    }

    /// The first match position, if any. Stops scanning as soon as it is found.
    pub fn find_first<T: Symbol>(&self, text: &[T], pattern: &[T]) -> Result<Option<usize>> {
        Ok(self.find_iter(text, pattern)?.next())
    }

    pub fn count<T: Symbol>(&self, text: &[T], pattern: &[T]) -> Result<usize> {
        Ok(self.find_iter(text, pattern)?.count())
    }
}

/// Counters collected while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Windows examined so far.
    pub windows: usize,
    /// Windows whose hash equalled the pattern's hash.
    pub hash_hits: usize,
    /// Hash hits rejected by direct comparison.
    pub spurious_hits: usize,
}

/// Iterator over the start positions of a pattern in a text, ascending.
///
/// Created by [`RabinKarp::find_iter`].
#[derive(Debug, Clone)]
pub struct Matches<'a, T> {
    text: &'a [T],
    pattern: &'a [T],
    pattern_hash: u64,
    /// `None` once the last window has been examined, or if no window exists.
    window: Option<RollingHash>,
    start: usize,
    stats: ScanStats,
}

impl<'a, T: Symbol> Matches<'a, T> {
    pub(crate) fn new(params: HashParams, text: &'a [T], pattern: &'a [T]) -> Self {
        let m = pattern.len();
        let (pattern_hash, window) = if m == 0 || m > text.len() {
            (0, None)
        } else {
            (
                params.hash(pattern),
                Some(RollingHash::new(params, &text[..m])),
            )
        };

        Self {
            text,
            pattern,
            pattern_hash,
            window,
            start: 0,
            stats: ScanStats::default(),
        }
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}

impl<T: Symbol> Iterator for Matches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.pattern.len();
        let last_start = self.text.len().saturating_sub(m);

        loop {
            let window = self.window.as_mut()?;
            let start = self.start;
            self.stats.windows += 1;

            let mut found = false;
            if window.current_hash() == self.pattern_hash {
                self.stats.hash_hits += 1;
                if verify(&self.text[start..start + m], self.pattern) {
                    found = true;
                } else {
                    self.stats.spurious_hits += 1;
                    trace!("spurious hash hit at {}", start);
                }
            }

            if start < last_start {
                window.roll(self.text[start], self.text[start + m]);
                self.start = start + 1;
            } else {
                self.window = None;
                debug!(
                    "rabin-karp scan done: n={}, m={}, windows={}, hash_hits={}, spurious_hits={}",
                    self.text.len(),
                    m,
                    self.stats.windows,
                    self.stats.hash_hits,
                    self.stats.spurious_hits
                );
            }

            if found {
                return Some(start);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.window {
            Some(_) => {
                let remaining = self.text.len() - self.pattern.len() - self.start + 1;
                (0, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl<T: Symbol> FusedIterator for Matches<'_, T> {}

/// Left-to-right comparison, stopping at the first mismatch.
#[inline]
fn verify<T: Symbol>(window: &[T], pattern: &[T]) -> bool {
    window.iter().zip(pattern).all(|(a, b)| a == b)
}
