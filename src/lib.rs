pub mod cs;

pub use cs::{error, hashing, string};
pub use error::{Error, Result};
pub use hashing::polynomial_rolling::{HashParams, PolyHashBuilder, RollingHash, Symbol};
pub use string::rabin_karp::{
    search, search_batch, search_chars, search_str, Matches, RabinKarp, ScanStats,
};
