use thiserror::Error;

/// Errors raised by the configurable hashing and search APIs.
///
/// The plain `search*` functions never fail; only parameter validation and
/// scans over an alphabet the parameters cannot encode produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hash parameter was rejected by the builder.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The base is not larger than every symbol code of the scanned alphabet.
    #[error("base {base} cannot encode symbols with codes up to {max_code}")]
    AlphabetTooWide { base: u64, max_code: u64 },
}

impl Error {
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

/// Result type for hashing and search operations
pub type Result<T> = std::result::Result<T, Error>;
