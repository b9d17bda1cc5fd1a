use std::fmt;

/// Result type for utterbank-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while operating on a corpus
#[derive(Debug)]
pub enum Error {
    /// Input rejected before reaching the store
    Validation(String),

    /// A referenced example does not exist
    NotFound(String),

    /// The storage backend failed
    Store(utterbank_store::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<utterbank_store::Error> for Error {
    fn from(err: utterbank_store::Error) -> Self {
        Error::Store(err)
    }
}
