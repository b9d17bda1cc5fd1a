use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    InvalidInput(String),
    Internal(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err)
    }
}

impl From<utterbank_engine::Error> for Error {
    fn from(err: utterbank_engine::Error) -> Self {
        match err {
            utterbank_engine::Error::Validation(msg) => Error::InvalidInput(msg),
            utterbank_engine::Error::NotFound(msg) => Error::NotFound(msg),
            utterbank_engine::Error::Store(err) => Error::Internal(anyhow::Error::new(err)),
        }
    }
}

impl From<utterbank_store::Error> for Error {
    fn from(err: utterbank_store::Error) -> Self {
        Error::Internal(anyhow::Error::new(err))
    }
}
