use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Parse failed: {0}")]
    Parse(String),
}

impl Error {
    /// Wire label for this error, used in HTTP bodies and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::Fetch(_) => "fetch",
            Error::Parse(_) => "parse",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
