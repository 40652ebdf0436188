use thiserror::Error;

#[derive(Error, Debug)]
pub enum CedarError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Feed decode error: {0}")]
    Decode(String),

    #[error("Cache store error: {0}")]
    Store(String),

    #[error("Mail dispatch error: {0}")]
    Dispatch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CedarError>;
