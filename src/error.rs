use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("missing environment variable: {0}")]
    MissingEnv(String),
    #[error("{var} is set but {reason}")]
    InvalidEnv { var: String, reason: String },
    #[error("invalid key in {var}: {reason}")]
    InvalidKey { var: String, reason: String },
    #[error("publishable key is a {publishable} key but secret key is a {secret} key")]
    KeyModeMismatch { publishable: String, secret: String },
    #[error("invalid API version: {0}")]
    InvalidApiVersion(String),
    #[error("invalid fee rate: {0}")]
    InvalidFeeRate(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
