use thiserror::Error;

#[derive(Debug, Error)]
pub enum TlfbError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid substance catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("{name} is missing")]
    MissingField { name: &'static str },
    #[error("{name} is not a valid value: {value:?}")]
    InvalidField { name: &'static str, value: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TlfbError>;
