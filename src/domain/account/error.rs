use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("smart account '{0}' already exists")]
    DuplicateKey(String),
    #[error("smart account '{0}' not found")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
