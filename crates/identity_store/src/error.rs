//! Identity store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IdentityError>;
