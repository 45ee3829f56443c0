//! Error types for ftl-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FtlError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

pub type Result<T> = std::result::Result<T, FtlError>;
