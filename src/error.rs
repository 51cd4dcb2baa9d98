//! Error types for the circulation desk

use thiserror::Error;

use crate::models::{BookId, MemberId};

/// Numeric error codes reported by the shell next to each message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    BadValue = 1,
    NoSuchData = 2,
    NoSuchRecord = 3,
    ItemNotAvailable = 4,
    ConfigFailure = 5,
    IoFailure = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to parse {field} as an integer: {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Book {book_id} is already lent to member {member_id}")]
    AlreadyLent { book_id: BookId, member_id: MemberId },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Parse { .. } => ErrorCode::BadValue,
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::InvalidReference(_) => ErrorCode::NoSuchRecord,
            AppError::AlreadyLent { .. } => ErrorCode::ItemNotAvailable,
            AppError::Config(_) => ErrorCode::ConfigFailure,
            AppError::Io(_) => ErrorCode::IoFailure,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
