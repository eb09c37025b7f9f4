//! Error types cho core library

use rust_decimal::Decimal;
use thiserror::Error;

/// Lỗi khi tính phí cho một khoản vay
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("No fee structure for term {0} months")]
    UnknownTerm(u32),

    #[error("The amount is out of bounds for the available fee structure. (term {term}, amount {amount})")]
    AmountOutOfRange { term: u32, amount: Decimal },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fee for amount {amount} exceeds the supported numeric range")]
    Overflow { amount: Decimal },
}

impl FeeError {
    /// HTTP status code tương ứng cho request layer
    pub fn status_code(&self) -> u16 {
        match self {
            FeeError::UnknownTerm(_) => 404,
            FeeError::AmountOutOfRange { .. } => 422,
            FeeError::InvalidInput(_) => 400,
            FeeError::Overflow { .. } => 422,
        }
    }
}

/// Lỗi khi nạp bảng phí, tách biệt với lỗi tính phí
#[derive(Error, Debug)]
pub enum LoadError {
    /// File not found
    #[error("fee structure file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid JSON
    #[error("invalid JSON format in fee structure: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed JSON with unusable content
    #[error("invalid fee structure: {0}")]
    Validation(String),
}

/// Result type alias sử dụng FeeError
pub type Result<T> = std::result::Result<T, FeeError>;
