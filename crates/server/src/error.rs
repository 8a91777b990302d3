use rust_decimal::Decimal;
use sea_orm::DbErr;
use thiserror::Error;

/// A fixed-point value does not fit the digit budget of its column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("{field}: at most {scale} digits allowed after the decimal point")]
    ScaleExceeded { field: &'static str, scale: u32 },
    #[error("{field}: at most {max_digits} total digits with {scale} after the decimal point")]
    PrecisionExceeded {
        field: &'static str,
        max_digits: u32,
        scale: u32,
    },
    #[error("{field}: must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: Decimal,
        max: Decimal,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Stable error code carried in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "RESOURCE_NOT_FOUND",
            StoreError::Budget(_) | StoreError::InvalidField { .. } => "VALIDATION_ERROR",
            StoreError::Database(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}
