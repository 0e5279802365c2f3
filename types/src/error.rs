//! Error type for parsing the value types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid nominee address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid base-unit weight: {0:?}")]
    InvalidWeight(String),
}
