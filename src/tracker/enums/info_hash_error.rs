use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InfoHashError {
    #[error("Info hash must be 40 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("Info hash must be 20 bytes, got {0}")]
    InvalidByteLength(usize),

    #[error("Info hash contains non-hex characters: {0}")]
    InvalidHex(String),
}
