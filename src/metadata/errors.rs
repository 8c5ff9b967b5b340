use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Torrent not found")]
    NotFound,

    #[error("Metadata service unavailable (503)")]
    Unavailable,

    #[error("Metadata request timed out")]
    Timeout,

    #[error("Unexpected HTTP status {0}")]
    Http(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed torrent data: {0}")]
    Malformed(String),
}
