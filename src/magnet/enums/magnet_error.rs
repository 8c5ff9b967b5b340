use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MagnetError {
    #[error("not a magnet link")]
    Scheme,
    #[error("magnet link has no urn:btih exact topic")]
    MissingInfoHash,
    #[error("invalid info hash '{0}'")]
    InvalidInfoHash(String),
}
