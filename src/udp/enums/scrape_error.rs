use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("DNS resolution failed for {host}: {reason}")]
    Dns { host: String, reason: String },

    #[error("Timeout waiting for {phase} reply after {attempts} attempts")]
    Timeout { phase: &'static str, attempts: u32 },

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),
}
