use thiserror::Error;

/// Failure to obtain a structured reply from the server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Unreadable response: {0}")]
    Decode(String),
}
