use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("HTTP error! status: {status}")]
    Fetch { status: u16 },
    #[error("failed to send request: {0}")]
    Request(String),
    #[error("failed to parse manifest: {0}")]
    Parse(String),
    #[error("invalid classification: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
