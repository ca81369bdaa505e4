use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid parameters - {0}")]
    InvalidParams(serde_json::Error),
    #[error("Secret unavailable - {0}")]
    SecretUnavailable(String),
    #[error("I/O error - {0}")]
    Io(std::io::Error),
}

impl From<serde_json::Error> for CheckError {
    fn from(e: serde_json::Error) -> Self {
        CheckError::InvalidParams(e)
    }
}

impl From<std::io::Error> for CheckError {
    fn from(e: std::io::Error) -> Self {
        CheckError::Io(e)
    }
}
