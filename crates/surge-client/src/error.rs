use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("broker rejected record: {0}")]
    Rejected(String),
    #[error("send timed out")]
    Timeout,
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Io(e.to_string())
    }
}
