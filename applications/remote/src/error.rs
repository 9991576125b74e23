/// Remote application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemoteError>;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid command: {0}")]
    Command(String),

    #[error("Client error: {0}")]
    Client(#[from] streamer_client::ClientError),

    #[error("Control error: {0}")]
    Control(#[from] streamer_control::ControlError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
