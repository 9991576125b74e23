//! Error types for the UI controller

use streamer_client::ClientError;
use thiserror::Error;

/// Controller errors
///
/// Every error is also written to the panel's status line before it is
/// returned, so callers may ignore it and keep the panel running.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Play or stop was requested without a selected device
    #[error("No device selected")]
    NoDeviceSelected,

    /// A device outside the current listing was picked
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// The backend request failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, ControlError>;
