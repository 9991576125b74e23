//! Status line shown under the controls
//!
//! All user-facing messages live here so the controller and front ends
//! agree on the wording.

use serde::{Deserialize, Serialize};
use streamer_core::PlaybackAction;

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Nothing has been reported yet
    #[default]
    Idle,
    /// A request is in flight
    Busy,
    /// The last operation completed
    Info,
    /// The last operation failed
    Error,
}

/// Short human-readable message plus its severity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusLine {
    pub fn busy(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Busy,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

pub(crate) const SELECT_DEVICE: &str = "Please select a device.";
pub(crate) const SCANNING: &str = "Scanning for devices...";
pub(crate) const SCAN_COMPLETE: &str = "Scan complete.";
pub(crate) const SCAN_FAILED: &str = "Error finding devices.";
pub(crate) const FETCHING_STATUS: &str = "Fetching status...";
pub(crate) const STATUS_UPDATED: &str = "Status updated.";
pub(crate) const STATUS_FAILED: &str = "Error fetching status.";
pub(crate) const VOLUME_FAILED: &str = "Error updating volume.";

pub(crate) fn unknown_device(name: &str) -> String {
    format!("Unknown device: {}", name)
}

pub(crate) fn action_busy(action: PlaybackAction) -> &'static str {
    match action {
        PlaybackAction::Play => "Playing...",
        PlaybackAction::Stop => "Stopping...",
    }
}

pub(crate) fn action_done(action: PlaybackAction) -> &'static str {
    match action {
        PlaybackAction::Play => "Playback started.",
        PlaybackAction::Stop => "Playback stopped.",
    }
}

pub(crate) fn action_failed(action: PlaybackAction) -> &'static str {
    match action {
        PlaybackAction::Play => "Error starting playback.",
        PlaybackAction::Stop => "Error stopping playback.",
    }
}
