/// Request bodies sent to the backend
use serde::{Deserialize, Serialize};

use super::SliderLevel;

/// Which playback endpoint a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackAction {
    Play,
    Stop,
}

impl PlaybackAction {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Stop => "stop",
        }
    }

    /// Endpoint path, relative to the backend base URL
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Play => "/play",
            Self::Stop => "/stop",
        }
    }
}

impl std::fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of `POST /play` and `POST /stop`
///
/// Built fresh for every request from the current control state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackRequest {
    pub device_name: String,

    /// Normalized volume in `[0.0, 1.0]`
    pub volume: f64,

    /// Restart the file when it finishes
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl PlaybackRequest {
    pub fn new(device_name: impl Into<String>, level: SliderLevel, looping: bool) -> Self {
        Self {
            device_name: device_name.into(),
            volume: level.normalized(),
            looping,
        }
    }
}

/// Body of `POST /volume`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeRequest {
    pub device_name: String,

    /// Normalized volume in `[0.0, 1.0]`
    pub volume: f64,
}

impl VolumeRequest {
    pub fn new(device_name: impl Into<String>, level: SliderLevel) -> Self {
        Self {
            device_name: device_name.into(),
            volume: level.normalized(),
        }
    }
}
