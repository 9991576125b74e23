/// Device domain types
use serde::{Deserialize, Serialize};

/// A named audio output endpoint managed by the backend
///
/// The name is the only attribute the remote knows about; it is unique
/// within a single device listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    /// Display name, also used as the device identifier
    pub name: String,
}

impl Device {
    /// Create a device from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Backend-reported set of known devices plus the one currently playing
///
/// Wire shape of `GET /status`:
/// `{"devices": ["Kitchen", "Office"], "playing_device": "Office"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Device names in the order the backend listed them
    pub devices: Vec<String>,

    /// Device currently playing, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing_device: Option<String>,
}

impl StatusSnapshot {
    /// Create a snapshot from device names and the playing device
    pub fn new(devices: Vec<String>, playing_device: Option<String>) -> Self {
        Self {
            devices,
            playing_device,
        }
    }

    /// Check whether `name` is one of the listed devices
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.devices.iter().any(|d| d == name)
    }

    /// Playing device, only if it is also part of the listing
    #[must_use]
    pub fn listed_playing_device(&self) -> Option<&str> {
        self.playing_device
            .as_deref()
            .filter(|name| self.contains(name))
    }
}

/// A plain `GET /devices` listing carries no playback information
impl From<Vec<Device>> for StatusSnapshot {
    fn from(devices: Vec<Device>) -> Self {
        Self {
            devices: devices.into_iter().map(|d| d.name).collect(),
            playing_device: None,
        }
    }
}
