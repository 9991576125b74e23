//! Control panel state
//!
//! The panel holds everything a user sees: the device options, the selected
//! device, the volume slider and its label, the loop checkbox and the status
//! line. It is the single source of truth on the remote side and is rebuilt
//! from every successful backend refresh.

use crate::status::StatusLine;
use serde::{Deserialize, Serialize};
use streamer_core::{PlaybackRequest, SliderLevel, StatusSnapshot, VolumeRequest};

/// Controller-owned UI state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    devices: Vec<String>,
    selected: Option<String>,
    level: SliderLevel,
    volume_label: String,
    looping: bool,
    status: StatusLine,
}

impl Panel {
    /// Create an empty panel with the given slider position and loop flag
    pub fn new(level: SliderLevel, looping: bool) -> Self {
        Self {
            devices: Vec::new(),
            selected: None,
            level,
            volume_label: level.label(),
            looping,
            status: StatusLine::default(),
        }
    }

    /// Device options, in backend order
    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    /// Currently selected device, if any
    ///
    /// An empty name counts as no selection.
    pub fn selected_device(&self) -> Option<&str> {
        self.selected.as_deref().filter(|name| !name.is_empty())
    }

    /// Slider position
    pub fn level(&self) -> SliderLevel {
        self.level
    }

    /// Text of the percentage label next to the slider
    ///
    /// Only changes when the label is explicitly updated.
    pub fn volume_label(&self) -> &str {
        &self.volume_label
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Whether `name` is one of the current options
    pub fn has_device(&self, name: &str) -> bool {
        self.devices.iter().any(|d| d == name)
    }

    /// Body for `POST /play` / `POST /stop`, if a device is selected
    pub fn playback_request(&self) -> Option<PlaybackRequest> {
        self.selected_device()
            .map(|name| PlaybackRequest::new(name, self.level, self.looping))
    }

    /// Body for `POST /volume`, if a device is selected
    pub fn volume_request(&self) -> Option<VolumeRequest> {
        self.selected_device()
            .map(|name| VolumeRequest::new(name, self.level))
    }

    /// Rebuild the device options from a snapshot
    ///
    /// The options are replaced wholesale and the selection is re-resolved
    /// with [`resolve_selection`]. Slider, loop flag and status are kept.
    #[must_use]
    pub fn apply_snapshot(self, snapshot: &StatusSnapshot, default_device: Option<&str>) -> Self {
        let selected = resolve_selection(snapshot, default_device, self.selected_device());
        Self {
            devices: snapshot.devices.clone(),
            selected,
            ..self
        }
    }

    pub(crate) fn set_selected(&mut self, name: String) {
        self.selected = Some(name);
    }

    pub(crate) fn set_level(&mut self, level: SliderLevel) {
        self.level = level;
    }

    pub(crate) fn refresh_volume_label(&mut self) {
        self.volume_label = self.level.label();
    }

    pub(crate) fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = status;
    }
}

impl Default for Panel {
    /// 10% volume with looping on, matching the backend's own defaults
    fn default() -> Self {
        Self::new(SliderLevel::default(), true)
    }
}

/// Pick the selection after a refresh
///
/// In order of preference:
/// 1. the configured default device, if listed
/// 2. the device the backend reports as playing, if listed
/// 3. the previous selection, if still listed
/// 4. nothing
pub fn resolve_selection(
    snapshot: &StatusSnapshot,
    default_device: Option<&str>,
    previous: Option<&str>,
) -> Option<String> {
    default_device
        .filter(|name| snapshot.contains(name))
        .or_else(|| snapshot.listed_playing_device())
        .or_else(|| previous.filter(|name| snapshot.contains(name)))
        .map(str::to_string)
}
