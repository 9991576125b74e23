//! User interactions with the panel

use streamer_core::SliderLevel;

/// A single user interaction, dispatched through `Controller::handle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Refresh button
    Refresh,
    /// Slider moved; fired on every drag tick
    VolumeInput(SliderLevel),
    /// Slider released at its final position
    VolumeRelease(SliderLevel),
    /// Loop checkbox changed
    LoopToggled(bool),
    /// Device picked from the selector
    DeviceSelected(String),
    /// Play button
    Play,
    /// Stop button
    Stop,
}

impl PanelEvent {
    /// Whether handling this event may talk to the backend
    pub fn touches_network(&self) -> bool {
        matches!(
            self,
            Self::Refresh | Self::VolumeRelease(_) | Self::Play | Self::Stop
        )
    }
}
