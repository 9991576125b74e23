//! Backend service abstraction.

use crate::error::Result;
use async_trait::async_trait;
use streamer_core::{Device, PlaybackAction, PlaybackRequest, StatusSnapshot, VolumeRequest};

/// Operations offered by the device/playback service.
///
/// `StreamerClient` implements this over HTTP. Each call is independent:
/// there is no de-duplication, retry or cancellation of overlapping calls.
#[async_trait]
pub trait PlaybackService: Send + Sync {
    /// `GET /devices`: flat list of known devices.
    async fn devices(&self) -> Result<Vec<Device>>;

    /// `GET /status`: known devices plus the one currently playing.
    async fn status(&self) -> Result<StatusSnapshot>;

    /// `POST /play`
    async fn play(&self, request: &PlaybackRequest) -> Result<()>;

    /// `POST /stop`
    async fn stop(&self, request: &PlaybackRequest) -> Result<()>;

    /// `POST /volume`
    async fn set_volume(&self, request: &VolumeRequest) -> Result<()>;

    /// Dispatch a playback request to `play` or `stop`.
    async fn playback(&self, action: PlaybackAction, request: &PlaybackRequest) -> Result<()> {
        match action {
            PlaybackAction::Play => self.play(request).await,
            PlaybackAction::Stop => self.stop(request).await,
        }
    }
}
