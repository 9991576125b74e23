//! Streamer Client
//!
//! HTTP client library for the device/playback service that casts audio to
//! network speakers.
//!
//! # Endpoints
//!
//! - `GET /devices` and `GET /status`: device listing and status snapshot
//! - `POST /play` and `POST /stop`: start or stop playback on a device
//! - `POST /volume`: change the volume of a device
//!
//! Everything goes through the [`PlaybackService`] trait so the controller
//! can be driven by something other than a live server.
//!
//! # Example
//!
//! ```ignore
//! use streamer_client::{ClientConfig, PlaybackService, StreamerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StreamerClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//!     let status = client.status().await?;
//!     println!("{} devices, playing: {:?}", status.devices.len(), status.playing_device);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod service;
mod types;

pub use client::StreamerClient;
pub use error::{ClientError, Result};
pub use service::PlaybackService;
pub use types::{ApiError, ClientConfig, DEFAULT_TIMEOUT};
