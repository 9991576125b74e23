//! Streamer Control
//!
//! Panel state and the UI controller for the Streamer remote.
//!
//! This crate provides:
//! - **Panel**: device options, selection, volume slider and label, loop
//!   flag and status line, owned by the controller
//! - **Panel events**: typed user interactions (`PanelEvent`)
//! - **Controller**: keeps the panel in sync with the backend and turns
//!   events into `GET /status`, `POST /play`, `POST /stop`, `POST /volume`
//!
//! # Selection policy
//!
//! After every successful refresh the selection resolves to the configured
//! default device, else the device the backend reports as playing, else the
//! previous selection, as long as the candidate is in the fresh listing.
//! Otherwise nothing is selected.
//!
//! # Example
//!
//! ```ignore
//! use streamer_client::{ClientConfig, StreamerClient};
//! use streamer_control::{Controller, Panel, PanelEvent};
//! use streamer_core::SliderLevel;
//!
//! let client = StreamerClient::new(ClientConfig::new("http://localhost:8000"))?;
//! let mut controller = Controller::new(client, Panel::default());
//!
//! controller.start().await?;
//! controller.handle(PanelEvent::VolumeRelease(SliderLevel::new(35))).await?;
//! controller.handle(PanelEvent::Play).await?;
//! println!("{}", controller.panel().status());
//! ```

mod controller;
mod error;
mod event;
mod panel;
pub mod status;

pub use controller::Controller;
pub use error::{ControlError, Result};
pub use event::PanelEvent;
pub use panel::{resolve_selection, Panel};
pub use status::{StatusKind, StatusLine};
