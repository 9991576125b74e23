//! Streamer Core
//!
//! Wire and domain types shared by the Streamer remote crates.
//!
//! The backend this remote talks to casts an audio file to named network
//! audio devices. This crate only models what the remote sees of it:
//! - **Devices**: named output endpoints (`Device`)
//! - **Status snapshots**: known devices plus the one currently playing
//! - **Requests**: bodies for `POST /play`, `POST /stop` and `POST /volume`
//! - **Slider level**: the 0-100 volume control and its normalized form
//!
//! # Example
//!
//! ```rust
//! use streamer_core::types::{PlaybackRequest, SliderLevel, StatusSnapshot};
//!
//! let snapshot = StatusSnapshot::new(vec!["Kitchen".into(), "Office".into()], None);
//! assert!(snapshot.contains("Kitchen"));
//!
//! let request = PlaybackRequest::new("Kitchen", SliderLevel::new(25), true);
//! assert_eq!(request.volume, 0.25);
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{
    Device, PlaybackAction, PlaybackRequest, SliderLevel, StatusSnapshot, VolumeRequest,
};
