mod device;
mod request;
mod slider;

pub use device::{Device, StatusSnapshot};
pub use request::{PlaybackAction, PlaybackRequest, VolumeRequest};
pub use slider::SliderLevel;
