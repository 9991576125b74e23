//! Volume slider level
//!
//! The remote exposes volume as an integer percentage (0-100) and sends it
//! to the backend as a fraction in `[0.0, 1.0]`.

use serde::{Deserialize, Serialize};

/// Position of the volume slider (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8")]
pub struct SliderLevel(u8);

impl SliderLevel {
    /// Highest slider position
    pub const MAX: u8 = 100;

    /// Create a slider level, clamping values above 100
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    /// Raw slider position
    pub fn get(self) -> u8 {
        self.0
    }

    /// Volume as sent over the wire: exactly `level / 100`
    pub fn normalized(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Percentage label shown next to the slider, e.g. `"42%"`
    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for SliderLevel {
    /// 10%, matching the backend's default volume of 0.1
    fn default() -> Self {
        Self(10)
    }
}

impl From<u8> for SliderLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl std::fmt::Display for SliderLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
