use serde::{Deserialize, Serialize};
use std::fmt;

/// Open rapidity interval `(min, max)`.
///
/// Both bounds are excluded. A window with `min >= max` contains nothing,
/// which is how the hadron window is kept disabled until it is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RapidityWindow {
    pub min: f64,
    pub max: f64,
}

impl RapidityWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Strict containment on both sides
    #[inline]
    pub fn contains(&self, rapidity: f64) -> bool {
        rapidity > self.min && rapidity < self.max
    }

    /// True when no value can satisfy `contains`
    pub fn is_empty(&self) -> bool {
        // also catches NaN bounds
        !(self.min < self.max)
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }
}

impl From<(f64, f64)> for RapidityWindow {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl fmt::Display for RapidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}
