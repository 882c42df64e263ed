use serde::{Deserialize, Serialize};

/// A position in screen coordinates.
///
/// The range is unconstrained and owned by the caller (it depends on the
/// device viewport). Stores always hold copies, never references into
/// caller-owned data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
