//! Step position resolution.
//!
//! Tour positions are resolved in two tiers: a per-step-name override
//! table of hand-authored coordinates (pixel-exact placement against known
//! UI chrome) is consulted first, and the position carried by the step
//! itself is the fallback. Both tiers are plain data; the lookup is a
//! single pure call per transition.

use std::collections::HashMap;

use mira_model::Point;

/// Rendered size of the mascot sprite, in points.
pub const MASCOT_SIZE: f32 = 64.0;
/// Estimated height of the bottom tab bar.
pub const NAV_BAR_HEIGHT: f32 = 60.0;
/// Dialog bubble dimensions.
pub const BUBBLE_WIDTH: f32 = 240.0;
pub const BUBBLE_HEIGHT: f32 = 150.0;

/// Screen dimensions of the device, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where the mascot parks when a tour completes: bottom-right corner,
    /// just above the tab bar.
    pub fn park_position(&self) -> Point {
        Point::new(
            self.width - 80.0,
            self.height - NAV_BAR_HEIGHT - MASCOT_SIZE,
        )
    }
}

/// Fixed-position override table keyed by step name.
#[derive(Debug, Clone, Default)]
pub struct PositionOverrides {
    fixed: HashMap<String, Point>,
}

impl PositionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `step_name` to a fixed coordinate.
    pub fn insert(&mut self, step_name: impl Into<String>, position: Point) {
        self.fixed.insert(step_name.into(), position);
    }

    pub fn get(&self, step_name: &str) -> Option<Point> {
        self.fixed.get(step_name).copied()
    }

    /// Resolve a step's target position: the override wins, the carried
    /// position is the fallback.
    pub fn resolve(&self, step_name: &str, carried: Point) -> Point {
        self.get(step_name).unwrap_or(carried)
    }
}

/// The hand-authored positions for the home-screen tour steps.
///
/// These are tuned against the home screen's known layout; tours over
/// other screens rely on carried step positions instead.
pub fn home_tour_overrides() -> PositionOverrides {
    let mut overrides = PositionOverrides::new();
    overrides.insert("welcome", Point::new(30.0, 140.0));
    // Centered on the post card image.
    overrides.insert("card", Point::new(181.0, 182.0));
    overrides.insert("like", Point::new(307.0, 250.0));
    overrides.insert("bookmark", Point::new(347.0, 250.0));
    // The three-dot menu in the card header.
    overrides.insert("menu", Point::new(347.0, 85.0));
    overrides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_carried_position() {
        let overrides = home_tour_overrides();
        let resolved = overrides.resolve("card", Point::new(1.0, 2.0));
        assert_eq!(resolved, Point::new(181.0, 182.0));
    }

    #[test]
    fn carried_position_is_the_fallback() {
        let overrides = home_tour_overrides();
        let carried = Point::new(50.0, 60.0);
        assert_eq!(overrides.resolve("unknown-step", carried), carried);

        let empty = PositionOverrides::new();
        assert_eq!(empty.resolve("card", carried), carried);
    }

    #[test]
    fn park_position_sits_above_the_tab_bar() {
        let viewport = Viewport::new(390.0, 844.0);
        assert_eq!(viewport.park_position(), Point::new(310.0, 720.0));
    }
}
