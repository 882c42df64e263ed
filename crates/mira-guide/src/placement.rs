//! Dialog bubble placement.
//!
//! Presentation-support helpers, kept out of the state machine: the
//! sequencer's dialog/position contract never depends on them. Placement
//! is resolved in two tiers, like step positions: a table of hand-authored
//! bubble offsets for steps whose layout is known pixel-exactly, then a
//! computed placement from a per-step side preference that shifts inward
//! when the preferred side would overflow the viewport.

use std::collections::HashMap;

use mira_model::Point;

use crate::positions::{BUBBLE_HEIGHT, BUBBLE_WIDTH, MASCOT_SIZE, Viewport};

/// Minimum gap kept between the bubble and the viewport edge when a
/// preferred side is abandoned.
const SIDE_MARGIN: f32 = 20.0;
/// Margin the bubble is clamped to for above/below placements.
const CLAMP_MARGIN: f32 = 10.0;
/// Leftward correction applied to below placements to compensate for the
/// observed right-shift of the centered bubble.
const BELOW_CENTER_SHIFT: f32 = 25.0;

/// Side of the mascot the dialog bubble is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleSide {
    Left,
    Right,
    Above,
    Below,
}

/// A resolved bubble placement. `origin` is the bubble's top-left corner
/// in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BubblePlacement {
    /// From the hand-authored layout table.
    Fixed { origin: Point },
    /// Computed from the side preference and viewport bounds.
    Computed { side: BubbleSide, origin: Point },
}

impl BubblePlacement {
    pub fn origin(&self) -> Point {
        match self {
            BubblePlacement::Fixed { origin } | BubblePlacement::Computed { origin, .. } => {
                *origin
            }
        }
    }
}

/// Preferred bubble side for a step, before overflow checks.
///
/// `None` means the step shows no bubble at all (the parked finish state).
/// Unknown steps default to the right, where there is usually room next
/// to a left-anchored mascot.
pub fn preferred_side(step_name: &str) -> Option<BubbleSide> {
    match step_name {
        "finish" => None,
        "welcome" => Some(BubbleSide::Right),
        "card" => Some(BubbleSide::Below),
        "like" | "bookmark" | "menu" => Some(BubbleSide::Left),
        _ => Some(BubbleSide::Right),
    }
}

/// Shift the preferred side inward when the bubble would overflow:
/// right becomes left when it crosses the right edge, left becomes below
/// when it crosses the left edge.
pub fn resolve_side(preferred: BubbleSide, anchor: Point, viewport: Viewport) -> BubbleSide {
    match preferred {
        BubbleSide::Right
            if anchor.x + MASCOT_SIZE + BUBBLE_WIDTH > viewport.width - SIDE_MARGIN =>
        {
            BubbleSide::Left
        }
        BubbleSide::Left if anchor.x - BUBBLE_WIDTH < SIDE_MARGIN => BubbleSide::Below,
        other => other,
    }
}

/// Top-left corner of the bubble for `side`, given the mascot anchor.
/// Above/below placements are clamped to [`CLAMP_MARGIN`] from the edges.
pub fn bubble_origin(side: BubbleSide, anchor: Point, viewport: Viewport) -> Point {
    let side_y = anchor.y - BUBBLE_HEIGHT / 2.0 + MASCOT_SIZE / 2.0;
    match side {
        BubbleSide::Right => Point::new(anchor.x + MASCOT_SIZE - 5.0, side_y),
        BubbleSide::Left => Point::new(anchor.x + 5.0 - BUBBLE_WIDTH, side_y),
        BubbleSide::Below => {
            let center = anchor.x + MASCOT_SIZE / 2.0;
            let left = clamp_horizontal(center - BUBBLE_WIDTH / 2.0 - BELOW_CENTER_SHIFT, viewport);
            Point::new(left, anchor.y + MASCOT_SIZE)
        }
        BubbleSide::Above => {
            let left = clamp_horizontal(anchor.x - BUBBLE_WIDTH / 2.0 + MASCOT_SIZE / 2.0, viewport);
            Point::new(left, anchor.y - BUBBLE_HEIGHT)
        }
    }
}

fn clamp_horizontal(left: f32, viewport: Viewport) -> f32 {
    left.max(CLAMP_MARGIN)
        .min(viewport.width - CLAMP_MARGIN - BUBBLE_WIDTH)
}

/// Hand-authored bubble offsets, relative to the mascot anchor, for steps
/// whose on-screen layout is known exactly.
#[derive(Debug, Clone, Default)]
pub struct PlacementOverrides {
    fixed: HashMap<String, Point>,
}

impl PlacementOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the bubble for `step_name` to a fixed offset from the mascot.
    pub fn insert(&mut self, step_name: impl Into<String>, offset: Point) {
        self.fixed.insert(step_name.into(), offset);
    }

    pub fn get(&self, step_name: &str) -> Option<Point> {
        self.fixed.get(step_name).copied()
    }
}

/// The fixed bubble offsets for the home-screen tour.
pub fn home_tour_placements() -> PlacementOverrides {
    let mut overrides = PlacementOverrides::new();
    overrides.insert("card", Point::new(-90.0, 84.0));
    overrides.insert("like", Point::new(-261.0, -30.0));
    overrides
}

/// Full two-tier placement for one step: the fixed table first, then the
/// side preference with overflow fallback. Returns `None` when the step
/// shows no bubble.
pub fn place_bubble(
    overrides: &PlacementOverrides,
    step_name: &str,
    anchor: Point,
    viewport: Viewport,
) -> Option<BubblePlacement> {
    if let Some(offset) = overrides.get(step_name) {
        return Some(BubblePlacement::Fixed {
            origin: Point::new(anchor.x + offset.x, anchor.y + offset.y),
        });
    }
    let side = resolve_side(preferred_side(step_name)?, anchor, viewport);
    Some(BubblePlacement::Computed {
        side,
        origin: bubble_origin(side, anchor, viewport),
    })
}
