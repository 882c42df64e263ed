use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// Animation mode hint for the mascot.
///
/// Purely cosmetic: the core only sets and reads it, the rendering layer
/// decides what each mode looks like. Within the typed API invalid modes
/// are unrepresentable; at string boundaries [`FromStr`] rejects unknown
/// input while [`AnimationState::from_str_lenient`] clamps it to `Idle`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    /// Resting; the mascot drifts gently in place.
    #[default]
    Idle,
    /// The slow up-and-down float used when parked after a tour.
    Bobbing,
    /// Shown while a dialog message is on screen.
    Talking,
    /// Short burst played on direct interaction.
    Excited,
}

impl AnimationState {
    /// Canonical lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Bobbing => "bobbing",
            AnimationState::Talking => "talking",
            AnimationState::Excited => "excited",
        }
    }

    /// Parse a mode name, clamping anything unknown to `Idle`.
    ///
    /// Lenient counterpart to the strict [`FromStr`] implementation, for
    /// callers fed by untrusted UI-layer strings.
    pub fn from_str_lenient(s: &str) -> Self {
        s.parse().unwrap_or(AnimationState::Idle)
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnimationState {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "idle" => Ok(AnimationState::Idle),
            "bobbing" => Ok(AnimationState::Bobbing),
            "talking" => Ok(AnimationState::Talking),
            "excited" => Ok(AnimationState::Excited),
            _ => Err(GuideError::InvalidAnimationState {
                value: s.to_string(),
            }),
        }
    }
}
