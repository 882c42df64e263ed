//! Core data types for the Mira onboarding assistant.
//!
//! This crate defines the vocabulary shared by the state stores and the
//! tour sequencer:
//!
//! - [`Point`]: screen coordinates
//! - [`AnimationState`]: the mascot's cosmetic animation mode
//! - [`SavedCard`]: a bookmarked content card
//! - [`GuideStep`] / [`GuideSequence`]: one guided tour
//! - [`ScrollRegion`]: the opaque scroll handle screens register
//! - [`GuideError`]: the (deliberately small) error taxonomy

pub mod animation;
pub mod card;
pub mod error;
pub mod geometry;
pub mod tour;

pub use animation::AnimationState;
pub use card::SavedCard;
pub use error::{GuideError, Result};
pub use geometry::Point;
pub use tour::{GuideSequence, GuideStep, ScrollRegion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_state_round_trips_through_names() {
        for state in [
            AnimationState::Idle,
            AnimationState::Bobbing,
            AnimationState::Talking,
            AnimationState::Excited,
        ] {
            assert_eq!(state.as_str().parse::<AnimationState>(), Ok(state));
        }
    }

    #[test]
    fn animation_state_strict_parse_rejects_unknown() {
        let err = "moving".parse::<AnimationState>().unwrap_err();
        assert_eq!(
            err,
            GuideError::InvalidAnimationState {
                value: "moving".to_string()
            }
        );
    }

    #[test]
    fn animation_state_lenient_parse_clamps_to_idle() {
        assert_eq!(
            AnimationState::from_str_lenient("moving"),
            AnimationState::Idle
        );
        assert_eq!(
            AnimationState::from_str_lenient(" Talking "),
            AnimationState::Talking
        );
    }

    #[test]
    fn sequence_rejects_duplicate_step_names() {
        let mut tour = GuideSequence::new("cards");
        tour.add_step(GuideStep::new("card", "First", (181.0, 182.0)))
            .expect("first step");
        let err = tour
            .add_step(GuideStep::new("card", "Again", (0.0, 0.0)))
            .unwrap_err();
        assert_eq!(err, GuideError::duplicate_step("cards", "card"));
        assert_eq!(tour.len(), 1);
    }

    #[test]
    fn sequence_serializes() {
        let tour = GuideSequence::from_steps(
            "cards",
            vec![
                GuideStep::new("card", "First", (181.0, 182.0)),
                GuideStep::new("like", "Second", (307.0, 250.0)),
            ],
        )
        .expect("build tour");
        let json = serde_json::to_string(&tour).expect("serialize tour");
        let round: GuideSequence = serde_json::from_str(&json).expect("deserialize tour");
        assert_eq!(round, tour);
        assert_eq!(round.step_names().collect::<Vec<_>>(), ["card", "like"]);
    }
}
