//! Guided onboarding tours for the Mira mascot.
//!
//! This crate hosts the step-sequencing state machine and its supporting
//! lookup tables:
//!
//! - [`GuideSequencer`]: the tour state machine driving
//!   [`mira_store::GuideStore`]
//! - [`positions`]: two-tier step position resolution (fixed override
//!   table, carried position fallback) and viewport layout constants
//! - [`placement`]: dialog bubble side selection and overflow handling
//! - [`flows`]: the built-in card walkthrough
//! - [`tips`]: static contextual tips for screen elements
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use mira_guide::{GuideSequencer, flows, positions};
//! use mira_store::GuideStore;
//!
//! let store = Rc::new(GuideStore::new());
//! let viewport = positions::Viewport::new(390.0, 844.0);
//! let mut tour = GuideSequencer::with_overrides(
//!     Rc::clone(&store),
//!     positions::home_tour_overrides(),
//! );
//! tour.start(flows::card_walkthrough(), viewport.park_position())?;
//! assert!(tour.is_active());
//! assert_eq!(store.dialog(), flows::card_walkthrough().step(0).unwrap().message);
//! # Ok::<(), mira_model::GuideError>(())
//! ```

pub mod flows;
pub mod placement;
pub mod positions;
pub mod sequencer;
pub mod tips;

pub use placement::{BubblePlacement, BubbleSide, PlacementOverrides};
pub use positions::{PositionOverrides, Viewport};
pub use sequencer::GuideSequencer;
