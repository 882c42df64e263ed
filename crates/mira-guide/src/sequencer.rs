//! The guided-tour state machine.

use std::rc::Rc;

use mira_model::{AnimationState, GuideError, GuideSequence, GuideStep, Point, Result};
use mira_store::{GuideStore, TourToken};

use crate::positions::PositionOverrides;

/// Drives one guided tour through the [`GuideStore`].
///
/// The machine is either idle or at a step of the running sequence. Every
/// transition performs the same side effects, in order: scroll the active
/// screen back to its origin (if a handle is registered), push the step's
/// message and resolved position into the store, and switch the animation
/// to talking. Completing past the last step clears the dialog, parks the
/// mascot at the tour's finish position, and returns the machine to idle.
///
/// A sequencer is owned by whichever screen controller starts the tour.
/// Only one sequencer drives the store at a time: starting a new tour
/// supersedes the previous sequencer, whose later calls become no-ops.
/// Apart from starting with an empty sequence, every operation is total;
/// misuse (double taps, advancing while idle) is tolerated silently.
pub struct GuideSequencer {
    store: Rc<GuideStore>,
    overrides: PositionOverrides,
    sequence: Option<GuideSequence>,
    current: Option<usize>,
    finish: Point,
    session: Option<TourToken>,
}

impl GuideSequencer {
    /// A sequencer resolving every step to its carried position.
    pub fn new(store: Rc<GuideStore>) -> Self {
        Self::with_overrides(store, PositionOverrides::new())
    }

    /// A sequencer consulting `overrides` before carried step positions.
    pub fn with_overrides(store: Rc<GuideStore>, overrides: PositionOverrides) -> Self {
        Self {
            store,
            overrides,
            sequence: None,
            current: None,
            finish: Point::default(),
            session: None,
        }
    }

    /// Start a tour at its first step.
    ///
    /// `finish` is where the mascot parks when the tour completes past its
    /// last step; it is not part of the step list. An empty sequence is
    /// rejected up front and leaves the store untouched.
    pub fn start(&mut self, sequence: GuideSequence, finish: Point) -> Result<()> {
        if sequence.is_empty() {
            return Err(GuideError::empty_sequence(&sequence.name));
        }
        tracing::debug!(tour = %sequence.name, steps = sequence.len(), "starting guided tour");
        self.session = Some(self.store.begin_tour_session());
        self.sequence = Some(sequence);
        self.finish = finish;
        self.current = Some(0);
        self.apply_current_step();
        Ok(())
    }

    /// Advance one step, or finish the tour when already at the last one.
    /// No-op while idle or superseded.
    pub fn next(&mut self) {
        let Some(index) = self.active_index() else {
            tracing::debug!("next() ignored: no tour in progress");
            return;
        };
        if index + 1 < self.sequence_len() {
            self.current = Some(index + 1);
            self.apply_current_step();
        } else {
            self.finish_tour();
        }
    }

    /// Go back one step. No-op while idle, superseded, or at the first
    /// step (there is no step before the first).
    pub fn previous(&mut self) {
        let Some(index) = self.active_index() else {
            tracing::debug!("previous() ignored: no tour in progress");
            return;
        };
        if index == 0 {
            tracing::debug!("previous() ignored: already at the first step");
            return;
        }
        self.current = Some(index - 1);
        self.apply_current_step();
    }

    /// Dismiss the tour: back to idle with dialog and target cleared. The
    /// mascot stays where it is, distinguishing an explicit dismissal from
    /// natural completion.
    pub fn cancel(&mut self) {
        if self.active_index().is_none() {
            tracing::debug!("cancel() ignored: no tour in progress");
            return;
        }
        if let Some(sequence) = &self.sequence {
            tracing::debug!(tour = %sequence.name, "tour cancelled");
        }
        self.sequence = None;
        self.current = None;
        self.store.reset();
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Whether this sequencer is at a step and still owns the store.
    pub fn is_active(&self) -> bool {
        self.active_index().is_some()
    }

    /// Zero-based index of the current step, `None` while idle.
    pub fn current_index(&self) -> Option<usize> {
        self.active_index()
    }

    /// One-based step number for "i of N" labels; 0 while idle.
    pub fn step_number(&self) -> usize {
        self.active_index().map_or(0, |i| i + 1)
    }

    pub fn current_step(&self) -> Option<&GuideStep> {
        let index = self.active_index()?;
        self.sequence.as_ref()?.step(index)
    }

    pub fn current_step_name(&self) -> Option<&str> {
        self.current_step().map(|s| s.name.as_str())
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.as_ref().map_or(0, GuideSequence::len)
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// The current index, provided the tour is running and has not been
    /// superseded by a newer session.
    fn active_index(&self) -> Option<usize> {
        let index = self.current?;
        let session = self.session?;
        if !self.store.is_current_session(session) {
            tracing::debug!("tour superseded by a newer session");
            return None;
        }
        Some(index)
    }

    fn apply_current_step(&self) {
        let Some(step) = self.current.and_then(|i| self.sequence.as_ref()?.step(i)) else {
            return;
        };
        tracing::debug!(step = %step.name, number = self.step_number(), "entering tour step");
        self.scroll_to_origin();
        let position = self.overrides.resolve(&step.name, step.position);
        self.store.set_dialog(step.message.clone());
        self.store.set_position(position);
        self.store.set_target_element(Some(step.name.clone()));
        self.store.set_animation_state(AnimationState::Talking);
    }

    fn finish_tour(&mut self) {
        if let Some(sequence) = &self.sequence {
            tracing::debug!(tour = %sequence.name, "tour completed");
        }
        self.sequence = None;
        self.current = None;
        self.store.clear_dialog();
        self.store.set_animation_state(AnimationState::Bobbing);
        self.store.set_position(self.finish);
    }

    fn scroll_to_origin(&self) {
        if let Some(handle) = self.store.scroll_handle() {
            handle.scroll_to_origin();
        }
    }
}
