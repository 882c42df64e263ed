//! Shared UI state for the onboarding mascot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mira_model::{AnimationState, Point, ScrollRegion};

use crate::subscription::{Observers, SubscriptionId};

/// Token identifying one tour session driving the guide store.
///
/// Only one sequencer may drive the store at a time; starting a new tour
/// begins a new session and implicitly supersedes the previous one, whose
/// later calls become no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourToken(u64);

/// Cross-screen state of the mascot assistant.
///
/// Exactly one instance exists per app, constructed at startup and handed
/// to screen controllers; all mutation goes through the setters below so
/// subscribed screens can react. Every setter is a synchronous mutation
/// followed by one notification. The scroll handle is held opaquely: the
/// store never invokes it.
pub struct GuideStore {
    dialog: RefCell<String>,
    target_element: RefCell<Option<String>>,
    visible: Cell<bool>,
    position: Cell<Point>,
    animation: Cell<AnimationState>,
    scroll_handle: RefCell<Option<Rc<dyn ScrollRegion>>>,
    tour_session: Cell<u64>,
    observers: Observers,
}

impl Default for GuideStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GuideStore {
    /// Create a store with the mascot visible, idle, and parked at its
    /// home position in the top-left content area.
    pub fn new() -> Self {
        Self {
            dialog: RefCell::new(String::new()),
            target_element: RefCell::new(None),
            visible: Cell::new(true),
            position: Cell::new(Point::new(20.0, 100.0)),
            animation: Cell::new(AnimationState::Idle),
            scroll_handle: RefCell::new(None),
            tour_session: Cell::new(0),
            observers: Observers::new(),
        }
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Set the dialog message shown by the mascot.
    pub fn set_dialog(&self, text: impl Into<String>) {
        *self.dialog.borrow_mut() = text.into();
        self.observers.notify();
    }

    /// Clear the dialog message.
    pub fn clear_dialog(&self) {
        self.dialog.borrow_mut().clear();
        self.observers.notify();
    }

    /// Move the mascot. The point is copied; later changes to the caller's
    /// value do not affect stored state.
    pub fn set_position(&self, position: Point) {
        self.position.set(position);
        self.observers.notify();
    }

    /// Show or hide the mascot.
    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
        self.observers.notify();
    }

    /// Flip visibility.
    pub fn toggle_visibility(&self) {
        self.visible.set(!self.visible.get());
        self.observers.notify();
    }

    /// Set the animation mode hint.
    pub fn set_animation_state(&self, state: AnimationState) {
        self.animation.set(state);
        self.observers.notify();
    }

    /// Point the guide at a UI element (or at nothing).
    pub fn set_target_element(&self, element: Option<String>) {
        *self.target_element.borrow_mut() = element;
        self.observers.notify();
    }

    /// Register the active screen's scrollable container.
    pub fn set_scroll_handle(&self, handle: Rc<dyn ScrollRegion>) {
        *self.scroll_handle.borrow_mut() = Some(handle);
        self.observers.notify();
    }

    /// Drop the registered scroll handle (screen unmounted).
    pub fn clear_scroll_handle(&self) {
        *self.scroll_handle.borrow_mut() = None;
        self.observers.notify();
    }

    /// Contextual tip entry point, distinct from full guided tours:
    /// atomically targets `element_id`, shows `text`, and switches the
    /// animation to talking, with a single notification.
    pub fn show_guide_for_element(&self, element_id: impl Into<String>, text: impl Into<String>) {
        let element_id = element_id.into();
        tracing::debug!(element = %element_id, "showing contextual tip");
        *self.target_element.borrow_mut() = Some(element_id);
        *self.dialog.borrow_mut() = text.into();
        self.animation.set(AnimationState::Talking);
        self.observers.notify();
    }

    /// Return the guide to its resting state: dialog and target cleared,
    /// animation idle. Visibility and position are left untouched.
    pub fn reset(&self) {
        self.dialog.borrow_mut().clear();
        *self.target_element.borrow_mut() = None;
        self.animation.set(AnimationState::Idle);
        self.observers.notify();
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current dialog message; empty means no message.
    pub fn dialog(&self) -> String {
        self.dialog.borrow().clone()
    }

    /// The element the guide currently refers to, if any.
    pub fn target_element(&self) -> Option<String> {
        self.target_element.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn position(&self) -> Point {
        self.position.get()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation.get()
    }

    /// The registered scroll handle, if any. Callers (the sequencer)
    /// invoke it; the store never does.
    pub fn scroll_handle(&self) -> Option<Rc<dyn ScrollRegion>> {
        self.scroll_handle.borrow().clone()
    }

    // =========================================================================
    // TOUR SESSIONS
    // =========================================================================

    /// Begin a new tour session, superseding any previous one.
    pub fn begin_tour_session(&self) -> TourToken {
        let token = self.tour_session.get() + 1;
        self.tour_session.set(token);
        TourToken(token)
    }

    /// Whether `token` still identifies the latest session.
    pub fn is_current_session(&self, token: TourToken) -> bool {
        self.tour_session.get() == token.0
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register a change listener; it fires synchronously after every
    /// mutation. Returns the handle to pass to [`GuideStore::unsubscribe`].
    pub fn on_change(&self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
    }
}
