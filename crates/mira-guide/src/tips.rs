//! Static contextual tips.
//!
//! Screens trigger these through [`GuideStore::show_guide_for_element`] in
//! response to taps and focus events, independently of full guided tours.
//! Any time-based behavior (like the delayed home-screen hint) is
//! caller-side scheduling: the screen fires a timer and then calls
//! [`show_follow_up_hint`].

use mira_model::AnimationState;
use mira_store::GuideStore;

/// Greeting shown when the home screen first mounts.
pub const WELCOME_ELEMENT: &str = "homeScreen";
pub const WELCOME_MESSAGE: &str = "Welcome to your Spiritual Journey! Here you can find daily \
     inspiration, meditation guides, and mindfulness practices to support your path.";

/// Hint nudging the user toward the card walkthrough, shown by the home
/// screen a few seconds after the welcome message.
pub const FOLLOW_UP_HINT: &str = "Tap me to learn more about the card features!";

const HOME_TIPS: [(&str, &str); 5] = [
    (
        "card1",
        "Daily inspiration to nourish your soul and elevate your spiritual awareness.",
    ),
    (
        "card2",
        "Guided meditations to help you connect with your higher self and inner wisdom.",
    ),
    (
        "card3",
        "Mental well-being practices to maintain harmony between mind, body, and spirit.",
    ),
    (
        "card4",
        "Mindfulness exercises to keep you grounded in the present moment.",
    ),
    (
        "card5",
        "Resources and reflections to support your ongoing spiritual evolution.",
    ),
];

const EXPLORE_TIPS: [(&str, &str); 6] = [
    (
        "explore1",
        "Learn about the seven chakras and how to balance them for spiritual growth.",
    ),
    (
        "explore2",
        "Zen meditation focuses on emptying the mind and being fully present.",
    ),
    (
        "explore3",
        "Hatha yoga combines physical postures with breathing techniques.",
    ),
    (
        "explore4",
        "Walking meditation helps you stay present while moving through the world.",
    ),
    (
        "explore5",
        "Sound healing uses vibrations to restore harmony to body and mind.",
    ),
    (
        "explore6",
        "The third eye chakra is associated with intuition and spiritual awareness.",
    ),
];

/// Tip text for a UI element, if one is defined.
pub fn tip_for(element_id: &str) -> Option<&'static str> {
    if element_id == WELCOME_ELEMENT {
        return Some(WELCOME_MESSAGE);
    }
    HOME_TIPS
        .iter()
        .chain(EXPLORE_TIPS.iter())
        .find(|(id, _)| *id == element_id)
        .map(|(_, text)| *text)
}

/// Show the tip registered for `element_id`, if any. Returns whether a
/// tip was shown.
pub fn show_tip(store: &GuideStore, element_id: &str) -> bool {
    match tip_for(element_id) {
        Some(text) => {
            store.show_guide_for_element(element_id, text);
            true
        }
        None => {
            tracing::debug!(element = element_id, "no tip registered for element");
            false
        }
    }
}

/// The delayed follow-up hint: new dialog, excited mascot. Called by the
/// home screen after its external timer fires.
pub fn show_follow_up_hint(store: &GuideStore) {
    store.set_dialog(FOLLOW_UP_HINT);
    store.set_animation_state(AnimationState::Excited);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_element_has_a_tip() {
        for id in [
            "homeScreen", "card1", "card2", "card3", "card4", "card5", "explore1", "explore2",
            "explore3", "explore4", "explore5", "explore6",
        ] {
            assert!(tip_for(id).is_some(), "missing tip for {id}");
        }
        assert!(tip_for("card6").is_none());
    }

    #[test]
    fn show_tip_targets_the_element() {
        let store = GuideStore::new();
        assert!(show_tip(&store, "explore2"));
        assert_eq!(store.target_element().as_deref(), Some("explore2"));
        assert_eq!(store.animation_state(), AnimationState::Talking);
        assert!(store.dialog().starts_with("Zen meditation"));

        assert!(!show_tip(&store, "unknown"));
        assert_eq!(store.target_element().as_deref(), Some("explore2"));
    }

    #[test]
    fn follow_up_hint_excites_the_mascot() {
        let store = GuideStore::new();
        show_follow_up_hint(&store);
        assert_eq!(store.dialog(), FOLLOW_UP_HINT);
        assert_eq!(store.animation_state(), AnimationState::Excited);
    }
}
