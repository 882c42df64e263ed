//! Built-in guided tours.

use mira_model::{GuideSequence, GuideStep, Point};

/// The card walkthrough started by tapping the mascot on the home screen:
/// card body, like button, bookmark button, then the overflow menu.
///
/// Carried positions are the hand-tuned home-screen coordinates, so the
/// tour works with or without an override table.
pub fn card_walkthrough() -> GuideSequence {
    let steps = vec![
        GuideStep::new(
            "card",
            "This is a content card! Tap on it to view more details about this place.",
            Point::new(181.0, 182.0),
        ),
        GuideStep::new(
            "like",
            "Tap the heart icon to like this place. It will be saved to your likes.",
            Point::new(307.0, 250.0),
        ),
        GuideStep::new(
            "bookmark",
            "Tap the bookmark icon to save this place to your collections for later viewing.",
            Point::new(347.0, 250.0),
        ),
        GuideStep::new(
            "menu",
            "Use this menu to share, report or hide content that doesn't interest you.",
            Point::new(347.0, 85.0),
        ),
    ];
    let mut tour = GuideSequence::new("card-walkthrough");
    for step in steps {
        // Step names above are distinct; add_step cannot reject them.
        if let Err(err) = tour.add_step(step) {
            tracing::warn!(%err, "skipping malformed built-in step");
        }
    }
    tour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_walkthrough_has_the_four_steps_in_order() {
        let tour = card_walkthrough();
        assert_eq!(
            tour.step_names().collect::<Vec<_>>(),
            ["card", "like", "bookmark", "menu"]
        );
        assert_eq!(tour.step(0).unwrap().position, Point::new(181.0, 182.0));
    }
}
