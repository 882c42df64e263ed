#![allow(missing_docs)]

use mira_model::{GuideSequence, GuideStep, Point, SavedCard};

#[test]
fn saved_card_builder_round_trips() {
    let card = SavedCard::new("c1", "Morning Flow", "A gentle start to the day")
        .with_image("assets/morning.png");
    let json = serde_json::to_string(&card).expect("serialize card");
    let round: SavedCard = serde_json::from_str(&json).expect("deserialize card");
    assert_eq!(round, card);
}

#[test]
fn saved_card_image_is_optional_in_json() {
    let round: SavedCard = serde_json::from_str(
        r#"{"id":"c1","title":"Morning Flow","description":"A gentle start"}"#,
    )
    .expect("deserialize card");
    assert_eq!(round.image, None);
}

#[test]
fn sequence_indexing_matches_insertion_order() {
    let tour = GuideSequence::from_steps(
        "demo",
        vec![
            GuideStep::new("one", "First", Point::new(1.0, 1.0)),
            GuideStep::new("two", "Second", Point::new(2.0, 2.0)),
        ],
    )
    .expect("build tour");

    assert_eq!(tour.len(), 2);
    assert!(!tour.is_empty());
    assert_eq!(tour.step(0).map(|s| s.name.as_str()), Some("one"));
    assert_eq!(tour.step(1).map(|s| s.message.as_str()), Some("Second"));
    assert_eq!(tour.step(2), None);
}

#[test]
fn points_convert_from_tuples() {
    let step = GuideStep::new("one", "First", (181.0, 182.0));
    assert_eq!(step.position, Point::new(181.0, 182.0));
}
