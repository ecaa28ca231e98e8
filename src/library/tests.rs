use super::details::details_from_fields;
use super::model::Track;
use crate::config::TrackField;
use std::path::PathBuf;
use std::time::Duration;

fn track() -> Track {
    Track::new(
        PathBuf::from("/tmp/Queen - Bohemian Rhapsody.mp3"),
        "Queen",
        "Bohemian Rhapsody",
    )
}

#[test]
fn details_is_artist_dash_title() {
    assert_eq!(track().details(), "Queen - Bohemian Rhapsody");
}

#[test]
fn details_appends_genre_when_set() {
    let mut t = track();
    t.set_genre("rock");
    assert_eq!(t.details(), "Queen - Bohemian Rhapsody [rock]");

    // Whitespace-only genre stays out of the line.
    t.set_genre("   ");
    assert_eq!(t.details(), "Queen - Bohemian Rhapsody");
}

#[test]
fn set_genre_replaces_unconditionally() {
    let mut t = track();
    t.set_genre("rock");
    t.set_genre("opera");
    assert_eq!(t.genre(), Some("opera"));
}

#[test]
fn new_track_starts_with_zero_plays_and_no_genre() {
    let t = track();
    assert_eq!(t.play_count(), 0);
    assert_eq!(t.genre(), None);
    assert_eq!(t.album, None);
    assert_eq!(t.duration, None);
}

#[test]
fn details_from_fields_formats_configured_fields() {
    let t = track();
    assert_eq!(
        details_from_fields(&t, &[TrackField::Artist, TrackField::Title], " - "),
        "Queen - Bohemian Rhapsody"
    );
    assert_eq!(
        details_from_fields(&t, &[TrackField::Title, TrackField::Plays], " / "),
        "Bohemian Rhapsody / 0 plays"
    );
    assert_eq!(
        details_from_fields(&t, &[TrackField::Filename], " - "),
        "Queen - Bohemian Rhapsody"
    );
}

#[test]
fn details_from_fields_formats_duration_as_mmss() {
    let mut t = track();
    t.duration = Some(Duration::from_secs(354));
    assert_eq!(
        details_from_fields(&t, &[TrackField::Title, TrackField::Duration], " - "),
        "Bohemian Rhapsody - 05:54"
    );

    // A track without a known duration simply skips the field.
    t.duration = None;
    assert_eq!(
        details_from_fields(&t, &[TrackField::Title, TrackField::Duration], " - "),
        "Bohemian Rhapsody"
    );
}

#[test]
fn details_from_fields_skips_empty_parts_and_falls_back_to_title() {
    let t = track();
    assert_eq!(
        details_from_fields(&t, &[TrackField::Album, TrackField::Genre], " - "),
        "Bohemian Rhapsody"
    );
    assert_eq!(details_from_fields(&t, &[], " - "), "Bohemian Rhapsody");
}
