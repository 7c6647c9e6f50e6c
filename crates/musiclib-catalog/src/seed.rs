//! Fixed demo records loaded at start-up.

use chrono::{DateTime, TimeZone, Utc};

use crate::entities::{Album, Artist, Song};

fn seeded_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub(crate) fn artists() -> Vec<Artist> {
    vec![
        Artist {
            id: 1,
            name: "The Beatles".into(),
            genre: "Rock".into(),
            country: Some("United Kingdom".into()),
            biography: Some("The most influential band of all time".into()),
            created_at: seeded_at(1),
        },
        Artist {
            id: 2,
            name: "Queen".into(),
            genre: "Rock".into(),
            country: Some("United Kingdom".into()),
            biography: Some("Legendary rock band".into()),
            created_at: seeded_at(2),
        },
    ]
}

pub(crate) fn albums() -> Vec<Album> {
    vec![
        Album {
            id: 1,
            title: "Abbey Road".into(),
            artist_id: 1,
            release_year: 1969,
            genre: Some("Rock".into()),
            created_at: seeded_at(1),
        },
        Album {
            id: 2,
            title: "A Night at the Opera".into(),
            artist_id: 2,
            release_year: 1975,
            genre: Some("Rock".into()),
            created_at: seeded_at(2),
        },
    ]
}

pub(crate) fn songs(audio_base_url: &str) -> Vec<Song> {
    vec![
        Song {
            id: 1,
            title: "Come Together".into(),
            album_id: 1,
            duration: 259,
            track_number: Some(1),
            created_at: seeded_at(1),
            audio_url: Some(format!("{audio_base_url}/1.mp3")),
        },
        Song {
            id: 2,
            title: "Bohemian Rhapsody".into(),
            album_id: 2,
            duration: 354,
            track_number: Some(1),
            created_at: seeded_at(2),
            audio_url: Some(format!("{audio_base_url}/2.mp3")),
        },
    ]
}
