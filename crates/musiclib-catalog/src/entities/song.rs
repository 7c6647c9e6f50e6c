use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{empty_as_none, non_null, nullable, require_text, Record};
use crate::{CatalogError, ResourceKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub album_id: u64,
    /// Length in seconds.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
    pub created_at: DateTime<Utc>,
    /// Always serialized, `null` when no audio is attached.
    pub audio_url: Option<String>,
}

impl Record for Song {
    const KIND: ResourceKind = ResourceKind::Song;

    fn id(&self) -> u64 {
        self.id
    }
}

fn require_duration(duration: u32) -> crate::Result<()> {
    if duration == 0 {
        return Err(CatalogError::Validation(
            "duration must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewSong {
    pub title: String,
    pub album_id: u64,
    pub duration: u32,
    pub track_number: Option<u32>,
}

impl NewSong {
    pub fn validate(&self) -> crate::Result<()> {
        require_text("title", &self.title)?;
        require_duration(self.duration)
    }

    pub(crate) fn into_song(self, id: u64, created_at: DateTime<Utc>, audio_url: String) -> Song {
        Song {
            id,
            title: self.title,
            album_id: self.album_id,
            duration: self.duration,
            track_number: self.track_number,
            created_at,
            audio_url: Some(audio_url),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SongUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub album_id: Option<u64>,
    #[serde(default, deserialize_with = "non_null")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub track_number: Option<Option<u32>>,
}

impl SongUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(duration) = self.duration {
            require_duration(duration)?;
        }
        Ok(())
    }

    pub(crate) fn apply(self, song: &mut Song) {
        if let Some(title) = self.title {
            song.title = title;
        }
        if let Some(album_id) = self.album_id {
            song.album_id = album_id;
        }
        if let Some(duration) = self.duration {
            song.duration = duration;
        }
        if let Some(track_number) = self.track_number {
            song.track_number = track_number;
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SongFilter {
    #[serde(rename = "albumId", default, deserialize_with = "empty_as_none")]
    pub album_id: Option<u64>,
}

impl SongFilter {
    pub fn matches(&self, song: &Song) -> bool {
        self.album_id.map_or(true, |id| song.album_id == id)
    }
}
