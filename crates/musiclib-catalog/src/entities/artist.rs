use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{non_null, nullable, require_text, Record};
use crate::ResourceKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Artist {
    const KIND: ResourceKind = ResourceKind::Artist;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Body of `POST /api/artists`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewArtist {
    pub name: String,
    pub genre: String,
    pub country: Option<String>,
    pub biography: Option<String>,
}

impl NewArtist {
    pub fn validate(&self) -> crate::Result<()> {
        require_text("name", &self.name)?;
        require_text("genre", &self.genre)
    }

    pub(crate) fn into_artist(self, id: u64, created_at: DateTime<Utc>) -> Artist {
        Artist {
            id,
            name: self.name,
            genre: self.genre,
            country: self.country,
            biography: self.biography,
            created_at,
        }
    }
}

/// Body of `PUT /api/artists/{id}`. Absent fields keep their stored value,
/// `null` clears `country` or `biography`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArtistUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub biography: Option<Option<String>>,
}

impl ArtistUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(genre) = &self.genre {
            require_text("genre", genre)?;
        }
        Ok(())
    }

    pub(crate) fn apply(self, artist: &mut Artist) {
        if let Some(name) = self.name {
            artist.name = name;
        }
        if let Some(genre) = self.genre {
            artist.genre = genre;
        }
        if let Some(country) = self.country {
            artist.country = country;
        }
        if let Some(biography) = self.biography {
            artist.biography = biography;
        }
    }
}

/// Query of `GET /api/artists`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArtistFilter {
    pub genre: Option<String>,
}

impl ArtistFilter {
    pub fn matches(&self, artist: &Artist) -> bool {
        match self.genre.as_deref() {
            None | Some("") => true,
            Some(genre) => artist.genre.to_lowercase() == genre.to_lowercase(),
        }
    }
}
