use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{empty_as_none, non_null, nullable, require_text, Record};
use crate::ResourceKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub title: String,
    /// Not checked against the artist collection.
    pub artist_id: u64,
    pub release_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Album {
    const KIND: ResourceKind = ResourceKind::Album;

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAlbum {
    pub title: String,
    pub artist_id: u64,
    pub release_year: i32,
    pub genre: Option<String>,
}

impl NewAlbum {
    pub fn validate(&self) -> crate::Result<()> {
        require_text("title", &self.title)
    }

    pub(crate) fn into_album(self, id: u64, created_at: DateTime<Utc>) -> Album {
        Album {
            id,
            title: self.title,
            artist_id: self.artist_id,
            release_year: self.release_year,
            genre: self.genre,
            created_at,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlbumUpdate {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub artist_id: Option<u64>,
    #[serde(default, deserialize_with = "non_null")]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub genre: Option<Option<String>>,
}

impl AlbumUpdate {
    pub fn validate(&self) -> crate::Result<()> {
        match &self.title {
            Some(title) => require_text("title", title),
            None => Ok(()),
        }
    }

    pub(crate) fn apply(self, album: &mut Album) {
        if let Some(title) = self.title {
            album.title = title;
        }
        if let Some(artist_id) = self.artist_id {
            album.artist_id = artist_id;
        }
        if let Some(release_year) = self.release_year {
            album.release_year = release_year;
        }
        if let Some(genre) = self.genre {
            album.genre = genre;
        }
    }
}

/// Query of `GET /api/albums`; both filters must match when given.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AlbumFilter {
    #[serde(rename = "artistId", default, deserialize_with = "empty_as_none")]
    pub artist_id: Option<u64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
}

impl AlbumFilter {
    pub fn matches(&self, album: &Album) -> bool {
        self.artist_id.map_or(true, |id| album.artist_id == id)
            && self.year.map_or(true, |year| album.release_year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_album() -> Album {
        Album {
            id: 2,
            title: "A Night at the Opera".into(),
            artist_id: 2,
            release_year: 1975,
            genre: Some("Rock".into()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_album_serialization() {
        let json = serde_json::to_value(make_album()).unwrap();
        assert_eq!(json["artistId"], 2);
        assert_eq!(json["releaseYear"], 1975);
        assert!(json.get("artist_id").is_none());
    }

    #[test]
    fn test_new_album_requires_release_year() {
        let res = serde_json::from_str::<NewAlbum>(r#"{"title": "Help!", "artistId": 1}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_new_album_wrong_type() {
        let res = serde_json::from_str::<NewAlbum>(
            r#"{"title": "Help!", "artistId": "one", "releaseYear": 1965}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_update_merges_fields() {
        let mut album = make_album();
        let update: AlbumUpdate = serde_json::from_str(r#"{"releaseYear": 1976}"#).unwrap();
        update.apply(&mut album);
        assert_eq!(album.release_year, 1976);
        assert_eq!(album.title, "A Night at the Opera");
        assert_eq!(album.genre.as_deref(), Some("Rock"));
    }

    #[test]
    fn test_update_null_genre_clears_it() {
        let mut album = make_album();
        let update: AlbumUpdate = serde_json::from_str(r#"{"genre": null}"#).unwrap();
        update.apply(&mut album);
        assert!(album.genre.is_none());
        assert_eq!(album.release_year, 1975);
    }

    #[test]
    fn test_update_null_release_year_rejected() {
        let res = serde_json::from_str::<AlbumUpdate>(r#"{"releaseYear": null}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_filter_combines_artist_and_year() {
        let album = make_album();
        let filter: AlbumFilter =
            serde_json::from_str(r#"{"artistId": "2", "year": "1975"}"#).unwrap();
        assert!(filter.matches(&album));

        let filter: AlbumFilter =
            serde_json::from_str(r#"{"artistId": "2", "year": "1969"}"#).unwrap();
        assert!(!filter.matches(&album));
    }

    #[test]
    fn test_filter_empty_value_is_ignored() {
        let filter: AlbumFilter = serde_json::from_str(r#"{"artistId": ""}"#).unwrap();
        assert!(filter.artist_id.is_none());
        assert!(filter.matches(&make_album()));
    }

    #[test]
    fn test_filter_rejects_non_numeric() {
        let res = serde_json::from_str::<AlbumFilter>(r#"{"year": "nineteen"}"#);
        assert!(res.is_err());
    }
}
