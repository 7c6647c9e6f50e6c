pub mod album;
pub mod artist;
pub mod song;

pub use album::{Album, AlbumFilter, AlbumUpdate, NewAlbum};
pub use artist::{Artist, ArtistFilter, ArtistUpdate, NewArtist};
pub use song::{NewSong, Song, SongFilter, SongUpdate};

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use crate::{CatalogError, ResourceKind};

/// A catalog row addressable by its numeric id.
pub trait Record: Clone {
    const KIND: ResourceKind;

    fn id(&self) -> u64;
}

pub(crate) fn require_text(field: &str, value: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Update field that cannot be cleared: `null` fails like any other wrong type.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Update field that can be cleared: absent is `None`, `null` is `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

/// Query-string numbers arrive as text; an empty value means "no filter".
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_whitespace() {
        let err = require_text("name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "name must not be blank");
    }

    #[test]
    fn test_require_text_accepts_value() {
        assert!(require_text("name", "Queen").is_ok());
    }
}
