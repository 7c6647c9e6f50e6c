//! In-memory catalog store.
//!
//! Each record family lives in its own ordered [`Collection`] behind a
//! `RwLock`, so a lookup followed by a write (update, delete, audio attach)
//! happens under a single write guard. Ids come from a per-collection
//! counter and are never handed out twice, even after deletes.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::entities::{
    Album, AlbumFilter, AlbumUpdate, Artist, ArtistFilter, ArtistUpdate, NewAlbum, NewArtist,
    NewSong, Record, Song, SongFilter, SongUpdate,
};
use crate::{seed, CatalogConfig, CatalogError};

// ─── Collection ─────────────────────────────────────────────────────────

struct Collection<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Collection<T> {
    fn new(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| keep(r)).cloned().collect()
    }

    fn get(&self, id: u64) -> crate::Result<T> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(CatalogError::not_found(T::KIND, id))
    }

    fn get_mut(&mut self, id: u64) -> crate::Result<&mut T> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(CatalogError::not_found(T::KIND, id))
    }

    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.push(record.clone());
        record
    }

    fn remove(&mut self, id: u64) -> crate::Result<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(CatalogError::not_found(T::KIND, id))?;
        Ok(self.records.remove(index))
    }
}

fn normalize_base(audio_base_url: &str) -> &str {
    audio_base_url.trim_end_matches('/')
}

// ─── Store ──────────────────────────────────────────────────────────────

/// The artists, albums and songs served by the API.
pub struct CatalogStore {
    artists: RwLock<Collection<Artist>>,
    albums: RwLock<Collection<Album>>,
    songs: RwLock<Collection<Song>>,
    audio_base_url: String,
}

impl CatalogStore {
    /// Build a store according to `config`, seeded unless `config.seed` is off.
    pub fn new(config: &CatalogConfig) -> Self {
        if config.seed {
            Self::seeded(&config.audio_base_url)
        } else {
            Self::empty(&config.audio_base_url)
        }
    }

    pub fn empty(audio_base_url: &str) -> Self {
        Self::from_records(Vec::new(), Vec::new(), Vec::new(), audio_base_url)
    }

    /// A store holding the two demo artists, albums and songs.
    pub fn seeded(audio_base_url: &str) -> Self {
        let base = normalize_base(audio_base_url);
        let store = Self::from_records(seed::artists(), seed::albums(), seed::songs(base), base);
        tracing::debug!("catalog seeded with demo records");
        store
    }

    fn from_records(
        artists: Vec<Artist>,
        albums: Vec<Album>,
        songs: Vec<Song>,
        audio_base_url: &str,
    ) -> Self {
        Self {
            artists: RwLock::new(Collection::new(artists)),
            albums: RwLock::new(Collection::new(albums)),
            songs: RwLock::new(Collection::new(songs)),
            audio_base_url: normalize_base(audio_base_url).to_string(),
        }
    }

    /// Placeholder location of a song's audio file.
    pub fn audio_url(&self, song_id: u64) -> String {
        format!("{}/{song_id}.mp3", self.audio_base_url)
    }

    // ── Artists ─────────────────────────────────────────────────────────

    pub async fn list_artists(&self, filter: &ArtistFilter) -> Vec<Artist> {
        self.artists.read().await.filtered(|a| filter.matches(a))
    }

    pub async fn artist(&self, id: u64) -> crate::Result<Artist> {
        self.artists.read().await.get(id)
    }

    pub async fn create_artist(&self, new: NewArtist) -> crate::Result<Artist> {
        new.validate()?;
        let now = Utc::now();
        Ok(self
            .artists
            .write()
            .await
            .insert_with(|id| new.into_artist(id, now)))
    }

    pub async fn update_artist(&self, id: u64, update: ArtistUpdate) -> crate::Result<Artist> {
        let mut artists = self.artists.write().await;
        let artist = artists.get_mut(id)?;
        update.validate()?;
        update.apply(artist);
        Ok(artist.clone())
    }

    /// Remove an artist. Their albums stay in the catalog.
    pub async fn delete_artist(&self, id: u64) -> crate::Result<Artist> {
        self.artists.write().await.remove(id)
    }

    // ── Albums ──────────────────────────────────────────────────────────

    pub async fn list_albums(&self, filter: &AlbumFilter) -> Vec<Album> {
        self.albums.read().await.filtered(|a| filter.matches(a))
    }

    pub async fn album(&self, id: u64) -> crate::Result<Album> {
        self.albums.read().await.get(id)
    }

    pub async fn create_album(&self, new: NewAlbum) -> crate::Result<Album> {
        new.validate()?;
        let now = Utc::now();
        Ok(self
            .albums
            .write()
            .await
            .insert_with(|id| new.into_album(id, now)))
    }

    pub async fn update_album(&self, id: u64, update: AlbumUpdate) -> crate::Result<Album> {
        let mut albums = self.albums.write().await;
        let album = albums.get_mut(id)?;
        update.validate()?;
        update.apply(album);
        Ok(album.clone())
    }

    /// Remove an album. Its songs stay in the catalog.
    pub async fn delete_album(&self, id: u64) -> crate::Result<Album> {
        self.albums.write().await.remove(id)
    }

    // ── Songs ───────────────────────────────────────────────────────────

    pub async fn list_songs(&self, filter: &SongFilter) -> Vec<Song> {
        self.songs.read().await.filtered(|s| filter.matches(s))
    }

    pub async fn song(&self, id: u64) -> crate::Result<Song> {
        self.songs.read().await.get(id)
    }

    pub async fn create_song(&self, new: NewSong) -> crate::Result<Song> {
        new.validate()?;
        let now = Utc::now();
        Ok(self
            .songs
            .write()
            .await
            .insert_with(|id| new.into_song(id, now, self.audio_url(id))))
    }

    pub async fn update_song(&self, id: u64, update: SongUpdate) -> crate::Result<Song> {
        let mut songs = self.songs.write().await;
        let song = songs.get_mut(id)?;
        update.validate()?;
        update.apply(song);
        Ok(song.clone())
    }

    pub async fn delete_song(&self, id: u64) -> crate::Result<Song> {
        self.songs.write().await.remove(id)
    }

    /// Point a song at its (synthesized) audio file and return the URL.
    pub async fn attach_audio(&self, song_id: u64) -> crate::Result<String> {
        let mut songs = self.songs.write().await;
        let song = songs.get_mut(song_id)?;
        let url = self.audio_url(song_id);
        song.audio_url = Some(url.clone());
        Ok(url)
    }
}
