//! Catalog entity models.
//!
//! This module defines the records exchanged with the catalog backend and the
//! in-memory session. All server-owned entities are transient snapshots: the
//! client fetches them on demand, renders them, and never assigns identifiers
//! or keeps an authoritative copy.

use serde::{Deserialize, Serialize};

/// The signed-in user.
///
/// Created on successful login, dropped on logout. Lives only in memory and is
/// never persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Backend identifier of the user.
    pub user_id: i64,
    /// Display name shown in the header.
    pub username: String,
}

/// A song in the catalog.
///
/// Songs are read-only from the client's perspective. `artist_name` is the
/// backend's aggregated artist string and may be absent for songs without
/// artist records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub song_id: i64,
    pub title: String,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

impl Song {
    /// Returns the artist name, or `"Unknown"` when the catalog has none.
    #[must_use]
    pub fn artist_label(&self) -> &str {
        self.artist_name.as_deref().unwrap_or("Unknown")
    }

    /// Returns the release year as display text, or `"N/A"` when absent.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.release_year
            .map_or_else(|| "N/A".to_string(), |year| year.to_string())
    }
}

/// A playlist owned by a user.
///
/// Playlists can be renamed and deleted; membership is managed through
/// [`PlaylistSong`] records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub playlist_id: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
    pub name: String,
    pub is_public: bool,
}

impl Playlist {
    /// Returns the visibility indicator text for this playlist.
    #[must_use]
    pub const fn visibility_label(&self) -> &'static str {
        if self.is_public {
            "public"
        } else {
            "private"
        }
    }
}

/// A song as a member of a playlist.
///
/// The backend denormalizes song fields into the membership listing so the
/// client can render a card without extra lookups. `position` is the song's
/// slot within the playlist ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSong {
    pub song_id: i64,
    pub title: String,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub position: Option<i32>,
}

impl PlaylistSong {
    /// Returns the artist name, or `"Unknown"` when the catalog has none.
    #[must_use]
    pub fn artist_label(&self) -> &str {
        self.artist_name.as_deref().unwrap_or("Unknown")
    }

    /// Formats a single display line for this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use tunedex::domain::PlaylistSong;
    ///
    /// let entry = PlaylistSong {
    ///     song_id: 3,
    ///     title: "Holiday".to_string(),
    ///     artist_name: Some("Green Day".to_string()),
    ///     release_year: Some(2004),
    ///     position: Some(1),
    /// };
    /// assert_eq!(entry.display_line(), "Holiday by Green Day (2004)");
    /// ```
    #[must_use]
    pub fn display_line(&self) -> String {
        let year = self
            .release_year
            .map_or_else(|| "N/A".to_string(), |year| year.to_string());
        format!("{} by {} ({})", self.title, self.artist_label(), year)
    }
}

/// A rating to submit for a song.
///
/// Ratings are write-only: the client sends them and never reads them back.
/// `stars` is always an integer by the time a draft exists; text input is
/// coerced (or rejected) by the form layer before a draft is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingDraft {
    pub user_id: i64,
    pub song_id: i64,
    pub stars: u8,
    pub comment: String,
}

/// A playlist together with its member songs.
///
/// Client-side aggregate assembled by the worker from one playlist listing
/// plus one membership listing per playlist. This is the unit the playlists
/// view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCard {
    pub playlist: Playlist,
    pub songs: Vec<PlaylistSong>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_label_falls_back_to_unknown() {
        let song = Song {
            song_id: 1,
            title: "Untitled".to_string(),
            artist_name: None,
            release_year: None,
        };
        assert_eq!(song.artist_label(), "Unknown");
        assert_eq!(song.year_label(), "N/A");
    }

    #[test]
    fn song_deserializes_without_optional_fields() {
        let song: Song = serde_json::from_str(r#"{"song_id": 5, "title": "Echoes"}"#)
            .expect("song without artist or year should deserialize");
        assert_eq!(song.song_id, 5);
        assert!(song.artist_name.is_none());
        assert!(song.release_year.is_none());
    }

    #[test]
    fn visibility_label_tracks_flag() {
        let mut playlist = Playlist {
            playlist_id: 1,
            owner_id: Some(7),
            name: "Road trip".to_string(),
            is_public: true,
        };
        assert_eq!(playlist.visibility_label(), "public");
        playlist.is_public = false;
        assert_eq!(playlist.visibility_label(), "private");
    }

    #[test]
    fn rating_serializes_stars_as_integer() {
        let draft = RatingDraft {
            user_id: 7,
            song_id: 3,
            stars: 4,
            comment: "great chorus".to_string(),
        };
        let value = serde_json::to_value(&draft).expect("draft should serialize");
        assert_eq!(value["stars"], serde_json::json!(4));
        assert!(value["stars"].is_i64() || value["stars"].is_u64());
    }
}
