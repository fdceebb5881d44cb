//! Domain layer for the Tunedex client.
//!
//! This module contains the core domain types and business rules for the
//! client, independent of the HTTP gateway or terminal rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`models`]: Catalog entities (songs, playlists, ratings, session)
//!
//! # Examples
//!
//! ```
//! use tunedex::domain::{Session, Song};
//!
//! let session = Session { user_id: 7, username: "alice".to_string() };
//! let song = Song {
//!     song_id: 1,
//!     title: "Harvest Moon".to_string(),
//!     artist_name: None,
//!     release_year: Some(1992),
//! };
//! assert_eq!(song.artist_label(), "Unknown");
//! assert_eq!(session.user_id, 7);
//! ```

pub mod error;
pub mod models;

pub use error::{Result, TunedexError};
pub use models::{Playlist, PlaylistCard, PlaylistSong, RatingDraft, Session, Song};
