//! Form field state for the modal dialogs.
//!
//! Each modal carries one of these structs. Forms accumulate characters into
//! their focused field, cycle focus with Tab, and perform the only client-side
//! validation that exists: presence checks and integer coercion. Anything
//! beyond that is the backend's job.

use crate::domain::{Playlist, RatingDraft, TunedexError};

/// Fields of the rating form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    Stars,
    Comment,
}

/// Star rating form for one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateForm {
    /// Song the rating targets.
    pub song_id: i64,
    /// Title shown in the dialog subtitle.
    pub song_title: String,
    /// Raw star input; coerced to an integer on submit.
    pub stars: String,
    /// Free-text comment.
    pub comment: String,
    /// Currently focused field.
    pub focus: RateField,
}

impl RateForm {
    /// Creates an empty form for the given song.
    #[must_use]
    pub fn new(song_id: i64, song_title: String) -> Self {
        Self {
            song_id,
            song_title,
            stars: String::new(),
            comment: String::new(),
            focus: RateField::Stars,
        }
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            RateField::Stars => RateField::Comment,
            RateField::Comment => RateField::Stars,
        };
    }

    /// Returns the field characters are currently typed into.
    pub fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            RateField::Stars => &mut self.stars,
            RateField::Comment => &mut self.comment,
        }
    }

    /// Coerces the star input to an integer.
    ///
    /// # Errors
    ///
    /// Returns an input error when the field is empty or does not parse as a
    /// whole number. The rating is never sent with a non-numeric star value.
    pub fn parse_stars(&self) -> Result<u8, TunedexError> {
        let raw = self.stars.trim();
        if raw.is_empty() {
            return Err(TunedexError::Input("Enter a star rating".to_string()));
        }
        raw.parse().map_err(|_| {
            TunedexError::Input(format!("Stars must be a whole number, got '{raw}'"))
        })
    }

    /// Builds the rating to submit for the given user.
    ///
    /// # Errors
    ///
    /// Propagates the star coercion error; no request is sent in that case.
    pub fn to_draft(&self, user_id: i64) -> Result<RatingDraft, TunedexError> {
        Ok(RatingDraft {
            user_id,
            song_id: self.song_id,
            stars: self.parse_stars()?,
            comment: self.comment.trim().to_string(),
        })
    }
}

/// Fields of the playlist creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistField {
    Name,
    Visibility,
}

/// Name and visibility form for a new playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlaylistForm {
    /// Playlist name; must be non-empty on submit.
    pub name: String,
    /// Whether the playlist is publicly visible.
    pub is_public: bool,
    /// Currently focused field.
    pub focus: PlaylistField,
}

impl CreatePlaylistForm {
    /// Creates an empty form. New playlists default to public, matching the
    /// backend default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            is_public: true,
            focus: PlaylistField::Name,
        }
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            PlaylistField::Name => PlaylistField::Visibility,
            PlaylistField::Visibility => PlaylistField::Name,
        };
    }

    /// Flips the visibility flag.
    pub fn toggle_visibility(&mut self) {
        self.is_public = !self.is_public;
    }

    /// Returns the trimmed playlist name.
    ///
    /// # Errors
    ///
    /// Returns an input error when the name is empty.
    pub fn validated_name(&self) -> Result<String, TunedexError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TunedexError::Input("Enter a playlist name".to_string()));
        }
        Ok(name.to_string())
    }
}

impl Default for CreatePlaylistForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Playlist picker for adding one song.
///
/// The playlist list is fetched fresh when the dialog opens, so the choices
/// reflect the backend at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToPlaylistForm {
    /// Song being added.
    pub song_id: i64,
    /// Title shown in the dialog subtitle.
    pub song_title: String,
    /// Playlists available as targets.
    pub playlists: Vec<Playlist>,
    /// Index of the highlighted playlist.
    pub selected: usize,
}

impl AddToPlaylistForm {
    /// Creates a picker over the given playlists.
    #[must_use]
    pub fn new(song_id: i64, song_title: String, playlists: Vec<Playlist>) -> Self {
        Self {
            song_id,
            song_title,
            playlists,
            selected: 0,
        }
    }

    /// Moves the highlight down by one, wrapping.
    pub fn select_next(&mut self) {
        if self.playlists.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.playlists.len();
    }

    /// Moves the highlight up by one, wrapping.
    pub fn select_prev(&mut self) {
        if self.playlists.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.playlists.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Returns the highlighted playlist.
    ///
    /// # Errors
    ///
    /// Returns an input error when there is no playlist to select; the add
    /// request is never sent without a target.
    pub fn selected_playlist(&self) -> Result<&Playlist, TunedexError> {
        self.playlists
            .get(self.selected)
            .ok_or_else(|| TunedexError::Input("Select a playlist first".to_string()))
    }
}

/// New-name form for renaming a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameForm {
    /// Playlist being renamed.
    pub playlist_id: i64,
    /// Name at the time the dialog opened.
    pub original_name: String,
    /// Edited name, pre-filled with the original.
    pub name: String,
}

impl RenameForm {
    /// Creates a form pre-filled with the current name.
    #[must_use]
    pub fn new(playlist_id: i64, original_name: String) -> Self {
        let name = original_name.clone();
        Self {
            playlist_id,
            original_name,
            name,
        }
    }

    /// Returns the trimmed new name, or `None` when it is unchanged.
    ///
    /// An unchanged name skips the request entirely.
    ///
    /// # Errors
    ///
    /// Returns an input error when the name is empty.
    pub fn validated_name(&self) -> Result<Option<String>, TunedexError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TunedexError::Input("Enter a playlist name".to_string()));
        }
        if name == self.original_name {
            return Ok(None);
        }
        Ok(Some(name.to_string()))
    }
}
