// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! In-memory music library.
//!
//! The [`Library`] owns every song and playlist. It enforces id uniqueness
//! and keeps playlists consistent with the song collection: removing a song
//! removes every reference to it straight away.
//!
//! Lookups are linear scans, which is fine for a library of tens to a few
//! hundred items.
//!
//! The library never renders anything itself, callers are expected to
//! rebuild the visible lists after every successful mutation.

use crate::{
    error::LibraryError,
    model::{NewSong, Playlist, PlaylistId, Song, SongId},
};

#[derive(Debug, Default, Clone)]
pub(crate) struct Library {
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
}

impl Library {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds a library from existing collections without validating them.
    ///
    /// Playlists may reference songs that do not exist, the list renderer
    /// strips such references before it computes anything from them.
    pub(crate) fn from_parts(songs: Vec<Song>, playlists: Vec<Playlist>) -> Self {
        Self { songs, playlists }
    }

    /// Songs in insertion order.
    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Playlists in insertion order.
    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn find_song(&self, id: SongId) -> Result<&Song, LibraryError> {
        self.songs
            .iter()
            .find(|s| s.id == id)
            .ok_or(LibraryError::song_not_found(id))
    }

    pub(crate) fn find_playlist(&self, id: PlaylistId) -> Result<&Playlist, LibraryError> {
        self.playlists
            .iter()
            .find(|p| p.id == id)
            .ok_or(LibraryError::playlist_not_found(id))
    }

    pub(crate) fn contains_song(&self, id: SongId) -> bool {
        self.songs.iter().any(|s| s.id == id)
    }

    /// Returns the lowest positive id not used by any song.
    pub(crate) fn vacant_song_id(&self) -> SongId {
        vacant_id(self.songs.iter().map(|s| s.id), self.songs.len())
    }

    /// Returns the lowest positive id not used by any playlist.
    pub(crate) fn vacant_playlist_id(&self) -> PlaylistId {
        vacant_id(self.playlists.iter().map(|p| p.id), self.playlists.len())
    }

    /// Adds a song and returns its id.
    ///
    /// When `id` is `None` the lowest vacant id is assigned, so ids freed by
    /// earlier removals are reused.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Validation`] if the title, album or artist is
    /// blank, or if the id is zero or already in use. Nothing is added on
    /// failure.
    pub(crate) fn add_song(
        &mut self,
        new_song: NewSong,
        id: Option<SongId>,
    ) -> Result<SongId, LibraryError> {
        require_text("title", &new_song.title)?;
        require_text("album", &new_song.album)?;
        require_text("artist", &new_song.artist)?;

        let id = id.unwrap_or_else(|| self.vacant_song_id());
        if id == 0 {
            return Err(LibraryError::validation("id", "song ids start at 1"));
        }
        if self.contains_song(id) {
            return Err(LibraryError::validation("id", format!("{id} is already in use")));
        }

        tracing::debug!(id, title = %new_song.title, "adding song");
        self.songs.push(new_song.into_song(id));

        Ok(id)
    }

    /// Removes a song along with every playlist reference to it.
    ///
    /// Playlists left empty are not removed here, that happens on the next
    /// render via [`Library::prune_empty_playlists`].
    pub(crate) fn remove_song(&mut self, id: SongId) -> Result<Song, LibraryError> {
        let index = self
            .songs
            .iter()
            .position(|s| s.id == id)
            .ok_or(LibraryError::song_not_found(id))?;

        let song = self.songs.remove(index);
        for playlist in self.playlists.iter_mut() {
            playlist.songs.retain(|&song_id| song_id != id);
        }

        tracing::debug!(id, title = %song.title, "removed song");
        Ok(song)
    }

    pub(crate) fn remove_playlist(&mut self, id: PlaylistId) -> Result<Playlist, LibraryError> {
        let index = self
            .playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or(LibraryError::playlist_not_found(id))?;

        let playlist = self.playlists.remove(index);

        tracing::debug!(id, playlist = %playlist.name, "removed playlist");
        Ok(playlist)
    }

    /// Removes every playlist without songs, returning the removed ids.
    pub(crate) fn prune_empty_playlists(&mut self) -> Vec<PlaylistId> {
        let removed: Vec<PlaylistId> = self
            .playlists
            .iter()
            .filter(|p| p.songs.is_empty())
            .map(|p| p.id)
            .collect();

        if !removed.is_empty() {
            tracing::debug!(?removed, "pruning empty playlists");
            self.playlists.retain(|p| !p.songs.is_empty());
        }

        removed
    }

    /// Drops playlist references to songs that are not in the library,
    /// returning how many were dropped.
    pub(crate) fn prune_dangling_references(&mut self) -> usize {
        let Self { songs, playlists } = self;

        let mut dropped = 0;
        for playlist in playlists.iter_mut() {
            let before = playlist.songs.len();
            playlist.songs.retain(|id| songs.iter().any(|s| s.id == *id));
            dropped += before - playlist.songs.len();
        }

        if dropped > 0 {
            tracing::warn!(dropped, "dropped dangling playlist references");
        }

        dropped
    }

    /// Total duration in seconds of the songs in a playlist.
    pub(crate) fn playlist_duration(&self, id: PlaylistId) -> Result<u32, LibraryError> {
        let playlist = self.find_playlist(id)?;

        playlist.songs.iter().try_fold(0u32, |total, &song_id| {
            let song = self.find_song(song_id)?;
            Ok(total.saturating_add(song.duration))
        })
    }

    /// Creates a playlist from existing songs and returns its id.
    ///
    /// Repeated song ids are collapsed, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// * [`LibraryError::Validation`] if the name is blank, no songs are given,
    ///   or the id is zero or already in use.
    /// * [`LibraryError::NotFound`] if any song id does not exist.
    pub(crate) fn create_playlist(
        &mut self,
        name: &str,
        song_ids: &[SongId],
        cover_art: &str,
        id: Option<PlaylistId>,
    ) -> Result<PlaylistId, LibraryError> {
        require_text("name", name)?;
        if song_ids.is_empty() {
            return Err(LibraryError::validation("songs", "a playlist needs at least one song"));
        }

        let mut songs: Vec<SongId> = Vec::with_capacity(song_ids.len());
        for &song_id in song_ids {
            self.find_song(song_id)?;
            if !songs.contains(&song_id) {
                songs.push(song_id);
            }
        }

        let id = id.unwrap_or_else(|| self.vacant_playlist_id());
        if id == 0 {
            return Err(LibraryError::validation("id", "playlist ids start at 1"));
        }
        if self.playlists.iter().any(|p| p.id == id) {
            return Err(LibraryError::validation("id", format!("{id} is already in use")));
        }

        tracing::debug!(id, playlist = name, count = songs.len(), "creating playlist");
        self.playlists.push(Playlist {
            id,
            name: name.to_string(),
            songs,
            cover_art: cover_art.to_string(),
        });

        Ok(id)
    }

    /// Adds a song to a playlist, or removes it if it is already there.
    ///
    /// Returns `true` if the song is a member of the playlist afterwards.
    pub(crate) fn toggle_playlist_song(
        &mut self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<bool, LibraryError> {
        self.find_song(song_id)?;

        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or(LibraryError::playlist_not_found(playlist_id))?;

        let member = match playlist.songs.iter().position(|&id| id == song_id) {
            Some(index) => {
                playlist.songs.remove(index);
                false
            }
            None => {
                playlist.songs.push(song_id);
                true
            }
        };

        tracing::debug!(playlist_id, song_id, member, "toggled playlist song");
        Ok(member)
    }

    /// The song after `id` in insertion order, if any.
    pub(crate) fn next_song_after(&self, id: SongId) -> Option<SongId> {
        let index = self.songs.iter().position(|s| s.id == id)?;
        self.songs.get(index + 1).map(|s| s.id)
    }
}

/// Scans `1..=count + 1` for the first id not present in `used`.
///
/// With `count` entries at most `count` candidates can be taken, so one of
/// the `count + 1` candidates is always free.
fn vacant_id(used: impl Iterator<Item = u32> + Clone, count: usize) -> u32 {
    let limit = u32::try_from(count).unwrap_or(u32::MAX - 1) + 1;
    (1..=limit)
        .find(|candidate| !used.clone().any(|id| id == *candidate))
        .unwrap_or(limit)
}

fn require_text(field: &'static str, value: &str) -> Result<(), LibraryError> {
    if value.trim().is_empty() {
        Err(LibraryError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}
