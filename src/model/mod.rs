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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, songs and
//! playlists, along with the in-memory [`library::Library`] that owns them and
//! the [`lists`] view model rebuilt from it after every change.

pub(crate) mod library;
pub(crate) mod lists;
pub(crate) mod sample;

pub(crate) type SongId = u32;
pub(crate) type PlaylistId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) duration: u32,
    pub(crate) cover_art: String,
}

/// The fields of a song before it has been given an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NewSong {
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) duration: u32,
    pub(crate) cover_art: String,
}

impl NewSong {
    pub(crate) fn into_song(self, id: SongId) -> Song {
        Song {
            id,
            title: self.title,
            album: self.album,
            artist: self.artist,
            duration: self.duration,
            cover_art: self.cover_art,
        }
    }
}

/// A named, ordered list of song references.
///
/// A playlist never owns its songs, `songs` only holds ids into the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playlist {
    pub(crate) id: PlaylistId,
    pub(crate) name: String,
    pub(crate) songs: Vec<SongId>,
    pub(crate) cover_art: String,
}
