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

//! User-facing library operations.
//!
//! The [`Jukebox`] ties the library, the visible lists and the playback
//! controller together. Every mutation follows the same sequence: change the
//! library, rebuild the lists, then stop playback if the song that was
//! playing no longer exists.
//!
//! Validation always happens before the library is touched, so a failed
//! operation leaves the library, the lists and playback exactly as they were.

use crate::{
    error::LibraryError,
    model::{
        NewSong, PlaylistId, SongId,
        library::Library,
        lists::{RenderedLists, render_lists},
    },
    player::{PlaybackController, TickOutcome, TickToken},
    util::format::parse_time,
};

const PLAYLIST_COVER_ART: &str = "./images/playlist.png";

/// Raw text entered in the add-song form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SongForm {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) duration: String,
    pub(crate) cover_art: String,
    pub(crate) id: String,
}

impl SongForm {
    /// Converts the form text into a new song and an optional explicit id.
    ///
    /// A blank id means the library picks one. Text fields are checked by
    /// [`Library::add_song`].
    pub(crate) fn parse(&self) -> Result<(NewSong, Option<SongId>), LibraryError> {
        let duration = parse_time(&self.duration)?;

        let id = match self.id.trim() {
            "" => None,
            id => Some(
                id.parse::<SongId>()
                    .map_err(|_| LibraryError::validation("id", format!("'{id}' is not a number")))?,
            ),
        };

        let new_song = NewSong {
            title: self.title.trim().to_string(),
            album: self.album.trim().to_string(),
            artist: self.artist.trim().to_string(),
            duration,
            cover_art: self.cover_art.trim().to_string(),
        };

        Ok((new_song, id))
    }
}

pub(crate) struct Jukebox {
    library: Library,
    player: PlaybackController,
    lists: RenderedLists,
}

impl Jukebox {
    pub(crate) fn new(library: Library, player: PlaybackController) -> Self {
        let mut jukebox = Self {
            library,
            player,
            lists: RenderedLists::default(),
        };
        jukebox.render();
        jukebox
    }

    pub(crate) fn library(&self) -> &Library {
        &self.library
    }

    pub(crate) fn player(&self) -> &PlaybackController {
        &self.player
    }

    pub(crate) fn lists(&self) -> &RenderedLists {
        &self.lists
    }

    /// Rebuilds the visible lists from the library.
    pub(crate) fn render(&mut self) {
        self.lists = render_lists(&mut self.library);
    }

    pub(crate) fn add_song(&mut self, form: &SongForm) -> Result<SongId, LibraryError> {
        let (new_song, id) = form.parse()?;
        let id = self.library.add_song(new_song, id)?;
        self.render();

        tracing::info!(id, "song added");
        Ok(id)
    }

    /// Removes a song, stopping playback if it was the one playing.
    pub(crate) fn remove_song(&mut self, id: SongId) -> Result<(), LibraryError> {
        self.library.remove_song(id)?;
        self.render();

        if self.player.playing_song() == Some(id) {
            tracing::info!(id, "removed the playing song, stopping playback");
            self.player.stop();
        }

        Ok(())
    }

    pub(crate) fn remove_playlist(&mut self, id: PlaylistId) -> Result<(), LibraryError> {
        self.library.remove_playlist(id)?;
        self.render();
        Ok(())
    }

    pub(crate) fn create_playlist(
        &mut self,
        name: &str,
        songs: &[SongId],
    ) -> Result<PlaylistId, LibraryError> {
        let id = self
            .library
            .create_playlist(name.trim(), songs, PLAYLIST_COVER_ART, None)?;
        self.render();

        tracing::info!(id, playlist = name, "playlist created");
        Ok(id)
    }

    /// Adds or removes a song from a playlist, returning whether the song is
    /// now a member.
    ///
    /// Removing the last song removes the playlist itself on the render that
    /// follows.
    pub(crate) fn toggle_playlist_song(
        &mut self,
        playlist: PlaylistId,
        song: SongId,
    ) -> Result<bool, LibraryError> {
        let member = self.library.toggle_playlist_song(playlist, song)?;
        self.render();
        Ok(member)
    }

    pub(crate) fn play(&mut self, id: SongId) -> Result<(), LibraryError> {
        self.player.play(&self.library, id)
    }

    pub(crate) fn play_playlist(&mut self, id: PlaylistId) -> Result<(), LibraryError> {
        self.player.play_playlist(&self.library, id)
    }

    pub(crate) fn tick(&mut self, token: TickToken) -> TickOutcome {
        self.player.tick(&self.library, token)
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.player.toggle_pause();
    }
}
