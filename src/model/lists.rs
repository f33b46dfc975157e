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

//! The visible song and playlist lists.
//!
//! [`render_lists`] rebuilds both lists from scratch on every call, there is
//! no diffing against the previous result. Songs are ordered by title and
//! playlists by name, neither ordering is written back to the library.

use std::cmp::Ordering;

use ratatui::style::Color;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{
    model::{PlaylistId, SongId, library::Library},
    util::{colour::duration_colour, format::format_time},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SongRow {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) duration: String,
    pub(crate) duration_colour: Color,
    pub(crate) cover_art: String,
    pub(crate) striped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaylistCard {
    pub(crate) id: PlaylistId,
    pub(crate) name: String,
    pub(crate) song_count: usize,
    pub(crate) duration: String,
    pub(crate) cover_art: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RenderedLists {
    pub(crate) songs: Vec<SongRow>,
    pub(crate) playlists: Vec<PlaylistCard>,
}

/// Rebuilds the visible lists from the library.
///
/// Before anything is computed, references to missing songs are stripped and
/// playlists left without songs are removed from the library, so every card
/// produced here refers only to songs that exist.
pub(crate) fn render_lists(library: &mut Library) -> RenderedLists {
    library.prune_dangling_references();
    library.prune_empty_playlists();

    let mut songs: Vec<_> = library.songs().iter().collect();
    songs.sort_by(|a, b| compare_text(&a.title, &b.title));

    let songs = songs
        .into_iter()
        .enumerate()
        .map(|(index, song)| SongRow {
            id: song.id,
            title: song.title.clone(),
            album: song.album.clone(),
            artist: song.artist.clone(),
            duration: format_time(song.duration),
            duration_colour: duration_colour(song.duration),
            cover_art: song.cover_art.clone(),
            striped: index % 2 == 0,
        })
        .collect();

    let mut playlists: Vec<_> = library.playlists().iter().collect();
    playlists.sort_by(|a, b| compare_text(&a.name, &b.name));

    let playlists = playlists
        .into_iter()
        .map(|playlist| {
            // Every reference resolves after pruning, the fallback is unreachable.
            let duration = library.playlist_duration(playlist.id).unwrap_or_default();
            PlaylistCard {
                id: playlist.id,
                name: playlist.name.clone(),
                song_count: playlist.songs.len(),
                duration: format_time(duration),
                cover_art: playlist.cover_art.clone(),
            }
        })
        .collect();

    RenderedLists { songs, playlists }
}

/// Orders text ignoring case and accents, falling back to a plain comparison
/// so that the order is total.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(sort_key(b)).then_with(|| a.cmp(b))
}

/// Decomposes the text, drops combining marks and lowercases what is left, so
/// `"Éclipse"` sorts as `"eclipse"`.
fn sort_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}
