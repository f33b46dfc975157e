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

//! Sample library loaded at startup when enabled in the configuration.

use crate::model::{Playlist, Song, library::Library};

const SONGS: &[(u32, &str, &str, &str, u32, &str)] = &[
    (1, "Vortex", "Wallflowers", "Jinjer", 242, "./images/cover_art/jinjer_vortex.jpg"),
    (2, "Vinda", "Godtfolk", "Songleikr", 160, "./images/cover_art/songleikr_vinda.jpg"),
    (7, "Shiroyama", "The Last Stand", "Sabaton", 213, "./images/cover_art/sabaton_shiroyama.jpg"),
    (3, "Thunderstruck", "The Razors Edge", "AC/DC", 292, "./images/cover_art/acdc_thunderstruck.jpg"),
    (4, "All is One", "All is One", "Orphaned Land", 270, "./images/cover_art/orphaned_land_all_is_one.jpg"),
    (5, "As a Stone", "Show Us What You Got", "Full Trunk", 259, "./images/cover_art/full_trunk_as_a_stone.jpg"),
    (6, "Sons of Winter and Stars", "Time I", "Wintersun", 811, "./images/cover_art/wintersun_sons_of_winter_and_stars.jpg"),
];

const PLAYLISTS: &[(u32, &str, &[u32])] = &[
    (1, "Metal", &[1, 7, 4, 6]),
    (5, "Israeli", &[4, 5]),
];

const PLAYLIST_COVER_ART: &str = "./images/playlist.png";

/// Builds the sample library.
pub(crate) fn sample_library() -> Library {
    let songs = SONGS
        .iter()
        .map(|&(id, title, album, artist, duration, cover_art)| Song {
            id,
            title: title.to_string(),
            album: album.to_string(),
            artist: artist.to_string(),
            duration,
            cover_art: cover_art.to_string(),
        })
        .collect();

    let playlists = PLAYLISTS
        .iter()
        .map(|&(id, name, songs)| Playlist {
            id,
            name: name.to_string(),
            songs: songs.to_vec(),
            cover_art: PLAYLIST_COVER_ART.to_string(),
        })
        .collect();

    Library::from_parts(songs, playlists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_library_is_consistent() {
        let mut library = sample_library();

        assert_eq!(library.prune_dangling_references(), 0);
        assert!(library.prune_empty_playlists().is_empty());

        let mut ids: Vec<u32> = library.songs().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), library.songs().len());
    }

    #[test]
    fn sample_playlist_durations() {
        let library = sample_library();
        assert_eq!(library.playlist_duration(1), Ok(242 + 213 + 270 + 811));
        assert_eq!(library.playlist_duration(5), Ok(270 + 259));
    }
}
