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

use crate::{
    App, MainView, StatusMessage,
    error::LibraryError,
    jukebox::SongForm,
    model::{PlaylistId, SongId},
    player::{TickOutcome, TickToken},
};

pub(super) fn handle_tick(app: &mut App) {
    if app.status.as_ref().is_some_and(StatusMessage::expired) {
        app.status = None;
    }
}

pub(super) fn handle_playback_tick(app: &mut App, token: TickToken) {
    match app.jukebox.tick(token) {
        TickOutcome::Advanced(id) => tracing::debug!(id, "advanced to next song"),
        TickOutcome::Finished => app.status = Some(StatusMessage::info("End of library")),
        TickOutcome::Progressed | TickOutcome::Ignored => {}
    }
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.main_view = main_view;
}

pub(super) fn handle_play_song(app: &mut App, id: SongId) {
    if let Err(e) = app.jukebox.play(id) {
        report(app, e);
    }
}

pub(super) fn handle_play_playlist(app: &mut App, id: PlaylistId) {
    if let Err(e) = app.jukebox.play_playlist(id) {
        report(app, e);
    }
}

pub(super) fn handle_toggle_pause(app: &mut App) {
    app.jukebox.toggle_pause();
}

pub(super) fn handle_open_song_form(app: &mut App) {
    app.song_form.open();
}

pub(super) fn handle_add_song(app: &mut App, form: SongForm) {
    match app.jukebox.add_song(&form) {
        Ok(id) => {
            app.song_form.close();
            app.status = Some(StatusMessage::info(format!("Added song {id}")));
        }
        // The form stays open so the input can be corrected
        Err(e) => report(app, e),
    }
}

pub(super) fn handle_remove_song(app: &mut App, id: SongId) {
    match app.jukebox.remove_song(id) {
        Ok(()) => app.status = Some(StatusMessage::info(format!("Removed song {id}"))),
        Err(e) => report(app, e),
    }
}

pub(super) fn handle_create_playlist(app: &mut App, name: String) {
    let songs = app.song_view.marked().to_vec();

    match app.jukebox.create_playlist(&name, &songs) {
        Ok(id) => {
            app.song_view.clear_marks();
            app.status = Some(StatusMessage::info(format!("Created playlist {id}")));
        }
        Err(e) => report(app, e),
    }
}

pub(super) fn handle_remove_playlist(app: &mut App, id: PlaylistId) {
    match app.jukebox.remove_playlist(id) {
        Ok(()) => app.status = Some(StatusMessage::info(format!("Removed playlist {id}"))),
        Err(e) => report(app, e),
    }
}

pub(super) fn handle_toggle_playlist_song(app: &mut App, playlist: PlaylistId, song: SongId) {
    match app.jukebox.toggle_playlist_song(playlist, song) {
        Ok(true) => {
            app.status = Some(StatusMessage::info(format!("Added song {song} to playlist {playlist}")))
        }
        Ok(false) => {
            app.status = Some(StatusMessage::info(format!(
                "Removed song {song} from playlist {playlist}"
            )))
        }
        Err(e) => report(app, e),
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::warn!(%message, "command failed");
    app.status = Some(StatusMessage::error(message));
}

fn report(app: &mut App, error: LibraryError) {
    tracing::warn!(%error, "library operation failed");
    app.status = Some(StatusMessage::error(error.to_string()));
}
