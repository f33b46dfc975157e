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

//! Application events and the main event loop.
//!
//! Every input to the application arrives as an [`AppEvent`] on a single
//! channel: key presses from the input thread, the UI tick, playback ticks,
//! and the high-level actions that views and the command line emit in
//! response to keys. Events are handled one at a time on the main thread, and
//! the views are brought back in line with the library after each one.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    jukebox::SongForm,
    model::{PlaylistId, SongId},
    player::TickToken,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,
    PlaybackTick(TickToken),

    SetMainView(MainView),

    PlaySong(SongId),
    PlayPlaylist(PlaylistId),
    TogglePause,

    OpenSongForm,
    AddSong(SongForm),
    RemoveSong(SongId),

    /// Creates a playlist with the given name from the marked songs.
    CreatePlaylist(String),
    RemovePlaylist(PlaylistId),
    TogglePlaylistSong(PlaylistId, SongId),

    Error(String),

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    tracing::info!("event loop finished");
    Ok(())
}

/// Handles a single event and then re-syncs the views with the library.
pub(crate) fn dispatch(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app),
        AppEvent::PlaybackTick(token) => handle_playback_tick(app, token),
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::PlaySong(id) => handle_play_song(app, id),
        AppEvent::PlayPlaylist(id) => handle_play_playlist(app, id),
        AppEvent::TogglePause => handle_toggle_pause(app),
        AppEvent::OpenSongForm => handle_open_song_form(app),
        AppEvent::AddSong(form) => handle_add_song(app, form),
        AppEvent::RemoveSong(id) => handle_remove_song(app, id),
        AppEvent::CreatePlaylist(name) => handle_create_playlist(app, name),
        AppEvent::RemovePlaylist(id) => handle_remove_playlist(app, id),
        AppEvent::TogglePlaylistSong(playlist, song) => {
            handle_toggle_playlist_song(app, playlist, song)
        }
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication => {}
    }

    app.sync_views();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::TryRecvError;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{config::AppConfig, model::sample::sample_library, player::PlayerState};

    fn app() -> App {
        let config = AppConfig {
            tick_millis: 60_000,
            ..AppConfig::default()
        };
        App::new(&config, sample_library())
    }

    fn press(app: &mut App, code: KeyCode) {
        dispatch(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Dispatches queued events until the channel is empty, returning whether
    /// an exit was requested.
    fn drain(app: &mut App) -> bool {
        loop {
            match app.event_rx.try_recv() {
                Ok(AppEvent::ExitApplication) => return true,
                Ok(event) => dispatch(app, event).unwrap(),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    #[test]
    fn enter_plays_the_selected_song() {
        let mut app = app();

        // Songs are listed by title, "All is One" comes first
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        assert_eq!(app.jukebox.player().playing_song(), Some(4));
        assert_eq!(app.jukebox.player().state(), PlayerState::Playing);
    }

    #[test]
    fn p_toggles_pause() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('p'));
        drain(&mut app);

        assert_eq!(app.jukebox.player().state(), PlayerState::Paused);
    }

    #[test]
    fn deleting_the_playing_song_stops_playback() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        press(&mut app, KeyCode::Char('d'));
        drain(&mut app);

        assert_eq!(app.jukebox.player().state(), PlayerState::Stopped);
        assert!(app.jukebox.library().find_song(4).is_err());
        assert_eq!(app.song_view.selected_id(), Some(5));
    }

    #[test]
    fn switching_views_routes_keys_to_playlists() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        drain(&mut app);
        assert_eq!(app.main_view, MainView::Playlists);

        // "Israeli" sorts before "Metal", deleting it leaves one card
        press(&mut app, KeyCode::Delete);
        drain(&mut app);

        assert_eq!(app.jukebox.lists().playlists.len(), 1);
        assert_eq!(app.jukebox.lists().playlists[0].name, "Metal");
        assert_eq!(app.jukebox.library().songs().len(), 7);
    }

    #[test]
    fn marked_songs_become_a_playlist() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        drain(&mut app);
        assert_eq!(app.song_view.marked(), &[4, 5]);

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "newpl Road Trip");
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        let card = app
            .jukebox
            .lists()
            .playlists
            .iter()
            .find(|card| card.name == "Road Trip")
            .expect("new playlist is listed");
        assert_eq!(card.song_count, 2);
        assert!(app.song_view.marked().is_empty());
    }

    #[test]
    fn song_form_adds_a_song_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        drain(&mut app);
        assert!(app.song_form.is_active);

        for field in ["Aces High", "Iron Maiden", "Powerslave", "04:31", "aces.jpg"] {
            type_text(&mut app, field);
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        assert!(!app.song_form.is_active);
        let song = app.jukebox.library().find_song(8).unwrap();
        assert_eq!(song.title, "Aces High");
        assert_eq!(song.duration, 271);
    }

    #[test]
    fn invalid_form_stays_open_with_an_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        drain(&mut app);

        type_text(&mut app, "No duration");
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        assert!(app.song_form.is_active);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
        assert_eq!(app.jukebox.library().songs().len(), 7);
    }

    #[test]
    fn stale_playback_tick_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        dispatch(&mut app, AppEvent::PlaybackTick(TickToken(u64::MAX))).unwrap();

        assert_eq!(app.jukebox.player().elapsed(), 0);
    }

    #[test]
    fn q_requests_exit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(drain(&mut app));
    }

    #[test]
    fn unknown_command_reports_an_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "frobnicate");
        press(&mut app, KeyCode::Enter);
        drain(&mut app);

        let status = app.status.as_ref().expect("status message is shown");
        assert!(status.is_error);
        assert!(status.text.contains("frobnicate"));
    }
}
