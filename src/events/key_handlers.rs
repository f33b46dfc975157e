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

//! Keyboard routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App, MainView,
    events::{AppEvent, AppEventProcessor},
};

/// Maps keyboard input to application events.
///
/// Keys go to the first interested party, in order:
///
/// * the add-song form, while it is open, takes every key;
/// * the command line, while it is open or when `:` is pressed;
/// * the active list view, for navigation and per-item actions;
/// * the global bindings.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.song_form.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    match app.main_view {
        MainView::Songs => app.song_view.process_event(&event, &app.event_tx)?,
        MainView::Playlists => app.playlist_view.process_event(&event, &app.event_tx)?,
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Songs))?,
        KeyCode::Char('2') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Playlists))?,
        KeyCode::Tab => app
            .event_tx
            .send(AppEvent::SetMainView(app.main_view.other()))?,

        KeyCode::Char('p') => app.event_tx.send(AppEvent::TogglePause)?,
        KeyCode::Char('a') => app.event_tx.send(AppEvent::OpenSongForm)?,

        _ => {}
    }

    Ok(())
}
