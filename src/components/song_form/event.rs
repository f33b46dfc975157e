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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::SongFormView, events::AppEvent};

impl SongFormView {
    /// Handles a key while the form is open.
    ///
    /// Returns `true` if the event was consumed, which is always the case
    /// while the form is open.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Esc => self.close(),
                KeyCode::Tab | KeyCode::Down => self.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
                KeyCode::Enter => event_tx.send(AppEvent::AddSong(self.to_form()))?,
                _ => {
                    self.inputs[self.focus].handle_event(event);
                }
            }
        }

        Ok(true)
    }
}
