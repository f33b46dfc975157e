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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component opened with `:`. It
//! manages a text input and, when a command is submitted, dispatches the
//! corresponding application event.
//!
//! # Commands
//!
//! | Command                    | Effect                                   |
//! |----------------------------|------------------------------------------|
//! | `q`                        | quit                                     |
//! | `songs`, `playlists`       | switch view                              |
//! | `add`                      | open the add-song form                   |
//! | `play <id>`                | play a song                              |
//! | `pause`                    | pause or resume                          |
//! | `rm <id>`                  | remove a song                            |
//! | `rmpl <id>`                | remove a playlist                        |
//! | `newpl <name>`             | create a playlist from the marked songs  |
//! | `pl <playlist> <song>`     | add a song to a playlist, or remove it   |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the event was consumed by the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    if let Err(e) = run_command(&buffer, event_tx) {
                        tracing::error!(error = %e, "failed to dispatch command");
                    }
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    tracing::debug!(command = buffer, "running command");

    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        ["q"] => AppEvent::ExitApplication,

        ["songs"] => AppEvent::SetMainView(MainView::Songs),
        ["playlists"] => AppEvent::SetMainView(MainView::Playlists),

        ["add"] => AppEvent::OpenSongForm,

        ["pause"] => AppEvent::TogglePause,

        ["play", id] => with_id(id, AppEvent::PlaySong),
        ["rm", id] => with_id(id, AppEvent::RemoveSong),
        ["rmpl", id] => with_id(id, AppEvent::RemovePlaylist),

        ["newpl", name @ ..] if !name.is_empty() => AppEvent::CreatePlaylist(name.join(" ")),

        ["pl", playlist, song] => match (parse_id(playlist), parse_id(song)) {
            (Ok(playlist), Ok(song)) => AppEvent::TogglePlaylistSong(playlist, song),
            (Err(e), _) | (_, Err(e)) => AppEvent::Error(e),
        },

        [] => return Ok(()),

        [cmd, ..] => AppEvent::Error(format!("unknown command or arguments: {cmd}")),
    };

    event_tx.send(event)?;

    Ok(())
}

fn with_id(text: &str, event: impl FnOnce(u32) -> AppEvent) -> AppEvent {
    match parse_id(text) {
        Ok(id) => event(id),
        Err(e) => AppEvent::Error(e),
    }
}

fn parse_id(text: &str) -> Result<u32, String> {
    text.parse().map_err(|_| format!("'{text}' is not a valid id"))
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn run(buffer: &str) -> AppEvent {
        let (tx, rx) = mpsc::channel();
        run_command(buffer, &tx).unwrap();
        rx.try_recv().expect("command sends an event")
    }

    #[test]
    fn commands_map_to_events() {
        assert!(matches!(run("q"), AppEvent::ExitApplication));
        assert!(matches!(run("playlists"), AppEvent::SetMainView(MainView::Playlists)));
        assert!(matches!(run("add"), AppEvent::OpenSongForm));
        assert!(matches!(run("play 3"), AppEvent::PlaySong(3)));
        assert!(matches!(run("rm 4"), AppEvent::RemoveSong(4)));
        assert!(matches!(run("rmpl 5"), AppEvent::RemovePlaylist(5)));
        assert!(matches!(run("pl 1 7"), AppEvent::TogglePlaylistSong(1, 7)));
        assert!(matches!(run("pause"), AppEvent::TogglePause));
    }

    #[test]
    fn playlist_names_keep_their_spaces() {
        match run("newpl  Late   Night ") {
            AppEvent::CreatePlaylist(name) => assert_eq!(name, "Late Night"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn bad_arguments_become_errors() {
        assert!(matches!(run("play x"), AppEvent::Error(_)));
        assert!(matches!(run("pl 1 y"), AppEvent::Error(_)));
        assert!(matches!(run("newpl"), AppEvent::Error(_)));
        assert!(matches!(run("rm"), AppEvent::Error(_)));
        assert!(matches!(run("shuffle"), AppEvent::Error(_)));
    }

    #[test]
    fn colon_opens_and_enter_submits() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        commander.handle_event(&key(KeyCode::Char('q')), &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert!(!commander.active());
        assert!(commander.input.value().is_empty());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
