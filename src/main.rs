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

//! # Mixtape.
//!
//! A terminal-based music library with simulated playback.
//!
//! Songs and playlists live in memory. The user browses them as two lists,
//! plays songs (a one-second tick stands in for audio), adds songs through a
//! form and manages playlists from the keyboard or the command line.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all state, handles events one at a time and
//!   renders the UI.
//! * An **Input Thread** forwards key presses.
//! * **Tick Threads** send the UI tick and the playback tick.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Every thread
//! talks to the main thread through a single `std::sync::mpsc` channel.

mod commander;
mod components;
mod config;
mod error;
mod events;
mod jukebox;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::{Duration, Instant},
};

use crate::{
    commander::Commander,
    components::{PlaylistTable, SongFormView, SongTable},
    config::AppConfig,
    events::{AppEvent, process_events},
    jukebox::Jukebox,
    model::{library::Library, sample::sample_library},
    player::{PlaybackController, ticker::ThreadTicker},
    theme::Theme,
};

const UI_TICK: Duration = Duration::from_millis(250);
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainView {
    Songs,
    Playlists,
}

impl MainView {
    fn other(self) -> Self {
        match self {
            MainView::Songs => MainView::Playlists,
            MainView::Playlists => MainView::Songs,
        }
    }
}

/// A message shown on the bottom line until it expires.
struct StatusMessage {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::info(text)
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= STATUS_TIMEOUT
    }
}

/// Application state.
struct App {
    theme: Theme,
    main_view: MainView,

    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,

    jukebox: Jukebox,

    song_view: SongTable,
    playlist_view: PlaylistTable,
    song_form: SongFormView,

    commander: Commander,
    status: Option<StatusMessage>,
}

impl App {
    /// Create a new instance of application state.
    fn new(config: &AppConfig, library: Library) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let ticker = ThreadTicker::new(event_tx.clone());
        let player = PlaybackController::new(Box::new(ticker), config.tick_period());

        let mut app = Self {
            theme: Theme::default(),
            main_view: MainView::Songs,
            event_tx,
            event_rx,
            jukebox: Jukebox::new(library, player),
            song_view: SongTable::new(),
            playlist_view: PlaylistTable::new(),
            song_form: SongFormView::new(),
            commander: Commander::new(),
            status: None,
        };
        app.sync_views();
        app
    }

    /// Brings the list views in line with the last rendered lists.
    fn sync_views(&mut self) {
        let lists = self.jukebox.lists();
        self.song_view.sync(&lists.songs);
        self.playlist_view.sync(&lists.playlists);
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Flushes the log file when dropped at the end of main
    let _log_guard = logging::init_logging(&config.log_filter)?;

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "failed to load configuration, using defaults");
    }
    tracing::info!(?config, "starting");

    let library = if config.load_sample_library {
        sample_library()
    } else {
        Library::new()
    };

    let mut app = App::new(&config, library);
    tracing::info!(
        songs = app.jukebox.library().songs().len(),
        playlists = app.jukebox.library().playlists().len(),
        "library loaded"
    );

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!(error = ?e, "application error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).context("Failed to set background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::Error(format!("Input error: {e}")));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(UI_TICK);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
