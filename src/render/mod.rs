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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event. The lists it shows are the ones last rebuilt by the
//! jukebox, drawing never touches the library.

mod commander;
mod header;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, header::draw_header, player::draw_player},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the view tabs, the active list, the now playing
/// panel and a single line shared by the command line and status messages.
/// The add-song form, when open, is drawn over everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let lists = app.jukebox.lists();
    match app.main_view {
        MainView::Songs => app.song_view.draw(
            f,
            outer[1],
            &lists.songs,
            app.jukebox.player().playing_song(),
            &app.theme,
        ),
        MainView::Playlists => app.playlist_view.draw(f, outer[1], &lists.playlists, &app.theme),
    }

    draw_player(f, outer[2], app);

    draw_commander(f, outer[3], app);

    if app.song_form.is_active {
        app.song_form.draw(f, area, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{config::AppConfig, model::sample::sample_library};

    fn app() -> App {
        let config = AppConfig {
            tick_millis: 60_000,
            ..AppConfig::default()
        };
        App::new(&config, sample_library())
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_the_song_list_and_idle_player() {
        let mut app = app();

        let text = screen(&mut app);

        assert!(text.contains("Songs | 7 songs"));
        assert!(text.contains("Thunderstruck"));
        assert!(text.contains("No song playing"));
    }

    #[test]
    fn draws_the_playlist_cards() {
        let mut app = app();
        app.main_view = MainView::Playlists;

        let text = screen(&mut app);

        assert!(text.contains("Israeli"));
        assert!(text.contains("25:36"));
    }

    #[test]
    fn draws_the_playing_song() {
        let mut app = app();
        app.jukebox.play(3).unwrap();

        let text = screen(&mut app);

        assert!(text.contains("Thunderstruck"));
        assert!(text.contains("AC/DC"));
        assert!(text.contains("04:52"));
    }

    #[test]
    fn draws_the_song_form_over_the_list() {
        let mut app = app();
        app.song_form.open();

        let text = screen(&mut app);

        assert!(text.contains("Add song"));
        assert!(text.contains("Duration"));
    }
}
