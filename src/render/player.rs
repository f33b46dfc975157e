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

//! Render the now playing panel.
//!
//! This module renders the visual representation of the current song, its
//! cover art reference, elapsed and total time, and the progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
};

/// Renders the now playing widget.
///
/// When nothing is playing the placeholder fields are shown instead.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let player = app.jukebox.player();
    let now_playing = player.now_playing();
    let accent = Style::default()
        .add_modifier(Modifier::BOLD)
        .fg(app.theme.accent_colour);

    let icon = match player.state() {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let song_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(now_playing.title.as_str(), accent),
        Span::raw(" from "),
        Span::styled(now_playing.album.as_str(), accent),
        Span::raw(" by "),
        Span::styled(now_playing.artist.as_str(), accent),
    ]);
    f.render_widget(Paragraph::new(song_line), info_chunks[0]);

    let time_line = Line::from(vec![
        Span::styled(now_playing.elapsed_time.as_str(), accent),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(now_playing.total_time.as_str(), accent),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);

    let cover_line = Line::from(vec![
        Span::raw("   Cover "),
        Span::raw(now_playing.cover_art.as_str()),
    ])
    .fg(app.theme.muted_colour);
    f.render_widget(Paragraph::new(cover_line), chunks[1]);

    let progress = player.progress();

    let progress_label = Paragraph::new(format!(
        "{}% played, {}% left",
        progress.completed, progress.remaining
    ))
    .alignment(Alignment::Right)
    .fg(app.theme.muted_colour);
    f.render_widget(progress_label, chunks[3]);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(progress.ratio())
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[5]);
}
