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

//! UI rendering logic for the playlist cards.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{components::PlaylistTable, model::lists::PlaylistCard, theme::Theme};

impl PlaylistTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, cards: &[PlaylistCard], theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("Playlists | {} playlists", cards.len())).block(header_block);
        f.render_widget(header, chunks[0]);

        let rows = cards.iter().map(|card| {
            Row::new(vec![
                Cell::from(Line::from(card.name.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(
                    Line::from(format!("{} songs", card.song_count))
                        .style(Style::default().fg(theme.table_count_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(card.duration.as_str())
                        .style(Style::default().fg(theme.table_artist_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(card.cover_art.as_str()).style(Style::default().fg(theme.muted_colour))),
                Cell::from(Line::from(card.id.to_string()).style(Style::default().fg(theme.muted_colour)).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Length(10),
                Constraint::Length(8),
                Constraint::Length(1),
                Constraint::Percentage(60),
                Constraint::Length(4),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Name"),
                Cell::from(Line::from("Songs").alignment(Alignment::Right)),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Cover"),
                Cell::from(Line::from("Id").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}
