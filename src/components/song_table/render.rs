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

//! UI rendering logic for the song list.
//!
//! Rows are drawn as given, in title order, with every other row striped and
//! the duration tinted by length.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::SongTable,
    model::{SongId, lists::SongRow},
    render::icons::ICON_PLAY,
    theme::Theme,
};

impl SongTable {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        rows: &[SongRow],
        playing: Option<SongId>,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format!("Songs | {} songs", rows.len());
        if !self.marked().is_empty() {
            let _ = write!(header_text, " | {} marked", self.marked().len());
        }

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        self.draw_table(f, chunks[1], rows, playing, theme);
    }

    fn draw_table(
        &mut self,
        f: &mut Frame,
        area: Rect,
        rows: &[SongRow],
        playing: Option<SongId>,
        theme: &Theme,
    ) {
        let table_rows = rows.iter().map(|row| {
            let indicator = if playing == Some(row.id) {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
            } else if self.is_marked(row.id) {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.marked_fg))
            } else {
                Line::from("")
            };

            let row_style = if row.striped {
                Style::default().bg(theme.stripe_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(indicator),
                Cell::from(
                    Line::from(row.duration.as_str())
                        .style(Style::default().fg(row.duration_colour))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(row.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(row.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(row.album.as_str()).style(Style::default().fg(theme.table_album_fg))),
                Cell::from(Line::from(row.id.to_string()).style(Style::default().fg(theme.muted_colour)).alignment(Alignment::Right)),
            ])
            .style(row_style)
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(1),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Length(4),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Album"),
                Cell::from(Line::from("Id").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
