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

//! Render the command-line and status line.
//!
//! The bottom line of the screen shows the command being typed while the
//! command line is open, otherwise the latest status message, otherwise a
//! short key reference.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINT: &str = "Enter play | Space mark | d remove | p pause | a add | : command | q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line_style = Style::default().bg(app.theme.gauge_track_colour);

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value()))
                .style(line_style.fg(app.theme.accent_colour)),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let paragraph = match &app.status {
        Some(status) if status.is_error => {
            Paragraph::new(status.text.as_str()).style(line_style.fg(app.theme.error_colour))
        }
        Some(status) => Paragraph::new(status.text.as_str()).style(line_style.fg(app.theme.accent_colour)),
        None => Paragraph::new(KEY_HINT).style(line_style.fg(app.theme.muted_colour)),
    };

    f.render_widget(paragraph, container[0]);
}
