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

//! Popup rendering for the add-song form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::{
        SongFormView,
        song_form::{FIELD_COUNT, LABELS},
    },
    render::Render,
    theme::Theme,
};

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = FIELD_COUNT as u16 + 4;
const LABEL_WIDTH: u16 = 11;

impl Render for SongFormView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centred(area, POPUP_WIDTH, POPUP_HEIGHT);

        let block = Block::default()
            .title(" Add song ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(popup);
        f.render_widget(Clear, popup);
        f.render_widget(block, popup);

        let mut constraints = vec![Constraint::Length(1); FIELD_COUNT];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (field, (label, input)) in LABELS.iter().zip(&self.inputs).enumerate() {
            let label_style = if field == self.focus {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_colour)
            };

            let line = Line::from(vec![
                Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH as usize), label_style),
                Span::raw(input.value()),
            ]);
            f.render_widget(Paragraph::new(line), chunks[field]);
        }

        let hint = Paragraph::new("Duration as mm:ss. Tab: next, Enter: save, Esc: cancel")
            .style(Style::default().fg(theme.muted_colour));
        f.render_widget(hint, chunks[FIELD_COUNT + 1]);

        let field_area = chunks[self.focus];
        let cursor_x = field_area.x + LABEL_WIDTH + self.inputs[self.focus].cursor() as u16;
        f.set_cursor_position((cursor_x.min(field_area.right().saturating_sub(1)), field_area.y));
    }
}

/// A rectangle of at most the given size centred in `area`.
fn centred(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centred_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centred(area, 60, 10), Rect::new(20, 15, 60, 10));

        let small = Rect::new(2, 1, 30, 5);
        assert_eq!(centred(small, 60, 10), small);
    }
}
