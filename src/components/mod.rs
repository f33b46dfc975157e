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

//! Interactive views.
//!
//! Each component keeps its own transient UI state (cursor position, marks,
//! field contents) and turns key presses into [`crate::events::AppEvent`]s.
//! None of them own library data, the list views are re-synced with the
//! rendered lists after every event.

mod playlist_table;
mod song_form;
mod song_table;

pub(crate) use playlist_table::PlaylistTable;
pub(crate) use song_form::SongFormView;
pub(crate) use song_table::SongTable;

use ratatui::widgets::TableState;

/// Moves a table cursor one row down, wrapping at the end.
fn goto_next(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    };
    state.select(Some(i));
}

/// Moves a table cursor one row up, wrapping at the start.
fn goto_previous(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    };
    state.select(Some(i));
}

/// Keeps the cursor on a valid row after the rows have been rebuilt.
fn clamp_selection(state: &mut TableState, len: usize) {
    let selected = match (state.selected(), len) {
        (_, 0) => None,
        (None, _) => Some(0),
        (Some(i), len) => Some(i.min(len - 1)),
    };
    state.select(selected);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = TableState::default();
        state.select(Some(2));

        goto_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));

        goto_previous(&mut state, 3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn cursor_ignores_empty_tables() {
        let mut state = TableState::default();
        goto_next(&mut state, 0);
        goto_previous(&mut state, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn selection_is_clamped_to_the_rows() {
        let mut state = TableState::default();

        clamp_selection(&mut state, 4);
        assert_eq!(state.selected(), Some(0));

        state.select(Some(3));
        clamp_selection(&mut state, 2);
        assert_eq!(state.selected(), Some(1));

        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
