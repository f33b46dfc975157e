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

//! Playlist list view state.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    components::{clamp_selection, goto_next, goto_previous},
    model::{PlaylistId, lists::PlaylistCard},
};

pub(crate) struct PlaylistTable {
    ids: Vec<PlaylistId>,
    table_state: TableState,
}

impl PlaylistTable {
    pub(crate) fn new() -> Self {
        Self {
            ids: vec![],
            table_state: TableState::default(),
        }
    }

    pub(crate) fn sync(&mut self, cards: &[PlaylistCard]) {
        self.ids = cards.iter().map(|card| card.id).collect();
        clamp_selection(&mut self.table_state, self.ids.len());
    }

    pub(crate) fn selected_id(&self) -> Option<PlaylistId> {
        self.table_state
            .selected()
            .and_then(|i| self.ids.get(i))
            .copied()
    }

    fn goto_next(&mut self) {
        goto_next(&mut self.table_state, self.ids.len());
    }

    fn goto_previous(&mut self) {
        goto_previous(&mut self.table_state, self.ids.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        library::{
            Library,
            tests::{playlist, song},
        },
        lists::render_lists,
    };

    #[test]
    fn selection_follows_removed_cards() {
        let mut library = Library::from_parts(
            vec![song(1, "A", 60)],
            vec![playlist(1, "Alpha", &[1]), playlist(2, "Beta", &[1])],
        );
        let mut table = PlaylistTable::new();
        table.sync(&render_lists(&mut library).playlists);

        table.goto_next();
        assert_eq!(table.selected_id(), Some(2));

        library.remove_playlist(2).unwrap();
        table.sync(&render_lists(&mut library).playlists);
        assert_eq!(table.selected_id(), Some(1));

        library.remove_playlist(1).unwrap();
        table.sync(&render_lists(&mut library).playlists);
        assert_eq!(table.selected_id(), None);
    }
}
