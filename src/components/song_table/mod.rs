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

//! Song list view state.
//!
//! Tracks the cursor over the rendered song rows and the set of marked songs
//! that a new playlist is built from. Marks keep the order in which songs were
//! marked.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    components::{clamp_selection, goto_next, goto_previous},
    model::{SongId, lists::SongRow},
};

pub(crate) struct SongTable {
    ids: Vec<SongId>,
    marked: Vec<SongId>,
    table_state: TableState,
}

impl SongTable {
    pub(crate) fn new() -> Self {
        Self {
            ids: vec![],
            marked: vec![],
            table_state: TableState::default(),
        }
    }

    /// Brings the view in line with freshly rendered rows.
    ///
    /// Marks on songs that are no longer listed are dropped.
    pub(crate) fn sync(&mut self, rows: &[SongRow]) {
        self.ids = rows.iter().map(|row| row.id).collect();
        self.marked.retain(|id| self.ids.contains(id));
        clamp_selection(&mut self.table_state, self.ids.len());
    }

    pub(crate) fn selected_id(&self) -> Option<SongId> {
        self.table_state
            .selected()
            .and_then(|i| self.ids.get(i))
            .copied()
    }

    pub(crate) fn marked(&self) -> &[SongId] {
        &self.marked
    }

    pub(crate) fn is_marked(&self, id: SongId) -> bool {
        self.marked.contains(&id)
    }

    pub(crate) fn clear_marks(&mut self) {
        self.marked.clear();
    }

    fn goto_next(&mut self) {
        goto_next(&mut self.table_state, self.ids.len());
    }

    fn goto_previous(&mut self) {
        goto_previous(&mut self.table_state, self.ids.len());
    }

    fn goto_first(&mut self) {
        if !self.ids.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.ids.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    fn toggle_mark_current(&mut self) {
        if let Some(id) = self.selected_id() {
            match self.marked.iter().position(|&m| m == id) {
                Some(index) => {
                    self.marked.remove(index);
                }
                None => self.marked.push(id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        library::{Library, tests::song},
        lists::render_lists,
    };

    fn rows(ids: &[SongId]) -> Vec<SongRow> {
        let songs = ids.iter().map(|&id| song(id, &format!("Song {id:02}"), 60)).collect();
        render_lists(&mut Library::from_parts(songs, vec![])).songs
    }

    #[test]
    fn sync_selects_the_first_row() {
        let mut table = SongTable::new();
        assert_eq!(table.selected_id(), None);

        table.sync(&rows(&[1, 2, 3]));

        assert_eq!(table.selected_id(), Some(1));
    }

    #[test]
    fn marks_toggle_in_marking_order() {
        let mut table = SongTable::new();
        table.sync(&rows(&[1, 2, 3]));

        table.goto_last();
        table.toggle_mark_current();
        table.goto_first();
        table.toggle_mark_current();
        assert_eq!(table.marked(), &[3, 1]);

        table.toggle_mark_current();
        assert_eq!(table.marked(), &[3]);
    }

    #[test]
    fn sync_drops_marks_on_removed_songs() {
        let mut table = SongTable::new();
        table.sync(&rows(&[1, 2, 3]));
        table.goto_next();
        table.toggle_mark_current();
        assert!(table.is_marked(2));

        table.sync(&rows(&[1, 3]));

        assert!(table.marked().is_empty());
        assert_eq!(table.selected_id(), Some(3));
    }
}
