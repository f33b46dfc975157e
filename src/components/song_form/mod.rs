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

//! Add-song form.
//!
//! A modal set of text inputs, one per song field. Submitting sends the raw
//! text on as [`crate::events::AppEvent::AddSong`]; the form stays open until
//! the song has actually been added, so rejected input can be corrected.

mod event;
mod render;

use tui_input::Input;

use crate::jukebox::SongForm;

const FIELD_COUNT: usize = 6;

const LABELS: [&str; FIELD_COUNT] = ["Title", "Artist", "Album", "Duration", "Cover art", "Id"];

const TITLE: usize = 0;
const ARTIST: usize = 1;
const ALBUM: usize = 2;
const DURATION: usize = 3;
const COVER_ART: usize = 4;
const ID: usize = 5;

pub(crate) struct SongFormView {
    pub(crate) is_active: bool,
    inputs: [Input; FIELD_COUNT],
    focus: usize,
}

impl SongFormView {
    pub(crate) fn new() -> Self {
        Self {
            is_active: false,
            inputs: Default::default(),
            focus: TITLE,
        }
    }

    /// Opens the form with every field empty.
    pub(crate) fn open(&mut self) {
        self.inputs.iter_mut().for_each(Input::reset);
        self.focus = TITLE;
        self.is_active = true;
    }

    pub(crate) fn close(&mut self) {
        self.is_active = false;
        self.inputs.iter_mut().for_each(Input::reset);
    }

    pub(crate) fn to_form(&self) -> SongForm {
        let value = |field: usize| self.inputs[field].value().to_string();

        SongForm {
            title: value(TITLE),
            artist: value(ARTIST),
            album: value(ALBUM),
            duration: value(DURATION),
            cover_art: value(COVER_ART),
            id: value(ID),
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    fn focus_previous(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_form_maps_every_field() {
        let mut view = SongFormView::new();
        view.open();
        for (field, text) in ["t", "ar", "al", "01:00", "c.jpg", "9"].into_iter().enumerate() {
            view.inputs[field] = Input::new(text.to_string());
        }

        assert_eq!(
            view.to_form(),
            SongForm {
                title: "t".to_string(),
                artist: "ar".to_string(),
                album: "al".to_string(),
                duration: "01:00".to_string(),
                cover_art: "c.jpg".to_string(),
                id: "9".to_string(),
            }
        );
    }

    #[test]
    fn focus_wraps_around() {
        let mut view = SongFormView::new();

        view.focus_previous();
        assert_eq!(view.focus, ID);

        view.focus_next();
        assert_eq!(view.focus, TITLE);
    }

    #[test]
    fn reopening_clears_previous_input() {
        let mut view = SongFormView::new();
        view.open();
        view.inputs[TITLE] = Input::new("left over".to_string());
        view.focus_next();

        view.close();
        view.open();

        assert!(view.to_form().title.is_empty());
        assert_eq!(view.focus, TITLE);
    }
}
