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

//! Library error kinds.
//!
//! Every library operation reports failure synchronously with one of these
//! variants, and a failed operation never leaves a partial mutation behind.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LibraryError {
    /// A required field was empty, or an id was not a usable number.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// A lookup by id found nothing.
    #[error("no {kind} found with id {id}")]
    NotFound { kind: &'static str, id: u32 },

    /// Duration text was not in `mm:ss` form.
    #[error("invalid duration '{0}', expected mm:ss")]
    Format(String),
}

impl LibraryError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn song_not_found(id: u32) -> Self {
        Self::NotFound { kind: "song", id }
    }

    pub(crate) fn playlist_not_found(id: u32) -> Self {
        Self::NotFound {
            kind: "playlist",
            id,
        }
    }
}
