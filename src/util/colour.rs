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

//! Duration colour scale.
//!
//! Song durations are tinted on a linear scale from green (short) to red
//! (long). Anything at or below [`SHORTEST`] is fully green, anything at or
//! above [`LONGEST`] is fully red.

use ratatui::style::Color;

pub(crate) const SHORTEST: u32 = 120;
pub(crate) const LONGEST: u32 = 420;

const SHORT_COLOUR: (u8, u8, u8) = (80, 220, 100);
const LONG_COLOUR: (u8, u8, u8) = (230, 70, 70);

/// Returns the display colour for a song of the given duration in seconds.
pub(crate) fn duration_colour(seconds: u32) -> Color {
    let clamped = seconds.clamp(SHORTEST, LONGEST);
    let t = (clamped - SHORTEST) as f64 / (LONGEST - SHORTEST) as f64;

    let lerp = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;

    Color::Rgb(
        lerp(SHORT_COLOUR.0, LONG_COLOUR.0),
        lerp(SHORT_COLOUR.1, LONG_COLOUR.1),
        lerp(SHORT_COLOUR.2, LONG_COLOUR.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(colour: Color) -> (u8, u8, u8) {
        match colour {
            Color::Rgb(r, g, b) => (r, g, b),
            other => panic!("expected an RGB colour, got {other:?}"),
        }
    }

    #[test]
    fn scale_is_clamped_at_both_ends() {
        assert_eq!(rgb(duration_colour(0)), SHORT_COLOUR);
        assert_eq!(rgb(duration_colour(SHORTEST)), SHORT_COLOUR);
        assert_eq!(rgb(duration_colour(LONGEST)), LONG_COLOUR);
        assert_eq!(rgb(duration_colour(10_000)), LONG_COLOUR);
    }

    #[test]
    fn shorter_songs_are_greener() {
        let (short_r, short_g, _) = rgb(duration_colour(150));
        let (long_r, long_g, _) = rgb(duration_colour(390));
        assert!(short_g > long_g);
        assert!(short_r < long_r);
    }
}
