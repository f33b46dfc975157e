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

use crate::error::LibraryError;

/// Formats a duration in seconds into a zero-padded `MM:SS` string.
///
/// The minutes component is not capped at 59, so long durations such as a
/// whole playlist still format as minutes and seconds.
///
/// # Examples
///
/// ```
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3600), "60:00");
/// ```
pub(crate) fn format_time(total_seconds: u32) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Parses `MM:SS` text into a number of seconds.
///
/// Minutes have at least two digits, with no leading zero beyond the padding
/// to two, so that the text is exactly what [`format_time`] would produce.
/// Seconds must be exactly two digits in the range `00` to `59`.
///
/// # Errors
///
/// Returns [`LibraryError::Format`] if the text is not two digit groups
/// separated by a single `:`, if the minutes are short or over-padded, if
/// the seconds are out of range, or if the result does not fit in a `u32`.
pub(crate) fn parse_time(text: &str) -> Result<u32, LibraryError> {
    let format_error = || LibraryError::Format(text.to_string());

    let (mins, secs) = text.trim().split_once(':').ok_or_else(format_error)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(mins) || !all_digits(secs) || secs.len() != 2 {
        return Err(format_error());
    }
    if mins.len() < 2 || (mins.len() > 2 && mins.starts_with('0')) {
        return Err(format_error());
    }

    let mins: u32 = mins.parse().map_err(|_| format_error())?;
    let secs: u32 = secs.parse().map_err(|_| format_error())?;
    if secs > 59 {
        return Err(format_error());
    }

    mins.checked_mul(60)
        .and_then(|s| s.checked_add(secs))
        .ok_or_else(format_error)
}
