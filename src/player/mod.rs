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

//! Simulated playback control and state management.
//!
//! This module provides the [`PlaybackController`], a small state machine
//! that tracks the song currently playing and how many seconds of it have
//! elapsed. Nothing is decoded or played, a repeating tick advances the
//! elapsed time and moves on to the next song when the current one ends.
//!
//! # Ticks
//!
//! Ticks come from a [`TickScheduler`]. Every started tick stream is
//! identified by a [`TickToken`], and the controller only acts on ticks
//! carrying its live token. Starting playback always cancels the previous
//! stream first, so a tick that was already queued when a song was replaced
//! or removed is discarded rather than applied to the wrong song.

pub(crate) mod ticker;

use std::time::Duration;

use crate::{
    error::LibraryError,
    model::{PlaylistId, Song, SongId, library::Library},
    util::format::format_time,
};

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Identifies one stream of ticks started by a [`TickScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TickToken(pub(crate) u64);

/// Source of the repeating playback tick.
pub(crate) trait TickScheduler {
    /// Starts delivering ticks every `period` until cancelled.
    fn start(&mut self, period: Duration) -> TickToken;

    /// Stops a tick stream. Cancelling an unknown token does nothing.
    fn cancel(&mut self, token: TickToken);
}

/// Completed and remaining shares of the current song, in percent.
///
/// The two always add up to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Progress {
    pub(crate) completed: u16,
    pub(crate) remaining: u16,
}

impl Progress {
    fn new(elapsed: u32, duration: u32) -> Self {
        let completed = if duration == 0 {
            0
        } else {
            (u64::from(elapsed.min(duration)) * 100 / u64::from(duration)) as u16
        };

        Self {
            completed,
            remaining: 100 - completed,
        }
    }

    pub(crate) fn ratio(&self) -> f64 {
        f64::from(self.completed) / 100.0
    }
}

/// The now playing fields shown to the user.
///
/// The default value is the placeholder shown while nothing is playing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NowPlaying {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) cover_art: String,
    pub(crate) duration: u32,
    pub(crate) total_time: String,
    pub(crate) elapsed_time: String,
    pub(crate) progress: Progress,
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self {
            title: "No song playing".to_string(),
            artist: "-".to_string(),
            album: "-".to_string(),
            cover_art: "./images/no-song.png".to_string(),
            duration: 0,
            total_time: format_time(0),
            elapsed_time: format_time(0),
            progress: Progress::new(0, 0),
        }
    }
}

impl NowPlaying {
    fn for_song(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            cover_art: song.cover_art.clone(),
            duration: song.duration,
            total_time: format_time(song.duration),
            elapsed_time: format_time(0),
            progress: Progress::new(0, song.duration),
        }
    }

    fn set_elapsed(&mut self, elapsed: u32) {
        self.elapsed_time = format_time(elapsed);
        self.progress = Progress::new(elapsed, self.duration);
    }
}

/// What a call to [`PlaybackController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// The tick was stale, or playback was not running.
    Ignored,
    /// Elapsed time moved forward by one second.
    Progressed,
    /// The song ended and the next one started.
    Advanced(SongId),
    /// The last song ended and playback stopped.
    Finished,
}

pub(crate) struct PlaybackController {
    scheduler: Box<dyn TickScheduler>,
    period: Duration,
    state: PlayerState,
    song_id: Option<SongId>,
    elapsed: u32,
    token: Option<TickToken>,
    now_playing: NowPlaying,
}

impl PlaybackController {
    pub(crate) fn new(scheduler: Box<dyn TickScheduler>, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            state: PlayerState::Stopped,
            song_id: None,
            elapsed: 0,
            token: None,
            now_playing: NowPlaying::default(),
        }
    }

    pub(crate) fn state(&self) -> PlayerState {
        self.state
    }

    pub(crate) fn playing_song(&self) -> Option<SongId> {
        self.song_id
    }

    #[cfg(test)]
    pub(crate) fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub(crate) fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub(crate) fn progress(&self) -> Progress {
        self.now_playing.progress
    }

    /// Starts playing a song from the beginning.
    ///
    /// Any running tick is cancelled before the new one starts.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::NotFound`] if the song does not exist, in which
    /// case the current playback is left untouched.
    pub(crate) fn play(&mut self, library: &Library, id: SongId) -> Result<(), LibraryError> {
        let song = library.find_song(id)?;

        self.cancel_tick();

        self.song_id = Some(id);
        self.elapsed = 0;
        self.now_playing = NowPlaying::for_song(song);
        self.state = PlayerState::Playing;
        self.token = Some(self.scheduler.start(self.period));

        tracing::info!(id, title = %song.title, "playing song");
        Ok(())
    }

    /// Plays the first song of a playlist.
    pub(crate) fn play_playlist(
        &mut self,
        library: &Library,
        id: PlaylistId,
    ) -> Result<(), LibraryError> {
        let first = library
            .find_playlist(id)?
            .songs
            .first()
            .copied()
            .ok_or_else(|| LibraryError::validation("playlist", format!("{id} has no songs")))?;

        self.play(library, first)
    }

    /// Applies one tick of the given stream.
    ///
    /// When the next tick would complete the song, playback moves straight to
    /// the song after it in library order, or stops if there is none.
    pub(crate) fn tick(&mut self, library: &Library, token: TickToken) -> TickOutcome {
        if self.token != Some(token) || self.state != PlayerState::Playing {
            tracing::trace!(?token, "ignoring stale tick");
            return TickOutcome::Ignored;
        }

        let Some(id) = self.song_id else {
            return TickOutcome::Ignored;
        };

        let duration = match library.find_song(id) {
            Ok(song) => song.duration,
            Err(_) => {
                tracing::warn!(id, "playing song vanished from the library");
                self.stop();
                return TickOutcome::Finished;
            }
        };

        if self.elapsed >= duration.saturating_sub(1) {
            return self.advance(library, id);
        }

        self.elapsed += 1;
        self.now_playing.set_elapsed(self.elapsed);

        TickOutcome::Progressed
    }

    fn advance(&mut self, library: &Library, current: SongId) -> TickOutcome {
        // play cannot fail here, next_song_after only yields ids in the library
        if let Some(next) = library.next_song_after(current) {
            if self.play(library, next).is_ok() {
                return TickOutcome::Advanced(next);
            }
        }

        tracing::info!(id = current, "reached the end of the library");
        self.stop();
        TickOutcome::Finished
    }

    /// Stops the tick without resetting elapsed time or displayed fields.
    pub(crate) fn pause(&mut self) {
        if self.state == PlayerState::Playing {
            self.cancel_tick();
            self.state = PlayerState::Paused;
            tracing::debug!(elapsed = self.elapsed, "paused");
        }
    }

    /// Restarts the tick from the current elapsed time.
    pub(crate) fn resume(&mut self) {
        if self.state == PlayerState::Paused {
            self.token = Some(self.scheduler.start(self.period));
            self.state = PlayerState::Playing;
            tracing::debug!(elapsed = self.elapsed, "resumed");
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        match self.state {
            PlayerState::Playing => self.pause(),
            PlayerState::Paused => self.resume(),
            PlayerState::Stopped => {}
        }
    }

    /// Cancels the tick and resets everything to the placeholder state.
    pub(crate) fn stop(&mut self) {
        self.cancel_tick();
        self.state = PlayerState::Stopped;
        self.song_id = None;
        self.elapsed = 0;
        self.now_playing = NowPlaying::default();
    }

    fn cancel_tick(&mut self) {
        if let Some(token) = self.token.take() {
            self.scheduler.cancel(token);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::model::library::tests::{playlist, song};

    #[derive(Default)]
    pub(crate) struct SchedulerLog {
        pub(crate) started: Vec<TickToken>,
        pub(crate) cancelled: Vec<TickToken>,
    }

    impl SchedulerLog {
        pub(crate) fn live(&self) -> Vec<TickToken> {
            self.started
                .iter()
                .filter(|t| !self.cancelled.contains(t))
                .copied()
                .collect()
        }
    }

    /// Records tick streams instead of running them.
    pub(crate) struct FakeScheduler {
        log: Rc<RefCell<SchedulerLog>>,
        next: u64,
    }

    impl FakeScheduler {
        pub(crate) fn new() -> (Self, Rc<RefCell<SchedulerLog>>) {
            let log = Rc::new(RefCell::new(SchedulerLog::default()));
            (Self { log: Rc::clone(&log), next: 0 }, log)
        }
    }

    impl TickScheduler for FakeScheduler {
        fn start(&mut self, _period: Duration) -> TickToken {
            self.next += 1;
            let token = TickToken(self.next);
            self.log.borrow_mut().started.push(token);
            token
        }

        fn cancel(&mut self, token: TickToken) {
            self.log.borrow_mut().cancelled.push(token);
        }
    }

    fn controller() -> (PlaybackController, Rc<RefCell<SchedulerLog>>) {
        let (scheduler, log) = FakeScheduler::new();
        (PlaybackController::new(Box::new(scheduler), Duration::from_secs(1)), log)
    }

    fn live_token(log: &Rc<RefCell<SchedulerLog>>) -> TickToken {
        let live = log.borrow().live();
        assert_eq!(live.len(), 1, "expected exactly one live tick stream");
        live[0]
    }

    fn library() -> Library {
        Library::from_parts(
            vec![song(1, "Short", 3), song(2, "Next", 100), song(3, "Last", 2)],
            vec![playlist(1, "Mix", &[3, 1])],
        )
    }

    #[test]
    fn starts_idle_with_placeholder_fields() {
        let (player, log) = controller();

        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.playing_song(), None);
        assert_eq!(player.now_playing(), &NowPlaying::default());
        assert!(log.borrow().started.is_empty());
    }

    #[test]
    fn play_updates_fields_and_starts_a_tick() {
        let library = library();
        let (mut player, log) = controller();

        player.play(&library, 2).unwrap();

        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.playing_song(), Some(2));
        assert_eq!(player.elapsed(), 0);
        assert_eq!(player.now_playing().title, "Next");
        assert_eq!(player.now_playing().total_time, "01:40");
        assert_eq!(player.now_playing().elapsed_time, "00:00");
        assert_eq!(log.borrow().started.len(), 1);
    }

    #[test]
    fn play_unknown_song_fails_and_keeps_current_playback() {
        let library = library();
        let (mut player, log) = controller();
        player.play(&library, 2).unwrap();

        assert_eq!(player.play(&library, 9), Err(LibraryError::song_not_found(9)));

        assert_eq!(player.playing_song(), Some(2));
        assert!(log.borrow().cancelled.is_empty());
    }

    #[test]
    fn play_cancels_the_previous_tick_first() {
        let library = library();
        let (mut player, log) = controller();

        player.play(&library, 2).unwrap();
        let first = live_token(&log);
        player.play(&library, 1).unwrap();

        assert_eq!(log.borrow().cancelled, vec![first]);
        assert_eq!(log.borrow().live().len(), 1);
        assert_eq!(player.tick(&library, first), TickOutcome::Ignored);
    }

    #[test]
    fn ticks_advance_elapsed_and_progress() {
        let library = library();
        let (mut player, log) = controller();
        player.play(&library, 2).unwrap();
        let token = live_token(&log);

        for _ in 0..25 {
            assert_eq!(player.tick(&library, token), TickOutcome::Progressed);
        }

        assert_eq!(player.elapsed(), 25);
        assert_eq!(player.now_playing().elapsed_time, "00:25");
        assert_eq!(
            player.now_playing().progress,
            Progress { completed: 25, remaining: 75 }
        );
    }

    #[test]
    fn song_of_three_seconds_advances_after_three_ticks() {
        let library = library();
        let (mut player, log) = controller();
        player.play(&library, 1).unwrap();
        let token = live_token(&log);

        assert_eq!(player.tick(&library, token), TickOutcome::Progressed);
        assert_eq!(player.tick(&library, token), TickOutcome::Progressed);
        assert!(player.elapsed() <= 3);
        assert_eq!(player.tick(&library, token), TickOutcome::Advanced(2));

        assert_eq!(player.playing_song(), Some(2));
        assert_eq!(player.elapsed(), 0);
        assert_eq!(player.now_playing().title, "Next");
        assert!(log.borrow().cancelled.contains(&token));
    }

    #[test]
    fn finishing_the_last_song_stops_playback() {
        let library = library();
        let (mut player, log) = controller();
        player.play(&library, 3).unwrap();
        let token = live_token(&log);

        assert_eq!(player.tick(&library, token), TickOutcome::Progressed);
        assert_eq!(player.tick(&library, token), TickOutcome::Finished);

        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.now_playing(), &NowPlaying::default());
        assert!(log.borrow().live().is_empty());
    }

    #[test]
    fn zero_length_song_advances_on_first_tick() {
        let library = Library::from_parts(vec![song(1, "Silence", 0), song(2, "After", 10)], vec![]);
        let (mut player, log) = controller();
        player.play(&library, 1).unwrap();

        assert_eq!(player.now_playing().progress, Progress { completed: 0, remaining: 100 });
        assert_eq!(player.tick(&library, live_token(&log)), TickOutcome::Advanced(2));
    }

    #[test]
    fn pause_and_resume_keep_elapsed_time() {
        let library = library();
        let (mut player, log) = controller();
        player.play(&library, 2).unwrap();
        let token = live_token(&log);
        player.tick(&library, token);
        player.tick(&library, token);

        player.pause();
        assert_eq!(player.state(), PlayerState::Paused);
        assert!(log.borrow().live().is_empty());
        assert_eq!(player.tick(&library, token), TickOutcome::Ignored);
        assert_eq!(player.elapsed(), 2);
        assert_eq!(player.now_playing().title, "Next");

        player.resume();
        assert_eq!(player.state(), PlayerState::Playing);
        let resumed = live_token(&log);
        assert_ne!(resumed, token);
        assert_eq!(player.tick(&library, resumed), TickOutcome::Progressed);
        assert_eq!(player.elapsed(), 3);
    }

    #[test]
    fn toggle_pause_does_nothing_when_stopped() {
        let (mut player, log) = controller();

        player.toggle_pause();

        assert_eq!(player.state(), PlayerState::Stopped);
        assert!(log.borrow().started.is_empty());
    }

    #[test]
    fn stop_resets_to_placeholder() {
        let library = library();
        let (mut player, log) = controller();
        player.play(&library, 2).unwrap();
        let token = live_token(&log);
        player.tick(&library, token);

        player.stop();

        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.playing_song(), None);
        assert_eq!(player.elapsed(), 0);
        assert_eq!(player.now_playing(), &NowPlaying::default());
        assert!(log.borrow().live().is_empty());
        assert_eq!(player.tick(&library, token), TickOutcome::Ignored);
    }

    #[test]
    fn play_playlist_starts_with_its_first_song() {
        let library = library();
        let (mut player, _log) = controller();

        player.play_playlist(&library, 1).unwrap();

        assert_eq!(player.playing_song(), Some(3));
        assert_eq!(player.play_playlist(&library, 7), Err(LibraryError::playlist_not_found(7)));
    }

    #[test]
    fn progress_always_sums_to_one_hundred() {
        for (elapsed, duration) in [(0, 0), (0, 7), (1, 3), (2, 3), (99, 100), (5, 5)] {
            let progress = Progress::new(elapsed, duration);
            assert_eq!(progress.completed + progress.remaining, 100);
        }
    }
}
