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

//! Thread-backed playback tick.
//!
//! Each tick stream runs on its own background thread that sleeps for the
//! configured period and then sends [`AppEvent::PlaybackTick`] over the
//! application event channel. Cancelling a stream raises its flag, the thread
//! notices on its next wake-up and exits without sending.
//!
//! A tick already sitting in the channel when its stream is cancelled still
//! arrives, the controller discards it because its token is no longer live.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

use crate::{
    events::AppEvent,
    player::{TickScheduler, TickToken},
};

pub(crate) struct ThreadTicker {
    event_tx: Sender<AppEvent>,
    next_token: u64,
    running: HashMap<TickToken, Arc<AtomicBool>>,
}

impl ThreadTicker {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self {
            event_tx,
            next_token: 0,
            running: HashMap::new(),
        }
    }
}

impl TickScheduler for ThreadTicker {
    fn start(&mut self, period: Duration) -> TickToken {
        self.next_token += 1;
        let token = TickToken(self.next_token);

        let cancelled = Arc::new(AtomicBool::new(false));
        self.running.insert(token, Arc::clone(&cancelled));

        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            loop {
                thread::sleep(period);
                if cancelled.load(Ordering::Acquire) {
                    break;
                }
                // The receiver is gone once the application is shutting down
                if event_tx.send(AppEvent::PlaybackTick(token)).is_err() {
                    break;
                }
            }
        });

        tracing::trace!(?token, ?period, "started playback tick");
        token
    }

    fn cancel(&mut self, token: TickToken) {
        if let Some(cancelled) = self.running.remove(&token) {
            cancelled.store(true, Ordering::Release);
            tracing::trace!(?token, "cancelled playback tick");
        }
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        for (_, cancelled) in self.running.drain() {
            cancelled.store(true, Ordering::Release);
        }
    }
}
