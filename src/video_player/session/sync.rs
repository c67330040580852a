// SPDX-License-Identifier: MPL-2.0
//! Periodic time sync between the engine and the transport display.

use super::PlaybackSession;
use crate::video_player::engine::EngineStatus;

impl PlaybackSession {
    /// Reads the duration and starts the time sync subscription.
    ///
    /// Runs at setup and again after every source swap. A non-finite
    /// duration marks the stream live: the slider and start label are
    /// hidden, the end label shows the live marker, and the subscription is
    /// stopped.
    pub(super) fn setup_time_sync(&mut self) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let duration = engine.duration();
        if duration.is_finite() {
            self.live = false;
            self.duration = duration.max(0.0);
            let current = self.resume_position().min(self.duration);
            self.display.show_seekable(current, self.duration);
            if !self.time_sync.is_running() {
                self.time_sync.start(self.context.clock.now());
            }
        } else {
            self.live = true;
            self.duration = 0.0;
            self.time_sync.stop();
            self.display.show_live();
        }
    }

    /// One time sync tick.
    ///
    /// Skipped unless the engine is ready and no drag is in progress, so
    /// the slider never fights the user's finger. A non-finite position
    /// leaves the display untouched.
    pub(super) fn sync_time(&mut self) {
        if self.live || self.seek_state.is_seeking() {
            return;
        }
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        if engine.status() != EngineStatus::ReadyToPlay {
            return;
        }

        let current = engine.current_time();
        if !current.is_finite() {
            return;
        }
        let total = engine.duration();
        self.playhead = current.max(0.0);
        if total.is_finite() {
            self.duration = total.max(0.0);
            self.display.slider.max = self.duration;
        }
        let (current, total) = (self.playhead, self.duration);
        self.display.show_time(current, total);
        self.notify(|delegate, id| delegate.on_time_update(id, current, total));
    }
}
