// SPDX-License-Identifier: MPL-2.0
//! Seek slider coordination.
//!
//! Dragging pauses playback and freezes the time sync display; releasing
//! issues an exact seek to the whole-second target. Playback resumes only
//! after the engine reports a finished seek, and the Idle transition is
//! announced after that resumption. A quality switch or fullscreen exit that
//! supersedes the commit inherits the drag and ends it on completion.

use super::{PlaybackSession, SeekPurpose};
use crate::domain::video::SeekState;
use crate::video_player::time_format::whole_secs;

impl PlaybackSession {
    /// Slider drag started.
    ///
    /// Cancels auto-hide, pauses, and enters [`SeekState::Seeking`]. A second
    /// call while already seeking is ignored. No-op without an engine or on
    /// live streams.
    pub fn begin_seek(&mut self) {
        if self.engine.is_none() || self.live || self.seek_state.is_seeking() {
            return;
        }
        self.auto_hide.stop();
        self.pause();
        self.set_seek_state(SeekState::Seeking);
    }

    /// Slider moved while dragging; only the displayed position changes.
    pub fn preview_seek(&mut self, value_secs: f64) {
        if !self.seek_state.is_seeking() || !value_secs.is_finite() {
            return;
        }
        self.display.slider.value = value_secs.clamp(0.0, self.duration.max(0.0));
    }

    /// Slider released at the last previewed position.
    pub fn commit_seek(&mut self) {
        let value = self.display.slider.value;
        self.commit_seek_to(value);
    }

    /// Slider released at `value_secs`.
    ///
    /// The target is truncated to whole seconds and clamped to the duration.
    /// A commit without a preceding drag starts the seek on the spot.
    pub fn commit_seek_to(&mut self, value_secs: f64) {
        if self.engine.is_none() || self.live {
            return;
        }
        if !self.seek_state.is_seeking() {
            self.begin_seek();
        }
        let target = seek_target(value_secs, self.duration);
        self.display.slider.value = target;
        tracing::debug!(session = %self.id, target, "seek committed");
        self.issue_seek(target, SeekPurpose::SliderCommit);
    }

    /// Drag completion, after any resume: re-arm auto-hide, then go Idle.
    pub(super) fn finish_slider_seek(&mut self) {
        self.seek_state = SeekState::Idle;
        self.restart_auto_hide();
        self.notify(|delegate, id| delegate.on_seek_state_changed(id, SeekState::Idle));
    }

    fn set_seek_state(&mut self, state: SeekState) {
        self.seek_state = state;
        self.notify(|delegate, id| delegate.on_seek_state_changed(id, state));
    }
}

/// Whole-second seek target within `[0, duration]`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn seek_target(value_secs: f64, duration_secs: f64) -> f64 {
    let target = whole_secs(value_secs) as f64;
    if duration_secs.is_finite() {
        target.min(duration_secs.max(0.0))
    } else {
        target
    }
}
