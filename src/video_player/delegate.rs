// SPDX-License-Identifier: MPL-2.0
//! Optional listener for session notifications.
//!
//! Every method has an empty default body, so a host implements only the
//! notifications it cares about. The delegate is shared through an `Rc`:
//! the fullscreen child receives a clone of the parent's `Rc` (the same
//! listener, never a copy) and drops it when torn down.

use crate::domain::video::{PlaybackState, SeekState};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a session in delegate callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub trait PlaybackDelegate {
    fn on_state_changed(&self, _session: SessionId, _state: PlaybackState) {}

    fn on_seek_state_changed(&self, _session: SessionId, _state: SeekState) {}

    /// Raw engine times in seconds, once per time sync tick.
    fn on_time_update(&self, _session: SessionId, _current_secs: f64, _total_secs: f64) {}

    fn on_finished(&self, _session: SessionId) {}

    fn on_enter_fullscreen(&self) {}

    fn on_exit_fullscreen(&self) {}
}

/// Shared handle to a delegate.
pub type SharedDelegate = Rc<dyn PlaybackDelegate>;

/// Delegate that logs every notification through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDelegate;

impl PlaybackDelegate for TracingDelegate {
    fn on_state_changed(&self, session: SessionId, state: PlaybackState) {
        tracing::info!(%session, %state, "playback state changed");
    }

    fn on_seek_state_changed(&self, session: SessionId, state: SeekState) {
        tracing::info!(%session, ?state, "seek state changed");
    }

    fn on_time_update(&self, session: SessionId, current_secs: f64, total_secs: f64) {
        tracing::trace!(%session, current_secs, total_secs, "time update");
    }

    fn on_finished(&self, session: SessionId) {
        tracing::info!(%session, "playback finished");
    }

    fn on_enter_fullscreen(&self) {
        tracing::info!("entered fullscreen");
    }

    fn on_exit_fullscreen(&self) {
        tracing::info!("exited fullscreen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn session_ids_are_unique() {
        let a = SessionId::next();
        let b = SessionId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn default_methods_are_no_ops() {
        struct OnlyFinished(Cell<u32>);
        impl PlaybackDelegate for OnlyFinished {
            fn on_finished(&self, _session: SessionId) {
                self.0.set(self.0.get() + 1);
            }
        }

        let delegate = OnlyFinished(Cell::new(0));
        let id = SessionId::next();
        delegate.on_state_changed(id, PlaybackState::Played);
        delegate.on_time_update(id, 1.0, 2.0);
        delegate.on_enter_fullscreen();
        delegate.on_finished(id);

        assert_eq!(delegate.0.get(), 1);
    }
}
