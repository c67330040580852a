// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by the unit tests.
//!
//! Re-exports the `approx` assertion macros for float comparison and
//! provides a [`Harness`] that wires a session to a manual clock, a
//! simulated catalog and a recording delegate.

pub use approx::assert_abs_diff_eq;

use crate::config::PlaybackSettings;
use crate::domain::video::{MediaSource, PlaybackState, SeekState};
use crate::video_player::clock::ManualClock;
use crate::video_player::delegate::{PlaybackDelegate, SessionId, SharedDelegate};
use crate::video_player::session::{PlaybackSession, SessionContext};
use crate::video_player::simulated::{SimulatedCatalog, SimulatedHandle, SimulatedMedia};
use std::cell::RefCell;
use std::rc::Rc;

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// One delegate notification.
#[derive(Debug, Clone, PartialEq)]
pub enum DelegateEvent {
    State(SessionId, PlaybackState),
    Seek(SessionId, SeekState),
    Time(SessionId, f64, f64),
    Finished(SessionId),
    EnterFullscreen,
    ExitFullscreen,
}

/// Delegate that keeps every notification in order.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    events: RefCell<Vec<DelegateEvent>>,
}

impl RecordingDelegate {
    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Playback states notified for `session`, in order.
    pub fn states_of(&self, session: SessionId) -> Vec<PlaybackState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                DelegateEvent::State(id, state) if *id == session => Some(*state),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&DelegateEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }

    fn push(&self, event: DelegateEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PlaybackDelegate for RecordingDelegate {
    fn on_state_changed(&self, session: SessionId, state: PlaybackState) {
        self.push(DelegateEvent::State(session, state));
    }

    fn on_seek_state_changed(&self, session: SessionId, state: SeekState) {
        self.push(DelegateEvent::Seek(session, state));
    }

    fn on_time_update(&self, session: SessionId, current_secs: f64, total_secs: f64) {
        self.push(DelegateEvent::Time(session, current_secs, total_secs));
    }

    fn on_finished(&self, session: SessionId) {
        self.push(DelegateEvent::Finished(session));
    }

    fn on_enter_fullscreen(&self) {
        self.push(DelegateEvent::EnterFullscreen);
    }

    fn on_exit_fullscreen(&self) {
        self.push(DelegateEvent::ExitFullscreen);
    }
}

pub const MEDIA_URL: &str = "https://media.example.com/clip.m3u8";

/// Manual clock, simulated catalog and recording delegate.
pub struct Harness {
    pub clock: ManualClock,
    pub catalog: Rc<SimulatedCatalog>,
    pub delegate: Rc<RecordingDelegate>,
    pub context: SessionContext,
}

impl Harness {
    /// Every well-formed URL resolves to `media`.
    pub fn new(media: SimulatedMedia) -> Self {
        Self::with_settings(media, PlaybackSettings::default())
    }

    pub fn with_settings(media: SimulatedMedia, settings: PlaybackSettings) -> Self {
        let clock = ManualClock::new();
        let catalog = Rc::new(SimulatedCatalog::new(Rc::new(clock.clone())).with_fallback(media));
        Self::from_parts(clock, catalog, settings)
    }

    pub fn from_parts(
        clock: ManualClock,
        catalog: Rc<SimulatedCatalog>,
        settings: PlaybackSettings,
    ) -> Self {
        let context = SessionContext::new(catalog.clone(), Rc::new(clock.clone()), settings);
        Self {
            clock,
            catalog,
            delegate: Rc::new(RecordingDelegate::default()),
            context,
        }
    }

    /// Session on [`MEDIA_URL`] with the recording delegate attached.
    pub fn session(&self) -> PlaybackSession {
        self.session_for(MediaSource::new(MEDIA_URL))
    }

    pub fn session_for(&self, source: MediaSource) -> PlaybackSession {
        let delegate: SharedDelegate = self.delegate.clone();
        self.context.spawn(source, Some(delegate))
    }

    /// Handle of the `index`-th engine built by the catalog.
    pub fn engine(&self, index: usize) -> SimulatedHandle {
        self.catalog.handles()[index].clone()
    }

    /// Moves the clock forward and runs one tick.
    pub fn advance(&self, session: &mut PlaybackSession, secs: f64) {
        self.clock.advance_secs(secs);
        session.tick();
    }
}
