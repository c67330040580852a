// SPDX-License-Identifier: MPL-2.0
//! Clock-driven engine used by the demo app and the test suite.
//!
//! [`SimulatedCatalog`] maps URLs to [`SimulatedMedia`] descriptions and
//! builds one [`SimulatedEngine`] per session. Each engine shares its state
//! with a [`SimulatedHandle`] so callers can inspect what a session asked
//! for (see [`EngineCall`]) and inject buffering or readiness changes.
//!
//! Positions advance with the injected [`Clock`] while playing. Seeks land
//! immediately and complete on the next `poll`; a seek issued while another
//! is outstanding interrupts it (`finished: false`).

use crate::domain::video::{is_well_formed_url, SeekTolerance};
use crate::error::EngineError;
use crate::video_player::clock::Clock;
use crate::video_player::engine::{
    event_channel, EngineEvent, EngineEventReceiver, EngineEventSender, EngineFactory,
    EngineStatus, PlaybackEngine,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Instant;

/// Description of a media item known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedMedia {
    /// Duration in seconds; non-finite for live streams.
    pub duration_secs: f64,
    /// Whether the item reports ready-to-play right after loading.
    pub ready: bool,
}

impl SimulatedMedia {
    /// On-demand item of the given length.
    #[must_use]
    pub fn vod(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            ready: true,
        }
    }

    /// Live stream with an indeterminate duration.
    #[must_use]
    pub fn live() -> Self {
        Self {
            duration_secs: f64::INFINITY,
            ready: true,
        }
    }
}

/// Request recorded by a simulated engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    ReplaceSource(String),
}

#[derive(Debug)]
struct EngineState {
    url: String,
    media: SimulatedMedia,
    calls: Vec<EngineCall>,
    /// Position at `anchor`, in seconds.
    position: f64,
    anchor: Instant,
    playing: bool,
    buffering: bool,
    ended: bool,
    /// Seeks waiting for completion, oldest first.
    outstanding_seeks: usize,
    hold_seeks: bool,
    sender: Option<EngineEventSender>,
}

impl EngineState {
    fn advancing(&self) -> bool {
        self.playing && !self.buffering
    }

    fn position_at(&self, now: Instant) -> f64 {
        let mut position = self.position;
        if self.advancing() {
            position += now.saturating_duration_since(self.anchor).as_secs_f64();
        }
        if self.media.duration_secs.is_finite() {
            position = position.min(self.media.duration_secs);
        }
        position
    }

    /// Folds elapsed time into `position` and moves the anchor to `now`.
    fn settle(&mut self, now: Instant) {
        self.position = self.position_at(now);
        self.anchor = now;
    }

    fn emit(&self, event: EngineEvent) {
        if let Some(sender) = &self.sender {
            // The session may already be gone; events to a dropped receiver are discarded.
            let _ = sender.send(event);
        }
    }
}

/// Inspection and control handle for one simulated engine.
#[derive(Debug, Clone)]
pub struct SimulatedHandle {
    state: Rc<RefCell<EngineState>>,
    clock: Rc<dyn Clock>,
}

impl SimulatedHandle {
    /// Requests received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<EngineCall> {
        self.state.borrow().calls.clone()
    }

    /// Forgets the recorded requests.
    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// URL currently loaded.
    #[must_use]
    pub fn url(&self) -> String {
        self.state.borrow().url.clone()
    }

    /// Current position, in seconds.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.state.borrow().position_at(self.clock.now())
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }

    /// Returns true once the engine or its subscriber is gone.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.state
            .borrow()
            .sender
            .as_ref()
            .is_none_or(EngineEventSender::is_closed)
    }

    /// Starts or stops a stall, notifying the subscriber.
    pub fn set_buffering(&self, buffering: bool) {
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        if state.buffering == buffering {
            return;
        }
        state.settle(now);
        state.buffering = buffering;
        state.emit(EngineEvent::BufferingChanged(buffering));
    }

    /// Flips the ready-to-play status.
    pub fn set_ready(&self, ready: bool) {
        self.state.borrow_mut().media.ready = ready;
    }

    /// Keeps seeks outstanding until [`complete_seeks`](Self::complete_seeks).
    pub fn hold_seeks(&self, hold: bool) {
        self.state.borrow_mut().hold_seeks = hold;
    }

    /// Completes every outstanding seek now.
    pub fn complete_seeks(&self) {
        let mut state = self.state.borrow_mut();
        complete_outstanding(&mut state);
    }
}

fn complete_outstanding(state: &mut EngineState) {
    if state.outstanding_seeks == 0 {
        return;
    }
    // Every earlier seek was interrupted by the latest one.
    for _ in 1..state.outstanding_seeks {
        state.emit(EngineEvent::SeekCompleted { finished: false });
    }
    state.outstanding_seeks = 0;
    state.emit(EngineEvent::SeekCompleted { finished: true });
}

/// Engine driven by the injected clock.
#[derive(Debug)]
pub struct SimulatedEngine {
    state: Rc<RefCell<EngineState>>,
    clock: Rc<dyn Clock>,
    catalog: Rc<CatalogEntries>,
}

impl PlaybackEngine for SimulatedEngine {
    fn load(&mut self, url: &str) -> Result<(), EngineError> {
        let media = self.catalog.resolve(url)?;
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        state.calls.push(EngineCall::Load(url.to_string()));
        state.url = url.to_string();
        state.media = media;
        state.position = 0.0;
        state.anchor = now;
        state.ended = false;
        Ok(())
    }

    fn play(&mut self) {
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        state.calls.push(EngineCall::Play);
        state.settle(now);
        state.playing = true;
    }

    fn pause(&mut self) {
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        state.calls.push(EngineCall::Pause);
        state.settle(now);
        state.playing = false;
    }

    fn seek(&mut self, target_secs: f64, _tolerance: SeekTolerance) {
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        state.calls.push(EngineCall::Seek(target_secs));
        let upper = if state.media.duration_secs.is_finite() {
            state.media.duration_secs
        } else {
            f64::MAX
        };
        state.position = target_secs.clamp(0.0, upper);
        state.anchor = now;
        state.ended = false;
        state.outstanding_seeks += 1;
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().position_at(self.clock.now())
    }

    fn duration(&self) -> f64 {
        self.state.borrow().media.duration_secs
    }

    fn playback_rate(&self) -> f32 {
        if self.state.borrow().advancing() {
            1.0
        } else {
            0.0
        }
    }

    fn status(&self) -> EngineStatus {
        if self.state.borrow().media.ready {
            EngineStatus::ReadyToPlay
        } else {
            EngineStatus::Unknown
        }
    }

    fn replace_source(&mut self, url: &str) -> Result<(), EngineError> {
        self.state
            .borrow_mut()
            .calls
            .push(EngineCall::ReplaceSource(url.to_string()));
        if self.catalog.rejected.contains(url) {
            return Err(EngineError::SourceRejected(url.to_string()));
        }
        let media = self.catalog.resolve(url)?;
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        state.url = url.to_string();
        state.media = media;
        state.position = 0.0;
        state.anchor = now;
        state.ended = false;
        Ok(())
    }

    fn subscribe(&mut self) -> EngineEventReceiver {
        let (sender, receiver) = event_channel();
        self.state.borrow_mut().sender = Some(sender);
        receiver
    }

    fn poll(&mut self) {
        let now = self.clock.now();
        let mut state = self.state.borrow_mut();
        if !state.hold_seeks {
            complete_outstanding(&mut state);
        }

        let duration = state.media.duration_secs;
        if state.advancing()
            && !state.ended
            && duration.is_finite()
            && state.position_at(now) >= duration
        {
            state.settle(now);
            state.playing = false;
            state.ended = true;
            state.emit(EngineEvent::PlayedToEnd);
        }
    }
}

impl Drop for SimulatedEngine {
    fn drop(&mut self) {
        self.state.borrow_mut().sender = None;
    }
}

#[derive(Debug, Clone, Default)]
struct CatalogEntries {
    media: HashMap<String, SimulatedMedia>,
    fallback: Option<SimulatedMedia>,
    rejected: HashSet<String>,
}

impl CatalogEntries {
    fn resolve(&self, url: &str) -> Result<SimulatedMedia, EngineError> {
        if !is_well_formed_url(url) {
            return Err(EngineError::MalformedUrl(url.to_string()));
        }
        self.media
            .get(url)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| EngineError::Unresolvable(url.to_string()))
    }
}

/// Factory of simulated engines.
///
/// Unknown URLs resolve to the fallback media when one is set and fail
/// with [`EngineError::Unresolvable`] otherwise.
#[derive(Debug)]
pub struct SimulatedCatalog {
    clock: Rc<dyn Clock>,
    entries: Rc<CatalogEntries>,
    handles: RefCell<Vec<SimulatedHandle>>,
}

impl SimulatedCatalog {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Rc::new(CatalogEntries::default()),
            handles: RefCell::new(Vec::new()),
        }
    }

    /// Resolves every well-formed URL without an explicit entry to `media`.
    #[must_use]
    pub fn with_fallback(mut self, media: SimulatedMedia) -> Self {
        self.entries_mut().fallback = Some(media);
        self
    }

    #[must_use]
    pub fn with_media(mut self, url: impl Into<String>, media: SimulatedMedia) -> Self {
        self.entries_mut().media.insert(url.into(), media);
        self
    }

    /// Makes `replace_source` refuse `url`.
    #[must_use]
    pub fn with_rejected(mut self, url: impl Into<String>) -> Self {
        self.entries_mut().rejected.insert(url.into());
        self
    }

    /// Handles of every engine built so far, in creation order.
    #[must_use]
    pub fn handles(&self) -> Vec<SimulatedHandle> {
        self.handles.borrow().clone()
    }

    /// Handle of the most recently built engine.
    #[must_use]
    pub fn last_handle(&self) -> Option<SimulatedHandle> {
        self.handles.borrow().last().cloned()
    }

    fn entries_mut(&mut self) -> &mut CatalogEntries {
        Rc::make_mut(&mut self.entries)
    }
}

impl EngineFactory for SimulatedCatalog {
    fn create(&self, url: &str) -> Result<Box<dyn PlaybackEngine>, EngineError> {
        let now = self.clock.now();
        let state = Rc::new(RefCell::new(EngineState {
            url: String::new(),
            media: SimulatedMedia::vod(0.0),
            calls: Vec::new(),
            position: 0.0,
            anchor: now,
            playing: false,
            buffering: false,
            ended: false,
            outstanding_seeks: 0,
            hold_seeks: false,
            sender: None,
        }));
        let mut engine = SimulatedEngine {
            state: Rc::clone(&state),
            clock: Rc::clone(&self.clock),
            catalog: Rc::clone(&self.entries),
        };
        engine.load(url)?;

        self.handles.borrow_mut().push(SimulatedHandle {
            state,
            clock: Rc::clone(&self.clock),
        });
        Ok(Box::new(engine))
    }
}
