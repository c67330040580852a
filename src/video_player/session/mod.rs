// SPDX-License-Identifier: MPL-2.0
//! Playback session: the transport state machine.
//!
//! A session owns one engine, one media source and the overlay display
//! model. It tracks three independent states:
//! - [`PlaybackState`]: Ready → Played ⇄ Paused, Finished only from Played
//! - [`SeekState`]: Idle ⇄ Seeking, owned by the seek slider
//! - [`ScreenState`]: Normal, or Full for the fullscreen handoff child
//!
//! Play/pause decisions read the local state machine, never the engine's
//! reported playback rate.
//!
//! All inputs go through [`PlaybackSession::update`] (or the equivalent
//! methods). Engine completions are queued on a channel and handled during
//! [`PlaybackSession::tick`], so every transition runs on the UI context.

mod fullscreen;
mod quality;
mod seek;
mod sync;

pub use fullscreen::FullscreenExit;

use super::clock::Clock;
use super::delegate::{PlaybackDelegate, SessionId, SharedDelegate};
use super::display::TransportDisplay;
use super::engine::{EngineEvent, EngineEventReceiver, EngineFactory, PlaybackEngine};
use super::message::Message;
use super::timer::{OneShotTimer, PeriodicTimer};
use crate::config::{PlaybackSettings, PAUSE_LABEL, PLAY_LABEL};
use crate::domain::video::{MediaSource, PlaybackState, ScreenState, SeekState, SeekTolerance};
use std::fmt;
use std::rc::Rc;

/// Why a seek was issued; decides what happens when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeekPurpose {
    /// The user released the seek slider.
    SliderCommit,
    /// Resume at the playhead after a source swap or a fullscreen handoff.
    ResumeAtPlayhead,
    /// Restart from zero after the media finished.
    Restart,
    /// Park the origin at the child's playhead after fullscreen exit.
    ReturnFromFullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingSeek {
    purpose: SeekPurpose,
    target_secs: f64,
    /// Set for slider commits and for any seek that superseded one; its
    /// completion moves [`SeekState`] back to Idle.
    ends_drag: bool,
}

/// Shared construction parameters for sessions.
///
/// Cloning is cheap (two `Rc` clones); the fullscreen child is built from a
/// clone of its parent's context.
#[derive(Clone)]
pub struct SessionContext {
    pub factory: Rc<dyn EngineFactory>,
    pub clock: Rc<dyn Clock>,
    pub settings: PlaybackSettings,
}

impl SessionContext {
    pub fn new(
        factory: Rc<dyn EngineFactory>,
        clock: Rc<dyn Clock>,
        settings: PlaybackSettings,
    ) -> Self {
        Self {
            factory,
            clock,
            settings,
        }
    }

    /// Builds an independent embedded session for `source`.
    ///
    /// The delegate is attached before autoplay runs, so it hears the first
    /// transition.
    pub fn spawn(&self, source: MediaSource, delegate: Option<SharedDelegate>) -> PlaybackSession {
        PlaybackSession::build(source, self.clone(), ScreenState::Normal, delegate)
    }

    /// Builds an independent fullscreen session for `source`.
    ///
    /// Autoplay is never applied: the handoff decides when the child plays.
    pub fn spawn_fullscreen(
        &self,
        source: MediaSource,
        delegate: Option<SharedDelegate>,
    ) -> PlaybackSession {
        PlaybackSession::build(source, self.clone(), ScreenState::Full, delegate)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

pub struct PlaybackSession {
    id: SessionId,
    context: SessionContext,
    source: MediaSource,
    /// URL currently bound to the engine (changes on quality switch).
    active_url: String,
    engine: Option<Box<dyn PlaybackEngine>>,
    events: Option<EngineEventReceiver>,
    delegate: Option<SharedDelegate>,

    state: PlaybackState,
    /// Last played/paused intent, restored when buffering ends.
    intent: PlaybackState,
    seek_state: SeekState,
    screen: ScreenState,

    /// Last observed position, in seconds.
    playhead: f64,
    /// Duration read at setup, in seconds (zero for live streams).
    duration: f64,
    live: bool,
    autoplay: bool,
    pending_seek: Option<PendingSeek>,

    time_sync: PeriodicTimer,
    auto_hide: OneShotTimer,
    display: TransportDisplay,

    child: Option<Box<PlaybackSession>>,
    /// Playhead captured by `enter_fullscreen`, consumed on the next tick.
    pending_handoff: Option<f64>,
}

impl PlaybackSession {
    /// Engine construction failures are logged and leave the session inert:
    /// it stays in [`PlaybackState::Ready`] and ignores transport input.
    fn build(
        source: MediaSource,
        context: SessionContext,
        screen: ScreenState,
        delegate: Option<SharedDelegate>,
    ) -> Self {
        let id = SessionId::next();
        let engine = match context.factory.create(&source.url) {
            Ok(engine) => Some(engine),
            Err(err) => {
                tracing::warn!(session = %id, error = %err, "playback engine unavailable, controls stay inert");
                None
            }
        };
        let settings = context.settings;

        let mut session = Self {
            id,
            active_url: source.url.clone(),
            display: TransportDisplay::new(screen, source.has_qualities()),
            source,
            engine,
            events: None,
            delegate,
            state: PlaybackState::Ready,
            intent: PlaybackState::Ready,
            seek_state: SeekState::Idle,
            screen,
            playhead: 0.0,
            duration: 0.0,
            live: false,
            autoplay: false,
            pending_seek: None,
            time_sync: PeriodicTimer::new(settings.sync_interval.as_duration()),
            auto_hide: OneShotTimer::new(settings.auto_hide.as_duration()),
            child: None,
            pending_handoff: None,
            context,
        };

        if let Some(engine) = session.engine.as_mut() {
            session.events = Some(engine.subscribe());
        }
        session.setup_time_sync();

        tracing::debug!(
            session = %session.id,
            url = %session.source.url,
            qualities = session.source.qualities.len(),
            live = session.live,
            ?screen,
            "playback session created"
        );

        if settings.autoplay && !screen.is_full() {
            session.set_autoplay(true);
        }
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn seek_state(&self) -> SeekState {
        self.seek_state
    }

    pub fn screen_state(&self) -> ScreenState {
        self.screen
    }

    /// Last observed playback position, in seconds.
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    /// URL currently bound to the engine.
    pub fn active_url(&self) -> &str {
        &self.active_url
    }

    pub fn display(&self) -> &TransportDisplay {
        &self.display
    }

    /// Returns true for streams without a finite duration.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Returns true if an engine is bound; without one every control is inert.
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn controls_visible(&self) -> bool {
        self.display.overlay_visible
    }

    /// Returns true while the auto-hide countdown is armed.
    pub fn is_auto_hide_running(&self) -> bool {
        self.auto_hide.is_running()
    }

    /// Returns true while the time sync subscription is active.
    pub fn is_time_sync_running(&self) -> bool {
        self.time_sync.is_running()
    }

    pub fn delegate(&self) -> Option<&SharedDelegate> {
        self.delegate.as_ref()
    }

    pub fn set_delegate(&mut self, delegate: Option<SharedDelegate>) {
        self.delegate = delegate;
    }

    // =========================================================================
    // Message entry point
    // =========================================================================

    /// Handles one message to completion.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::TogglePlayback => self.toggle_playback(),
            Message::SeekPreview(secs) => {
                self.begin_seek();
                self.preview_seek(secs);
            }
            Message::SeekCommit => self.commit_seek(),
            Message::ToggleFullscreen => self.toggle_fullscreen(),
            Message::ToggleQualityPanel => self.toggle_quality_panel(),
            Message::SelectQuality(index) => self.select_quality(index),
            Message::OverlayTapped => self.toggle_controls(),
            Message::Tick => self.tick(),
            Message::Fullscreen(inner) => self.route_to_child(*inner),
        }
    }

    /// Runs one UI turn: engine notifications, deferred handoff, timers.
    pub fn tick(&mut self) {
        self.drain_engine_events();
        self.run_pending_handoff();

        let now = self.context.clock.now();
        if self.auto_hide.poll(now) {
            tracing::trace!(session = %self.id, "transport overlay auto-hidden");
            self.display.overlay_visible = false;
        }
        if self.time_sync.poll(now) {
            self.sync_time();
        }

        if let Some(child) = self.child.as_mut() {
            child.tick();
        }
    }

    // =========================================================================
    // Playback state machine
    // =========================================================================

    /// Play/pause button.
    ///
    /// Pauses when playing (including buffering with a play intent), plays
    /// otherwise. From `Finished` the media restarts from zero. Stops and
    /// restarts the auto-hide countdown. No-op without an engine.
    pub fn toggle_playback(&mut self) {
        if self.engine.is_none() {
            return;
        }
        self.auto_hide.stop();
        if self.state.is_finished() {
            self.issue_seek(0.0, SeekPurpose::Restart);
        } else if self.is_playing_intent() {
            self.pause();
        } else {
            self.play();
        }
        self.restart_auto_hide();
    }

    /// Starts playback immediately when enabled.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
        if autoplay {
            self.play();
        }
    }

    /// Handles the engine's end-of-media notification.
    ///
    /// Only a playing session finishes; the delegate hears `on_finished`
    /// once per completion.
    pub fn on_engine_finished(&mut self) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        if !self.is_playing_intent() {
            return;
        }
        let end = engine.current_time();
        if end.is_finite() {
            self.playhead = end.max(0.0);
        }
        self.display.play_label = PLAY_LABEL;
        self.set_state(PlaybackState::Finished);
        self.notify(|delegate, id| delegate.on_finished(id));
    }

    fn play(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.play();
        self.display.play_label = PAUSE_LABEL;
        self.set_state(PlaybackState::Played);
    }

    fn pause(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.pause();
        self.display.play_label = PLAY_LABEL;
        self.set_state(PlaybackState::Paused);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if matches!(state, PlaybackState::Played | PlaybackState::Paused) {
            self.intent = state;
        }
        tracing::debug!(session = %self.id, from = %self.state, to = %state, "playback state");
        self.state = state;
        self.notify(|delegate, id| delegate.on_state_changed(id, state));
    }

    fn is_playing_intent(&self) -> bool {
        match self.state {
            PlaybackState::Played => true,
            PlaybackState::Buffering => self.intent.is_played(),
            _ => false,
        }
    }

    // =========================================================================
    // Engine plumbing
    // =========================================================================

    /// Issues an exact seek that supersedes any outstanding one.
    ///
    /// A superseded slider commit hands its drag over to the new seek.
    fn issue_seek(&mut self, target_secs: f64, purpose: SeekPurpose) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let ends_drag = purpose == SeekPurpose::SliderCommit
            || self.pending_seek.is_some_and(|pending| pending.ends_drag);
        engine.seek(target_secs, SeekTolerance::ZERO);
        self.pending_seek = Some(PendingSeek {
            purpose,
            target_secs,
            ends_drag,
        });
    }

    /// Where playback should continue: the committed slider target while a
    /// drag seek is outstanding, the last observed playhead otherwise.
    fn resume_position(&self) -> f64 {
        match self.pending_seek {
            Some(pending) if pending.ends_drag => pending.target_secs,
            _ => self.playhead,
        }
    }

    fn drain_engine_events(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.poll();
        }
        let mut events = Vec::new();
        if let Some(receiver) = self.events.as_mut() {
            while let Ok(event) = receiver.try_recv() {
                events.push(event);
            }
        }
        for event in events {
            self.handle_engine_event(event);
        }
    }

    fn handle_engine_event(&mut self, event: EngineEvent) {
        tracing::trace!(session = %self.id, ?event, "engine event");
        match event {
            EngineEvent::SeekCompleted { finished } => self.on_seek_completed(finished),
            EngineEvent::PlayedToEnd => self.on_engine_finished(),
            EngineEvent::BufferingChanged(true) => {
                if matches!(self.state, PlaybackState::Played | PlaybackState::Paused) {
                    self.set_state(PlaybackState::Buffering);
                }
            }
            EngineEvent::BufferingChanged(false) => {
                if self.state.is_buffering() {
                    self.set_state(self.intent);
                }
            }
        }
    }

    fn on_seek_completed(&mut self, finished: bool) {
        if !finished {
            // A newer seek superseded this one; its completion drives the transition.
            return;
        }
        let Some(pending) = self.pending_seek.take() else {
            return;
        };
        self.playhead = pending.target_secs;
        if !self.live {
            self.display.show_time(pending.target_secs, self.duration);
        }

        // The origin stays paused while its fullscreen child is shown.
        let may_resume = self.child.is_none() && self.pending_handoff.is_none();
        let resume = may_resume
            && match pending.purpose {
                SeekPurpose::SliderCommit => !self.is_playing_intent(),
                SeekPurpose::ResumeAtPlayhead | SeekPurpose::Restart => true,
                SeekPurpose::ReturnFromFullscreen => false,
            };
        if resume {
            self.play();
        }
        if pending.ends_drag {
            self.finish_slider_seek();
        }
    }

    // =========================================================================
    // Auto-hide overlay
    // =========================================================================

    /// Shows or hides the transport overlay.
    ///
    /// Showing (re)starts the auto-hide countdown, hiding cancels it.
    pub fn set_controls_visible(&mut self, visible: bool) {
        self.display.overlay_visible = visible;
        if visible {
            self.restart_auto_hide();
        } else {
            self.auto_hide.stop();
        }
    }

    /// Tap on the video surface.
    pub fn toggle_controls(&mut self) {
        self.set_controls_visible(!self.display.overlay_visible);
    }

    /// Re-arms the countdown unless the quality panel or a drag owns the overlay.
    fn restart_auto_hide(&mut self) {
        self.auto_hide.stop();
        if self.display.quality_panel_open || self.seek_state.is_seeking() {
            return;
        }
        self.auto_hide.start(self.context.clock.now());
    }

    fn notify(&self, f: impl FnOnce(&dyn PlaybackDelegate, SessionId)) {
        if let Some(delegate) = &self.delegate {
            f(delegate.as_ref(), self.id);
        }
    }

    fn set_screen(&mut self, screen: ScreenState) {
        self.screen = screen;
        self.display.set_screen(screen);
    }
}

impl fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("id", &self.id)
            .field("url", &self.active_url)
            .field("state", &self.state)
            .field("seek_state", &self.seek_state)
            .field("screen", &self.screen)
            .field("playhead", &self.playhead)
            .field("has_engine", &self.engine.is_some())
            .field("has_child", &self.child.is_some())
            .finish()
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.time_sync.stop();
        self.auto_hide.stop();
        self.events = None;
        self.engine = None;
        tracing::debug!(session = %self.id, "playback session released");
    }
}
