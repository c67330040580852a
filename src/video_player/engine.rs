// SPDX-License-Identifier: MPL-2.0
//! Playback engine adapter contract.
//!
//! The decode/render engine is an external collaborator. A session drives it
//! exclusively through [`PlaybackEngine`] and obtains instances from an
//! [`EngineFactory`], so the fullscreen child can get its own independent
//! engine bound to the same URL.
//!
//! Asynchronous engine notifications (seek completion, end of media,
//! buffering) are published on an unbounded channel returned by
//! [`PlaybackEngine::subscribe`]. The owning session drains it on each UI
//! tick, which puts every completion callback on the UI context.

use crate::domain::video::SeekTolerance;
use crate::error::EngineError;
use tokio::sync::mpsc;

/// Readiness of the loaded media item, as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineStatus {
    /// The engine has not finished inspecting the media yet.
    #[default]
    Unknown,
    /// The media can be played; position reports are meaningful.
    ReadyToPlay,
    /// The engine gave up on the media.
    Failed,
}

/// Notification published by an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// A previously requested seek finished.
    ///
    /// `finished` is false when the seek was interrupted by a newer request.
    SeekCompleted { finished: bool },

    /// Playback reached the end of the media.
    PlayedToEnd,

    /// The engine started (`true`) or stopped (`false`) waiting for data.
    BufferingChanged(bool),
}

/// Sending half handed to engine implementations.
pub type EngineEventSender = mpsc::UnboundedSender<EngineEvent>;

/// Receiving half owned by the session.
pub type EngineEventReceiver = mpsc::UnboundedReceiver<EngineEvent>;

/// Creates a fresh notification channel.
#[must_use]
pub fn event_channel() -> (EngineEventSender, EngineEventReceiver) {
    mpsc::unbounded_channel()
}

/// Media engine driven by a playback session.
///
/// Times are in seconds. `duration` returns a non-finite value (NaN or
/// infinity) for live or indeterminate streams.
pub trait PlaybackEngine {
    /// Binds the engine to a media URL.
    fn load(&mut self, url: &str) -> Result<(), EngineError>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Starts an asynchronous seek. Completion is reported with
    /// [`EngineEvent::SeekCompleted`].
    fn seek(&mut self, target_secs: f64, tolerance: SeekTolerance);

    fn current_time(&self) -> f64;

    fn duration(&self) -> f64;

    /// Effective playback rate; zero when stopped.
    fn playback_rate(&self) -> f32;

    fn status(&self) -> EngineStatus;

    /// Swaps the media item while keeping the engine instance.
    fn replace_source(&mut self, url: &str) -> Result<(), EngineError>;

    /// Registers for notifications. Only the latest subscriber receives events.
    fn subscribe(&mut self) -> EngineEventReceiver;

    /// Called on each UI tick before notifications are drained, giving the
    /// adapter a chance to publish pending events.
    fn poll(&mut self) {}
}

impl std::fmt::Debug for dyn PlaybackEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("status", &self.status())
            .field("current_time", &self.current_time())
            .field("duration", &self.duration())
            .finish()
    }
}

/// Builds engines for sessions.
pub trait EngineFactory {
    /// Creates an engine already loaded with `url`.
    fn create(&self, url: &str) -> Result<Box<dyn PlaybackEngine>, EngineError>;
}
