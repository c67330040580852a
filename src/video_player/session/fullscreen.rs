// SPDX-License-Identifier: MPL-2.0
//! Fullscreen handoff between an embedded session and a child session.
//!
//! Entering builds an independent child (own engine, same active URL and
//! qualities, shared delegate) on the next tick and hands it the parent's
//! playhead. The parent pauses while the child is shown, and none of its
//! seek completions resume it until the child is gone. Exiting tears the
//! child down and parks the parent, still paused, at the child's playhead.

use super::{PlaybackSession, SeekPurpose};
use crate::domain::video::{MediaSource, ScreenState};
use crate::video_player::delegate::SessionId;
use crate::video_player::message::Message;

/// What the parent learned from a torn down fullscreen child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullscreenExit {
    pub child: SessionId,
    /// Screen state of the child at teardown (always Normal).
    pub screen_state: ScreenState,
    /// Child playhead at teardown, in seconds.
    pub playhead: f64,
}

impl PlaybackSession {
    /// Requests the fullscreen handoff.
    ///
    /// The playhead is captured now (the committed target if a slider seek
    /// is still outstanding); the child is built on the next tick.
    /// Ignored while a child is shown or a handoff is pending, and on a
    /// session that is itself fullscreen.
    pub fn enter_fullscreen(&mut self) {
        if self.screen.is_full() || self.child.is_some() || self.pending_handoff.is_some() {
            tracing::debug!(session = %self.id, "fullscreen already active, ignoring");
            return;
        }
        if self.engine.is_none() {
            return;
        }
        self.pending_handoff = Some(self.resume_position());
    }

    /// Tears the child down and returns what it reported.
    ///
    /// Cancels a pending handoff. Returns `None` when no child was shown.
    pub fn exit_fullscreen(&mut self) -> Option<FullscreenExit> {
        if self.pending_handoff.take().is_some() {
            tracing::debug!(session = %self.id, "pending fullscreen handoff cancelled");
        }
        let mut child = self.child.take()?;

        child.set_screen(ScreenState::Normal);
        child.pause();
        child.set_delegate(None);
        let report = FullscreenExit {
            child: child.id,
            screen_state: child.screen,
            playhead: child.playhead,
        };
        drop(child);

        if self.is_playing_intent() {
            self.pause();
        }
        if !self.live {
            self.playhead = report.playhead;
            self.display.slider.value = report.playhead;
            self.issue_seek(report.playhead, SeekPurpose::ReturnFromFullscreen);
        }
        tracing::debug!(session = %self.id, playhead = report.playhead, "fullscreen exited");
        self.notify(|delegate, _| delegate.on_exit_fullscreen());
        Some(report)
    }

    /// Fullscreen button: enters from an embedded session, exits otherwise.
    pub fn toggle_fullscreen(&mut self) {
        if self.child.is_some() || self.pending_handoff.is_some() {
            self.exit_fullscreen();
        } else {
            self.enter_fullscreen();
        }
    }

    /// Returns true while a child session is shown.
    pub fn is_fullscreen_active(&self) -> bool {
        self.child.is_some()
    }

    /// Returns true between `enter_fullscreen` and the next tick.
    pub fn is_handoff_pending(&self) -> bool {
        self.pending_handoff.is_some()
    }

    pub fn fullscreen_child(&self) -> Option<&PlaybackSession> {
        self.child.as_deref()
    }

    pub fn fullscreen_child_mut(&mut self) -> Option<&mut PlaybackSession> {
        self.child.as_deref_mut()
    }

    /// Delivers a child message; the child's fullscreen button exits.
    pub(super) fn route_to_child(&mut self, message: Message) {
        if message == Message::ToggleFullscreen {
            self.exit_fullscreen();
            return;
        }
        if let Some(child) = self.child.as_mut() {
            child.update(message);
        }
    }

    pub(super) fn run_pending_handoff(&mut self) {
        let Some(playhead) = self.pending_handoff.take() else {
            return;
        };

        let source =
            MediaSource::with_qualities(self.active_url.clone(), self.source.qualities.clone());
        let mut child = self.context.spawn_fullscreen(source, self.delegate.clone());
        child.playhead = playhead;
        child.set_controls_visible(true);
        child.issue_seek(playhead, SeekPurpose::ResumeAtPlayhead);

        self.pause();
        tracing::debug!(session = %self.id, child = %child.id, playhead, "fullscreen handoff");
        self.child = Some(Box::new(child));
        self.notify(|delegate, _| delegate.on_enter_fullscreen());
    }
}
