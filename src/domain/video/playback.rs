// SPDX-License-Identifier: MPL-2.0
//! Transport state machine enums.
//!
//! A session holds exactly one value of each enum at any time:
//! - [`PlaybackState`]: what the engine is doing from the user's point of view
//! - [`SeekState`]: whether the user currently owns the seek slider
//! - [`ScreenState`]: whether the session is the fullscreen handoff child

use std::fmt;

/// Represents the current playback state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Media is loaded but playback was never started.
    #[default]
    Ready,
    /// Media is playing.
    Played,
    /// Media is paused at the current playhead.
    Paused,
    /// The engine reported that it is waiting for data.
    ///
    /// Advisory only: the session remembers whether it was played or paused
    /// before buffering started and restores that state afterwards.
    Buffering,
    /// The engine reached the end of the media.
    Finished,
}

impl PlaybackState {
    /// Returns true if the media is playing.
    #[must_use]
    pub fn is_played(self) -> bool {
        matches!(self, Self::Played)
    }

    /// Returns true if the media is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the media reached its end.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Returns true if the engine is buffering.
    #[must_use]
    pub fn is_buffering(self) -> bool {
        matches!(self, Self::Buffering)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ready => "ready",
            Self::Played => "played",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Ownership of the seek slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekState {
    /// The time sync loop drives the slider.
    #[default]
    Idle,
    /// The user is dragging the slider; autonomous updates are suspended.
    Seeking,
}

impl SeekState {
    /// Returns true while the user is dragging the slider.
    #[must_use]
    pub fn is_seeking(self) -> bool {
        matches!(self, Self::Seeking)
    }
}

/// Presentation mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Embedded presentation.
    #[default]
    Normal,
    /// Fullscreen presentation; only the handoff child holds this value.
    Full,
}

impl ScreenState {
    /// Returns true for the fullscreen presentation.
    #[must_use]
    pub fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PlaybackState::default(), PlaybackState::Ready);
        assert_eq!(SeekState::default(), SeekState::Idle);
        assert_eq!(ScreenState::default(), ScreenState::Normal);
    }

    #[test]
    fn test_state_checks() {
        assert!(PlaybackState::Played.is_played());
        assert!(!PlaybackState::Paused.is_played());

        assert!(PlaybackState::Paused.is_paused());
        assert!(!PlaybackState::Ready.is_paused());

        assert!(PlaybackState::Finished.is_finished());
        assert!(PlaybackState::Buffering.is_buffering());

        assert!(SeekState::Seeking.is_seeking());
        assert!(!SeekState::Idle.is_seeking());

        assert!(ScreenState::Full.is_full());
        assert!(!ScreenState::Normal.is_full());
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(PlaybackState::Played.to_string(), "played");
        assert_eq!(PlaybackState::Buffering.to_string(), "buffering");
    }
}
