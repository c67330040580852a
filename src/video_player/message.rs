// SPDX-License-Identifier: MPL-2.0
//! Messages accepted by a playback session.

/// Inputs processed by [`PlaybackSession::update`](super::PlaybackSession::update).
///
/// Each message is handled to completion before the next one, so user
/// input, timer ticks and engine completions never interleave.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Play/pause button pressed.
    TogglePlayback,

    /// Slider dragged to a position in seconds; the first one starts seeking.
    SeekPreview(f64),

    /// Slider released; seek to the previewed position.
    SeekCommit,

    /// Fullscreen button pressed.
    ToggleFullscreen,

    /// Quality button pressed.
    ToggleQualityPanel,

    /// Entry selected in the quality list.
    SelectQuality(usize),

    /// Tap on the video surface.
    OverlayTapped,

    /// UI tick: drains engine notifications and polls timers.
    Tick,

    /// Message addressed to the fullscreen child.
    Fullscreen(Box<Message>),
}
