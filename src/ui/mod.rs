// SPDX-License-Identifier: MPL-2.0
//! User interface for the transport control.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read a
//! [`PlaybackSession`](crate::video_player::PlaybackSession) and emit
//! [`Message`](crate::video_player::Message)s, never mutating state.
//!
//! - [`controls`] - Transport overlay (play/pause, slider, labels, quality, fullscreen)
//! - [`styles`] - Overlay styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod styles;
