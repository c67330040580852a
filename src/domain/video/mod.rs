// SPDX-License-Identifier: MPL-2.0
//! Video transport domain types.
//!
//! This module contains playback-related value objects and enums that are
//! independent of any presentation or engine concerns.

pub mod media;
pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use media::{is_well_formed_url, MediaSource, QualityVariant};
pub use newtypes::{AutoHideDelay, SeekTolerance, SyncInterval};
pub use playback::{PlaybackState, ScreenState, SeekState};
