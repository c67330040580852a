// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`video`]: Transport state enums ([`PlaybackState`](video::PlaybackState),
//!   [`SeekState`](video::SeekState), [`ScreenState`](video::ScreenState)),
//!   media sources ([`MediaSource`](video::MediaSource),
//!   [`QualityVariant`](video::QualityVariant)) and timing newtypes
//!   ([`AutoHideDelay`](video::AutoHideDelay), [`SyncInterval`](video::SyncInterval),
//!   [`SeekTolerance`](video::SeekTolerance))

pub mod video;
