// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Transport overlay auto-hide delay
//! - **Sync**: Time sync loop cadence
//! - **Display**: Fixed transport labels

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default idle delay before the transport overlay hides (in seconds).
pub const DEFAULT_AUTO_HIDE_SECS: u32 = 2;

/// Minimum auto-hide delay (in seconds).
pub const MIN_AUTO_HIDE_SECS: u32 = 1;

/// Maximum auto-hide delay (in seconds).
pub const MAX_AUTO_HIDE_SECS: u32 = 30;

// ==========================================================================
// Sync Defaults
// ==========================================================================

/// Default time sync cadence (one update per whole second).
pub const DEFAULT_SYNC_INTERVAL_MS: u64 = 1_000;

/// Minimum time sync cadence.
pub const MIN_SYNC_INTERVAL_MS: u64 = 250;

/// Maximum time sync cadence.
pub const MAX_SYNC_INTERVAL_MS: u64 = 5_000;

/// Cadence of the UI tick that polls timers and engine notifications.
pub const UI_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// End-time label shown for streams without a finite duration.
pub const LIVE_LABEL: &str = "Live";

/// Play button label while paused.
pub const PLAY_LABEL: &str = "Play";

/// Play button label while playing.
pub const PAUSE_LABEL: &str = "Pause";

/// Fullscreen button label in the embedded presentation.
pub const ENTER_FULLSCREEN_LABEL: &str = "Fullscreen";

/// Fullscreen button label in the fullscreen presentation.
pub const EXIT_FULLSCREEN_LABEL: &str = "Exit fullscreen";

/// Label of the button opening the quality list.
pub const QUALITY_LABEL: &str = "Quality";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_HIDE_SECS > 0);
    assert!(MAX_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS <= MAX_AUTO_HIDE_SECS);

    assert!(MIN_SYNC_INTERVAL_MS > 0);
    assert!(MAX_SYNC_INTERVAL_MS >= MIN_SYNC_INTERVAL_MS);
    assert!(DEFAULT_SYNC_INTERVAL_MS >= MIN_SYNC_INTERVAL_MS);
    assert!(DEFAULT_SYNC_INTERVAL_MS <= MAX_SYNC_INTERVAL_MS);

    // The UI tick must be finer than the sync cadence or ticks get skipped.
    assert!(UI_TICK_INTERVAL_MS < MIN_SYNC_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::newtypes::{auto_hide_bounds, sync_interval_bounds};

    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(auto_hide_bounds::MIN, MIN_AUTO_HIDE_SECS);
        assert_eq!(auto_hide_bounds::MAX, MAX_AUTO_HIDE_SECS);
        assert_eq!(auto_hide_bounds::DEFAULT, DEFAULT_AUTO_HIDE_SECS);

        assert_eq!(sync_interval_bounds::MIN, MIN_SYNC_INTERVAL_MS);
        assert_eq!(sync_interval_bounds::MAX, MAX_SYNC_INTERVAL_MS);
        assert_eq!(sync_interval_bounds::DEFAULT, DEFAULT_SYNC_INTERVAL_MS);
    }
}
