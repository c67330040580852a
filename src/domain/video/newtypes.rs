// SPDX-License-Identifier: MPL-2.0
//! Transport timing newtypes.
//!
//! This module provides type-safe wrappers for timer and seek values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// AutoHideDelay
// =============================================================================

/// Auto-hide delay bounds (in seconds).
pub mod auto_hide_bounds {
    /// Minimum delay before the overlay hides.
    pub const MIN: u32 = 1;
    /// Maximum delay before the overlay hides.
    pub const MAX: u32 = 30;
    /// Default delay before the overlay hides.
    pub const DEFAULT: u32 = 2;
}

/// Idle delay after which the transport overlay hides itself.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideDelay(u32);

impl AutoHideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(auto_hide_bounds::MIN, auto_hide_bounds::MAX))
    }

    /// Returns the delay in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(auto_hide_bounds::DEFAULT)
    }
}

// =============================================================================
// SyncInterval
// =============================================================================

/// Time sync interval bounds (in milliseconds).
pub mod sync_interval_bounds {
    /// Fastest allowed time sync cadence.
    pub const MIN: u64 = 250;
    /// Slowest allowed time sync cadence.
    pub const MAX: u64 = 5_000;
    /// One update per whole second.
    pub const DEFAULT: u64 = 1_000;
}

/// Period of the time sync loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncInterval(u64);

impl SyncInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(sync_interval_bounds::MIN, sync_interval_bounds::MAX))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SyncInterval {
    fn default() -> Self {
        Self(sync_interval_bounds::DEFAULT)
    }
}

// =============================================================================
// SeekTolerance
// =============================================================================

/// Allowed deviation around a seek target, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekTolerance {
    pub before_secs: f64,
    pub after_secs: f64,
}

impl SeekTolerance {
    /// Exact seek: the engine must land on the requested time.
    pub const ZERO: Self = Self {
        before_secs: 0.0,
        after_secs: 0.0,
    };

    /// Creates a tolerance window; negative or non-finite values become zero.
    #[must_use]
    pub fn new(before_secs: f64, after_secs: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            before_secs: sanitize(before_secs),
            after_secs: sanitize(after_secs),
        }
    }

    /// Returns true for an exact seek.
    #[must_use]
    pub fn is_exact(self) -> bool {
        self.before_secs == 0.0 && self.after_secs == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_hide_delay_clamps() {
        assert_eq!(AutoHideDelay::new(0).value(), auto_hide_bounds::MIN);
        assert_eq!(AutoHideDelay::new(100).value(), auto_hide_bounds::MAX);
        assert_eq!(AutoHideDelay::new(5).value(), 5);
    }

    #[test]
    fn auto_hide_delay_default_is_two_seconds() {
        assert_eq!(AutoHideDelay::default().as_duration(), Duration::from_secs(2));
    }

    #[test]
    fn sync_interval_clamps() {
        assert_eq!(SyncInterval::new(10).value(), sync_interval_bounds::MIN);
        assert_eq!(SyncInterval::new(60_000).value(), sync_interval_bounds::MAX);
        assert_eq!(
            SyncInterval::default().as_duration(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn seek_tolerance_sanitizes() {
        let tolerance = SeekTolerance::new(-1.0, f64::NAN);
        assert!(tolerance.is_exact());
        assert!(SeekTolerance::ZERO.is_exact());
        assert!(!SeekTolerance::new(0.5, 0.0).is_exact());
    }
}
