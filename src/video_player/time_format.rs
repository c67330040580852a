// SPDX-License-Identifier: MPL-2.0
//! Clock-style formatting of playback times.
//!
//! `H:MM:SS` when the value has an hour component, `MM:SS` otherwise.
//! Minutes and seconds are always two digits; hours are not padded.
//!
//! # Examples
//!
//! ```
//! use iced_transport::video_player::time_format::format_clock;
//!
//! assert_eq!(format_clock(65), "01:05");
//! assert_eq!(format_clock(3661), "1:01:01");
//! ```

/// Splits whole seconds into `(hours, minutes, seconds)`.
#[must_use]
pub fn split_clock(total_secs: u64) -> (u64, u64, u64) {
    (
        total_secs / 3600,
        (total_secs % 3600) / 60,
        (total_secs % 3600) % 60,
    )
}

/// Formats whole seconds, showing hours only when non-zero.
#[must_use]
pub fn format_clock(total_secs: u64) -> String {
    format_with_hours(total_secs, total_secs >= 3600)
}

/// Formats `secs` using the hour layout dictated by `reference_secs`.
///
/// Both transport labels use the total duration as reference so the current
/// time keeps the same shape as the end time (`0:05:10 / 1:20:00`).
#[must_use]
pub fn format_clock_for(secs: u64, reference_secs: u64) -> String {
    format_with_hours(secs, reference_secs >= 3600 || secs >= 3600)
}

fn format_with_hours(total_secs: u64, show_hours: bool) -> String {
    let (hours, minutes, seconds) = split_clock(total_secs);
    if show_hours {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Truncates a playback time to whole seconds, mapping negatives and NaN to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_secs(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        secs.trunc() as u64
    } else {
        0
    }
}

/// Formatted `(current, total)` labels for the transport bar.
#[must_use]
pub fn format_labels(current_secs: f64, total_secs: f64) -> (String, String) {
    let total = whole_secs(total_secs);
    (
        format_clock_for(whole_secs(current_secs), total),
        format_clock(total),
    )
}
