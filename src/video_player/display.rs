// SPDX-License-Identifier: MPL-2.0
//! Display model of the transport overlay.
//!
//! The session writes this model; the view layer only reads it. Keeping the
//! labels and slider values here makes every visible effect of a transition
//! observable without rendering anything.

use crate::config::{ENTER_FULLSCREEN_LABEL, EXIT_FULLSCREEN_LABEL, LIVE_LABEL, PLAY_LABEL};
use crate::domain::video::ScreenState;
use crate::video_player::time_format::format_labels;

/// Seek slider model.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderDisplay {
    /// Position shown to the user, in seconds.
    pub value: f64,
    /// Upper bound (media duration), in seconds.
    pub max: f64,
    /// Live streams have no seekable range.
    pub hidden: bool,
}

/// Everything the transport overlay shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportDisplay {
    /// Whether the overlay is currently shown.
    pub overlay_visible: bool,
    /// Label of the play/pause button.
    pub play_label: &'static str,
    pub slider: SliderDisplay,
    /// Current time label; `None` when hidden (live streams).
    pub start_label: Option<String>,
    /// Total duration label, or the live marker.
    pub end_label: String,
    /// Label of the fullscreen button.
    pub fullscreen_label: &'static str,
    /// Whether the quality selector can be opened.
    pub quality_enabled: bool,
    /// Whether the quality list is shown.
    pub quality_panel_open: bool,
}

impl TransportDisplay {
    pub(crate) fn new(screen: ScreenState, quality_enabled: bool) -> Self {
        Self {
            overlay_visible: false,
            play_label: PLAY_LABEL,
            slider: SliderDisplay {
                value: 0.0,
                max: 0.0,
                hidden: false,
            },
            start_label: Some("00:00".to_string()),
            end_label: "00:00".to_string(),
            fullscreen_label: fullscreen_label(screen),
            quality_enabled,
            quality_panel_open: false,
        }
    }

    /// Writes position and labels for a time sync update.
    pub(crate) fn show_time(&mut self, current_secs: f64, total_secs: f64) {
        let (current, total) = format_labels(current_secs, total_secs);
        self.slider.value = current_secs;
        self.start_label = Some(current);
        self.end_label = total;
    }

    /// Shows the slider over `[0, total_secs]` at `current_secs`.
    pub(crate) fn show_seekable(&mut self, current_secs: f64, total_secs: f64) {
        self.slider.hidden = false;
        self.slider.max = total_secs;
        self.show_time(current_secs, total_secs);
    }

    /// Switches the overlay to live mode: no slider, no start label.
    pub(crate) fn show_live(&mut self) {
        self.slider.hidden = true;
        self.start_label = None;
        self.end_label = LIVE_LABEL.to_string();
    }

    pub(crate) fn set_screen(&mut self, screen: ScreenState) {
        self.fullscreen_label = fullscreen_label(screen);
    }
}

fn fullscreen_label(screen: ScreenState) -> &'static str {
    match screen {
        ScreenState::Normal => ENTER_FULLSCREEN_LABEL,
        ScreenState::Full => EXIT_FULLSCREEN_LABEL,
    }
}
