// SPDX-License-Identifier: MPL-2.0
//! Quality variant selection.

use super::{PlaybackSession, SeekPurpose};

impl PlaybackSession {
    /// Opens or closes the quality list.
    ///
    /// Auto-hide is suspended while the list is open. No-op when the source
    /// has no variants.
    pub fn toggle_quality_panel(&mut self) {
        if !self.display.quality_enabled {
            return;
        }
        let open = !self.display.quality_panel_open;
        self.display.quality_panel_open = open;
        if open {
            self.auto_hide.stop();
        } else {
            self.restart_auto_hide();
        }
    }

    /// Selects the variant at `index`; out-of-range indices only close the list.
    pub fn select_quality(&mut self, index: usize) {
        match self.source.quality(index).map(|quality| quality.url.clone()) {
            Some(url) => self.change_quality(&url),
            None => {
                tracing::warn!(session = %self.id, index, "no quality variant at index");
                self.close_quality_panel();
            }
        }
    }

    /// Swaps the engine source to `url` and resumes at the current playhead.
    ///
    /// While a slider seek is outstanding the committed target wins over the
    /// playhead. The new source is checked for a finite duration again. A
    /// rejected URL keeps the previous source bound.
    pub fn change_quality(&mut self, url: &str) {
        if let Some(engine) = self.engine.as_mut() {
            match engine.replace_source(url) {
                Ok(()) => {
                    let resume_at = self.resume_position();
                    tracing::debug!(session = %self.id, url, resume_at, "quality changed");
                    self.active_url = url.to_string();
                    self.setup_time_sync();
                    if self.live {
                        self.resume_live();
                    } else {
                        let target = resume_at.min(self.duration);
                        self.issue_seek(target, SeekPurpose::ResumeAtPlayhead);
                    }
                }
                Err(err) => {
                    tracing::warn!(session = %self.id, error = %err, "quality change rejected");
                }
            }
        }
        self.close_quality_panel();
    }

    /// Live sources cannot seek: resume right away and end any drag.
    fn resume_live(&mut self) {
        let ends_drag = self
            .pending_seek
            .take()
            .is_some_and(|pending| pending.ends_drag);
        if self.child.is_none() {
            self.play();
        }
        if ends_drag || self.seek_state.is_seeking() {
            self.finish_slider_seek();
        }
    }

    fn close_quality_panel(&mut self) {
        self.display.quality_panel_open = false;
        self.restart_auto_hide();
    }
}
