// SPDX-License-Identifier: MPL-2.0
//! `iced_transport` is a video transport control built with the Iced GUI framework.
//!
//! It provides a playback state machine, a seek slider coordinator, a time
//! sync loop, quality switching and a fullscreen handoff, driven against an
//! injected playback engine.

#![doc(html_root_url = "https://docs.rs/iced_transport/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
