// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one transport control.
//!
//! The `App` wires a [`SimulatedCatalog`] and the system clock into a
//! [`PlaybackSession`], forwards widget messages to it, and feeds it a
//! periodic tick. While the fullscreen child is shown its controls replace
//! the parent's and the window switches to fullscreen mode.

use crate::config::{self, PlaybackSettings, UI_TICK_INTERVAL_MS};
use crate::domain::video::MediaSource;
use crate::ui::controls;
use crate::video_player::{
    self, Clock, PlaybackSession, SessionContext, SharedDelegate, SimulatedCatalog,
    SimulatedMedia, SystemClock, TracingDelegate,
};
use iced::{time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 540.0;

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Overrides the configuration directory.
    pub config_dir: Option<PathBuf>,
    pub source: MediaSource,
    /// What the simulated engine reports for every URL.
    pub media: SimulatedMedia,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Transport(video_player::Message),
    WindowOpened(window::Id),
}

pub struct App {
    session: PlaybackSession,
    window_id: Option<window::Id>,
    fullscreen: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default settings");
        }
        let settings = PlaybackSettings::from_config(&config);

        let clock: Rc<dyn Clock> = Rc::new(SystemClock);
        let catalog = Rc::new(SimulatedCatalog::new(Rc::clone(&clock)).with_fallback(flags.media));
        let context = SessionContext::new(catalog, clock, settings);

        let delegate: SharedDelegate = Rc::new(TracingDelegate);
        let mut session = context.spawn(flags.source, Some(delegate));
        session.set_controls_visible(true);

        let app = App {
            session,
            window_id: None,
            fullscreen: false,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("IcedTransport - {}", self.session.active_url())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Transport(message) => {
                self.session.update(message);
                self.sync_window_mode()
            }
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.session.fullscreen_child() {
            Some(child) => controls::view(child)
                .map(|message| Message::Transport(video_player::Message::Fullscreen(Box::new(message)))),
            None => controls::view(&self.session).map(Message::Transport),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick = time::every(Duration::from_millis(UI_TICK_INTERVAL_MS))
            .map(|_| Message::Transport(video_player::Message::Tick));
        Subscription::batch([tick, window::open_events().map(Message::WindowOpened)])
    }

    /// Follows the session's fullscreen handoff with the window mode.
    fn sync_window_mode(&mut self) -> Task<Message> {
        let desired = self.session.is_fullscreen_active();
        if self.fullscreen == desired {
            return Task::none();
        }
        let Some(window_id) = self.window_id else {
            return Task::none();
        };

        self.fullscreen = desired;
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }
}
