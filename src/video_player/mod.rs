// SPDX-License-Identifier: MPL-2.0
//! Video transport control for IcedTransport.
//!
//! This module drives an external playback engine through the
//! [`PlaybackEngine`] contract and keeps the transport overlay (play/pause,
//! seek slider, time labels, quality list, fullscreen) in sync with it.
//! Everything runs on the UI context: timers and engine notifications are
//! polled from [`Message::Tick`].

pub mod clock;
pub mod delegate;
pub mod display;
pub mod engine;
pub mod message;
pub mod session;
pub mod simulated;
pub mod time_format;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use delegate::{PlaybackDelegate, SessionId, SharedDelegate, TracingDelegate};
pub use display::{SliderDisplay, TransportDisplay};
pub use engine::{
    event_channel, EngineEvent, EngineEventReceiver, EngineEventSender, EngineFactory,
    EngineStatus, PlaybackEngine,
};
pub use message::Message;
pub use session::{FullscreenExit, PlaybackSession, SessionContext};
pub use simulated::{EngineCall, SimulatedCatalog, SimulatedHandle, SimulatedMedia};
pub use time_format::format_clock;
