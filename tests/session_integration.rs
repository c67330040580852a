// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the transport control.
//!
//! These tests drive sessions through the public API only, with a manual
//! clock and the simulated engine, and check the observable properties of
//! the playback state machine, the seek coordinator, the time sync loop,
//! quality switching and the fullscreen handoff.

use iced_transport::config::{PlaybackSettings, LIVE_LABEL};
use iced_transport::domain::video::{
    MediaSource, PlaybackState, QualityVariant, ScreenState, SeekState,
};
use iced_transport::video_player::time_format::format_clock;
use iced_transport::video_player::{
    EngineCall, ManualClock, Message, PlaybackDelegate, PlaybackSession, SessionContext,
    SessionId, SharedDelegate, SimulatedCatalog, SimulatedMedia,
};
use std::cell::RefCell;
use std::rc::Rc;

const URL: &str = "https://cdn.example.com/movie/master.m3u8";
const URL_720: &str = "https://cdn.example.com/movie/720.m3u8";
const URL_1080: &str = "https://cdn.example.com/movie/1080.m3u8";

#[derive(Default)]
struct Recorder {
    states: RefCell<Vec<(SessionId, PlaybackState)>>,
    seeks: RefCell<Vec<SeekState>>,
    times: RefCell<Vec<f64>>,
    fullscreen: RefCell<Vec<&'static str>>,
}

impl PlaybackDelegate for Recorder {
    fn on_state_changed(&self, session: SessionId, state: PlaybackState) {
        self.states.borrow_mut().push((session, state));
    }

    fn on_seek_state_changed(&self, _session: SessionId, state: SeekState) {
        self.seeks.borrow_mut().push(state);
    }

    fn on_time_update(&self, _session: SessionId, current_secs: f64, _total_secs: f64) {
        self.times.borrow_mut().push(current_secs);
    }

    fn on_enter_fullscreen(&self) {
        self.fullscreen.borrow_mut().push("enter");
    }

    fn on_exit_fullscreen(&self) {
        self.fullscreen.borrow_mut().push("exit");
    }
}

struct Fixture {
    clock: ManualClock,
    catalog: Rc<SimulatedCatalog>,
    recorder: Rc<Recorder>,
    context: SessionContext,
}

impl Fixture {
    fn new(media: SimulatedMedia) -> Self {
        let clock = ManualClock::new();
        let catalog = Rc::new(SimulatedCatalog::new(Rc::new(clock.clone())).with_fallback(media));
        let context = SessionContext::new(
            catalog.clone(),
            Rc::new(clock.clone()),
            PlaybackSettings::default(),
        );
        Self {
            clock,
            catalog,
            recorder: Rc::new(Recorder::default()),
            context,
        }
    }

    fn session(&self, source: MediaSource) -> PlaybackSession {
        let delegate: SharedDelegate = self.recorder.clone();
        self.context.spawn(source, Some(delegate))
    }

    fn run(&self, session: &mut PlaybackSession, secs: f64) {
        self.clock.advance_secs(secs);
        session.update(Message::Tick);
    }
}

fn movie() -> MediaSource {
    MediaSource::with_qualities(
        URL,
        vec![
            QualityVariant::new("720p", URL_720),
            QualityVariant::new("1080p", URL_1080),
        ],
    )
}

#[test]
fn test_format_layout_for_every_second_up_to_three_hours() {
    assert_eq!(format_clock(65), "01:05");
    assert_eq!(format_clock(3661), "1:01:01");

    for secs in 0..(3 * 3600) {
        let formatted = format_clock(secs);
        let fields: Vec<&str> = formatted.split(':').collect();
        if secs >= 3600 {
            assert_eq!(fields.len(), 3, "{secs} -> {formatted}");
            assert!(!fields[0].starts_with('0'), "{secs} -> {formatted}");
        } else {
            assert_eq!(fields.len(), 2, "{secs} -> {formatted}");
        }
        assert!(
            fields[fields.len() - 2..].iter().all(|f| f.len() == 2),
            "{secs} -> {formatted}"
        );
    }
}

#[test]
fn test_toggles_alternate_and_notify_once_each() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(movie());

    for _ in 0..3 {
        session.update(Message::TogglePlayback);
        session.update(Message::TogglePlayback);
    }

    let states: Vec<PlaybackState> = fixture
        .recorder
        .states
        .borrow()
        .iter()
        .map(|(_, state)| *state)
        .collect();
    assert_eq!(
        states,
        vec![
            PlaybackState::Played,
            PlaybackState::Paused,
            PlaybackState::Played,
            PlaybackState::Paused,
            PlaybackState::Played,
            PlaybackState::Paused,
        ]
    );
}

#[test]
fn test_drag_freezes_displayed_position() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(movie());
    session.update(Message::TogglePlayback);
    fixture.run(&mut session, 20.0);

    session.update(Message::SeekPreview(200.0));
    let synced_before = fixture.recorder.times.borrow().len();
    for _ in 0..10 {
        fixture.run(&mut session, 1.0);
        assert_eq!(session.display().slider.value, 200.0);
    }
    assert_eq!(fixture.recorder.times.borrow().len(), synced_before);

    session.update(Message::SeekCommit);
    session.update(Message::Tick);
    assert_eq!(session.seek_state(), SeekState::Idle);
    assert_eq!(
        *fixture.recorder.seeks.borrow(),
        vec![SeekState::Seeking, SeekState::Idle]
    );

    fixture.run(&mut session, 1.0);
    assert_eq!(session.display().start_label.as_deref(), Some("03:21"));
}

#[test]
fn test_double_enter_creates_a_single_child() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(movie());

    session.enter_fullscreen();
    session.enter_fullscreen();
    session.update(Message::Tick);
    session.enter_fullscreen();
    session.update(Message::Tick);

    assert!(session.is_fullscreen_active());
    assert_eq!(fixture.catalog.handles().len(), 2);
    assert_eq!(*fixture.recorder.fullscreen.borrow(), vec!["enter"]);
}

#[test]
fn test_child_playhead_matches_parent_at_call_time() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(movie());
    session.update(Message::TogglePlayback);
    fixture.run(&mut session, 47.0);
    let parent_playhead = session.playhead();

    session.update(Message::ToggleFullscreen);
    session.update(Message::Tick);

    let child = session.fullscreen_child().expect("child session");
    assert_eq!(child.playhead(), parent_playhead);
    assert_eq!(child.screen_state(), ScreenState::Full);
    assert_eq!(child.source().qualities, movie().qualities);
    assert!(fixture.catalog.handles()[1]
        .calls()
        .contains(&EngineCall::Seek(parent_playhead)));
}

#[test]
fn test_exit_leaves_parent_paused_and_child_normal() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(movie());
    session.update(Message::TogglePlayback);
    fixture.run(&mut session, 5.0);
    session.enter_fullscreen();
    session.update(Message::Tick);
    fixture.run(&mut session, 30.0);

    let exit = session.exit_fullscreen().expect("child was shown");
    session.update(Message::Tick);

    assert_eq!(exit.screen_state, ScreenState::Normal);
    assert_eq!(session.state(), PlaybackState::Paused);
    assert!(!fixture.catalog.handles()[0].is_playing());
    assert!(fixture.catalog.handles()[1].is_released());
    assert_eq!(*fixture.recorder.fullscreen.borrow(), vec!["enter", "exit"]);

    let child_states: Vec<PlaybackState> = fixture
        .recorder
        .states
        .borrow()
        .iter()
        .filter(|(id, _)| *id == exit.child)
        .map(|(_, state)| *state)
        .collect();
    assert_eq!(child_states.last(), Some(&PlaybackState::Paused));
}

#[test]
fn test_live_stream_hides_seek_control() {
    let fixture = Fixture::new(SimulatedMedia::live());
    let mut session = fixture.session(MediaSource::new(URL));

    assert!(session.display().slider.hidden);
    assert_eq!(session.display().end_label, LIVE_LABEL);

    session.update(Message::TogglePlayback);
    fixture.run(&mut session, 5.0);
    assert!(fixture.recorder.times.borrow().is_empty());
    assert_eq!(session.display().end_label, LIVE_LABEL);
}

#[test]
fn test_quality_switch_resumes_at_playhead() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(movie());
    session.update(Message::TogglePlayback);
    fixture.run(&mut session, 73.0);

    session.update(Message::ToggleQualityPanel);
    session.update(Message::SelectQuality(1));
    session.update(Message::Tick);

    let engine = &fixture.catalog.handles()[0];
    assert_eq!(engine.url(), URL_1080);
    assert_eq!(engine.position(), 73.0);
    assert!(engine.is_playing());
    assert_eq!(session.state(), PlaybackState::Played);
    assert!(!session.display().quality_panel_open);
}

#[test]
fn test_malformed_url_leaves_controls_inert() {
    let fixture = Fixture::new(SimulatedMedia::vod(300.0));
    let mut session = fixture.session(MediaSource::new("not a url"));

    session.update(Message::TogglePlayback);
    session.update(Message::SeekPreview(10.0));
    session.update(Message::SeekCommit);
    session.update(Message::ToggleFullscreen);
    fixture.run(&mut session, 3.0);

    assert!(!session.has_engine());
    assert_eq!(session.state(), PlaybackState::Ready);
    assert!(fixture.recorder.states.borrow().is_empty());
    assert!(fixture.catalog.handles().is_empty());
}
