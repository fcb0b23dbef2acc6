//! Trigger and tick behavior of the ripple overlay, driven through a
//! recording surface and sound player.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clickripple::animation::{RippleFrame, Tick};
use clickripple::events::{AppEvent, EventBus, MouseButton};
use clickripple::handlers::{dispatch_events, Dispatch};
use clickripple::model::RippleConfig;
use clickripple::overlay::{OverlaySurface, Placement, RippleOverlay};
use clickripple::sound::{ClickSounds, SoundPlayer};
use clickripple::SoundError;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Place(Placement),
    Show,
    Hide,
    Render(RippleFrame),
    StartTicks(u32),
    StopTicks,
}

#[derive(Default)]
struct FakeSurface {
    calls: Vec<Call>,
}

impl FakeSurface {
    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(*c)).count()
    }
}

impl OverlaySurface for FakeSurface {
    fn place(&mut self, placement: Placement) {
        self.calls.push(Call::Place(placement));
    }
    fn show(&mut self) {
        self.calls.push(Call::Show);
    }
    fn hide(&mut self) {
        self.calls.push(Call::Hide);
    }
    fn render(&mut self, frame: &RippleFrame) {
        self.calls.push(Call::Render(*frame));
    }
    fn start_ticks(&mut self, interval_ms: u32) {
        self.calls.push(Call::StartTicks(interval_ms));
    }
    fn stop_ticks(&mut self) {
        self.calls.push(Call::StopTicks);
    }
}

#[derive(Clone, Default)]
struct RecordingPlayer {
    played: Rc<RefCell<Vec<PathBuf>>>,
    fail: bool,
}

impl SoundPlayer for RecordingPlayer {
    fn play_async(&self, path: &Path) -> Result<(), SoundError> {
        self.played.borrow_mut().push(path.to_path_buf());
        if self.fail {
            Err(SoundError::Rejected(path.to_path_buf()))
        } else {
            Ok(())
        }
    }
}

type TestOverlay = RippleOverlay<FakeSurface, RecordingPlayer>;

fn overlay_with_folder(folder: PathBuf) -> (TestOverlay, RecordingPlayer) {
    let player = RecordingPlayer::default();
    let sounds = ClickSounds::with_seed(folder, player.clone(), 7);
    let overlay = RippleOverlay::new(RippleConfig::default(), FakeSurface::default(), sounds);
    (overlay, player)
}

fn silent_overlay() -> TestOverlay {
    overlay_with_folder(PathBuf::from("/definitely/not/here/click_sounds")).0
}

/// Tick until the ripple hides itself; returns the number of ticks.
fn run_to_end(overlay: &mut TestOverlay) -> u32 {
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks <= 1000, "ripple never finished");
        if overlay.tick() == Tick::Finished {
            return ticks;
        }
    }
}

#[test]
fn trigger_at_500_500_runs_eighteen_ticks_then_hides() {
    let mut overlay = silent_overlay();
    overlay.trigger(500, 500);

    assert_eq!(run_to_end(&mut overlay), 18);

    let calls = &overlay.surface().calls;
    assert_eq!(calls[calls.len() - 2], Call::StopTicks);
    assert_eq!(calls[calls.len() - 1], Call::Hide);
    // Frame 0 on trigger, frames 1..=17 on ticks
    assert_eq!(overlay.surface().count(|c| matches!(c, Call::Render(_))), 18);
}

#[test]
fn trigger_sets_up_window_in_order() {
    let mut overlay = silent_overlay();
    overlay.trigger(500, 500);

    let calls = &overlay.surface().calls;
    assert_eq!(calls[0], Call::Place(Placement::centered_on(500, 500, 200)));
    assert_eq!(calls[1], Call::Show);
    assert!(matches!(calls[2], Call::Render(_)));
    assert_eq!(calls[3], Call::StartTicks(16));
}

#[test]
fn window_center_matches_click() {
    let mut overlay = silent_overlay();
    for &(x, y) in &[(500, 500), (0, 0), (-1920, 300), (3839, 2159), (7, -3)] {
        overlay.trigger(x, y);
        let placement = overlay.placement().unwrap();
        assert_eq!(placement.size, 200);
        assert_eq!(placement.center(), (x, y));
    }
}

#[test]
fn first_frame_starts_small_and_opaque() {
    let mut overlay = silent_overlay();
    overlay.trigger(10, 10);
    let frame = match overlay.surface().calls[2] {
        Call::Render(frame) => frame,
        ref other => panic!("expected render, got {:?}", other),
    };
    assert_eq!(frame.radius, 12.0);
    assert_eq!(frame.thickness, 9.0);
    assert_eq!(frame.ring.a, 1.0);
    assert_eq!(frame.glow.alpha_byte(), 80);
}

#[test]
fn rendered_radius_grows_and_opacity_falls() {
    let mut overlay = silent_overlay();
    overlay.trigger(10, 10);
    run_to_end(&mut overlay);

    let frames: Vec<RippleFrame> = overlay
        .surface()
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Render(f) => Some(*f),
            _ => None,
        })
        .collect();
    for pair in frames.windows(2) {
        assert!(pair[1].radius > pair[0].radius);
        assert!(pair[1].thickness < pair[0].thickness);
        assert!(pair[1].ring.a < pair[0].ring.a);
    }
}

#[test]
fn frame_counter_never_exceeds_total() {
    let mut overlay = silent_overlay();
    overlay.trigger(1, 1);
    for _ in 0..50 {
        overlay.tick();
        let anim = overlay.animation();
        assert!(anim.frame_index() <= anim.total_frames());
    }
}

#[test]
fn ticks_after_finish_do_nothing() {
    let mut overlay = silent_overlay();
    overlay.trigger(1, 1);
    run_to_end(&mut overlay);
    let before = overlay.surface().calls.len();

    assert_eq!(overlay.tick(), Tick::Idle);
    assert_eq!(overlay.surface().calls.len(), before);
}

#[test]
fn retrigger_while_active_restarts_single_counter() {
    let mut overlay = silent_overlay();
    overlay.trigger(100, 100);
    for _ in 0..10 {
        overlay.tick();
    }
    assert_eq!(overlay.animation().frame_index(), 10);

    overlay.trigger(300, 300);
    assert_eq!(overlay.animation().frame_index(), 0);
    assert_eq!(overlay.placement().unwrap().center(), (300, 300));

    // A full budget from the restart, not what was left of the first ripple.
    assert_eq!(run_to_end(&mut overlay), 18);
    assert_eq!(overlay.surface().count(|c| *c == Call::Hide), 1);
}

#[test]
fn no_sound_folder_means_no_playback() {
    let (mut overlay, player) = overlay_with_folder(PathBuf::from("/definitely/not/here"));
    overlay.trigger(500, 500);
    assert!(player.played.borrow().is_empty());
    assert!(overlay.animation().is_active());
}

#[test]
fn folder_without_wav_means_no_playback() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), b"not a sound").unwrap();
    fs::write(dir.path().join("song.mp3"), b"not a wav").unwrap();

    let (mut overlay, player) = overlay_with_folder(dir.path().to_path_buf());
    overlay.trigger(500, 500);
    assert!(player.played.borrow().is_empty());
}

#[test]
fn trigger_plays_one_wav_from_folder() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pop.wav"), b"RIFF").unwrap();
    fs::write(dir.path().join("readme.txt"), b"").unwrap();

    let (mut overlay, player) = overlay_with_folder(dir.path().to_path_buf());
    overlay.trigger(500, 500);
    assert_eq!(*player.played.borrow(), vec![dir.path().join("pop.wav")]);
}

#[test]
fn playback_failure_still_animates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pop.wav"), b"RIFF").unwrap();

    let player = RecordingPlayer {
        fail: true,
        ..RecordingPlayer::default()
    };
    let sounds = ClickSounds::new(dir.path().to_path_buf(), player.clone());
    let mut overlay = RippleOverlay::new(RippleConfig::default(), FakeSurface::default(), sounds);

    overlay.trigger(500, 500);
    assert_eq!(player.played.borrow().len(), 1);
    assert_eq!(run_to_end(&mut overlay), 18);
}

#[test]
fn dispatched_clicks_trigger_in_order() {
    let mut overlay = silent_overlay();
    let bus = EventBus::new();
    let publisher = bus.publisher();

    publisher.publish(AppEvent::click(100, 100, MouseButton::Left));
    publisher.publish(AppEvent::click(640, 480, MouseButton::Right));

    assert_eq!(dispatch_events(bus.drain(), &mut overlay), Dispatch::Continue);
    assert_eq!(overlay.placement().unwrap().center(), (640, 480));
    assert_eq!(overlay.surface().count(|c| *c == Call::Show), 2);
}

#[test]
fn clicks_from_another_thread_reach_the_overlay() {
    let mut overlay = silent_overlay();
    let bus = EventBus::new();
    let publisher = bus.publisher();

    std::thread::spawn(move || publisher.publish(AppEvent::click(42, 24, MouseButton::Middle)))
        .join()
        .unwrap();

    dispatch_events(bus.drain(), &mut overlay);
    assert_eq!(overlay.placement().unwrap().center(), (42, 24));
}

#[test]
fn quit_stops_dispatch() {
    let mut overlay = silent_overlay();
    let events = vec![AppEvent::Quit, AppEvent::click(1, 1, MouseButton::Left)];
    assert_eq!(dispatch_events(events, &mut overlay), Dispatch::Quit);
    assert!(overlay.surface().calls.is_empty());
}

#[test]
fn empty_batch_continues() {
    let mut overlay = silent_overlay();
    assert_eq!(dispatch_events(Vec::new(), &mut overlay), Dispatch::Continue);
}
