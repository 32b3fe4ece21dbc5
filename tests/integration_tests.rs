//! Integration tests for the frame loop pieces wired together without a terminal.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_fps::core::{FrameClock, Map, World};
use tui_fps::input::{KeyTracker, SharedIntents};
use tui_fps::term::{FrameBuffer, FrameSink, FrameView, Hud};
use tui_fps::types::Pose;

/// Sink that keeps a copy of each presented frame.
#[derive(Default)]
struct RecordingSink {
    frames: Vec<FrameBuffer>,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, fb: &mut FrameBuffer) -> anyhow::Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }
}

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_held_key_moves_player_through_shared_snapshot() {
    let shared = Arc::new(SharedIntents::new());
    let mut tracker = KeyTracker::with_release_timeout(None);
    let mut world = World::new(Map::level().unwrap(), Pose::start());

    tracker.handle_event(key(KeyCode::Char('s'), KeyEventKind::Press), 0);
    shared.store(tracker.intents());

    let start = world.pose();
    let pose = world.advance(0.05, shared.load());
    assert!(pose.y < start.y, "back should move along -y at angle 0");

    tracker.handle_event(key(KeyCode::Char('s'), KeyEventKind::Release), 60);
    shared.store(tracker.intents());
    let still = world.advance(0.05, shared.load());
    assert_eq!(still, pose);
}

#[test]
fn test_frame_loop_presents_changing_frames() {
    let view = FrameView::default();
    let mut world = World::new(Map::level().unwrap(), Pose::start());
    let mut fb = FrameBuffer::new(view.width(), view.height());
    let mut sink = RecordingSink::default();
    let mut clock = FrameClock::new();

    let mut tracker = KeyTracker::with_release_timeout(None);
    tracker.handle_event(key(KeyCode::Right, KeyEventKind::Press), 0);

    for _ in 0..3 {
        let _ = clock.tick();
        world.advance(0.1, tracker.intents());
        view.render_into(&world, Hud { fps: 10.0 }, &mut fb);
        sink.present(&mut fb).unwrap();
    }

    assert_eq!(sink.frames.len(), 3);
    assert_ne!(sink.frames[0], sink.frames[1]);
    assert_ne!(sink.frames[1], sink.frames[2]);
    assert!(world.pose().angle > 0.0);
}

#[test]
fn test_quit_request_is_visible_across_threads() {
    let shared = Arc::new(SharedIntents::new());
    let remote = Arc::clone(&shared);
    std::thread::spawn(move || remote.request_quit())
        .join()
        .unwrap();
    assert!(shared.quit_requested());
}
