//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key counts as held until it is released or, when releases are not
//! reported, until no press/repeat for it has arrived within the timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::key_for;
use crate::types::{Intents, Key};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

fn slot(key: Key) -> usize {
    match key {
        Key::Forward => 0,
        Key::Back => 1,
        Key::TurnLeft => 2,
        Key::TurnRight => 3,
    }
}

/// Tracks which logical keys are currently held.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Time (ms) of the last press/repeat per held key
    held: [Option<u64>; 4],
    /// `None` when the terminal reports releases and keys never time out
    release_timeout_ms: Option<u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::with_release_timeout(Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout_ms: Option<u64>) -> Self {
        Self {
            held: [None; 4],
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> Option<u64> {
        self.release_timeout_ms
    }

    /// Feed one key event. Returns the logical key it touched, if any.
    pub fn handle_event(&mut self, event: KeyEvent, now_ms: u64) -> Option<Key> {
        let key = key_for(event.code)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key, now_ms),
            KeyEventKind::Release => self.release(key),
        }
        Some(key)
    }

    pub fn press(&mut self, key: Key, now_ms: u64) {
        self.held[slot(key)] = Some(now_ms);
    }

    pub fn release(&mut self, key: Key) {
        self.held[slot(key)] = None;
    }

    /// Release keys whose last press is older than the timeout.
    pub fn expire(&mut self, now_ms: u64) {
        let Some(timeout) = self.release_timeout_ms else {
            return;
        };
        for entry in self.held.iter_mut() {
            if let Some(t) = *entry {
                if now_ms.saturating_sub(t) > timeout {
                    *entry = None;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.held = [None; 4];
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[slot(key)].is_some()
    }

    pub fn held_keys(&self) -> ArrayVec<Key, 4> {
        Key::ALL.into_iter().filter(|k| self.is_held(*k)).collect()
    }

    pub fn intents(&self) -> Intents {
        let mut out = Intents::NONE;
        for key in Key::ALL {
            out.set(key, self.is_held(key));
        }
        out
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_and_release_toggle_intent() {
        let mut kt = KeyTracker::with_release_timeout(None);
        assert_eq!(
            kt.handle_event(event(KeyCode::Char('w'), KeyEventKind::Press), 0),
            Some(Key::Forward)
        );
        assert!(kt.intents().forward);

        kt.handle_event(event(KeyCode::Char('w'), KeyEventKind::Release), 5);
        assert!(kt.intents().is_idle());
    }

    #[test]
    fn keys_are_independent() {
        let mut kt = KeyTracker::with_release_timeout(None);
        kt.handle_event(event(KeyCode::Up, KeyEventKind::Press), 0);
        kt.handle_event(event(KeyCode::Left, KeyEventKind::Press), 0);
        kt.handle_event(event(KeyCode::Down, KeyEventKind::Press), 0);
        let i = kt.intents();
        assert!(i.forward && i.back && i.turn_left && !i.turn_right);
        assert_eq!(
            kt.held_keys().as_slice(),
            &[Key::Forward, Key::Back, Key::TurnLeft]
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut kt = KeyTracker::new();
        assert_eq!(
            kt.handle_event(event(KeyCode::Char('x'), KeyEventKind::Press), 0),
            None
        );
        assert!(kt.intents().is_idle());
    }

    #[test]
    fn auto_release_after_timeout_without_release_events() {
        let mut kt = KeyTracker::with_release_timeout(Some(50));
        kt.handle_event(event(KeyCode::Char('a'), KeyEventKind::Press), 100);

        kt.expire(150);
        assert!(kt.is_held(Key::TurnLeft), "exactly at timeout still held");

        kt.expire(151);
        assert!(!kt.is_held(Key::TurnLeft));
    }

    #[test]
    fn repeat_events_extend_the_hold() {
        let mut kt = KeyTracker::with_release_timeout(Some(50));
        kt.handle_event(event(KeyCode::Char('d'), KeyEventKind::Press), 0);
        kt.handle_event(event(KeyCode::Char('d'), KeyEventKind::Repeat), 40);
        kt.expire(80);
        assert!(kt.is_held(Key::TurnRight));
    }

    #[test]
    fn no_timeout_when_releases_are_reported() {
        let mut kt = KeyTracker::with_release_timeout(None);
        kt.press(Key::Forward, 0);
        kt.expire(1_000_000);
        assert!(kt.is_held(Key::Forward));
    }

    #[test]
    fn default_key_release_timeout_is_non_zero() {
        let kt = KeyTracker::new();
        assert!(kt.release_timeout_ms().unwrap() > 0);
    }
}
