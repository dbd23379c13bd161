//! Held drop key tracking.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! auto-repeat keeps refreshing the press, and once it stops for longer than
//! the timeout the key counts as released.

use crate::types::KEY_RELEASE_TIMEOUT_MS;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Instant;

/// Tracks whether the fast-drop key is held down.
#[derive(Debug, Clone)]
pub struct DropHold {
    held: bool,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl DropHold {
    pub fn new() -> Self {
        Self {
            held: false,
            last_key_time: Instant::now(),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    fn is_drop_key(code: KeyCode) -> bool {
        matches!(code, KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S'))
    }

    /// Feed a key event. Returns true if it was the drop key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !Self::is_drop_key(key.code) {
            return false;
        }
        match key.kind {
            KeyEventKind::Release => self.held = false,
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held = true;
                self.last_key_time = Instant::now();
            }
        }
        true
    }

    /// Expire the hold once repeats have stopped arriving.
    pub fn update(&mut self) {
        if self.held {
            let since = self.last_key_time.elapsed().as_millis() as u32;
            if since > self.key_release_timeout_ms {
                self.held = false;
            }
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn reset(&mut self) {
        self.held = false;
    }
}

impl Default for DropHold {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    #[test]
    fn test_press_holds() {
        let mut hold = DropHold::new();
        assert!(hold.handle_key(KeyEvent::from(KeyCode::Down)));
        hold.update();
        assert!(hold.is_held());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut hold = DropHold::new();
        assert!(!hold.handle_key(KeyEvent::from(KeyCode::Left)));
        assert!(!hold.is_held());
    }

    #[test]
    fn test_release_event() {
        let mut hold = DropHold::new();
        hold.handle_key(KeyEvent::from(KeyCode::Down));
        hold.handle_key(KeyEvent::new_with_kind(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(!hold.is_held());
    }

    #[test]
    fn test_timeout_releases() {
        let mut hold = DropHold::new();
        hold.handle_key(KeyEvent::from(KeyCode::Char('s')));
        hold.last_key_time = Instant::now() - Duration::from_millis(KEY_RELEASE_TIMEOUT_MS as u64 + 50);
        hold.update();
        assert!(!hold.is_held());
    }

    #[test]
    fn test_custom_timeout() {
        let hold = DropHold::new().with_key_release_timeout_ms(400);
        assert_eq!(hold.key_release_timeout_ms(), 400);
    }
}
