use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Edge-triggered key tracking.
///
/// A held key fires its action once, on the initial press; auto-repeat and
/// repeat events are swallowed until the key is released and pressed again.
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashSet<KeyCode>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one key event through the tracker; returns `true` only for a
    /// fresh press of a key that was not already held.
    pub fn newly_pressed(&mut self, event: &KeyEvent) -> bool {
        match event.kind {
            KeyEventKind::Press => self.held.insert(event.code),
            KeyEventKind::Repeat => {
                self.held.insert(event.code);
                false
            }
            KeyEventKind::Release => {
                self.held.remove(&event.code);
                false
            }
        }
    }
}
