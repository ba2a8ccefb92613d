/// Logical keys and the keys-pressed map the simulation reads each tick.
///
/// Two front doors feed the same map: browser-style numeric key codes
/// (`Key::from_code`) and crossterm key events (`KeyTracker`).

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Shoot,
}

impl Key {
    pub const ALL: [Key; 6] = [Key::Left, Key::Right, Key::Up, Key::Down, Key::Space, Key::Shoot];

    /// Numeric key codes as reported by DOM keyboard events.
    pub fn from_code(code: u32) -> Option<Key> {
        match code {
            37 => Some(Key::Left),
            39 => Some(Key::Right),
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            32 => Some(Key::Space),
            65 => Some(Key::Shoot),
            _ => None,
        }
    }

    pub fn from_key_code(code: &KeyCode) -> Option<Key> {
        match code {
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Char(' ') => Some(Key::Space),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Shoot),
            _ => None,
        }
    }
}

// ── Keys-pressed map ──────────────────────────────────────────────────────────

/// Logical key → pressed. Missing entries read as released.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeysPressed {
    pressed: HashMap<Key, bool>,
}

impl KeysPressed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for tests and replays: every listed key held.
    pub fn holding(keys: &[Key]) -> Self {
        let mut map = Self::new();
        for &key in keys {
            map.set(key, true);
        }
        map
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed.insert(key, pressed);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.get(&key).copied().unwrap_or(false)
    }

    /// Record a raw key code transition. Unknown codes are logged and
    /// leave the map untouched.
    pub fn apply_code(&mut self, code: u32, pressed: bool) {
        match Key::from_code(code) {
            Some(key) => self.set(key, pressed),
            None => log::warn!("Unknown key {code}"),
        }
    }
}

// ── Terminal key tracking ─────────────────────────────────────────────────────

/// Turns a stream of crossterm key events into a per-frame `KeysPressed`.
///
/// When the terminal reports releases, a key stays held from its press
/// until its release. Classic terminals only repeat presses, so there a key
/// lapses once its last press/repeat is older than `hold_window` frames.
#[derive(Clone, Debug)]
pub struct KeyTracker {
    key_frame: HashMap<Key, u64>,
    hold_window: u64,
    reports_release: bool,
}

impl KeyTracker {
    pub fn new(hold_window: u64, reports_release: bool) -> Self {
        Self {
            key_frame: HashMap::new(),
            hold_window,
            reports_release,
        }
    }

    pub fn handle(&mut self, event: &KeyEvent, frame: u64) {
        let Some(key) = Key::from_key_code(&event.code) else {
            if event.kind == KeyEventKind::Press {
                log::warn!("Unknown key {:?}", event.code);
            }
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(key, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key);
            }
        }
    }

    pub fn is_held(&self, key: Key, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.reports_release || frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    pub fn snapshot(&self, frame: u64) -> KeysPressed {
        let mut keys = KeysPressed::new();
        for key in Key::ALL {
            keys.set(key, self.is_held(key, frame));
        }
        keys
    }
}
