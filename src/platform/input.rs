//! Polled keyboard state

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the paddle controllers understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    KeyA,
    KeyD,
}

impl Key {
    /// Browser-style `KeyboardEvent.code` name
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::KeyA => "KeyA",
            Key::KeyD => "KeyD",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyA" => Some(Key::KeyA),
            "KeyD" => Some(Key::KeyD),
            _ => None,
        }
    }
}

/// "Is this key currently held"
pub trait InputState {
    fn is_held(&self, key: Key) -> bool;
}

/// Key state fed by down/up events and polled once per tick
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Handle a keydown event code; unknown codes are ignored
    pub fn key_down(&mut self, code: &str) {
        log::trace!("down {code}");
        if let Some(key) = Key::from_code(code) {
            self.press(key);
        }
    }

    /// Handle a keyup event code; unknown codes are ignored
    pub fn key_up(&mut self, code: &str) {
        log::trace!("up {code}");
        if let Some(key) = Key::from_code(code) {
            self.release(key);
        }
    }
}

impl InputState for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
