use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Flight controls the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    PitchUp,
    PitchDown,
    TurnLeft,
    TurnRight,
    ThrustUp,
    ThrustDown,
    CameraReset,
}

const KEY_COUNT: usize = 7;

impl Key {
    fn index(self) -> usize {
        self as usize
    }
}

/// Maps host key identifiers (DOM `KeyboardEvent.code`) to flight controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: HashMap<String, Key>,
}

impl KeyBindings {
    /// Bindings with no keys mapped.
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Bind `code` to `key`, replacing any previous binding for that code.
    pub fn bind(&mut self, code: impl Into<String>, key: Key) {
        self.map.insert(code.into(), key);
    }

    /// Resolve a host key code. Unrecognised codes return `None`.
    pub fn resolve(&self, code: &str) -> Option<Key> {
        self.map.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut b = Self::empty();
        b.bind("ArrowUp", Key::PitchUp);
        b.bind("ArrowDown", Key::PitchDown);
        b.bind("ArrowLeft", Key::TurnLeft);
        b.bind("ArrowRight", Key::TurnRight);
        b.bind("KeyW", Key::ThrustUp);
        b.bind("KeyS", Key::ThrustDown);
        b.bind("Space", Key::CameraReset);
        b
    }
}

/// Held/released state for every flight control.
/// Starts with everything released; only recognised keys are tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; KEY_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    pub fn release_all(&mut self) {
        self.held = [false; KEY_COUNT];
    }
}
