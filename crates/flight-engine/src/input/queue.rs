use crate::input::state::{InputState, Key, KeyBindings};

/// Input events the simulation understands, already resolved to flight controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A bound key went down.
    KeyDown { key: Key },
    /// A bound key went up.
    KeyUp { key: Key },
    /// The host lost focus; every key counts as released.
    ReleaseAll,
}

/// A queue of input events.
/// JS pushes events as they arrive; the frame driver applies them before each update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Resolve a host key code and queue it. Unbound codes are dropped.
    /// Returns whether the code was bound.
    pub fn push_code(&mut self, bindings: &KeyBindings, code: &str, pressed: bool) -> bool {
        match bindings.resolve(code) {
            Some(key) if pressed => {
                self.push(InputEvent::KeyDown { key });
                true
            }
            Some(key) => {
                self.push(InputEvent::KeyUp { key });
                true
            }
            None => {
                log::trace!("dropping unbound key code {:?}", code);
                false
            }
        }
    }

    /// Apply every pending event to `state` in arrival order, then clear the queue.
    pub fn apply_to(&mut self, state: &mut InputState) {
        for event in self.events.drain(..) {
            match event {
                InputEvent::KeyDown { key } => state.press(key),
                InputEvent::KeyUp { key } => state.release(key),
                InputEvent::ReleaseAll => state.release_all(),
            }
        }
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
