use crate::input::DirectionalIntent;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Forward,
    Backward,
    Left,
    Right,
    Grab,
}

impl Control {
    /// Map a DOM `KeyboardEvent.key` or `.code` value to a control.
    #[inline]
    pub fn from_key(key: &str) -> Option<Control> {
        match key {
            "ArrowUp" | "w" | "W" | "KeyW" => Some(Control::Forward),
            "ArrowDown" | "s" | "S" | "KeyS" => Some(Control::Backward),
            "ArrowLeft" | "a" | "A" | "KeyA" => Some(Control::Left),
            "ArrowRight" | "d" | "D" | "KeyD" => Some(Control::Right),
            " " | "Space" => Some(Control::Grab),
            _ => None,
        }
    }
}

#[inline]
pub fn is_instructions_toggle(key: &str) -> bool {
    matches!(key, "h" | "H" | "KeyH")
}

/// Held-key tracker fed by keydown/keyup, sampled once per tick.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    held: FnvHashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` held and return its control. Auto-repeat keydowns return
    /// the control again; grab requests are debounced by the session's
    /// movement lock, not here.
    pub fn press(&mut self, key: &str) -> Option<Control> {
        let control = Control::from_key(key)?;
        self.held.insert(normalize(key));
        Some(control)
    }

    pub fn release(&mut self, key: &str) {
        if Control::from_key(key).is_some() {
            self.held.remove(&normalize(key));
        }
    }

    /// Drop everything, e.g. when the window loses focus and keyups are missed.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    #[inline]
    pub fn is_held(&self, control: Control) -> bool {
        self.held
            .iter()
            .any(|k| Control::from_key(k) == Some(control))
    }

    pub fn intent(&self) -> DirectionalIntent {
        DirectionalIntent {
            forward: self.is_held(Control::Forward),
            backward: self.is_held(Control::Backward),
            left: self.is_held(Control::Left),
            right: self.is_held(Control::Right),
        }
    }
}

// "w" and "W" are the same physical key; shift changes between keydown and keyup.
fn normalize(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_ascii_lowercase()
    } else {
        key.to_string()
    }
}
