//! Keyboard mapping

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Start / restart
    Confirm,
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; anything else is ignored
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            " " => Some(Key::Confirm),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}
