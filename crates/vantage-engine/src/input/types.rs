/// Keyboard key identifier, by physical position (US layout names).
///
/// Only keys a viewer can bind have their own variant; everything else arrives
/// as `Key::Other` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// `=` / `+`, main row or keypad.
    Equal,
    /// `-` / `_`, main row or keypad.
    Minus,
    Letter(char),
    Digit(u8),
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Keyboard events as seen by the input state, decoupled from winit.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// OS auto-repeat.
        repeat: bool,
    },
    Focused(bool),
}
