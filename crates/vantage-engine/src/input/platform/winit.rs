use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers};

const LETTERS: [(KeyCode, char); 26] = [
    (KeyCode::KeyA, 'a'), (KeyCode::KeyB, 'b'), (KeyCode::KeyC, 'c'), (KeyCode::KeyD, 'd'),
    (KeyCode::KeyE, 'e'), (KeyCode::KeyF, 'f'), (KeyCode::KeyG, 'g'), (KeyCode::KeyH, 'h'),
    (KeyCode::KeyI, 'i'), (KeyCode::KeyJ, 'j'), (KeyCode::KeyK, 'k'), (KeyCode::KeyL, 'l'),
    (KeyCode::KeyM, 'm'), (KeyCode::KeyN, 'n'), (KeyCode::KeyO, 'o'), (KeyCode::KeyP, 'p'),
    (KeyCode::KeyQ, 'q'), (KeyCode::KeyR, 'r'), (KeyCode::KeyS, 's'), (KeyCode::KeyT, 't'),
    (KeyCode::KeyU, 'u'), (KeyCode::KeyV, 'v'), (KeyCode::KeyW, 'w'), (KeyCode::KeyX, 'x'),
    (KeyCode::KeyY, 'y'), (KeyCode::KeyZ, 'z'),
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

/// Converts the keyboard-related subset of winit window events.
pub(crate) fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => Some(InputEvent::ModifiersChanged(map_modifiers(m.state()))),
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),
        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            modifiers: state.modifiers,
            repeat: event.repeat,
        }),
        _ => None,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

pub(crate) fn map_key(pk: PhysicalKey) -> Key {
    // Native codes have no stable number in winit 0.30.
    let PhysicalKey::Code(code) = pk else {
        return Key::Other(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::Equal | KeyCode::NumpadAdd => Key::Equal,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
        other => {
            if let Some(&(_, c)) = LETTERS.iter().find(|(k, _)| *k == other) {
                Key::Letter(c)
            } else if let Some(d) = DIGITS.iter().position(|k| *k == other) {
                // position < 10
                Key::Digit(d as u8)
            } else {
                Key::Other(other as u32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_keys_map_by_position() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::Letter('w'));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyZ)), Key::Letter('z'));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Equal)), Key::Equal);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadSubtract)), Key::Minus);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowLeft)), Key::ArrowLeft);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit4)), Key::Digit(4));
    }

    #[test]
    fn unbound_keys_are_other() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::F5)), Key::Other(_)));
    }
}
