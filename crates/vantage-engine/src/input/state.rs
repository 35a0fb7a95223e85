use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};
use super::Modifiers;

/// Current keyboard state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Keys currently held.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies one event to the held-key state and records transitions into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered once focus is gone; drop held keys
                    // so the camera does not keep moving.
                    for key in self.keys_down.drain() {
                        frame.keys_released.insert(key);
                    }
                }
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Letter('w'), KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::Letter('w'), KeyState::Pressed, true));
        assert!(state.key_down(Key::Letter('w')));
        assert!(frame.pressed(Key::Letter('w')));
        assert_eq!(frame.events.len(), 2);

        frame.clear();
        state.apply_event(&mut frame, key(Key::Letter('w'), KeyState::Pressed, true));
        assert!(!frame.pressed(Key::Letter('w')), "repeat is not a new press");

        state.apply_event(&mut frame, key(Key::Letter('w'), KeyState::Released, false));
        assert!(!state.key_down(Key::Letter('w')));
        assert!(frame.keys_released.contains(&Key::Letter('w')));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Letter('a'), KeyState::Released, false));
        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, false));
        frame.clear();

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
        assert!(frame.keys_released.contains(&Key::ArrowLeft));
    }

    #[test]
    fn key_events_update_modifiers() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Equal, state: KeyState::Pressed, modifiers: shift, repeat: false },
        );
        assert!(state.modifiers.any());
    }
}
