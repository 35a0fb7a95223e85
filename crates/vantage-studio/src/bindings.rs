//! Keyboard bindings: turns held keys and this frame's presses into a [`ControlInput`].
//!
//! Movement, rotation, zoom, focal length, speed and light act while held.
//! Toggles and subdivision act once per press.

use vantage_core::{ControlInput, Direction, RotationAxis, Toggle};
use vantage_engine::input::{InputFrame, InputState, Key};

pub const EXIT_KEY: Key = Key::Escape;

const MOVES: [(Key, Direction); 6] = [
    (Key::Letter('w'), Direction::Forward),
    (Key::Letter('s'), Direction::Backward),
    (Key::Letter('a'), Direction::Left),
    (Key::Letter('d'), Direction::Right),
    (Key::Letter('q'), Direction::Up),
    (Key::Letter('e'), Direction::Down),
];

const ROTATIONS: [(Key, RotationAxis, f64); 4] = [
    (Key::ArrowRight, RotationAxis::Yaw, 1.0),
    (Key::ArrowLeft, RotationAxis::Yaw, -1.0),
    (Key::ArrowUp, RotationAxis::Pitch, 1.0),
    (Key::ArrowDown, RotationAxis::Pitch, -1.0),
];

const TOGGLES: [(Key, Toggle); 4] = [
    (Key::Digit(1), Toggle::Edges),
    (Key::Digit(2), Toggle::SolidWalls),
    (Key::Digit(3), Toggle::Walls),
    (Key::Digit(4), Toggle::ColorWalls),
];

/// `+1` when only `up` is held, `-1` when only `down` is, else `0`.
fn axis(state: &InputState, up: Key, down: Key) -> f64 {
    f64::from(i8::from(state.key_down(up)) - i8::from(state.key_down(down)))
}

pub fn collect(state: &InputState, frame: &InputFrame) -> ControlInput {
    let moves = MOVES
        .iter()
        .filter(|(key, _)| state.key_down(*key))
        .map(|&(_, dir)| dir)
        .collect();

    let rotations = ROTATIONS
        .iter()
        .filter(|(key, ..)| state.key_down(*key))
        .map(|&(_, axis, steps)| (axis, steps))
        .collect();

    let toggles = TOGGLES
        .iter()
        .filter(|(key, _)| frame.pressed(*key))
        .map(|&(_, toggle)| toggle)
        .collect();

    ControlInput {
        moves,
        rotations,
        zoom: axis(state, Key::Letter('p'), Key::Letter('m')),
        focal: axis(state, Key::Letter('f'), Key::Letter('g')),
        speed: axis(state, Key::Equal, Key::Minus) as i32,
        light: axis(state, Key::Letter('c'), Key::Letter('v')),
        subdivision: i32::from(frame.pressed(Key::Letter('z')))
            - i32::from(frame.pressed(Key::Letter('x'))),
        toggles,
        reset: state.key_down(Key::Letter('r')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_engine::input::{InputEvent, KeyState, Modifiers};

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat: false },
        );
    }

    #[test]
    fn nothing_held_is_empty_input() {
        let input = collect(&InputState::default(), &InputFrame::default());
        assert!(input.is_empty());
    }

    #[test]
    fn held_keys_map_to_continuous_controls() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for key in ['w', 'd', 'p', 'c'].map(Key::Letter) {
            press(&mut state, &mut frame, key);
        }
        press(&mut state, &mut frame, Key::ArrowLeft);
        press(&mut state, &mut frame, Key::Equal);
        let input = collect(&state, &frame);

        assert_eq!(input.moves, vec![Direction::Forward, Direction::Right]);
        assert_eq!(input.rotations, vec![(RotationAxis::Yaw, -1.0)]);
        assert_eq!(input.zoom, 1.0);
        assert_eq!(input.speed, 1);
        assert_eq!(input.light, 1.0);
        assert!(!input.reset);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        press(&mut state, &mut frame, Key::Letter('p'));
        press(&mut state, &mut frame, Key::Letter('m'));
        assert_eq!(collect(&state, &frame).zoom, 0.0);
    }

    #[test]
    fn toggles_and_subdivision_fire_on_press_only() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        press(&mut state, &mut frame, Key::Digit(2));
        press(&mut state, &mut frame, Key::Letter('z'));

        let first = collect(&state, &frame);
        assert_eq!(first.toggles, vec![Toggle::SolidWalls]);
        assert_eq!(first.subdivision, 1);

        // Still held next frame, but no new press.
        frame.clear();
        let second = collect(&state, &frame);
        assert!(second.toggles.is_empty());
        assert_eq!(second.subdivision, 0);
    }
}
