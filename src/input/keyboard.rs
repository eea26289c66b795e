//! Keyboard stand-in for the analog stick on the host build
//!
//! Each movement key produces the axis event a fully deflected stick would,
//! so the same [`InputAdapter`](super::InputAdapter) path handles both.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handler::{ABS_X, ABS_Y, InputEvent};

/// Raw value of a stick pushed all the way to the low end
pub const AXIS_MIN: i32 = 0;
/// Raw value of a stick pushed all the way to the high end
pub const AXIS_MAX: i32 = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Stick(InputEvent),
    Quit,
    None,
}

pub struct KeyboardJoystick;

impl KeyboardJoystick {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Stick(InputEvent::absolute(ABS_Y, AXIS_MAX))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Stick(InputEvent::absolute(ABS_Y, AXIS_MIN))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Stick(InputEvent::absolute(ABS_X, AXIS_MIN))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Stick(InputEvent::absolute(ABS_X, AXIS_MAX))
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for KeyboardJoystick {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, JoystickConfig, SharedDirection};
    use crate::input::InputAdapter;
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_steer_through_adapter() {
        let keyboard = KeyboardJoystick::new();
        let shared = Arc::new(SharedDirection::default());
        let adapter = InputAdapter::new(Arc::clone(&shared), JoystickConfig::default());

        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Right, Direction::Right),
        ];

        for (code, expected) in cases {
            let KeyAction::Stick(event) = keyboard.handle_key_event(press(code)) else {
                panic!("{code:?} should move the stick");
            };
            assert_eq!(adapter.handle(&event), Some(expected));
            assert_eq!(shared.load(), expected);
        }
    }

    #[test]
    fn test_wasd_keys() {
        let keyboard = KeyboardJoystick::new();

        assert_eq!(
            keyboard.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Stick(InputEvent::absolute(ABS_Y, AXIS_MAX))
        );
        assert_eq!(
            keyboard.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Stick(InputEvent::absolute(ABS_X, AXIS_MIN))
        );
        assert_eq!(
            keyboard.handle_key_event(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            KeyAction::Stick(InputEvent::absolute(ABS_Y, AXIS_MIN))
        );
        assert_eq!(
            keyboard.handle_key_event(press(KeyCode::Char('d'))),
            KeyAction::Stick(InputEvent::absolute(ABS_X, AXIS_MAX))
        );
    }

    #[test]
    fn test_quit_keys() {
        let keyboard = KeyboardJoystick::new();

        assert_eq!(keyboard.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(keyboard.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keyboard.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let keyboard = KeyboardJoystick::new();
        assert_eq!(keyboard.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }
}
