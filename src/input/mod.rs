pub mod handler;
pub mod keyboard;

pub use handler::{ABS_X, ABS_Y, EventKind, InputAdapter, InputEvent};
pub use keyboard::{KeyAction, KeyboardJoystick};
