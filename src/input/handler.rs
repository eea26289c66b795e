//! Joystick axis events to snake directions

use std::sync::Arc;

use tracing::debug;

use crate::game::{Direction, JoystickConfig, SharedDirection};

/// Absolute axis code for the horizontal stick axis
pub const ABS_X: u16 = 0;
/// Absolute axis code for the vertical stick axis
pub const ABS_Y: u16 = 1;

/// Kind of a raw input event; only absolute axis motion steers the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Key,
    Relative,
    Absolute,
    Sync,
}

/// One raw event as delivered by the input driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: EventKind,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    pub fn absolute(code: u16, value: i32) -> Self {
        Self {
            kind: EventKind::Absolute,
            code,
            value,
        }
    }
}

/// Which end of an axis the stick is pushed towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deflection {
    Negative,
    Positive,
}

/// Turns axis events into direction commits on the shared direction cell
///
/// Runs on the input side; the game loop only ever reads the cell.
pub struct InputAdapter {
    direction: Arc<SharedDirection>,
    joystick: JoystickConfig,
}

impl InputAdapter {
    pub fn new(direction: Arc<SharedDirection>, joystick: JoystickConfig) -> Self {
        Self {
            direction,
            joystick,
        }
    }

    /// Map an event to a direction without committing it
    ///
    /// Horizontal axis: low is left, high is right. Vertical axis follows the
    /// stick convention where high is pushed up.
    pub fn interpret(&self, event: &InputEvent) -> Option<Direction> {
        if event.kind != EventKind::Absolute {
            return None;
        }

        let deflection = self.deflection(event.value)?;
        match (event.code, deflection) {
            (ABS_X, Deflection::Negative) => Some(Direction::Left),
            (ABS_X, Deflection::Positive) => Some(Direction::Right),
            (ABS_Y, Deflection::Negative) => Some(Direction::Down),
            (ABS_Y, Deflection::Positive) => Some(Direction::Up),
            _ => None,
        }
    }

    /// Commit the direction an event asks for, if any
    pub fn handle(&self, event: &InputEvent) -> Option<Direction> {
        let direction = self.interpret(event)?;
        self.direction.store(direction);
        debug!(?direction, code = event.code, value = event.value, "direction committed");
        Some(direction)
    }

    fn deflection(&self, value: i32) -> Option<Deflection> {
        if value < self.joystick.low_threshold {
            Some(Deflection::Negative)
        } else if value > self.joystick.high_threshold {
            Some(Deflection::Positive)
        } else {
            None
        }
    }
}
