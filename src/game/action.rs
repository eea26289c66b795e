use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use super::grid::TILE_SIZE;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns the delta scaled to one tile, in pixels
    pub fn step_vector(&self) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (dx * TILE_SIZE, dy * TILE_SIZE)
    }

    fn to_bits(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}

/// Direction cell written by the input callback and read by the game loop
///
/// The whole direction lives in one byte, so a reader can never observe half
/// of an update. Last write wins.
#[derive(Debug)]
pub struct SharedDirection {
    bits: AtomicU8,
}

impl SharedDirection {
    pub fn new(direction: Direction) -> Self {
        Self {
            bits: AtomicU8::new(direction.to_bits()),
        }
    }

    pub fn load(&self) -> Direction {
        Direction::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn store(&self, direction: Direction) {
        self.bits.store(direction.to_bits(), Ordering::Release);
    }
}

impl Default for SharedDirection {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}
