use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::grid::BODY_CAPACITY;
use super::queue::OccupancyQueue;
use super::speed::StepInterval;

/// Pixel anchor of one tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by a pixel delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one tile in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.step_vector();
        self.moved_by(dx, dy)
    }
}

/// The snake body, one cell per tile it covers
pub type Body = OccupancyQueue<BODY_CAPACITY>;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Body and first target are being placed
    Spawning,
    /// Steady-state stepping
    Running,
    /// Terminal; the score is final
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub body: Body,
    pub head: Cell,
    pub target: Cell,
    pub score: u32,
    pub steps: u32,
    pub interval: StepInterval,
    pub phase: Phase,
}

impl GameState {
    /// Create a session in the spawning phase with an empty body
    pub fn new(head: Cell, target: Cell, interval: StepInterval) -> Self {
        Self {
            body: Body::new(),
            head,
            target,
            score: 0,
            steps: 0,
            interval,
            phase: Phase::Spawning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
