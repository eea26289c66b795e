//! Core game logic module for Snake
//!
//! Everything here is device independent: board geometry, the body ring,
//! collision checks and the session state machine. Rendering, input and the
//! device loop live in their own modules.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod queue;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, SharedDirection};
pub use collision::{check_collision, is_blocked};
pub use config::{ConfigError, GameConfig, JoystickConfig};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use grid::{BODY_CAPACITY, GRID_EXTENT, GRID_TILES, TILE_SIZE};
pub use queue::{OccupancyQueue, QueueError};
pub use speed::StepInterval;
pub use state::{Body, Cell, CollisionType, GameState, Phase};
