use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

use super::{
    action::SharedDirection,
    collision::check_collision,
    config::GameConfig,
    grid::{self, GRID_EXTENT, GRID_TILES},
    speed::StepInterval,
    state::{Cell, CollisionType, GameState, Phase},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the head landed on the target this step
    pub ate_target: bool,
    /// Tail cell released by this step, to be repainted as background
    pub vacated: Option<Cell>,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Head cell after the step
    pub head: Cell,
    /// Whether the session has ended
    pub terminated: bool,
    pub info: StepInfo,
}

impl StepResult {
    fn terminated(head: Cell, collision_type: Option<CollisionType>) -> Self {
        Self {
            head,
            terminated: true,
            info: StepInfo {
                ate_target: false,
                vacated: None,
                collision_type,
            },
        }
    }
}

/// The game engine that handles all game logic
///
/// The engine outlives individual sessions: its random source is seeded once
/// and keeps advancing across restarts.
pub struct GameEngine<R = ChaCha8Rng> {
    config: GameConfig,
    rng: R,
    direction: Arc<SharedDirection>,
}

impl GameEngine<ChaCha8Rng> {
    /// Create an engine seeded from `config.seed`
    pub fn new(config: GameConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let direction = Arc::new(SharedDirection::new(config.initial_direction));
        Self {
            config,
            rng,
            direction,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Handle to the direction cell the input side writes into
    pub fn direction(&self) -> Arc<SharedDirection> {
        Arc::clone(&self.direction)
    }

    /// Start a fresh session: place the target, then the head
    pub fn reset(&mut self) -> GameState {
        let target = self.sample_target();
        let start = self.config.start;
        let mut state = GameState::new(
            start,
            target,
            StepInterval::from_millis(self.config.initial_interval_ms),
        );

        self.direction.store(self.config.initial_direction);
        state.body.reset();
        state.body.push(start);
        state.phase = Phase::Running;

        info!(
            head = ?start,
            target = ?target,
            interval_ms = state.interval.as_millis(),
            "session started"
        );
        state
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() {
            return StepResult::terminated(state.head, None);
        }

        let direction = self.direction.load();
        let candidate = state.head.moved_in_direction(direction);

        if let Some(collision_type) = check_collision(candidate, GRID_EXTENT, &state.body) {
            state.phase = Phase::GameOver;
            info!(
                score = state.score,
                steps = state.steps,
                candidate = ?candidate,
                collision = ?collision_type,
                "game over"
            );
            return StepResult::terminated(state.head, Some(collision_type));
        }

        state.body.push(candidate);
        state.head = candidate;

        let ate_target = candidate == state.target;
        let mut vacated = None;

        if ate_target {
            state.score += 1;
            state.target = self.sample_target();
            state.interval = state.interval.ramped();
            debug!(
                score = state.score,
                target = ?state.target,
                interval_ms = state.interval.as_millis(),
                "target eaten"
            );
        } else {
            match state.body.pop() {
                Ok(cell) => vacated = Some(cell),
                Err(e) => error!(error = %e, "body queue empty, skipping shrink"),
            }
        }

        state.steps += 1;
        debug!(head = ?candidate, ?direction, len = state.body.len(), "step");

        StepResult {
            head: candidate,
            terminated: false,
            info: StepInfo {
                ate_target,
                vacated,
                collision_type: None,
            },
        }
    }

    /// Draw a target uniformly over the board
    ///
    /// Occupied cells are not excluded, so a target can land under the body.
    pub fn sample_target(&mut self) -> Cell {
        let tx = self.rng.gen_range(0..GRID_TILES);
        let ty = self.rng.gen_range(0..GRID_TILES);
        grid::cell_at_tile(tx, ty)
    }
}
