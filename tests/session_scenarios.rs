use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use grid_snake::device::{CountingHeartbeat, MemoryDisplay, Pacer};
use grid_snake::game::{
    Body, Cell, CollisionType, Direction, GRID_EXTENT, GameConfig, GameEngine, Phase, is_blocked,
};
use grid_snake::input::{ABS_X, ABS_Y, InputAdapter, InputEvent};
use grid_snake::modes::DeviceMode;
use grid_snake::render::{BACKGROUND, SNAKE, TARGET};

#[test]
fn step_right_without_target() {
    let mut engine = GameEngine::new(GameConfig::default());
    let mut state = engine.reset();
    state.target = Cell::new(0, 0);

    let result = engine.step(&mut state);

    assert_eq!(state.head, Cell::new(110, 100));
    assert_eq!(state.body.len(), 1);
    assert_eq!(result.info.vacated, Some(Cell::new(100, 100)));
}

#[test]
fn eating_target_grows_scores_and_speeds_up() {
    let mut engine = GameEngine::new(GameConfig::default());
    let mut state = engine.reset();
    state.target = Cell::new(110, 100);

    let result = engine.step(&mut state);

    assert!(result.info.ate_target);
    assert_eq!(state.score, 1);
    assert_eq!(state.body.len(), 2);
    assert_eq!(state.interval.as_millis(), 190);
}

#[test]
fn leaving_the_board_ends_the_session() {
    let mut config = GameConfig::default();
    config.start = Cell::new(0, 100);
    config.initial_direction = Direction::Left;
    let mut engine = GameEngine::new(config);
    let mut state = engine.reset();
    state.score = 7;

    let result = engine.step(&mut state);

    assert!(result.terminated);
    assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.score, 7);
    assert_eq!(state.body.iter().collect::<Vec<_>>(), vec![Cell::new(0, 100)]);
}

#[test]
fn overlap_is_blocked_wherever_it_sits_in_the_ring() {
    let shape = [
        Cell::new(100, 100),
        Cell::new(110, 100),
        Cell::new(120, 100),
        Cell::new(120, 110),
    ];

    for shift in 0..shape.len() + 3 {
        let mut body = Body::new();
        // advance the cursors so the shape starts at a different slot
        for _ in 0..shift {
            body.push(Cell::new(0, 0));
            body.pop().unwrap();
        }
        for cell in shape {
            body.push(cell);
        }
        assert!(is_blocked(Cell::new(120, 100), GRID_EXTENT, &body));
        assert!(!is_blocked(Cell::new(130, 110), GRID_EXTENT, &body));
    }
}

/// Pacer that feeds scripted stick events while the loop sleeps
struct ScriptedStick {
    adapter: InputAdapter,
    script: Vec<(usize, InputEvent)>,
    ticks: usize,
    slept: Duration,
}

impl Pacer for ScriptedStick {
    fn sleep(&mut self, duration: Duration) {
        self.ticks += 1;
        self.slept += duration;
        for (tick, event) in &self.script {
            if *tick == self.ticks {
                self.adapter.handle(event);
            }
        }
    }
}

#[test]
fn stick_events_steer_a_whole_session() {
    let engine = GameEngine::new(GameConfig::default());
    let adapter = InputAdapter::new(engine.direction(), engine.config().joystick);
    let stick = ScriptedStick {
        adapter,
        script: vec![
            (3, InputEvent::absolute(ABS_Y, 0)),   // down
            (4, InputEvent::absolute(ABS_X, 128)), // dead zone
            (6, InputEvent::absolute(ABS_X, 0)),   // left
            (9, InputEvent::absolute(ABS_Y, 255)), // up
        ],
        ticks: 0,
        slept: Duration::ZERO,
    };
    let mut device = DeviceMode::with_engine(engine, CountingHeartbeat::default(), stick);
    let mut display = MemoryDisplay::new();

    device.run_session(&mut display);

    // right 3, down 3, left 3, then up until the top wall at y=0
    // head path: (130,100) -> (130,130) -> (100,130) -> (100,0)
    let steps = device.metrics().steps;
    assert_eq!(steps, 3 + 3 + 3 + 13);
    assert_eq!(device.heartbeat().toggles, steps as usize);
    assert!(device.pacer().slept >= Duration::from_millis(20) * steps);

    let top = device.framebuffer().pixel(100, 0);
    assert!(top == SNAKE || top == TARGET);
    assert_eq!(display.frame, device.framebuffer().pixels());
}

#[test]
fn body_stays_unique_and_length_tracks_eating_across_seeds() {
    let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];

    for seed in 0..16 {
        let mut config = GameConfig::default();
        config.seed = seed;
        config.start = Cell::new(0, 100);
        let mut engine = GameEngine::new(config);
        let direction = engine.direction();
        let mut state = engine.reset();
        let mut last_interval = state.interval;

        for step in 0..500 {
            if step % 5 == 0 {
                direction.store(turns[(step / 5) % turns.len()]);
            }
            let len_before = state.body.len();
            let result = engine.step(&mut state);
            if result.terminated {
                break;
            }

            let grown = if result.info.ate_target { 1 } else { 0 };
            assert_eq!(state.body.len(), len_before + grown);

            let unique: HashSet<Cell> = state.body.iter().collect();
            assert_eq!(unique.len(), state.body.len());

            assert!(state.interval <= last_interval);
            assert!(state.interval.as_millis() >= 20);
            last_interval = state.interval;
        }
    }
}

#[test]
fn final_frame_holds_only_whole_tiles() {
    let mut device = DeviceMode::new(
        GameConfig::default(),
        CountingHeartbeat::default(),
        grid_snake::device::RecordingPacer::default(),
    );
    let direction: Arc<_> = device.direction();
    let mut display = MemoryDisplay::new();

    device.run_session(&mut display);

    assert_eq!(direction.load(), Direction::Right);
    let painted: usize = device
        .framebuffer()
        .pixels()
        .iter()
        .filter(|&&p| p != BACKGROUND.0)
        .count();
    // head and target at least, never a partial tile
    assert!(painted >= 100);
    assert_eq!(painted % 100, 0);
}
