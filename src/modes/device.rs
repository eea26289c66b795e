//! Session driver: the loop a device runs between power-on and power-off
//!
//! One session paints the board, steps the engine once per tick, commits a
//! frame per step, toggles the heartbeat and sleeps the current interval.
//! [`DeviceMode::run`] restarts sessions with a fixed pause in between.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, warn};

use crate::device::{DeviceError, DisplaySink, Heartbeat, Pacer};
use crate::game::{GameConfig, GameEngine, SharedDirection};
use crate::input::InputAdapter;
use crate::metrics::GameMetrics;
use crate::render::{FrameBuffer, Renderer};

pub struct DeviceMode<H, P, R = ChaCha8Rng> {
    engine: GameEngine<R>,
    framebuffer: FrameBuffer,
    renderer: Renderer,
    metrics: GameMetrics,
    heartbeat: H,
    pacer: P,
}

impl<H: Heartbeat, P: Pacer> DeviceMode<H, P> {
    pub fn new(config: GameConfig, heartbeat: H, pacer: P) -> Self {
        Self::with_engine(GameEngine::new(config), heartbeat, pacer)
    }
}

impl<H: Heartbeat, P: Pacer, R: Rng> DeviceMode<H, P, R> {
    pub fn with_engine(engine: GameEngine<R>, heartbeat: H, pacer: P) -> Self {
        Self {
            engine,
            framebuffer: FrameBuffer::new(),
            renderer: Renderer::new(),
            metrics: GameMetrics::new(),
            heartbeat,
            pacer,
        }
    }

    pub fn direction(&self) -> Arc<SharedDirection> {
        self.engine.direction()
    }

    /// Adapter for the input side, wired to this driver's direction cell
    pub fn input_adapter(&self) -> InputAdapter {
        InputAdapter::new(self.engine.direction(), self.engine.config().joystick)
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn heartbeat(&self) -> &H {
        &self.heartbeat
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Play one session to game over and return the final score
    pub fn run_session<D: DisplaySink + ?Sized>(&mut self, display: &mut D) -> u32 {
        let mut state = self.engine.reset();
        self.metrics.on_game_start();

        self.renderer.paint_session_start(&mut self.framebuffer, &state);
        if let Err(e) = display.blanking_off() {
            warn!(error = %e, "failed to turn display blanking off");
        }
        self.commit(display);

        loop {
            let result = self.engine.step(&mut state);
            if result.terminated {
                break;
            }

            self.renderer.paint_step(&mut self.framebuffer, &state, &result);
            self.metrics.on_step(state.score, state.steps);
            self.commit(display);

            self.pacer.sleep(state.interval.as_duration());
            self.heartbeat.toggle();
        }

        self.metrics.on_step(state.score, state.steps);
        self.metrics.on_game_over(state.score);
        display.annotate(&self.metrics);
        info!(
            score = state.score,
            steps = state.steps,
            high_score = self.metrics.high_score,
            sessions = self.metrics.sessions_played,
            "session finished"
        );

        state.score
    }

    /// Restart sessions until `running` is cleared or `max_sessions` is reached
    ///
    /// `running` is only checked between sessions. Returns the number of
    /// sessions played.
    pub fn run<D: DisplaySink + ?Sized>(
        &mut self,
        display: &mut D,
        running: &AtomicBool,
        max_sessions: Option<u32>,
    ) -> Result<u32, DeviceError> {
        if !display.is_ready() {
            error!("display not ready");
            return Err(DeviceError::NotReady("display"));
        }

        let delay = Duration::from_millis(self.engine.config().inter_session_delay_ms);
        let mut played: u32 = 0;

        let keep_going = |played: u32| {
            running.load(Ordering::Acquire) && max_sessions.is_none_or(|max| played < max)
        };

        while keep_going(played) {
            self.run_session(display);
            played += 1;

            if keep_going(played) {
                self.pacer.sleep(delay);
            }
        }

        Ok(played)
    }

    fn commit<D: DisplaySink + ?Sized>(&mut self, display: &mut D) {
        display.annotate(&self.metrics);
        let desc = self.framebuffer.descriptor();
        if let Err(e) = display.write(0, 0, &desc, self.framebuffer.pixels()) {
            warn!(error = %e, "frame commit failed, continuing");
        }
    }
}
