//! Run sessions without a panel or a stick
//!
//! With no input the snake keeps its starting direction, so this is mostly a
//! smoke test of the loop and of target placement for a given seed.

use anyhow::{Context, Result};
use std::sync::atomic::AtomicBool;
use tracing::info;

use crate::device::{CountingHeartbeat, ImmediatePacer, MemoryDisplay, Pacer, ThreadPacer};
use crate::game::GameConfig;
use crate::modes::DeviceMode;

pub struct HeadlessMode {
    config: GameConfig,
    sessions: u32,
    realtime: bool,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, sessions: u32, realtime: bool) -> Self {
        Self {
            config,
            sessions,
            realtime,
        }
    }

    pub fn run(&self) -> Result<Vec<u32>> {
        if self.realtime {
            self.run_with(ThreadPacer)
        } else {
            self.run_with(ImmediatePacer)
        }
    }

    fn run_with<P: Pacer>(&self, pacer: P) -> Result<Vec<u32>> {
        let mut device = DeviceMode::new(self.config.clone(), CountingHeartbeat::default(), pacer);
        let mut memory = MemoryDisplay::new();
        let running = AtomicBool::new(true);

        let played = device
            .run(&mut memory, &running, Some(self.sessions))
            .context("Failed to run sessions")?;
        let scores = device.metrics().scores.clone();

        info!(
            sessions = played,
            high_score = device.metrics().high_score,
            commits = memory.commits,
            heartbeats = device.heartbeat().toggles,
            "headless run finished"
        );
        Ok(scores)
    }
}
