//! Device collaborators the game loop talks to
//!
//! The panel, the heartbeat LED and the scheduler are traits so the session
//! runs the same against real hardware, the terminal panel or the in-memory
//! doubles below.

use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::metrics::GameMetrics;
use crate::render::BufferDescriptor;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display rejected the frame: {0}")]
    Rejected(String),
    #[error("display i/o failed")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("{0} not ready")]
    NotReady(&'static str),
}

/// Panel that accepts a pixel rectangle at an offset and commits it
pub trait DisplaySink {
    fn is_ready(&self) -> bool {
        true
    }

    /// Turn the panel output on; called before the first commit of a session
    fn blanking_off(&mut self) -> Result<(), DisplayError>;

    fn write(
        &mut self,
        x: u16,
        y: u16,
        desc: &BufferDescriptor,
        buf: &[u16],
    ) -> Result<(), DisplayError>;

    /// Latest session statistics, for panels that can show them
    fn annotate(&mut self, _metrics: &GameMetrics) {}
}

/// Digital output flipped once per step
pub trait Heartbeat {
    fn toggle(&mut self);
}

/// Suspends the game loop between steps
pub trait Pacer {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the calling thread
#[derive(Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Returns immediately; for runs that should not be paced in real time
#[derive(Debug, Default)]
pub struct ImmediatePacer;

impl Pacer for ImmediatePacer {
    fn sleep(&mut self, _duration: Duration) {}
}

/// Keeps the last committed frame in memory
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    pub frame: Vec<u16>,
    pub last_descriptor: Option<BufferDescriptor>,
    pub commits: usize,
    pub blanking_offs: usize,
    /// When set every write fails
    pub reject_writes: bool,
    pub offline: bool,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for MemoryDisplay {
    fn is_ready(&self) -> bool {
        !self.offline
    }

    fn blanking_off(&mut self) -> Result<(), DisplayError> {
        self.blanking_offs += 1;
        Ok(())
    }

    fn write(
        &mut self,
        x: u16,
        y: u16,
        desc: &BufferDescriptor,
        buf: &[u16],
    ) -> Result<(), DisplayError> {
        if self.reject_writes {
            return Err(DisplayError::Rejected("writes disabled".to_string()));
        }
        if x != 0 || y != 0 || buf.len() != desc.buf_size as usize {
            return Err(DisplayError::Rejected(format!(
                "unexpected rectangle at ({x}, {y}) with {} pixels",
                buf.len()
            )));
        }
        self.frame.clear();
        self.frame.extend_from_slice(buf);
        self.last_descriptor = Some(*desc);
        self.commits += 1;
        Ok(())
    }
}

/// Heartbeat that only counts toggles
#[derive(Debug, Default)]
pub struct CountingHeartbeat {
    pub toggles: usize,
    pub level: bool,
}

impl Heartbeat for CountingHeartbeat {
    fn toggle(&mut self) {
        self.toggles += 1;
        self.level = !self.level;
    }
}

/// Records requested sleeps instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub sleeps: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
