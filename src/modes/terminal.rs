//! Play on the host terminal
//!
//! The terminal stands in for the panel, the keyboard for the stick and a
//! status-bar dot for the heartbeat LED. The game loop runs on its own OS
//! thread exactly as it would on the device; key presses arrive on the async
//! side and only ever touch the shared direction cell.

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::device::{DeviceError, DisplayError, DisplaySink, Heartbeat, ThreadPacer};
use crate::game::GameConfig;
use crate::input::{InputAdapter, KeyAction, KeyboardJoystick};
use crate::metrics::{GameMetrics, SessionSnapshot};
use crate::modes::DeviceMode;
use crate::render::{BufferDescriptor, Panel};

type Term = Terminal<CrosstermBackend<Stderr>>;

/// Heartbeat shown as a dot in the status bar
pub struct TerminalLed {
    level: Arc<AtomicBool>,
}

impl TerminalLed {
    pub fn new(level: Arc<AtomicBool>) -> Self {
        Self { level }
    }
}

impl Heartbeat for TerminalLed {
    fn toggle(&mut self) {
        self.level.fetch_xor(true, Ordering::Relaxed);
    }
}

/// Display sink drawing committed frames into the terminal
///
/// Drawing stops for good once `live` is cleared; the terminal lock makes
/// teardown wait for a draw already in flight.
pub struct TerminalDisplay {
    terminal: Arc<Mutex<Term>>,
    live: Arc<AtomicBool>,
    led: Arc<AtomicBool>,
    panel: Panel,
    status: SessionSnapshot,
    frame: Vec<u16>,
}

impl TerminalDisplay {
    pub fn new(terminal: Arc<Mutex<Term>>, live: Arc<AtomicBool>, led: Arc<AtomicBool>) -> Self {
        Self {
            terminal,
            live,
            led,
            panel: Panel::new(),
            status: SessionSnapshot::default(),
            frame: Vec::new(),
        }
    }

    fn draw(&mut self) -> Result<(), DisplayError> {
        let mut terminal = self
            .terminal
            .lock()
            .map_err(|_| DisplayError::Rejected("terminal lock poisoned".to_string()))?;
        if !self.live.load(Ordering::Acquire) {
            return Ok(());
        }

        let led_on = self.led.load(Ordering::Relaxed);
        terminal.draw(|frame| {
            self.panel.render(frame, &self.frame, &self.status, led_on);
        })?;
        Ok(())
    }
}

impl DisplaySink for TerminalDisplay {
    fn is_ready(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn blanking_off(&mut self) -> Result<(), DisplayError> {
        let mut terminal = self
            .terminal
            .lock()
            .map_err(|_| DisplayError::Rejected("terminal lock poisoned".to_string()))?;
        terminal.clear()?;
        Ok(())
    }

    fn write(
        &mut self,
        x: u16,
        y: u16,
        desc: &BufferDescriptor,
        buf: &[u16],
    ) -> Result<(), DisplayError> {
        if x != 0 || y != 0 || buf.len() != desc.buf_size as usize {
            return Err(DisplayError::Rejected(format!(
                "panel only takes full frames, got {}x{} at ({x}, {y})",
                desc.width, desc.height
            )));
        }
        self.frame.clear();
        self.frame.extend_from_slice(buf);
        self.draw()
    }

    fn annotate(&mut self, metrics: &GameMetrics) {
        self.status = metrics.snapshot();
        if self.status.game_over && !self.frame.is_empty() {
            if let Err(e) = self.draw() {
                debug!(error = %e, "game over redraw failed");
            }
        }
    }
}

pub struct TerminalMode {
    config: GameConfig,
    keyboard: KeyboardJoystick,
}

impl TerminalMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            keyboard: KeyboardJoystick::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        let terminal = Arc::new(Mutex::new(terminal));

        let live = Arc::new(AtomicBool::new(true));
        let led = Arc::new(AtomicBool::new(false));

        let mut device = DeviceMode::new(
            self.config.clone(),
            TerminalLed::new(Arc::clone(&led)),
            ThreadPacer,
        );
        let adapter = device.input_adapter();
        let mut display = TerminalDisplay::new(Arc::clone(&terminal), Arc::clone(&live), led);

        let game_live = Arc::clone(&live);
        let game_loop = thread::Builder::new()
            .name("game-loop".to_string())
            .spawn(move || device.run(&mut display, &game_live, None))
            .context("Failed to spawn game loop")?;

        let result = self.run_input_loop(&adapter, &game_loop).await;

        // Stop drawing before handing the terminal back
        live.store(false, Ordering::Release);
        self.cleanup_terminal(&terminal)?;

        if game_loop.is_finished() {
            let outcome = game_loop
                .join()
                .map_err(|_| anyhow!("game loop panicked"))?;
            outcome.context("Game loop failed")?;
        }

        result
    }

    async fn run_input_loop(
        &self,
        adapter: &InputAdapter,
        game_loop: &JoinHandle<Result<u32, DeviceError>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut watchdog = interval(Duration::from_millis(250));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(adapter, event) {
                                info!("quit requested");
                                return Ok(());
                            }
                        }
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => return Ok(()),
                    }
                }

                _ = watchdog.tick() => {
                    if game_loop.is_finished() {
                        return Ok(());
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    return Ok(());
                }
            }
        }
    }

    /// Feed one terminal event to the stick; returns true on quit
    fn handle_event(&self, adapter: &InputAdapter, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.keyboard.handle_key_event(key) {
            KeyAction::Stick(input) => {
                adapter.handle(&input);
                false
            }
            KeyAction::Quit => true,
            KeyAction::None => false,
        }
    }

    fn cleanup_terminal(&self, terminal: &Mutex<Term>) -> Result<()> {
        let mut terminal = terminal
            .lock()
            .map_err(|_| anyhow!("terminal lock poisoned"))?;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, SharedDirection};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn adapter() -> (InputAdapter, Arc<SharedDirection>) {
        let shared = Arc::new(SharedDirection::default());
        let adapter = InputAdapter::new(Arc::clone(&shared), GameConfig::default().joystick);
        (adapter, shared)
    }

    #[test]
    fn test_key_press_steers() {
        let mode = TerminalMode::new(GameConfig::default());
        let (adapter, shared) = adapter();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let quit = mode.handle_event(&adapter, Event::Key(up));

        assert!(!quit);
        assert_eq!(shared.load(), Direction::Up);
    }

    #[test]
    fn test_key_release_ignored() {
        let mode = TerminalMode::new(GameConfig::default());
        let (adapter, shared) = adapter();
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert!(!mode.handle_event(&adapter, Event::Key(release)));
        assert_eq!(shared.load(), Direction::Right);
    }

    #[test]
    fn test_quit_key() {
        let mode = TerminalMode::new(GameConfig::default());
        let (adapter, _) = adapter();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(mode.handle_event(&adapter, Event::Key(q)));
        assert!(!mode.handle_event(&adapter, Event::FocusGained));
    }

    #[test]
    fn test_led_toggles() {
        let level = Arc::new(AtomicBool::new(false));
        let mut led = TerminalLed::new(Arc::clone(&level));

        led.toggle();
        assert!(level.load(Ordering::Relaxed));
        led.toggle();
        assert!(!level.load(Ordering::Relaxed));
    }
}
