use crate::game::{GameState, StepResult};

use super::framebuffer::{BACKGROUND, FrameBuffer, SNAKE, TARGET};

/// Paints session state into a [`FrameBuffer`]
///
/// Only the tiles that changed are touched; the background is filled once
/// per session.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the board and draw the freshly spawned body and target
    pub fn paint_session_start(&self, fb: &mut FrameBuffer, state: &GameState) {
        fb.fill_background();
        for cell in &state.body {
            fb.paint_cell(cell, SNAKE);
        }
        fb.paint_cell(state.target, TARGET);
    }

    /// Apply the visible effects of one step
    pub fn paint_step(&self, fb: &mut FrameBuffer, state: &GameState, result: &StepResult) {
        if result.terminated {
            return;
        }

        fb.paint_cell(result.head, SNAKE);
        if let Some(vacated) = result.info.vacated {
            fb.paint_cell(vacated, BACKGROUND);
        }
        // repainted every step, the tail erase may have landed on it
        fb.paint_cell(state.target, TARGET);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
