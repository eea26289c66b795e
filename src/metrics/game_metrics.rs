use std::time::{Duration, Instant};

fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Fixed-size view of the current session for status displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub score: u32,
    pub steps: u32,
    pub high_score: u32,
    pub elapsed_time: Duration,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn format_time(&self) -> String {
        format_elapsed(self.elapsed_time)
    }
}

/// Per-process session statistics; nothing here is persisted
#[derive(Debug, Clone)]
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub score: u32,
    pub steps: u32,
    pub high_score: u32,
    pub last_score: Option<u32>,
    pub sessions_played: u32,
    /// Final score of every finished session, oldest first
    pub scores: Vec<u32>,
    pub game_over: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            score: 0,
            steps: 0,
            high_score: 0,
            last_score: None,
            sessions_played: 0,
            scores: Vec::new(),
            game_over: false,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.score = 0;
        self.steps = 0;
        self.game_over = false;
    }

    pub fn on_step(&mut self, score: u32, steps: u32) {
        self.score = score;
        self.steps = steps;
        self.update();
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.sessions_played += 1;
        self.last_score = Some(final_score);
        self.scores.push(final_score);
        self.game_over = true;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        format_elapsed(self.elapsed_time)
    }

    /// Scalar fields only; the score history stays behind
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            steps: self.steps,
            high_score: self.high_score,
            elapsed_time: self.elapsed_time,
            game_over: self.game_over,
        }
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
