use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GRID_EXTENT, GRID_TILES, TILE_SIZE};
use crate::metrics::SessionSnapshot;

use super::framebuffer::Rgb565;

/// Terminal color for a panel pixel
pub fn to_terminal_color(color: Rgb565) -> Color {
    let (r, g, b) = color.to_rgb888();
    Color::Rgb(r, g, b)
}

/// Downsample a full-board pixel buffer to one color per tile
///
/// Each tile is represented by its center pixel.
pub fn sample_tiles(pixels: &[u16]) -> Vec<Vec<Rgb565>> {
    let extent = GRID_EXTENT as usize;
    let half = (TILE_SIZE / 2) as usize;

    (0..GRID_TILES as usize)
        .map(|ty| {
            (0..GRID_TILES as usize)
                .map(|tx| {
                    let x = tx * TILE_SIZE as usize + half;
                    let y = ty * TILE_SIZE as usize + half;
                    Rgb565(pixels.get(y * extent + x).copied().unwrap_or(0))
                })
                .collect()
        })
        .collect()
}

/// Terminal stand-in for the physical panel
pub struct Panel;

impl Panel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        pixels: &[u16],
        status: &SessionSnapshot,
        led_on: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(status, led_on);
        frame.render_widget(stats, chunks[0]);

        // two terminal columns per tile keeps tiles roughly square
        let board_width = GRID_TILES as u16 * 2 + 2;
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_width),
                Constraint::Min(0),
            ])
            .split(chunks[1])[1];

        let board = self.render_board(pixels, status);
        frame.render_widget(board, board_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, pixels: &[u16], status: &SessionSnapshot) -> Paragraph<'static> {
        let lines: Vec<Line> = sample_tiles(pixels)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|color| Span::styled("██", Style::default().fg(to_terminal_color(color))))
                    .collect();
                Line::from(spans)
            })
            .collect();

        let border = if status.game_over {
            Color::Red
        } else {
            Color::White
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, status: &SessionSnapshot, led_on: bool) -> Paragraph<'static> {
        let led = if led_on {
            Span::styled("●", Style::default().fg(Color::Green))
        } else {
            Span::styled("○", Style::default().fg(Color::DarkGray))
        };

        let mut spans = vec![
            led,
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                status.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(status.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(status.format_time(), Style::default().fg(Color::White)),
        ];

        if status.game_over {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to push the stick | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}
