use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Difficulty, GameState, Position};
use crate::session::{GamePhase, GameSession};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], session);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match session.phase() {
            GamePhase::GameOver => {
                let game_over = self.render_game_over(game_area, session);
                frame.render_widget(game_over, game_area);
            }
            phase => {
                let grid = self.render_grid(game_area, session.state(), phase);
                frame.render_widget(grid, game_area);
            }
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState, phase: GamePhase) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid_size {
            let mut spans = Vec::new();

            for x in 0..state.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(Color::LightGreen))
                } else if pos == state.food {
                    Span::raw(state.food_flavor.glyph())
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = match phase {
            GamePhase::Idle => " Snake — Space to start ",
            GamePhase::Paused => " Paused ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let state = session.state();
        let mode = match session.selected_difficulty() {
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };

        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.high_score().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{} ms", state.tick_ms),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Mode: ", Style::default().fg(Color::Yellow)),
            Span::styled(mode, Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.metrics().format_time(),
                Style::default().fg(Color::White),
            ),
        ];

        if session.is_muted() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("muted", Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let state = session.state();
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.high_score().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for a new game or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" start/pause | "),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" reset | "),
            Span::styled("1", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("2", Style::default().fg(Color::Cyan)),
            Span::raw(" difficulty | "),
            Span::styled("M", Style::default().fg(Color::Cyan)),
            Span::raw(" mute | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
