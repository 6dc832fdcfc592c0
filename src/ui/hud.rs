use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;

/// Renders the score and key-hint rows and returns the play area above them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_line = Line::from(vec![
        Span::styled(
            format!("Score: {}", state.score()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Length: {}", state.snake().len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(score_line), score_area);

    frame.render_widget(
        Paragraph::new(Line::from("Arrows/WASD move  [R] Restart  [Q] Quit"))
            .style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    play_area
}
