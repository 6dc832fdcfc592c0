use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{
    BORDER_COLOR, BoardConfig, FOOD_COLOR, GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, SNAKE_COLOR,
    TERMINAL_COLUMNS_PER_CELL,
};
use crate::game::GameState;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, board: &BoardConfig) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state);
    let play_area = fit_board(play_area, board);

    let block = Block::bordered().border_style(Style::new().fg(BORDER_COLOR));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, board, state.food());
    render_snake(frame, inner, board, state);

    if state.is_game_over() {
        render_game_over_menu(frame, play_area, state.score(), state.collision());
    }
}

/// Shrinks `area` to the board size plus its border, anchored top-left.
fn fit_board(area: Rect, board: &BoardConfig) -> Rect {
    let columns = u16::try_from(board.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(board.rows()).unwrap_or(u16::MAX);

    let width = columns
        .saturating_mul(TERMINAL_COLUMNS_PER_CELL)
        .saturating_add(2);
    let height = rows.saturating_add(2);

    Rect {
        x: area.x,
        y: area.y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, board: &BoardConfig, food: Position) {
    let Some((x, y)) = cell_to_terminal(inner, board, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(FOOD_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, board: &BoardConfig, state: &GameState) {
    let buffer = frame.buffer_mut();
    for segment in state.snake().segments() {
        let Some((x, y)) = cell_to_terminal(inner, board, *segment) else {
            continue;
        };

        buffer.set_string(x, y, GLYPH_SNAKE_SEGMENT, Style::new().fg(SNAKE_COLOR));
    }
}

/// Maps a pixel position to the terminal cell drawing it, if visible.
fn cell_to_terminal(inner: Rect, board: &BoardConfig, position: Position) -> Option<(u16, u16)> {
    if !position.is_within(board) {
        return None;
    }

    let cell = i32::try_from(board.cell_size).ok()?;
    let column = u16::try_from(position.x / cell).ok()?;
    let row = u16::try_from(position.y / cell).ok()?;

    let x = inner
        .x
        .saturating_add(column.saturating_mul(TERMINAL_COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(TERMINAL_COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{cell_to_terminal, render};
    use crate::config::BoardConfig;
    use crate::engine::GameEngine;
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn pixel_positions_map_to_double_width_cells() {
        let board = BoardConfig::default();
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(
            cell_to_terminal(inner, &board, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            cell_to_terminal(inner, &board, Position { x: 100, y: 60 }),
            Some((11, 4))
        );
        assert_eq!(
            cell_to_terminal(inner, &board, Position { x: 400, y: 60 }),
            None
        );
    }

    #[test]
    fn running_frame_shows_snake_food_and_score() {
        let board = BoardConfig::default();
        let state = GameState::from_parts(
            Snake::new(Position { x: 100, y: 100 }),
            Position { x: 0, y: 0 },
            Direction::Right,
        );
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).expect("test backend");

        terminal
            .draw(|frame| render(frame, &state, &board))
            .expect("draw should succeed");

        let text = screen_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("()"));
        assert!(text.contains("█"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn game_over_frame_shows_final_score() {
        let board = BoardConfig::default();
        let mut engine = GameEngine::with_seed(board, 1).expect("default board is valid");
        let mut state = GameState::from_parts(
            Snake::new(Position { x: 380, y: 100 }),
            Position { x: 0, y: 0 },
            Direction::Right,
        );
        engine.advance(&mut state);
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).expect("test backend");

        terminal
            .draw(|frame| render(frame, &state, &board))
            .expect("draw should succeed");

        let text = screen_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final score: 0"));
        assert!(text.contains("hit the wall"));
    }
}
