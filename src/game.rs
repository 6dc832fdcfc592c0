use crate::input::Direction;
use crate::snake::{Position, Snake};

/// High-level classification of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBody,
}

/// Complete simulation data for one game.
///
/// Read access is public; only [`crate::engine::GameEngine`] mutates it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub(crate) snake: Snake,
    pub(crate) food: Position,
    pub(crate) direction: Direction,
    pub(crate) score: u32,
    pub(crate) game_over: bool,
    pub(crate) collision: Option<Collision>,
    pub(crate) tick_count: u64,
}

impl GameState {
    /// Builds a live state from explicit parts, e.g. to set up a scenario.
    #[must_use]
    pub fn from_parts(snake: Snake, food: Position, direction: Direction) -> Self {
        Self {
            snake,
            food,
            direction,
            score: 0,
            game_over: false,
            collision: None,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Reason for the game over, if the game has ended.
    #[must_use]
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    /// Ticks advanced since the game started.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    #[test]
    fn scenario_state_starts_running() {
        let state = GameState::from_parts(
            Snake::new(Position { x: 40, y: 40 }),
            Position { x: 0, y: 0 },
            Direction::Down,
        );

        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.collision(), None);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().head(), Position { x: 40, y: 40 });
    }
}
