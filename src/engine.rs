use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::food::spawn_position;
use crate::game::{Collision, GameState};
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Position, Snake};

/// Direction every new game starts with.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of one call to [`GameEngine::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed.
    Idle,
    /// The snake moved without eating.
    Moved,
    /// The snake ate the food and grew by one cell.
    Ate,
    /// The move ended the game.
    Collided(Collision),
}

/// Owns the board rules and the random source; mutates a [`GameState`]
/// passed in by exclusive reference.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    board: BoardConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine seeded from OS entropy.
    pub fn new(board: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible games.
    pub fn with_seed(board: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine drawing food positions from `rng`.
    ///
    /// Fails when the board geometry is inconsistent.
    pub fn with_rng(board: BoardConfig, rng: R) -> Result<Self, ConfigError> {
        board.validate()?;
        Ok(Self { board, rng })
    }

    #[must_use]
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Builds the initial state: one segment at the start cell, heading right, fresh food.
    pub fn new_game(&mut self) -> GameState {
        let food = self.place_food();
        GameState::from_parts(Snake::new(self.board.start), food, INITIAL_DIRECTION)
    }

    /// Draws a random grid-aligned food cell. May land on the snake.
    pub fn place_food(&mut self) -> Position {
        spawn_position(&mut self.rng, &self.board)
    }

    /// Steers the snake unless `requested` reverses the current direction.
    pub fn set_direction(&self, state: &mut GameState, requested: Direction) {
        if !direction_change_is_valid(state.direction, requested) {
            trace!(
                "ignoring reversal {:?} -> {:?}",
                state.direction, requested
            );
            return;
        }

        state.direction = requested;
    }

    /// Advances the simulation by one tick.
    ///
    /// The head moves first, then the tail is trimmed unless food was eaten,
    /// and only then is the collision check run.
    pub fn advance(&mut self, state: &mut GameState) -> TickOutcome {
        if state.game_over {
            return TickOutcome::Idle;
        }

        state.tick_count += 1;

        let cell = self.board.cell_size as i32;
        let new_head = state.snake.head().stepped(state.direction, cell);
        state.snake.push_head(new_head);

        let ate = new_head == state.food;
        if ate {
            state.score += 1;
            state.food = self.place_food();
            debug!(
                "food eaten at ({}, {}), score {}, next food ({}, {})",
                new_head.x, new_head.y, state.score, state.food.x, state.food.y
            );
        } else {
            let trimmed = state.snake.trim_tail();
            debug_assert!(trimmed.is_some(), "pushed head always leaves a tail to trim");
        }

        if let Some(collision) = self.collision(state) {
            state.game_over = true;
            state.collision = Some(collision);
            info!(
                "game over: {collision:?} collision at ({}, {}) after {} ticks, score {}",
                new_head.x, new_head.y, state.tick_count, state.score
            );
            return TickOutcome::Collided(collision);
        }

        if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Classifies the collision the head is in right now, if any.
    #[must_use]
    pub fn collision(&self, state: &GameState) -> Option<Collision> {
        if !state.snake.head().is_within(&self.board) {
            return Some(Collision::Wall);
        }

        if state.snake.head_overlaps_body() {
            return Some(Collision::SelfBody);
        }

        None
    }

    /// Returns true when the head is outside the board or on its own body.
    #[must_use]
    pub fn check_collision(&self, state: &GameState) -> bool {
        self.collision(state).is_some()
    }

    /// Resets `state` to a brand-new game.
    pub fn restart(&mut self, state: &mut GameState) {
        info!(
            "restarting game (previous score {}, {} ticks)",
            state.score, state.tick_count
        );
        *state = self.new_game();
    }
}
