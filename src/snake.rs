use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::input::Direction;

/// Board position in pixel coordinates, aligned to the cell grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the board.
    #[must_use]
    pub fn is_within(self, board: &BoardConfig) -> bool {
        self.x >= 0
            && self.y >= 0
            && i64::from(self.x) < i64::from(board.width)
            && i64::from(self.y) < i64::from(board.height)
    }

    /// Returns true when both coordinates are multiples of `cell_size`.
    #[must_use]
    pub fn is_aligned(self, cell_size: u32) -> bool {
        let cell = i64::from(cell_size);
        cell != 0 && i64::from(self.x) % cell == 0 && i64::from(self.y) % cell == 0
    }

    /// Returns the position `distance` pixels away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, distance: i32) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - distance,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + distance,
            },
            Direction::Left => Self {
                x: self.x - distance,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + distance,
                y: self.y,
            },
        }
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Inserts a new head in front of the current one.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Drops the tail segment, never the last remaining one.
    pub fn trim_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::BoardConfig;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn stepping_moves_one_cell_along_one_axis() {
        let origin = Position { x: 100, y: 100 };

        assert_eq!(origin.stepped(Direction::Up, 20), Position { x: 100, y: 80 });
        assert_eq!(
            origin.stepped(Direction::Down, 20),
            Position { x: 100, y: 120 }
        );
        assert_eq!(
            origin.stepped(Direction::Left, 20),
            Position { x: 80, y: 100 }
        );
        assert_eq!(
            origin.stepped(Direction::Right, 20),
            Position { x: 120, y: 100 }
        );
    }

    #[test]
    fn bounds_check_is_half_open() {
        let board = BoardConfig::default();

        assert!(Position { x: 0, y: 0 }.is_within(&board));
        assert!(Position { x: 380, y: 380 }.is_within(&board));
        assert!(!Position { x: 400, y: 100 }.is_within(&board));
        assert!(!Position { x: 100, y: 400 }.is_within(&board));
        assert!(!Position { x: -20, y: 100 }.is_within(&board));
        assert!(!Position { x: 100, y: -20 }.is_within(&board));
    }

    #[test]
    fn alignment_checks_both_axes() {
        assert!(Position { x: 40, y: 60 }.is_aligned(20));
        assert!(!Position { x: 40, y: 65 }.is_aligned(20));
        assert!(!Position { x: 40, y: 60 }.is_aligned(0));
    }

    #[test]
    fn tail_trim_keeps_the_head() {
        let mut snake = Snake::new(Position { x: 100, y: 100 });

        assert_eq!(snake.trim_tail(), None);
        assert_eq!(snake.len(), 1);

        snake.push_head(Position { x: 120, y: 100 });
        assert_eq!(snake.trim_tail(), Some(Position { x: 100, y: 100 }));
        assert_eq!(snake.head(), Position { x: 120, y: 100 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let straight = Snake::from_segments(vec![
            Position { x: 40, y: 0 },
            Position { x: 20, y: 0 },
            Position { x: 0, y: 0 },
        ]);
        let looped = Snake::from_segments(vec![
            Position { x: 20, y: 0 },
            Position { x: 20, y: 20 },
            Position { x: 0, y: 20 },
            Position { x: 20, y: 0 },
        ]);

        assert!(!straight.head_overlaps_body());
        assert!(looped.head_overlaps_body());
        assert_eq!(looped.len(), 4);
    }
}
