use rand::Rng;

use crate::config::BoardConfig;
use crate::snake::Position;

/// Picks a grid-aligned cell uniformly at random over the whole board.
///
/// Each axis is sampled independently from `{0, G, 2G, ..., size - G}`.
/// Cells covered by the snake are not excluded, so food can land under it.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, board: &BoardConfig) -> Position {
    debug_assert!(board.cell_size > 0 && board.columns() > 0 && board.rows() > 0);

    let cell = board.cell_size as i32;
    let column = rng.gen_range(0..board.columns()) as i32;
    let row = rng.gen_range(0..board.rows()) as i32;

    Position {
        x: column * cell,
        y: row * cell,
    }
}
