//! Idle/demo mode - greedy AI that steers toward the food

use super::food::in_bounds;
use super::state::{Direction, GameState};

/// Pick the safe, non-reversing direction that gets closest to the food.
///
/// Returns `None` when every option crashes; the caller keeps the current
/// heading in that case.
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    let head = state.snake.head();
    Direction::ALL
        .into_iter()
        .filter(|&dir| dir != state.direction.opposite())
        .filter(|&dir| {
            let next = head + dir.delta();
            in_bounds(next) && !state.snake.contains(next)
        })
        .min_by_key(|&dir| {
            let next = head + dir.delta();
            let dist = (state.food - next).abs();
            // Prefer going straight on ties to avoid zig-zagging
            (dist.x + dist.y, dir != state.direction)
        })
}
