//! Single simulation step
//!
//! Moves the snake one cell, resolving walls, self-bites and food.

use super::food::{in_bounds, place_food};
use super::state::GameState;
use crate::consts::*;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfBite,
}

/// Result of one call to [`step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Plain move, length unchanged
    Moved,
    /// Ate the food and grew by one
    Ate { score: u32 },
    /// Run is over
    Collided {
        cause: Collision,
        new_high_score: bool,
    },
}

/// Advance the game by one step. Only call while `state.running`.
pub fn step(state: &mut GameState) -> StepOutcome {
    let head = state.snake.head() + state.direction.delta();

    // Self-bite is checked against the full pre-move body, tail included
    let collision = if !in_bounds(head) {
        Some(Collision::Wall)
    } else if state.snake.contains(head) {
        Some(Collision::SelfBite)
    } else {
        None
    };

    if let Some(cause) = collision {
        let new_high_score = state.game_over();
        log::info!(
            "Game over ({:?}) - score {}, high score {}",
            cause,
            state.score,
            state.high_score
        );
        return StepOutcome::Collided {
            cause,
            new_high_score,
        };
    }

    state.snake.push_head(head);

    if head == state.food {
        state.food = place_food(&state.snake, &mut state.rng);
        state.score += 1;
        if state.score % SPEEDUP_EVERY == 0 {
            state.speed_ms = state
                .speed_ms
                .saturating_sub(SPEED_STEP_MS)
                .max(MIN_SPEED_MS);
            log::debug!("Speed up to {} ms per step", state.speed_ms);
        }
        StepOutcome::Ate { score: state.score }
    } else {
        state.snake.pop_tail();
        StepOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Cell, Direction, Snake};
    use glam::IVec2;
    use proptest::prelude::*;

    fn cells(state: &GameState) -> Vec<Cell> {
        state.snake.iter().collect()
    }

    /// State with food parked where the test won't reach it
    fn state_with_food_at(food: Cell) -> GameState {
        let mut state = GameState::new(2024);
        state.food = food;
        state
    }

    #[test]
    fn test_plain_move() {
        let mut state = state_with_food_at(IVec2::new(0, 0));
        let outcome = step(&mut state);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(cells(&state), vec![IVec2::new(7, 9), IVec2::new(6, 9)]);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_eat_grows_and_scores() {
        let mut state = state_with_food_at(IVec2::new(7, 9));
        let outcome = step(&mut state);
        assert_eq!(outcome, StepOutcome::Ate { score: 1 });
        assert_eq!(
            cells(&state),
            vec![IVec2::new(7, 9), IVec2::new(6, 9), IVec2::new(5, 9)]
        );
        assert!(!state.snake.contains(state.food));
        // Odd score: no speed change yet
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS);
    }

    #[test]
    fn test_speed_ramp_every_two_points() {
        let mut state = state_with_food_at(IVec2::new(7, 9));
        state.score = 1;
        step(&mut state);
        assert_eq!(state.score, 2);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS - SPEED_STEP_MS);
    }

    #[test]
    fn test_speed_floor() {
        let mut state = state_with_food_at(IVec2::new(7, 9));
        state.score = 41;
        state.speed_ms = MIN_SPEED_MS;
        step(&mut state);
        assert_eq!(state.speed_ms, MIN_SPEED_MS);
    }

    #[test]
    fn test_right_wall_ends_game() {
        let mut state = state_with_food_at(IVec2::new(0, 0));
        state.snake =
            Snake::from_cells([IVec2::new(GRID_SIZE - 1, 3), IVec2::new(GRID_SIZE - 2, 3)]);
        state.score = 3;
        let outcome = step(&mut state);
        assert_eq!(
            outcome,
            StepOutcome::Collided {
                cause: Collision::Wall,
                new_high_score: true,
            }
        );
        assert!(!state.running);
        assert_eq!(state.high_score, 3);
        // Body untouched by the failed move
        assert_eq!(state.snake.head(), IVec2::new(GRID_SIZE - 1, 3));
    }

    #[test]
    fn test_left_wall_ends_game_without_new_best() {
        let mut state = state_with_food_at(IVec2::new(10, 10));
        state.snake = Snake::from_cells([IVec2::new(0, 3), IVec2::new(1, 3)]);
        state.direction = Direction::Left;
        state.high_score = 8;
        state.score = 2;
        let outcome = step(&mut state);
        assert_eq!(
            outcome,
            StepOutcome::Collided {
                cause: Collision::Wall,
                new_high_score: false,
            }
        );
        assert_eq!(state.high_score, 8);
    }

    #[test]
    fn test_bite_checks_tail_before_it_moves() {
        // 2x2 loop: head would step onto the current tail cell
        let mut state = state_with_food_at(IVec2::new(0, 0));
        state.snake = Snake::from_cells([
            IVec2::new(5, 5),
            IVec2::new(5, 6),
            IVec2::new(6, 6),
            IVec2::new(6, 5),
        ]);
        state.direction = Direction::Right;
        let outcome = step(&mut state);
        assert!(matches!(
            outcome,
            StepOutcome::Collided {
                cause: Collision::SelfBite,
                ..
            }
        ));
    }

    #[test]
    fn test_simple_scenario_from_start() {
        let mut state = GameState::new(1);
        // Make sure food is not in the path of the first step
        state.food = IVec2::new(20, 20);
        step(&mut state);
        assert_eq!(cells(&state), vec![IVec2::new(7, 9), IVec2::new(6, 9)]);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(
            seed in any::<u64>(),
            turns in prop::collection::vec(0usize..4, 1..300),
        ) {
            let mut state = GameState::new(seed);
            let mut prev_score = 0;
            let mut prev_speed = state.speed_ms;

            for t in turns {
                if !state.running {
                    break;
                }
                let before_dir = state.direction;
                let candidate = Direction::ALL[t];
                let accepted = state.request_direction(candidate);
                if candidate == before_dir.opposite() {
                    prop_assert!(!accepted);
                    prop_assert_eq!(state.direction, before_dir);
                }

                let len_before = state.snake.len();
                match step(&mut state) {
                    StepOutcome::Moved => prop_assert_eq!(state.snake.len(), len_before),
                    StepOutcome::Ate { .. } => {
                        prop_assert_eq!(state.snake.len(), len_before + 1);
                        prop_assert!(!state.snake.contains(state.food));
                    }
                    StepOutcome::Collided { .. } => {
                        prop_assert_eq!(state.snake.len(), len_before);
                        prop_assert!(state.high_score >= state.score);
                    }
                }

                prop_assert!(state.snake.iter().all(in_bounds));
                prop_assert!(state.score >= prev_score);
                prop_assert!(state.speed_ms <= prev_speed);
                prop_assert!(state.speed_ms >= MIN_SPEED_MS);
                prev_score = state.score;
                prev_speed = state.speed_ms;
            }
        }
    }
}
