//! Food placement by rejection sampling

use glam::IVec2;
use rand::Rng;

use super::state::{Cell, Snake};
use crate::consts::{GRID_SIZE, MAX_FOOD_ATTEMPTS};

/// True if `cell` lies on the board
#[inline]
pub fn in_bounds(cell: Cell) -> bool {
    (0..GRID_SIZE).contains(&cell.x) && (0..GRID_SIZE).contains(&cell.y)
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    IVec2::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
}

/// Pick a uniformly random cell not covered by the snake.
///
/// Gives up after `MAX_FOOD_ATTEMPTS` resamples and returns the last sample,
/// which can overlap the snake on a nearly full board. Known limitation.
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Cell {
    let mut cell = random_cell(rng);
    let mut attempts = 0;
    while snake.contains(cell) && attempts < MAX_FOOD_ATTEMPTS {
        cell = random_cell(rng);
        attempts += 1;
    }
    if snake.contains(cell) {
        log::warn!(
            "Food placement gave up after {} attempts, food overlaps snake at {}",
            attempts,
            cell
        );
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_in_bounds_edges() {
        assert!(in_bounds(IVec2::new(0, 0)));
        assert!(in_bounds(IVec2::new(GRID_SIZE - 1, GRID_SIZE - 1)));
        assert!(!in_bounds(IVec2::new(-1, 3)));
        assert!(!in_bounds(IVec2::new(3, GRID_SIZE)));
    }

    #[test]
    fn test_food_avoids_snake() {
        let snake = Snake::initial();
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..500 {
            let food = place_food(&snake, &mut rng);
            assert!(in_bounds(food));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_single_free_cell_found() {
        // Everything but (24, 24) is snake
        let free = IVec2::new(GRID_SIZE - 1, GRID_SIZE - 1);
        let cells = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| IVec2::new(x, y)))
            .filter(|&c| c != free);
        let snake = Snake::from_cells(cells);
        // Seed 2 lands on the hole after a dozen resamples
        let mut rng = Pcg32::seed_from_u64(2);
        let food = place_food(&snake, &mut rng);
        assert_eq!(food, free);
    }

    #[test]
    fn test_full_board_falls_back_to_overlap() {
        let cells = (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| IVec2::new(x, y)));
        let snake = Snake::from_cells(cells);
        let mut rng = Pcg32::seed_from_u64(11);
        let food = place_food(&snake, &mut rng);
        assert!(snake.contains(food));
    }
}
