//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives in `GameState`.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use crate::consts::*;

/// Integer grid coordinate, each axis in `[0, GRID_SIZE)`
pub type Cell = IVec2;

/// Heading of the snake (screen coordinates, +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for one step in this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Snake body, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Build a snake from cells ordered head to tail
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            body: cells.into_iter().collect(),
        }
    }

    /// The two-cell starting snake
    pub fn initial() -> Self {
        Self::from_cells(START_SNAKE.iter().map(|&(x, y)| IVec2::new(x, y)))
    }

    pub fn head(&self) -> Cell {
        // Never empty: every constructor in the crate yields at least two cells
        self.body.front().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Cells from head to tail
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        self.body.pop_back()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub snake: Snake,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
    /// Best score this session; survives `reset`
    pub high_score: u32,
    /// Milliseconds between simulation steps
    pub speed_ms: u32,
    /// False once the snake has crashed; only a restart is accepted then
    pub running: bool,
    /// One direction change per step; reopened by the scheduler
    pub allow_move: bool,
    /// Food placement RNG
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::initial();
        let food = place_food(&snake, &mut rng);
        Self {
            seed,
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            high_score: 0,
            speed_ms: INITIAL_SPEED_MS,
            running: true,
            allow_move: false,
            rng,
        }
    }

    /// Start a new run. The high score and RNG stream carry over.
    pub fn reset(&mut self) {
        self.snake = Snake::initial();
        self.direction = Direction::Right;
        self.food = place_food(&self.snake, &mut self.rng);
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.running = true;
        self.allow_move = false;
    }

    /// Change heading unless `candidate` would reverse the snake onto itself.
    ///
    /// Returns whether the request was accepted. Acceptance closes the
    /// per-step gate.
    pub fn request_direction(&mut self, candidate: Direction) -> bool {
        if candidate == self.direction.opposite() {
            return false;
        }
        self.direction = candidate;
        self.allow_move = false;
        true
    }

    /// End the run. Returns true if the score set a new session best.
    pub(crate) fn game_over(&mut self) -> bool {
        self.running = false;
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
