//! Grid Snake - classic Snake on a 25x25 board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food placement)
//! - `scheduler`: Fixed-interval step gate driven by the frame callback
//! - `input`: Keyboard mapping onto direction requests and restarts
//! - `session`: Ties state, scheduler and presentation collaborators together
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Read-only runtime settings

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod frontend;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod sim;

pub use frontend::{Frontend, Renderer, ScoreDisplay, SoundEffects};
pub use input::Key;
pub use scheduler::FrameScheduler;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Cells per side of the (square) board
    pub const GRID_SIZE: i32 = 25;
    /// Rejection-sampling bound for food placement
    pub const MAX_FOOD_ATTEMPTS: u32 = (GRID_SIZE * GRID_SIZE) as u32;

    /// Step interval at the start of a run (ms)
    pub const INITIAL_SPEED_MS: u32 = 200;
    /// Interval reduction applied on every speed-up (ms)
    pub const SPEED_STEP_MS: u32 = 10;
    /// Fastest allowed step interval (ms)
    pub const MIN_SPEED_MS: u32 = 60;
    /// Speed up every this many points
    pub const SPEEDUP_EVERY: u32 = 2;

    /// Initial snake, head first
    pub const START_SNAKE: [(i32, i32); 2] = [(6, 9), (5, 9)];

    /// Board layout in canvas pixels
    pub const CELL_SIZE: f32 = 20.0;
    pub const BOARD_OFFSET: f32 = 50.0;
    pub const BORDER_WIDTH: f32 = 5.0;
    /// Full canvas extent (board plus offset on both sides)
    pub const CANVAS_SIZE: f32 = BOARD_OFFSET * 2.0 + CELL_SIZE * GRID_SIZE as f32;
}
