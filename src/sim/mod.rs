//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per call, timing is the scheduler's job
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod food;
pub mod state;
pub mod step;

pub use autopilot::choose_direction;
pub use food::{in_bounds, place_food};
pub use state::{Cell, Direction, GameState, Snake};
pub use step::{Collision, StepOutcome, step};
