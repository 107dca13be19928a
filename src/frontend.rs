//! Presentation collaborators
//!
//! The session only talks to the outside world through these traits. The
//! browser build implements them with WebGPU, DOM nodes and Web Audio; tests
//! and the headless binary use recorders or no-ops.

use crate::sim::{Cell, Direction, Snake};

/// Draws the board
pub trait Renderer {
    /// Called once per frame, whether or not the simulation stepped
    fn draw_frame(&mut self, snake: &Snake, food: Cell, direction: Direction);
}

/// Score / high score / game over readout
pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32);
    fn set_high_score(&mut self, high_score: u32);
    fn show_game_over(&mut self, visible: bool);
}

/// Fire-and-forget audio cues
pub trait SoundEffects {
    fn play_eat(&mut self);
    fn play_game_over(&mut self);
}

/// Everything a session needs to present itself
pub trait Frontend: Renderer + ScoreDisplay + SoundEffects {}

impl<T: Renderer + ScoreDisplay + SoundEffects> Frontend for T {}

/// Frontend that discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Renderer for Headless {
    fn draw_frame(&mut self, _snake: &Snake, _food: Cell, _direction: Direction) {}
}

impl ScoreDisplay for Headless {
    fn set_score(&mut self, _score: u32) {}
    fn set_high_score(&mut self, _high_score: u32) {}
    fn show_game_over(&mut self, _visible: bool) {}
}

impl SoundEffects for Headless {
    fn play_eat(&mut self) {}
    fn play_game_over(&mut self) {}
}
