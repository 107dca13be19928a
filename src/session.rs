//! A play session: game state, step timing and presentation side effects

use crate::frontend::Frontend;
use crate::input::{Key, KeyOutcome, apply_key};
use crate::scheduler::FrameScheduler;
use crate::sim::{GameState, StepOutcome, choose_direction, step};

/// Owns the game state and drives it from host callbacks
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    scheduler: FrameScheduler,
    /// Demo mode: the greedy AI steers
    autopilot: bool,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            scheduler: FrameScheduler::new(),
            autopilot: false,
        }
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
        log::info!("Autopilot: {}", on);
    }

    pub fn toggle_autopilot(&mut self) {
        self.set_autopilot(!self.autopilot);
    }

    /// Push the initial readout to a freshly attached frontend
    pub fn sync<F: Frontend + ?Sized>(&self, frontend: &mut F) {
        frontend.set_score(self.state.score);
        frontend.set_high_score(self.state.high_score);
        frontend.show_game_over(!self.state.running);
    }

    /// Per-frame callback. Steps the game when due, then draws.
    ///
    /// Returns the step outcome if a step ran this frame.
    pub fn frame<F: Frontend + ?Sized>(
        &mut self,
        now_ms: f64,
        frontend: &mut F,
    ) -> Option<StepOutcome> {
        let mut outcome = None;

        if self.scheduler.poll(now_ms, self.state.speed_ms) {
            self.state.allow_move = true;

            if self.state.running {
                if self.autopilot {
                    if let Some(dir) = choose_direction(&self.state) {
                        self.state.request_direction(dir);
                    }
                }
                let result = step(&mut self.state);
                self.present(result, frontend);
                outcome = Some(result);
            }
        }

        frontend.draw_frame(&self.state.snake, self.state.food, self.state.direction);
        outcome
    }

    /// Keyboard callback
    pub fn key_down<F: Frontend + ?Sized>(&mut self, key: Key, frontend: &mut F) -> KeyOutcome {
        let outcome = apply_key(&mut self.state, key);
        if outcome == KeyOutcome::Restarted {
            frontend.set_score(self.state.score);
            frontend.show_game_over(false);
            log::info!("Game restarted (high score {})", self.state.high_score);
        }
        outcome
    }

    fn present<F: Frontend + ?Sized>(&self, outcome: StepOutcome, frontend: &mut F) {
        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::Ate { score } => {
                frontend.set_score(score);
                frontend.play_eat();
            }
            StepOutcome::Collided { new_high_score, .. } => {
                if new_high_score {
                    frontend.set_high_score(self.state.high_score);
                }
                frontend.show_game_over(true);
                frontend.play_game_over();
            }
        }
    }
}
