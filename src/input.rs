//! Keyboard input mapping
//!
//! Turns host key names into direction requests and restarts.

use crate::sim::{Direction, GameState};

/// Symbolic keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Unknown keys yield `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Restart),
            _ => None,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Restart => None,
        }
    }
}

/// What a key press did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Turned(Direction),
    Restarted,
}

/// Apply a key press to the state.
///
/// While the run is live only one turn is allowed per step; restart only
/// works after a game over.
pub fn apply_key(state: &mut GameState, key: Key) -> KeyOutcome {
    if !state.allow_move && state.running {
        return KeyOutcome::Ignored;
    }

    match key.direction() {
        Some(dir) => {
            if state.request_direction(dir) {
                KeyOutcome::Turned(dir)
            } else {
                KeyOutcome::Ignored
            }
        }
        None if !state.running => {
            state.reset();
            KeyOutcome::Restarted
        }
        None => KeyOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_key_name(" "), Some(Key::Restart));
        assert_eq!(Key::from_key_name("x"), None);
        assert_eq!(Key::from_key_name("Enter"), None);
    }

    #[test]
    fn test_closed_gate_ignores_input() {
        let mut state = GameState::new(1);
        assert!(!state.allow_move);
        assert_eq!(apply_key(&mut state, Key::Up), KeyOutcome::Ignored);
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn test_one_turn_per_step() {
        let mut state = GameState::new(1);
        state.allow_move = true;
        assert_eq!(apply_key(&mut state, Key::Up), KeyOutcome::Turned(Direction::Up));
        // Gate is now closed, a second turn must wait for the next step
        assert_eq!(apply_key(&mut state, Key::Left), KeyOutcome::Ignored);
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn test_reverse_keeps_gate_open() {
        let mut state = GameState::new(1);
        state.allow_move = true;
        assert_eq!(apply_key(&mut state, Key::Left), KeyOutcome::Ignored);
        assert!(state.allow_move);
        assert_eq!(apply_key(&mut state, Key::Down), KeyOutcome::Turned(Direction::Down));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(1);
        state.allow_move = true;
        assert_eq!(apply_key(&mut state, Key::Restart), KeyOutcome::Ignored);

        state.running = false;
        state.allow_move = false;
        state.score = 4;
        assert_eq!(apply_key(&mut state, Key::Restart), KeyOutcome::Restarted);
        assert!(state.running);
        assert_eq!(state.score, 0);
    }
}
