//! Board scene construction
//!
//! Turns the game state into a flat triangle list in canvas pixels. Pure data,
//! so it can be checked without a GPU.

use glam::Vec2;

use super::shapes::{dot, frame, rect, rounded_rect};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Cell, Direction, Snake};

const SEGMENT_RADIUS: f32 = 8.0;
const EYE_RADIUS: f32 = 3.0;
const EYE_INSET: f32 = 5.0;

/// Top-left pixel of a grid cell
pub fn cell_origin(cell: Cell) -> Vec2 {
    Vec2::splat(BOARD_OFFSET) + cell.as_vec2() * CELL_SIZE
}

/// Eye centers for a head whose cell starts at `origin`, on the leading edge
pub fn eye_positions(origin: Vec2, direction: Direction) -> [Vec2; 2] {
    let near = EYE_INSET;
    let far = CELL_SIZE - EYE_INSET;
    let (a, b) = match direction {
        Direction::Right => ((far, near), (far, far)),
        Direction::Left => ((near, near), (near, far)),
        Direction::Up => ((near, near), (far, near)),
        Direction::Down => ((near, far), (far, far)),
    };
    [origin + Vec2::new(a.0, a.1), origin + Vec2::new(b.0, b.1)]
}

/// Build the whole frame: border, food, snake body, eyes.
///
/// The background is the render pass clear color.
pub fn build_scene(snake: &Snake, food: Cell, direction: Direction) -> Vec<Vertex> {
    let board = Vec2::splat(CELL_SIZE * GRID_SIZE as f32);
    let cell = Vec2::splat(CELL_SIZE);

    let mut vertices = frame(Vec2::splat(BOARD_OFFSET), board, BORDER_WIDTH, colors::BORDER);
    vertices.extend(rect(cell_origin(food), cell, colors::FOOD));

    for segment in snake.iter() {
        vertices.extend(rounded_rect(
            cell_origin(segment),
            cell,
            SEGMENT_RADIUS,
            colors::SNAKE,
        ));
    }

    if !snake.is_empty() {
        for eye in eye_positions(cell_origin(snake.head()), direction) {
            vertices.extend(dot(eye, EYE_RADIUS, colors::EYE));
            vertices.extend(dot(eye, EYE_RADIUS - 1.0, colors::PUPIL));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_cell_origin() {
        assert_eq!(cell_origin(IVec2::new(0, 0)), Vec2::new(50.0, 50.0));
        assert_eq!(cell_origin(IVec2::new(6, 9)), Vec2::new(170.0, 230.0));
    }

    #[test]
    fn test_eyes_face_heading() {
        let origin = Vec2::new(100.0, 100.0);
        let [a, b] = eye_positions(origin, Direction::Right);
        assert_eq!(a, Vec2::new(115.0, 105.0));
        assert_eq!(b, Vec2::new(115.0, 115.0));

        let [a, b] = eye_positions(origin, Direction::Up);
        assert_eq!(a.y, 105.0);
        assert_eq!(b.y, 105.0);
    }

    #[test]
    fn test_scene_within_canvas() {
        let snake = Snake::initial();
        let vertices = build_scene(&snake, IVec2::new(GRID_SIZE - 1, 0), Direction::Right);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 3, 0);
        for v in &vertices {
            let [x, y] = v.position;
            assert!((0.0..=CANVAS_SIZE).contains(&x));
            assert!((0.0..=CANVAS_SIZE).contains(&y));
        }
    }

    #[test]
    fn test_food_drawn_in_red() {
        let snake = Snake::initial();
        let vertices = build_scene(&snake, IVec2::new(1, 1), Direction::Right);
        let food: Vec<_> = vertices
            .iter()
            .filter(|v| v.color == colors::FOOD)
            .collect();
        assert_eq!(food.len(), 6);
        assert!(food.iter().all(|v| v.position[0] >= 70.0 && v.position[0] <= 90.0));
    }
}
