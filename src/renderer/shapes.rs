//! Shape generation for 2D primitives
//!
//! All coordinates are canvas pixels, origin top-left, +y down.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for full circles
const CIRCLE_SEGMENTS: u32 = 16;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Filled rectangle with rounded corners.
///
/// Built from a cross of two rectangles plus a quarter-resolution circle in
/// each corner. `radius` is clamped to half the shorter side.
pub fn rounded_rect(min: Vec2, size: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    if r == 0.0 {
        return rect(min, size, color);
    }

    let mut vertices = Vec::with_capacity(12 + 4 * CIRCLE_SEGMENTS as usize * 3);
    // Horizontal band and vertical band
    vertices.extend(rect(
        Vec2::new(min.x, min.y + r),
        Vec2::new(size.x, size.y - 2.0 * r),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x + r, min.y),
        Vec2::new(size.x - 2.0 * r, size.y),
        color,
    ));

    let max = min + size;
    for corner in [
        Vec2::new(min.x + r, min.y + r),
        Vec2::new(max.x - r, min.y + r),
        Vec2::new(min.x + r, max.y - r),
        Vec2::new(max.x - r, max.y - r),
    ] {
        vertices.extend(circle(corner, r, color, CIRCLE_SEGMENTS));
    }

    vertices
}

/// Hollow rectangle outline drawn outside `min..min+size`
pub fn frame(min: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness;
    let outer_min = min - Vec2::splat(t);
    let outer_size = size + Vec2::splat(2.0 * t);

    let mut vertices = Vec::with_capacity(24);
    // Top, bottom, left, right
    vertices.extend(rect(outer_min, Vec2::new(outer_size.x, t), color));
    vertices.extend(rect(
        Vec2::new(outer_min.x, min.y + size.y),
        Vec2::new(outer_size.x, t),
        color,
    ));
    vertices.extend(rect(Vec2::new(outer_min.x, min.y), Vec2::new(t, size.y), color));
    vertices.extend(rect(
        Vec2::new(min.x + size.x, min.y),
        Vec2::new(t, size.y),
        color,
    ));
    vertices
}

/// Default-resolution circle
pub fn dot(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    circle(center, radius, color, CIRCLE_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        let mut lo = Vec2::splat(f32::MAX);
        let mut hi = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            lo = lo.min(p);
            hi = hi.max(p);
        }
        (lo, hi)
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(bounds(&v), (Vec2::new(10.0, 20.0), Vec2::new(15.0, 25.0)));
    }

    #[test]
    fn test_rounded_rect_stays_inside() {
        let v = rounded_rect(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0), 8.0, [1.0; 4]);
        let (lo, hi) = bounds(&v);
        assert!(lo.x >= -0.001 && lo.y >= -0.001);
        assert!(hi.x <= 20.001 && hi.y <= 20.001);
    }

    #[test]
    fn test_frame_surrounds_area() {
        let v = frame(Vec2::new(50.0, 50.0), Vec2::new(500.0, 500.0), 5.0, [1.0; 4]);
        assert_eq!(v.len(), 24);
        assert_eq!(bounds(&v), (Vec2::new(45.0, 45.0), Vec2::new(555.0, 555.0)));
    }
}
