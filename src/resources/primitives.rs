use glam::{Vec2, Vec3};

/// A single textured triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleGeometry {
    pub positions: [Vec3; 3],
    pub uvs: [Vec2; 3],
    pub indices: [u16; 3],
    pub normal: Vec3,
}

/// Height of the triangle built by [`create_triangle`], whole units.
#[must_use]
pub fn triangle_height(width: f32) -> f32 {
    (3.0_f32.sqrt() / 2.0 * width).floor()
}

/// Builds an (integer-height) equilateral triangle standing on its apex.
///
/// Vertices are `(-w/2, h, 0)`, `(w/2, h, 0)` and the apex at the origin,
/// with `h = floor(√3/2 · w)`. The image's top edge maps to the top edge of
/// the triangle and its bottom-centre to the apex.
#[must_use]
pub fn create_triangle(width: f32) -> TriangleGeometry {
    let h = triangle_height(width);
    let w = width / 2.0;

    let positions = [Vec3::new(-w, h, 0.0), Vec3::new(w, h, 0.0), Vec3::ZERO];
    let normal = (positions[1] - positions[0])
        .cross(positions[2] - positions[0])
        .normalize_or_zero();

    TriangleGeometry {
        positions,
        uvs: [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.0)],
        indices: [0, 1, 2],
        normal,
    }
}
