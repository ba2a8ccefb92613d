//! Axis-aligned bounding box helpers shared by every moving thing.

/// Edges of an axis-aligned rectangle in screen space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            right: x + width,
            top: y,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Horizontal alignment with `other`, allowing a slack of `tolerance`
    /// on either the left or the right edge.
    pub fn aligned_horizontally(&self, other: &Aabb, tolerance: f32) -> bool {
        (self.left - other.left).abs() < tolerance || (self.right - other.right).abs() < tolerance
    }

    /// Vertical counterpart of [`Aabb::aligned_horizontally`].
    pub fn aligned_vertically(&self, other: &Aabb, tolerance: f32) -> bool {
        (self.top - other.top).abs() < tolerance || (self.bottom - other.bottom).abs() < tolerance
    }
}

/// True when two edges are at most `reach` apart.
#[inline]
pub fn touching(edge: f32, other_edge: f32, reach: f32) -> bool {
    (edge - other_edge).abs() <= reach
}

/// One tick of velocity integration.
#[inline]
pub fn integrate(x: f32, y: f32, velocity_x: f32, velocity_y: f32) -> (f32, f32) {
    (x + velocity_x, y + velocity_y)
}
