//! Committed polyline data.

use std::fmt;

use bevy::prelude::*;

/// Stable handle for a geometry on a surface.
///
/// Commands hold ids rather than the geometry itself so that apply/reverse
/// keep working however the surface stores its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeometryId(pub u64);

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finalized polyline: a fixed vertex sequence plus a stroke color.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

impl Geometry {
    pub fn new(vertices: Vec<Vec2>, color: Color) -> Self {
        Self { vertices, color }
    }

    /// Line segments between consecutive vertices
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_follow_vertex_order() {
        let geometry = Geometry::new(
            vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)],
            Color::WHITE,
        );
        let segments: Vec<_> = geometry.segments().collect();
        assert_eq!(
            segments,
            vec![
                (Vec2::ZERO, Vec2::new(10.0, 0.0)),
                (Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_geometry_id_display() {
        assert_eq!(GeometryId(42).to_string(), "#42");
    }
}
