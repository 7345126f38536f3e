//! Surface error types.

use thiserror::Error;

use super::geometry::GeometryId;

/// A rendering surface rejected a mutation.
///
/// These are contract violations between commands and the surface (the
/// history only ever replays commands in stack order), so callers propagate
/// them instead of recovering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Tried to insert a geometry under an id that is already on the surface.
    #[error("geometry {0} is already on the surface")]
    DuplicateGeometry(GeometryId),

    /// Tried to remove or recolor a geometry that is not on the surface.
    #[error("geometry {0} is not on the surface")]
    UnknownGeometry(GeometryId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_display_duplicate() {
        let err = SurfaceError::DuplicateGeometry(GeometryId(7));
        assert_eq!(err.to_string(), "geometry #7 is already on the surface");
    }

    #[test]
    fn surface_error_display_unknown() {
        let err = SurfaceError::UnknownGeometry(GeometryId(3));
        assert_eq!(err.to_string(), "geometry #3 is not on the surface");
    }
}
