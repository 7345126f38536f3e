//! Rendering surface interface and the in-memory surface the editor draws from.

use std::collections::BTreeMap;

use bevy::prelude::*;

use super::error::SurfaceError;
use super::geometry::{Geometry, GeometryId};

/// The two drawing layers of a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceLayer {
    /// The in-progress draft, redrawn on every draft mutation
    Temporary,
    /// Finalized geometries
    Committed,
}

/// Narrow interface the history commands mutate.
pub trait Surface {
    fn add_geometry(&mut self, id: GeometryId, geometry: Geometry) -> Result<(), SurfaceError>;

    /// Remove a geometry, handing back what was stored
    fn remove_geometry(&mut self, id: GeometryId) -> Result<Geometry, SurfaceError>;

    fn set_color(&mut self, id: GeometryId, color: Color) -> Result<(), SurfaceError>;

    /// Current color of a geometry, `None` if it is not on the surface
    fn color(&self, id: GeometryId) -> Option<Color>;

    fn request_redraw(&mut self, layer: SurfaceLayer);
}

/// Id-keyed geometry table plus redraw bookkeeping.
///
/// Iteration is in id order, which is creation order, so a geometry that is
/// removed and re-added by undo/redo keeps its original stacking.
#[derive(Debug, Default)]
pub struct SketchSurface {
    geometries: BTreeMap<GeometryId, Geometry>,
    temporary_redraws: u64,
    committed_redraws: u64,
    pending_redraw: bool,
}

impl SketchSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries.get(&id)
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: GeometryId) -> bool {
        self.geometries.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeometryId, &Geometry)> {
        self.geometries.iter().map(|(id, geometry)| (*id, geometry))
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Number of redraws ever requested for a layer
    #[allow(dead_code)]
    pub fn redraw_count(&self, layer: SurfaceLayer) -> u64 {
        match layer {
            SurfaceLayer::Temporary => self.temporary_redraws,
            SurfaceLayer::Committed => self.committed_redraws,
        }
    }

    /// Returns whether any redraw was requested since the last call
    pub fn take_pending_redraw(&mut self) -> bool {
        std::mem::take(&mut self.pending_redraw)
    }
}

impl Surface for SketchSurface {
    fn add_geometry(&mut self, id: GeometryId, geometry: Geometry) -> Result<(), SurfaceError> {
        if self.geometries.contains_key(&id) {
            return Err(SurfaceError::DuplicateGeometry(id));
        }
        self.geometries.insert(id, geometry);
        Ok(())
    }

    fn remove_geometry(&mut self, id: GeometryId) -> Result<Geometry, SurfaceError> {
        self.geometries
            .remove(&id)
            .ok_or(SurfaceError::UnknownGeometry(id))
    }

    fn set_color(&mut self, id: GeometryId, color: Color) -> Result<(), SurfaceError> {
        let geometry = self
            .geometries
            .get_mut(&id)
            .ok_or(SurfaceError::UnknownGeometry(id))?;
        geometry.color = color;
        Ok(())
    }

    fn color(&self, id: GeometryId) -> Option<Color> {
        self.geometries.get(&id).map(|geometry| geometry.color)
    }

    fn request_redraw(&mut self, layer: SurfaceLayer) {
        match layer {
            SurfaceLayer::Temporary => self.temporary_redraws += 1,
            SurfaceLayer::Committed => self.committed_redraws += 1,
        }
        self.pending_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Geometry {
        Geometry::new(vec![Vec2::ZERO, Vec2::ONE], Color::WHITE)
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut surface = SketchSurface::new();
        surface.add_geometry(GeometryId(1), line()).unwrap();

        let err = surface.add_geometry(GeometryId(1), line()).unwrap_err();
        assert_eq!(err, SurfaceError::DuplicateGeometry(GeometryId(1)));
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_remove_unknown_is_an_error() {
        let mut surface = SketchSurface::new();
        assert_eq!(
            surface.remove_geometry(GeometryId(9)),
            Err(SurfaceError::UnknownGeometry(GeometryId(9)))
        );
    }

    #[test]
    fn test_set_color_updates_lookup() {
        let mut surface = SketchSurface::new();
        surface.add_geometry(GeometryId(1), line()).unwrap();
        surface.set_color(GeometryId(1), Color::BLACK).unwrap();

        assert_eq!(surface.color(GeometryId(1)), Some(Color::BLACK));
        assert!(surface.set_color(GeometryId(2), Color::BLACK).is_err());
    }

    #[test]
    fn test_iteration_is_in_id_order() {
        let mut surface = SketchSurface::new();
        surface.add_geometry(GeometryId(3), line()).unwrap();
        surface.add_geometry(GeometryId(1), line()).unwrap();
        surface.add_geometry(GeometryId(2), line()).unwrap();

        let ids: Vec<_> = surface.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_redraw_requests_are_counted_per_layer() {
        let mut surface = SketchSurface::new();
        assert!(!surface.take_pending_redraw());

        surface.request_redraw(SurfaceLayer::Temporary);
        surface.request_redraw(SurfaceLayer::Temporary);
        surface.request_redraw(SurfaceLayer::Committed);

        assert_eq!(surface.redraw_count(SurfaceLayer::Temporary), 2);
        assert_eq!(surface.redraw_count(SurfaceLayer::Committed), 1);
        assert!(surface.take_pending_redraw());
        assert!(!surface.take_pending_redraw());
    }
}
