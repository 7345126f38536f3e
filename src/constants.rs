//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Committed vertices at which a polyline finalizes on its own
pub const DEFAULT_MAX_VERTICES: usize = 10;

/// Smallest usable vertex cap. The cap-triggered finalize happens from the
/// many-points state, which already holds two committed vertices.
pub const MIN_MAX_VERTICES: usize = 3;

/// Default stroke width for polylines, in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Alpha applied to the in-progress draft
pub const DRAFT_ALPHA: f32 = 0.5;

/// Radius of the vertex markers drawn on the draft
pub const DRAFT_VERTEX_RADIUS: f32 = 3.0;
