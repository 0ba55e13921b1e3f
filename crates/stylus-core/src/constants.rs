//! Global constants for stylus-core
//!
//! All lengths are in inch-equivalent units matching the tablet model.

/// Tablet active-area width
pub const TABLET_WIDTH: f32 = 16.0;

/// Tablet active-area depth
pub const TABLET_DEPTH: f32 = 9.0;

/// Height of the tablet's top surface above the world origin
pub const SURFACE_HEIGHT: f32 = 0.05;

/// Draw height for geometry lying on the tablet surface (slightly above
/// the surface to avoid z-fighting in the renderer)
pub const SURFACE_DRAW_OFFSET: f32 = 0.051;

/// Length of the stylus tip cone (tip landmark sits at -TIP_LENGTH on the
/// local long axis)
pub const TIP_LENGTH: f32 = 0.5;

/// Length of the stylus barrel (top landmark sits at +BARREL_LENGTH on the
/// local long axis)
pub const BARREL_LENGTH: f32 = 4.0;

/// Arc radius for the azimuth and barrel annotations
pub const SURFACE_ARC_RADIUS: f32 = 1.5;

/// Arc radius for the altitude and tilt annotations
pub const TILT_ARC_RADIUS: f32 = 2.0;

/// Below this magnitude a direction component is treated as degenerate
pub const AXIS_EPSILON: f32 = 0.001;

/// Extension distance used when the stylus axis is too flat to intersect
/// the tablet surface
pub const FLAT_AXIS_EXTENSION: f32 = 20.0;

/// Fixed length of the surface heading guide segment
pub const SURFACE_GUIDE_LENGTH: f32 = 2.0;

/// Segment count for full reference circles
pub const REFERENCE_CIRCLE_SEGMENTS: u32 = 64;

/// Duration of the built-in demo transition in milliseconds
pub const DEMO_DURATION_MS: f32 = 4000.0;
