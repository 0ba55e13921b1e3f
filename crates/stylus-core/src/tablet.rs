//! Tablet surface geometry

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{SURFACE_DRAW_OFFSET, SURFACE_HEIGHT, TABLET_DEPTH, TABLET_WIDTH};

/// Physical extents of the drawing tablet.
///
/// The tablet is centered on the world origin with its top surface at
/// `surface_height`. Offsets in [`crate::OrientationParameters`] are
/// measured from the tablet's (-width/2, -depth/2) corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabletGeometry {
    /// Active-area width along world X
    pub width: f32,
    /// Active-area depth along world Z
    pub depth: f32,
    /// Height of the top surface above the world origin
    pub surface_height: f32,
    /// Draw height for surface-level geometry (kept slightly above the
    /// surface so the renderer avoids z-fighting)
    pub surface_draw_offset: f32,
}

impl Default for TabletGeometry {
    fn default() -> Self {
        Self {
            width: TABLET_WIDTH,
            depth: TABLET_DEPTH,
            surface_height: SURFACE_HEIGHT,
            surface_draw_offset: SURFACE_DRAW_OFFSET,
        }
    }
}

impl TabletGeometry {
    /// Half extent along X
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Half extent along Z
    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }

    /// Clamp corner-relative offsets to the tablet surface and return the
    /// world-space contact point at the given hover distance.
    pub fn contact_point(&self, offset_x: f32, offset_z: f32, distance: f32) -> Vec3 {
        let x = (offset_x - self.half_width()).clamp(-self.half_width(), self.half_width());
        let z = (offset_z - self.half_depth()).clamp(-self.half_depth(), self.half_depth());
        Vec3::new(x, self.surface_height + distance, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_point_centered() {
        let tablet = TabletGeometry::default();
        let p = tablet.contact_point(8.0, 4.5, 0.0);
        assert_eq!(p, Vec3::new(0.0, tablet.surface_height, 0.0));
    }

    #[test]
    fn test_contact_point_clamped() {
        let tablet = TabletGeometry::default();
        let p = tablet.contact_point(1000.0, -1000.0, 0.0);
        assert_eq!(p.x, tablet.half_width());
        assert_eq!(p.z, -tablet.half_depth());
    }

    #[test]
    fn test_contact_point_hover() {
        let tablet = TabletGeometry::default();
        let p = tablet.contact_point(8.0, 4.5, 2.5);
        assert_eq!(p.y, tablet.surface_height + 2.5);
    }
}
