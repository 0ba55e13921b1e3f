//! Pose solver
//!
//! Converts [`OrientationParameters`] into a world-space pose for the
//! stylus: a position, a composed orientation quaternion, and the derived
//! landmark points the annotation geometry is anchored to. The pose is a
//! pure function of the parameters and the tablet geometry.

use glam::{Quat, Vec2, Vec3};

use crate::constants::{
    AXIS_EPSILON, BARREL_LENGTH, FLAT_AXIS_EXTENSION, SURFACE_GUIDE_LENGTH, TIP_LENGTH,
};
use crate::params::OrientationParameters;
use crate::tablet::TabletGeometry;

/// World-space pose of the stylus, recomputed on every parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Placement of the stylus pivot (local origin)
    pub position: Vec3,
    /// Composed rotation: azimuth about world up, then altitude about
    /// world lateral, then barrel about the local long axis
    pub orientation: Quat,
    /// World position of the stylus tip (local -TIP_LENGTH on the long axis)
    pub tip_world: Vec3,
    /// World position of the stylus top (local +BARREL_LENGTH on the long axis)
    pub top_world: Vec3,
    /// Unit direction of the stylus long axis (local +Y under orientation)
    pub long_axis: Vec3,
}

impl Pose {
    /// Solve the pose for the given parameters.
    ///
    /// The tip lands exactly on the clamped tablet contact point raised by
    /// the hover distance; the pivot position is back-computed from the
    /// rotated tip offset.
    pub fn compute(params: &OrientationParameters, tablet: &TabletGeometry) -> Self {
        let contact = tablet.contact_point(
            params.tablet_offset_x,
            params.tablet_offset_z,
            params.distance,
        );

        let azimuth = Quat::from_axis_angle(Vec3::Y, params.azimuth.to_radians());
        let altitude = Quat::from_axis_angle(Vec3::X, params.altitude.to_radians());
        let barrel = Quat::from_axis_angle(Vec3::Y, params.barrel.to_radians());

        // Azimuth is outermost: orientation = azimuth * (altitude * barrel)
        let orientation = azimuth * (altitude * barrel);

        let tip_offset = orientation * (Vec3::Y * -TIP_LENGTH);
        let position = contact - tip_offset;

        Self {
            position,
            orientation,
            tip_world: position + tip_offset,
            top_world: position + orientation * (Vec3::Y * BARREL_LENGTH),
            long_axis: (orientation * Vec3::Y).normalize(),
        }
    }

    /// Orientation with the barrel spin removed (azimuth * altitude only).
    ///
    /// This is the reference frame the barrel annotation measures against.
    pub fn orientation_without_barrel(params: &OrientationParameters) -> Quat {
        let azimuth = Quat::from_axis_angle(Vec3::Y, params.azimuth.to_radians());
        let altitude = Quat::from_axis_angle(Vec3::X, params.altitude.to_radians());
        azimuth * altitude
    }

    /// Intersection of the stylus long axis with the horizontal plane at
    /// `surface_y`.
    ///
    /// When the axis is nearly horizontal (|dir.y| below epsilon) the
    /// ray/plane solve is singular; the point falls back to a fixed
    /// extension along the axis, pinned to the plane height.
    pub fn axis_surface_intersection(&self, surface_y: f32) -> Vec3 {
        if self.long_axis.y.abs() > AXIS_EPSILON {
            let t = (surface_y - self.tip_world.y) / self.long_axis.y;
            self.tip_world + self.long_axis * t
        } else {
            let mut p = self.tip_world + self.long_axis * FLAT_AXIS_EXTENSION;
            p.y = surface_y;
            p
        }
    }

    /// Tip dropped straight down onto the plane at `surface_y`
    pub fn tip_surface_projection(&self, surface_y: f32) -> Vec3 {
        Vec3::new(self.tip_world.x, surface_y, self.tip_world.z)
    }

    /// Top dropped straight down onto the plane at `surface_y`
    pub fn top_surface_projection(&self, surface_y: f32) -> Vec3 {
        Vec3::new(self.top_world.x, surface_y, self.top_world.z)
    }

    /// Planar heading from the tip projection toward the top projection.
    ///
    /// `None` when the two projections coincide (stylus vertical), where
    /// the heading is undefined.
    pub fn surface_heading(&self) -> Option<Vec2> {
        let d = Vec2::new(
            self.top_world.x - self.tip_world.x,
            self.top_world.z - self.tip_world.z,
        );
        if d.length() > AXIS_EPSILON {
            Some(d.normalize())
        } else {
            None
        }
    }
}

/// Dashed helper lines connecting the stylus to the tablet surface.
///
/// These are the hover guides the renderer draws alongside the pen: drop
/// lines from the top and tip, the long-axis extension down to the
/// surface, and a fixed-length heading segment on the surface itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverGuides {
    /// Top of the stylus straight down to the surface; only meaningful
    /// when the stylus is tilted
    pub top_drop: [Vec3; 2],
    /// Whether the top drop line should be shown (altitude non-zero)
    pub top_drop_visible: bool,
    /// Stylus tip straight down to the surface
    pub tip_drop: [Vec3; 2],
    /// Stylus tip along the long axis to the surface intersection
    pub axis_line: [Vec3; 2],
    /// Fixed-length heading segment on the surface, from the tip
    /// projection toward the top projection; `None` when the stylus is
    /// vertical
    pub heading_segment: Option<[Vec3; 2]>,
}

impl HoverGuides {
    /// Compute all hover guides for a pose
    pub fn compute(pose: &Pose, tablet: &TabletGeometry, altitude_deg: f32) -> Self {
        let surface_y = tablet.surface_height;
        let draw_y = tablet.surface_draw_offset;

        let tip_proj = pose.tip_surface_projection(surface_y);
        let heading_segment = pose.surface_heading().map(|dir| {
            let start = Vec3::new(tip_proj.x, draw_y, tip_proj.z);
            let end = start + Vec3::new(dir.x, 0.0, dir.y) * SURFACE_GUIDE_LENGTH;
            [start, end]
        });

        Self {
            top_drop: [pose.top_world, pose.top_surface_projection(surface_y)],
            top_drop_visible: altitude_deg != 0.0,
            tip_drop: [pose.tip_world, tip_proj],
            axis_line: [pose.tip_world, pose.axis_surface_intersection(surface_y)],
            heading_segment,
        }
    }
}
