//! Angle annotation geometry
//!
//! Each enabled annotation is emitted as a bundle of drawable primitives:
//! an arc tracing the angle, a filled pie slice bounding it, a dashed
//! full reference circle, and a guide line anchoring the arc's zero-angle
//! direction. Bundles are immutable values, fully recomputed from the
//! pose on every parameter change; the renderer owns whatever GPU
//! resources it builds from them.
//!
//! The plane each angle is drawn in is fixed by convention:
//!
//! | annotation | center          | u          | v                      |
//! |------------|-----------------|------------|------------------------|
//! | azimuth    | tip surface proj| world +X   | world -Z (tablet plane)|
//! | altitude   | tip             | world up   | axis minus vertical    |
//! | barrel     | top             | frame +X   | frame +Z (no barrel)   |
//! | tilt-X     | tip             | world up   | world +X               |
//! | tilt-Y     | tip             | world up   | world +Z               |

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use stylus_core::constants::{
    AXIS_EPSILON, REFERENCE_CIRCLE_SEGMENTS, SURFACE_ARC_RADIUS, TILT_ARC_RADIUS,
};
use stylus_core::{DerivedTilts, OrientationParameters, Pose, TabletGeometry};

use crate::arc::{
    DashedPath, arc_points_in_plane, arc_segment_count, pie_local_points, pie_orientation,
};

/// Arcs and pies are suppressed below this sweep for the periodic angles
/// (azimuth, barrel), in degrees
pub const ANGLE_THRESHOLD_DEG: f32 = 0.1;

/// Which annotations are computed. A disabled annotation is absent from
/// the [`AnnotationSet`], not merely hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationVisibility {
    pub azimuth: bool,
    pub altitude: bool,
    pub barrel: bool,
    pub tilt_x: bool,
    pub tilt_y: bool,
}

impl Default for AnnotationVisibility {
    fn default() -> Self {
        // The azimuth annotation is shown from the start; the rest are
        // opt-in
        Self {
            azimuth: true,
            altitude: false,
            barrel: false,
            tilt_x: false,
            tilt_y: false,
        }
    }
}

/// Filled angular sector: a closed polygon in its own plane plus the
/// world placement of that plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// World position of the pie's apex
    pub center: Vec3,
    /// Rotation placing the local-XY polygon into the annotation plane
    pub orientation: Quat,
    /// Closed local-plane polygon: origin, arc samples, origin
    pub points: Vec<Vec2>,
}

/// Drawable geometry for one angle annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleAnnotation {
    /// Arc from the zero-angle direction to the angle's end direction
    pub arc_points: Vec<Vec3>,
    /// Filled sector bounding the arc
    pub pie: PieSlice,
    /// Full dashed circle through the arc, with per-point path distances
    pub reference_circle: DashedPath,
    /// Plane origin to the arc's zero-angle point
    pub guide_line: [Vec3; 2],
}

/// Shared construction: arc, pie, reference circle, and guide line in the
/// plane spanned by `u` and `v`.
fn build_annotation(
    center: Vec3,
    u: Vec3,
    v: Vec3,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
) -> AngleAnnotation {
    let sweep_deg = (end_angle - start_angle).to_degrees();
    let segments = arc_segment_count(sweep_deg);

    let arc_points = arc_points_in_plane(center, u, v, radius, start_angle, end_angle, segments);
    let pie = PieSlice {
        center,
        orientation: pie_orientation(u, v),
        points: pie_local_points(radius, start_angle, end_angle, segments),
    };
    let reference_circle = DashedPath::from_points(arc_points_in_plane(
        center,
        u,
        v,
        radius,
        0.0,
        std::f32::consts::TAU,
        REFERENCE_CIRCLE_SEGMENTS,
    ));
    let zero_point = center + (u * start_angle.cos() + v * start_angle.sin()) * radius;

    AngleAnnotation {
        arc_points,
        pie,
        reference_circle,
        guide_line: [center, zero_point],
    }
}

/// Azimuth annotation, drawn in the tablet plane around the tip's surface
/// projection. The zero direction sits at -90 degrees in local plane
/// coordinates (world +Z); the arc advances with azimuth.
pub fn azimuth_annotation(
    pose: &Pose,
    tablet: &TabletGeometry,
    azimuth_deg: f32,
    visible: bool,
) -> Option<AngleAnnotation> {
    if !visible || azimuth_deg.abs() <= ANGLE_THRESHOLD_DEG {
        return None;
    }
    let center = pose.tip_surface_projection(tablet.surface_draw_offset);
    let start = -FRAC_PI_2;
    let end = start + azimuth_deg.to_radians();
    Some(build_annotation(
        center,
        Vec3::X,
        Vec3::NEG_Z,
        SURFACE_ARC_RADIUS,
        start,
        end,
    ))
}

/// Altitude annotation ("fuscia" arc), drawn in the vertical plane that
/// contains the stylus axis, anchored at the tip.
///
/// `v` is the axis with its vertical component removed; when the stylus is
/// vertical enough that this degenerates, the rotated local +X stands in.
pub fn altitude_annotation(pose: &Pose, altitude_deg: f32, visible: bool) -> Option<AngleAnnotation> {
    if !visible || altitude_deg == 0.0 {
        return None;
    }
    let u = Vec3::Y;
    let axis = pose.long_axis;
    let projected = axis - u * axis.dot(u);
    let v = if projected.length() > AXIS_EPSILON {
        projected.normalize()
    } else {
        (pose.orientation * Vec3::X).normalize()
    };
    let end = axis.dot(v).atan2(axis.dot(u));
    Some(build_annotation(
        pose.tip_world,
        u,
        v,
        TILT_ARC_RADIUS,
        0.0,
        end,
    ))
}

/// Barrel annotation, drawn around the top of the stylus in the plane of
/// the barrel-free orientation frame. The arc starts at 90 degrees and
/// runs backward to 90 - barrel.
pub fn barrel_annotation(
    pose: &Pose,
    frame_without_barrel: Quat,
    barrel_deg: f32,
    visible: bool,
) -> Option<AngleAnnotation> {
    if !visible || barrel_deg.abs() <= ANGLE_THRESHOLD_DEG {
        return None;
    }
    let u = (frame_without_barrel * Vec3::X).normalize();
    let v = (frame_without_barrel * Vec3::Z).normalize();
    let start = FRAC_PI_2;
    let end = FRAC_PI_2 - barrel_deg.to_radians();
    Some(build_annotation(
        pose.top_world,
        u,
        v,
        SURFACE_ARC_RADIUS,
        start,
        end,
    ))
}

/// Tilt-X annotation in the vertical X plane at the tip.
pub fn tilt_x_annotation(pose: &Pose, tilt_x_deg: f32, visible: bool) -> Option<AngleAnnotation> {
    if !visible || tilt_x_deg == 0.0 {
        return None;
    }
    Some(build_annotation(
        pose.tip_world,
        Vec3::Y,
        Vec3::X,
        TILT_ARC_RADIUS,
        0.0,
        tilt_x_deg.to_radians(),
    ))
}

/// Tilt-Y annotation in the vertical Z plane at the tip.
pub fn tilt_y_annotation(pose: &Pose, tilt_y_deg: f32, visible: bool) -> Option<AngleAnnotation> {
    if !visible || tilt_y_deg == 0.0 {
        return None;
    }
    Some(build_annotation(
        pose.tip_world,
        Vec3::Y,
        Vec3::Z,
        TILT_ARC_RADIUS,
        0.0,
        tilt_y_deg.to_radians(),
    ))
}

/// All five annotation bundles for one parameter snapshot. Recomputed
/// whole on every change; a `None` entry means the annotation is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    pub azimuth: Option<AngleAnnotation>,
    pub altitude: Option<AngleAnnotation>,
    pub barrel: Option<AngleAnnotation>,
    pub tilt_x: Option<AngleAnnotation>,
    pub tilt_y: Option<AngleAnnotation>,
}

impl AnnotationSet {
    /// Recompute every enabled annotation from a pose
    pub fn compute(
        pose: &Pose,
        params: &OrientationParameters,
        tilts: &DerivedTilts,
        tablet: &TabletGeometry,
        visibility: &AnnotationVisibility,
    ) -> Self {
        let frame_without_barrel = Pose::orientation_without_barrel(params);
        Self {
            azimuth: azimuth_annotation(pose, tablet, params.azimuth, visibility.azimuth),
            altitude: altitude_annotation(pose, params.altitude, visibility.altitude),
            barrel: barrel_annotation(
                pose,
                frame_without_barrel,
                params.barrel,
                visibility.barrel,
            ),
            tilt_x: tilt_x_annotation(pose, tilts.tilt_x, visibility.tilt_x),
            tilt_y: tilt_y_annotation(pose, tilts.tilt_y, visibility.tilt_y),
        }
    }
}
