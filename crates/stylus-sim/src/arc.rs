//! Planar arc and pie-slice primitives
//!
//! All annotation arcs are circles in a plane spanned by two orthonormal
//! basis vectors (u, v): a point at angle `a` is
//! `center + u * r * cos(a) + v * r * sin(a)`. Pie slices are emitted as
//! closed polygons in their own local plane plus a world orientation, so
//! the renderer can instance them as flat shapes.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Segment count for an arc spanning `angle_deg` degrees: one segment per
/// 5 degrees, never fewer than 8.
pub fn arc_segment_count(angle_deg: f32) -> u32 {
    ((angle_deg.abs() / 5.0).floor() as u32).max(8)
}

/// Sample an arc in the plane spanned by `u` and `v`, from `start_angle`
/// to `end_angle` (radians), inclusive of both endpoints.
pub fn arc_points_in_plane(
    center: Vec3,
    u: Vec3,
    v: Vec3,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    segments: u32,
) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let angle = start_angle + (end_angle - start_angle) * (i as f32 / segments as f32);
        points.push(center + u * (radius * angle.cos()) + v * (radius * angle.sin()));
    }
    points
}

/// Closed pie-slice polygon in local plane coordinates: origin, the arc
/// samples from `start_angle` to `end_angle`, back to origin.
pub fn pie_local_points(radius: f32, start_angle: f32, end_angle: f32, segments: u32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(segments as usize + 3);
    points.push(Vec2::ZERO);
    for i in 0..=segments {
        let angle = start_angle + (end_angle - start_angle) * (i as f32 / segments as f32);
        points.push(Vec2::new(radius * angle.cos(), radius * angle.sin()));
    }
    points.push(Vec2::ZERO);
    points
}

/// Orientation placing a local-XY pie slice into the plane spanned by
/// `u` and `v`.
///
/// Built in two steps: rotate world +Z onto the plane normal, then spin
/// about the normal so the projected world +X lands on `u` (sign taken
/// from the cross product against the normal).
pub fn pie_orientation(u: Vec3, v: Vec3) -> Quat {
    let u = u.normalize();
    let v = v.normalize();
    let normal = u.cross(v).normalize();

    let z_to_normal = Quat::from_rotation_arc(Vec3::Z, normal);

    let x_rotated = z_to_normal * Vec3::X;
    let x_in_plane = (x_rotated - normal * x_rotated.dot(normal)).normalize();
    let angle = x_in_plane.dot(u).clamp(-1.0, 1.0).acos();
    let sign = if x_in_plane.cross(u).dot(normal) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    let align = Quat::from_axis_angle(normal, sign * angle);

    align * z_to_normal
}

/// Point sequence with cumulative path distances, for dashed-line phase
/// continuity in the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashedPath {
    pub points: Vec<Vec3>,
    /// Path length from the first point up to each point; same length as
    /// `points`, first entry 0
    pub distances: Vec<f32>,
}

impl DashedPath {
    /// Build a path and accumulate per-point distances
    pub fn from_points(points: Vec<Vec3>) -> Self {
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += (*p - points[i - 1]).length();
            }
            distances.push(total);
        }
        Self { points, distances }
    }

    /// Total path length
    pub fn total_length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }
}
