//! Stateless trigonometric utilities
//!
//! Angle-aware interpolation, easing, and the tilt decomposition formulas
//! shared by the pose solver and the transition driver. All public angles
//! are in degrees; radians appear only inside the formulas.

/// Cubic ease-in-out over [0, 1].
///
/// `t < 0.5` accelerates with `4t^3`, the second half decelerates with the
/// mirrored cubic. Every animated transition runs through this curve.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Interpolate between two angles, always advancing in the increasing
/// direction (never the shorter path backward).
///
/// Both endpoints are normalized to [0, 360) first; the result is
/// normalized as well. At `t = 0` this yields the normalized start, at
/// `t = 1` the normalized end.
pub fn interpolate_angle_forward(start: f32, end: f32, t: f32) -> f32 {
    let start = normalize_degrees(start);
    let end = normalize_degrees(end);

    let mut diff = end - start;
    if diff < 0.0 {
        diff += 360.0;
    }

    normalize_degrees(start + diff * t)
}

/// Tilt-X component of a combined altitude/azimuth tilt, in degrees.
///
/// `tilt_x = atan(tan(altitude) * sin(azimuth))`; zero whenever altitude
/// is zero, regardless of azimuth.
pub fn tilt_x(altitude_deg: f32, azimuth_deg: f32) -> f32 {
    let alt = altitude_deg.to_radians();
    let az = azimuth_deg.to_radians();
    (alt.tan() * az.sin()).atan().to_degrees()
}

/// Tilt-Y component of a combined altitude/azimuth tilt, in degrees.
///
/// `tilt_y = atan(tan(altitude) * cos(azimuth))`.
pub fn tilt_y(altitude_deg: f32, azimuth_deg: f32) -> f32 {
    let alt = altitude_deg.to_radians();
    let az = azimuth_deg.to_radians();
    (alt.tan() * az.cos()).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn test_ease_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev, "not monotonic at i={i}");
            prev = v;
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_interpolate_forward_wraps() {
        // 350 -> 370 (== 10), forward diff 20, midpoint 360 == 0
        assert!((interpolate_angle_forward(350.0, 10.0, 0.5)).abs() < 1e-4);
    }

    #[test]
    fn test_interpolate_forward_endpoints() {
        assert_eq!(interpolate_angle_forward(30.0, 200.0, 0.0), 30.0);
        assert_eq!(interpolate_angle_forward(30.0, 200.0, 1.0), 200.0);
    }

    #[test]
    fn test_interpolate_same_angle() {
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(interpolate_angle_forward(400.0, 400.0, t), 40.0);
        }
    }

    #[test]
    fn test_interpolate_never_backward() {
        // 0 -> 252 advances through 126, not backward through -54
        assert!((interpolate_angle_forward(0.0, 252.0, 0.5) - 126.0).abs() < 1e-3);
    }

    #[test]
    fn test_tilt_zero_altitude() {
        for az in [0.0, 45.0, 90.0, 252.0, 359.0] {
            assert_eq!(tilt_x(0.0, az), 0.0);
            assert_eq!(tilt_y(0.0, az), 0.0);
        }
    }

    #[test]
    fn test_tilt_azimuth_isolates_axes() {
        // Azimuth 90 puts the whole tilt on the X axis
        assert!((tilt_x(45.0, 90.0) - 45.0).abs() < 1e-3);
        assert!(tilt_y(45.0, 90.0).abs() < 1e-3);
        // Azimuth 0 puts it all on the Y axis
        assert!(tilt_x(45.0, 0.0).abs() < 1e-3);
        assert!((tilt_y(45.0, 0.0) - 45.0).abs() < 1e-3);
    }
}
