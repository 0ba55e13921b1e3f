//! Orientation parameters and derived tilt readout

use serde::{Deserialize, Serialize};

use crate::angle;

/// User-facing stylus orientation parameters.
///
/// All angles are in degrees. Angle fields are logically periodic (mod
/// 360) for interpolation purposes but are stored unbounded; setting a
/// value never wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationParameters {
    /// Hover distance above the tablet surface (non-negative)
    pub distance: f32,
    /// Tilt from the vertical reference, typically [0, 90]
    pub altitude: f32,
    /// Rotation around the vertical axis, typically [0, 360)
    pub azimuth: f32,
    /// Rotation of the stylus about its own long axis, typically [0, 360)
    pub barrel: f32,
    /// Contact point X on the tablet, measured from the tablet corner
    pub tablet_offset_x: f32,
    /// Contact point Z on the tablet, measured from the tablet corner
    pub tablet_offset_z: f32,
}

impl Default for OrientationParameters {
    fn default() -> Self {
        Self {
            distance: 0.0,
            altitude: 0.0,
            azimuth: 0.0,
            barrel: 0.0,
            tablet_offset_x: 8.0,
            tablet_offset_z: 4.5,
        }
    }
}

impl OrientationParameters {
    /// Demo pose used by the built-in demo transition
    pub fn demo() -> Self {
        Self {
            distance: 0.0,
            altitude: 45.0,
            azimuth: 242.0,
            barrel: 318.0,
            tablet_offset_x: 8.6,
            tablet_offset_z: 5.3,
        }
    }

    /// Derived tilt decomposition for the current altitude/azimuth
    pub fn tilts(&self) -> DerivedTilts {
        DerivedTilts::from_angles(self.altitude, self.azimuth)
    }
}

/// Tilt-X / tilt-Y projection of the combined altitude+azimuth tilt,
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedTilts {
    pub tilt_x: f32,
    pub tilt_y: f32,
}

impl DerivedTilts {
    /// Compute both tilt components from altitude and azimuth (degrees)
    pub fn from_angles(altitude_deg: f32, azimuth_deg: f32) -> Self {
        Self {
            tilt_x: angle::tilt_x(altitude_deg, azimuth_deg),
            tilt_y: angle::tilt_y(altitude_deg, azimuth_deg),
        }
    }
}
