//! Stylus Simulator Core
//!
//! Pure geometry for the stylus/tablet simulator:
//! - OrientationParameters: user-facing orientation state
//! - Pose: world-space pose solved from the parameters
//! - DerivedTilts: tilt-X/tilt-Y trigonometric decomposition
//! - Transition: eased, angle-aware parameter interpolation
//! - SimConfig: RON configuration file
//!
//! Annotation geometry and the simulator API surface live in the
//! `stylus-sim` crate; rendering is an external collaborator.

pub mod angle;
pub mod config;
pub mod constants;
pub mod params;
pub mod pose;
pub mod tablet;
pub mod transition;

pub use angle::*;
pub use config::*;
pub use constants::*;
pub use params::*;
pub use pose::*;
pub use tablet::*;
pub use transition::*;
