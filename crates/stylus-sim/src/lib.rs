//! Stylus Simulator
//!
//! Annotation geometry and the simulator API surface on top of
//! `stylus-core`:
//! - arc: planar arc and pie-slice primitives
//! - annotation: the five angle annotation bundles (azimuth, altitude,
//!   barrel, tilt-X, tilt-Y)
//! - simulator: the stateful `StylusSimulator` consumed by a renderer
//!
//! The renderer collaborator turns the emitted point sequences, pie
//! slices, and dashed paths into drawable primitives; none of that lives
//! here.

pub mod annotation;
pub mod arc;
pub mod simulator;

pub use annotation::*;
pub use arc::*;
pub use simulator::*;
