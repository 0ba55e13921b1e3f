//! Simulator instance
//!
//! [`StylusSimulator`] owns the single current parameter set and every
//! value derived from it. Setters are synchronous: the pose, tilts, hover
//! guides, and annotation bundles are all recomputed before a setter
//! returns, so callers always observe a consistent snapshot.

use stylus_core::{
    DerivedTilts, HoverGuides, OrientationParameters, Pose, SimConfig, TabletGeometry,
};

use crate::annotation::{AnnotationSet, AnnotationVisibility};

/// Result of [`StylusSimulator::set_tilt_altitude`]: the fresh tilt
/// readout plus whether the azimuth control is meaningful (a UI
/// affordance, not a physical constraint).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeUpdate {
    pub tilts: DerivedTilts,
    pub should_enable_azimuth: bool,
}

/// Interactive stylus/tablet simulator.
///
/// Holds the orientation parameters and eagerly derives the pose, tilt
/// decomposition, hover guides, and annotation geometry the renderer
/// draws from.
#[derive(Debug, Clone)]
pub struct StylusSimulator {
    params: OrientationParameters,
    defaults: OrientationParameters,
    tablet: TabletGeometry,
    visibility: AnnotationVisibility,
    pose: Pose,
    tilts: DerivedTilts,
    guides: HoverGuides,
    annotations: AnnotationSet,
}

impl Default for StylusSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StylusSimulator {
    /// Create a simulator with the canonical default parameters
    pub fn new() -> Self {
        Self::from_config(&SimConfig::default())
    }

    /// Create a simulator from a configuration
    pub fn from_config(config: &SimConfig) -> Self {
        let params = config.defaults;
        let tablet = config.tablet;
        let visibility = AnnotationVisibility::default();
        let pose = Pose::compute(&params, &tablet);
        let tilts = params.tilts();
        let guides = HoverGuides::compute(&pose, &tablet, params.altitude);
        let annotations = AnnotationSet::compute(&pose, &params, &tilts, &tablet, &visibility);
        Self {
            params,
            defaults: config.defaults,
            tablet,
            visibility,
            pose,
            tilts,
            guides,
            annotations,
        }
    }

    fn update(&mut self) {
        self.pose = Pose::compute(&self.params, &self.tablet);
        self.tilts = self.params.tilts();
        self.guides = HoverGuides::compute(&self.pose, &self.tablet, self.params.altitude);
        self.annotations = AnnotationSet::compute(
            &self.pose,
            &self.params,
            &self.tilts,
            &self.tablet,
            &self.visibility,
        );
        tracing::trace!(
            azimuth = self.params.azimuth,
            altitude = self.params.altitude,
            barrel = self.params.barrel,
            "recomputed derived state"
        );
    }

    /// Set the hover distance above the tablet surface
    pub fn set_distance(&mut self, value: f32) -> DerivedTilts {
        self.params.distance = value;
        self.update();
        self.tilts
    }

    /// Set the altitude tilt. The returned affordance flag tells the host
    /// whether the azimuth control has any visible effect.
    pub fn set_tilt_altitude(&mut self, value: f32) -> AltitudeUpdate {
        self.params.altitude = value;
        self.update();
        AltitudeUpdate {
            tilts: self.tilts,
            should_enable_azimuth: self.params.altitude != 0.0,
        }
    }

    /// Set the azimuth rotation around the vertical axis
    pub fn set_tilt_azimuth(&mut self, value: f32) -> DerivedTilts {
        self.params.azimuth = value;
        self.update();
        self.tilts
    }

    /// Set the barrel rotation about the stylus long axis
    pub fn set_barrel_rotation(&mut self, value: f32) -> DerivedTilts {
        self.params.barrel = value;
        self.update();
        self.tilts
    }

    /// Set the tablet contact offset along X
    pub fn set_tablet_position_x(&mut self, value: f32) -> DerivedTilts {
        self.params.tablet_offset_x = value;
        self.update();
        self.tilts
    }

    /// Set the tablet contact offset along Z
    pub fn set_tablet_position_z(&mut self, value: f32) -> DerivedTilts {
        self.params.tablet_offset_z = value;
        self.update();
        self.tilts
    }

    /// Replace the whole parameter set in one recompute; used by
    /// transition frames
    pub fn apply_params(&mut self, params: OrientationParameters) -> DerivedTilts {
        self.params = params;
        self.update();
        self.tilts
    }

    /// Toggle the azimuth annotation
    pub fn set_azimuth_annotations_visible(&mut self, visible: bool) {
        self.visibility.azimuth = visible;
        self.update();
    }

    /// Toggle the altitude annotation
    pub fn set_altitude_annotations_visible(&mut self, visible: bool) {
        self.visibility.altitude = visible;
        self.update();
    }

    /// Toggle the barrel annotation
    pub fn set_barrel_annotations_visible(&mut self, visible: bool) {
        self.visibility.barrel = visible;
        self.update();
    }

    /// Toggle the tilt-X annotation
    pub fn set_tilt_x_annotations_visible(&mut self, visible: bool) {
        self.visibility.tilt_x = visible;
        self.update();
    }

    /// Toggle the tilt-Y annotation
    pub fn set_tilt_y_annotations_visible(&mut self, visible: bool) {
        self.visibility.tilt_y = visible;
        self.update();
    }

    /// Canonical reset parameters. Does not mutate the simulator; the
    /// caller applies them through the setters (or [`Self::apply_params`]).
    pub fn reset(&self) -> OrientationParameters {
        self.defaults
    }

    /// Current parameters
    pub fn params(&self) -> &OrientationParameters {
        &self.params
    }

    /// Current pose
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Current tilt decomposition
    pub fn tilts(&self) -> DerivedTilts {
        self.tilts
    }

    /// Current hover guide lines
    pub fn hover_guides(&self) -> &HoverGuides {
        &self.guides
    }

    /// Current annotation bundles
    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    /// Current visibility flags
    pub fn visibility(&self) -> &AnnotationVisibility {
        &self.visibility
    }

    /// Tablet geometry
    pub fn tablet(&self) -> &TabletGeometry {
        &self.tablet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylus_core::{AnimationId, Transition, TransitionDriver};

    #[test]
    fn test_altitude_then_azimuth_scenario() {
        let mut sim = StylusSimulator::new();
        let update = sim.set_tilt_altitude(45.0);
        assert!(update.should_enable_azimuth);

        let tilts = sim.set_tilt_azimuth(90.0);
        assert!((tilts.tilt_x - 45.0).abs() < 1e-3);
        assert!(tilts.tilt_y.abs() < 1e-3);
    }

    #[test]
    fn test_zero_altitude_disables_azimuth() {
        let mut sim = StylusSimulator::new();
        let update = sim.set_tilt_altitude(0.0);
        assert!(!update.should_enable_azimuth);
    }

    #[test]
    fn test_reset_roundtrip_reproduces_pose() {
        let mut sim = StylusSimulator::new();
        let initial_pose = *sim.pose();

        sim.set_tilt_altitude(30.0);
        sim.set_tilt_azimuth(200.0);
        sim.set_barrel_rotation(90.0);
        sim.set_distance(1.0);
        sim.set_tablet_position_x(2.0);
        sim.set_tablet_position_z(1.0);

        let defaults = sim.reset();
        sim.set_distance(defaults.distance);
        sim.set_tilt_altitude(defaults.altitude);
        sim.set_tilt_azimuth(defaults.azimuth);
        sim.set_barrel_rotation(defaults.barrel);
        sim.set_tablet_position_x(defaults.tablet_offset_x);
        sim.set_tablet_position_z(defaults.tablet_offset_z);

        assert_eq!(*sim.pose(), initial_pose);
    }

    #[test]
    fn test_reset_does_not_mutate() {
        let mut sim = StylusSimulator::new();
        sim.set_tilt_altitude(60.0);
        let _ = sim.reset();
        assert_eq!(sim.params().altitude, 60.0);
    }

    #[test]
    fn test_setters_recompute_annotations() {
        let mut sim = StylusSimulator::new();
        sim.set_tilt_x_annotations_visible(true);
        assert!(sim.annotations().tilt_x.is_none());

        sim.set_tilt_altitude(45.0);
        sim.set_tilt_azimuth(90.0);
        assert!(sim.annotations().tilt_x.is_some());

        sim.set_tilt_x_annotations_visible(false);
        assert!(sim.annotations().tilt_x.is_none());
    }

    #[test]
    fn test_clamped_offset_moves_tip_to_edge() {
        let mut sim = StylusSimulator::new();
        sim.set_tablet_position_x(1000.0);
        let half_width = sim.tablet().half_width();
        assert!((sim.pose().tip_world.x - half_width).abs() < 1e-4);
    }

    #[test]
    fn test_transition_drives_simulator() {
        let mut sim = StylusSimulator::new();
        let start = *sim.params();
        let mut end = start;
        end.azimuth = 252.0;

        let mut driver = TransitionDriver::new();
        let sampled = std::rc::Rc::new(std::cell::RefCell::new(None));
        let sink = std::rc::Rc::clone(&sampled);
        driver.start(
            AnimationId::Azimuth,
            Transition::new(start, end, 8000.0),
            0.0,
            Box::new(move |params, _| {
                *sink.borrow_mut() = Some(*params);
            }),
        );

        driver.tick(4000.0);
        let frame = (*sampled.borrow()).expect("frame fired");
        sim.apply_params(frame);
        assert!((sim.params().azimuth - 126.0).abs() < 1e-3);
    }
}
