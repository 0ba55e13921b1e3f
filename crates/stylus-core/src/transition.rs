//! Eased parameter transitions
//!
//! A [`Transition`] is a pure interpolator between two parameter sets; a
//! [`TransitionDriver`] owns the in-flight transitions, ticks them from
//! the host's per-frame clock, and enforces that at most one transition is
//! active per animation identity. Everything here is single-threaded and
//! cooperative; cancellation is a shared flag checked on the next tick.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::angle::{ease_in_out_cubic, interpolate_angle_forward};
use crate::params::OrientationParameters;

/// Identity of an animated parameter group. Starting a transition for an
/// id cancels any prior in-flight transition with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationId {
    /// Full demo sweep over all parameters
    Demo,
    /// Altitude-only animation (drives tilt-X)
    Altitude,
    /// Azimuth-only animation (drives tilt-Y)
    Azimuth,
    /// Barrel-rotation-only animation
    Barrel,
}

/// Time-based interpolation between two parameter sets.
///
/// Plain numeric fields are interpolated linearly; azimuth and barrel are
/// angle-aware and always advance forward (never the shorter path
/// backward). Progress runs through the cubic ease-in-out curve.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub start: OrientationParameters,
    pub end: OrientationParameters,
    pub duration_ms: f32,
}

impl Transition {
    /// Create a transition over the given duration in milliseconds
    pub fn new(start: OrientationParameters, end: OrientationParameters, duration_ms: f32) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Sample the transition at an elapsed time.
    ///
    /// Returns the interpolated parameter set and the raw (un-eased)
    /// progress in [0, 1]. A non-positive duration completes immediately.
    pub fn sample(&self, elapsed_ms: f32) -> (OrientationParameters, f32) {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = ease_in_out_cubic(progress);

        let lerp = |a: f32, b: f32| a + (b - a) * eased;
        let params = OrientationParameters {
            distance: lerp(self.start.distance, self.end.distance),
            altitude: lerp(self.start.altitude, self.end.altitude),
            azimuth: interpolate_angle_forward(self.start.azimuth, self.end.azimuth, eased),
            barrel: interpolate_angle_forward(self.start.barrel, self.end.barrel, eased),
            tablet_offset_x: lerp(self.start.tablet_offset_x, self.end.tablet_offset_x),
            tablet_offset_z: lerp(self.start.tablet_offset_z, self.end.tablet_offset_z),
        };
        (params, progress)
    }
}

/// Handle returned by [`TransitionDriver::start`]; cancels the transition
/// it belongs to. Safe to call repeatedly or after natural completion.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    /// Stop the transition before its next tick. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether the transition has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Per-frame callback: receives the interpolated parameters and the raw
/// progress in [0, 1].
pub type FrameCallback = Box<dyn FnMut(&OrientationParameters, f32)>;

struct ActiveTransition {
    transition: Transition,
    started_at_ms: f32,
    on_frame: FrameCallback,
    cancelled: Rc<Cell<bool>>,
}

/// Owns all in-flight transitions, keyed by animation identity.
///
/// The host drives the registry by calling [`TransitionDriver::tick`] once
/// per frame with its clock. Ticks are synchronous; a transition whose
/// progress reaches 1.0 fires its final frame and is retired.
#[derive(Default)]
pub struct TransitionDriver {
    active: HashMap<AnimationId, ActiveTransition>,
}

impl TransitionDriver {
    /// Create an empty driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition, cancelling any in-flight transition with the
    /// same id first. `now_ms` anchors the transition's clock; subsequent
    /// `tick` calls must use the same time base.
    pub fn start(
        &mut self,
        id: AnimationId,
        transition: Transition,
        now_ms: f32,
        on_frame: FrameCallback,
    ) -> CancelHandle {
        if let Some(prev) = self.active.remove(&id) {
            tracing::debug!(?id, "cancelling in-flight transition");
            prev.cancelled.set(true);
        }

        tracing::debug!(?id, duration_ms = transition.duration_ms, "starting transition");
        let cancelled = Rc::new(Cell::new(false));
        self.active.insert(
            id,
            ActiveTransition {
                transition,
                started_at_ms: now_ms,
                on_frame,
                cancelled: Rc::clone(&cancelled),
            },
        );
        CancelHandle { cancelled }
    }

    /// Advance all active transitions to `now_ms`, firing their frame
    /// callbacks. Cancelled transitions are dropped without a frame;
    /// completed ones fire their final frame and are retired.
    pub fn tick(&mut self, now_ms: f32) {
        let mut finished = Vec::new();
        for (id, active) in self.active.iter_mut() {
            if active.cancelled.get() {
                finished.push(*id);
                continue;
            }
            let (params, progress) = active.transition.sample(now_ms - active.started_at_ms);
            (active.on_frame)(&params, progress);
            if progress >= 1.0 {
                finished.push(*id);
            }
        }
        for id in finished {
            self.active.remove(&id);
        }
    }

    /// Whether a transition is in flight for the given id
    pub fn is_active(&self, id: AnimationId) -> bool {
        self.active.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn azimuth_sweep(end: f32) -> Transition {
        let start = OrientationParameters::default();
        let mut target = start;
        target.azimuth = end;
        Transition::new(start, target, 8000.0)
    }

    #[test]
    fn test_sample_midpoint_azimuth() {
        // ease(0.5) = 0.5, so 0 -> 252 sampled at 4000/8000 yields 126
        let (params, progress) = azimuth_sweep(252.0).sample(4000.0);
        assert_eq!(progress, 0.5);
        assert!((params.azimuth - 126.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_clamps_past_end() {
        let (params, progress) = azimuth_sweep(252.0).sample(20_000.0);
        assert_eq!(progress, 1.0);
        assert!((params.azimuth - 252.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_linear_fields() {
        let start = OrientationParameters::default();
        let end = OrientationParameters::demo();
        let t = Transition::new(start, end, 4000.0);
        let (params, _) = t.sample(2000.0);
        assert!((params.altitude - 22.5).abs() < 1e-3);
        assert!((params.tablet_offset_x - 8.3).abs() < 1e-3);
    }

    #[test]
    fn test_driver_fires_frames_and_retires() {
        let mut driver = TransitionDriver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        driver.start(
            AnimationId::Azimuth,
            azimuth_sweep(252.0),
            0.0,
            Box::new(move |params, progress| {
                sink.borrow_mut().push((params.azimuth, progress));
            }),
        );

        driver.tick(4000.0);
        driver.tick(8000.0);
        assert!(!driver.is_active(AnimationId::Azimuth));

        let frames = seen.borrow();
        assert_eq!(frames.len(), 2);
        assert!((frames[0].0 - 126.0).abs() < 1e-3);
        assert_eq!(frames[1].1, 1.0);
    }

    #[test]
    fn test_driver_single_flight_per_id() {
        let mut driver = TransitionDriver::new();
        let first = driver.start(
            AnimationId::Barrel,
            azimuth_sweep(100.0),
            0.0,
            Box::new(|_, _| {}),
        );
        // Second start on the same id cancels the first
        let _second = driver.start(
            AnimationId::Barrel,
            azimuth_sweep(200.0),
            0.0,
            Box::new(|_, _| {}),
        );
        assert!(first.is_cancelled());
        assert!(driver.is_active(AnimationId::Barrel));
    }

    #[test]
    fn test_cancel_stops_frames_and_is_idempotent() {
        let mut driver = TransitionDriver::new();
        let count = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&count);
        let handle = driver.start(
            AnimationId::Demo,
            azimuth_sweep(252.0),
            0.0,
            Box::new(move |_, _| sink.set(sink.get() + 1)),
        );

        driver.tick(1000.0);
        handle.cancel();
        handle.cancel();
        driver.tick(2000.0);
        driver.tick(3000.0);

        assert_eq!(count.get(), 1);
        assert!(!driver.is_active(AnimationId::Demo));
    }

    #[test]
    fn test_independent_ids_run_concurrently() {
        let mut driver = TransitionDriver::new();
        driver.start(
            AnimationId::Altitude,
            azimuth_sweep(90.0),
            0.0,
            Box::new(|_, _| {}),
        );
        driver.start(
            AnimationId::Barrel,
            azimuth_sweep(90.0),
            0.0,
            Box::new(|_, _| {}),
        );
        assert!(driver.is_active(AnimationId::Altitude));
        assert!(driver.is_active(AnimationId::Barrel));
    }
}
