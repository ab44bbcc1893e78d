//! Rotation accumulator shared by every orbit.

use std::f32::consts::TAU;
use std::time::Duration;

use nulai_core::RotationMode;

/// Global orbit rotation, owned by the frame driver and passed into
/// [`OrbitalGrid::reposition`](crate::OrbitalGrid::reposition).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Current angle in radians, kept within `[0, 2π)`.
    angle: f32,
    /// Radians per frame or per second, depending on `mode`.
    step: f32,
    mode: RotationMode,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(0.0003, RotationMode::PerFrame)
    }
}

impl Rotation {
    pub fn new(step: f32, mode: RotationMode) -> Self {
        Self {
            angle: 0.0,
            step,
            mode,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Jump to an arbitrary angle.
    pub fn set(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(TAU);
    }

    /// Advance by one displayed frame.
    ///
    /// `elapsed` is the wall-clock time since the previous frame and is only
    /// consulted in [`RotationMode::PerSecond`].
    pub fn advance(&mut self, elapsed: Duration) {
        let delta = match self.mode {
            RotationMode::PerFrame => self.step,
            RotationMode::PerSecond => self.step * elapsed.as_secs_f32(),
        };
        self.set(self.angle + delta);
    }
}
