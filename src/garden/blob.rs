use bevy::math::{Vec2, Vec4};
use rand::Rng;
use std::f32::consts::TAU;

/// Total drift speed span per axis, in pixels per tick (components land in
/// [-MAX_DRIFT / 2, MAX_DRIFT / 2]).
pub const MAX_DRIFT: f32 = 1.5;
/// Soft-circle base size range at spawn.
pub const RADIUS_RANGE: (f32, f32) = (300.0, 500.0);
/// How far the breathing oscillation swings the radius.
pub const BREATHE_AMPLITUDE: f32 = 30.0;
/// Per-tick phase advance range for the breathing effect.
pub const PULSE_SPEED_RANGE: (f32, f32) = (0.02, 0.05);

/// One ambient drifting, breathing soft circle.
#[derive(Debug, Clone)]
pub struct Blob {
    pub position: Vec2,
    /// Constant after spawn; randomly signed per axis.
    pub velocity: Vec2,
    pub base_radius: f32,
    /// Recomputed every tick from the breathing phase; 0 until the first
    /// advance.
    pub radius: f32,
    pub phase: f32,
    pub pulse_speed: f32,
    pub color: Vec4,
}

impl Blob {
    /// Spawn one blob somewhere inside the viewport, with its color sampled
    /// uniformly from the palette.
    pub fn spawn<R: Rng>(width: f32, height: f32, palette: &[Vec4], rng: &mut R) -> Self {
        Blob {
            position: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            velocity: Vec2::new(
                (rng.random::<f32>() - 0.5) * MAX_DRIFT,
                (rng.random::<f32>() - 0.5) * MAX_DRIFT,
            ),
            base_radius: rng.random_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            radius: 0.0,
            phase: rng.random_range(0.0..TAU),
            pulse_speed: rng.random_range(PULSE_SPEED_RANGE.0..PULSE_SPEED_RANGE.1),
            color: palette[rng.random_range(0..palette.len())],
        }
    }

    /// Advance one tick: drift, breathe, then wrap around the viewport edges
    /// so the field reads as an unbounded drifting plane.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.position += self.velocity;

        self.phase += self.pulse_speed;
        self.radius = self.base_radius + self.phase.sin() * BREATHE_AMPLITUDE;

        // Toroidal wrap: a blob fully past one edge re-enters, velocity
        // intact, just past the opposite one.
        if self.position.x < -self.radius {
            self.position.x = width + self.radius;
        }
        if self.position.x > width + self.radius {
            self.position.x = -self.radius;
        }
        if self.position.y < -self.radius {
            self.position.y = height + self.radius;
        }
        if self.position.y > height + self.radius {
            self.position.y = -self.radius;
        }
    }
}
