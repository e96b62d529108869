//! Orbit camera state
//!
//! The camera sits on a sphere around a target point. Pointer drags feed
//! angular velocity, which decays each step by the damping factor so the
//! camera glides to a stop after the pointer is released.

use std::f32::consts::{FRAC_PI_2, PI};

use super::types::Position;

/// Radians of rotation per pixel of pointer travel
pub const ROTATE_SPEED: f32 = 0.005;

/// Fraction of angular velocity applied (and removed) per step
pub const DAMPING_FACTOR: f32 = 0.05;

/// Radius multiplier per scroll line
pub const ZOOM_STEP: f32 = 0.95;

pub const MIN_RADIUS: f32 = 2.0;
pub const MAX_RADIUS: f32 = 20.0;

/// Keep the camera a little off the poles
const POLE_MARGIN: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    pub target: Position,
    pub radius: f32,
    /// Angle around the Y axis, measured from +Z toward +X
    pub yaw: f32,
    /// Angle above the horizon
    pub pitch: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    pub damping: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl OrbitState {
    /// Orbit that places the camera at `eye`, looking at `target`
    pub fn looking_at(eye: Position, target: Position) -> Self {
        let dx = eye.x - target.x;
        let dy = eye.y - target.y;
        let dz = eye.z - target.z;
        let radius = (dx * dx + dy * dy + dz * dz).sqrt();
        let horizontal = (dx * dx + dz * dz).sqrt();
        let mut state = Self {
            target,
            radius: radius.clamp(MIN_RADIUS, MAX_RADIUS),
            yaw: dx.atan2(dz),
            pitch: dy.atan2(horizontal),
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            damping: DAMPING_FACTOR,
            // Never dip below the ground plane
            min_pitch: 0.0,
            max_pitch: FRAC_PI_2 - POLE_MARGIN,
        };
        state.pitch = state.pitch.clamp(state.min_pitch, state.max_pitch);
        state
    }

    /// Feed a pointer drag in pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.yaw_velocity -= dx * ROTATE_SPEED;
        self.pitch_velocity += dy * ROTATE_SPEED;
    }

    /// Positive lines zoom in, negative zoom out
    pub fn zoom(&mut self, lines: f32) {
        if !lines.is_finite() || lines == 0.0 {
            return;
        }
        self.radius = (self.radius * ZOOM_STEP.powf(lines)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Apply a damped step of the pending angular velocity
    pub fn update(&mut self) {
        self.yaw = (self.yaw + self.yaw_velocity * self.damping).rem_euclid(2.0 * PI);
        self.pitch =
            (self.pitch + self.pitch_velocity * self.damping).clamp(self.min_pitch, self.max_pitch);
        self.yaw_velocity *= 1.0 - self.damping;
        self.pitch_velocity *= 1.0 - self.damping;
    }

    pub fn is_settled(&self) -> bool {
        self.yaw_velocity.abs() < 1e-5 && self.pitch_velocity.abs() < 1e-5
    }

    pub fn eye(&self) -> Position {
        let horizontal = self.radius * self.pitch.cos();
        Position::new(
            self.target.x + horizontal * self.yaw.sin(),
            self.target.y + self.radius * self.pitch.sin(),
            self.target.z + horizontal * self.yaw.cos(),
        )
    }
}
