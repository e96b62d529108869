//! Lighting rig: static lights plus the orbiting point lights
//!
//! Orbiting lights follow closed-form paths, so their position at any
//! elapsed time can be evaluated directly without integrating frame deltas.

use super::types::{Position, Rgb};

/// `amplitude * sin(frequency * t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Wave {
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    pub fn sample(&self, t: f32) -> f32 {
        self.amplitude * (self.frequency * t).sin()
    }
}

/// Radius of an orbit along one horizontal axis, optionally breathing over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRadius {
    pub base: f32,
    pub wobble: Option<Wave>,
}

impl OrbitRadius {
    pub const fn fixed(base: f32) -> Self {
        Self { base, wobble: None }
    }

    pub const fn wobbling(base: f32, wobble: Wave) -> Self {
        Self {
            base,
            wobble: Some(wobble),
        }
    }

    pub fn at(&self, t: f32) -> f32 {
        self.base + self.wobble.map_or(0.0, |w| w.sample(t))
    }

    /// Smallest and largest radius this axis can reach
    pub fn bounds(&self) -> (f32, f32) {
        let swing = self.wobble.map_or(0.0, |w| w.amplitude.abs());
        (self.base - swing, self.base + swing)
    }
}

/// Parametric path around the Y axis
///
/// `angle = angular_speed * t`, `x = cos(angle) * radius_x(t)`,
/// `z = sin(angle) * radius_z(t)`, `y = sum of height waves at t`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub angular_speed: f32,
    pub radius_x: OrbitRadius,
    pub radius_z: OrbitRadius,
    pub height: Vec<Wave>,
}

impl OrbitPath {
    /// Circular orbit of constant radius
    pub fn circle(radius: f32, angular_speed: f32, height: Vec<Wave>) -> Self {
        Self {
            angular_speed,
            radius_x: OrbitRadius::fixed(radius),
            radius_z: OrbitRadius::fixed(radius),
            height,
        }
    }

    pub fn angle_at(&self, t: f32) -> f32 {
        self.angular_speed * t
    }

    pub fn height_at(&self, t: f32) -> f32 {
        self.height.iter().map(|w| w.sample(t)).sum()
    }

    pub fn position_at(&self, t: f32) -> Position {
        let angle = self.angle_at(t);
        Position::new(
            angle.cos() * self.radius_x.at(t),
            self.height_at(t),
            angle.sin() * self.radius_z.at(t),
        )
    }

    /// Largest absolute height the path can reach
    pub fn max_height(&self) -> f32 {
        self.height.iter().map(|w| w.amplitude.abs()).sum()
    }
}

/// Ambient fill light
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLightSpec {
    pub color: Rgb,
    pub brightness: f32,
}

/// Directional light aimed at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLightSpec {
    pub color: Rgb,
    pub illuminance: f32,
    pub position: Position,
    pub shadows: bool,
}

/// Point light at a fixed offset from its parent
#[derive(Debug, Clone, PartialEq)]
pub struct PointLightSpec {
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
    pub offset: Position,
    pub shadows: bool,
}

/// Point light that moves along an [`OrbitPath`]
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingLightSpec {
    pub name: String,
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
    pub shadows: bool,
    pub path: OrbitPath,
}

/// Live state of the orbiting lights
#[derive(Debug, Clone)]
pub struct LightRig {
    pub orbiting: Vec<OrbitingLightSpec>,
    positions: Vec<Position>,
}

impl LightRig {
    pub fn new(orbiting: Vec<OrbitingLightSpec>) -> Self {
        let positions = orbiting.iter().map(|l| l.path.position_at(0.0)).collect();
        Self {
            orbiting,
            positions,
        }
    }

    /// Move every orbiting light to where its path places it at `elapsed`
    pub fn update(&mut self, elapsed: f32) {
        for (position, light) in self.positions.iter_mut().zip(&self.orbiting) {
            *position = light.path.position_at(elapsed);
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.orbiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbiting.is_empty()
    }
}
