//! Core types for the scene
//!
//! These are standalone types that don't depend on Bevy.

/// A 3D position in scene space (Y up)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the Y axis, ignoring height
    pub fn horizontal_radius(&self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// An sRGB colour stored as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    /// Channels as `0.0..=1.0` floats in sRGB space
    pub fn channels(&self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Rotation expressed as Euler angles in radians, applied X then Y then Z
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
