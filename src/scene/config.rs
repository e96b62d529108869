//! Scene configuration
//!
//! Every literal the scene is composed from lives here. `Default` gives the
//! posthouse night scene; the CLI overrides a handful of fields.

use anyhow::{bail, ensure, Context, Result};

use super::assets::AssetManifest;
use super::lights::{
    AmbientLightSpec, DirectionalLightSpec, OrbitPath, OrbitRadius, OrbitingLightSpec,
    PointLightSpec, Wave,
};
use super::types::{Position, Rgb};

/// Number of grass cones scattered around the house
pub const DEFAULT_GRASS_COUNT: usize = 50;

/// Inner edge of the grass ring
pub const DEFAULT_GRASS_INNER_RADIUS: f32 = 3.0;

/// Width of the grass ring
pub const DEFAULT_GRASS_BAND: f32 = 6.0;

/// Highest pixel ratio the renderer will use
pub const PIXEL_RATIO_CAP: f32 = 2.0;

/// Fog and clear colour
pub const NIGHT_COLOR: Rgb = Rgb::hex(0x262837);

/// Moonlight tint shared by the ambient and directional lights
pub const MOON_COLOR: Rgb = Rgb::hex(0xb9d5ff);

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Position,
    pub target: Position,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            eye: Position::new(4.0, 2.0, 5.0),
            target: Position::ORIGIN,
        }
    }
}

/// Linear distance fog
#[derive(Debug, Clone, PartialEq)]
pub struct FogConfig {
    pub color: Rgb,
    pub start: f32,
    pub end: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: NIGHT_COLOR,
            start: 1.0,
            end: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundConfig {
    pub size: f32,
    /// How many times the ground textures tile along each axis
    pub texture_repeat: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: 20.0,
            texture_repeat: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrassConfig {
    pub count: usize,
    pub inner_radius: f32,
    pub band: f32,
    pub cone_radius: f32,
    pub cone_height: f32,
    /// Maximum absolute tilt applied around the Y and Z axes
    pub max_tilt: f32,
    pub color: Rgb,
    /// Fixed seed for a reproducible layout
    pub seed: Option<u64>,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_GRASS_COUNT,
            inner_radius: DEFAULT_GRASS_INNER_RADIUS,
            band: DEFAULT_GRASS_BAND,
            cone_radius: 0.12,
            cone_height: 0.6,
            max_tilt: 0.2,
            color: Rgb::hex(0x4f7f3a),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightingConfig {
    pub ambient: AmbientLightSpec,
    pub moon: DirectionalLightSpec,
    /// Warm light over the door, offset relative to the model
    pub door: PointLightSpec,
    pub orbiting: Vec<OrbitingLightSpec>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        let bob = vec![Wave::new(1.0, 4.0), Wave::new(1.0, 2.5)];
        Self {
            ambient: AmbientLightSpec {
                color: MOON_COLOR,
                brightness: 60.0,
            },
            moon: DirectionalLightSpec {
                color: MOON_COLOR,
                illuminance: 1_500.0,
                position: Position::new(4.0, 5.0, -2.0),
                shadows: true,
            },
            door: PointLightSpec {
                color: Rgb::hex(0xff7d46),
                intensity: 40_000.0,
                range: 7.0,
                offset: Position::new(0.0, 2.2, 2.7),
                shadows: true,
            },
            orbiting: vec![
                OrbitingLightSpec {
                    name: "magenta".to_string(),
                    color: Rgb::hex(0xff00ff),
                    intensity: 80_000.0,
                    range: 3.0,
                    shadows: true,
                    path: OrbitPath::circle(4.0, 0.5, vec![Wave::new(1.0, 3.0)]),
                },
                OrbitingLightSpec {
                    name: "cyan".to_string(),
                    color: Rgb::hex(0x00ffff),
                    intensity: 80_000.0,
                    range: 3.0,
                    shadows: true,
                    path: OrbitPath::circle(5.0, -0.32, bob.clone()),
                },
                OrbitingLightSpec {
                    name: "yellow".to_string(),
                    color: Rgb::hex(0xffff00),
                    intensity: 80_000.0,
                    range: 3.0,
                    shadows: true,
                    path: OrbitPath {
                        angular_speed: -0.18,
                        radius_x: OrbitRadius::wobbling(7.0, Wave::new(1.0, 0.32)),
                        radius_z: OrbitRadius::wobbling(7.0, Wave::new(1.0, 0.5)),
                        height: bob,
                    },
                },
            ],
        }
    }
}

/// Full description of the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub ground: GroundConfig,
    pub grass: GrassConfig,
    pub lighting: LightingConfig,
    pub assets: AssetManifest,
    pub pixel_ratio_cap: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            fog: FogConfig::default(),
            ground: GroundConfig::default(),
            grass: GrassConfig::default(),
            lighting: LightingConfig::default(),
            assets: AssetManifest::default(),
            pixel_ratio_cap: PIXEL_RATIO_CAP,
        }
    }
}

impl SceneConfig {
    /// Turn shadow casting off for every light in the rig
    pub fn without_shadows(mut self) -> Self {
        self.lighting.moon.shadows = false;
        self.lighting.door.shadows = false;
        for light in &mut self.lighting.orbiting {
            light.shadows = false;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let camera = &self.camera;
        ensure!(
            camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0,
            "camera fov must be in (0, 180) degrees, got {}",
            camera.fov_degrees
        );
        ensure!(
            camera.near > 0.0 && camera.far > camera.near,
            "camera clip planes must satisfy 0 < near < far, got {}..{}",
            camera.near,
            camera.far
        );
        if camera.eye == camera.target {
            bail!("camera eye and target must differ");
        }

        ensure!(
            self.fog.start >= 0.0 && self.fog.end > self.fog.start,
            "fog range must satisfy 0 <= start < end, got {}..{}",
            self.fog.start,
            self.fog.end
        );
        ensure!(self.ground.size > 0.0, "ground size must be positive");
        ensure!(
            self.ground.texture_repeat > 0.0,
            "ground texture repeat must be positive"
        );

        let grass = &self.grass;
        ensure!(
            grass.inner_radius >= 0.0 && grass.band > 0.0,
            "grass ring must have a non-negative inner radius and positive band"
        );
        ensure!(
            grass.cone_radius > 0.0 && grass.cone_height > 0.0,
            "grass cones must have positive dimensions"
        );
        ensure!(grass.max_tilt >= 0.0, "grass tilt must be non-negative");

        for light in &self.lighting.orbiting {
            ensure!(
                light.range > 0.0,
                "orbiting light {} must have a positive range",
                light.name
            );
        }
        ensure!(
            self.lighting.door.range > 0.0,
            "door light must have a positive range"
        );

        ensure!(
            self.pixel_ratio_cap > 0.0,
            "pixel ratio cap must be positive, got {}",
            self.pixel_ratio_cap
        );

        self.assets.validate().context("invalid asset manifest")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_fog_rejected() {
        let mut config = SceneConfig::default();
        config.fog.start = 20.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fog"));
    }

    #[test]
    fn test_without_shadows_clears_all_lights() {
        let config = SceneConfig::default().without_shadows();
        assert!(!config.lighting.moon.shadows);
        assert!(!config.lighting.door.shadows);
        assert!(config.lighting.orbiting.iter().all(|l| !l.shadows));
    }
}
