//! Standalone scene module
//!
//! This module contains everything the posthouse scene is made of - its
//! literal configuration, the orbiting light paths, the grass scatter, the
//! viewport and orbit camera arithmetic, and asset bookkeeping - without
//! depending on the Bevy game engine. It can be run and tested headless.

mod assets;
mod config;
mod lights;
mod orbit;
mod scatter;
mod types;
mod viewport;
mod world;

pub use assets::{AssetKind, AssetManifest, AssetStatus, AssetTracker};
pub use config::{
    CameraConfig, FogConfig, GrassConfig, GroundConfig, LightingConfig, SceneConfig,
    DEFAULT_GRASS_BAND, DEFAULT_GRASS_COUNT, DEFAULT_GRASS_INNER_RADIUS, MOON_COLOR, NIGHT_COLOR,
    PIXEL_RATIO_CAP,
};
pub use lights::{
    AmbientLightSpec, DirectionalLightSpec, LightRig, OrbitPath, OrbitRadius, OrbitingLightSpec,
    PointLightSpec, Wave,
};
pub use orbit::{OrbitState, DAMPING_FACTOR, MAX_RADIUS, MIN_RADIUS, ROTATE_SPEED, ZOOM_STEP};
pub use scatter::{scatter_grass, scatter_grass_from_config, GrassBlade};
pub use types::{EulerRotation, Position, Rgb};
pub use viewport::Viewport;
pub use world::{SceneWorld, INITIAL_HEIGHT, INITIAL_WIDTH};
