//! UI components and resources for linking Bevy entities to scene state

use bevy::prelude::*;

use crate::scene::{AssetKind, Position, Rgb, SceneWorld};

/// Resource wrapper for the scene world
#[derive(Resource)]
pub struct SceneWorldResource(pub SceneWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker component for ground plane
#[derive(Component)]
pub struct Ground;

/// Marker component for the directional moon light
#[derive(Component)]
pub struct MoonLight;

/// Marker component for the posthouse model root
#[derive(Component)]
pub struct PosthouseModel;

/// Marker component for the warm light over the door
#[derive(Component)]
pub struct DoorLight;

/// Links a grass cone to its placement in the scene's grass list
#[derive(Component)]
pub struct GrassLink(pub usize);

/// Links a Bevy point light to an orbiting light in the rig
#[derive(Component)]
pub struct OrbitingLightLink(pub usize);

/// Handles of every asset requested at startup, polled for load failures
#[derive(Resource, Default)]
pub struct SceneAssetHandles(pub Vec<(AssetKind, UntypedHandle)>);

pub fn to_vec3(p: Position) -> Vec3 {
    Vec3::new(p.x, p.y, p.z)
}

pub fn to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.channels();
    Color::srgb(r, g, b)
}
