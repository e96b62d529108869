//! UI module that renders the scene using Bevy
//!
//! This module is purely for presentation - the scene's values and per-frame
//! logic live in the `scene` module. The UI reads state from `SceneWorld` and
//! mirrors it onto Bevy entities every frame.

mod assets;
mod components;
mod input;
mod resize;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

use crate::scene::SceneWorld;

pub use assets::{clear_ground_texture, watch_asset_loads};
pub use components::{
    DoorLight, GrassLink, Ground, MainCamera, OrbitingLightLink, PosthouseModel,
    SceneAssetHandles, SceneWorldResource,
};
pub use world::setup_world;

use input::{handle_input, handle_orbit_mouse};
use resize::handle_window_resize;
use spawner::{spawn_grass, spawn_orbiting_lights, spawn_posthouse};
use sync::{sync_camera, sync_orbiting_lights, tick_scene};

/// Plugin to register all scene systems
pub struct PosthouseScenePlugin {
    world: SceneWorld,
}

impl PosthouseScenePlugin {
    pub fn new(world: SceneWorld) -> Self {
        Self { world }
    }
}

impl Plugin for PosthouseScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneWorldResource(self.world.clone()))
            .init_resource::<SceneAssetHandles>()
            .add_systems(
                Startup,
                (
                    setup_world,
                    spawn_grass,
                    spawn_posthouse.after(setup_world),
                    spawn_orbiting_lights,
                ),
            )
            .add_systems(
                Update,
                (
                    (handle_input, handle_orbit_mouse, handle_window_resize),
                    tick_scene,
                    (sync_orbiting_lights, sync_camera),
                )
                    .chain(),
            )
            .add_systems(Update, watch_asset_loads);
    }
}
