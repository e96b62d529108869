//! Systems for spawning visual entities from scene state

use bevy::gltf::{Gltf, GltfAssetLabel};
use bevy::prelude::*;

use super::components::{
    to_color, to_vec3, DoorLight, GrassLink, OrbitingLightLink, PosthouseModel,
    SceneAssetHandles, SceneWorldResource,
};
use crate::scene::AssetKind;

/// System to create the grass cones from the scattered placements
pub fn spawn_grass(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<SceneWorldResource>,
) {
    let grass = &scene.0.config.grass;
    // One mesh and material shared by every blade
    let mesh = meshes.add(Cone {
        radius: grass.cone_radius,
        height: grass.cone_height,
    });
    let material = materials.add(StandardMaterial {
        base_color: to_color(grass.color),
        perceptual_roughness: 0.9,
        ..default()
    });

    for (index, blade) in scene.0.grass.iter().enumerate() {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            blade.rotation.x,
            blade.rotation.y,
            blade.rotation.z,
        );
        commands.spawn((
            GrassLink(index),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(to_vec3(blade.position)).with_rotation(rotation),
        ));
    }
    debug!("Spawned {} grass cones", scene.0.grass.len());
}

/// System to load the posthouse model and hang the door light off it
pub fn spawn_posthouse(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    scene: Res<SceneWorldResource>,
    mut handles: ResMut<SceneAssetHandles>,
) {
    let assets = &scene.0.config.assets;
    let door = &scene.0.config.lighting.door;

    // The root handle is only held so load failures can be observed
    let gltf: Handle<Gltf> = asset_server.load(assets.model.clone());
    handles.0.push((AssetKind::Model, gltf.untyped()));

    let scene_handle = asset_server
        .load(GltfAssetLabel::Scene(assets.model_scene).from_asset(assets.model.clone()));

    commands
        .spawn((PosthouseModel, SceneRoot(scene_handle), Transform::default()))
        .with_children(|parent| {
            parent.spawn((
                DoorLight,
                PointLight {
                    color: to_color(door.color),
                    intensity: door.intensity,
                    range: door.range,
                    shadows_enabled: door.shadows,
                    ..default()
                },
                Transform::from_translation(to_vec3(door.offset)),
            ));
        });
}

/// System to spawn the point lights that circle the house
pub fn spawn_orbiting_lights(mut commands: Commands, scene: Res<SceneWorldResource>) {
    let rig = &scene.0.lights;
    for (index, (spec, position)) in rig.orbiting.iter().zip(rig.positions()).enumerate() {
        commands.spawn((
            OrbitingLightLink(index),
            Name::new(format!("{} light", spec.name)),
            PointLight {
                color: to_color(spec.color),
                intensity: spec.intensity,
                range: spec.range,
                shadows_enabled: spec.shadows,
                ..default()
            },
            Transform::from_translation(to_vec3(*position)),
        ));
    }
}
