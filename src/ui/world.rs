//! World setup systems for camera, fog, lighting, and ground

use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use super::components::{
    to_color, to_vec3, Ground, MainCamera, MoonLight, SceneAssetHandles, SceneWorldResource,
};
use crate::scene::AssetKind;

/// System to setup the world environment (camera, fog, lights, ground)
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    scene: Res<SceneWorldResource>,
    mut handles: ResMut<SceneAssetHandles>,
) {
    let world = &scene.0;
    let config = &world.config;
    info!(
        "Scene composed: {} grass cones, {} orbiting lights",
        world.grass.len(),
        world.lights.len()
    );

    // Perspective camera with linear fog matching the night sky
    let camera = &config.camera;
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            aspect_ratio: world.viewport.aspect(),
            ..default()
        }),
        Transform::from_translation(to_vec3(world.camera_eye()))
            .looking_at(to_vec3(world.orbit.target), Vec3::Y),
        DistanceFog {
            color: to_color(config.fog.color),
            falloff: FogFalloff::Linear {
                start: config.fog.start,
                end: config.fog.end,
            },
            ..default()
        },
    ));
    commands.insert_resource(ClearColor(to_color(config.fog.color)));

    let lighting = &config.lighting;
    commands.insert_resource(AmbientLight {
        color: to_color(lighting.ambient.color),
        brightness: lighting.ambient.brightness,
        ..default()
    });

    commands.spawn((
        MoonLight,
        DirectionalLight {
            color: to_color(lighting.moon.color),
            illuminance: lighting.moon.illuminance,
            shadows_enabled: lighting.moon.shadows,
            ..default()
        },
        Transform::from_translation(to_vec3(lighting.moon.position)).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Textured ground plane
    let mut texture = |kind: AssetKind| -> Handle<Image> {
        let handle = load_repeating_texture(&asset_server, config.assets.path(kind), kind.is_srgb());
        handles.0.push((kind, handle.clone().untyped()));
        handle
    };
    let base_color_texture = texture(AssetKind::GroundColor);
    let occlusion_texture = texture(AssetKind::GroundAmbientOcclusion);
    let normal_map_texture = texture(AssetKind::GroundNormal);
    let roughness_texture = texture(AssetKind::GroundRoughness);

    let mut ground_mesh = Plane3d::default()
        .mesh()
        .size(config.ground.size, config.ground.size)
        .build();
    // Normal mapping needs tangents
    if let Err(err) = ground_mesh.generate_tangents() {
        warn!("Could not generate ground tangents, normal map disabled: {err}");
    }

    commands.spawn((
        Ground,
        Mesh3d(meshes.add(ground_mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(base_color_texture),
            occlusion_texture: Some(occlusion_texture),
            normal_map_texture: Some(normal_map_texture),
            metallic_roughness_texture: Some(roughness_texture),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            uv_transform: Affine2::from_scale(Vec2::splat(config.ground.texture_repeat)),
            ..default()
        })),
    ));
}

/// Load a texture that tiles across the ground
fn load_repeating_texture(asset_server: &AssetServer, path: &str, srgb: bool) -> Handle<Image> {
    asset_server.load_with_settings(path.to_string(), move |settings: &mut ImageLoaderSettings| {
        settings.is_srgb = srgb;
        settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            ..default()
        });
    })
}
