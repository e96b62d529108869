//! A missing ground texture must not take the ground plane down with it

#![cfg(feature = "ui")]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;

use posthouse_scene::scene::{AssetKind, AssetStatus, SceneConfig, SceneWorld};
use posthouse_scene::ui::{
    setup_world, watch_asset_loads, Ground, SceneAssetHandles, SceneWorldResource,
};

const MAX_UPDATES: usize = 10_000;

fn ground_textures() -> impl Iterator<Item = AssetKind> {
    AssetKind::ALL.into_iter().filter(|k| k.is_ground_texture())
}

fn empty_asset_app() -> App {
    let root = std::env::temp_dir().join("posthouse_scene_empty_assets");
    std::fs::create_dir_all(&root).expect("create empty asset root");

    let mut config = SceneConfig::default();
    config.grass.seed = Some(1);
    let world = SceneWorld::new(config).expect("default scene should be valid");

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin {
            file_path: root.to_string_lossy().into_owned(),
            ..default()
        },
    ))
    .init_asset::<Image>()
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .insert_resource(SceneWorldResource(world))
    .init_resource::<SceneAssetHandles>()
    .add_systems(Startup, setup_world)
    .add_systems(Update, watch_asset_loads);
    app
}

fn run_until_textures_settle(app: &mut App) {
    for _ in 0..MAX_UPDATES {
        app.update();
        let scene = app.world().resource::<SceneWorldResource>();
        if ground_textures().all(|k| scene.0.assets.status(k).is_settled()) {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    panic!("ground textures never settled");
}

#[test]
fn test_missing_textures_are_dropped_from_ground_material() {
    let mut app = empty_asset_app();
    run_until_textures_settle(&mut app);

    let scene = app.world().resource::<SceneWorldResource>();
    for kind in ground_textures() {
        assert!(
            matches!(scene.0.assets.status(kind), AssetStatus::Failed(_)),
            "{kind} should have failed"
        );
    }

    let world = app.world_mut();
    let material_handle = world
        .query_filtered::<&MeshMaterial3d<StandardMaterial>, With<Ground>>()
        .single(world)
        .expect("one ground entity")
        .0
        .clone();
    let material = world
        .resource::<Assets<StandardMaterial>>()
        .get(&material_handle)
        .expect("ground material exists");

    assert!(material.base_color_texture.is_none());
    assert!(material.occlusion_texture.is_none());
    assert!(material.normal_map_texture.is_none());
    assert!(material.metallic_roughness_texture.is_none());
}

#[test]
fn test_scene_keeps_ticking_after_texture_failures() {
    let mut app = empty_asset_app();
    run_until_textures_settle(&mut app);

    let mut scene = app.world_mut().resource_mut::<SceneWorldResource>();
    scene.0.tick(0.25);
    scene.0.tick(0.25);
    assert_eq!(scene.0.elapsed, 0.5);
    assert_eq!(scene.0.assets.failures().len(), 4);
}
