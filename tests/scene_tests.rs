//! Scene behaviour validation tests
//!
//! These exercise the engine-free scene through its public API.

use std::f32::consts::TAU;

use posthouse_scene::scene::{
    scatter_grass, AssetKind, AssetStatus, GrassConfig, Position, SceneConfig, SceneWorld,
    Viewport, DEFAULT_GRASS_BAND, DEFAULT_GRASS_COUNT, DEFAULT_GRASS_INNER_RADIUS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPSILON: f32 = 1e-4;

fn seeded_world(seed: u64) -> SceneWorld {
    let mut config = SceneConfig::default();
    config.grass.seed = Some(seed);
    SceneWorld::new(config).expect("default scene should be valid")
}

fn sample_times() -> impl Iterator<Item = f32> {
    (0..500).map(|i| i as f32 * 0.173)
}

#[test]
fn test_first_light_traces_circle_of_radius_four() {
    let mut world = seeded_world(1);
    let mut last = 0.0;
    for t in sample_times() {
        world.tick(t - last);
        last = t;

        let p = world.lights.position(0).expect("first light exists");
        let angle = 0.5 * world.elapsed;
        assert!((p.horizontal_radius() - 4.0).abs() < EPSILON);
        assert!((p.x - 4.0 * angle.cos()).abs() < EPSILON);
        assert!((p.z - 4.0 * angle.sin()).abs() < EPSILON);
        assert!((p.y - (3.0 * world.elapsed).sin()).abs() < EPSILON);
    }
}

#[test]
fn test_second_light_orbits_backwards_at_radius_five() {
    let config = SceneConfig::default();
    let path = &config.lighting.orbiting[1].path;
    for t in sample_times() {
        let p = path.position_at(t);
        let angle = -0.32 * t;
        assert!((p.horizontal_radius() - 5.0).abs() < EPSILON);
        assert!((p.x - 5.0 * angle.cos()).abs() < EPSILON);
        assert!((p.y - ((4.0 * t).sin() + (2.5 * t).sin())).abs() < EPSILON);
    }
}

#[test]
fn test_third_light_breathes_between_six_and_eight() {
    let config = SceneConfig::default();
    let path = &config.lighting.orbiting[2].path;
    for t in sample_times() {
        let p = path.position_at(t);
        let angle = -0.18 * t;
        assert!((p.x - angle.cos() * (7.0 + (0.32 * t).sin())).abs() < EPSILON);
        assert!((p.z - angle.sin() * (7.0 + (0.5 * t).sin())).abs() < EPSILON);
        let r = p.horizontal_radius();
        assert!(r >= 6.0 - EPSILON && r <= 8.0 + EPSILON);
        assert!(p.y.abs() <= path.max_height() + EPSILON);
    }
}

#[test]
fn test_light_position_depends_only_on_elapsed_time() {
    let mut stepped = seeded_world(2);
    for _ in 0..120 {
        stepped.tick(1.0 / 60.0);
    }
    let mut jumped = seeded_world(2);
    jumped.tick(stepped.elapsed);

    for (a, b) in stepped.lights.positions().iter().zip(jumped.lights.positions()) {
        assert!(a.distance(b) < EPSILON);
    }
}

#[test]
fn test_scatter_places_configured_count_within_band() {
    let world = seeded_world(9);
    assert_eq!(world.grass.len(), DEFAULT_GRASS_COUNT);

    let outer = DEFAULT_GRASS_INNER_RADIUS + DEFAULT_GRASS_BAND;
    for blade in &world.grass {
        let r = blade.position.horizontal_radius();
        assert!(r >= DEFAULT_GRASS_INNER_RADIUS - EPSILON, "radius {r} inside ring");
        assert!(r <= outer + EPSILON, "radius {r} outside ring");
        assert!(blade.angle >= 0.0 && blade.angle <= TAU);
        assert!(blade.rotation.y.abs() <= 0.2 && blade.rotation.z.abs() <= 0.2);
    }
}

#[test]
fn test_scatter_honours_custom_count_and_band() {
    let config = GrassConfig {
        count: 500,
        inner_radius: 1.0,
        band: 0.5,
        ..GrassConfig::default()
    };
    let blades = scatter_grass(&config, &mut StdRng::seed_from_u64(11));
    assert_eq!(blades.len(), 500);
    assert!(blades.iter().all(|b| {
        let r = b.position.horizontal_radius();
        r >= 1.0 - EPSILON && r <= 1.5 + EPSILON
    }));

    let none = GrassConfig {
        count: 0,
        ..GrassConfig::default()
    };
    assert!(scatter_grass(&none, &mut StdRng::seed_from_u64(11)).is_empty());
}

#[test]
fn test_resize_updates_aspect_and_drawing_buffer() {
    let mut world = seeded_world(3);
    assert!(world.resize(1920.0, 1080.0, 1.5));
    assert!((world.viewport.aspect() - 1920.0 / 1080.0).abs() < EPSILON);
    assert_eq!(world.viewport.drawing_buffer_size(), (2880, 1620));

    // High density displays are capped at a pixel ratio of two
    assert!(world.resize(800.0, 800.0, 3.0));
    assert_eq!(world.viewport.aspect(), 1.0);
    assert_eq!(world.viewport.pixel_ratio(), 2.0);
    assert_eq!(world.viewport.drawing_buffer_size(), (1600, 1600));
}

#[test]
fn test_minimised_window_keeps_previous_viewport() {
    let mut viewport = Viewport::new(1024.0, 768.0, 1.0, 2.0);
    assert!(!viewport.resize(1024.0, 0.0, 1.0));
    assert!(!viewport.resize(f32::NAN, 768.0, 1.0));
    assert_eq!(viewport.aspect(), 1024.0 / 768.0);
}

#[test]
fn test_asset_failure_does_not_stop_scene() {
    let mut world = seeded_world(4);
    world.assets.record_failed(AssetKind::Model, "file not found");
    for kind in AssetKind::ALL.into_iter().filter(|k| k.is_ground_texture()) {
        world.assets.record_loaded(kind);
    }

    assert!(world.assets.all_settled());
    assert_eq!(world.assets.failures().len(), 1);
    assert_eq!(world.assets.loaded_count(), 4);
    assert!(matches!(
        world.assets.status(AssetKind::Model),
        AssetStatus::Failed(_)
    ));

    // The scene keeps animating without the model
    world.tick(0.5);
    world.tick(0.5);
    assert_eq!(world.elapsed, 1.0);
    assert!(world.lights.positions().iter().all(Position::is_finite));
}

#[test]
fn test_camera_starts_at_configured_eye() {
    let world = seeded_world(5);
    let eye = world.camera_eye();
    assert!(eye.distance(&Position::new(4.0, 2.0, 5.0)) < EPSILON);
}

#[test]
fn test_dragging_orbits_without_changing_distance() {
    let mut world = seeded_world(6);
    let before = world.camera_eye();
    world.orbit.drag(250.0, 40.0);
    for _ in 0..60 {
        world.tick(1.0 / 60.0);
    }
    let after = world.camera_eye();
    assert!(before.distance(&after) > 0.1);
    assert!((after.distance(&Position::ORIGIN) - world.orbit.radius).abs() < EPSILON);
}

#[test]
fn test_empty_asset_path_rejected() {
    let mut config = SceneConfig::default();
    config.assets.ground_normal = "  ".to_string();
    let err = SceneWorld::new(config).err().expect("config should be rejected");
    assert!(format!("{err:#}").contains("ground normal map"));
}
