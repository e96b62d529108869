//! Systems for syncing Bevy entities with scene state

use bevy::prelude::*;

use super::components::{to_vec3, MainCamera, OrbitingLightLink, SceneWorldResource};

/// System to advance the scene by one frame
pub fn tick_scene(time: Res<Time>, mut scene: ResMut<SceneWorldResource>) {
    scene.0.tick(time.delta_secs());
}

/// System to move the orbiting lights to their current path positions
pub fn sync_orbiting_lights(
    scene: Res<SceneWorldResource>,
    mut light_query: Query<(&OrbitingLightLink, &mut Transform)>,
) {
    for (link, mut transform) in light_query.iter_mut() {
        if let Some(position) = scene.0.lights.position(link.0) {
            transform.translation = to_vec3(position);
        }
    }
}

/// System to place the camera on its orbit
pub fn sync_camera(
    scene: Res<SceneWorldResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let eye = to_vec3(scene.0.camera_eye());
    let target = to_vec3(scene.0.orbit.target);
    for mut transform in camera_query.iter_mut() {
        *transform = Transform::from_translation(eye).looking_at(target, Vec3::Y);
    }
}
