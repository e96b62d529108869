//! Input handling systems

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use super::components::SceneWorldResource;

/// Pixels of trackpad scroll treated as one wheel line
const PIXELS_PER_LINE: f32 = 40.0;

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Left-drag orbits the camera, the wheel zooms
pub fn handle_orbit_mouse(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut scene: ResMut<SceneWorldResource>,
) {
    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        scene.0.orbit.drag(mouse_motion.delta.x, mouse_motion.delta.y);
    }

    if mouse_scroll.delta.y != 0.0 {
        let lines = match mouse_scroll.unit {
            MouseScrollUnit::Line => mouse_scroll.delta.y,
            MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
        };
        scene.0.orbit.zoom(lines);
    }
}
