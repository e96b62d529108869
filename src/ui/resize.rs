//! Window resize handling

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{MainCamera, SceneWorldResource};

/// Keep the scene viewport and the camera aspect in step with the window.
///
/// Only the aspect is applied. The capped pixel ratio and drawing buffer
/// size are informational: Bevy sizes the surface from the window's
/// physical size.
pub fn handle_window_resize(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut scene: ResMut<SceneWorldResource>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let device_ratio = window.resolution.base_scale_factor();
    let width = window.physical_width() as f32 / device_ratio;
    let height = window.physical_height() as f32 / device_ratio;
    if !scene.0.resize(width, height, device_ratio) {
        return;
    }

    let viewport = scene.0.viewport;
    for mut projection in camera_query.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect();
        }
    }

    let (buffer_width, buffer_height) = viewport.drawing_buffer_size();
    debug!(
        "Resized to {}x{}, drawing buffer {}x{} at pixel ratio {}",
        viewport.width,
        viewport.height,
        buffer_width,
        buffer_height,
        viewport.pixel_ratio()
    );
}
