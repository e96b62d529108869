//! Polls asset load states and records the outcome in the scene

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::components::{Ground, SceneAssetHandles, SceneWorldResource};
use crate::scene::AssetKind;

/// Record loads and failures as they settle. A failed asset is logged and
/// simply left out; the rest of the scene keeps rendering.
pub fn watch_asset_loads(
    asset_server: Res<AssetServer>,
    handles: Res<SceneAssetHandles>,
    mut scene: ResMut<SceneWorldResource>,
    ground_query: Query<&MeshMaterial3d<StandardMaterial>, With<Ground>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }

    for (kind, handle) in &handles.0 {
        if scene.0.assets.status(*kind).is_settled() {
            continue;
        }
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => {
                scene.0.assets.record_loaded(*kind);
            }
            Some(LoadState::Failed(err)) => {
                if scene.0.assets.record_failed(*kind, err.to_string()) && kind.is_ground_texture()
                {
                    // A material pointing at an image that never arrives is never drawn
                    for material_handle in ground_query.iter() {
                        if let Some(material) = materials.get_mut(&material_handle.0) {
                            clear_ground_texture(material, *kind);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    if scene.0.assets.all_settled() {
        scene.0.assets.log_summary();
        *reported = true;
    }
}

/// Drop the material slot fed by `kind` so Bevy falls back to its default
pub fn clear_ground_texture(material: &mut StandardMaterial, kind: AssetKind) {
    let slot = match kind {
        AssetKind::GroundColor => &mut material.base_color_texture,
        AssetKind::GroundAmbientOcclusion => &mut material.occlusion_texture,
        AssetKind::GroundNormal => &mut material.normal_map_texture,
        AssetKind::GroundRoughness => &mut material.metallic_roughness_texture,
        AssetKind::Model => return,
    };
    if slot.take().is_some() {
        warn!("Rendering ground without its {kind}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_ground_texture_only_touches_matching_slot() {
        let mut material = StandardMaterial {
            base_color_texture: Some(Handle::default()),
            occlusion_texture: Some(Handle::default()),
            normal_map_texture: Some(Handle::default()),
            metallic_roughness_texture: Some(Handle::default()),
            ..default()
        };

        clear_ground_texture(&mut material, AssetKind::GroundNormal);
        assert!(material.normal_map_texture.is_none());
        assert!(material.base_color_texture.is_some());
        assert!(material.occlusion_texture.is_some());
        assert!(material.metallic_roughness_texture.is_some());

        clear_ground_texture(&mut material, AssetKind::Model);
        assert!(material.base_color_texture.is_some());
    }
}
