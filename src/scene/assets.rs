//! Asset manifest and load bookkeeping
//!
//! Loads are fire-and-forget. The tracker only records what happened so the
//! scene can log failures and carry on without the missing asset.

use std::collections::HashMap;

use anyhow::{ensure, Result};
use log::{debug, error, info};

/// Every external asset the scene asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// The posthouse glTF model
    Model,
    GroundColor,
    GroundAmbientOcclusion,
    GroundNormal,
    GroundRoughness,
}

impl AssetKind {
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Model,
        AssetKind::GroundColor,
        AssetKind::GroundAmbientOcclusion,
        AssetKind::GroundNormal,
        AssetKind::GroundRoughness,
    ];

    /// Whether the texture holds colour data rather than linear values
    pub fn is_srgb(&self) -> bool {
        matches!(self, AssetKind::GroundColor)
    }

    pub fn is_ground_texture(&self) -> bool {
        !matches!(self, AssetKind::Model)
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AssetKind::Model => "posthouse model",
            AssetKind::GroundColor => "ground color map",
            AssetKind::GroundAmbientOcclusion => "ground ambient occlusion map",
            AssetKind::GroundNormal => "ground normal map",
            AssetKind::GroundRoughness => "ground roughness map",
        };
        f.write_str(name)
    }
}

/// Relative paths of the scene's assets, resolved against the asset root
#[derive(Debug, Clone, PartialEq)]
pub struct AssetManifest {
    pub model: String,
    /// Index of the glTF scene to instantiate
    pub model_scene: usize,
    pub ground_color: String,
    pub ground_ambient_occlusion: String,
    pub ground_normal: String,
    pub ground_roughness: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            model: "models/posthouse.glb".to_string(),
            model_scene: 0,
            ground_color: "textures/grass/color.jpg".to_string(),
            ground_ambient_occlusion: "textures/grass/ambientOcclusion.jpg".to_string(),
            ground_normal: "textures/grass/normal.jpg".to_string(),
            ground_roughness: "textures/grass/roughness.jpg".to_string(),
        }
    }
}

impl AssetManifest {
    pub fn path(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Model => &self.model,
            AssetKind::GroundColor => &self.ground_color,
            AssetKind::GroundAmbientOcclusion => &self.ground_ambient_occlusion,
            AssetKind::GroundNormal => &self.ground_normal,
            AssetKind::GroundRoughness => &self.ground_roughness,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (AssetKind, &str)> + '_ {
        AssetKind::ALL.into_iter().map(|kind| (kind, self.path(kind)))
    }

    pub fn validate(&self) -> Result<()> {
        for (kind, path) in self.entries() {
            ensure!(!path.trim().is_empty(), "path for {kind} is empty");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed(String),
}

impl AssetStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

/// Tracks the load state of every manifest entry
#[derive(Debug, Clone)]
pub struct AssetTracker {
    statuses: HashMap<AssetKind, AssetStatus>,
}

impl Default for AssetTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetTracker {
    pub fn new() -> Self {
        Self {
            statuses: AssetKind::ALL
                .into_iter()
                .map(|kind| (kind, AssetStatus::Pending))
                .collect(),
        }
    }

    pub fn status(&self, kind: AssetKind) -> &AssetStatus {
        // Every kind is inserted in `new`
        self.statuses.get(&kind).unwrap_or(&AssetStatus::Pending)
    }

    /// Returns false if the asset had already settled
    pub fn record_loaded(&mut self, kind: AssetKind) -> bool {
        if self.status(kind).is_settled() {
            return false;
        }
        debug!("Loaded {kind}");
        self.statuses.insert(kind, AssetStatus::Loaded);
        true
    }

    /// Logs the failure; the scene keeps running without the asset.
    /// Returns false if the asset had already settled.
    pub fn record_failed(&mut self, kind: AssetKind, reason: impl Into<String>) -> bool {
        if self.status(kind).is_settled() {
            return false;
        }
        let reason = reason.into();
        error!("Failed to load {kind}: {reason}");
        self.statuses.insert(kind, AssetStatus::Failed(reason));
        true
    }

    pub fn pending(&self) -> impl Iterator<Item = AssetKind> + '_ {
        AssetKind::ALL
            .into_iter()
            .filter(|kind| !self.status(*kind).is_settled())
    }

    pub fn failures(&self) -> Vec<(AssetKind, &str)> {
        AssetKind::ALL
            .into_iter()
            .filter_map(|kind| match self.status(kind) {
                AssetStatus::Failed(reason) => Some((kind, reason.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn loaded_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|s| **s == AssetStatus::Loaded)
            .count()
    }

    pub fn all_settled(&self) -> bool {
        self.statuses.values().all(AssetStatus::is_settled)
    }

    pub fn log_summary(&self) {
        info!(
            "Assets: {} loaded, {} failed, {} pending",
            self.loaded_count(),
            self.failures().len(),
            self.pending().count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_paths() {
        let manifest = AssetManifest::default();
        assert_eq!(manifest.path(AssetKind::Model), "models/posthouse.glb");
        assert_eq!(manifest.entries().count(), 5);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_only_color_map_is_srgb() {
        let srgb: Vec<_> = AssetKind::ALL.into_iter().filter(|k| k.is_srgb()).collect();
        assert_eq!(srgb, vec![AssetKind::GroundColor]);
    }

    #[test]
    fn test_settled_asset_ignores_later_reports() {
        let mut tracker = AssetTracker::new();
        assert!(tracker.record_failed(AssetKind::GroundNormal, "404"));
        assert!(!tracker.record_loaded(AssetKind::GroundNormal));
        assert_eq!(
            tracker.status(AssetKind::GroundNormal),
            &AssetStatus::Failed("404".to_string())
        );
    }
}
