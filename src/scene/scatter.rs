//! Procedural grass scatter
//!
//! Cones are dropped on a ring around the house: a random angle, a random
//! radius inside `[inner_radius, inner_radius + band)`, and a small random
//! tilt so the blades don't all stand to attention.

use std::f32::consts::TAU;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GrassConfig;
use super::types::{EulerRotation, Position};

/// A single placed grass cone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassBlade {
    /// Angle around the Y axis, measured from +Z toward +X
    pub angle: f32,
    /// Horizontal distance from the origin
    pub radius: f32,
    pub position: Position,
    pub rotation: EulerRotation,
}

/// Scatter `config.count` blades using the given random source
pub fn scatter_grass<R: Rng + ?Sized>(config: &GrassConfig, rng: &mut R) -> Vec<GrassBlade> {
    let y = config.cone_height / 2.0;
    (0..config.count)
        .map(|_| {
            let angle = rng.random::<f32>() * TAU;
            let radius = config.inner_radius + rng.random::<f32>() * config.band;
            let tilt_z = (rng.random::<f32>() - 0.5) * 2.0 * config.max_tilt;
            let tilt_y = (rng.random::<f32>() - 0.5) * 2.0 * config.max_tilt;
            GrassBlade {
                angle,
                radius,
                position: Position::new(angle.sin() * radius, y, angle.cos() * radius),
                rotation: EulerRotation {
                    x: 0.0,
                    y: tilt_y,
                    z: tilt_z,
                },
            }
        })
        .collect()
}

/// Scatter using the configured seed, or the thread RNG if none is set
pub fn scatter_grass_from_config(config: &GrassConfig) -> Vec<GrassBlade> {
    match config.seed {
        Some(seed) => {
            debug!("Scattering {} grass cones with seed {seed}", config.count);
            scatter_grass(config, &mut StdRng::seed_from_u64(seed))
        }
        None => scatter_grass(config, &mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_scatter_is_reproducible() {
        let config = GrassConfig {
            seed: Some(7),
            ..GrassConfig::default()
        };
        assert_eq!(
            scatter_grass_from_config(&config),
            scatter_grass_from_config(&config)
        );
    }

    #[test]
    fn test_zero_tilt_keeps_blades_upright() {
        let config = GrassConfig {
            max_tilt: 0.0,
            count: 10,
            ..GrassConfig::default()
        };
        let blades = scatter_grass(&config, &mut StdRng::seed_from_u64(1));
        assert!(blades
            .iter()
            .all(|b| b.rotation == EulerRotation::default()));
    }

    #[test]
    fn test_blades_sit_on_ground() {
        let config = GrassConfig::default();
        let blades = scatter_grass(&config, &mut StdRng::seed_from_u64(3));
        for blade in blades {
            assert_eq!(blade.position.y, config.cone_height / 2.0);
        }
    }
}
