//! Main scene world that ties everything together
//!
//! This is the entry point for running the posthouse scene without any Bevy
//! dependencies. The Bevy UI wraps it in a resource and mirrors its state.

use anyhow::{Context, Result};
use log::{info, warn};

use super::assets::AssetTracker;
use super::config::SceneConfig;
use super::lights::LightRig;
use super::orbit::OrbitState;
use super::scatter::{scatter_grass_from_config, GrassBlade};
use super::types::Position;
use super::viewport::Viewport;

/// Window size used until the first resize arrives
pub const INITIAL_WIDTH: f32 = 1280.0;
pub const INITIAL_HEIGHT: f32 = 720.0;

/// The composed scene and its per-frame state
#[derive(Clone)]
pub struct SceneWorld {
    pub config: SceneConfig,

    /// Orbiting lights and their current positions
    pub lights: LightRig,

    /// Static grass placements, fixed at construction
    pub grass: Vec<GrassBlade>,

    pub viewport: Viewport,

    pub orbit: OrbitState,

    pub assets: AssetTracker,

    /// Seconds since the scene started
    pub elapsed: f32,

    /// Number of frames ticked
    pub frame: u64,
}

impl SceneWorld {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate().context("invalid scene configuration")?;

        let grass = scatter_grass_from_config(&config.grass);
        let lights = LightRig::new(config.lighting.orbiting.clone());
        let viewport = Viewport::new(INITIAL_WIDTH, INITIAL_HEIGHT, 1.0, config.pixel_ratio_cap);
        let orbit = OrbitState::looking_at(config.camera.eye, config.camera.target);

        info!(
            "Scene composed: {} grass cones, {} orbiting lights",
            grass.len(),
            lights.len()
        );

        Ok(Self {
            config,
            lights,
            grass,
            viewport,
            orbit,
            assets: AssetTracker::new(),
            elapsed: 0.0,
            frame: 0,
        })
    }

    /// Advance one frame: move the orbiting lights and step the camera damping
    pub fn tick(&mut self, delta_secs: f32) {
        let delta = if delta_secs.is_finite() && delta_secs > 0.0 {
            delta_secs
        } else {
            if delta_secs != 0.0 {
                warn!("Ignoring invalid frame delta {delta_secs}");
            }
            0.0
        };

        self.elapsed += delta;
        self.frame += 1;
        self.lights.update(self.elapsed);
        self.orbit.update();
    }

    /// Returns whether the viewport changed
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> bool {
        self.viewport.resize(width, height, device_pixel_ratio)
    }

    pub fn camera_eye(&self) -> Position {
        self.orbit.eye()
    }

    pub fn print_summary(&self) {
        println!("=== Posthouse Scene Summary ===");
        println!("Frame: {}, Time: {:.2}s", self.frame, self.elapsed);
        println!("Grass cones: {}", self.grass.len());
        let (width, height) = self.viewport.drawing_buffer_size();
        println!(
            "Viewport: {}x{} (aspect {:.3}), buffer {}x{}",
            self.viewport.width,
            self.viewport.height,
            self.viewport.aspect(),
            width,
            height
        );
        let eye = self.camera_eye();
        println!("Camera: ({:.2}, {:.2}, {:.2})", eye.x, eye.y, eye.z);
        println!();

        println!("--- Orbiting lights ---");
        for (light, pos) in self.lights.orbiting.iter().zip(self.lights.positions()) {
            println!(
                "  {:<8} {}: ({:6.2}, {:5.2}, {:6.2})",
                light.name, light.color, pos.x, pos.y, pos.z
            );
        }

        let failures = self.assets.failures();
        if !failures.is_empty() {
            println!("--- Missing assets ---");
            for (kind, reason) in failures {
                println!("  {kind}: {reason}");
            }
        }
    }

    /// Top-down ASCII view of the ground: `H` house, `^` grass, digits for lights
    pub fn render_map(&self) -> String {
        let half = self.config.ground.size / 2.0;
        // Two columns per unit so the map looks roughly square in a terminal
        let cols = (self.config.ground.size * 2.0).ceil() as usize + 1;
        let rows = self.config.ground.size.ceil() as usize + 1;
        let mut grid = vec![vec!['.'; cols]; rows];

        let to_grid = |p: &Position| -> Option<(usize, usize)> {
            if p.x.abs() > half || p.z.abs() > half {
                return None;
            }
            let col = ((p.x + half) * 2.0).round() as usize;
            let row = (p.z + half).round() as usize;
            Some((row.min(rows - 1), col.min(cols - 1)))
        };

        for blade in &self.grass {
            if let Some((row, col)) = to_grid(&blade.position) {
                grid[row][col] = '^';
            }
        }
        if let Some((row, col)) = to_grid(&Position::ORIGIN) {
            grid[row][col] = 'H';
        }
        for (index, pos) in self.lights.positions().iter().enumerate() {
            if let Some((row, col)) = to_grid(pos) {
                grid[row][col] = char::from_digit((index + 1) as u32 % 10, 10).unwrap_or('*');
            }
        }

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn draw_map(&self) {
        println!("{}", self.render_map());
    }
}
