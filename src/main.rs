use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use posthouse_scene::scene::{SceneConfig, SceneWorld, DEFAULT_GRASS_COUNT};

#[derive(Parser)]
#[command(name = "posthouse_scene")]
#[command(about = "Posthouse night scene with optional UI")]
struct Cli {
    /// Open a window and render the scene with Bevy
    #[arg(long)]
    ui: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value = "600")]
    frames: u32,

    /// Seconds per frame in headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,

    /// Seed for the grass scatter (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of grass cones to scatter
    #[arg(long, default_value_t = DEFAULT_GRASS_COUNT)]
    grass: usize,

    /// Directory the model and textures are loaded from
    #[arg(long, default_value = "assets")]
    asset_root: String,

    /// Disable shadow casting for every light
    #[arg(long)]
    no_shadows: bool,
}

impl Cli {
    fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig::default();
        config.grass.seed = self.seed;
        config.grass.count = self.grass;
        if self.no_shadows {
            config = config.without_shadows();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.ui {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }
    let world = SceneWorld::new(cli.scene_config()).context("failed to compose scene")?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(world, cli.asset_root);
        }
        #[cfg(not(feature = "ui"))]
        {
            anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
        }
    } else {
        run_headless(world, cli.frames, cli.delta);
    }
    Ok(())
}

/// Run the scene in headless mode (no graphics)
fn run_headless(mut world: SceneWorld, frames: u32, delta: f32) {
    info!("Running posthouse scene in headless mode");
    info!("Frames: {}, Delta: {}s", frames, delta);

    // Report once per simulated second
    let frames_per_second = (1.0 / delta).ceil().max(1.0) as u32;

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let mut frame = 0;
    while frame < frames {
        let frames_to_run = frames_per_second.min(frames - frame);
        for _ in 0..frames_to_run {
            frame += 1;
            world.tick(delta);
        }

        println!("--- After frame {} ({:.1}s) ---", frame, world.elapsed);
        world.print_summary();
        world.draw_map();
        println!();
    }

    info!("Headless run complete after {} frames", world.frame);
}

#[cfg(feature = "ui")]
fn run_with_ui(world: SceneWorld, asset_root: String) {
    use bevy::asset::AssetPlugin;
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use posthouse_scene::scene::{INITIAL_HEIGHT, INITIAL_WIDTH};
    use posthouse_scene::ui::PosthouseScenePlugin;

    println!("Starting Posthouse scene...");
    println!();
    println!("Camera Controls:");
    println!("  Click+Drag  - Orbit around the house");
    println!("  Scroll      - Zoom in/out");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,posthouse_scene=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Posthouse".into(),
                        resolution: (INITIAL_WIDTH as u32, INITIAL_HEIGHT as u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: asset_root,
                    ..default()
                }),
        )
        .add_plugins(PosthouseScenePlugin::new(world))
        .run();
}
