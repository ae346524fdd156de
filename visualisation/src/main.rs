mod draw_polygon;
mod scenes;
mod simulation_renderer;

use std::{ fs::File, io::BufReader, path::PathBuf };

use anyhow::{ Context, Result };
use bounce_engine as be;
use clap::Parser;
use log::info;
use macroquad::{ prelude::*, ui::{ self, root_ui } };
use ::rand::{ Rng, SeedableRng, rngs::SmallRng };

/// Fixed time step of the headless mode
const HEADLESS_DT: f32 = 1. / 60.;

#[derive(Parser, Debug)]
#[command(about = "Two balls bouncing in a window")]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed of the random placement, overrides the configuration
    #[arg(short, long)]
    seed: Option<u64>,
    /// Bodies only bounce off the walls
    #[arg(long)]
    no_collisions: bool,
    #[arg(long)]
    restitution: Option<f32>,
    /// Simulate this many seconds without opening a window
    #[arg(long, value_name = "SECONDS")]
    headless: Option<f32>,
}

fn load_config(args: &Args) -> Result<be::SimulationConfig> {
    let mut config: be::SimulationConfig = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            serde_yaml::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => be::SimulationConfig::default(),
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_collisions {
        config.collisions = false;
    }
    if let Some(restitution) = args.restitution {
        config.restitution = restitution;
    }

    config.validate()?;
    Ok(config)
}

fn run_headless(config: &be::SimulationConfig, seed: u64, duration: f32) {
    let bounds = config.bounds();
    let mut world = be::WorldState::from_config(config, bounds, &mut SmallRng::seed_from_u64(seed));
    let steps = (duration / HEADLESS_DT).ceil() as u32;

    let mut collisions = 0;
    for _ in 0..steps {
        let report = world.step(HEADLESS_DT, bounds);
        if report.collision.is_some_and(|res| res.is_resolved()) {
            collisions += 1;
        }
    }

    for (idx, body) in world.bodies().iter().enumerate() {
        info!(
            "body {idx}: mass {:.1}, position {}, velocity {}",
            body.mass(), body.position(), body.velocity(),
        );
    }
    let momentum = world.total_momentum();
    info!(
        "{collisions} collisions in {duration}s, total momentum ({:.3}, {:.3}), kinetic energy {:.3}",
        momentum.x, momentum.y, world.total_kinetic_energy(),
    );
}

fn current_bounds() -> be::Bounds {
    be::Bounds::new(screen_width(), screen_height())
}

async fn run_window(config: be::SimulationConfig, seed: u64) {
    let scenes = scenes::get_all_scenes();
    let mut scene_idx = 0;
    // Every respawn draws its seed from here so a run is reproducible
    let mut seeds = SmallRng::seed_from_u64(seed);
    let mut spawn_seed = seed;

    let mut world = scenes[scene_idx].create_world_state(
        &config, current_bounds(), &mut SmallRng::seed_from_u64(spawn_seed),
    );
    let mut paused = false;

    // Setup ui skin
    {
        let label_style = root_ui().style_builder()
            .font_size(20)
            .text_color(WHITE)
            .build();
        let skin = ui::Skin {
            label_style,
            ..root_ui().default_skin()
        };
        root_ui().push_skin(&skin);
    }

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Handle inputs
        let mut respawn = false;
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::R) {
            spawn_seed = seeds.random();
            info!("respawning with seed {spawn_seed}");
            respawn = true;
        }
        for (idx, key) in [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4].into_iter().enumerate() {
            if is_key_pressed(key) && idx < scenes.len() {
                scene_idx = idx;
                respawn = true;
            }
        }
        if respawn {
            world = scenes[scene_idx].create_world_state(
                &config, current_bounds(), &mut SmallRng::seed_from_u64(spawn_seed),
            );
        }
        if is_key_pressed(KeyCode::C) {
            let enabled = !world.collisions_enabled();
            world.set_collisions_enabled(enabled);
            info!("collisions {}", if enabled { "enabled" } else { "disabled" });
        }

        let dt = get_frame_time();
        if !paused {
            world.step(dt, current_bounds());
        }

        simulation_renderer::render_simulation(&world, scenes[scene_idx].name(), paused);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let seed = config.seed.unwrap_or_else(|| SmallRng::from_os_rng().random());
    info!("seed: {seed}");

    if let Some(duration) = args.headless {
        run_headless(&config, seed, duration);
        return Ok(());
    }

    let window_conf = Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: true,
        ..Default::default()
    };
    macroquad::Window::from_config(window_conf, run_window(config, seed));

    Ok(())
}
