#![cfg_attr(
    all(not(debug_assertions), feature = "window"),
    windows_subsystem = "windows"
)]

use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use cubepixel::{
    scene::{self, Glyph, Orbit},
    HostBuilder, DEFAULT_TICK_RATE,
};
use tinyrand::{Seeded, StdRand};

/// Ticks run without a window when no limit is given.
const HEADLESS_TICKS: u64 = 100;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scene {
    HelloWorld,
    Face,
}

impl From<Scene> for Glyph {
    fn from(scene: Scene) -> Self {
        match scene {
            Scene::HelloWorld => Glyph::HelloWorld,
            Scene::Face => Glyph::Face,
        }
    }
}

/// Paints a greeting on every cube and sends a dot around the screen.
#[derive(Debug, Parser)]
#[clap(name = "hello-cube", version)]
struct Args {
    /// Number of cubes to drive
    #[clap(long, default_value_t = 3)]
    cubes: usize,

    /// Picture drawn at startup
    #[clap(long, value_enum, default_value = "hello-world")]
    scene: Scene,

    /// Ticks per second
    #[clap(long, default_value_t = DEFAULT_TICK_RATE)]
    tick_rate: u32,

    /// Stop after this many ticks
    #[clap(long)]
    ticks: Option<u64>,

    /// Seed for the dot colors
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    log::debug!("Hello, cubes!");

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    });
    log::debug!("dot color seed {seed}");

    let mut builder = HostBuilder::with_cubes(args.cubes)
        .tick_rate(args.tick_rate)
        .title(String::from("Hello, cubes!"));
    match args.ticks {
        Some(ticks) => builder = builder.max_ticks(ticks),
        None if cfg!(not(feature = "window")) => builder = builder.max_ticks(HEADLESS_TICKS),
        None => {}
    }
    let mut host = builder.build();

    let glyph = Glyph::from(args.scene);
    let mut orbit = Orbit::new(StdRand::seed(seed));

    let ticks = host.run(
        |surface| scene::draw_intro(surface, glyph),
        |surface, tick| orbit.draw(surface, tick),
    )?;

    log::info!("goodbye after {ticks} ticks");

    Ok(())
}
