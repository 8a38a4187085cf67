//! Spry headless driver.
//!
//! Builds a random sphere scene, flies the camera along a scripted key
//! sequence and writes every rendered frame as a PNG.
//!
//! Run with: cargo run -- --frames 60 --output frames

mod controls;
mod scene;

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use spry_renderer::{render, Camera, RenderOptions};

use controls::{Key, KeyState};

/// Simulated time step between frames.
const FRAME_SECONDS: f64 = 1.0 / 30.0;

/// Keys held for each leg of the flythrough, cycled over the frame count.
const FLIGHT_PATH: &[(u64, &[Key])] = &[
    (15, &[Key::S]),
    (20, &[Key::Left]),
    (10, &[Key::W, Key::Up]),
    (20, &[Key::W, Key::Right]),
    (10, &[Key::Down, Key::A]),
];

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "spry")]
#[command(about = "Render a scripted flythrough of a random sphere scene")]
struct Args {
    /// JSON file with render options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random scene
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of frames to render
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    frames: u64,

    /// Directory the PNG frames are written to
    #[arg(short, long, default_value = "frames")]
    output: PathBuf,
}

/// Keys held while advancing to `frame`.
fn keys_for_frame(frame: u64) -> KeyState {
    let cycle: u64 = FLIGHT_PATH.iter().map(|(frames, _)| frames).sum();
    let mut position = frame % cycle;

    for (frames, keys) in FLIGHT_PATH {
        if position < *frames {
            return KeyState::holding(keys);
        }
        position -= frames;
    }

    KeyState::new()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => RenderOptions::from_json_file(path)
            .with_context(|| format!("Failed to load render options from {}", path.display()))?,
        None => RenderOptions::default(),
    };

    log::info!(
        "Rendering {} frame(s) at {}x{}, fov {}",
        args.frames,
        options.width,
        options.height,
        options.field_of_view
    );

    let scene = scene::random_scene(args.seed);
    let mut camera = Camera::new();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory {}", args.output.display()))?;

    let mut total = Duration::ZERO;
    for frame in 0..args.frames {
        if frame > 0 {
            keys_for_frame(frame).apply(&mut camera, FRAME_SECONDS);
        }

        let start = Instant::now();
        let image = render(&camera, &scene.objects, &scene.lights, &options)?;
        let elapsed = start.elapsed();
        total += elapsed;

        let path = args.output.join(format!("frame_{:04}.png", frame));
        image
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;

        let position = camera.position();
        log::info!(
            "Frame {} rendered in {:?} at ({:.2}, {:.2}, {:.2}) -> {}",
            frame,
            elapsed,
            position.x,
            position.y,
            position.z,
            path.display()
        );
    }

    let fps = args.frames as f64 / total.as_secs_f64().max(f64::EPSILON);
    log::info!("Rendered {} frame(s) in {:?} ({:.1} FPS)", args.frames, total, fps);

    Ok(())
}
