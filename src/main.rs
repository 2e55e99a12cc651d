//! Block Rings entry point
//!
//! Seeds a small demo world, then runs a temporary ring effect against it:
//! concentric circles around the origin, held briefly, then restored.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use glam::IVec3;

use block_rings::{CircleGenerator, Plane, RingSettings, TemporaryRings, World, WorldId};

struct Args {
    radius: i32,
    rings: i32,
    hold_ms: Option<u64>,
    plane: Option<Plane>,
    seed: u64,
    settings: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut radius = None;
    let mut rings = None;
    let mut hold_ms = None;
    let mut plane = None;
    let mut seed = 42;
    let mut settings = None;

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--hold-ms" => {
                hold_ms = Some(
                    argv.next()
                        .expect("--hold-ms requires a value")
                        .parse()
                        .expect("--hold-ms must be a number"),
                );
            }
            "--plane" => {
                let name = argv.next().expect("--plane requires a value");
                plane = Some(Plane::from_str(&name).unwrap_or_else(|| {
                    eprintln!("Unknown plane: {} (expected xz, xy, or zy)", name);
                    process::exit(1)
                }));
            }
            "--seed" => {
                seed = argv
                    .next()
                    .expect("--seed requires a value")
                    .parse()
                    .expect("--seed must be a number");
            }
            "--settings" => {
                settings = Some(PathBuf::from(
                    argv.next().expect("--settings requires a value"),
                ));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            _ if arg.starts_with("--") => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => {
                let value: i32 = arg.parse().unwrap_or_else(|_| {
                    eprintln!("radius and rings must be integers, got: {}", arg);
                    process::exit(1)
                });
                if radius.is_none() {
                    radius = Some(value);
                } else if rings.is_none() {
                    rings = Some(value);
                } else {
                    eprintln!("Unexpected extra argument: {}", arg);
                    print_usage();
                    process::exit(1);
                }
            }
        }
    }

    let (Some(radius), Some(rings)) = (radius, rings) else {
        print_usage();
        process::exit(1);
    };

    Args {
        radius,
        rings,
        hold_ms,
        plane,
        seed,
        settings,
    }
}

fn print_usage() {
    eprintln!(
        r#"
Block Rings

USAGE:
    block-rings <radius> <rings> [OPTIONS]

ARGS:
    <radius>    Outer radius of the ring stack, in blocks (non-negative)
    <rings>     Concentric rings to draw inward from the radius; 0 draws
                the radius itself

OPTIONS:
    --hold-ms <MS>      How long the rings stay before restore (default: 1000)
    --plane <PLANE>     Raster plane: xz, xy, or zy (default: xz)
    --seed <NUM>        Demo terrain seed (default: 42)
    --settings <PATH>   Load effect settings from a JSON file
    --help, -h          Show this help message

Set RUST_LOG=info to watch the draw/restore breadcrumbs.
"#
    );
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let mut settings = args
        .settings
        .as_deref()
        .map(RingSettings::load)
        .unwrap_or_default();
    if let Some(hold_ms) = args.hold_ms {
        settings.hold_ms = hold_ms;
    }
    if let Some(plane) = args.plane {
        settings.plane = plane;
    }

    log::info!(
        "Block Rings starting (radius {}, rings {}, plane {})",
        args.radius,
        args.rings,
        settings.plane.as_str()
    );

    // Terrain just large enough for the outermost ring, capped to keep the
    // demo store small
    let half_extent = (args.radius + 4).min(128);
    let world = World::with_terrain(WorldId(0), args.seed, half_extent);
    log::info!("Seeded demo world with {} blocks", world.placed_blocks());

    let generator = Arc::new(CircleGenerator::new());
    let effect = TemporaryRings {
        center: world.anchor(IVec3::ZERO),
        radius: args.radius,
        rings: args.rings,
        plane: settings.plane,
        style: settings.style(),
        fill: settings.fill,
        hold: settings.hold(),
    };

    // Run off the main thread, the way a host would schedule it
    let started = Instant::now();
    let worker_generator = Arc::clone(&generator);
    let handle = thread::spawn(move || {
        let mut world = world;
        let result = effect.run(&worker_generator, &mut world);
        (world, result)
    });

    let (world, result) = match handle.join() {
        Ok(pair) => pair,
        Err(_) => {
            log::error!("Effect thread panicked");
            process::exit(1)
        }
    };

    match result {
        Ok(report) => {
            println!(
                "Drew and restored {} blocks across {} rings in {:.2?}",
                report.blocks,
                report.rings,
                started.elapsed()
            );
            println!(
                "World intact with {} blocks; {} outlines cached",
                world.placed_blocks(),
                generator.cached_outlines()
            );
        }
        Err(e) => {
            log::error!("Ring effect failed: {}", e);
            process::exit(1);
        }
    }
}
