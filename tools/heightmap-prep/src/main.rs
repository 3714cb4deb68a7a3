//! heightmap-prep: synthetic heightmap generator and terrain inspector.
//!
//! Usage:
//!   heightmap-prep synthetic --output heightmap.png --size 64
//!   heightmap-prep stats --input heightmap.png --height-scale 20 --seed 7

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use log::info;

use topshot_core::constants::DEFAULT_HEIGHT_SCALE;
use topshot_terrain::loader::load_image;
use topshot_terrain::{tilt_from_normal, Perturbation, Terrain};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "synthetic" => cmd_synthetic(&args[2..]),
        "stats" => cmd_stats(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "heightmap-prep: TOPSHOT heightmap tool\n\
         \n\
         Commands:\n\
         \n\
         synthetic Generate a grayscale heightmap image\n\
         \n\
           --output <path>    Output image path (default: heightmap.png)\n\
           --size <N>         Image size in pixels (default: 64)\n\
         \n\
         stats     Load a heightmap and report terrain statistics\n\
         \n\
           --input <path>     Heightmap image\n\
           --height-scale <f> Vertical range (default: 20)\n\
           --seed <n>         Apply seeded perturbation\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

// --- Synthetic command ---

fn cmd_synthetic(args: &[String]) -> Result<()> {
    let output = parse_flag(args, "--output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("heightmap.png"));
    let size: u32 = match parse_flag(args, "--size") {
        Some(s) => s.parse().with_context(|| format!("invalid --size: {s}"))?,
        None => 64,
    };
    if size == 0 {
        bail!("--size must be positive");
    }

    info!("generating {size}x{size} synthetic heightmap");
    let image = image::GrayImage::from_fn(size, size, |x, y| {
        let nx = x as f64 / size as f64;
        let nz = y as f64 / size as f64;
        image::Luma([(synthetic_elevation(nx, nz) * 255.0).round() as u8])
    });
    image
        .save(&output)
        .with_context(|| format!("writing {}", output.display()))?;

    eprintln!("Done! Output: {}", output.display());
    Ok(())
}

/// Elevation in `0..=1` at normalized coordinates.
/// nx: 0 = launch side, 1 = target side. nz: 0 = target row, 1 = launch row.
///
/// Rolling hills with a level pad around the launch corner and a shallow
/// bowl around the target corner.
fn synthetic_elevation(nx: f64, nz: f64) -> f64 {
    let hills = 0.5
        + 0.18 * (nx * 9.0).sin() * (nz * 7.0).cos()
        + 0.08 * (nx * 23.0 + nz * 17.0).sin();

    let pad = 1.0 - smooth_step(distance(nx, nz, 0.05, 0.95), 0.05, 0.2);
    let bowl = 1.0 - smooth_step(distance(nx, nz, 0.95, 0.05), 0.0, 0.25);

    let elev = hills * (1.0 - pad) + 0.5 * pad - 0.25 * bowl;
    elev.clamp(0.0, 1.0)
}

fn distance(ax: f64, az: f64, bx: f64, bz: f64) -> f64 {
    ((ax - bx).powi(2) + (az - bz).powi(2)).sqrt()
}

/// Smooth step function: 0 when x < edge0, 1 when x > edge1, smooth between.
fn smooth_step(x: f64, edge0: f64, edge1: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// --- Stats command ---

fn cmd_stats(args: &[String]) -> Result<()> {
    let Some(input) = parse_flag(args, "--input") else {
        bail!("--input <path> is required");
    };
    let height_scale: f32 = match parse_flag(args, "--height-scale") {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid --height-scale: {s}"))?,
        None => DEFAULT_HEIGHT_SCALE,
    };
    let perturbation = match parse_flag(args, "--seed") {
        Some(s) => Perturbation::Seeded {
            seed: s.parse().with_context(|| format!("invalid --seed: {s}"))?,
        },
        None => Perturbation::None,
    };

    let mut terrain = load_image(Path::new(input), height_scale, perturbation)
        .with_context(|| format!("loading {input}"))?;
    report(&mut terrain)
}

fn report(terrain: &mut Terrain) -> Result<()> {
    let (lo, hi) = terrain.heights().elevation_range();
    eprintln!("Grid: {}x{}", terrain.width(), terrain.length());
    eprintln!("Elevation range: {lo:.3}..{hi:.3}");

    let mut steepest = (0.0f32, 0, 0);
    let mut tilt_sum = 0.0f64;
    for z in 0..terrain.length() {
        for x in 0..terrain.width() {
            let tilt = tilt_from_normal(terrain.normal(x, z)?);
            tilt_sum += tilt.degrees() as f64;
            if tilt.angle > steepest.0 {
                steepest = (tilt.angle, x, z);
            }
        }
    }

    let cells = (terrain.width() * terrain.length()) as f64;
    eprintln!("Mean tilt: {:.2}°", tilt_sum / cells);
    eprintln!(
        "Steepest cell: ({}, {}) at {:.2}°",
        steepest.1,
        steepest.2,
        steepest.0.to_degrees()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_elevation_in_range() {
        for i in 0..=20 {
            for j in 0..=20 {
                let e = synthetic_elevation(i as f64 / 20.0, j as f64 / 20.0);
                assert!((0.0..=1.0).contains(&e));
            }
        }
    }

    #[test]
    fn test_launch_pad_is_level() {
        let a = synthetic_elevation(0.03, 0.97);
        let b = synthetic_elevation(0.07, 0.93);
        assert!((a - 0.5).abs() < 1e-9);
        assert!((b - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_target_sits_in_bowl() {
        let center = synthetic_elevation(0.95, 0.05);
        let rim = synthetic_elevation(0.6, 0.05);
        assert!(center < rim + 0.1);
    }

    #[test]
    fn test_parse_flag() {
        let args: Vec<String> = ["--size", "32", "--output"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(parse_flag(&args, "--size"), Some("32"));
        assert_eq!(parse_flag(&args, "--output"), None);
    }
}
