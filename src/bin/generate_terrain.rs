//! Terrain generator binary: builds a terrain and prints a JSON summary.
//!
//! Usage: cargo run --release --bin generate_terrain -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   JSON terrain config (defaults for missing fields)
//!   --size <N>        Grid side in vertices (default: 1280)
//!   --seed <SEED>     Noise seed (default: random)
//!   --height <H>      Height scale (default: 50.0)
//!   --spacing <S>     Vertex spacing (default: 1.0)
//!   --octaves <N>     fBm octaves (default: 10)

use std::process::ExitCode;
use std::time::Instant;

use serde_json::json;

use heightpatch::terrain::{Terrain, TerrainConfig};

fn main() -> ExitCode {
    heightpatch::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> heightpatch::core::Result<()> {
    let mut config = match parse_str_arg(args, "--config") {
        Some(path) => TerrainConfig::load(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(size) = parse_u32_arg(args, "--size") {
        config.size = size;
    }
    if let Some(seed) = parse_u32_arg(args, "--seed") {
        config.noise.seed = Some(seed);
    }
    if let Some(height) = parse_f32_arg(args, "--height") {
        config.height_scale = height;
    }
    if let Some(spacing) = parse_f32_arg(args, "--spacing") {
        config.spacing = spacing;
    }
    if let Some(octaves) = parse_u32_arg(args, "--octaves") {
        config.noise.octaves = octaves;
    }

    let start = Instant::now();
    let terrain = Terrain::build(config)?;
    let elapsed = start.elapsed();
    log::info!("Built in {:.1} ms", elapsed.as_secs_f64() * 1000.0);

    let (lo, hi) = terrain.heightfield().min_max();
    let lods: Vec<_> = terrain
        .lod_steps()
        .iter()
        .enumerate()
        .map(|(level, &step)| {
            let drawable = terrain
                .patches()
                .iter()
                .filter(|p| p.lod(level).is_some_and(|l| l.is_drawable()))
                .count();
            json!({
                "step": step,
                "indices": terrain.lod_index_count(level),
                "drawable_patches": drawable,
            })
        })
        .collect();

    let summary = json!({
        "seed": terrain.seed(),
        "size": terrain.size(),
        "vertices": terrain.vertex_count(),
        "grid_vertices": terrain.grid_vertex_count(),
        "vertex_bytes": terrain.vertex_bytes().len(),
        "patches": {
            "cols": terrain.patch_cols(),
            "rows": terrain.patch_rows(),
            "size": terrain.patch_size(),
        },
        "lods": lods,
        "height_range": [lo * terrain.height_scale(), hi * terrain.height_scale()],
        "extent": terrain.extent(),
        "build_ms": elapsed.as_secs_f64() * 1000.0,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
