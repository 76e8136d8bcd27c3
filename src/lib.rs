//! Island heightmap generation library
//!
//! Fractal noise, normalized and attenuated by a radial falloff mask, quantized
//! to an 8-bit grayscale image.

pub mod error;
pub mod export;
pub mod falloff;
pub mod grid;
pub mod heightmap;
pub mod noise_field;
pub mod params;
pub mod seeds;

use std::path::Path;

use image::GrayImage;
use noise::NoiseFn;
use tracing::{debug, info};

pub use error::{IslandError, Result};
pub use params::{IslandConfig, NoiseParams};

use heightmap::HeightStats;

/// Default output file, relative to the working directory.
pub const OUTPUT_PATH: &str = "island.png";

/// A generated island.
pub struct Island {
    pub seed: u32,
    pub image: GrayImage,
    /// Range of the raw noise field before normalization
    pub raw_range: (f64, f64),
    /// Statistics of the masked heightmap before quantization
    pub stats: HeightStats,
}

/// Generate an island with the built-in fractal simplex noise.
pub fn generate_island(config: &IslandConfig) -> Result<Island> {
    config.validate()?;
    let seed = config.resolve_seed();
    let params = config.noise_params(seed);
    let noise = noise_field::IslandNoise::new(&params);
    run_pipeline(config, seed, &params, &noise)
}

/// Generate an island from a caller-supplied noise source.
///
/// The source is sampled exactly as the built-in noise would be; the seed is
/// still resolved and reported but only the source decides the terrain.
pub fn generate_island_with<N: NoiseFn<f64, 2>>(config: &IslandConfig, source: &N) -> Result<Island> {
    config.validate()?;
    let seed = config.resolve_seed();
    let params = config.noise_params(seed);
    run_pipeline(config, seed, &params, source)
}

fn run_pipeline<N: NoiseFn<f64, 2>>(
    config: &IslandConfig,
    seed: u32,
    params: &NoiseParams,
    source: &N,
) -> Result<Island> {
    let (width, height) = (config.width, config.height);
    info!(seed, width, height, "generating island");

    debug!(
        scale = params.scale,
        octaves = params.octaves,
        persistence = params.persistence,
        lacunarity = params.lacunarity,
        "sampling noise field"
    );
    let mut terrain = noise_field::sample_field(source, width, height, params.scale);
    let raw_range = terrain.min_max().unwrap_or((0.0, 0.0));
    debug!(min = raw_range.0, max = raw_range.1, "raw noise range");

    heightmap::normalize_heightmap(&mut terrain);
    let mask = falloff::generate_falloff_mask(width, height);
    heightmap::apply_falloff(&mut terrain, &mask);

    let stats = HeightStats::from_heightmap(&terrain).ok_or(IslandError::InvalidDimensions { width, height })?;
    info!(
        "heightmap range {:.3} to {:.3}, mean {:.3} ({:.1}% land)",
        stats.min,
        stats.max,
        stats.mean,
        100.0 * stats.land_fraction
    );
    debug!(histogram = ?heightmap::height_histogram(&terrain, 10), "elevation distribution");

    let image = export::heightmap_to_image(&terrain);
    Ok(Island {
        seed,
        image,
        raw_range,
        stats,
    })
}

/// Write an island's heightmap image to `path`, overwriting any existing file.
pub fn save_island(island: &Island, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    export::export_heightmap(&island.image, path)?;
    info!(path = %path.display(), "saved heightmap");
    Ok(())
}
