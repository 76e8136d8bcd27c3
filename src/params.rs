//! Run configuration: grid size, seed and the fixed noise parameters.

use crate::error::{IslandError, Result};
use crate::seeds;

/// Parameters for the fractal noise field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Unit coordinates are divided by this before sampling (lower = more features)
    pub scale: f64,
    /// Number of noise octaves
    pub octaves: u32,
    /// Amplitude decay per octave (0.0-1.0)
    pub persistence: f64,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
    /// Period of the field along x, in noise space
    pub repeat_x: f64,
    /// Period of the field along y, in noise space
    pub repeat_y: f64,
    /// Seed for the base noise permutation
    pub seed: u32,
}

pub const DEFAULT_SCALE: f64 = 0.3;
pub const DEFAULT_OCTAVES: u32 = 8;
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
pub const DEFAULT_LACUNARITY: f64 = 2.0;

impl NoiseParams {
    /// Island noise parameters for a grid, tiling at the grid's own size.
    pub fn for_grid(width: usize, height: usize, seed: u32) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
            repeat_x: width as f64,
            repeat_y: height as f64,
            seed,
        }
    }
}

/// Configuration for one island.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IslandConfig {
    pub width: usize,
    pub height: usize,
    /// Explicit seed; a random one is drawn when absent
    pub seed: Option<u32>,
}

impl IslandConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject grids the image encoder cannot represent.
    pub fn validate(&self) -> Result<()> {
        let fits = |side: usize| side >= 1 && u32::try_from(side).is_ok();
        if fits(self.width) && fits(self.height) {
            Ok(())
        } else {
            Err(IslandError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The explicit seed, or a freshly drawn one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(seeds::random_seed)
    }

    /// Noise parameters for this island with the seed already resolved.
    pub fn noise_params(&self, seed: u32) -> NoiseParams {
        NoiseParams::for_grid(self.width, self.height, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_params_tile_at_grid_size() {
        let params = NoiseParams::for_grid(640, 480, 42);
        assert_eq!(params.repeat_x, 640.0);
        assert_eq!(params.repeat_y, 480.0);
        assert_eq!(params.octaves, 8);
        assert_eq!(params.seed, 42);
        assert!((params.scale - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_explicit_seed_is_kept() {
        let config = IslandConfig::new(16, 16).with_seed(99);
        assert_eq!(config.resolve_seed(), 99);
        assert_eq!(config.noise_params(99).seed, 99);
    }

    #[test]
    fn test_drawn_seed_in_range() {
        let config = IslandConfig::new(16, 16);
        assert!(seeds::SEED_RANGE.contains(&config.resolve_seed()));
    }

    #[test]
    fn test_validate() {
        assert!(IslandConfig::new(1, 1).validate().is_ok());
        assert!(matches!(
            IslandConfig::new(0, 8).validate(),
            Err(IslandError::InvalidDimensions { width: 0, height: 8 })
        ));
        assert!(IslandConfig::new(8, 0).validate().is_err());
    }
}
