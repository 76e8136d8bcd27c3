//! Raw terrain noise: multi-octave simplex noise that tiles at the grid size.

use std::f64::consts::TAU;

use noise::{NoiseFn, OpenSimplex};

use crate::grid::Grid;
use crate::params::NoiseParams;

/// Fractal simplex noise, periodic in x and y.
///
/// Each axis is wrapped onto a circle whose circumference equals its period,
/// and the base noise is sampled in 4D on the resulting torus. The field is
/// therefore continuous across the period boundary at every octave.
pub struct IslandNoise {
    base: OpenSimplex,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
    repeat_x: f64,
    repeat_y: f64,
}

impl IslandNoise {
    pub fn new(params: &NoiseParams) -> Self {
        Self {
            base: OpenSimplex::new(params.seed),
            octaves: params.octaves,
            persistence: params.persistence,
            lacunarity: params.lacunarity,
            repeat_x: params.repeat_x,
            repeat_y: params.repeat_y,
        }
    }
}

impl NoiseFn<f64, 2> for IslandNoise {
    /// Fractional Brownian motion normalized by the total amplitude.
    fn get(&self, point: [f64; 2]) -> f64 {
        let (xa, xb) = wrap(point[0], self.repeat_x);
        let (ya, yb) = wrap(point[1], self.repeat_y);

        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            total += amplitude
                * self.base.get([
                    xa * frequency,
                    xb * frequency,
                    ya * frequency,
                    yb * frequency,
                ]);
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        if max_value > 0.0 {
            total / max_value
        } else {
            0.0
        }
    }
}

/// Map a coordinate onto a circle of circumference `period`.
fn wrap(coord: f64, period: f64) -> (f64, f64) {
    let radius = period / TAU;
    let angle = coord / period * TAU;
    (radius * angle.cos(), radius * angle.sin())
}

/// Linearly space `index` across `[0, 1]`; the first cell maps to 0 and the
/// last to 1.
pub fn unit_coord(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    }
}

/// Sample `source` over the grid at unit coordinates divided by `scale`.
///
/// Samples are clamped to `[-1, 1]`; fractal sums are not strictly bounded.
pub fn sample_field<N: NoiseFn<f64, 2>>(
    source: &N,
    width: usize,
    height: usize,
    scale: f64,
) -> Grid<f64> {
    Grid::from_fn(width, height, |x, y| {
        let nx = unit_coord(x, width) / scale;
        let ny = unit_coord(y, height) / scale;
        source.get([nx, ny]).clamp(-1.0, 1.0)
    })
}

/// Generate the raw signed noise field for an island.
pub fn generate_noise_field(width: usize, height: usize, params: &NoiseParams) -> Grid<f64> {
    let noise = IslandNoise::new(params);
    sample_field(&noise, width, height, params.scale)
}
