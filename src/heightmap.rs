use crate::grid::Grid;

/// Masked elevation at or above which a cell counts as land in summaries.
pub const LAND_THRESHOLD: f64 = 0.3;

/// Map a raw `[-1, 1]` field onto `[0, 1]` in place.
///
/// Results are clamped, so out-of-range input saturates instead of leaking
/// past the unit interval.
pub fn normalize_heightmap(heightmap: &mut Grid<f64>) {
    heightmap.map_in_place(|h| *h = ((*h + 1.0) / 2.0).clamp(0.0, 1.0));
}

/// Attenuate a normalized heightmap by a falloff mask of the same shape.
pub fn apply_falloff(heightmap: &mut Grid<f64>, mask: &Grid<f64>) {
    heightmap.multiply(mask);
}

/// Summary statistics of a finished heightmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Share of cells at or above `LAND_THRESHOLD` (0.0-1.0)
    pub land_fraction: f64,
}

impl HeightStats {
    pub fn from_heightmap(heightmap: &Grid<f64>) -> Option<Self> {
        let (min, max) = heightmap.min_max()?;
        let count = heightmap.len() as f64;

        let mut sum = 0.0;
        let mut land = 0usize;
        for (_, _, &h) in heightmap.iter() {
            sum += h;
            if h >= LAND_THRESHOLD {
                land += 1;
            }
        }

        Some(Self {
            min,
            max,
            mean: sum / count,
            land_fraction: land as f64 / count,
        })
    }
}

/// Count cells per equal-width elevation bin over `[0, 1]`.
pub fn height_histogram(heightmap: &Grid<f64>, num_bins: usize) -> Vec<usize> {
    let num_bins = num_bins.max(1);
    let mut bins = vec![0usize; num_bins];
    for (_, _, &h) in heightmap.iter() {
        let bin_idx = (h.clamp(0.0, 1.0) * num_bins as f64) as usize;
        bins[bin_idx.min(num_bins - 1)] += 1;
    }
    bins
}
