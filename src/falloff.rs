//! Radial falloff mask that sinks the map edges into the sea.

use crate::grid::Grid;

/// Peak value of the mask, reached at the map center.
pub const FALLOFF_AMPLITUDE: f64 = 0.9;

/// Bump function `max(0, 1 - t^6)`.
///
/// Flat near the center and steep near `|t| = 1`, which gives a wider
/// plateau and a sharper coast than a quadratic falloff.
pub fn bump(t: f64) -> f64 {
    (1.0 - t.powi(6)).max(0.0)
}

/// Map an axis index to a centered coordinate in `[-1, 1)`.
pub fn centered_coord(index: usize, len: usize) -> f64 {
    2.0 * (index as f64 / len as f64) - 1.0
}

/// Mask value for a pair of centered coordinates.
pub fn falloff(tx: f64, ty: f64) -> f64 {
    bump(tx) * bump(ty) * FALLOFF_AMPLITUDE
}

/// Build the falloff mask for a `width` x `height` grid.
///
/// The mask is separable, so each axis' bump is computed once.
pub fn generate_falloff_mask(width: usize, height: usize) -> Grid<f64> {
    let column_bumps: Vec<f64> = (0..width).map(|x| bump(centered_coord(x, width))).collect();
    let row_bumps: Vec<f64> = (0..height).map(|y| bump(centered_coord(y, height))).collect();

    Grid::from_fn(width, height, |x, y| {
        column_bumps[x] * row_bumps[y] * FALLOFF_AMPLITUDE
    })
}
