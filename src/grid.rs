/// A row-major 2D grid of cells. Unlike a world tilemap it does not wrap:
/// an island's edges are real edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` once per cell, row by row.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    /// Apply `f` to every cell in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(&mut T)) {
        self.data.iter_mut().for_each(|val| f(val));
    }
}

impl Grid<f64> {
    /// Multiply every cell by the matching cell of `other`.
    ///
    /// Panics if the two grids differ in shape.
    pub fn multiply(&mut self, other: &Grid<f64>) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "grid shapes differ"
        );
        for (val, factor) in self.data.iter_mut().zip(&other.data) {
            *val *= factor;
        }
    }

    /// Smallest and largest cell value, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut cells = self.data.iter().copied();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
