use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use tinyrand::{Rand, Seeded, StdRand};

/// One grid element: an RGBA color sample with channels in `[0, 1]`.
///
/// Red, green and blue are drawn uniformly from the discrete set
/// `{0.00, 0.01, ..., 1.00}`; alpha is always `1.0` (opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Cell {
    fn sample(rand: &mut impl Rand) -> Self {
        Self {
            red: channel(rand),
            green: channel(rand),
            blue: channel(rand),
            alpha: 1.0,
        }
    }
}

// Uniform over 101 values, i.e. a unit draw at 2-decimal granularity.
fn channel(rand: &mut impl Rand) -> f32 {
    rand.next_lim_u16(101) as f32 / 100.0
}

/// A fixed-size 2-D grid of random color samples, row-major, immutable
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Texture {
    /// Generates a `width` x `height` grid from the given seed. The same
    /// seed always produces the same grid.
    pub fn generate(width: u32, height: u32, seed: u64) -> Self {
        assert!(width > 0 && height > 0);

        let mut rand = StdRand::seed(seed);
        let mut cells = Vec::with_capacity((width * height) as usize);
        for _ in 0..width * height {
            cells.push(Cell::sample(&mut rand));
        }

        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        self.cells[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Diagnostic dump of the full grid, one row per line.
impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cell(x, y);
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(
                    f,
                    "({:.2}, {:.2}, {:.2}, {:.0})",
                    cell.red, cell.green, cell.blue, cell.alpha
                )?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Seed for unseeded runs, derived from the system clock.
pub fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stay_in_unit_range_and_opaque() {
        let texture = Texture::generate(16, 16, 42);
        for cell in texture.cells() {
            assert!((0.0..=1.0).contains(&cell.red));
            assert!((0.0..=1.0).contains(&cell.green));
            assert!((0.0..=1.0).contains(&cell.blue));
            assert_eq!(cell.alpha, 1.0);
        }
    }

    #[test]
    fn channels_have_two_decimal_granularity() {
        let texture = Texture::generate(16, 16, 7);
        for cell in texture.cells() {
            for c in [cell.red, cell.green, cell.blue] {
                let scaled = c * 100.0;
                assert!((scaled - scaled.round()).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn cell_count_matches_dimensions() {
        let texture = Texture::generate(16, 16, 0);
        assert_eq!(texture.width(), 16);
        assert_eq!(texture.height(), 16);
        assert_eq!(texture.cells().len(), 256);

        let texture = Texture::generate(3, 5, 0);
        assert_eq!(texture.cells().len(), 15);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let a = Texture::generate(16, 16, 12345);
        let b = Texture::generate(16, 16, 12345);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = Texture::generate(16, 16, 111);
        let b = Texture::generate(16, 16, 222);
        assert_ne!(a, b);
    }

    #[test]
    fn dump_has_one_line_per_row() {
        let texture = Texture::generate(4, 3, 9);
        let dump = texture.to_string();
        assert_eq!(dump.lines().count(), 3);
        assert!(dump.lines().all(|line| line.matches('(').count() == 4));
    }
}
