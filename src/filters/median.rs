//! Order-statistic (median blur) filter.
//!
//! Each channel is filtered independently: the `w x w` neighborhood around a
//! pixel is gathered through the center-reflecting
//! [`boundary`](super::boundary) resolver (reflected duplicates included),
//! sorted ascending, and one element is selected.
//!
//! ## Selection index
//!
//! The selected element is at zero-based index `w² / 2 + 1`, one past the
//! mathematical middle. For the default 7x7 window that is index 25 of 49,
//! the 26th smallest value, where a textbook median would take index 24.
//! Median-blurred and watercolor outputs are defined by this rule, so it is
//! kept as is. See [`Window::selection_index`].

use log::debug;

use super::boundary::resolve;
use crate::error::{FilterError, Result};
use crate::raster::Raster;

/// Default median window side.
pub const MEDIAN_WINDOW: usize = 7;

/// Odd median window side length, at least 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window(usize);

impl Window {
    /// Validate a window side.
    ///
    /// A side of 1 is rejected: the selection index `1 / 2 + 1 = 1` would
    /// lie past its single sample.
    pub fn new(size: usize) -> Result<Self> {
        if size < 3 || size % 2 == 0 {
            return Err(FilterError::InvalidWindow { size });
        }
        Ok(Self(size))
    }

    pub fn size(self) -> usize {
        self.0
    }

    pub fn radius(self) -> usize {
        self.0 / 2
    }

    /// Number of samples per channel, `size²`.
    pub fn area(self) -> usize {
        self.0 * self.0
    }

    /// Index into the sorted samples that becomes the output value.
    ///
    /// `area / 2 + 1`: one above the true median index.
    pub fn selection_index(self) -> usize {
        self.area() / 2 + 1
    }
}

impl Default for Window {
    fn default() -> Self {
        Self(MEDIAN_WINDOW)
    }
}

/// Apply the median blur to `source`.
///
/// # Arguments
/// * `source` - Input raster, never modified
/// * `window` - Neighborhood side length
///
/// # Returns
/// Filtered raster of the same size, or an exact copy of `source` when either
/// dimension is smaller than the window.
pub fn median_filter(source: &Raster, window: Window) -> Raster {
    let (width, height) = (source.width(), source.height());
    let size = window.size();

    if width < size || height < size {
        debug!(
            "median_filter: {}x{} raster below {}x{} window, copying",
            width, height, size, size
        );
        return source.clone();
    }

    let r = window.radius() as isize;
    let pick = window.selection_index();
    let mut output = Raster::new(width, height);

    let mut red: Vec<u8> = Vec::with_capacity(window.area());
    let mut green: Vec<u8> = Vec::with_capacity(window.area());
    let mut blue: Vec<u8> = Vec::with_capacity(window.area());

    for y in 0..height {
        for x in 0..width {
            red.clear();
            green.clear();
            blue.clear();

            for i in -r..=r {
                for j in -r..=r {
                    let (sx, sy) = resolve(x, y, j, i, width, height);
                    let [rv, gv, bv] = source.pixel(sx, sy);
                    red.push(rv);
                    green.push(gv);
                    blue.push(bv);
                }
            }

            red.sort_unstable();
            green.sort_unstable();
            blue.sort_unstable();

            output.set_pixel(x, y, [red[pick], green[pick], blue[pick]]);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random raster (xorshift).
    fn noisy(width: usize, height: usize, seed: u32) -> Raster {
        let mut state = seed.max(1);
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        let mut raster = Raster::new(width, height);
        for y in 0..height {
            for x in 0..width {
                raster.set_pixel(x, y, [next(), next(), next()]);
            }
        }
        raster
    }

    /// Brute-force reference: gather with the plain reflection rule, sort,
    /// take the element at `w² / 2 + 1`.
    fn reference_pixel(source: &Raster, x: usize, y: usize, w: usize) -> [u8; 3] {
        let r = (w / 2) as isize;
        let mut channels = [Vec::new(), Vec::new(), Vec::new()];
        for i in -r..=r {
            for j in -r..=r {
                let mut sx = x as isize + j;
                if sx < 0 || sx >= source.width() as isize {
                    sx = x as isize - j;
                }
                let mut sy = y as isize + i;
                if sy < 0 || sy >= source.height() as isize {
                    sy = y as isize - i;
                }
                let px = source.pixel(sx as usize, sy as usize);
                for c in 0..3 {
                    channels[c].push(px[c]);
                }
            }
        }
        let mut out = [0u8; 3];
        for c in 0..3 {
            channels[c].sort();
            out[c] = channels[c][w * w / 2 + 1];
        }
        out
    }

    #[test]
    fn test_window_validation() {
        assert!(Window::new(3).is_ok());
        assert!(Window::new(7).is_ok());
        assert!(matches!(
            Window::new(4),
            Err(FilterError::InvalidWindow { size: 4 })
        ));
        assert!(Window::new(1).is_err());
        assert!(Window::new(0).is_err());
        assert_eq!(Window::default().size(), MEDIAN_WINDOW);
    }

    #[test]
    fn test_selection_index_is_one_past_middle() {
        assert_eq!(Window::default().selection_index(), 25);
        assert_eq!(Window::new(3).unwrap().selection_index(), 5);
        assert_eq!(Window::new(5).unwrap().selection_index(), 13);
    }

    #[test]
    fn test_selects_twenty_sixth_of_forty_nine() {
        // 7x7 raster of distinct values; the center window covers every pixel
        // without reflection, so the sorted samples are exactly 0..49.
        let mut source = Raster::new(7, 7);
        for y in 0..7 {
            for x in 0..7 {
                let v = (y * 7 + x) as u8;
                source.set_pixel(x, y, [v, 48 - v, v * 2]);
            }
        }

        let result = median_filter(&source, Window::default());

        // True median would be 24 / 24 / 48.
        assert_eq!(result.pixel(3, 3), [25, 25, 50]);
    }

    #[test]
    fn test_matches_brute_force_reference() {
        let source = noisy(11, 9, 7);
        for w in [3usize, 5, 7] {
            let result = median_filter(&source, Window::new(w).unwrap());
            for y in 0..9 {
                for x in 0..11 {
                    assert_eq!(
                        result.pixel(x, y),
                        reference_pixel(&source, x, y, w),
                        "window {w} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_output_values_come_from_window() {
        let source = noisy(8, 8, 99);
        let result = median_filter(&source, Window::new(3).unwrap());
        for y in 0..8 {
            for x in 0..8 {
                let out = result.pixel(x, y);
                for c in 0..3 {
                    let mut found = false;
                    for i in -1isize..=1 {
                        for j in -1isize..=1 {
                            let (sx, sy) = resolve(x, y, j, i, 8, 8);
                            found |= source.pixel(sx, sy)[c] == out[c];
                        }
                    }
                    assert!(found, "({x}, {y}) channel {c}");
                }
            }
        }
    }

    #[test]
    fn test_removes_salt_noise() {
        let mut source = Raster::filled(9, 9, [128, 64, 32]);
        source.set_pixel(4, 4, [255, 255, 255]);
        source.set_pixel(0, 0, [0, 0, 0]);

        let result = median_filter(&source, Window::default());

        assert_eq!(result, Raster::filled(9, 9, [128, 64, 32]));
    }

    #[test]
    fn test_undersized_raster_is_copied() {
        let source = noisy(6, 12, 3);
        assert_eq!(median_filter(&source, Window::default()), source);

        let tiny = Raster::filled(1, 1, [10, 20, 30]);
        assert_eq!(median_filter(&tiny, Window::new(3).unwrap()), tiny);
    }

    #[test]
    fn test_source_not_mutated() {
        let source = noisy(7, 7, 5);
        let before = source.clone();
        let _ = median_filter(&source, Window::default());
        assert_eq!(source, before);
    }
}
