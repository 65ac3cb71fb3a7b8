//! Kernel convolution over RGB rasters.
//!
//! For every output pixel the kernel is centered on the pixel, each sample is
//! fetched through the center-reflecting [`boundary`](super::boundary)
//! resolver, and the three channels are accumulated independently in `f64`.
//! Each channel sum is then clamped to 0-255 and rounded **up** (ceiling).
//! The ceiling is part of the output contract: it biases reconstructed color
//! slightly upward and exact pixel values depend on it.
//!
//! Rasters narrower or shorter than the kernel are returned unchanged.

use log::debug;

use super::boundary::resolve;
use super::kernel::Kernel;
use crate::raster::{Raster, CHANNELS};

/// Convolve `source` with `kernel`, producing a new raster of the same size.
///
/// # Arguments
/// * `source` - Input raster, never modified
/// * `kernel` - Odd-sized square weight matrix
///
/// # Returns
/// Filtered raster, or an exact copy of `source` when either dimension is
/// smaller than the kernel.
pub fn convolve(source: &Raster, kernel: &Kernel) -> Raster {
    let (width, height) = (source.width(), source.height());
    let size = kernel.size();

    if width < size || height < size {
        debug!(
            "convolve: {}x{} raster below {}x{} kernel, copying",
            width, height, size, size
        );
        return source.clone();
    }

    let r = kernel.radius() as isize;
    let mut output = Raster::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut sums = [CompensatedSum::default(); CHANNELS];

            for i in -r..=r {
                for j in -r..=r {
                    let (sx, sy) = resolve(x, y, j, i, width, height);
                    let weight = kernel.weight((r + i) as usize, (r + j) as usize);
                    let sample = source.pixel(sx, sy);
                    for (sum, &v) in sums.iter_mut().zip(sample.iter()) {
                        sum.add(v as f64 * weight);
                    }
                }
            }

            output.set_pixel(
                x,
                y,
                [
                    normalize_channel(sums[0].total()),
                    normalize_channel(sums[1].total()),
                    normalize_channel(sums[2].total()),
                ],
            );
        }
    }

    output
}

/// Clamp an accumulated channel value to 0-255 and round up.
#[inline]
pub fn normalize_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).ceil() as u8
}

/// Neumaier-compensated running sum.
///
/// Plain summation of `v * (1/9)` nine times lands a few ulps above `v` for
/// many intensities, which the ceiling turns into a full level. Carrying the
/// rounding error keeps uniform regions fixed under normalized kernels.
#[derive(Clone, Copy, Default)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    #[inline]
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline]
    fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}
