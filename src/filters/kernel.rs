//! Convolution kernels: validated weight matrices plus the preset tables.
//!
//! A [`Kernel`] is a square `Array2<f64>` with odd side length, so every
//! kernel has a well-defined center. Weights are arbitrary finite reals; they
//! are not required to sum to 1 (sharpen and outline only do so by
//! construction).

use ndarray::{Array2, ArrayView2};

use crate::error::{FilterError, Result};

// ============================================================================
// Preset weight tables
// ============================================================================

const NINTH: f64 = 1.0 / 9.0;

/// 3x3 uniform average.
pub const BOX_BLUR: [[f64; 3]; 3] = [
    [NINTH, NINTH, NINTH],
    [NINTH, NINTH, NINTH],
    [NINTH, NINTH, NINTH],
];

/// 5x5 binomial approximation of a Gaussian, weights sum to 1.
pub const GAUSSIAN_BLUR: [[f64; 5]; 5] = [
    [1.0 / 256.0, 4.0 / 256.0, 6.0 / 256.0, 4.0 / 256.0, 1.0 / 256.0],
    [4.0 / 256.0, 16.0 / 256.0, 24.0 / 256.0, 16.0 / 256.0, 4.0 / 256.0],
    [6.0 / 256.0, 24.0 / 256.0, 36.0 / 256.0, 24.0 / 256.0, 6.0 / 256.0],
    [4.0 / 256.0, 16.0 / 256.0, 24.0 / 256.0, 16.0 / 256.0, 4.0 / 256.0],
    [1.0 / 256.0, 4.0 / 256.0, 6.0 / 256.0, 4.0 / 256.0, 1.0 / 256.0],
];

/// 3x3 cross-shaped sharpen.
pub const SHARPEN: [[f64; 3]; 3] = [
    [0.0, -0.25, 0.0],
    [-0.25, 2.0, -0.25],
    [0.0, -0.25, 0.0],
];

/// 3x3 outline: strong center, negative ring.
pub const OUTLINE: [[f64; 3]; 3] = [
    [-0.5, -0.5, -0.5],
    [-0.5, 5.0, -0.5],
    [-0.5, -0.5, -0.5],
];

// ============================================================================
// Kernel
// ============================================================================

/// Square convolution kernel with odd side length.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Validate and wrap a weight matrix.
    ///
    /// Rejects empty, non-square and even-sized matrices, and any NaN or
    /// infinite weight.
    pub fn new(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || cols == 0 {
            return Err(FilterError::EmptyKernel);
        }
        if rows != cols {
            return Err(FilterError::NonSquareKernel { rows, cols });
        }
        if rows % 2 == 0 {
            return Err(FilterError::EvenKernel { size: rows });
        }
        if let Some(((row, col), _)) = weights.indexed_iter().find(|(_, w)| !w.is_finite()) {
            return Err(FilterError::NonFiniteWeight { row, col });
        }
        Ok(Self { weights })
    }

    /// Build from nested rows, e.g. `&[&[0.0, 1.0, 0.0], ...]`.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let size = rows.len();
        let mut weights = Array2::<f64>::zeros((size, size));
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(FilterError::NonSquareKernel {
                    rows: size,
                    cols: row.len(),
                });
            }
            for (x, &w) in row.iter().enumerate() {
                weights[[y, x]] = w;
            }
        }
        Self::new(weights)
    }

    /// Wrap one of the compile-time preset tables.
    fn from_table<const N: usize>(table: &[[f64; N]; N]) -> Self {
        debug_assert!(N % 2 == 1, "preset tables have odd size");
        Self {
            weights: Array2::from_shape_fn((N, N), |(y, x)| table[y][x]),
        }
    }

    pub fn box_blur() -> Self {
        Self::from_table(&BOX_BLUR)
    }

    pub fn gaussian_blur() -> Self {
        Self::from_table(&GAUSSIAN_BLUR)
    }

    pub fn sharpen() -> Self {
        Self::from_table(&SHARPEN)
    }

    pub fn outline() -> Self {
        Self::from_table(&OUTLINE)
    }

    /// Normalized binomial kernel of odd side `size`.
    ///
    /// Outer product of the Pascal row `C(size - 1, k) / 2^(size - 1)` with
    /// itself. `binomial(5)` reproduces [`GAUSSIAN_BLUR`] exactly.
    pub fn binomial(size: usize) -> Result<Self> {
        check_side(size)?;
        let row = binomial_row(size);
        Self::new(Array2::from_shape_fn((size, size), |(y, x)| row[y] * row[x]))
    }

    /// Sampled Gaussian with standard deviation `sigma`.
    ///
    /// Side length is `ceil(6 * sigma)` forced odd, covering 99.7% of the
    /// distribution. `sigma <= 0` yields the 1x1 identity kernel. Sigmas
    /// whose side would exceed [`MAX_KERNEL_SIZE`] are rejected.
    pub fn gaussian(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() {
            return Err(FilterError::InvalidSigma { sigma });
        }
        if sigma <= 0.0 {
            return Self::new(Array2::ones((1, 1)));
        }

        let span = (sigma * 6.0).ceil();
        if span >= MAX_KERNEL_SIZE as f64 {
            return Err(FilterError::KernelTooLarge {
                size: span.min(usize::MAX as f64) as usize | 1,
                max: MAX_KERNEL_SIZE,
            });
        }
        let size = span as usize | 1;
        let profile = gaussian_profile(sigma, size / 2);

        Self::new(Array2::from_shape_fn((size, size), |(y, x)| {
            profile[y.abs_diff(size / 2)] * profile[x.abs_diff(size / 2)]
        }))
    }

    /// Side length (3, 5, 7, ...).
    pub fn size(&self) -> usize {
        self.weights.dim().0
    }

    /// Offsets range over `-radius..=radius` on both axes.
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[[row, col]]
    }

    pub fn sum(&self) -> f64 {
        self.weights.sum()
    }

    pub fn weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }
}

/// Largest side accepted by the generated kernels.
pub const MAX_KERNEL_SIZE: usize = 1025;

fn check_side(size: usize) -> Result<()> {
    if size == 0 {
        return Err(FilterError::EmptyKernel);
    }
    if size % 2 == 0 {
        return Err(FilterError::EvenKernel { size });
    }
    if size > MAX_KERNEL_SIZE {
        return Err(FilterError::KernelTooLarge {
            size,
            max: MAX_KERNEL_SIZE,
        });
    }
    Ok(())
}

/// Pascal row of length `size`, already divided by its sum.
///
/// Built by repeated pairwise averaging, so entries never exceed 1 and stay
/// exact dyadic fractions for small sizes.
fn binomial_row(size: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(size);
    row.push(1.0f64);
    for _ in 1..size {
        let mut prev = 0.0;
        for v in row.iter_mut() {
            let cur = *v;
            *v = 0.5 * (prev + cur);
            prev = cur;
        }
        row.push(0.5 * prev);
    }
    row
}

/// One-sided Gaussian weights for distances `0..=half`, scaled so the full
/// symmetric row sums to 1.
fn gaussian_profile(sigma: f64, half: usize) -> Vec<f64> {
    let denom = 2.0 * sigma * sigma;
    let mut profile: Vec<f64> = (0..=half)
        .map(|d| (-((d * d) as f64) / denom).exp())
        .collect();

    let total = profile[0] + 2.0 * profile[1..].iter().sum::<f64>();
    profile.iter_mut().for_each(|w| *w /= total);
    profile
}
