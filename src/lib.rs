//! rasterfx
//!
//! Spatial filters for RGB rasters: kernel convolution (box blur, Gaussian
//! blur, sharpen, outline or any odd square kernel), a window median blur,
//! and composition of the two into effects such as watercolor.
//!
//! ## Image Format
//! Rasters are `(height, width, 3)` arrays of `u8` (red, green, blue, 0-255).
//! Alpha and other channel counts are rejected when a raster is built.
//!
//! ## Filter Contract
//! Every filter returns a freshly allocated raster of the same size as its
//! input and never mutates the input. A raster smaller than the kernel or
//! window in either dimension comes back as an exact copy.
//!
//! ```
//! use rasterfx::filters::kernel::Kernel;
//! use rasterfx::filters::convolve::convolve;
//! use rasterfx::pipeline::watercolor;
//! use rasterfx::raster::Raster;
//!
//! let source = Raster::filled(16, 16, [120, 80, 40]);
//! let sharp = convolve(&source, &Kernel::sharpen());
//! assert_eq!(sharp, source);
//! assert_eq!(watercolor(&source), source);
//! ```

pub mod error;
pub mod filters;
pub mod pipeline;
pub mod raster;

#[cfg(feature = "io")]
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, Result};
pub use filters::convolve::convolve;
pub use filters::kernel::Kernel;
pub use filters::median::{median_filter, Window};
pub use filters::preset::FilterPreset;
pub use pipeline::{render_gallery, watercolor, Gallery, Pipeline, Stage};
pub use raster::Raster;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::convolve::convolve as convolve_impl;
    use crate::filters::kernel::Kernel;
    use crate::filters::median::{median_filter, Window, MEDIAN_WINDOW};
    use crate::filters::preset::FilterPreset;
    use crate::pipeline::watercolor as watercolor_impl;
    use crate::raster::Raster;

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn to_raster(image: &PyReadonlyArray3<'_, u8>) -> PyResult<Raster> {
        Ok(Raster::from_array(image.as_array().to_owned())?)
    }

    // ========================================================================
    // Convolution
    // ========================================================================

    /// Convolve an RGB u8 image (H, W, 3) with an odd square float kernel.
    ///
    /// Channel sums are clamped to 0-255 and rounded up. Images smaller than
    /// the kernel are returned unchanged.
    #[pyfunction]
    pub fn convolve<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        kernel: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let source = to_raster(&image)?;
        let kernel = Kernel::new(kernel.as_array().to_owned())?;
        Ok(convolve_impl(&source, &kernel).into_array().into_pyarray(py))
    }

    // ========================================================================
    // Median
    // ========================================================================

    /// Median blur with an odd window (default 7).
    ///
    /// Selects sorted index `window**2 // 2 + 1`, one above the true median.
    #[pyfunction]
    #[pyo3(signature = (image, window=MEDIAN_WINDOW))]
    pub fn median_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        window: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let source = to_raster(&image)?;
        let window = Window::new(window)?;
        Ok(median_filter(&source, window).into_array().into_pyarray(py))
    }

    // ========================================================================
    // Presets & Effects
    // ========================================================================

    /// Apply a named preset: box_blur, gaussian_blur, sharpen, outline,
    /// median_blur.
    #[pyfunction]
    pub fn apply_preset<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let source = to_raster(&image)?;
        let preset: FilterPreset = name.parse()?;
        Ok(preset.apply(&source).into_array().into_pyarray(py))
    }

    /// Gaussian blur, 7x7 median blur, then outline.
    #[pyfunction]
    pub fn watercolor<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let source = to_raster(&image)?;
        Ok(watercolor_impl(&source).into_array().into_pyarray(py))
    }

    // ========================================================================
    // Module Registration
    // ========================================================================

    #[pymodule]
    pub fn rasterfx(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(convolve, m)?)?;
        m.add_function(wrap_pyfunction!(median_blur, m)?)?;
        m.add_function(wrap_pyfunction!(apply_preset, m)?)?;
        m.add_function(wrap_pyfunction!(watercolor, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::rasterfx;
