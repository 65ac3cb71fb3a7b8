//! WebAssembly exports for rasterfx filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Buffer Layout
//!
//! All functions take and return flat, row-major RGB bytes
//! (length = width * height * 3). Canvas `ImageData` is RGBA; callers strip
//! alpha before calling and re-add it afterwards.

use wasm_bindgen::prelude::*;

use ndarray::Array2;

use crate::filters::convolve::convolve;
use crate::filters::kernel::Kernel;
use crate::filters::median::{median_filter, Window};
use crate::filters::preset::FilterPreset;
use crate::pipeline::watercolor;
use crate::raster::Raster;

fn to_raster(data: &[u8], width: usize, height: usize) -> Result<Raster, JsError> {
    Ok(Raster::from_raw(width, height, data.to_vec())?)
}

// ============================================================================
// Convolution
// ============================================================================

/// Convolve an RGB buffer with a row-major `size x size` kernel.
#[wasm_bindgen]
pub fn convolve_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    kernel: &[f64],
    size: usize,
) -> Result<Vec<u8>, JsError> {
    let source = to_raster(data, width, height)?;
    let weights = Array2::from_shape_vec((size, size), kernel.to_vec()).map_err(|e| {
        JsError::new(&format!(
            "kernel of {} weights is not {size}x{size}: {e}",
            kernel.len()
        ))
    })?;
    let kernel = Kernel::new(weights)?;
    Ok(convolve(&source, &kernel).into_raw())
}

// ============================================================================
// Presets
// ============================================================================

/// Apply a named preset (box_blur, gaussian_blur, sharpen, outline,
/// median_blur) to an RGB buffer.
#[wasm_bindgen]
pub fn apply_preset_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
) -> Result<Vec<u8>, JsError> {
    let source = to_raster(data, width, height)?;
    let preset: FilterPreset = name.parse()?;
    Ok(preset.apply(&source).into_raw())
}

// ============================================================================
// Median
// ============================================================================

/// Median blur with an odd window side of at least 3.
#[wasm_bindgen]
pub fn median_blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    window: usize,
) -> Result<Vec<u8>, JsError> {
    let source = to_raster(data, width, height)?;
    let window = Window::new(window)?;
    Ok(median_filter(&source, window).into_raw())
}

// ============================================================================
// Effects
// ============================================================================

/// Watercolor effect: Gaussian blur, 7x7 median blur, outline.
#[wasm_bindgen]
pub fn watercolor_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let source = to_raster(data, width, height)?;
    Ok(watercolor(&source).into_raw())
}
