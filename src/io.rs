//! Image file decode/encode around the filter engine.
//!
//! - `decode`: read a PNG/JPEG into an RGB [`Raster`] (alpha is dropped).
//! - `encode`: write a [`Raster`] in the requested format.
//! - `write_gallery`: persist every image of a [`Gallery`] under a directory.
//!
//! The filters never touch the filesystem; everything here is a thin layer
//! over the `image` crate with errors surfaced to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use log::info;

use crate::error::{FilterError, Result};
use crate::pipeline::Gallery;
use crate::raster::Raster;

/// Load an image from disk as an RGB raster.
pub fn decode(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .map_err(|source| FilterError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    Raster::from_raw(width, height, img.into_raw())
}

/// Write `raster` to `path` in `format`.
pub fn encode(raster: &Raster, path: &Path, format: ImageFormat) -> Result<()> {
    let (width, height) = (raster.width(), raster.height());
    let buffer = RgbImage::from_raw(width as u32, height as u32, raster.clone().into_raw())
        .ok_or_else(|| FilterError::Shape {
            width,
            height,
            len: width * height * 3,
        })?;
    buffer
        .save_with_format(path, format)
        .map_err(|source| FilterError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    info!("wrote {}x{} {:?} to {}", width, height, format, path.display());
    Ok(())
}

/// Output file name and format for each gallery entry.
const GALLERY_FILES: [(&str, ImageFormat); 6] = [
    ("image_blur.jpg", ImageFormat::Jpeg),
    ("image_gauss_blur.jpg", ImageFormat::Jpeg),
    ("image_sharp.jpg", ImageFormat::Jpeg),
    ("image_outline.jpg", ImageFormat::Jpeg),
    ("image_median_blur.jpg", ImageFormat::Jpeg),
    ("image_watercolor.png", ImageFormat::Png),
];

/// Write all six gallery images into `dir`, creating it if needed.
///
/// # Returns
/// Paths written, in gallery order. Stops at the first failure.
pub fn write_gallery(gallery: &Gallery, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let rasters = [
        &gallery.box_blur,
        &gallery.gaussian_blur,
        &gallery.sharpen,
        &gallery.outline,
        &gallery.median_blur,
        &gallery.watercolor,
    ];

    let mut written = Vec::with_capacity(rasters.len());
    for (raster, (name, format)) in rasters.into_iter().zip(GALLERY_FILES) {
        let path = dir.join(name);
        encode(raster, &path, format)?;
        written.push(path);
    }
    Ok(written)
}
