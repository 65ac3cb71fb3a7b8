//! Owned RGB raster.
//!
//! A [`Raster`] wraps an `Array3<u8>` of shape `(height, width, 3)`, the same
//! `[[y, x, c]]` layout the filters index directly. Pixel accessors take
//! `(x, y)` to match how callers think about images.

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, Result};

/// Number of color channels per pixel (red, green, blue).
pub const CHANNELS: usize = 3;

/// Rectangular grid of RGB pixels, each channel in 0-255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Black raster of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Raster where every pixel has the same color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut raster = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                raster.set_pixel(x, y, rgb);
            }
        }
        raster
    }

    /// Wrap an existing `(height, width, 3)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let channels = data.dim().2;
        if channels != CHANNELS {
            return Err(FilterError::ChannelCount { channels });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Wrap a row-major, interleaved RGB byte buffer.
    pub fn from_raw(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let len = bytes.len();
        let shape_error = FilterError::Shape { width, height, len };
        if width.checked_mul(height).and_then(|n| n.checked_mul(CHANNELS)) != Some(len) {
            return Err(shape_error);
        }
        let data = Array3::from_shape_vec((height, width, CHANNELS), bytes)
            .map_err(|_| shape_error)?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Read the channel triple at `(x, y)`.
    ///
    /// Panics if the coordinate is outside the raster; filters resolve
    /// coordinates with [`crate::filters::boundary`] before reading.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        for (c, &v) in rgb.iter().enumerate() {
            self.data[[y, x, c]] = v;
        }
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Interleaved RGB bytes in row-major order.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_roundtrip_uses_xy_order() {
        let mut raster = Raster::new(4, 2);
        raster.set_pixel(3, 1, [1, 2, 3]);

        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel(3, 1), [1, 2, 3]);
        assert_eq!(raster.as_array()[[1, 3, 2]], 3);
    }

    #[test]
    fn test_from_array_rejects_rgba() {
        let rgba = Array3::<u8>::zeros((2, 2, 4));
        assert!(matches!(
            Raster::from_array(rgba),
            Err(FilterError::ChannelCount { channels: 4 })
        ));
    }

    #[test]
    fn test_from_array_normalizes_layout() {
        let mut data = Array3::<u8>::zeros((3, 2, 3));
        data[[2, 1, 0]] = 9;
        // Swapping the spatial axes yields a non-standard (2, 3, 3) view.
        let transposed = data.permuted_axes([1, 0, 2]);
        let raster = Raster::from_array(transposed).unwrap();

        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel(2, 1), [9, 0, 0]);
        // (y * width + x) * 3 = (1 * 3 + 2) * 3
        assert_eq!(raster.into_raw()[15], 9);
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(Raster::from_raw(2, 2, vec![0; 12]).is_ok());
        assert!(matches!(
            Raster::from_raw(2, 2, vec![0; 11]),
            Err(FilterError::Shape { len: 11, .. })
        ));
    }

    #[test]
    fn test_empty_raster_is_allowed() {
        let raster = Raster::new(0, 5);
        assert_eq!(raster.width(), 0);
        assert_eq!(raster.height(), 5);
        assert!(raster.into_raw().is_empty());
    }
}
