//! Error type shared by kernel/window construction, raster wrapping and the
//! optional file I/O layer.
//!
//! Filter application itself never fails: every check happens when a
//! [`Kernel`](crate::filters::kernel::Kernel),
//! [`Window`](crate::filters::median::Window) or
//! [`Raster`](crate::raster::Raster) is built.

#[cfg(feature = "io")]
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Kernel matrix has no rows or no columns.
    #[error("kernel is empty")]
    EmptyKernel,

    #[error("kernel must be square, got {rows}x{cols}")]
    NonSquareKernel { rows: usize, cols: usize },

    /// Kernel side length has no center element.
    #[error("kernel size must be odd, got {size}")]
    EvenKernel { size: usize },

    #[error("kernel side {size} exceeds the maximum of {max}")]
    KernelTooLarge { size: usize, max: usize },

    #[error("gaussian sigma must be finite, got {sigma}")]
    InvalidSigma { sigma: f64 },

    #[error("kernel weight at ({row}, {col}) is not finite")]
    NonFiniteWeight { row: usize, col: usize },

    /// Median window is even or smaller than 3.
    #[error("median window must be odd and at least 3, got {size}")]
    InvalidWindow { size: usize },

    #[error("unknown filter preset '{0}'")]
    UnknownPreset(String),

    #[error("raster must have 3 channels (RGB), got {channels}")]
    ChannelCount { channels: usize },

    #[error("buffer of {len} bytes does not match {width}x{height} RGB raster")]
    Shape {
        width: usize,
        height: usize,
        len: usize,
    },

    #[cfg(feature = "io")]
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[cfg(feature = "io")]
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
