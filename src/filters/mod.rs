//! Spatial filters for RGB rasters.
//!
//! ## Supported Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//!
//! Alpha and other channel counts are not handled; wrap inputs with
//! [`Raster::from_array`](crate::raster::Raster::from_array), which rejects
//! anything that is not three channels.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - The source raster is never modified; a new raster of the same
//!   size is returned
//! - **Size floor** - A raster smaller than the kernel or window in either
//!   dimension is returned as an exact copy
//! - **Center reflection** - Out-of-range samples are read from the offset
//!   mirrored through the center pixel (see [`boundary`])
//! - **Single-threaded** - Each call visits every pixel synchronously; only
//!   independent calls are run concurrently (see
//!   [`render_gallery`](crate::pipeline::render_gallery))
//!
//! ## Filter Categories
//!
//! - **Convolution**: box blur, Gaussian blur, sharpen, outline, or any odd
//!   square [`Kernel`](kernel::Kernel)
//! - **Order statistic**: median blur over an odd [`Window`](median::Window)

pub mod boundary;
pub mod convolve;
pub mod kernel;
pub mod median;
pub mod preset;
