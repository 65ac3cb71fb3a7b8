//! Named filter presets.
//!
//! A closed set of immutable (kernel or window, semantics) pairs. Presets
//! carry no state; each call to [`FilterPreset::kernel`] builds the weight
//! matrix from its constant table.

use std::fmt;
use std::str::FromStr;

use super::convolve::convolve;
use super::kernel::Kernel;
use super::median::{median_filter, Window};
use crate::error::{FilterError, Result};
use crate::raster::Raster;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterPreset {
    /// 3x3 uniform 1/9 average.
    BoxBlur,
    /// 5x5 binomial weights summing to 1.
    GaussianBlur,
    /// 3x3 cross sharpen.
    Sharpen,
    /// 3x3 outline.
    Outline,
    /// 7x7 window median.
    MedianBlur,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 5] = [
        FilterPreset::BoxBlur,
        FilterPreset::GaussianBlur,
        FilterPreset::Sharpen,
        FilterPreset::Outline,
        FilterPreset::MedianBlur,
    ];

    /// Kernel for the convolution presets, `None` for the median blur.
    pub fn kernel(self) -> Option<Kernel> {
        match self {
            FilterPreset::BoxBlur => Some(Kernel::box_blur()),
            FilterPreset::GaussianBlur => Some(Kernel::gaussian_blur()),
            FilterPreset::Sharpen => Some(Kernel::sharpen()),
            FilterPreset::Outline => Some(Kernel::outline()),
            FilterPreset::MedianBlur => None,
        }
    }

    /// Window for the median preset, `None` for convolutions.
    pub fn window(self) -> Option<Window> {
        match self {
            FilterPreset::MedianBlur => Some(Window::default()),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterPreset::BoxBlur => "box_blur",
            FilterPreset::GaussianBlur => "gaussian_blur",
            FilterPreset::Sharpen => "sharpen",
            FilterPreset::Outline => "outline",
            FilterPreset::MedianBlur => "median_blur",
        }
    }

    /// Run the preset on `source`.
    pub fn apply(self, source: &Raster) -> Raster {
        match self {
            FilterPreset::BoxBlur => convolve(source, &Kernel::box_blur()),
            FilterPreset::GaussianBlur => convolve(source, &Kernel::gaussian_blur()),
            FilterPreset::Sharpen => convolve(source, &Kernel::sharpen()),
            FilterPreset::Outline => convolve(source, &Kernel::outline()),
            FilterPreset::MedianBlur => median_filter(source, Window::default()),
        }
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterPreset {
    type Err = FilterError;

    /// Accepts the snake_case names plus the short forms `blur`, `gauss`,
    /// `sharp` and `median`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box_blur" | "blur" => Ok(FilterPreset::BoxBlur),
            "gaussian_blur" | "gauss" | "gauss_blur" => Ok(FilterPreset::GaussianBlur),
            "sharpen" | "sharp" => Ok(FilterPreset::Sharpen),
            "outline" => Ok(FilterPreset::Outline),
            "median_blur" | "median" => Ok(FilterPreset::MedianBlur),
            _ => Err(FilterError::UnknownPreset(s.to_string())),
        }
    }
}

/// Apply a preset looked up by name.
pub fn apply_named(source: &Raster, name: &str) -> Result<Raster> {
    let preset: FilterPreset = name.parse()?;
    Ok(preset.apply(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_has_exactly_one_operator() {
        for preset in FilterPreset::ALL {
            assert!(preset.kernel().is_some() ^ preset.window().is_some(), "{preset}");
        }
    }

    #[test]
    fn test_names_roundtrip() {
        for preset in FilterPreset::ALL {
            assert_eq!(preset.name().parse::<FilterPreset>().unwrap(), preset);
        }
        assert_eq!(
            "Gauss".parse::<FilterPreset>().unwrap(),
            FilterPreset::GaussianBlur
        );
        assert!("emboss".parse::<FilterPreset>().is_err());
    }

    #[test]
    fn test_apply_dispatches_to_filter() {
        let mut source = Raster::filled(9, 9, [50, 50, 50]);
        source.set_pixel(4, 4, [250, 250, 250]);

        assert_eq!(
            FilterPreset::MedianBlur.apply(&source),
            median_filter(&source, Window::default())
        );
        assert_eq!(
            FilterPreset::Outline.apply(&source),
            convolve(&source, &Kernel::outline())
        );
    }

    #[test]
    fn test_apply_agrees_with_kernel_and_window() {
        let mut source = Raster::filled(9, 9, [50, 120, 200]);
        source.set_pixel(4, 4, [250, 0, 10]);
        source.set_pixel(0, 8, [0, 255, 90]);

        for preset in FilterPreset::ALL {
            let expected = match (preset.kernel(), preset.window()) {
                (Some(kernel), None) => convolve(&source, &kernel),
                (None, Some(window)) => median_filter(&source, window),
                other => panic!("{preset} has operators {other:?}"),
            };
            assert_eq!(preset.apply(&source), expected, "{preset}");
        }
    }

    #[test]
    fn test_apply_named_rejects_unknown() {
        let source = Raster::new(3, 3);
        assert!(matches!(
            apply_named(&source, "posterize"),
            Err(FilterError::UnknownPreset(name)) if name == "posterize"
        ));
        assert!(apply_named(&source, "sharpen").is_ok());
    }
}
