//! Filter composition.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s; the output raster of one
//! stage is the input of the next. Stages share no state, so running the same
//! pipeline twice on the same source gives bit-identical results.
//!
//! [`render_gallery`] reproduces the full set of derived images (four
//! convolutions of the source, a median blur of the Gaussian result and the
//! watercolor effect on top of it).

use log::debug;

use crate::filters::convolve::convolve;
use crate::filters::kernel::Kernel;
use crate::filters::median::{median_filter, Window};
use crate::raster::Raster;

/// One filter invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    Convolve(Kernel),
    Median(Window),
}

impl Stage {
    pub fn apply(&self, source: &Raster) -> Raster {
        match self {
            Stage::Convolve(kernel) => convolve(source, kernel),
            Stage::Median(window) => median_filter(source, *window),
        }
    }
}

/// Ordered sequence of stages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn then_convolve(self, kernel: Kernel) -> Self {
        self.then(Stage::Convolve(kernel))
    }

    pub fn then_median(self, window: Window) -> Self {
        self.then(Stage::Median(window))
    }

    /// Gaussian blur, 7x7 median blur, outline.
    pub fn watercolor() -> Self {
        Self::new()
            .then_convolve(Kernel::gaussian_blur())
            .then_median(Window::default())
            .then_convolve(Kernel::outline())
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in order. An empty pipeline returns a copy of `source`.
    pub fn run(&self, source: &Raster) -> Raster {
        let mut current = source.clone();
        for (i, stage) in self.stages.iter().enumerate() {
            debug!(
                "pipeline stage {}/{}: {}",
                i + 1,
                self.stages.len(),
                stage_label(stage)
            );
            current = stage.apply(&current);
        }
        current
    }
}

fn stage_label(stage: &Stage) -> String {
    match stage {
        Stage::Convolve(kernel) => format!("convolve {0}x{0}", kernel.size()),
        Stage::Median(window) => format!("median {0}x{0}", window.size()),
    }
}

/// Watercolor effect: outline of the median blur of the Gaussian blur.
pub fn watercolor(source: &Raster) -> Raster {
    let gauss = convolve(source, &Kernel::gaussian_blur());
    let median = median_filter(&gauss, Window::default());
    convolve(&median, &Kernel::outline())
}

/// Every derived image produced from one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    pub box_blur: Raster,
    pub gaussian_blur: Raster,
    pub sharpen: Raster,
    pub outline: Raster,
    /// Median blur of `gaussian_blur`, not of the source.
    pub median_blur: Raster,
    /// Outline of `median_blur`.
    pub watercolor: Raster,
}

/// Render the full gallery for `source`.
///
/// The four source-level convolutions are independent reads of the same
/// immutable raster and run concurrently; the median and watercolor stages
/// follow the Gaussian result. Output is identical to running each stage in
/// sequence.
pub fn render_gallery(source: &Raster) -> Gallery {
    let ((box_blur, sharpen), (outline, (gaussian_blur, median_blur, watercolor))) = rayon::join(
        || {
            rayon::join(
                || convolve(source, &Kernel::box_blur()),
                || convolve(source, &Kernel::sharpen()),
            )
        },
        || {
            rayon::join(
                || convolve(source, &Kernel::outline()),
                || {
                    let gauss = convolve(source, &Kernel::gaussian_blur());
                    let median = median_filter(&gauss, Window::default());
                    let watercolor = convolve(&median, &Kernel::outline());
                    (gauss, median, watercolor)
                },
            )
        },
    );

    Gallery {
        box_blur,
        gaussian_blur,
        sharpen,
        outline,
        median_blur,
        watercolor,
    }
}
