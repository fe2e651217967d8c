//! Parameter types for compositing operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans the geometry) and the [`backend`](super::backend) (which does
//! the actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing planning logic.

use std::path::PathBuf;

/// Gaussian blur radius in pixels (radius = standard deviation).
///
/// Zero disables the blur. Negative values are clamped to zero on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurRadius(pub f32);

impl BlurRadius {
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BlurRadius {
    fn default() -> Self {
        Self(30.0)
    }
}

/// Fully-resolved specification for one composite operation.
///
/// Every dimension is pre-computed by
/// [`plan_composite`](super::operations::plan_composite), so a backend
/// executes mechanically without re-deriving any geometry. The background
/// fields describe the cover-scaled raster and the crop window within it; the
/// foreground fields describe the full-bleed raster and where its top edge
/// lands on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Final canvas dimensions.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Cover-scale target for the background (covers the canvas, then cropped).
    pub background_width: u32,
    pub background_height: u32,
    /// Center-crop origin within the scaled background.
    pub crop_left: u32,
    pub crop_top: u32,
    pub blur_radius: BlurRadius,
    /// Full-bleed foreground dimensions (width equals canvas width).
    pub foreground_width: u32,
    pub foreground_height: u32,
    /// Top edge of the foreground on the canvas, already clamped.
    pub foreground_top: u32,
}
