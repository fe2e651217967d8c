//! High-level compositing operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute the full geometry, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{
    calculate_cover_dimensions, calculate_crop_origin, calculate_foreground_top,
    calculate_width_fit_dimensions,
};
use super::params::{BlurRadius, CompositeParams};
use crate::config::ComposeConfig;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Summary of a completed composite, consumed by CLI output formatting.
#[derive(Debug, Clone)]
pub struct CompositeReport {
    pub source_width: u32,
    pub source_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_width: u32,
    pub background_height: u32,
    pub crop_left: u32,
    pub crop_top: u32,
    pub blur_radius: f32,
    pub foreground_width: u32,
    pub foreground_height: u32,
    pub foreground_top: u32,
    pub output: PathBuf,
}

/// Plan a composite operation without executing it.
///
/// Pure geometry: cover-scale and center-crop for the background, full-bleed
/// width for the foreground, clamped vertical placement. Useful for testing
/// parameter generation.
pub fn plan_composite(
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    config: &ComposeConfig,
) -> CompositeParams {
    let canvas = (config.canvas.width, config.canvas.height);

    let (background_width, background_height) = calculate_cover_dimensions(source_dims, canvas);
    let (crop_left, crop_top) = calculate_crop_origin((background_width, background_height), canvas);

    let (foreground_width, foreground_height) =
        calculate_width_fit_dimensions(source_dims, config.canvas.width);
    let foreground_top = calculate_foreground_top(
        config.canvas.height,
        foreground_height,
        config.foreground.y_ratio,
    );

    CompositeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        canvas_width: config.canvas.width,
        canvas_height: config.canvas.height,
        background_width,
        background_height,
        crop_left,
        crop_top,
        blur_radius: BlurRadius::new(config.background.blur_radius),
        foreground_width,
        foreground_height,
        foreground_top,
    }
}

/// Compose the blurred-background card for a single source image.
///
/// Identifies the source, plans the geometry, and hands the resolved
/// parameters to the backend.
pub fn create_composite(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    config: &ComposeConfig,
) -> Result<CompositeReport> {
    let dims = backend.identify(source)?;
    let params = plan_composite(source, output, (dims.width, dims.height), config);
    backend.composite(&params)?;

    Ok(CompositeReport {
        source_width: dims.width,
        source_height: dims.height,
        canvas_width: params.canvas_width,
        canvas_height: params.canvas_height,
        background_width: params.background_width,
        background_height: params.background_height,
        crop_left: params.crop_left,
        crop_top: params.crop_top,
        blur_radius: params.blur_radius.value(),
        foreground_width: params.foreground_width,
        foreground_height: params.foreground_height,
        foreground_top: params.foreground_top,
        output: params.output,
    })
}
