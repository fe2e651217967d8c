//! Single-image compose pipeline.
//!
//! Drives the full operation for one source image: resolve and check the
//! source, plan the geometry, execute the backend, and return a
//! [`CompositeReport`] for CLI display.
//!
//! ## Pipeline
//!
//! ```text
//! load → background (cover-scale, center-crop, blur)
//!      → foreground (full-bleed width, clamped placement)
//!      → composite → save
//! ```
//!
//! Execution is a strict linear sequence, single-threaded and synchronous.
//! Every failure is terminal and reported with its originating cause.

use crate::config::ComposeConfig;
use crate::imaging::{
    BackendError, CompositeReport, RustBackend, create_composite, supported_input_extensions,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Compose a single source image onto the configured canvas.
///
/// Checks the source up front so missing files and unknown formats produce
/// clear errors before any pixel work starts.
pub fn compose(
    input: &Path,
    output: &Path,
    config: &ComposeConfig,
) -> Result<CompositeReport, ComposeError> {
    if !input.exists() {
        return Err(ComposeError::SourceNotFound(input.to_path_buf()));
    }

    let supported = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        });
    if !supported {
        return Err(ComposeError::UnsupportedFormat(input.to_path_buf()));
    }

    Ok(create_composite(&RustBackend::new(), input, output, config)?)
}
