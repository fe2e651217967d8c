//! Compositing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and composite.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::CompositeParams;
use std::path::Path;
use thiserror::Error;

/// Every failure is terminal and carries its originating cause. There are no
/// retries anywhere in the pipeline.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for compositing backends.
///
/// Every backend must implement both operations — identify and composite — so
/// the rest of the codebase is backend-agnostic.
pub trait ImageBackend: Sync {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a fully-planned composite operation.
    fn composite(&self, params: &CompositeParams) -> Result<(), BackendError>;
}
