//! # storyframe
//!
//! Compose a photo into a fixed-size card with a blurred cover background.
//! The same image is used twice: scaled to cover the whole canvas,
//! center-cropped and blurred for the backdrop, then scaled to the exact
//! canvas width and pasted unblurred on top at a configurable height.
//!
//! # Architecture: One Linear Pipeline
//!
//! There is exactly one operation, and it runs as a strict linear sequence:
//!
//! ```text
//! load → background (cover-scale → center-crop → blur)
//!      → foreground (full-bleed width → clamped placement)
//!      → composite → save
//! ```
//!
//! There is no state machine and no concurrency; every failure is terminal.
//! The interesting structure is in how the steps are separated, not in the
//! steps themselves:
//!
//! - **Planning is pure**: all geometry (cover dimensions, crop origin,
//!   foreground placement) is computed up front from the source dimensions
//!   and the configuration, with no I/O. Unit tests cover every clamp and
//!   rounding edge without touching an image.
//! - **Execution is mechanical**: the backend receives fully-resolved
//!   parameters and only moves pixels.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compose`] | Pipeline driver — source checks, planning, execution, report |
//! | [`config`] | `storyframe.toml` loading, merging, validation |
//! | [`imaging`] | Pure-Rust image operations: geometry, backend trait, pixel work |
//! | [`output`] | CLI output formatting — pure format functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## Explicit Configuration Over Constants
//!
//! Canvas size, blur radius, and foreground placement are an explicit
//! [`config::ComposeConfig`] value passed into the operation, not module
//! constants. Defaults produce a 1080×1920 (9:16) story card; a sparse
//! `storyframe.toml` or command-line flags override individual values, and
//! everything is validated before any pixel work starts.
//!
//! ## Pinned Resampling and Blur Semantics
//!
//! Exact pixel output depends on the imaging primitives, so they are part of
//! the contract: Lanczos3 resampling for both resizes, Gaussian blur with
//! radius = standard deviation, opaque paste with no alpha blending. All of
//! it comes from the `image` crate — pure Rust with no system dependencies,
//! so the binary is fully self-contained.
//!
//! ## Documented Overflow Behavior
//!
//! A foreground taller than the canvas is pinned to the top and clipped at
//! the canvas bottom rather than scaled down or rejected. This matches how
//! the placement clamp naturally falls out and keeps extreme portrait inputs
//! usable.

pub mod compose;
pub mod config;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
