//! Pure Rust compositing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Cover / full-bleed resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Center crop | `image::imageops::crop_imm` |
//! | Gaussian blur | `image::imageops::blur` (radius = standard deviation) |
//! | Paste | `image::imageops::replace` (opaque, clips at canvas bounds) |
//! | Encode | `image` crate, format inferred from the output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::CompositeParams;
use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageReader, RgbImage};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions whose decoders are compiled in and known to work.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk, flattened to RGB.
fn load_image(path: &Path) -> Result<RgbImage, BackendError> {
    let img = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| match e {
            image::ImageError::IoError(io) => BackendError::Io(io),
            other => {
                BackendError::Decode(format!("Failed to decode {}: {}", path.display(), other))
            }
        })?;
    Ok(img.to_rgb8())
}

/// Save an RGB image to the given path, inferring format from extension.
fn save_image(img: &RgbImage, path: &Path) -> Result<(), BackendError> {
    img.save(path).map_err(|e| match e {
        image::ImageError::IoError(io) => BackendError::Io(io),
        other => BackendError::ProcessingFailed(format!(
            "Failed to encode {}: {}",
            path.display(),
            other
        )),
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| match e {
            image::ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::Decode(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                other
            )),
        })?;
        Ok(Dimensions { width, height })
    }

    fn composite(&self, params: &CompositeParams) -> Result<(), BackendError> {
        let source = load_image(&params.source)?;

        // Background: cover-scale, center-crop to exact canvas size, blur
        let scaled = imageops::resize(
            &source,
            params.background_width,
            params.background_height,
            FilterType::Lanczos3,
        );
        let cropped = imageops::crop_imm(
            &scaled,
            params.crop_left,
            params.crop_top,
            params.canvas_width,
            params.canvas_height,
        )
        .to_image();
        let mut canvas = if params.blur_radius.value() > 0.0 {
            imageops::blur(&cropped, params.blur_radius.value())
        } else {
            cropped
        };

        // Foreground: full-bleed width, pasted opaque at x = 0.
        // replace clips at the canvas bottom when the foreground is taller.
        let foreground = imageops::resize(
            &source,
            params.foreground_width,
            params.foreground_height,
            FilterType::Lanczos3,
        );
        imageops::replace(&mut canvas, &foreground, 0, params.foreground_top as i64);

        save_image(&canvas, &params.output)
    }
}
