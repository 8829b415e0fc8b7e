//! PNG export of settled patterns and image loading for classification

use crate::algorithm::session::KolamSession;
use crate::io::configuration::MAX_CANVAS_SIDE;
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::render::RasterSurface;
use image::RgbaImage;
use std::path::Path;

/// Side in pixels of a canvas of `canvas_size` drawn at `scale`
///
/// # Errors
///
/// Returns `InvalidParameter` if the scaled canvas would be empty or larger
/// than `MAX_CANVAS_SIDE`
pub fn scaled_canvas_size(canvas_size: u32, scale: f64) -> Result<u32> {
    let side = (f64::from(canvas_size) * scale).round();
    if !(side >= 1.0 && side <= f64::from(MAX_CANVAS_SIDE)) {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!(
                "canvas of {canvas_size} pixels scales to {side}, limit is {MAX_CANVAS_SIDE}"
            ),
        ));
    }
    Ok(side as u32)
}

/// Render the session's settled pattern at `scale`
///
/// The canvas side is the configured canvas size times `scale`, and every
/// size parameter is scaled with it.
///
/// # Errors
///
/// Returns:
/// - `NothingToRedraw` if the session has not generated anything yet
/// - `InvalidParameter` if `scale` is not usable
pub fn render_settled(session: &KolamSession, scale: f64) -> Result<RgbaImage> {
    let generation = session
        .last_generation()
        .ok_or(KolamError::NothingToRedraw)?;
    let side = scaled_canvas_size(generation.parameters.canvas_size, scale)?;
    let mut surface = RasterSurface::with_background(side, side, session.palette().background);
    session.redraw(&mut surface, scale)?;
    Ok(surface.into_image())
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| KolamError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Load any supported image file as RGBA
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| KolamError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Decode encoded image bytes as RGBA
///
/// # Errors
///
/// Returns `ImageDecode` if the bytes are not a supported image
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Whether `path` has an extension the classifier accepts
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            matches!(
                ext.to_ascii_lowercase().as_str(),
                "png" | "jpg" | "jpeg"
            )
        })
}
