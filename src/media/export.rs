// SPDX-License-Identifier: MPL-2.0
//! PNG encoding of rendered composites.

use crate::application::port::Rasterizer;
use crate::domain::compositor::Scene;
use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use image_rs::codecs::png::PngEncoder;
use image_rs::{ExtendedColorType, ImageEncoder};
use std::fs;
use std::path::Path;

/// Encodes `image` as PNG bytes.
///
/// # Errors
///
/// Returns [`Error::Rasterization`] if the encoder rejects the buffer.
pub fn encode_png(image: &RawImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.rgba_bytes(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::Rasterization(e.to_string()))?;
    Ok(bytes)
}

/// Writes `image` to `path` as PNG, replacing any existing file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_png(image: &RawImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Flattens `scene` and writes it to `path` as PNG.
///
/// Returns the rendered bitmap. Nothing is written when rendering fails.
///
/// # Errors
///
/// Returns [`Error::Rasterization`] or [`Error::Io`].
pub fn export_scene(rasterizer: &dyn Rasterizer, scene: &Scene, path: &Path) -> Result<RawImage> {
    let image = rasterizer.render(scene)?;
    write_png(&image, path)?;
    Ok(image)
}
