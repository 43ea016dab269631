// SPDX-License-Identifier: MPL-2.0
//! Stage backgrounds: the built-in shirt or a user-supplied raster image.

use crate::config::{STAGE_HEIGHT, STAGE_WIDTH};
use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

const CANVAS_RGB: (u8, u8, u8) = (243, 244, 246);
const SHIRT_RGB: (u8, u8, u8) = (255, 255, 255);
const OUTLINE_RGB: (u8, u8, u8) = (156, 163, 175);

/// Draws the default shirt silhouette at the stage size.
///
/// Drawing is deterministic: every call yields the same bytes.
///
/// # Errors
///
/// Returns [`Error::Rasterization`] if the pixmap or path cannot be built.
pub fn builtin_shirt() -> Result<RawImage> {
    let mut pixmap = Pixmap::new(STAGE_WIDTH, STAGE_HEIGHT)
        .ok_or_else(|| Error::Rasterization("Failed to allocate stage pixmap".into()))?;
    pixmap.fill(tiny_skia::Color::from_rgba8(
        CANVAS_RGB.0,
        CANVAS_RGB.1,
        CANVAS_RGB.2,
        255,
    ));

    let w = STAGE_WIDTH as f32;
    let h = STAGE_HEIGHT as f32;
    let mut pb = PathBuilder::new();
    // Collar
    pb.move_to(w * 0.375, h * 0.10);
    pb.quad_to(w * 0.5, h * 0.19, w * 0.625, h * 0.10);
    // Right shoulder and sleeve
    pb.line_to(w * 0.78, h * 0.15);
    pb.line_to(w * 0.94, h * 0.29);
    pb.line_to(w * 0.84, h * 0.37);
    pb.line_to(w * 0.78, h * 0.33);
    // Body
    pb.line_to(w * 0.78, h * 0.91);
    pb.line_to(w * 0.22, h * 0.91);
    pb.line_to(w * 0.22, h * 0.33);
    // Left sleeve and shoulder
    pb.line_to(w * 0.16, h * 0.37);
    pb.line_to(w * 0.06, h * 0.29);
    pb.line_to(w * 0.22, h * 0.15);
    pb.close();
    let path = pb
        .finish()
        .ok_or_else(|| Error::Rasterization("Invalid shirt outline".into()))?;

    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color_rgba8(SHIRT_RGB.0, SHIRT_RGB.1, SHIRT_RGB.2, 255);
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

    paint.set_color_rgba8(OUTLINE_RGB.0, OUTLINE_RGB.1, OUTLINE_RGB.2, 255);
    let stroke = Stroke {
        width: 2.0,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);

    // Every pixel is opaque, so premultiplied and straight alpha coincide.
    Ok(RawImage::from_rgba(STAGE_WIDTH, STAGE_HEIGHT, pixmap.take()))
}

/// Loads a raster background from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Decode`] when the file is unusable.
pub fn load_background(path: &Path) -> Result<RawImage> {
    let bytes = std::fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("background has empty dimensions".into()));
    }
    Ok(RawImage::from_rgba(width, height, img.into_vec()))
}

/// Resolves the stage background, falling back to the built-in shirt.
///
/// Returns the error that caused a fallback so the caller can surface it.
pub fn resolve(configured: Option<&Path>) -> (RawImage, Option<Error>) {
    let mut failure = None;
    if let Some(path) = configured {
        match load_background(path) {
            Ok(image) => return (image, None),
            Err(err) => {
                log::warn!("Background {} unusable: {}", path.display(), err);
                failure = Some(err);
            }
        }
    }

    match builtin_shirt() {
        Ok(image) => (image, failure),
        Err(err) => {
            log::error!("Built-in background failed: {}", err);
            let blank = vec![255; (STAGE_WIDTH * STAGE_HEIGHT * 4) as usize];
            (
                RawImage::from_rgba(STAGE_WIDTH, STAGE_HEIGHT, blank),
                Some(err),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn pixel(image: &RawImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * image.width() + x) * 4) as usize;
        let b = image.rgba_bytes();
        [b[i], b[i + 1], b[i + 2], b[i + 3]]
    }

    #[test]
    fn builtin_shirt_has_stage_size() {
        let shirt = builtin_shirt().expect("draw shirt");
        assert_eq!(shirt.width(), STAGE_WIDTH);
        assert_eq!(shirt.height(), STAGE_HEIGHT);
    }

    #[test]
    fn builtin_shirt_is_deterministic() {
        assert_eq!(
            builtin_shirt().expect("first"),
            builtin_shirt().expect("second")
        );
    }

    #[test]
    fn shirt_body_is_white_and_corners_are_canvas() {
        let shirt = builtin_shirt().expect("draw shirt");
        assert_eq!(pixel(&shirt, STAGE_WIDTH / 2, STAGE_HEIGHT / 2), [255, 255, 255, 255]);
        assert_eq!(pixel(&shirt, 0, 0), [243, 244, 246, 255]);
    }

    #[test]
    fn configured_background_is_loaded() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("bg.png");
        RgbaImage::from_pixel(5, 7, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("write png");

        let (image, failure) = resolve(Some(&path));
        assert!(failure.is_none());
        assert_eq!((image.width(), image.height()), (5, 7));
    }

    #[test]
    fn broken_background_falls_back_to_shirt() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.png");

        let (image, failure) = resolve(Some(&path));
        assert!(matches!(failure, Some(Error::Io(_))));
        assert_eq!(image.width(), STAGE_WIDTH);
    }
}
