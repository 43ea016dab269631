// SPDX-License-Identifier: MPL-2.0
//! Logo loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).
//!
//! A loaded logo keeps the uploaded bytes as a `data:` URI and the decoded
//! RGBA pixels side by side.

use crate::domain::compositor::LogoImage;
use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use crate::media::data_uri;
use image_rs::{GenericImageView, ImageError};
use resvg::usvg;
use std::fs;
use std::path::Path;
use tiny_skia;

/// File extensions offered by the upload dialog.
pub const LOGO_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "svg",
];

const SVG_MIME: &str = "image/svg+xml";

/// Load a logo from the given path.
///
/// SVG files are detected by extension and rasterized at their intrinsic
/// size with resvg; everything else goes through the `image` decoders.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its contents are not a supported image.
pub fn load_logo<P: AsRef<Path>>(path: P) -> Result<LogoImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    decode_logo(&bytes, is_svg)
}

/// Decodes logo bytes already in memory.
///
/// `is_svg` selects the vector path; content sniffing covers SVG files
/// without the extension.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unsupported or corrupt data.
pub fn decode_logo(bytes: &[u8], is_svg: bool) -> Result<LogoImage> {
    if is_svg || looks_like_svg(bytes) {
        let pixels = rasterize_svg(bytes)?;
        return Ok(LogoImage {
            data_uri: data_uri::encode(bytes, SVG_MIME),
            pixels,
        });
    }

    let format = image_rs::guess_format(bytes)?;
    let img = image_rs::load_from_memory_with_format(bytes, format)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    let pixels = RawImage::from_rgba(width, height, img.to_rgba8().into_vec());
    Ok(LogoImage {
        data_uri: data_uri::encode(bytes, format.to_mime_type()),
        pixels,
    })
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

fn rasterize_svg(bytes: &[u8]) -> Result<RawImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; the compositor expects straight alpha.
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(RawImage::from_rgba(width, height, rgba))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn load_png_logo_returns_pixels_and_data_uri() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("logo.png");
        fs::write(&image_path, png_bytes(4, 2)).expect("failed to write png");

        let logo = load_logo(&image_path).expect("png should load successfully");
        assert_eq!(logo.pixels.width(), 4);
        assert_eq!(logo.pixels.height(), 2);
        assert!(logo.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn data_uri_carries_the_uploaded_bytes() {
        let bytes = png_bytes(3, 3);
        let logo = decode_logo(&bytes, false).expect("decode");
        assert_eq!(logo.data_uri, data_uri::encode(&bytes, "image/png"));
    }

    #[test]
    fn load_svg_logo_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("logo.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let logo = load_logo(&svg_path).expect("svg should load successfully");
        assert_eq!(logo.pixels.width(), 6);
        assert_eq!(logo.pixels.height(), 3);
        assert_eq!(&logo.pixels.rgba_bytes()[..4], &[0, 0, 255, 255]);
        assert!(logo.data_uri.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn svg_is_sniffed_without_extension() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"/>"#;
        let logo = decode_logo(svg, false).expect("svg should decode");
        assert_eq!(logo.pixels.width(), 2);
    }

    #[test]
    fn load_missing_logo_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_logo(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_bytes_return_decode_error() {
        match decode_logo(b"not an image", false) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_svg_returns_decode_error() {
        match decode_logo(b"<svg>oops", true) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn svg_with_zero_dimensions_errors() {
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        assert!(matches!(decode_logo(svg, true), Err(Error::Decode(_))));
    }

    #[test]
    fn upload_filter_includes_svg_and_png() {
        assert!(LOGO_EXTENSIONS.contains(&"svg"));
        assert!(LOGO_EXTENSIONS.contains(&"png"));
    }
}
