// SPDX-License-Identifier: MPL-2.0
//! CPU rasterizer built on `image` resampling and alpha compositing.

use image_rs::imageops;
use image_rs::RgbaImage;

use crate::application::port::{RasterError, Rasterizer};
use crate::domain::compositor::{PlacedLogo, Scene};
use crate::domain::media::RawImage;
use crate::media::scale;

pub use crate::media::scale::Filter;

/// Flattens a scene by scaling the logo and blending it over the background.
///
/// Output is deterministic for a given scene: same input bytes, same output
/// bytes. Parts of the logo outside the background are clipped before
/// scaling, so only the visible region is ever resampled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRasterizer {
    filter: Filter,
}

impl SoftwareRasterizer {
    #[must_use]
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }

    fn draw_logo(&self, canvas: &mut RgbaImage, logo: &PlacedLogo) -> Result<(), RasterError> {
        let placement = logo.placement();
        let Some(region) = placement.visible_in(canvas.width(), canvas.height()) else {
            return Ok(());
        };
        let visible = scale::scale_visible(&logo.image, placement, region, self.filter).ok_or(
            RasterError::Allocation {
                width: region.width,
                height: region.height,
            },
        )?;
        let visible = to_buffer(&visible)?;
        imageops::overlay(canvas, &visible, i64::from(region.x), i64::from(region.y));
        Ok(())
    }
}

impl Rasterizer for SoftwareRasterizer {
    fn render(&self, scene: &Scene) -> Result<RawImage, RasterError> {
        if scene.background.pixel_count() == 0 {
            return Err(RasterError::EmptyBackground);
        }
        let mut canvas = to_buffer(&scene.background)?;

        if let Some(logo) = &scene.logo {
            self.draw_logo(&mut canvas, logo)?;
        }

        let (width, height) = canvas.dimensions();
        RawImage::try_from_rgba(width, height, canvas.into_raw())
            .ok_or(RasterError::Allocation { width, height })
    }
}

fn to_buffer(image: &RawImage) -> Result<RgbaImage, RasterError> {
    RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec()).ok_or(
        RasterError::Allocation {
            width: image.width(),
            height: image.height(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RawImage {
        RawImage::from_rgba(width, height, rgba.repeat((width * height) as usize))
    }

    fn pixel(image: &RawImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * image.width() + x) * 4) as usize;
        let bytes = image.rgba_bytes();
        [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]
    }

    #[test]
    fn bare_scene_renders_background_unchanged() {
        let background = solid(8, 6, [200, 10, 10, 255]);
        let scene = Scene {
            background: background.clone(),
            logo: None,
        };

        let output = SoftwareRasterizer::default()
            .render(&scene)
            .expect("render");
        assert_eq!(output, background);
    }

    #[test]
    fn logo_is_scaled_and_placed() {
        let scene = Scene {
            background: solid(10, 10, [255, 255, 255, 255]),
            logo: Some(PlacedLogo {
                image: solid(1, 1, [0, 0, 255, 255]),
                width: 4,
                height: 2,
                left: 3,
                top: 5,
            }),
        };

        let output = SoftwareRasterizer::new(Filter::Nearest)
            .render(&scene)
            .expect("render");

        assert_eq!(pixel(&output, 3, 5), [0, 0, 255, 255]);
        assert_eq!(pixel(&output, 6, 6), [0, 0, 255, 255]);
        assert_eq!(pixel(&output, 7, 5), [255, 255, 255, 255]);
        assert_eq!(pixel(&output, 3, 7), [255, 255, 255, 255]);
    }

    #[test]
    fn logo_outside_background_is_clipped() {
        let background = solid(4, 4, [255, 255, 255, 255]);
        let scene = Scene {
            background: background.clone(),
            logo: Some(PlacedLogo {
                image: solid(2, 2, [0, 0, 0, 255]),
                width: 2,
                height: 2,
                left: -10,
                top: 20,
            }),
        };

        let output = SoftwareRasterizer::default()
            .render(&scene)
            .expect("render");
        assert_eq!(output, background);
    }

    #[test]
    fn transparent_logo_pixels_keep_background() {
        let scene = Scene {
            background: solid(2, 2, [10, 20, 30, 255]),
            logo: Some(PlacedLogo {
                image: solid(2, 2, [0, 0, 0, 0]),
                width: 2,
                height: 2,
                left: 0,
                top: 0,
            }),
        };

        let output = SoftwareRasterizer::default()
            .render(&scene)
            .expect("render");
        assert_eq!(pixel(&output, 1, 1), [10, 20, 30, 255]);
    }

    #[test]
    fn empty_background_is_rejected() {
        let scene = Scene {
            background: RawImage::from_rgba(0, 0, Vec::new()),
            logo: None,
        };
        assert_eq!(
            SoftwareRasterizer::default().render(&scene),
            Err(RasterError::EmptyBackground)
        );
    }

    #[test]
    fn tall_logo_is_cut_to_the_stage() {
        let scene = Scene {
            background: solid(8, 8, [255, 255, 255, 255]),
            logo: Some(PlacedLogo {
                image: solid(1, 1_000, [0, 0, 0, 255]),
                width: 4,
                height: 4_000,
                left: 2,
                top: -1_996,
            }),
        };

        let output = SoftwareRasterizer::new(Filter::Nearest)
            .render(&scene)
            .expect("render");

        assert_eq!(pixel(&output, 2, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&output, 5, 7), [0, 0, 0, 255]);
        assert_eq!(pixel(&output, 1, 4), [255, 255, 255, 255]);
        assert_eq!(pixel(&output, 6, 4), [255, 255, 255, 255]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let scene = Scene {
            background: solid(16, 16, [240, 240, 240, 255]),
            logo: Some(PlacedLogo {
                image: solid(3, 3, [30, 120, 200, 180]),
                width: 7,
                height: 7,
                left: 4,
                top: 2,
            }),
        };
        let rasterizer = SoftwareRasterizer::default();
        assert_eq!(rasterizer.render(&scene), rasterizer.render(&scene));
    }
}
