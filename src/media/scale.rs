// SPDX-License-Identifier: MPL-2.0
//! Scaling the visible part of a placed logo.
//!
//! Only the region that lands on the stage is resampled, so a logo with an
//! extreme aspect ratio never allocates more than the stage itself.

use crate::domain::compositor::{Placement, VisibleRegion};
use crate::domain::media::RawImage;
use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;

/// Resampling used when the logo is scaled to its on-screen size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    #[default]
    Triangle,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Returns the pixels of `region`, cut from `image` scaled to `placement`.
///
/// The result is `region.width` x `region.height`. `None` when `image` has no
/// pixels or its buffer does not match its dimensions.
#[must_use]
pub fn scale_visible(
    image: &RawImage,
    placement: Placement,
    region: VisibleRegion,
    filter: Filter,
) -> Option<RawImage> {
    if image.pixel_count() == 0 || placement.width == 0 || placement.height == 0 {
        return None;
    }
    let source = RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())?;

    let whole = region.skip_x == 0
        && region.skip_y == 0
        && region.width == placement.width
        && region.height == placement.height;
    if whole && source.dimensions() == (placement.width, placement.height) {
        return Some(image.clone());
    }

    let (x, crop_width) = source_span(region.skip_x, region.width, placement.width, source.width());
    let (y, crop_height) =
        source_span(region.skip_y, region.height, placement.height, source.height());

    let scaled = if (x, y, crop_width, crop_height) == (0, 0, source.width(), source.height()) {
        imageops::resize(&source, region.width, region.height, filter.into())
    } else {
        let cropped = imageops::crop_imm(&source, x, y, crop_width, crop_height).to_image();
        imageops::resize(&cropped, region.width, region.height, filter.into())
    };

    let (width, height) = scaled.dimensions();
    RawImage::try_from_rgba(width, height, scaled.into_raw())
}

/// Maps `[skip, skip + len)` of a `scaled`-long axis back onto a
/// `source`-long axis, rounding outwards.
fn source_span(skip: u32, len: u32, scaled: u32, source: u32) -> (u32, u32) {
    let (skip, len, scaled, source) = (
        u64::from(skip),
        u64::from(len),
        u64::from(scaled),
        u64::from(source),
    );
    let start = (skip * source / scaled).min(source.saturating_sub(1));
    let end = ((skip + len) * source).div_ceil(scaled).clamp(start + 1, source);
    // Both values are bounded by `source`, which came from a u32.
    (start as u32, (end - start) as u32)
}
