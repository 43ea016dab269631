// SPDX-License-Identifier: MPL-2.0
//! The logo overlay and the scene handed to the rasterizer.

use super::geometry::{Offset, Placement, Size};
use super::newtypes::LogoSize;
use crate::domain::media::RawImage;

/// An uploaded logo in both of its forms.
///
/// `data_uri` is the canonical value (what was uploaded, base64-encoded with
/// its MIME type); `pixels` is the decoded RGBA bitmap used for display and
/// rasterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub data_uri: String,
    pub pixels: RawImage,
}

/// The single overlay on the stage.
///
/// `image` stays `None` until the first successful upload and is never
/// cleared afterwards. `offset` is written only from drag reports and goes
/// back to zero whenever a new image replaces the old one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogoOverlay {
    image: Option<LogoImage>,
    size: LogoSize,
    offset: Offset,
}

impl LogoOverlay {
    #[must_use]
    pub fn new(size: LogoSize) -> Self {
        Self {
            image: None,
            size,
            offset: Offset::ZERO,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&LogoImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn size(&self) -> LogoSize {
        self.size
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.image.is_some()
    }

    /// Replaces the logo and recenters it.
    pub fn place(&mut self, image: LogoImage) {
        self.image = Some(image);
        self.offset = Offset::ZERO;
    }

    pub fn set_size(&mut self, size: LogoSize) {
        self.size = size;
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// On-screen box of the logo: the chosen width, and a height that keeps
    /// the source aspect ratio.
    #[must_use]
    pub fn rendered_size(&self) -> Option<Size> {
        let image = self.image.as_ref()?;
        let width = self.size.value() as f32;
        let height = (width * image.pixels.height_ratio()).round().max(1.0);
        Some(Size::new(width, height))
    }

    /// Where the logo sits on a stage of `stage` size: centered, then moved
    /// by the offset. Both the on-screen stage and the export use this.
    #[must_use]
    pub fn placement(&self, stage: Size) -> Option<Placement> {
        let size = self.rendered_size()?;
        let origin = stage.centered_origin(size);
        Some(Placement {
            left: (origin.x + self.offset.dx).round() as i64,
            top: (origin.y + self.offset.dy).round() as i64,
            width: size.width as u32,
            height: size.height as u32,
        })
    }
}

/// A logo resolved to integer pixel placement on the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLogo {
    pub image: RawImage,
    pub width: u32,
    pub height: u32,
    pub left: i64,
    pub top: i64,
}

impl PlacedLogo {
    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
        }
    }
}

/// Everything needed to draw the composite: the background and, if a logo has
/// been uploaded, where and how large it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub background: RawImage,
    pub logo: Option<PlacedLogo>,
}

impl Scene {
    /// Resolves `overlay` against `background`.
    #[must_use]
    pub fn compose(background: RawImage, overlay: &LogoOverlay) -> Self {
        let stage = Size::new(background.width() as f32, background.height() as f32);

        let logo = overlay
            .image()
            .zip(overlay.placement(stage))
            .map(|(image, placement)| PlacedLogo {
                image: image.pixels.clone(),
                width: placement.width,
                height: placement.height,
                left: placement.left,
                top: placement.top,
            });

        Self { background, logo }
    }
}
