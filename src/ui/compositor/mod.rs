// SPDX-License-Identifier: MPL-2.0
//! Logo-on-background compositor.
//!
//! The stage shows a background with at most one logo overlay on top. The
//! overlay position is owned here but written only from what the drag
//! capability reports; the component never computes positions itself.

mod view;


pub use view::{view, ViewContext};

use crate::application::port::DragCapability;
use crate::domain::compositor::{
    DragBounds, LogoImage, LogoOverlay, LogoSize, Placement, Point, Scene, Size, VisibleRegion,
};
use crate::domain::media::RawImage;
use crate::error::Error;
use crate::media::scale::{self, Filter};
use crate::ui::state::ParentBoundedDrag;
use iced::widget::image::Handle;

#[derive(Debug, Clone)]
pub enum Message {
    UploadRequested,
    LogoDecoded(Result<LogoImage, Error>),
    SizeChanged(u32),
    /// Window-space cursor position, tracked continuously while on screen.
    CursorMoved(Point),
    /// Pointer pressed on the logo.
    DragStarted,
    /// Pointer released anywhere.
    DragEnded,
    ExportRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open a file dialog and answer with [`Message::LogoDecoded`].
    PickLogo,
    /// Rasterize and write this scene.
    Export(Scene),
    /// The chosen file could not be decoded; the overlay is unchanged.
    DecodeFailed(Error),
    /// A new logo is on the stage.
    LogoPlaced,
}

pub struct State {
    background: RawImage,
    background_handle: Handle,
    overlay: LogoOverlay,
    preview: Option<LogoPreview>,
    drag: Box<dyn DragCapability>,
    cursor: Point,
}

/// The on-stage part of the logo, scaled and cut exactly as the export
/// draws it.
struct LogoPreview {
    handle: Handle,
    placement: Placement,
    region: VisibleRegion,
}

impl LogoPreview {
    /// Whether the cached pixels still show the right part of the logo.
    /// Moving a fully visible logo keeps them valid.
    fn fits(&self, placement: Placement, region: VisibleRegion) -> bool {
        (self.placement.width, self.placement.height) == (placement.width, placement.height)
            && (self.region.width, self.region.height) == (region.width, region.height)
            && (self.region.skip_x, self.region.skip_y) == (region.skip_x, region.skip_y)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("background", &(self.background.width(), self.background.height()))
            .field("overlay_size", &self.overlay.size())
            .field("overlay_offset", &self.overlay.offset())
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(background: RawImage, logo_size: LogoSize) -> Self {
        Self::with_drag(background, logo_size, Box::new(ParentBoundedDrag::new()))
    }

    /// Builds the compositor around a specific drag capability.
    #[must_use]
    pub fn with_drag(
        background: RawImage,
        logo_size: LogoSize,
        drag: Box<dyn DragCapability>,
    ) -> Self {
        let background_handle = to_handle(&background);
        Self {
            background,
            background_handle,
            overlay: LogoOverlay::new(logo_size),
            preview: None,
            drag,
            cursor: Point::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::UploadRequested => Event::PickLogo,
            Message::LogoDecoded(Ok(image)) => {
                self.upload(image);
                Event::LogoPlaced
            }
            Message::LogoDecoded(Err(error)) => Event::DecodeFailed(error),
            Message::SizeChanged(px) => {
                self.resize(px);
                Event::None
            }
            Message::CursorMoved(point) => {
                self.cursor = point;
                if let Some(offset) = self.drag.track(point) {
                    self.overlay.set_offset(offset);
                    self.refresh_preview();
                }
                Event::None
            }
            Message::DragStarted => {
                self.begin_drag();
                Event::None
            }
            Message::DragEnded => {
                self.drag.end();
                Event::None
            }
            Message::ExportRequested => Event::Export(self.scene()),
        }
    }

    /// Replaces the logo and recenters it.
    pub fn upload(&mut self, image: LogoImage) {
        self.drag.end();
        self.overlay.place(image);
        self.preview = None;
        self.refresh_preview();
    }

    /// Sets the logo width, clamped to the allowed range. The drag capability
    /// then pulls the offset back inside the stage for the new size.
    pub fn resize(&mut self, px: u32) {
        self.overlay.set_size(LogoSize::new(px));
        if let Some(logo) = self.overlay.rendered_size() {
            let bounds = DragBounds::within(self.stage_size(), logo);
            let offset = self.drag.constrain(self.overlay.offset(), bounds);
            self.overlay.set_offset(offset);
        }
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        let stage = self.stage_size();
        let (Some(image), Some(placement)) = (self.overlay.image(), self.overlay.placement(stage))
        else {
            self.preview = None;
            return;
        };
        let Some(region) = placement.visible_in(self.background.width(), self.background.height())
        else {
            self.preview = None;
            return;
        };

        if let Some(preview) = self.preview.as_mut() {
            if preview.fits(placement, region) {
                preview.placement = placement;
                preview.region = region;
                return;
            }
        }

        self.preview = scale::scale_visible(&image.pixels, placement, region, Filter::default())
            .map(|pixels| LogoPreview {
                handle: to_handle(&pixels),
                placement,
                region,
            });
    }

    fn begin_drag(&mut self) {
        let Some(logo) = self.overlay.rendered_size() else {
            return;
        };
        let bounds = DragBounds::within(self.stage_size(), logo);
        self.drag.begin(self.cursor, self.overlay.offset(), bounds);
    }

    /// The scene to rasterize for export.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::compose(self.background.clone(), &self.overlay)
    }

    #[must_use]
    pub fn overlay(&self) -> &LogoOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn background(&self) -> &RawImage {
        &self.background
    }

    #[must_use]
    pub fn stage_size(&self) -> Size {
        Size::new(
            self.background.width() as f32,
            self.background.height() as f32,
        )
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub(crate) fn background_handle(&self) -> &Handle {
        &self.background_handle
    }

    /// Logo pixels on stage and where they go.
    pub(crate) fn logo_preview(&self) -> Option<(&Handle, VisibleRegion)> {
        self.preview
            .as_ref()
            .map(|preview| (&preview.handle, preview.region))
    }
}

fn to_handle(image: &RawImage) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.rgba_bytes().to_vec())
}
