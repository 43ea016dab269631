// SPDX-License-Identifier: MPL-2.0
//! Compositor domain types.
//!
//! A single logo overlay sits on a fixed background ("stage"). Its width is a
//! clamped [`LogoSize`], its height follows the source aspect ratio, and its
//! position is an [`Offset`] from the centered resting place.

mod geometry;
mod newtypes;
mod overlay;

pub use geometry::{DragBounds, Offset, Placement, Point, Size, VisibleRegion};
pub use newtypes::{logo_size_bounds, LogoSize};
pub use overlay::{LogoImage, LogoOverlay, PlacedLogo, Scene};
