// SPDX-License-Identifier: MPL-2.0
//! Drag capability port.
//!
//! The compositor never computes overlay positions. It forwards pointer
//! activity to a [`DragCapability`] and stores whatever offset the capability
//! reports back.

use crate::domain::compositor::{DragBounds, Offset, Point};
use std::fmt;

/// Tracks one drag gesture at a time and reports positions that keep the
/// dragged element inside its parent.
///
/// Implementations guarantee that every offset returned by [`track`] lies
/// within the [`DragBounds`] passed to [`begin`], and every offset returned
/// by [`constrain`] within the bounds passed to it.
///
/// [`track`]: DragCapability::track
/// [`begin`]: DragCapability::begin
/// [`constrain`]: DragCapability::constrain
pub trait DragCapability: fmt::Debug + Send {
    /// Starts a gesture at `cursor`, with the element currently at `origin`.
    fn begin(&mut self, cursor: Point, origin: Offset, bounds: DragBounds);

    /// Reports the element position for the new cursor location, or `None`
    /// when no gesture is active.
    fn track(&mut self, cursor: Point) -> Option<Offset>;

    /// Brings a stored `offset` back inside `bounds`, for when the element
    /// or its parent changed size outside a gesture.
    fn constrain(&self, offset: Offset, bounds: DragBounds) -> Offset;

    /// Ends the current gesture, if any.
    fn end(&mut self);

    /// Returns whether a gesture is in progress.
    fn is_dragging(&self) -> bool;
}
