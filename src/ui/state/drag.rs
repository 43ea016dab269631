// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag of the logo overlay inside the stage.

use crate::application::port::DragCapability;
use crate::domain::compositor::{DragBounds, Offset, Point};

/// Drag tracker that keeps the dragged element inside its parent.
#[derive(Debug, Clone, Default)]
pub struct ParentBoundedDrag {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Cursor position where the drag started
    pub start_position: Option<Point>,

    /// Element offset when the drag started
    pub start_offset: Option<Offset>,

    /// Travel limits for the current gesture
    bounds: DragBounds,
}

impl ParentBoundedDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the new offset based on cursor movement during drag
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Offset> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        // Element follows the cursor
        let delta_x = current_position.x - start_pos.x;
        let delta_y = current_position.y - start_pos.y;

        Some(self.bounds.clamp(Offset {
            dx: start_offset.dx + delta_x,
            dy: start_offset.dy + delta_y,
        }))
    }
}

impl DragCapability for ParentBoundedDrag {
    fn begin(&mut self, cursor: Point, origin: Offset, bounds: DragBounds) {
        self.is_dragging = true;
        self.start_position = Some(cursor);
        self.start_offset = Some(origin);
        self.bounds = bounds;
    }

    fn track(&mut self, cursor: Point) -> Option<Offset> {
        self.calculate_offset(cursor)
    }

    fn constrain(&self, offset: Offset, bounds: DragBounds) -> Offset {
        bounds.clamp(offset)
    }

    fn end(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compositor::Size;
    use crate::test_utils::assert_abs_diff_eq;

    fn stage_bounds() -> DragBounds {
        DragBounds::within(Size::new(320.0, 384.0), Size::new(100.0, 100.0))
    }

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = ParentBoundedDrag::default();
        assert!(!state.is_dragging());
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn begin_drag_sets_state() {
        let mut state = ParentBoundedDrag::new();
        state.begin(Point::new(100.0, 50.0), Offset::new(20.0, 10.0), stage_bounds());

        assert!(state.is_dragging());
        assert_eq!(state.start_position, Some(Point::new(100.0, 50.0)));
        assert_eq!(state.start_offset, Some(Offset::new(20.0, 10.0)));
    }

    #[test]
    fn end_drag_clears_state() {
        let mut state = ParentBoundedDrag::new();
        state.begin(Point::new(100.0, 50.0), Offset::ZERO, stage_bounds());
        state.end();

        assert!(!state.is_dragging());
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
        assert!(state.track(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn track_returns_none_when_not_dragging() {
        let mut state = ParentBoundedDrag::new();
        assert!(state.track(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn track_follows_cursor_delta() {
        let mut state = ParentBoundedDrag::new();
        state.begin(Point::new(200.0, 150.0), Offset::new(5.0, 5.0), stage_bounds());

        // Cursor moved left/up by 20 pixels
        let offset = state.track(Point::new(180.0, 130.0)).expect("dragging");

        assert_abs_diff_eq!(offset.dx, -15.0);
        assert_abs_diff_eq!(offset.dy, -15.0);
    }

    #[test]
    fn track_pins_element_to_parent_edges() {
        let mut state = ParentBoundedDrag::new();
        let bounds = stage_bounds();
        state.begin(Point::new(0.0, 0.0), Offset::ZERO, bounds);

        let far = state.track(Point::new(5_000.0, -5_000.0)).expect("dragging");

        assert_abs_diff_eq!(far.dx, bounds.max_dx);
        assert_abs_diff_eq!(far.dy, -bounds.max_dy);
    }

    #[test]
    fn constrain_pulls_offset_into_smaller_bounds() {
        let state = ParentBoundedDrag::new();
        let shrunk = DragBounds::within(Size::new(320.0, 384.0), Size::new(200.0, 200.0));

        let offset = state.constrain(Offset::new(-135.0, 40.0), shrunk);

        assert_abs_diff_eq!(offset.dx, -60.0);
        assert_abs_diff_eq!(offset.dy, 40.0);
        assert!(shrunk.contains(offset));
    }

    #[test]
    fn every_reported_offset_stays_within_bounds() {
        let mut state = ParentBoundedDrag::new();
        let bounds = stage_bounds();
        state.begin(Point::new(160.0, 192.0), Offset::ZERO, bounds);

        for step in -40..=40 {
            let cursor = Point::new(160.0 + step as f32 * 13.0, 192.0 - step as f32 * 17.0);
            let offset = state.track(cursor).expect("dragging");
            assert!(bounds.contains(offset), "offset {offset:?} escaped {bounds:?}");
        }
    }
}
