// SPDX-License-Identifier: MPL-2.0
//! Plain 2D geometry for overlay placement.

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Translation of the overlay away from its centered resting place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centers `inner` inside `self`.
    #[must_use]
    pub fn centered_origin(self, inner: Size) -> Point {
        Point::new(
            (self.width - inner.width) / 2.0,
            (self.height - inner.height) / 2.0,
        )
    }
}

/// How far an element may travel from the center of its parent before an
/// edge would leave the parent's box.
///
/// An element larger than its parent along an axis gets zero travel on that
/// axis and stays centered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragBounds {
    pub max_dx: f32,
    pub max_dy: f32,
}

impl DragBounds {
    /// Bounds for `element` moving inside `parent`.
    #[must_use]
    pub fn within(parent: Size, element: Size) -> Self {
        Self {
            max_dx: ((parent.width - element.width) / 2.0).max(0.0),
            max_dy: ((parent.height - element.height) / 2.0).max(0.0),
        }
    }

    /// Clamps `offset` so the element stays inside the parent.
    #[must_use]
    pub fn clamp(self, offset: Offset) -> Offset {
        Offset {
            dx: offset.dx.clamp(-self.max_dx, self.max_dx),
            dy: offset.dy.clamp(-self.max_dy, self.max_dy),
        }
    }

    /// Returns whether `offset` already lies inside the bounds.
    #[must_use]
    pub fn contains(self, offset: Offset) -> bool {
        offset.dx.abs() <= self.max_dx && offset.dy.abs() <= self.max_dy
    }
}

/// Integer box of the logo on the stage, in stage pixels.
///
/// `left` and `top` may be negative, and the box may extend past the stage;
/// whatever falls outside is clipped when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub left: i64,
    pub top: i64,
    pub width: u32,
    pub height: u32,
}

/// The part of a [`Placement`] that lands on the stage.
///
/// `x`/`y` are where it starts on the stage, `skip_x`/`skip_y` how many
/// rendered logo pixels were cut off on the left and top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub skip_x: u32,
    pub skip_y: u32,
}

impl Placement {
    /// Clips the box against a `stage_width` x `stage_height` stage.
    /// Returns `None` when nothing of the logo is visible.
    #[must_use]
    pub fn visible_in(self, stage_width: u32, stage_height: u32) -> Option<VisibleRegion> {
        let (x, width, skip_x) = clip_span(self.left, self.width, stage_width)?;
        let (y, height, skip_y) = clip_span(self.top, self.height, stage_height)?;
        Some(VisibleRegion {
            x,
            y,
            width,
            height,
            skip_x,
            skip_y,
        })
    }
}

fn clip_span(start: i64, length: u32, limit: u32) -> Option<(u32, u32, u32)> {
    let first = start.max(0);
    let last = (start + i64::from(length)).min(i64::from(limit));
    if last <= first {
        return None;
    }
    let first = u32::try_from(first).ok()?;
    let last = u32::try_from(last).ok()?;
    let skip = u32::try_from(i64::from(first) - start).ok()?;
    Some((first, last - first, skip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centered_origin_splits_the_slack() {
        let stage = Size::new(320.0, 384.0);
        let origin = stage.centered_origin(Size::new(100.0, 50.0));
        assert_relative_eq!(origin.x, 110.0);
        assert_relative_eq!(origin.y, 167.0);
    }

    #[test]
    fn bounds_allow_half_the_slack_each_way() {
        let bounds = DragBounds::within(Size::new(320.0, 384.0), Size::new(100.0, 100.0));
        assert_relative_eq!(bounds.max_dx, 110.0);
        assert_relative_eq!(bounds.max_dy, 142.0);
    }

    #[test]
    fn oversized_element_cannot_move_on_that_axis() {
        let bounds = DragBounds::within(Size::new(320.0, 384.0), Size::new(200.0, 500.0));
        assert_relative_eq!(bounds.max_dx, 60.0);
        assert_relative_eq!(bounds.max_dy, 0.0);
        assert_eq!(bounds.clamp(Offset::new(0.0, 40.0)).dy, 0.0);
    }

    #[test]
    fn clamp_keeps_inner_offsets_and_pins_outer_ones() {
        let bounds = DragBounds::within(Size::new(300.0, 300.0), Size::new(100.0, 100.0));
        assert_eq!(bounds.clamp(Offset::new(20.0, -30.0)), Offset::new(20.0, -30.0));
        assert_eq!(
            bounds.clamp(Offset::new(500.0, -500.0)),
            Offset::new(100.0, -100.0)
        );
        assert!(bounds.contains(bounds.clamp(Offset::new(-1e6, 1e6))));
    }

    #[test]
    fn placement_inside_stage_is_fully_visible() {
        let placement = Placement {
            left: 110,
            top: 142,
            width: 100,
            height: 100,
        };
        assert_eq!(
            placement.visible_in(320, 384),
            Some(VisibleRegion {
                x: 110,
                y: 142,
                width: 100,
                height: 100,
                skip_x: 0,
                skip_y: 0,
            })
        );
    }

    #[test]
    fn tall_placement_is_cut_at_both_edges() {
        let placement = Placement {
            left: 60,
            top: -108,
            width: 200,
            height: 600,
        };
        let region = placement.visible_in(320, 384).expect("visible");
        assert_eq!((region.x, region.y), (60, 0));
        assert_eq!((region.width, region.height), (200, 384));
        assert_eq!((region.skip_x, region.skip_y), (0, 108));
    }

    #[test]
    fn placement_off_stage_is_invisible() {
        let placement = Placement {
            left: -10,
            top: 20,
            width: 2,
            height: 2,
        };
        assert_eq!(placement.visible_in(4, 4), None);
    }
}
