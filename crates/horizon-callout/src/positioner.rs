//! Anchored placement with screen-edge avoidance.
//!
//! This module computes where a callout window goes: adjacent to an anchor
//! rectangle, flipped above the anchor when hanging below it would leave
//! the screen, and clamped so it never sticks out past the visible frame's
//! horizontal edges.
//!
//! The computation is a pure function over its inputs. The stateful pieces
//! (the remembered anchor, applying the origin to a live window) live in
//! [`crate::controller`]; they call back into [`resolve_origin`] on every
//! show request and resize event.
//!
//! # Example
//!
//! ```
//! use horizon_callout::{AnchoredPositioner, Rect, Size};
//!
//! let positioner = AnchoredPositioner::new()
//!     .with_reserved_height(300.0);
//!
//! let anchor = Rect::new(100.0, 500.0, 80.0, 24.0);
//! let visible = Rect::new(0.0, 0.0, 1440.0, 875.0);
//! let origin = positioner.resolve(anchor, Size::new(240.0, 120.0), visible);
//!
//! // Hangs directly below the anchor, left edges aligned.
//! assert_eq!(origin.x, 100.0);
//! assert_eq!(origin.y, 380.0);
//! ```

use crate::geometry::{Point, Rect, Size};

/// Horizontal text/layout direction, mirroring the host application's
/// interface direction.
///
/// In a right-to-left interface the callout extends to the *left* of the
/// anchor's minimum-x edge rather than to the right of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right interface (the default).
    #[default]
    LeftToRight,
    /// Right-to-left interface.
    RightToLeft,
}

/// Compute the callout origin for a single placement.
///
/// Inputs are in callout space (y-up; see [`crate::geometry`]):
///
/// - `anchor`: the rectangle the callout attaches to.
/// - `content`: the callout's natural content size. The resulting window is
///   always exactly this size; nothing here resizes it.
/// - `reserved_height`: optional minimum height used *only* for the
///   edge-avoidance decision. A callout whose content will grow later can
///   reserve its eventual height up front so it does not flip sides as the
///   content grows.
/// - `visible_frame`: the usable area of the target screen.
/// - `direction`: horizontal layout direction.
///
/// The placement rules, in order:
///
/// 1. Start at the anchor's left edge (or `anchor.min_x - content.width`
///    for right-to-left).
/// 2. Hang the callout below the anchor: its top edge at the anchor's
///    bottom edge.
/// 3. If a probe rectangle of height `max(content.height, reserved_height)`
///    at that position would fall past the visible frame's bottom edge,
///    flip: the callout's bottom edge moves to the anchor's top edge.
/// 4. If the right edge overflows the visible frame, shift left by the
///    overflow.
/// 5. If the left edge now precedes the visible frame, clamp it to the
///    frame's left edge. This clamp wins over the right-edge shift.
///
/// A flipped callout is not re-checked against the visible frame's top
/// edge; placement above the anchor assumes the headroom is there.
///
/// The function is total: degenerate frames and negative sizes are the
/// caller's responsibility and produce garbage-in/garbage-out coordinates
/// rather than errors.
pub fn resolve_origin(
    anchor: Rect,
    content: Size,
    reserved_height: Option<f32>,
    visible_frame: Rect,
    direction: LayoutDirection,
) -> Point {
    let mut x = match direction {
        LayoutDirection::RightToLeft => anchor.min_x() - content.width,
        LayoutDirection::LeftToRight => anchor.min_x(),
    };

    // Default placement: hanging below the anchor.
    let mut y = anchor.min_y() - content.height;

    // The flip decision probes with the reserved height when that is
    // taller, so short content that will grow reserves its side early.
    let probe_height = match reserved_height {
        Some(reserved) if reserved > content.height => reserved,
        _ => content.height,
    };

    if anchor.min_y() - probe_height < visible_frame.min_y() {
        // Not enough room below: place the callout above the anchor.
        y = anchor.max_y();
    }

    if x + content.width > visible_frame.max_x() {
        x -= (x + content.width) - visible_frame.max_x();
    }

    if x < visible_frame.min_x() {
        x = visible_frame.min_x();
    }

    tracing::trace!(
        target: "horizon_callout::positioner",
        x,
        y,
        flipped = (y == anchor.max_y()),
        "resolved callout origin"
    );

    Point::new(x, y)
}

/// Placement parameters bundled with the resolve call.
///
/// This is the unit the controller holds: the direction and reserved
/// height persist across placements, while the anchor, content size, and
/// visible frame are supplied fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredPositioner {
    reserved_height: Option<f32>,
    direction: LayoutDirection,
}

impl AnchoredPositioner {
    /// Create a positioner with no reserved height and left-to-right
    /// direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved height using builder pattern.
    pub fn with_reserved_height(mut self, height: f32) -> Self {
        self.reserved_height = Some(height);
        self
    }

    /// Set the layout direction using builder pattern.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Get the reserved height hint.
    pub fn reserved_height(&self) -> Option<f32> {
        self.reserved_height
    }

    /// Set or clear the reserved height hint.
    pub fn set_reserved_height(&mut self, height: Option<f32>) {
        self.reserved_height = height;
    }

    /// Get the layout direction.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Set the layout direction.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Resolve the callout origin for the given anchor, content size, and
    /// visible frame. See [`resolve_origin`].
    pub fn resolve(&self, anchor: Rect, content: Size, visible_frame: Rect) -> Point {
        resolve_origin(
            anchor,
            content,
            self.reserved_height,
            visible_frame,
            self.direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISIBLE: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn test_below_placement_default() {
        let anchor = Rect::new(100.0, 500.0, 50.0, 30.0);
        let content = Size::new(200.0, 120.0);

        let origin =
            resolve_origin(anchor, content, None, VISIBLE, LayoutDirection::LeftToRight);

        // Left edges aligned, top edge at the anchor's bottom edge.
        assert_eq!(origin.x, anchor.min_x());
        assert_eq!(origin.y, anchor.min_y() - content.height);
    }

    #[test]
    fn test_flip_when_below_leaves_screen() {
        // Probe bottom = 10 - 20 = -10 < 0, so the callout flips above.
        let anchor = Rect::new(100.0, 10.0, 50.0, 30.0);
        let content = Size::new(100.0, 20.0);

        let origin =
            resolve_origin(anchor, content, None, VISIBLE, LayoutDirection::LeftToRight);

        assert_eq!(origin.y, anchor.max_y());
    }

    #[test]
    fn test_reserved_height_forces_flip_without_resizing() {
        // Unreserved probe bottom = 50 - 20 = 30 >= 0: would not flip.
        // Reserved probe bottom = 50 - 200 = -150 < 0: flips.
        let anchor = Rect::new(100.0, 50.0, 50.0, 30.0);
        let content = Size::new(100.0, 20.0);

        let unreserved =
            resolve_origin(anchor, content, None, VISIBLE, LayoutDirection::LeftToRight);
        assert_eq!(unreserved.y, anchor.min_y() - content.height);

        let reserved = resolve_origin(
            anchor,
            content,
            Some(200.0),
            VISIBLE,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(reserved.y, anchor.max_y());

        // The reservation only moves the callout; the caller still sizes
        // the window to exactly `content`.
        assert_eq!(content, Size::new(100.0, 20.0));
    }

    #[test]
    fn test_reserved_height_shorter_than_content_is_ignored() {
        let anchor = Rect::new(100.0, 100.0, 50.0, 30.0);
        let content = Size::new(100.0, 90.0);

        let origin = resolve_origin(
            anchor,
            content,
            Some(10.0),
            VISIBLE,
            LayoutDirection::LeftToRight,
        );

        // Probe uses the taller content height: 100 - 90 = 10 >= 0.
        assert_eq!(origin.y, anchor.min_y() - content.height);
    }

    #[test]
    fn test_right_edge_clamp() {
        let visible = Rect::new(0.0, 0.0, 100.0, 800.0);
        let anchor = Rect::new(90.0, 400.0, 5.0, 5.0);
        let content = Size::new(20.0, 10.0);

        let origin =
            resolve_origin(anchor, content, None, visible, LayoutDirection::LeftToRight);

        // 90 + 20 = 110 > 100, shifted left by the overflow.
        assert_eq!(origin.x, 80.0);
    }

    #[test]
    fn test_left_edge_clamp_takes_precedence() {
        let visible = Rect::new(50.0, 0.0, 100.0, 800.0);
        let anchor = Rect::new(0.0, 400.0, 5.0, 5.0);
        let content = Size::new(10.0, 10.0);

        let origin =
            resolve_origin(anchor, content, None, visible, LayoutDirection::LeftToRight);

        // No right overflow, but x = 0 < 50: clamped to the frame's left.
        assert_eq!(origin.x, 50.0);
    }

    #[test]
    fn test_left_edge_clamp_after_right_shift() {
        // Content wider than the visible frame: the right-edge shift pushes
        // x past the left edge, and the left clamp wins.
        let visible = Rect::new(0.0, 0.0, 100.0, 800.0);
        let anchor = Rect::new(50.0, 400.0, 5.0, 5.0);
        let content = Size::new(150.0, 10.0);

        let origin =
            resolve_origin(anchor, content, None, visible, LayoutDirection::LeftToRight);

        assert_eq!(origin.x, visible.min_x());
    }

    #[test]
    fn test_right_to_left_base_position() {
        let anchor = Rect::new(100.0, 400.0, 50.0, 30.0);
        let content = Size::new(30.0, 10.0);

        let origin =
            resolve_origin(anchor, content, None, VISIBLE, LayoutDirection::RightToLeft);

        assert_eq!(origin.x, 70.0);
        assert_eq!(origin.y, anchor.min_y() - content.height);
    }

    #[test]
    fn test_right_to_left_still_clamps() {
        let visible = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let anchor = Rect::new(20.0, 400.0, 50.0, 30.0);
        let content = Size::new(60.0, 10.0);

        let origin =
            resolve_origin(anchor, content, None, visible, LayoutDirection::RightToLeft);

        // Base x = 20 - 60 = -40 < 0: clamped to the left edge.
        assert_eq!(origin.x, 0.0);
    }

    #[test]
    fn test_flipped_callout_not_rechecked_against_top() {
        // Anchor near the top of a short frame: flipping places the callout
        // past max_y. Placement above the anchor assumes the headroom.
        let visible = Rect::new(0.0, 0.0, 1000.0, 100.0);
        let anchor = Rect::new(100.0, 10.0, 50.0, 80.0);
        let content = Size::new(100.0, 50.0);

        let origin =
            resolve_origin(anchor, content, None, visible, LayoutDirection::LeftToRight);

        assert_eq!(origin.y, anchor.max_y());
        assert!(origin.y + content.height > visible.max_y());
    }

    #[test]
    fn test_idempotent() {
        let anchor = Rect::new(90.0, 10.0, 50.0, 30.0);
        let content = Size::new(200.0, 120.0);

        let first = resolve_origin(
            anchor,
            content,
            Some(300.0),
            VISIBLE,
            LayoutDirection::LeftToRight,
        );
        let second = resolve_origin(
            anchor,
            content,
            Some(300.0),
            VISIBLE,
            LayoutDirection::LeftToRight,
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_positioner_builder_matches_free_function() {
        let positioner = AnchoredPositioner::new()
            .with_reserved_height(200.0)
            .with_direction(LayoutDirection::RightToLeft);

        let anchor = Rect::new(300.0, 50.0, 40.0, 20.0);
        let content = Size::new(120.0, 60.0);

        assert_eq!(
            positioner.resolve(anchor, content, VISIBLE),
            resolve_origin(
                anchor,
                content,
                Some(200.0),
                VISIBLE,
                LayoutDirection::RightToLeft
            )
        );
    }

    #[test]
    fn test_point_anchor() {
        // Anchoring to a bare point behaves like a zero-sized rect.
        let anchor = Rect::at_point(Point::new(400.0, 300.0));
        let content = Size::new(100.0, 50.0);

        let origin =
            resolve_origin(anchor, content, None, VISIBLE, LayoutDirection::LeftToRight);

        assert_eq!(origin, Point::new(400.0, 250.0));
    }
}
