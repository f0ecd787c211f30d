//! Callout lifecycle control.
//!
//! The controller owns the stateful half of the callout: the remembered
//! anchor, the show/hide transitions, and the recomputation that runs on
//! every show request and resize event. The positioning math itself stays
//! in [`crate::positioner`]; the controller just re-invokes it with the
//! remembered anchor and applies the result to its surface.
//!
//! The surface is behind the [`CalloutSurface`] trait so the lifecycle
//! logic can be exercised against a mock in tests; the winit-backed
//! implementation lives in [`crate::window`].

use horizon_callout_core::{debug_assert_ui_thread, Signal};

use crate::geometry::{Point, Rect, Size};
use crate::positioner::AnchoredPositioner;

/// The window-shaped thing a controller positions.
///
/// Missing context is modeled, not panicked on: a surface with no screen
/// under it reports `None` from [`visible_frame`](Self::visible_frame) and
/// the controller leaves it where it is.
pub trait CalloutSurface {
    /// The natural size of the callout's content, in logical units.
    fn content_size(&self) -> Size;

    /// The usable bounds of the screen the callout targets, in callout
    /// space, or `None` when no screen can be resolved.
    fn visible_frame(&self) -> Option<Rect>;

    /// Move the surface so its minimum corner sits at `origin` (callout
    /// space).
    fn move_to(&self, origin: Point);

    /// Show or hide the surface.
    fn set_visible(&self, visible: bool);

    /// Whether the surface is currently visible.
    fn is_visible(&self) -> bool;
}

/// Drives a [`CalloutSurface`] through its show/reposition/hide lifecycle.
///
/// The only state that persists between calls is the remembered anchor
/// (so resize events can recompute without the caller re-supplying it)
/// and the positioner's placement hints.
///
/// # Signals
///
/// - `about_to_show()`: emitted before the surface becomes visible
/// - `moved(Point)`: emitted whenever a reposition resolves an origin
/// - `about_to_hide()`: emitted before the surface is hidden
pub struct CalloutController<S: CalloutSurface> {
    surface: S,
    positioner: AnchoredPositioner,
    /// Anchor of the most recent show request.
    anchor: Option<Rect>,

    /// Signal emitted before the callout is shown.
    pub about_to_show: Signal<()>,
    /// Signal emitted with the resolved origin on every reposition.
    pub moved: Signal<Point>,
    /// Signal emitted before the callout is hidden.
    pub about_to_hide: Signal<()>,
}

impl<S: CalloutSurface> CalloutController<S> {
    /// Create a controller around a surface.
    pub fn new(surface: S, positioner: AnchoredPositioner) -> Self {
        Self {
            surface,
            positioner,
            anchor: None,
            about_to_show: Signal::new(),
            moved: Signal::new(),
            about_to_hide: Signal::new(),
        }
    }

    /// Access the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The anchor of the most recent show request, if any.
    ///
    /// The anchor survives [`hide`](Self::hide); only the next show
    /// request replaces it.
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// The current placement parameters.
    pub fn positioner(&self) -> &AnchoredPositioner {
        &self.positioner
    }

    /// Set or clear the reserved height used for the flip decision.
    ///
    /// Takes effect on the next reposition; the callout is not resized.
    pub fn set_reserved_height(&mut self, height: Option<f32>) {
        self.positioner.set_reserved_height(height);
    }

    /// Whether the callout is currently visible.
    pub fn is_visible(&self) -> bool {
        self.surface.is_visible()
    }

    /// Show the callout anchored to the given rectangle.
    ///
    /// Remembers the anchor, makes the surface visible, and positions it.
    /// When no screen can be resolved the callout still becomes visible
    /// but stays where it is; the next resize event retries.
    pub fn show_anchored(&mut self, anchor: Rect) {
        debug_assert_ui_thread!();

        self.anchor = Some(anchor);

        if !self.surface.is_visible() {
            self.about_to_show.emit(());
            self.surface.set_visible(true);
        }

        if self.reposition().is_none() {
            tracing::debug!(
                target: "horizon_callout::controller",
                "callout shown without screen context, skipping placement"
            );
        }
    }

    /// Recompute the callout origin from the remembered anchor and apply
    /// it to the surface.
    ///
    /// Returns the resolved origin, or `None` (leaving the surface
    /// untouched) when there is no remembered anchor or no screen context.
    pub fn reposition(&self) -> Option<Point> {
        debug_assert_ui_thread!();

        let anchor = self.anchor?;
        let visible_frame = self.surface.visible_frame()?;
        let origin = self
            .positioner
            .resolve(anchor, self.surface.content_size(), visible_frame);

        self.surface.move_to(origin);
        self.moved.emit(origin);
        Some(origin)
    }

    /// React to a resize of the parent window.
    ///
    /// Recomputes placement while the callout is visible; hidden callouts
    /// ignore resize traffic.
    pub fn parent_resized(&self) {
        if self.surface.is_visible() {
            let _ = self.reposition();
        }
    }

    /// React to a resize of the callout's own content.
    ///
    /// Growing content can change the flip decision and the clamps, so
    /// this recomputes exactly like a parent resize does.
    pub fn content_resized(&self) {
        if self.surface.is_visible() {
            let _ = self.reposition();
        }
    }

    /// Hide the callout.
    ///
    /// The remembered anchor is kept so a later show request without a new
    /// anchor source can still reposition.
    pub fn hide(&mut self) {
        debug_assert_ui_thread!();

        if self.surface.is_visible() {
            self.about_to_hide.emit(());
            self.surface.set_visible(false);
        }
    }
}
