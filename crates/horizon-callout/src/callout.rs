//! The callout facade.
//!
//! [`Callout`] ties the pieces together for the common case: it owns the
//! platform window, the lifecycle controller, and (while shown) the
//! dismiss watcher. The hosting application routes its window events
//! through [`Callout::handle_window_event`]; everything else is automatic.
//!
//! # Example
//!
//! ```ignore
//! use horizon_callout::{Callout, CalloutConfig, Rect};
//!
//! // Inside the winit event loop, with a parent window already open:
//! let mut callout = Callout::create(
//!     event_loop,
//!     CalloutConfig::new().with_content_size(240, 120),
//!     parent_window_id,
//! )?;
//!
//! callout.dismissed.connect(|reason| {
//!     println!("callout dismissed: {:?}", reason);
//! });
//!
//! // Show it attached to a screen rectangle (callout space, y-up):
//! callout.show_anchored(Rect::new(480.0, 620.0, 96.0, 22.0));
//!
//! // In the application's window-event handler:
//! // if callout.handle_window_event(window_id, &event) { return; }
//! ```

use horizon_callout_core::{set_ui_thread, Signal};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::config::CalloutConfig;
use crate::controller::CalloutController;
use crate::error::CalloutResult;
use crate::geometry::{Point, Rect, Size};
use crate::positioner::AnchoredPositioner;
use crate::watcher::{DismissReason, DismissWatcher};
use crate::window::CalloutWindow;

/// An anchored, self-dismissing callout window.
///
/// The callout owns its window: dropping the `Callout` (or letting the
/// owning object go out of scope) closes the window. Hiding merely orders
/// it out; the window and the remembered anchor survive for the next show.
pub struct Callout {
    controller: CalloutController<CalloutWindow>,
    /// Present exactly while the callout is shown.
    watcher: Option<DismissWatcher>,
    parent: WindowId,

    /// Signal emitted after the callout hides in response to an outside
    /// click, Escape press, or window-ordering change.
    pub dismissed: Signal<DismissReason>,
}

impl Callout {
    /// Create a callout attached to the given parent window.
    ///
    /// The window is created hidden; call
    /// [`show_anchored`](Self::show_anchored) to place and reveal it.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: CalloutConfig,
        parent: WindowId,
    ) -> CalloutResult<Self> {
        set_ui_thread();

        let window = CalloutWindow::create(event_loop, &config)?;

        let mut positioner = AnchoredPositioner::new().with_direction(config.direction());
        positioner.set_reserved_height(config.reserved_height());

        Ok(Self {
            controller: CalloutController::new(window, positioner),
            watcher: None,
            parent,
            dismissed: Signal::new(),
        })
    }

    /// The callout window's identifier.
    pub fn id(&self) -> WindowId {
        self.controller.surface().id()
    }

    /// The parent window's identifier.
    pub fn parent_id(&self) -> WindowId {
        self.parent
    }

    /// Access the callout window.
    pub fn window(&self) -> &CalloutWindow {
        self.controller.surface()
    }

    /// Access the lifecycle controller (for its signals and placement
    /// state).
    pub fn controller(&self) -> &CalloutController<CalloutWindow> {
        &self.controller
    }

    /// Whether the callout is currently visible.
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Show the callout anchored to a rectangle in callout space.
    ///
    /// Starts watching for dismissal events.
    pub fn show_anchored(&mut self, anchor: Rect) {
        let watcher = DismissWatcher::new(self.id(), self.parent);
        self.controller.show_anchored(anchor);
        self.watcher = Some(watcher);
    }

    /// Show the callout anchored to a bare point.
    pub fn show_at(&mut self, point: Point) {
        self.show_anchored(Rect::at_point(point));
    }

    /// Hide the callout and stop watching for dismissal events.
    pub fn hide(&mut self) {
        self.watcher = None;
        self.controller.hide();
    }

    /// Set or clear the reserved height used for the flip decision.
    pub fn set_reserved_height(&mut self, height: Option<f32>) {
        self.controller.set_reserved_height(height);
    }

    /// Request a new content size for the callout.
    ///
    /// The platform acknowledges with a `Resized` event, which
    /// [`handle_window_event`](Self::handle_window_event) turns into a
    /// reposition.
    pub fn set_content_size(&self, size: Size) {
        self.controller.surface().request_content_size(size);
    }

    /// Feed one window event through the callout.
    ///
    /// Call this for every window event the application receives, with the
    /// id of the window the event was delivered to. Handles dismissal
    /// (outside clicks, Escape in the parent, focus churn) and
    /// repositioning after parent or callout resizes.
    ///
    /// Returns `true` when the event was consumed and should not be
    /// processed further by the application (only the Escape press that
    /// dismissed the callout is consumed).
    pub fn handle_window_event(&mut self, source: WindowId, event: &WindowEvent) -> bool {
        if let Some(watcher) = self.watcher
            && let Some(verdict) = watcher.classify_window_event(source, event)
        {
            tracing::debug!(
                target: "horizon_callout::callout",
                reason = ?verdict.reason,
                "dismissing callout"
            );
            self.hide();
            self.dismissed.emit(verdict.reason);
            return verdict.consume;
        }

        if matches!(event, WindowEvent::Resized(_)) {
            if source == self.parent {
                self.controller.parent_resized();
            } else if source == self.id() {
                self.controller.content_resized();
            }
        }

        false
    }
}
