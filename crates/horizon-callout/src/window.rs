//! Native window wrapper for callouts.
//!
//! `CalloutWindow` wraps the platform window (winit) behind the
//! [`CalloutSurface`] seam: it reports its content size and visible frame
//! in callout space and applies computed origins back in desktop
//! coordinates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use winit::dpi::{LogicalPosition, LogicalSize, Position, Size as WinitSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::config::CalloutConfig;
use crate::controller::CalloutSurface;
use crate::error::{CalloutError, CalloutResult};
use crate::geometry::{Point, Rect, Size};
use crate::screen::{callout_origin_to_desktop, Screen, Screens};

/// A borderless platform window hosting callout content.
pub struct CalloutWindow {
    /// The underlying winit window.
    window: Arc<Window>,
    /// Shadow visibility flag for platforms where the window cannot
    /// report its own visibility.
    visible: AtomicBool,
}

impl CalloutWindow {
    /// Create the callout window from a configuration.
    ///
    /// This must be called from within the event loop (typically in
    /// `resumed()` or while handling an event). The window is created
    /// hidden.
    pub fn create(event_loop: &ActiveEventLoop, config: &CalloutConfig) -> CalloutResult<Self> {
        let attrs = config.to_window_attributes();
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| CalloutError::WindowCreation(e.to_string()))?;

        tracing::debug!(
            target: "horizon_callout::window",
            id = ?window.id(),
            "created callout window"
        );

        Ok(Self {
            window: Arc::new(window),
            visible: AtomicBool::new(false),
        })
    }

    /// Get the window identifier.
    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Get a reference to the underlying winit window.
    ///
    /// This is provided for advanced use cases (embedding a rendering
    /// surface, platform extensions).
    pub fn winit_window(&self) -> &Window {
        &self.window
    }

    /// Get an Arc reference to the underlying winit window.
    pub fn winit_window_arc(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }

    /// Request a new content size in logical units.
    ///
    /// The actual resize arrives as a `Resized` window event, which the
    /// facade turns into a reposition.
    pub fn request_content_size(&self, size: Size) {
        let _ = self.window.request_inner_size(WinitSize::Logical(LogicalSize::new(
            size.width as f64,
            size.height as f64,
        )));
    }

    /// The screen the callout currently occupies.
    pub fn screen(&self) -> CalloutResult<Screen> {
        Screens::of_window(&self.window).ok_or(CalloutError::NoScreen)
    }

    fn primary_height(&self) -> Option<f32> {
        let primary = self.window.primary_monitor()?;
        let size = primary.size().to_logical::<f64>(primary.scale_factor());
        Some(size.height as f32)
    }
}

impl CalloutSurface for CalloutWindow {
    fn content_size(&self) -> Size {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        Size::new(size.width as f32, size.height as f32)
    }

    fn visible_frame(&self) -> Option<Rect> {
        Screens::of_window(&self.window).map(|screen| screen.visible_frame())
    }

    fn move_to(&self, origin: Point) {
        let Some(primary_height) = self.primary_height() else {
            tracing::debug!(
                target: "horizon_callout::window",
                "no primary monitor, leaving callout in place"
            );
            return;
        };

        let (x, y) = callout_origin_to_desktop(origin, self.content_size().height, primary_height);
        self.window
            .set_outer_position(Position::Logical(LogicalPosition::new(x as f64, y as f64)));
    }

    fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::Relaxed);
        self.window.set_visible(visible);
    }

    fn is_visible(&self) -> bool {
        self.window
            .is_visible()
            .unwrap_or_else(|| self.visible.load(Ordering::Relaxed))
    }
}
