//! Screen queries and coordinate conversion.
//!
//! The positioner works in callout space: y-up, logical units, origin at
//! the bottom-left of the primary screen. The windowing system hands out
//! monitor geometry in y-down desktop coordinates with the origin at the
//! primary screen's top-left. This module owns both the conversion math
//! and the per-screen visible frame ("work area") query.
//!
//! On macOS the visible frame excludes the menu bar and the Dock, queried
//! through `NSScreen`. On other platforms there is no portable work-area
//! query, so the visible frame equals the full monitor bounds.

use winit::monitor::MonitorHandle;
use winit::window::Window;

use crate::geometry::{Point, Rect};

/// Convert a desktop rectangle (y-down, top-left origin) into callout
/// space (y-up, bottom-left origin).
///
/// `primary_height` is the logical height of the primary screen, which
/// anchors the flip in both directions.
pub fn desktop_rect_to_callout(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    primary_height: f32,
) -> Rect {
    Rect::new(x, primary_height - (y + height), width, height)
}

/// Convert a callout-space window origin (minimum corner of a window of
/// the given height) into the desktop position of the window's top-left
/// corner.
pub fn callout_origin_to_desktop(origin: Point, height: f32, primary_height: f32) -> (f32, f32) {
    (origin.x, primary_height - (origin.y + height))
}

/// A connected display, described in callout space.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Full screen bounds.
    frame: Rect,
    /// Usable bounds excluding system UI chrome (menu bar, Dock).
    visible_frame: Rect,
    /// DPI scale factor.
    scale_factor: f64,
    /// Whether this is the primary screen.
    primary: bool,
}

impl Screen {
    fn new(frame: Rect, visible_frame: Rect, scale_factor: f64, primary: bool) -> Self {
        Self {
            frame,
            visible_frame,
            scale_factor,
            primary,
        }
    }

    /// Create a screen for testing purposes.
    ///
    /// This is public for use in tests within the crate.
    #[doc(hidden)]
    pub fn new_for_testing(frame: Rect, visible_frame: Rect, scale_factor: f64, primary: bool) -> Self {
        Self::new(frame, visible_frame, scale_factor, primary)
    }

    /// Get the full screen bounds.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Get the usable bounds excluding system UI chrome.
    pub fn visible_frame(&self) -> Rect {
        self.visible_frame
    }

    /// Get the DPI scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Check if this is the primary screen.
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Check if a callout-space point lies on this screen.
    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }
}

/// Screen enumeration utilities.
///
/// Monitor handles are only reachable through a live window, so every
/// query here starts from one.
pub struct Screens;

impl Screens {
    /// Get all screens reachable from the given window.
    ///
    /// The primary screen is first in the list.
    pub fn from_window(window: &Window) -> Vec<Screen> {
        let primary = window.primary_monitor();
        let mut screens: Vec<Screen> = window
            .available_monitors()
            .map(|monitor| Self::from_monitor(&monitor, primary.as_ref()))
            .collect();
        screens.sort_by(|a, b| b.primary.cmp(&a.primary));
        screens
    }

    /// Get the screen the given window currently occupies.
    ///
    /// Returns `None` when the windowing system cannot resolve a monitor
    /// (e.g. the window is not yet mapped).
    pub fn of_window(window: &Window) -> Option<Screen> {
        let monitor = window.current_monitor()?;
        let primary = window.primary_monitor();
        Some(Self::from_monitor(&monitor, primary.as_ref()))
    }

    /// Get the primary screen.
    pub fn primary(window: &Window) -> Option<Screen> {
        let primary = window.primary_monitor()?;
        Some(Self::from_monitor(&primary, Some(&primary)))
    }

    fn from_monitor(monitor: &MonitorHandle, primary: Option<&MonitorHandle>) -> Screen {
        // With no primary monitor reported (Wayland), the monitor itself
        // anchors the flip, which is exact for single-screen setups.
        let reference = primary.unwrap_or(monitor);
        let primary_height = logical_height(reference);

        let scale = monitor.scale_factor();
        let position = monitor.position().to_logical::<f64>(scale);
        let size = monitor.size().to_logical::<f64>(scale);

        let frame = desktop_rect_to_callout(
            position.x as f32,
            position.y as f32,
            size.width as f32,
            size.height as f32,
            primary_height,
        );
        let visible_frame = platform::refine_visible_frame(frame);
        let is_primary = primary.is_some_and(|p| *p == *monitor);

        Screen::new(frame, visible_frame, scale, is_primary)
    }
}

fn logical_height(monitor: &MonitorHandle) -> f32 {
    monitor.size().to_logical::<f64>(monitor.scale_factor()).height as f32
}

#[cfg(target_os = "macos")]
mod platform {
    use objc2::MainThreadMarker;
    use objc2_app_kit::NSScreen;

    use crate::geometry::Rect;

    /// Replace a full-frame estimate with the matching `NSScreen`'s actual
    /// visible frame.
    ///
    /// `NSScreen` frames are already y-up in the primary-relative space
    /// this crate uses, so the lookup is a direct comparison. Falls back to
    /// the full frame when no screen matches or when called off the main
    /// thread (AppKit refuses screen enumeration there).
    pub fn refine_visible_frame(frame: Rect) -> Rect {
        let Some(mtm) = MainThreadMarker::new() else {
            return frame;
        };

        for screen in NSScreen::screens(mtm).iter() {
            let f = screen.frame();
            let screen_frame = Rect::new(
                f.origin.x as f32,
                f.origin.y as f32,
                f.size.width as f32,
                f.size.height as f32,
            );
            if rects_close(screen_frame, frame) {
                let v = screen.visibleFrame();
                return Rect::new(
                    v.origin.x as f32,
                    v.origin.y as f32,
                    v.size.width as f32,
                    v.size.height as f32,
                );
            }
        }

        frame
    }

    // Scale-factor rounding can put the converted monitor frame a fraction
    // of a point off the NSScreen frame.
    fn rects_close(a: Rect, b: Rect) -> bool {
        const TOLERANCE: f32 = 1.0;
        (a.min_x() - b.min_x()).abs() <= TOLERANCE
            && (a.min_y() - b.min_y()).abs() <= TOLERANCE
            && (a.width() - b.width()).abs() <= TOLERANCE
            && (a.height() - b.height()).abs() <= TOLERANCE
    }
}

#[cfg(not(target_os = "macos"))]
mod platform {
    use crate::geometry::Rect;

    /// No portable work-area query: the visible frame is the full frame.
    pub fn refine_visible_frame(frame: Rect) -> Rect {
        frame
    }
}
