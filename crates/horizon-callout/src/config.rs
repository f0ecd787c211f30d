//! Callout window configuration and builder.
//!
//! This module provides `CalloutConfig`, a builder for the windowing
//! attributes of a callout and for the placement hints the controller
//! consumes (reserved height, layout direction).

use winit::dpi::{LogicalSize, Size as WinitSize};
use winit::window::{Window, WindowAttributes, WindowButtons, WindowLevel};

use crate::positioner::LayoutDirection;

/// Configuration for creating a callout window.
///
/// A callout window is a borderless, transparent, non-resizable popup that
/// floats above normal windows, never appears in the taskbar-equivalent
/// surfaces, and starts hidden until it is shown anchored to something.
///
/// # Example
///
/// ```
/// use horizon_callout::{CalloutConfig, LayoutDirection};
///
/// let config = CalloutConfig::new()
///     .with_content_size(240, 120)
///     .with_reserved_height(400.0)
///     .with_direction(LayoutDirection::LeftToRight);
///
/// let attrs = config.to_window_attributes();
/// ```
#[derive(Debug, Clone)]
pub struct CalloutConfig {
    /// Initial content size (width, height) in logical pixels.
    content_size: Option<(u32, u32)>,
    /// Minimum height reserved for the flip decision.
    reserved_height: Option<f32>,
    /// Horizontal layout direction.
    direction: LayoutDirection,
    /// Window level (z-ordering). Defaults to always-on-top.
    level: WindowLevel,
    /// Whether the platform draws a drop shadow behind the callout.
    shadow: bool,
}

impl CalloutConfig {
    /// Create a callout configuration with default settings.
    pub fn new() -> Self {
        Self {
            content_size: None,
            reserved_height: None,
            direction: LayoutDirection::default(),
            level: WindowLevel::AlwaysOnTop,
            shadow: true,
        }
    }

    /// Set the initial content size in logical pixels.
    pub fn with_content_size(mut self, width: u32, height: u32) -> Self {
        self.content_size = Some((width, height));
        self
    }

    /// Reserve a minimum height for the screen-edge-avoidance decision.
    ///
    /// The callout window is never sized to this; it only keeps the
    /// placement stable when content is expected to grow. See
    /// [`resolve_origin`](crate::positioner::resolve_origin).
    pub fn with_reserved_height(mut self, height: f32) -> Self {
        self.reserved_height = Some(height);
        self
    }

    /// Set the horizontal layout direction.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the window level (z-ordering).
    pub fn with_level(mut self, level: WindowLevel) -> Self {
        self.level = level;
        self
    }

    /// Set whether the platform draws a drop shadow behind the callout.
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Get the initial content size, if set.
    pub fn content_size(&self) -> Option<(u32, u32)> {
        self.content_size
    }

    /// Get the reserved height hint.
    pub fn reserved_height(&self) -> Option<f32> {
        self.reserved_height
    }

    /// Get the layout direction.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Get the window level.
    pub fn level(&self) -> WindowLevel {
        self.level
    }

    /// Check whether the callout requests a platform drop shadow.
    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    /// Convert to winit `WindowAttributes`.
    ///
    /// The window is created hidden; [`crate::Callout::show_anchored`]
    /// makes it visible once it has been positioned.
    pub fn to_window_attributes(&self) -> WindowAttributes {
        let mut attrs = Window::default_attributes()
            .with_title("")
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_visible(false)
            .with_window_level(self.level)
            .with_enabled_buttons(WindowButtons::empty());

        if let Some((w, h)) = self.content_size {
            attrs = attrs
                .with_inner_size(WinitSize::Logical(LogicalSize::new(w as f64, h as f64)));
        }

        #[cfg(target_os = "macos")]
        {
            use winit::platform::macos::WindowAttributesExtMacOS;
            attrs = attrs.with_has_shadow(self.shadow);
        }

        attrs
    }
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self::new()
    }
}
