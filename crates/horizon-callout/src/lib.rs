//! Horizon Callout - anchored, edge-avoiding callout windows.
//!
//! A callout is a borderless popup window that attaches to an anchor
//! rectangle on screen, hangs below it (flipping above when the screen
//! edge is in the way), tracks resize events, and dismisses itself on
//! outside clicks, Escape, or window-ordering changes.
//!
//! The positioning core is a pure function ([`resolve_origin`]); the
//! lifecycle around it is a thin controller that re-invokes it with a
//! remembered anchor on every show request and resize event.
//!
//! # Quick start
//!
//! ```
//! use horizon_callout::{resolve_origin, LayoutDirection, Rect, Size};
//!
//! let anchor = Rect::new(100.0, 500.0, 80.0, 24.0);
//! let visible = Rect::new(0.0, 0.0, 1440.0, 875.0);
//!
//! let origin = resolve_origin(
//!     anchor,
//!     Size::new(240.0, 120.0),
//!     None,
//!     visible,
//!     LayoutDirection::LeftToRight,
//! );
//!
//! assert_eq!((origin.x, origin.y), (100.0, 380.0));
//! ```
//!
//! For the full windowed lifecycle, see [`Callout`].

pub mod callout;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod positioner;
pub mod screen;
pub mod watcher;
pub mod window;

pub use callout::Callout;
pub use config::CalloutConfig;
pub use controller::{CalloutController, CalloutSurface};
pub use error::{CalloutError, CalloutResult};
pub use geometry::{Point, Rect, Size};
pub use positioner::{resolve_origin, AnchoredPositioner, LayoutDirection};
pub use screen::{Screen, Screens};
pub use watcher::{DismissReason, DismissVerdict, DismissWatcher, MonitoredEvent};
pub use window::CalloutWindow;

// Re-export the core crate's signal types, which appear in this crate's
// public API.
pub use horizon_callout_core::{ConnectionGuard, ConnectionId, Signal};

// Re-export winit types that users need to drive a callout.
pub use winit::event::WindowEvent;
pub use winit::event_loop::ActiveEventLoop;
pub use winit::window::{WindowId, WindowLevel};
