//! Core systems for Horizon Callout.
//!
//! This crate provides the foundation the callout library is built on:
//!
//! - **Signal/Slot System**: Type-safe notifications for lifecycle events
//!   (shown, hidden, dismissed) and for resize-observation hooks
//! - **UI-Thread Checks**: Debug assertions that verify callout operations
//!   stay on the thread that owns the windowing state
//!
//! # Signal Example
//!
//! ```
//! use horizon_callout_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let dismissed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = dismissed.connect(|reason| {
//!     println!("Dismissed: {}", reason);
//! });
//!
//! // Emit the signal
//! dismissed.emit("escape".to_string());
//!
//! // Disconnect when done
//! dismissed.disconnect(conn_id);
//! ```
//!
//! # Threading Model
//!
//! Callouts are UI objects: every state transition happens synchronously on
//! the UI thread in response to a show request or a window event. Signals
//! here therefore deliver directly, in the emitting thread, with no queuing.
//! Register the UI thread once at startup and the debug assertions will
//! catch accidental cross-thread use:
//!
//! ```
//! horizon_callout_core::thread_check::set_ui_thread();
//! assert!(horizon_callout_core::is_ui_thread());
//! ```

pub mod signal;
pub mod thread_check;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::{is_ui_thread, set_ui_thread, ThreadAffinity};
