//! Thread safety verification utilities for Horizon Callout.
//!
//! This module provides debug assertions and runtime checks to help verify
//! that callout operations are performed on the correct thread. A callout
//! mutates live window state, so its show/hide/reposition paths must run on
//! the thread that owns the windowing connection (the UI thread).
//!
//! # Usage
//!
//! Register the UI thread once at startup (creating a callout does this for
//! you), then use the provided macros and functions to verify affinity:
//!
//! ```ignore
//! use horizon_callout_core::{debug_assert_ui_thread, is_ui_thread};
//!
//! fn reposition(&self) {
//!     // Panic in debug builds if not on the UI thread
//!     debug_assert_ui_thread!();
//!
//!     // ... move the window ...
//! }
//! ```
//!
//! Until the UI thread has been registered, all checks pass; this keeps
//! pure computations (like the positioner) usable from any test thread.

use std::sync::OnceLock;
use std::thread::ThreadId;

/// Global storage for the UI thread ID.
static UI_THREAD_ID: OnceLock<ThreadId> = OnceLock::new();

/// Register the current thread as the UI thread.
///
/// Calling this again from the same thread is a no-op.
///
/// # Panics
///
/// Panics if the UI thread was already registered from a different thread.
pub fn set_ui_thread() {
    let current = std::thread::current().id();
    if UI_THREAD_ID.set(current).is_err() && UI_THREAD_ID.get() != Some(&current) {
        panic!(
            "set_ui_thread() called from different thread than original. \
             The UI thread ID can only be set once."
        );
    }
}

/// Get the UI thread ID if it has been registered.
#[inline]
pub fn ui_thread_id() -> Option<ThreadId> {
    UI_THREAD_ID.get().copied()
}

/// Check if the current thread is the UI thread.
///
/// Returns `true` if we are on the UI thread, or if no UI thread has been
/// registered yet (graceful fallback during early initialization and in
/// tests).
#[inline]
pub fn is_ui_thread() -> bool {
    match UI_THREAD_ID.get() {
        Some(&ui_id) => std::thread::current().id() == ui_id,
        None => true,
    }
}

/// Panics if the current thread is not the UI thread.
///
/// This is always active. Use `debug_assert_ui_thread!()` for checks that
/// should only run in debug builds.
#[macro_export]
macro_rules! assert_ui_thread {
    () => {
        $crate::assert_ui_thread!("operation must be performed on the UI thread")
    };
    ($msg:expr) => {
        if !$crate::thread_check::is_ui_thread() {
            $crate::thread_check::panic_not_ui_thread($msg, file!(), line!());
        }
    };
}

/// Debug-only assertion that panics if not on the UI thread.
///
/// This macro is a no-op in release builds, making it suitable for liberal
/// use throughout lifecycle code without affecting production performance.
#[macro_export]
macro_rules! debug_assert_ui_thread {
    () => {
        #[cfg(debug_assertions)]
        $crate::assert_ui_thread!()
    };
    ($msg:expr) => {
        #[cfg(debug_assertions)]
        $crate::assert_ui_thread!($msg)
    };
}

/// Internal function to generate the panic message for thread violations.
#[cold]
#[inline(never)]
#[doc(hidden)]
pub fn panic_not_ui_thread(msg: &str, file: &str, line: u32) -> ! {
    let current = std::thread::current();
    let current_name = current.name().unwrap_or("<unnamed>").to_string();
    let ui_info = match ui_thread_id() {
        Some(id) => format!("UI thread ID: {id:?}"),
        None => "UI thread not yet registered".to_string(),
    };

    panic!(
        "thread safety violation: {msg}\n\
         Location: {file}:{line}\n\
         Current thread: \"{current_name}\" (ID: {:?})\n\
         {ui_info}\n\
         Callout windows must be shown, hidden, and repositioned on the \
         thread that owns the windowing connection.",
        current.id()
    )
}

/// Thread affinity tracker for objects.
///
/// Records the thread on which an object was created and provides methods
/// to verify that subsequent operations occur on the same thread.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl ThreadAffinity {
    /// Create an affinity bound to the current thread.
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// The thread this affinity is bound to.
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check whether the current thread matches.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Panic if the current thread does not match.
    pub fn assert_same_thread(&self) {
        assert!(
            self.is_same_thread(),
            "operation performed on thread {:?}, but this object is bound to thread {:?}",
            std::thread::current().id(),
            self.thread_id
        );
    }

    /// Debug-only variant of [`assert_same_thread`](Self::assert_same_thread).
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }
}
