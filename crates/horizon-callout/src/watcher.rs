//! Dismissal watching for visible callouts.
//!
//! While a callout is shown, the application feeds it the window events it
//! receives. This module decides which of those events dismiss the callout:
//! pointer presses landing in any window other than the callout itself,
//! Escape pressed in the parent window, and window focus/ordering churn.
//!
//! The decision is a pure classification over window identities and event
//! kinds, so it is fully testable without a display server. The
//! [`Callout`](crate::Callout) facade applies the verdicts.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

/// Why a callout was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// A pointer button was pressed in a window other than the callout.
    PointerPressedOutside,
    /// Escape was pressed in the parent window.
    EscapeKey,
    /// Window focus or ordering changed around the callout (another window
    /// was activated, or the application was deactivated).
    WindowOrdering,
}

/// The outcome of classifying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissVerdict {
    /// Why the callout should be dismissed.
    pub reason: DismissReason,
    /// Whether the triggering event should be swallowed instead of being
    /// handed on to the rest of the application.
    ///
    /// Only the Escape press is swallowed; outside clicks and focus
    /// changes keep flowing so the click still lands where the user aimed.
    pub consume: bool,
}

/// The subset of window events the watcher cares about, distilled from
/// `winit::event::WindowEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitoredEvent {
    /// A pointer button (any button) was pressed.
    PointerPressed,
    /// The Escape key was pressed.
    EscapePressed,
    /// The window gained or lost focus.
    FocusChanged {
        /// `true` when focus was gained.
        gained: bool,
    },
}

impl MonitoredEvent {
    /// Distill a winit window event into a monitored event.
    ///
    /// Returns `None` for events the watcher ignores (moves, redraws,
    /// key releases, non-Escape keys, ...).
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => Some(Self::PointerPressed),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                Some(Self::EscapePressed)
            }
            WindowEvent::Focused(gained) => Some(Self::FocusChanged { gained: *gained }),
            _ => None,
        }
    }
}

/// Decides which window events dismiss a shown callout.
///
/// Holds the two window identities that matter: the callout window itself
/// and its parent. Everything else on screen is "outside".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissWatcher {
    callout: WindowId,
    parent: WindowId,
}

impl DismissWatcher {
    /// Create a watcher for the given callout/parent pair.
    pub fn new(callout: WindowId, parent: WindowId) -> Self {
        Self { callout, parent }
    }

    /// The callout window being watched.
    pub fn callout(&self) -> WindowId {
        self.callout
    }

    /// The parent window of the callout.
    pub fn parent(&self) -> WindowId {
        self.parent
    }

    /// Classify a winit window event delivered to `source`.
    ///
    /// Convenience wrapper over [`classify`](Self::classify).
    pub fn classify_window_event(
        &self,
        source: WindowId,
        event: &WindowEvent,
    ) -> Option<DismissVerdict> {
        MonitoredEvent::from_window_event(event)
            .and_then(|monitored| self.classify(source, monitored))
    }

    /// Classify a monitored event delivered to `source`.
    ///
    /// Returns the dismissal verdict, or `None` when the event leaves the
    /// callout alone:
    ///
    /// - pointer presses inside the callout window never dismiss;
    /// - Escape only dismisses (and is consumed) when pressed in the
    ///   parent window;
    /// - focus changes on the callout window itself are ignored, focus
    ///   changes anywhere else dismiss.
    pub fn classify(&self, source: WindowId, event: MonitoredEvent) -> Option<DismissVerdict> {
        match event {
            MonitoredEvent::PointerPressed if source != self.callout => Some(DismissVerdict {
                reason: DismissReason::PointerPressedOutside,
                consume: false,
            }),
            MonitoredEvent::EscapePressed if source == self.parent => Some(DismissVerdict {
                reason: DismissReason::EscapeKey,
                consume: true,
            }),
            MonitoredEvent::FocusChanged { .. } if source != self.callout => {
                Some(DismissVerdict {
                    reason: DismissReason::WindowOrdering,
                    consume: false,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::transmute;

    // Helper to create a fake WindowId for testing.
    fn fake_id(n: u64) -> WindowId {
        unsafe { transmute(n) }
    }

    fn watcher() -> DismissWatcher {
        DismissWatcher::new(fake_id(1), fake_id(2))
    }

    #[test]
    fn test_pointer_press_outside_dismisses() {
        let w = watcher();

        // In the parent window.
        let verdict = w.classify(fake_id(2), MonitoredEvent::PointerPressed).unwrap();
        assert_eq!(verdict.reason, DismissReason::PointerPressedOutside);
        assert!(!verdict.consume);

        // In some unrelated window.
        let verdict = w.classify(fake_id(9), MonitoredEvent::PointerPressed).unwrap();
        assert_eq!(verdict.reason, DismissReason::PointerPressedOutside);
    }

    #[test]
    fn test_pointer_press_inside_callout_ignored() {
        let w = watcher();
        assert_eq!(w.classify(fake_id(1), MonitoredEvent::PointerPressed), None);
    }

    #[test]
    fn test_escape_in_parent_dismisses_and_consumes() {
        let w = watcher();
        let verdict = w.classify(fake_id(2), MonitoredEvent::EscapePressed).unwrap();
        assert_eq!(verdict.reason, DismissReason::EscapeKey);
        assert!(verdict.consume);
    }

    #[test]
    fn test_escape_elsewhere_ignored() {
        let w = watcher();
        // In the callout itself.
        assert_eq!(w.classify(fake_id(1), MonitoredEvent::EscapePressed), None);
        // In an unrelated window.
        assert_eq!(w.classify(fake_id(7), MonitoredEvent::EscapePressed), None);
    }

    #[test]
    fn test_focus_churn_dismisses() {
        let w = watcher();

        // Parent losing focus (app deactivated, another app's window raised).
        let verdict = w
            .classify(fake_id(2), MonitoredEvent::FocusChanged { gained: false })
            .unwrap();
        assert_eq!(verdict.reason, DismissReason::WindowOrdering);
        assert!(!verdict.consume);

        // Another window of this app becoming focused.
        let verdict = w
            .classify(fake_id(5), MonitoredEvent::FocusChanged { gained: true })
            .unwrap();
        assert_eq!(verdict.reason, DismissReason::WindowOrdering);
    }

    #[test]
    fn test_focus_change_on_callout_ignored() {
        let w = watcher();
        assert_eq!(
            w.classify(fake_id(1), MonitoredEvent::FocusChanged { gained: true }),
            None
        );
        assert_eq!(
            w.classify(fake_id(1), MonitoredEvent::FocusChanged { gained: false }),
            None
        );
    }

    #[test]
    fn test_from_window_event_mouse_press() {
        let device = unsafe { winit::event::DeviceId::dummy() };

        let pressed = WindowEvent::MouseInput {
            device_id: device,
            state: ElementState::Pressed,
            button: winit::event::MouseButton::Right,
        };
        assert_eq!(
            MonitoredEvent::from_window_event(&pressed),
            Some(MonitoredEvent::PointerPressed)
        );

        let released = WindowEvent::MouseInput {
            device_id: device,
            state: ElementState::Released,
            button: winit::event::MouseButton::Left,
        };
        assert_eq!(MonitoredEvent::from_window_event(&released), None);
    }

    #[test]
    fn test_from_window_event_focus() {
        assert_eq!(
            MonitoredEvent::from_window_event(&WindowEvent::Focused(true)),
            Some(MonitoredEvent::FocusChanged { gained: true })
        );
    }

    #[test]
    fn test_from_window_event_ignores_unrelated() {
        let event = WindowEvent::Moved(winit::dpi::PhysicalPosition::new(10, 10));
        assert_eq!(MonitoredEvent::from_window_event(&event), None);
    }
}
