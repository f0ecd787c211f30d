//! Anchored callout example.
//!
//! Opens a parent window with a callout attached to a pretend toolbar
//! button near its top-left corner. Press `C` to toggle the callout;
//! clicking anywhere outside it, pressing Escape, or switching focus
//! dismisses it.
//!
//! Run with: cargo run -p horizon-callout --example anchored_callout

use std::sync::Arc;

use horizon_callout::screen::desktop_rect_to_callout;
use horizon_callout::{Callout, CalloutConfig, Rect, Screens};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::Key;
use winit::window::{Window, WindowId};

struct App {
    window: Option<Arc<Window>>,
    callout: Option<Callout>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            callout: None,
        }
    }

    /// The anchor rectangle: a pretend toolbar button just below the
    /// parent window's top-left corner, in callout space.
    fn anchor(&self) -> Option<Rect> {
        let window = self.window.as_ref()?;

        let primary_height = Screens::primary(window)?.frame().height();

        let pos = window
            .outer_position()
            .ok()?
            .to_logical::<f64>(window.scale_factor());

        Some(desktop_rect_to_callout(
            pos.x as f32 + 16.0,
            pos.y as f32 + 48.0,
            96.0,
            24.0,
            primary_height,
        ))
    }

    fn toggle_callout(&mut self) {
        let anchor = self.anchor();
        let Some(callout) = &mut self.callout else {
            return;
        };

        if callout.is_visible() {
            callout.hide();
        } else if let Some(anchor) = anchor {
            callout.show_anchored(anchor);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Horizon Callout - press C to toggle")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        let window = Arc::new(event_loop.create_window(attrs).expect("Failed to create window"));

        let config = CalloutConfig::new()
            .with_content_size(240, 120)
            .with_reserved_height(300.0);

        let callout =
            Callout::create(event_loop, config, window.id()).expect("Failed to create callout");

        callout.dismissed.connect(|reason| {
            println!("callout dismissed: {reason:?}");
        });
        callout.controller().moved.connect(|origin| {
            println!("callout moved to ({}, {})", origin.x, origin.y);
        });

        self.window = Some(window);
        self.callout = Some(callout);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        // The callout sees every event first; it consumes the Escape press
        // that dismisses it.
        if let Some(callout) = &mut self.callout
            && callout.handle_window_event(id, &event)
        {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if let Key::Character(c) = &event.logical_key
                    && c.as_str().eq_ignore_ascii_case("c")
                {
                    self.toggle_callout();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = App::new();

    event_loop.run_app(&mut app).expect("Event loop error");
}
