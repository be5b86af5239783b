//! Application entry point: owns the event loop.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::AppConfig;
use crate::window::WinitApp;

/// The kinetic sculpture application.
pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the event loop until the window closes. Does not return on some
    /// platforms; call last.
    pub fn run(self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        // Poll continuously: the sculpture animates every frame.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut handler = WinitApp::new(self.config);
        if let Err(err) = event_loop.run_app(&mut handler) {
            log::error!("event loop error: {err}");
        }
    }
}
