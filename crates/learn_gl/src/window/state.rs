//! Window state driven by input events
//!
//! Kept free of GLFW handles so event handling can be tested without a display.

use super::WindowParams;
use crate::input::{InputEvent, InputState, KeyAction, KeyCode};

/// What the host has to do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Nothing beyond the state update
    None,
    /// Framebuffer size changed; update the viewport
    Resized {
        /// New width
        width: u32,
        /// New height
        height: u32,
    },
    /// The cancel key was pressed; close the window
    CloseRequested,
}

/// Window dimensions, input state and close request
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// Current window parameters
    pub params: WindowParams,
    /// Current input state
    pub input: InputState,
    close_requested: bool,
}

impl WindowState {
    /// Create state for a freshly opened window
    pub fn new(params: WindowParams) -> Self {
        Self {
            params,
            input: InputState::new(),
            close_requested: false,
        }
    }

    /// Whether the cancel key has asked the loop to stop
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Apply one event and report what the host must do about it
    pub fn handle_event(&mut self, event: &InputEvent) -> StateChange {
        match *event {
            InputEvent::FramebufferResized { width, height } => {
                self.params.width = width;
                self.params.height = height;
                log::debug!("Framebuffer resized to {}x{}", width, height);
                StateChange::Resized { width, height }
            }
            InputEvent::Key { key: KeyCode::CANCEL, action: KeyAction::Press, .. } => {
                self.input.apply(event);
                self.close_requested = true;
                StateChange::CloseRequested
            }
            _ => {
                self.input.apply(event);
                StateChange::None
            }
        }
    }
}
