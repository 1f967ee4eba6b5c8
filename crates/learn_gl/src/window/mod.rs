//! Window management subsystem
//!
//! # Module Organization
//!
//! - **`host`**: [`WindowHost`], the GLFW window and its OpenGL context
//! - **`main_loop`**: [`run_example`], the example lifecycle over any [`FrameSurface`]
//! - **`state`**: [`WindowState`], window dimensions and input updated from events
//!
//! GLFW reports input through per-window callbacks. glfw-rs installs those
//! callbacks itself and queues the events on a channel owned by the window, so
//! the host drains that channel after polling instead of recovering an
//! instance from a user pointer.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ─▶ WindowCreated ─▶ Running ─▶ ShuttingDown ─▶ Terminated
//!                        │                          ▲
//!                        └──── initialize failed ───┘
//! ```

mod host;
mod main_loop;
mod state;

pub use host::WindowHost;
pub use main_loop::{run_example, FrameSurface, LoopSettings};
pub use state::{StateChange, WindowState};

use thiserror::Error;

use crate::application::ExampleError;

/// Window dimensions and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowParams {
    /// Framebuffer width in pixels
    pub width: u32,
    /// Framebuffer height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl WindowParams {
    /// Create window parameters
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    /// Width over height, or 1.0 for a degenerate framebuffer
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Host lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    /// Nothing created yet
    Uninitialized,
    /// Window and context exist, example not initialized
    WindowCreated,
    /// Main loop active
    Running,
    /// Example resources being released
    ShuttingDown,
    /// Everything released
    Terminated,
}

impl HostPhase {
    /// Whether moving from `self` to `next` is allowed
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::WindowCreated)
                | (Self::WindowCreated, Self::Running)
                | (Self::WindowCreated, Self::ShuttingDown)
                | (Self::Running, Self::ShuttingDown)
                | (Self::ShuttingDown, Self::Terminated)
        )
    }

    /// Move to `next` if allowed
    pub fn transition(&mut self, next: Self) -> Result<(), WindowError> {
        if !self.can_transition_to(next) {
            return Err(WindowError::InvalidTransition { from: *self, to: next });
        }
        log::debug!("Host phase {:?} -> {:?}", self, next);
        *self = next;
        Ok(())
    }
}

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not initialize
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window or context creation returned nothing
    #[error("Window creation failed")]
    CreationFailed,

    /// OpenGL entry points could not be resolved
    #[error("Failed to load OpenGL function pointers")]
    GlLoadFailed,

    /// Lifecycle step out of order
    #[error("Invalid host phase transition {from:?} -> {to:?}")]
    InvalidTransition {
        /// Current phase
        from: HostPhase,
        /// Requested phase
        to: HostPhase,
    },
}

/// Errors returned by [`WindowHost::run`]
#[derive(Error, Debug)]
pub enum HostError {
    /// Window or lifecycle error
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// The example failed to initialize
    #[error("Example error: {0}")]
    Example(#[from] ExampleError),
}
