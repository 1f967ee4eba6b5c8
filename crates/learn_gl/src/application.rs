//! Example trait and lifecycle management

use thiserror::Error;

use crate::assets::AssetError;
use crate::input::{InputEvent, InputState};
use crate::render::{GeometryError, GraphicsApi, ShaderError};
use crate::window::WindowParams;

/// Example lifecycle trait
///
/// Implement this trait to create an example the [`crate::window::WindowHost`]
/// can run. The host calls `initialize` once after the context exists,
/// `render` every frame and `clean_up` exactly once on shutdown, including
/// after a failed `initialize`.
pub trait RenderableExample {
    /// Window title
    fn title(&self) -> &str;

    /// Create GPU resources
    ///
    /// On error the host still calls [`RenderableExample::clean_up`], so
    /// anything created before the failure must be reachable from `self`.
    fn initialize(&mut self, gl: &mut dyn GraphicsApi) -> Result<(), ExampleError>;

    /// Submit draw calls for one frame
    ///
    /// The framebuffer has already been cleared. Scroll input accumulates
    /// until the example calls [`InputState::reset_scroll_offset`] on
    /// `frame.input`.
    fn render(&mut self, gl: &mut dyn GraphicsApi, frame: &mut FrameContext<'_>);

    /// Release every GPU resource created by `initialize`
    fn clean_up(&mut self, gl: &mut dyn GraphicsApi);

    /// Handle an input event after the host has processed it
    fn handle_input(&mut self, _event: &InputEvent) {}
}

/// Per-frame information passed to [`RenderableExample::render`]
#[derive(Debug)]
pub struct FrameContext<'a> {
    /// Seconds since the previous frame started
    pub delta_time: f32,
    /// Zero-based frame number
    pub frame_index: u64,
    /// Current window dimensions
    pub window: &'a WindowParams,
    /// Current input state
    pub input: &'a mut InputState,
}

/// Example-level errors
#[derive(Error, Debug)]
pub enum ExampleError {
    /// Shader compile or link failure
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Geometry is not a valid triangle list
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Custom example error
    #[error("Example error: {0}")]
    Custom(String),
}
