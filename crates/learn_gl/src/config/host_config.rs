//! Host, window and texture settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Config;
use crate::demos::UvMode;
use crate::render::{TextureFilter, TextureWrap};

/// Where the example binaries look for their configuration
pub const DEFAULT_CONFIG_PATH: &str = "learn_gl.toml";

/// Top-level configuration for an example run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Window and main loop settings
    pub window: WindowConfig,
    /// Texture example settings
    pub texture: TextureConfig,
}

impl Config for HostConfig {}

/// Window and main loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial client width in pixels
    pub width: u32,
    /// Initial client height in pixels
    pub height: u32,
    /// Requested OpenGL context version; `None` picks the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl_version: Option<(u32, u32)>,
    /// Swap on vertical blank
    pub vsync: bool,
    /// Main loop iterations per second, zero to disable pacing
    pub frame_rate: u32,
    /// RGBA color the framebuffer is cleared to each frame
    pub clear_color: [f32; 4],
    /// Show the cursor over the window; hidden and captured otherwise
    pub cursor_visible: bool,
}

impl WindowConfig {
    /// Context version used when none is configured
    ///
    /// macOS tops out at 4.1 core.
    pub const fn default_gl_version() -> (u32, u32) {
        if cfg!(target_os = "macos") {
            (4, 1)
        } else {
            (4, 6)
        }
    }

    /// Context version to request
    pub fn context_version(&self) -> (u32, u32) {
        self.gl_version.unwrap_or_else(Self::default_gl_version)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            gl_version: None,
            vsync: true,
            frame_rate: 60,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            cursor_visible: true,
        }
    }
}

/// Settings for the textured quad example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// How UVs map onto the quad corners
    pub uv_mode: UvMode,
    /// Wrap mode for both axes
    pub wrap: TextureWrap,
    /// Min and mag filter
    pub filter: TextureFilter,
    /// Texture sampled through `texture1`
    pub base_texture: PathBuf,
    /// Texture sampled through `texture2`
    pub mask_texture: PathBuf,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            uv_mode: UvMode::Fit,
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
            base_texture: PathBuf::from("resources/textures/opengl_texture.png"),
            mask_texture: PathBuf::from("resources/textures/circle_mask.png"),
        }
    }
}
