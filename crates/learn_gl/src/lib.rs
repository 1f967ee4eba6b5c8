//! # Learn GL
//!
//! Sequential OpenGL tutorial examples sharing one GLFW window host.
//!
//! ## Features
//!
//! - **Window Host**: GLFW window + OpenGL context, paced main loop, input dispatch
//! - **Graphics API seam**: every driver call goes through [`render::GraphicsApi`]
//! - **Examples**: triangle, colored triangle and textured quad
//! - **Configuration**: TOML / RON host configuration with defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use learn_gl::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     learn_gl::foundation::logging::init();
//!     let config = HostConfig::default();
//!     let mut example = TriangleExample::new();
//!     WindowHost::create(&config.window, example.title())?.run(&mut example)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod window;
pub mod render;
pub mod assets;
pub mod demos;

mod application;

pub use application::{ExampleError, FrameContext, RenderableExample};

/// Common imports for example binaries
pub mod prelude {
    pub use crate::{
        ExampleError, FrameContext, RenderableExample,
        config::{Config, ConfigError, HostConfig, TextureConfig, WindowConfig},
        demos::{ColoredTriangleExample, TexturedQuadExample, TriangleExample, UvMode},
        input::{InputEvent, InputState, KeyAction, KeyCode, MouseButton},
        render::{GraphicsApi, TextureFilter, TextureWrap},
        window::{HostError, WindowHost, WindowParams},
    };
}
