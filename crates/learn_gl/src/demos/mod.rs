//! Tutorial examples runnable by [`crate::window::WindowHost`]
//!
//! - **`triangle`**: one solid-colored triangle
//! - **`colored_triangle`**: per-vertex colors interpolated across a triangle
//! - **`textured_quad`**: two textures blended on an indexed quad

pub mod colored_triangle;
pub mod textured_quad;
pub mod triangle;

pub use colored_triangle::ColoredTriangleExample;
pub use textured_quad::TexturedQuadExample;
pub use triangle::TriangleExample;

use serde::{Deserialize, Serialize};

use crate::render::mesh::Vec2;

/// How texture coordinates are laid over the quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UvMode {
    /// The texture covers the quad exactly once
    #[default]
    Fit,
    /// Only the central half of the texture is shown
    Smaller,
    /// The texture repeats outside [0, 1], exposing the wrap mode
    Bigger,
}

impl UvMode {
    /// UVs for the left-top, right-top, right-bottom and left-bottom corners
    pub fn corners(self) -> [Vec2; 4] {
        let (low, high) = match self {
            Self::Fit => (0.0, 1.0),
            Self::Smaller => (0.25, 0.75),
            Self::Bigger => (-0.5, 1.5),
        };
        [
            Vec2::new(low, high),
            Vec2::new(high, high),
            Vec2::new(high, low),
            Vec2::new(low, low),
        ]
    }
}
