//! Rendering module
//!
//! Thin, typed layer over the OpenGL calls the examples need:
//!
//! - **`api`**: the [`GraphicsApi`] trait, object handles and enums
//! - **`opengl`**: the real driver implementation
//! - **`shader`**, **`buffer`**, **`texture`**: object lifecycles built on the trait
//! - **`mesh`**: vertex records and indexed geometry
//!
//! Every object type here is created from a `&mut dyn GraphicsApi` and
//! released by a consuming `destroy`, so a handle cannot be deleted twice.

mod api;
mod opengl;
pub mod buffer;
pub mod mesh;
pub mod shader;
pub mod texture;

#[cfg(test)]
pub(crate) mod recording;

pub use api::{
    BufferId, BufferTarget, GraphicsApi, PixelFormat, ProgramId, ShaderId, ShaderStage,
    TextureFilter, TextureId, TextureWrap, VertexArrayId, VertexAttribute,
};
pub use buffer::MeshBuffers;
pub use mesh::{ColorVertex, Geometry, GeometryError, PositionVertex, TexturedVertex, VertexFormat, VertexLayout};
pub use opengl::OpenGl;
pub use shader::{ShaderError, ShaderProgram};
pub use texture::{Texture, TextureParams};
