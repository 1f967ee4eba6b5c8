//! Graphics driver interface
//!
//! Every OpenGL call the examples make goes through [`GraphicsApi`]. The real
//! implementation is [`super::OpenGl`]; tests substitute a recording double so
//! resource lifecycles can be checked without a context.

use std::ffi::CStr;

use serde::{Deserialize, Serialize};

macro_rules! gl_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u32);

        impl $name {
            /// Driver object name
            pub const fn raw(self) -> u32 {
                self.0
            }
        }
    };
}

gl_handle!(
    /// Shader object name
    ShaderId
);
gl_handle!(
    /// Program object name
    ProgramId
);
gl_handle!(
    /// Vertex array object name
    VertexArrayId
);
gl_handle!(
    /// Buffer object name
    BufferId
);
gl_handle!(
    /// Texture object name
    TextureId
);

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "VERTEX"),
            Self::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

/// Buffer binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`
    Array,
    /// `GL_ELEMENT_ARRAY_BUFFER`
    ElementArray,
}

/// One float vertex attribute within an interleaved vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader `layout (location = N)`
    pub location: u32,
    /// Number of `f32` components
    pub components: i32,
    /// Byte offset inside the vertex
    pub offset: usize,
}

/// Texel layout of uploaded image data, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Single channel
    Red,
    /// Three channels
    Rgb,
    /// Four channels
    Rgba,
}

impl PixelFormat {
    /// Format for a decoded image with `channels` channels
    ///
    /// Only 1, 3 and 4 channel images are supported.
    pub const fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            1 => Some(Self::Red),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }

    /// Bytes per texel
    pub const fn channels(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureWrap {
    /// Tile the image
    Repeat,
    /// Tile, mirroring every other copy
    MirroredRepeat,
    /// Stretch the edge texels
    ClampToEdge,
    /// Use a fixed border color outside `[0, 1]`
    ClampToBorder,
}

/// Texture sampling filter, applied to minification and magnification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureFilter {
    /// Nearest texel
    Nearest,
    /// Bilinear
    Linear,
}

/// The subset of OpenGL used by the examples
///
/// Object creation returns typed handles; binding calls take `None` to unbind.
/// Texture calls operate on the texture currently bound to `TEXTURE_2D` on the
/// active unit, buffer uploads on the buffer bound to the given target.
pub trait GraphicsApi {
    /// Set the viewport rectangle
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32);
    /// Clear color and depth buffers
    fn clear(&mut self, color: [f32; 4]);

    /// Create a shader object
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId;
    /// Set source and compile; returns the compile status
    fn compile_shader(&mut self, shader: ShaderId, source: &CStr) -> bool;
    /// Info log of a shader, truncated to `capacity` bytes
    fn shader_info_log(&mut self, shader: ShaderId, capacity: usize) -> String;
    /// Delete a shader object
    fn delete_shader(&mut self, shader: ShaderId);

    /// Create a program object
    fn create_program(&mut self) -> ProgramId;
    /// Attach a compiled shader
    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId);
    /// Link; returns the link status
    fn link_program(&mut self, program: ProgramId) -> bool;
    /// Info log of a program, truncated to `capacity` bytes
    fn program_info_log(&mut self, program: ProgramId, capacity: usize) -> String;
    /// Make a program current
    fn use_program(&mut self, program: Option<ProgramId>);
    /// Location of a uniform, `None` if inactive or missing
    fn uniform_location(&mut self, program: ProgramId, name: &CStr) -> Option<i32>;
    /// Set an `int`/sampler uniform on the current program
    fn set_uniform_i32(&mut self, location: i32, value: i32);
    /// Delete a program object
    fn delete_program(&mut self, program: ProgramId);

    /// Create a vertex array object
    fn create_vertex_array(&mut self) -> VertexArrayId;
    /// Bind a vertex array object
    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayId>);
    /// Delete a vertex array object
    fn delete_vertex_array(&mut self, vertex_array: VertexArrayId);

    /// Create a buffer object
    fn create_buffer(&mut self) -> BufferId;
    /// Bind a buffer object
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferId>);
    /// Upload bytes to the bound buffer with `STATIC_DRAW` usage
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8]);
    /// Describe and enable a float attribute of the bound array buffer
    fn vertex_attribute(&mut self, attribute: VertexAttribute, stride: usize);
    /// Delete a buffer object
    fn delete_buffer(&mut self, buffer: BufferId);

    /// Create a texture object
    fn create_texture(&mut self) -> TextureId;
    /// Select the active texture unit
    fn active_texture(&mut self, unit: u32);
    /// Bind a 2D texture to the active unit
    fn bind_texture(&mut self, texture: Option<TextureId>);
    /// Wrap mode for S and T
    fn set_texture_wrap(&mut self, wrap: TextureWrap);
    /// Min and mag filter
    fn set_texture_filter(&mut self, filter: TextureFilter);
    /// Border color for [`TextureWrap::ClampToBorder`]
    fn set_texture_border_color(&mut self, color: [f32; 4]);
    /// Upload level 0 of the bound texture
    fn tex_image_2d(&mut self, format: PixelFormat, width: u32, height: u32, pixels: &[u8]);
    /// Generate mipmaps for the bound texture
    fn generate_mipmap(&mut self);
    /// Delete a texture object
    fn delete_texture(&mut self, texture: TextureId);

    /// Draw `index_count` `u32` indices from the bound element buffer as triangles
    fn draw_indexed_triangles(&mut self, index_count: usize);
}
