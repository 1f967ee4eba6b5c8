//! [`GraphicsApi`] over the loaded OpenGL function pointers
//!
//! All `unsafe` driver calls live in this file. They are sound as long as a
//! context is current on the calling thread, which [`OpenGl::load_with`]
//! requires and the window host guarantees for the lifetime of the value.

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLsizeiptr, GLuint};

use super::api::{
    BufferId, BufferTarget, GraphicsApi, PixelFormat, ProgramId, ShaderId, ShaderStage,
    TextureFilter, TextureId, TextureWrap, VertexArrayId, VertexAttribute,
};

/// OpenGL backend
///
/// Neither `Send` nor `Sync`: the context belongs to the thread that made it current.
pub struct OpenGl {
    _not_send: PhantomData<*const ()>,
}

impl OpenGl {
    /// Load function pointers through `loader`
    ///
    /// The context the pointers belong to must be current on this thread.
    /// Returns `None` if core entry points could not be resolved.
    pub fn load_with<F>(loader: F) -> Option<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        if !(gl::Viewport::is_loaded() && gl::CreateShader::is_loaded() && gl::GenVertexArrays::is_loaded()) {
            return None;
        }

        let api = Self { _not_send: PhantomData };
        if let Some(version) = api.version_string() {
            log::info!("OpenGL {}", version);
        }
        Some(api)
    }

    fn version_string(&self) -> Option<String> {
        let ptr = unsafe { gl::GetString(gl::VERSION) };
        if ptr.is_null() {
            return None;
        }
        let version = unsafe { CStr::from_ptr(ptr.cast()) };
        Some(version.to_string_lossy().into_owned())
    }
}

const fn stage_enum(stage: ShaderStage) -> GLenum {
    match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    }
}

const fn target_enum(target: BufferTarget) -> GLenum {
    match target {
        BufferTarget::Array => gl::ARRAY_BUFFER,
        BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
    }
}

const fn wrap_enum(wrap: TextureWrap) -> GLenum {
    match wrap {
        TextureWrap::Repeat => gl::REPEAT,
        TextureWrap::MirroredRepeat => gl::MIRRORED_REPEAT,
        TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
        TextureWrap::ClampToBorder => gl::CLAMP_TO_BORDER,
    }
}

const fn filter_enum(filter: TextureFilter) -> GLenum {
    match filter {
        TextureFilter::Nearest => gl::NEAREST,
        TextureFilter::Linear => gl::LINEAR,
    }
}

const fn format_enum(format: PixelFormat) -> GLenum {
    match format {
        PixelFormat::Red => gl::RED,
        PixelFormat::Rgb => gl::RGB,
        PixelFormat::Rgba => gl::RGBA,
    }
}

/// Read an info log through one of the `glGet*InfoLog` entry points
fn read_info_log(
    object: GLuint,
    capacity: usize,
    getter: fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    let mut buffer = vec![0u8; capacity];
    let mut written: GLsizei = 0;
    getter(object, capacity as GLsizei, &mut written, buffer.as_mut_ptr().cast());
    buffer.truncate(written.clamp(0, capacity as GLsizei) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

impl GraphicsApi for OpenGl {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        unsafe { gl::Viewport(x, y, width as GLsizei, height as GLsizei) };
    }

    fn clear(&mut self, color: [f32; 4]) {
        unsafe {
            gl::ClearColor(color[0], color[1], color[2], color[3]);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId {
        ShaderId(unsafe { gl::CreateShader(stage_enum(stage)) })
    }

    fn compile_shader(&mut self, shader: ShaderId, source: &CStr) -> bool {
        let mut success: GLint = 0;
        unsafe {
            gl::ShaderSource(shader.0, 1, &source.as_ptr(), std::ptr::null());
            gl::CompileShader(shader.0);
            gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut success);
        }
        success != 0
    }

    fn shader_info_log(&mut self, shader: ShaderId, capacity: usize) -> String {
        read_info_log(shader.0, capacity, |id, size, len, log| unsafe {
            gl::GetShaderInfoLog(id, size, len, log);
        })
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        unsafe { gl::DeleteShader(shader.0) };
    }

    fn create_program(&mut self) -> ProgramId {
        ProgramId(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        unsafe { gl::AttachShader(program.0, shader.0) };
    }

    fn link_program(&mut self, program: ProgramId) -> bool {
        let mut success: GLint = 0;
        unsafe {
            gl::LinkProgram(program.0);
            gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut success);
        }
        success != 0
    }

    fn program_info_log(&mut self, program: ProgramId, capacity: usize) -> String {
        read_info_log(program.0, capacity, |id, size, len, log| unsafe {
            gl::GetProgramInfoLog(id, size, len, log);
        })
    }

    fn use_program(&mut self, program: Option<ProgramId>) {
        unsafe { gl::UseProgram(program.map_or(0, ProgramId::raw)) };
    }

    fn uniform_location(&mut self, program: ProgramId, name: &CStr) -> Option<i32> {
        let location = unsafe { gl::GetUniformLocation(program.0, name.as_ptr()) };
        (location >= 0).then_some(location)
    }

    fn set_uniform_i32(&mut self, location: i32, value: i32) {
        unsafe { gl::Uniform1i(location, value) };
    }

    fn delete_program(&mut self, program: ProgramId) {
        unsafe { gl::DeleteProgram(program.0) };
    }

    fn create_vertex_array(&mut self) -> VertexArrayId {
        let mut id: GLuint = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        VertexArrayId(id)
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayId>) {
        unsafe { gl::BindVertexArray(vertex_array.map_or(0, VertexArrayId::raw)) };
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayId) {
        unsafe { gl::DeleteVertexArrays(1, &vertex_array.0) };
    }

    fn create_buffer(&mut self) -> BufferId {
        let mut id: GLuint = 0;
        unsafe { gl::GenBuffers(1, &mut id) };
        BufferId(id)
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferId>) {
        unsafe { gl::BindBuffer(target_enum(target), buffer.map_or(0, BufferId::raw)) };
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8]) {
        unsafe {
            gl::BufferData(
                target_enum(target),
                data.len() as GLsizeiptr,
                data.as_ptr().cast(),
                gl::STATIC_DRAW,
            );
        }
    }

    fn vertex_attribute(&mut self, attribute: VertexAttribute, stride: usize) {
        unsafe {
            gl::VertexAttribPointer(
                attribute.location,
                attribute.components,
                gl::FLOAT,
                gl::FALSE,
                stride as GLsizei,
                attribute.offset as *const c_void,
            );
            gl::EnableVertexAttribArray(attribute.location);
        }
    }

    fn delete_buffer(&mut self, buffer: BufferId) {
        unsafe { gl::DeleteBuffers(1, &buffer.0) };
    }

    fn create_texture(&mut self) -> TextureId {
        let mut id: GLuint = 0;
        unsafe { gl::GenTextures(1, &mut id) };
        TextureId(id)
    }

    fn active_texture(&mut self, unit: u32) {
        unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit) };
    }

    fn bind_texture(&mut self, texture: Option<TextureId>) {
        unsafe { gl::BindTexture(gl::TEXTURE_2D, texture.map_or(0, TextureId::raw)) };
    }

    fn set_texture_wrap(&mut self, wrap: TextureWrap) {
        let mode = wrap_enum(wrap) as GLint;
        unsafe {
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, mode);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, mode);
        }
    }

    fn set_texture_filter(&mut self, filter: TextureFilter) {
        let mode = filter_enum(filter) as GLint;
        unsafe {
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, mode);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mode);
        }
    }

    fn set_texture_border_color(&mut self, color: [f32; 4]) {
        unsafe { gl::TexParameterfv(gl::TEXTURE_2D, gl::TEXTURE_BORDER_COLOR, color.as_ptr()) };
    }

    fn tex_image_2d(&mut self, format: PixelFormat, width: u32, height: u32, pixels: &[u8]) {
        let format = format_enum(format);
        unsafe {
            // Rows of 1 and 3 channel images are not 4-byte aligned in general
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                format,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr().cast(),
            );
        }
    }

    fn generate_mipmap(&mut self) {
        unsafe { gl::GenerateMipmap(gl::TEXTURE_2D) };
    }

    fn delete_texture(&mut self, texture: TextureId) {
        unsafe { gl::DeleteTextures(1, &texture.0) };
    }

    fn draw_indexed_triangles(&mut self, index_count: usize) {
        unsafe {
            gl::DrawElements(gl::TRIANGLES, index_count as GLsizei, gl::UNSIGNED_INT, std::ptr::null());
        }
    }
}
