//! Recording [`GraphicsApi`] double for tests
//!
//! Hands out sequential object names, records every call and can be told to
//! fail shader compilation or program linking.

use std::collections::HashMap;
use std::ffi::CStr;

use super::api::{
    BufferId, BufferTarget, GraphicsApi, PixelFormat, ProgramId, ShaderId, ShaderStage,
    TextureFilter, TextureId, TextureWrap, VertexArrayId, VertexAttribute,
};

/// Any driver object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GpuObject {
    Shader(ShaderId),
    Program(ProgramId),
    VertexArray(VertexArrayId),
    Buffer(BufferId),
    Texture(TextureId),
}

/// Calls that do not create or delete objects
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Viewport(i32, i32, u32, u32),
    Clear([f32; 4]),
    AttachShader(ProgramId, ShaderId),
    UseProgram(Option<ProgramId>),
    SetUniform(String, i32),
    BindVertexArray(Option<VertexArrayId>),
    BindBuffer(BufferTarget, Option<BufferId>),
    BufferData(BufferTarget, Vec<u8>),
    VertexAttribute(VertexAttribute, usize),
    ActiveTexture(u32),
    BindTexture(Option<TextureId>),
    TextureWrap(TextureWrap),
    TextureFilter(TextureFilter),
    BorderColor([f32; 4]),
    TexImage { format: PixelFormat, width: u32, height: u32, bytes: usize },
    GenerateMipmap,
    DrawIndexed(usize),
}

#[derive(Default)]
pub struct RecordingApi {
    next_name: u32,
    pub created: Vec<GpuObject>,
    pub deleted: Vec<GpuObject>,
    pub calls: Vec<Call>,
    pub compiled_sources: Vec<(ShaderStage, String)>,
    fail_compile: Option<ShaderStage>,
    fail_link: bool,
    stages: HashMap<ShaderId, ShaderStage>,
    uniform_names: Vec<String>,
    inactive_uniforms: Vec<String>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_compile(stage: ShaderStage) -> Self {
        Self { fail_compile: Some(stage), ..Self::default() }
    }

    pub fn failing_link() -> Self {
        Self { fail_link: true, ..Self::default() }
    }

    /// Report `name` as optimized out of every program
    pub fn with_inactive_uniform(name: &str) -> Self {
        Self { inactive_uniforms: vec![name.to_string()], ..Self::default() }
    }

    fn next(&mut self) -> u32 {
        self.next_name += 1;
        self.next_name
    }

    /// Objects created and not yet deleted
    pub fn live_objects(&self) -> Vec<GpuObject> {
        self.created
            .iter()
            .filter(|object| !self.deleted.contains(object))
            .copied()
            .collect()
    }

    /// Panics unless every created object was deleted exactly once
    pub fn assert_all_released(&self) {
        let mut created = self.created.clone();
        let mut deleted = self.deleted.clone();
        created.sort();
        deleted.sort();
        assert_eq!(created, deleted, "every created object is deleted exactly once");
    }

    pub fn draw_calls(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawIndexed(count) => Some(*count),
                _ => None,
            })
            .collect()
    }

    pub fn uploads(&self, target: BufferTarget) -> Vec<&[u8]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::BufferData(t, data) if *t == target => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn count<F: Fn(&Call) -> bool>(&self, predicate: F) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl GraphicsApi for RecordingApi {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.calls.push(Call::Viewport(x, y, width, height));
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(Call::Clear(color));
    }

    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId {
        let id = ShaderId(self.next());
        self.stages.insert(id, stage);
        self.created.push(GpuObject::Shader(id));
        id
    }

    fn compile_shader(&mut self, shader: ShaderId, source: &CStr) -> bool {
        let stage = self.stages[&shader];
        self.compiled_sources.push((stage, source.to_string_lossy().into_owned()));
        self.fail_compile != Some(stage)
    }

    fn shader_info_log(&mut self, shader: ShaderId, capacity: usize) -> String {
        let mut log = format!("0:1(1): error: {} stage rejected ", self.stages[&shader]);
        log.push_str(&"x".repeat(2 * capacity));
        log.truncate(capacity);
        log
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        self.deleted.push(GpuObject::Shader(shader));
    }

    fn create_program(&mut self) -> ProgramId {
        let id = ProgramId(self.next());
        self.created.push(GpuObject::Program(id));
        id
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        self.calls.push(Call::AttachShader(program, shader));
    }

    fn link_program(&mut self, _program: ProgramId) -> bool {
        !self.fail_link
    }

    fn program_info_log(&mut self, _program: ProgramId, capacity: usize) -> String {
        let mut log = String::from("error: linking failed");
        log.truncate(capacity);
        log
    }

    fn use_program(&mut self, program: Option<ProgramId>) {
        self.calls.push(Call::UseProgram(program));
    }

    fn uniform_location(&mut self, _program: ProgramId, name: &CStr) -> Option<i32> {
        let name = name.to_string_lossy().into_owned();
        if self.inactive_uniforms.contains(&name) {
            return None;
        }
        let location = match self.uniform_names.iter().position(|n| *n == name) {
            Some(index) => index,
            None => {
                self.uniform_names.push(name);
                self.uniform_names.len() - 1
            }
        };
        Some(location as i32)
    }

    fn set_uniform_i32(&mut self, location: i32, value: i32) {
        let name = self.uniform_names[location as usize].clone();
        self.calls.push(Call::SetUniform(name, value));
    }

    fn delete_program(&mut self, program: ProgramId) {
        self.deleted.push(GpuObject::Program(program));
    }

    fn create_vertex_array(&mut self) -> VertexArrayId {
        let id = VertexArrayId(self.next());
        self.created.push(GpuObject::VertexArray(id));
        id
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayId>) {
        self.calls.push(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayId) {
        self.deleted.push(GpuObject::VertexArray(vertex_array));
    }

    fn create_buffer(&mut self) -> BufferId {
        let id = BufferId(self.next());
        self.created.push(GpuObject::Buffer(id));
        id
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferId>) {
        self.calls.push(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8]) {
        self.calls.push(Call::BufferData(target, data.to_vec()));
    }

    fn vertex_attribute(&mut self, attribute: VertexAttribute, stride: usize) {
        self.calls.push(Call::VertexAttribute(attribute, stride));
    }

    fn delete_buffer(&mut self, buffer: BufferId) {
        self.deleted.push(GpuObject::Buffer(buffer));
    }

    fn create_texture(&mut self) -> TextureId {
        let id = TextureId(self.next());
        self.created.push(GpuObject::Texture(id));
        id
    }

    fn active_texture(&mut self, unit: u32) {
        self.calls.push(Call::ActiveTexture(unit));
    }

    fn bind_texture(&mut self, texture: Option<TextureId>) {
        self.calls.push(Call::BindTexture(texture));
    }

    fn set_texture_wrap(&mut self, wrap: TextureWrap) {
        self.calls.push(Call::TextureWrap(wrap));
    }

    fn set_texture_filter(&mut self, filter: TextureFilter) {
        self.calls.push(Call::TextureFilter(filter));
    }

    fn set_texture_border_color(&mut self, color: [f32; 4]) {
        self.calls.push(Call::BorderColor(color));
    }

    fn tex_image_2d(&mut self, format: PixelFormat, width: u32, height: u32, pixels: &[u8]) {
        self.calls.push(Call::TexImage { format, width, height, bytes: pixels.len() });
    }

    fn generate_mipmap(&mut self) {
        self.calls.push(Call::GenerateMipmap);
    }

    fn delete_texture(&mut self, texture: TextureId) {
        self.deleted.push(GpuObject::Texture(texture));
    }

    fn draw_indexed_triangles(&mut self, index_count: usize) {
        self.calls.push(Call::DrawIndexed(index_count));
    }
}
