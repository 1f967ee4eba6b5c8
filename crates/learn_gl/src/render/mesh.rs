//! Vertex records and indexed triangle geometry

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use nalgebra::{Vector2, Vector3};
use thiserror::Error;

use super::api::VertexAttribute;

/// 3-component float vector used while building geometry
pub type Vec3 = Vector3<f32>;

/// 2-component float vector used for UVs
pub type Vec2 = Vector2<f32>;

/// Interleaved attribute layout of a vertex type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices
    pub stride: usize,
    /// Attributes in location order
    pub attributes: Vec<VertexAttribute>,
}

/// A plain-old-data vertex that knows its own attribute layout
pub trait VertexFormat: Pod {
    /// Layout matching the struct's field offsets
    fn layout() -> VertexLayout;
}

/// Position-only vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    /// Position in clip space
    pub position: [f32; 3],
}

impl PositionVertex {
    /// Create a vertex
    pub fn new(position: Vec3) -> Self {
        Self { position: position.into() }
    }
}

impl VertexFormat for PositionVertex {
    fn layout() -> VertexLayout {
        VertexLayout {
            stride: size_of::<Self>(),
            attributes: vec![VertexAttribute {
                location: 0,
                components: 3,
                offset: offset_of!(Self, position),
            }],
        }
    }
}

/// Vertex with a per-vertex RGB color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in clip space
    pub position: [f32; 3],
    /// Linear RGB color
    pub color: [f32; 3],
}

impl ColorVertex {
    /// Create a vertex
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.into(),
            color: color.into(),
        }
    }
}

impl VertexFormat for ColorVertex {
    fn layout() -> VertexLayout {
        VertexLayout {
            stride: size_of::<Self>(),
            attributes: vec![
                VertexAttribute { location: 0, components: 3, offset: offset_of!(Self, position) },
                VertexAttribute { location: 1, components: 3, offset: offset_of!(Self, color) },
            ],
        }
    }
}

/// Vertex with color and texture coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    /// Position in clip space
    pub position: [f32; 3],
    /// Linear RGB color
    pub color: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
}

impl TexturedVertex {
    /// Create a vertex
    pub fn new(position: Vec3, color: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.into(),
            color: color.into(),
            uv: uv.into(),
        }
    }
}

impl VertexFormat for TexturedVertex {
    fn layout() -> VertexLayout {
        VertexLayout {
            stride: size_of::<Self>(),
            attributes: vec![
                VertexAttribute { location: 0, components: 3, offset: offset_of!(Self, position) },
                VertexAttribute { location: 1, components: 3, offset: offset_of!(Self, color) },
                VertexAttribute { location: 2, components: 2, offset: offset_of!(Self, uv) },
            ],
        }
    }
}

/// Problems that make geometry unusable as an indexed triangle list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// No vertices or no indices
    #[error("geometry is empty")]
    Empty,

    /// Index count is not a whole number of triangles
    #[error("{0} indices do not form whole triangles")]
    PartialTriangle(usize),

    /// An index points past the vertex list
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Offending index value
        index: u32,
        /// Number of vertices
        vertex_count: usize,
    },
}

/// Ordered vertices plus a flat triangle index list
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry<V> {
    /// Vertices in insertion order
    pub vertices: Vec<V>,
    /// Vertex indices, three per triangle
    pub indices: Vec<u32>,
}

impl<V> Default for Geometry<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl<V> Geometry<V> {
    /// Create geometry from vertices and indices
    pub fn new(vertices: Vec<V>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of whole triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check the geometry is a non-empty triangle list with in-bounds indices
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices.is_empty() || self.indices.is_empty() {
            return Err(GeometryError::Empty);
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::PartialTriangle(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        match self.indices.iter().find(|&&index| index as usize >= vertex_count) {
            Some(&index) => Err(GeometryError::IndexOutOfBounds { index, vertex_count }),
            None => Ok(()),
        }
    }
}

impl<V: Pod> Geometry<V> {
    /// Vertex data as uploaded to the array buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as uploaded to the element buffer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
