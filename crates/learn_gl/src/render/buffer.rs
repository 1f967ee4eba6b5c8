//! Static vertex and index buffers bound together in a vertex array object

use super::api::{BufferId, BufferTarget, GraphicsApi, VertexArrayId};
use super::mesh::{Geometry, GeometryError, VertexFormat};

/// GPU copy of a [`Geometry`]
///
/// Data is uploaded once with `STATIC_DRAW` and never modified.
#[derive(Debug, PartialEq, Eq)]
pub struct MeshBuffers {
    vertex_array: VertexArrayId,
    vertex_buffer: BufferId,
    element_buffer: BufferId,
    index_count: usize,
}

impl MeshBuffers {
    /// Create the VAO, VBO and EBO, upload `geometry` and describe its layout
    ///
    /// Geometry that is not a valid triangle list is rejected before any
    /// object is created.
    pub fn upload<V: VertexFormat>(
        gl: &mut dyn GraphicsApi,
        geometry: &Geometry<V>,
    ) -> Result<Self, GeometryError> {
        geometry.validate()?;

        let vertex_array = gl.create_vertex_array();
        let vertex_buffer = gl.create_buffer();
        let element_buffer = gl.create_buffer();

        gl.bind_vertex_array(Some(vertex_array));

        gl.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
        gl.buffer_data(BufferTarget::Array, geometry.vertex_bytes());

        gl.bind_buffer(BufferTarget::ElementArray, Some(element_buffer));
        gl.buffer_data(BufferTarget::ElementArray, geometry.index_bytes());

        let layout = V::layout();
        for attribute in &layout.attributes {
            gl.vertex_attribute(*attribute, layout.stride);
        }

        // The element buffer binding is VAO state and stays attached
        gl.bind_buffer(BufferTarget::Array, None);
        gl.bind_vertex_array(None);

        log::debug!(
            "Uploaded {} vertices / {} indices into VAO {}",
            geometry.vertices.len(),
            geometry.index_count(),
            vertex_array.raw()
        );

        Ok(Self {
            vertex_array,
            vertex_buffer,
            element_buffer,
            index_count: geometry.index_count(),
        })
    }

    /// Number of indices drawn per call
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Vertex array handle
    pub fn vertex_array(&self) -> VertexArrayId {
        self.vertex_array
    }

    /// Draw every index as a triangle list with whatever program is current
    pub fn draw(&self, gl: &mut dyn GraphicsApi) {
        gl.bind_vertex_array(Some(self.vertex_array));
        gl.draw_indexed_triangles(self.index_count);
        gl.bind_vertex_array(None);
    }

    /// Delete the vertex array and both buffers
    pub fn destroy(self, gl: &mut dyn GraphicsApi) {
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.vertex_buffer);
        gl.delete_buffer(self.element_buffer);
    }
}
