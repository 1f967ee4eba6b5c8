//! A triangle with red, green and blue corners

use super::triangle::triangle_positions;
use crate::application::{ExampleError, FrameContext, RenderableExample};
use crate::render::mesh::{ColorVertex, Geometry, Vec3};
use crate::render::{GraphicsApi, MeshBuffers, ShaderProgram};

const VERTEX_SHADER: &str = r"
#version 460 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
out vec3 vertexColor;
void main()
{
    gl_Position = vec4(aPos, 1.0);
    vertexColor = aColor;
}
";

const FRAGMENT_SHADER: &str = r"
#version 460 core
in vec3 vertexColor;
out vec4 FragColor;
void main()
{
    FragColor = vec4(vertexColor, 1.0);
}
";

/// Triangle geometry with one primary color per corner
pub fn colored_triangle_geometry() -> Geometry<ColorVertex> {
    let colors = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let vertices = triangle_positions()
        .into_iter()
        .zip(colors)
        .map(|(position, color)| ColorVertex::new(position, color))
        .collect();
    Geometry::new(vertices, vec![0, 1, 2])
}

/// Draws [`colored_triangle_geometry`] with interpolated vertex colors
#[derive(Debug, Default)]
pub struct ColoredTriangleExample {
    shader: Option<ShaderProgram>,
    mesh: Option<MeshBuffers>,
}

impl ColoredTriangleExample {
    /// Create the example; GPU resources are made in `initialize`
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderableExample for ColoredTriangleExample {
    fn title(&self) -> &str {
        "Example03_Triangle_Color"
    }

    fn initialize(&mut self, gl: &mut dyn GraphicsApi) -> Result<(), ExampleError> {
        self.shader = Some(ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?);
        self.mesh = Some(MeshBuffers::upload(gl, &colored_triangle_geometry())?);
        Ok(())
    }

    fn render(&mut self, gl: &mut dyn GraphicsApi, _frame: &mut FrameContext<'_>) {
        let (Some(shader), Some(mesh)) = (&self.shader, &self.mesh) else {
            return;
        };
        shader.bind(gl);
        mesh.draw(gl);
    }

    fn clean_up(&mut self, gl: &mut dyn GraphicsApi) {
        if let Some(mesh) = self.mesh.take() {
            mesh.destroy(gl);
        }
        if let Some(shader) = self.shader.take() {
            shader.destroy(gl);
        }
    }
}
