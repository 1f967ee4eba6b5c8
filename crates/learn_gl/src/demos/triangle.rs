//! A single orange triangle

use crate::application::{ExampleError, FrameContext, RenderableExample};
use crate::render::mesh::{Geometry, PositionVertex, Vec3};
use crate::render::{GraphicsApi, MeshBuffers, ShaderProgram};

const VERTEX_SHADER: &str = r"
#version 460 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"
#version 460 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Top, left-bottom and right-bottom corners of the clip-space triangle
pub fn triangle_positions() -> [Vec3; 3] {
    [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
    ]
}

/// Position-only triangle geometry
pub fn triangle_geometry() -> Geometry<PositionVertex> {
    let vertices = triangle_positions().into_iter().map(PositionVertex::new).collect();
    Geometry::new(vertices, vec![0, 1, 2])
}

/// Draws [`triangle_geometry`] with a constant fragment color
#[derive(Debug, Default)]
pub struct TriangleExample {
    shader: Option<ShaderProgram>,
    mesh: Option<MeshBuffers>,
}

impl TriangleExample {
    /// Create the example; GPU resources are made in `initialize`
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderableExample for TriangleExample {
    fn title(&self) -> &str {
        "Example02_Triangle"
    }

    fn initialize(&mut self, gl: &mut dyn GraphicsApi) -> Result<(), ExampleError> {
        self.shader = Some(ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?);
        self.mesh = Some(MeshBuffers::upload(gl, &triangle_geometry())?);
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
