//! An indexed quad blending two textures
//!
//! `texture1` on unit 0 and `texture2` on unit 1 are mixed 50/50 in the
//! fragment shader. [`UvMode`] moves the UVs outside [0, 1] so the wrap
//! mode and filter chosen in [`TextureConfig`] become visible.

use std::path::PathBuf;

use super::UvMode;
use crate::application::{ExampleError, FrameContext, RenderableExample};
use crate::config::TextureConfig;
use crate::render::mesh::{Geometry, TexturedVertex, Vec3};
use crate::render::{GraphicsApi, MeshBuffers, ShaderProgram, Texture, TextureParams};

const VERTEX_SHADER: &str = r"
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
layout (location = 2) in vec2 aTexCoord;
out vec3 ourColor;
out vec2 TexCoord;
void main()
{
    gl_Position = vec4(aPos, 1.0);
    ourColor = aColor;
    TexCoord = aTexCoord;
}
";

const FRAGMENT_SHADER: &str = r"
#version 330 core
out vec4 FragColor;
in vec3 ourColor;
in vec2 TexCoord;
uniform sampler2D texture1;
uniform sampler2D texture2;
void main()
{
    FragColor = mix(texture(texture1, TexCoord), texture(texture2, TexCoord), 0.5);
}
";

const QUAD_SCALE: f32 = 0.8;

/// Sampler uniforms and the texture unit each one reads
const SAMPLERS: [(&str, u32); 2] = [("texture1", 0), ("texture2", 1)];

/// Quad geometry with corners LT, LB, RB, RT and two triangles
pub fn quad_geometry(uv_mode: UvMode) -> Geometry<TexturedVertex> {
    let [lt, rt, rb, lb] = uv_mode.corners();
    let red = Vec3::new(1.0, 0.0, 0.0);
    let green = Vec3::new(0.0, 1.0, 0.0);
    let blue = Vec3::new(0.0, 0.0, 1.0);

    let vertices = vec![
        TexturedVertex::new(Vec3::new(-1.0, 1.0, 0.0) * QUAD_SCALE, red, lt),
        TexturedVertex::new(Vec3::new(-1.0, -1.0, 0.0) * QUAD_SCALE, green, lb),
        TexturedVertex::new(Vec3::new(1.0, -1.0, 0.0) * QUAD_SCALE, blue, rb),
        TexturedVertex::new(Vec3::new(1.0, 1.0, 0.0) * QUAD_SCALE, blue, rt),
    ];
    Geometry::new(vertices, vec![0, 1, 2, 0, 2, 3])
}

/// Draws [`quad_geometry`] sampling a base texture and a mask
#[derive(Debug)]
pub struct TexturedQuadExample {
    uv_mode: UvMode,
    params: TextureParams,
    texture_paths: [PathBuf; 2],
    shader: Option<ShaderProgram>,
    mesh: Option<MeshBuffers>,
    textures: Vec<Texture>,
}

impl TexturedQuadExample {
    /// Create the example from texture settings
    pub fn new(config: &TextureConfig) -> Self {
        Self::with_params(
            config.uv_mode,
            TextureParams { wrap: config.wrap, filter: config.filter },
            [config.base_texture.clone(), config.mask_texture.clone()],
        )
    }

    /// Create the example with explicit UV mode, sampling and texture files
    pub fn with_params(uv_mode: UvMode, params: TextureParams, texture_paths: [PathBuf; 2]) -> Self {
        Self {
            uv_mode,
            params,
            texture_paths,
            shader: None,
            mesh: None,
            textures: Vec::new(),
        }
    }

    /// UV mode the quad is built with
    pub fn uv_mode(&self) -> UvMode {
        self.uv_mode
    }

    /// Sampling parameters applied to both textures
    pub fn texture_params(&self) -> TextureParams {
        self.params
    }
}

impl RenderableExample for TexturedQuadExample {
    fn title(&self) -> &str {
        "Example04_Texture"
    }

    fn initialize(&mut self, gl: &mut dyn GraphicsApi) -> Result<(), ExampleError> {
        log::debug!(
            "Texture example: {:?} UVs, {:?} wrap, {:?} filter",
            self.uv_mode,
            self.params.wrap,
            self.params.filter
        );
        self.shader = Some(ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?);
        self.mesh = Some(MeshBuffers::upload(gl, &quad_geometry(self.uv_mode))?);

        for path in &self.texture_paths {
            self.textures.push(Texture::load(gl, path, self.params));
        }
        Ok(())
    }

    fn render(&mut self, gl: &mut dyn GraphicsApi, _frame: &mut FrameContext<'_>) {
        let (Some(shader), Some(mesh)) = (&self.shader, &self.mesh) else {
            return;
        };
        shader.bind(gl);

        for (texture, (_, unit)) in self.textures.iter().zip(SAMPLERS) {
            texture.bind(gl, unit);
        }
        for (name, unit) in SAMPLERS {
            if let Err(e) = shader.set_sampler(gl, name, unit) {
                log::warn!("{}", e);
            }
        }

        mesh.draw(gl);
    }

    fn clean_up(&mut self, gl: &mut dyn GraphicsApi) {
        for texture in self.textures.drain(..) {
            texture.destroy(gl);
        }
        if let Some(mesh) = self.mesh.take() {
            mesh.destroy(gl);
        }
        if let Some(shader) = self.shader.take() {
            shader.destroy(gl);
        }
    }
}
