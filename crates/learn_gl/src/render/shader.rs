//! Shader compilation and program linking
//!
//! A failed compile or link is fatal for the example that requested it: the
//! diagnostic is logged, every object created along the way is deleted and the
//! error is returned, so no half-linked program is ever handed out.

use std::ffi::{CString, NulError};

use thiserror::Error;

use super::api::{GraphicsApi, ProgramId, ShaderId, ShaderStage};

/// Maximum number of info log bytes fetched from the driver
pub const INFO_LOG_CAPACITY: usize = 1024;

/// Shader build errors
#[derive(Error, Debug)]
pub enum ShaderError {
    /// A stage failed to compile
    #[error("{stage} shader compilation failed: {log}")]
    Compile {
        /// Failing stage
        stage: ShaderStage,
        /// Driver diagnostic, at most [`INFO_LOG_CAPACITY`] bytes
        log: String,
    },

    /// The program failed to link
    #[error("shader program linking failed: {log}")]
    Link {
        /// Driver diagnostic, at most [`INFO_LOG_CAPACITY`] bytes
        log: String,
    },

    /// Source text contains an interior NUL byte
    #[error("{stage} shader source is not a valid C string: {source}")]
    InvalidSource {
        /// Stage whose source was rejected
        stage: ShaderStage,
        /// Underlying conversion error
        source: NulError,
    },

    /// Uniform name contains an interior NUL byte
    #[error("uniform name {0:?} is not a valid C string")]
    InvalidUniformName(String),
}

/// A linked vertex + fragment program
#[derive(Debug, PartialEq, Eq)]
pub struct ShaderProgram {
    id: ProgramId,
}

impl ShaderProgram {
    /// Compile both stages and link them
    pub fn from_sources(
        gl: &mut dyn GraphicsApi,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let vertex_source = to_c_source(ShaderStage::Vertex, vertex_source)?;
        let fragment_source = to_c_source(ShaderStage::Fragment, fragment_source)?;

        let vertex = compile_stage(gl, ShaderStage::Vertex, &vertex_source)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, &fragment_source) {
            Ok(fragment) => fragment,
            Err(e) => {
                gl.delete_shader(vertex);
                return Err(e);
            }
        };

        let id = gl.create_program();
        gl.attach_shader(id, vertex);
        gl.attach_shader(id, fragment);
        let linked = gl.link_program(id);

        // Stage objects are no longer needed once linking has been attempted
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !linked {
            let log = gl.program_info_log(id, INFO_LOG_CAPACITY);
            log::error!("Shader program linking failed:\n{}", log);
            gl.delete_program(id);
            return Err(ShaderError::Link { log });
        }

        log::debug!("Linked shader program {}", id.raw());
        Ok(Self { id })
    }

    /// Program handle
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Make this program current
    pub fn bind(&self, gl: &mut dyn GraphicsApi) {
        gl.use_program(Some(self.id));
    }

    /// Point a sampler uniform at a texture unit; the program must be bound
    ///
    /// Inactive samplers are skipped with a debug log.
    pub fn set_sampler(&self, gl: &mut dyn GraphicsApi, name: &str, unit: u32) -> Result<(), ShaderError> {
        let c_name = CString::new(name).map_err(|_| ShaderError::InvalidUniformName(name.to_string()))?;
        match gl.uniform_location(self.id, &c_name) {
            Some(location) => gl.set_uniform_i32(location, unit as i32),
            None => log::debug!("Sampler {} is not active in program {}", name, self.id.raw()),
        }
        Ok(())
    }

    /// Delete the program
    pub fn destroy(self, gl: &mut dyn GraphicsApi) {
        gl.delete_program(self.id);
    }
}

fn to_c_source(stage: ShaderStage, source: &str) -> Result<CString, ShaderError> {
    CString::new(source).map_err(|source| ShaderError::InvalidSource { stage, source })
}

fn compile_stage(
    gl: &mut dyn GraphicsApi,
    stage: ShaderStage,
    source: &CString,
) -> Result<ShaderId, ShaderError> {
    let shader = gl.create_shader(stage);
    if gl.compile_shader(shader, source) {
        return Ok(shader);
    }

    let log = gl.shader_info_log(shader, INFO_LOG_CAPACITY);
    log::error!("{} shader compilation failed:\n{}", stage, log);
    gl.delete_shader(shader);
    Err(ShaderError::Compile { stage, log })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{Call, GpuObject, RecordingApi};

    const VERTEX: &str = "#version 330 core\nvoid main() {}";
    const FRAGMENT: &str = "#version 330 core\nout vec4 c; void main() { c = vec4(1.0); }";

    #[test]
    fn test_successful_build_keeps_only_program() {
        let mut gl = RecordingApi::new();
        let program = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT).unwrap();

        assert_eq!(gl.live_objects(), vec![GpuObject::Program(program.id())]);
        assert_eq!(gl.count(|c| matches!(c, Call::AttachShader(..))), 2);
        assert_eq!(gl.compiled_sources[0], (ShaderStage::Vertex, VERTEX.to_string()));
        assert_eq!(gl.compiled_sources[1], (ShaderStage::Fragment, FRAGMENT.to_string()));

        program.destroy(&mut gl);
        gl.assert_all_released();
    }

    #[test]
    fn test_vertex_compile_failure() {
        let mut gl = RecordingApi::failing_compile(ShaderStage::Vertex);
        let result = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT);

        assert!(matches!(result, Err(ShaderError::Compile { stage: ShaderStage::Vertex, .. })));
        assert_eq!(gl.compiled_sources.len(), 1, "fragment stage is never compiled");
        gl.assert_all_released();
    }

    #[test]
    fn test_fragment_compile_failure_releases_vertex_stage() {
        let mut gl = RecordingApi::failing_compile(ShaderStage::Fragment);
        let result = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT);

        assert!(matches!(result, Err(ShaderError::Compile { stage: ShaderStage::Fragment, .. })));
        gl.assert_all_released();
    }

    #[test]
    fn test_info_log_is_bounded() {
        let mut gl = RecordingApi::failing_compile(ShaderStage::Vertex);
        match ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT) {
            Err(ShaderError::Compile { log, .. }) => assert_eq!(log.len(), INFO_LOG_CAPACITY),
            other => panic!("expected compile error, got {:?}", other),
        }
    }

    #[test]
    fn test_link_failure_releases_everything() {
        let mut gl = RecordingApi::failing_link();
        let result = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT);

        match result {
            Err(ShaderError::Link { log }) => assert!(log.contains("linking failed")),
            other => panic!("expected link error, got {:?}", other),
        }
        gl.assert_all_released();
    }

    #[test]
    fn test_nul_in_source_rejected_before_any_driver_call() {
        let mut gl = RecordingApi::new();
        let result = ShaderProgram::from_sources(&mut gl, "void\0main", FRAGMENT);

        assert!(matches!(result, Err(ShaderError::InvalidSource { stage: ShaderStage::Vertex, .. })));
        assert!(gl.created.is_empty());
    }

    #[test]
    fn test_set_sampler() {
        let mut gl = RecordingApi::new();
        let program = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT).unwrap();
        program.bind(&mut gl);
        program.set_sampler(&mut gl, "texture2", 1).unwrap();

        assert!(gl.calls.contains(&Call::UseProgram(Some(program.id()))));
        assert!(gl.calls.contains(&Call::SetUniform("texture2".to_string(), 1)));
        program.destroy(&mut gl);
    }

    #[test]
    fn test_inactive_sampler_is_skipped() {
        let mut gl = RecordingApi::with_inactive_uniform("texture2");
        let program = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT).unwrap();
        program.bind(&mut gl);

        program.set_sampler(&mut gl, "texture2", 1).unwrap();
        assert_eq!(gl.count(|c| matches!(c, Call::SetUniform(..))), 0);

        program.set_sampler(&mut gl, "texture1", 0).unwrap();
        assert_eq!(gl.count(|c| matches!(c, Call::SetUniform(..))), 1);
        program.destroy(&mut gl);
    }

    #[test]
    fn test_sampler_name_with_nul_rejected() {
        let mut gl = RecordingApi::new();
        let program = ShaderProgram::from_sources(&mut gl, VERTEX, FRAGMENT).unwrap();
        let result = program.set_sampler(&mut gl, "tex\0ture", 0);
        assert!(matches!(result, Err(ShaderError::InvalidUniformName(_))));
        program.destroy(&mut gl);
    }
}
