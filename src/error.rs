use std::fmt;

use thiserror::Error;

use crate::gl;

/// Pipeline stage a shader object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// GL enum passed to `createShader`.
    pub fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Everything that can go wrong while setting up the renderer.
///
/// All variants are fatal: nothing is drawn once one of them is returned.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("WebGL is not supported by this surface")]
    ContextUnavailable,

    #[error("error compiling {stage} shader: {message}")]
    ShaderCompile { stage: ShaderStage, message: String },

    #[error("error linking GL program: {message}")]
    ProgramLink { message: String },

    #[error("error validating GL program: {message}")]
    ProgramValidation { message: String },

    #[error("unable to create GL {0}")]
    ResourceCreation(&'static str),

    #[error("attribute `{0}` not found in program")]
    AttributeNotFound(&'static str),
}
