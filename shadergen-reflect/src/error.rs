use shadergen_common::ShaderStage;
use thiserror::Error;

/// Error type for shader compilation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ShaderCompileError {
    /// Compilation error from shaderc (glslang).
    #[error("shaderc: {0}")]
    ShaderCCompileError(#[from] shaderc::Error),

    /// Error when initializing the shaderc compiler.
    #[error("shaderc init")]
    ShaderCInitError,

    /// Error when transpiling from spirv-cross.
    #[error("cross: {0:?}")]
    SpirvCrossCompileError(#[from] spirv_cross::ErrorCode),

    /// A stage of a shader definition failed to compile.
    #[error("failed to compile the {stage} stage of `{name}`")]
    Definition {
        /// The name of the shader definition.
        name: String,
        /// The stage that failed.
        stage: ShaderStage,
        #[source]
        source: Box<ShaderCompileError>,
    },
}

impl ShaderCompileError {
    pub(crate) fn in_definition(
        name: &str,
        stage: ShaderStage,
        source: impl Into<ShaderCompileError>,
    ) -> ShaderCompileError {
        ShaderCompileError::Definition {
            name: name.to_string(),
            stage,
            source: Box::new(source.into()),
        }
    }

    /// The name of the shader definition that caused this error, if known.
    pub fn definition(&self) -> Option<&str> {
        match self {
            ShaderCompileError::Definition { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The stage that caused this error, if known.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderCompileError::Definition { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
