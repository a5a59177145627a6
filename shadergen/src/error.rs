use shadergen_common::ShaderBackend;
use shadergen_preprocess::PreprocessError;
use shadergen_reflect::error::ShaderCompileError;
use thiserror::Error;

/// An error raised during a generation pass.
///
/// A generation error only affects the backend or artifact it names; the rest of the pass
/// still runs to completion.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The backend could not translate the program.
    #[error("the {backend} backend failed to translate the program")]
    AdapterFailure {
        backend: ShaderBackend,
        #[source]
        source: ShaderCompileError,
    },
    /// The artifact sink rejected an artifact.
    #[error("failed to emit artifact `{name}`")]
    EmitFailure {
        backend: ShaderBackend,
        /// The shader set the artifact was generated from.
        definition: String,
        /// The name of the artifact.
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// The backend this error occurred in.
    pub fn backend(&self) -> ShaderBackend {
        match self {
            GenerationError::AdapterFailure { backend, .. }
            | GenerationError::EmitFailure { backend, .. } => *backend,
        }
    }

    /// The shader definition this error occurred in, if known.
    pub fn definition(&self) -> Option<&str> {
        match self {
            GenerationError::AdapterFailure { source, .. } => source.definition(),
            GenerationError::EmitFailure { definition, .. } => Some(definition),
        }
    }
}

/// An error raised before a generation pass could start.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BuildError {
    /// The shader definitions could not be loaded.
    #[error("failed to load shader definitions")]
    PreprocessError(#[from] PreprocessError),
    /// The shader definitions could not be compiled to SPIR-V.
    #[error("failed to compile shader definitions")]
    CompileError(#[from] ShaderCompileError),
}
