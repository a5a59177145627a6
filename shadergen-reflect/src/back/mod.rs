/// Cross-compilation via spirv-cross.
pub mod cross;

use crate::error::ShaderCompileError;
use shadergen_common::{ShaderBackend, ShaderStage};

/// The translation of one shader definition into one backend's shading language.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ShaderSet {
    /// The name of the shader definition this set was translated from.
    pub name: String,
    pub vertex: Option<String>,
    pub fragment: Option<String>,
    pub compute: Option<String>,
}

impl ShaderSet {
    /// Create a shader set with no stages.
    pub fn new(name: impl Into<String>) -> Self {
        ShaderSet {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper to set the source of a stage.
    pub fn with_stage(mut self, stage: ShaderStage, source: impl Into<String>) -> Self {
        self.set_stage(stage, source.into());
        self
    }

    pub fn set_stage(&mut self, stage: ShaderStage, source: String) {
        let slot = match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
            ShaderStage::Compute => &mut self.compute,
        };
        *slot = Some(source);
    }

    /// Get the translated source of the given stage.
    pub fn stage(&self, stage: ShaderStage) -> Option<&str> {
        match stage {
            ShaderStage::Vertex => self.vertex.as_deref(),
            ShaderStage::Fragment => self.fragment.as_deref(),
            ShaderStage::Compute => self.compute.as_deref(),
        }
    }

    /// Whether no stage is present.
    pub fn is_empty(&self) -> bool {
        self.vertex.is_none() && self.fragment.is_none() && self.compute.is_none()
    }
}

/// Translates every shader definition of a program into a target shading language.
///
/// Implementations must not hold mutable state shared between backends; the same
/// program may be translated for several backends concurrently.
pub trait CrossCompileProgram {
    /// The program representation this compiler consumes.
    type Program: ?Sized;

    /// Translate every shader definition in `program` for the given backend.
    ///
    /// A program without shader definitions yields no shader sets.
    fn translate(
        &self,
        program: &Self::Program,
        backend: ShaderBackend,
    ) -> Result<Vec<ShaderSet>, ShaderCompileError>;
}

impl<T> CrossCompileProgram for &T
where
    T: CrossCompileProgram + ?Sized,
{
    type Program = T::Program;

    fn translate(
        &self,
        program: &Self::Program,
        backend: ShaderBackend,
    ) -> Result<Vec<ShaderSet>, ShaderCompileError> {
        (**self).translate(program, backend)
    }
}
