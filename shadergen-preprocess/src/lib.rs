//! Loading of annotated shader definitions.
//!
//! A shader definition is a single GLSL source file which carries its entry points for every
//! stage it implements, separated by `#pragma stage` directives. Lines before the first stage
//! directive are shared by all stages. `#include` directives are resolved relative to the
//! including file.
//!
//! ```glsl
//! #version 450
//! #pragma name Basic
//!
//! #pragma stage fragment
//! layout(location = 0) in vec4 Color;
//! layout(location = 0) out vec4 FragColor;
//! void main() { FragColor = Color; }
//! ```
mod error;
mod include;
mod pragma;
mod program;
mod stage;

pub use error::*;
pub use program::ShaderProgram;

use shadergen_common::ShaderStage;
use std::path::Path;

/// A shader definition with its stage sources preprocessed and ready for compilation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShaderDefinition {
    /// The name of the definition, from `#pragma name` or the file stem.
    pub name: String,
    /// The preprocessed vertex stage source.
    pub vertex: Option<String>,
    /// The preprocessed fragment stage source.
    pub fragment: Option<String>,
    /// The preprocessed compute stage source.
    pub compute: Option<String>,
}

impl ShaderDefinition {
    /// Load and preprocess the shader definition at the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<ShaderDefinition, PreprocessError> {
        let path = path.as_ref();
        log::debug!("loading shader definition {path:?}");
        let source = include::read_source(path)?;
        let fallback = path.file_stem().and_then(|f| f.to_str()).unwrap_or("");
        Self::from_preprocessed(&source, fallback)
    }

    /// Preprocess a shader definition held in memory.
    ///
    /// `name_hint` is used when the source has no `#pragma name`. The source may not contain
    /// `#include` directives since there is no path to resolve them against.
    pub fn parse(name_hint: &str, source: &str) -> Result<ShaderDefinition, PreprocessError> {
        let source = include::process_source(source, name_hint, None)?;
        Self::from_preprocessed(&source, name_hint)
    }

    fn from_preprocessed(source: &str, fallback: &str) -> Result<ShaderDefinition, PreprocessError> {
        let split = stage::split_source(source)?;
        let name = split.name.unwrap_or_else(|| fallback.to_string());
        if name.is_empty() {
            return Err(PreprocessError::EmptyName);
        }

        Ok(ShaderDefinition {
            name,
            vertex: split.vertex,
            fragment: split.fragment,
            compute: split.compute,
        })
    }

    /// Get the source of the given stage, if the definition implements it.
    pub fn stage(&self, stage: ShaderStage) -> Option<&str> {
        match stage {
            ShaderStage::Vertex => self.vertex.as_deref(),
            ShaderStage::Fragment => self.fragment.as_deref(),
            ShaderStage::Compute => self.compute.as_deref(),
        }
    }

    /// Iterate the implemented stages in vertex, fragment, compute order.
    pub fn stages(&self) -> impl Iterator<Item = (ShaderStage, &str)> {
        ShaderStage::ALL
            .into_iter()
            .filter_map(|stage| self.stage(stage).map(|source| (stage, source)))
    }
}

#[cfg(test)]
mod test {
    use crate::{PreprocessError, ShaderDefinition};
    use shadergen_common::ShaderStage;

    #[test]
    pub fn load_fragment_only() {
        let definition = ShaderDefinition::load("../test/basic.shader").unwrap();
        assert_eq!(definition.name, "Basic");
        assert!(definition.vertex.is_none());
        assert!(definition.compute.is_none());
        let stages: Vec<_> = definition.stages().map(|(stage, _)| stage).collect();
        assert_eq!(stages, [ShaderStage::Fragment]);
    }

    #[test]
    pub fn name_falls_back_to_stem() {
        let definition = ShaderDefinition::load("../test/compute/blur.shader").unwrap();
        assert_eq!(definition.name, "blur");
        assert!(definition.stage(ShaderStage::Compute).is_some());
    }

    #[test]
    pub fn parse_in_memory() {
        let definition = ShaderDefinition::parse(
            "Memory",
            "#version 450\n#pragma stage vertex\nvoid main() { gl_Position = vec4(1.0); }\n",
        )
        .unwrap();
        assert_eq!(definition.name, "Memory");
        assert!(definition.vertex.unwrap().contains("gl_Position"));
    }

    #[test]
    pub fn parse_requires_name() {
        let result = ShaderDefinition::parse("", "#version 450\n");
        assert!(matches!(result, Err(PreprocessError::EmptyName)));
    }
}
