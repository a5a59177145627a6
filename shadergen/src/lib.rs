//! Generates shader source for several shading languages from a single shader definition.
//!
//! A shader definition is written once in Vulkan GLSL, with its entry points marked by
//! `#pragma stage` directives. shadergen compiles it to SPIR-V, cross-compiles it into every
//! supported target language, and emits each stage as a separately named artifact.
//!
//! | **Backend**  | **Artifact extension** |
//! |--------------|------------------------|
//! | HLSL         | `hlsl`                 |
//! | GLSL 3.30    | `330.glsl`             |
//! | GLSL ES 3.00 | `300.glsles`           |
//! | GLSL 4.50    | `450.glsl`             |
//! | Metal        | `metal`                |
//!
//! Artifacts are named `<definition>-<stage>.<extension>`, and their text is the generated
//! source with every line commented out, so that the artifacts can be embedded verbatim into
//! a build without being interpreted as code.
//!
//! ## Usage
//! The simplest entry point is [`build_shaders`](crate::build::build_shaders), which loads,
//! compiles and generates a directory of shader definitions in one call. To drive a pass with
//! a custom cross-compiler or program representation, use
//! [`run_generation_pass`](crate::generate::run_generation_pass) directly.

/// Artifacts, artifact formatting and artifact sinks.
pub mod artifact;
/// One-call generation from shader definition sources.
pub mod build;
/// Error types.
pub mod error;
/// Generation passes over every backend.
pub mod generate;
/// Artifact naming.
pub mod naming;

/// Loading of shader definitions.
pub mod preprocess {
    pub use shadergen_preprocess::*;
}

/// Shader compilation and cross-compilation.
pub mod reflect {
    pub use shadergen_reflect::back::cross::{
        CrossOptions, GlslVersion, HlslShaderModel, MslVersion, SpirvCross,
    };
    pub use shadergen_reflect::back::{CrossCompileProgram, ShaderSet};
    pub use shadergen_reflect::error::*;
    pub use shadergen_reflect::front::{SpirvDefinition, SpirvProgram};
}

pub use shadergen_common::{ShaderBackend, ShaderStage, UnknownBackend, UnknownStage};
