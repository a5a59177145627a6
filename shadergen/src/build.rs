use crate::artifact::ArtifactSink;
use crate::error::{BuildError, GenerationError};
use crate::generate::{run_generation_pass_parallel, run_generation_pass_with, GenerationOptions};
use shadergen_preprocess::ShaderProgram;
use shadergen_reflect::back::cross::{CrossOptions, SpirvCross};
use shadergen_reflect::front::SpirvProgram;
use std::path::Path;

/// Options to generate shader artifacts from shader definition sources.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub generation: GenerationOptions,
    pub cross: CrossOptions,
    /// Translate backends concurrently.
    pub parallel: bool,
}

/// Load the shader definitions at `input`, compile them, and run a generation pass into `sink`.
///
/// `input` is either a single shader definition file, or a directory which is searched
/// recursively for `*.shader` files. Errors that prevent the pass from starting are returned
/// as `Err`; errors within the pass are returned in the `Ok` value.
///
/// ```no_run
/// // build.rs
/// use shadergen::artifact::DirectorySink;
/// use shadergen::build::{build_shaders, BuildOptions};
///
/// let out_dir = std::env::var("OUT_DIR").unwrap();
/// let mut sink = DirectorySink::new(out_dir).unwrap();
/// let errors = build_shaders("shaders", &mut sink, &BuildOptions::default()).unwrap();
/// assert!(errors.is_empty());
/// ```
pub fn build_shaders(
    input: impl AsRef<Path>,
    sink: &mut impl ArtifactSink,
    options: &BuildOptions,
) -> Result<Vec<GenerationError>, BuildError> {
    let input = input.as_ref();
    let program = if input.is_dir() {
        ShaderProgram::load_dir(input)?
    } else {
        ShaderProgram::load_files([input])?
    };
    log::info!("loaded {} shader definitions from {}", program.len(), input.display());

    let spirv = SpirvProgram::compile(&program)?;
    let cross = SpirvCross::new(options.cross.clone());

    let errors = if options.parallel {
        run_generation_pass_parallel(&spirv, &cross, sink, &options.generation)
    } else {
        run_generation_pass_with(&spirv, &cross, sink, &options.generation)
    };
    Ok(errors)
}
