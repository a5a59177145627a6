use crate::artifact::{Artifact, ArtifactSink};
use crate::error::GenerationError;
use rayon::prelude::*;
use shadergen_common::{ShaderBackend, ShaderStage};
use shadergen_reflect::back::{CrossCompileProgram, ShaderSet};
use shadergen_reflect::error::ShaderCompileError;

/// Options for a generation pass.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenerationOptions {
    backends: Vec<ShaderBackend>,
}

impl GenerationOptions {
    /// Target only the given backends, in the given order. Repeated backends are ignored.
    pub fn with_backends(backends: impl IntoIterator<Item = ShaderBackend>) -> Self {
        let mut unique = Vec::new();
        for backend in backends {
            if !unique.contains(&backend) {
                unique.push(backend);
            }
        }
        GenerationOptions { backends: unique }
    }

    /// The backends targeted, in emission order.
    pub fn backends(&self) -> &[ShaderBackend] {
        &self.backends
    }
}

impl Default for GenerationOptions {
    /// Target every backend.
    fn default() -> Self {
        GenerationOptions {
            backends: ShaderBackend::ALL.to_vec(),
        }
    }
}

/// Run a generation pass over every backend.
///
/// The program is translated once per backend, and every present stage of every returned
/// shader set is emitted to `sink` as a commented artifact. A failing backend does not
/// prevent the remaining backends from being generated; the errors of all backends are returned.
pub fn run_generation_pass<C>(
    program: &C::Program,
    compiler: &C,
    sink: &mut impl ArtifactSink,
) -> Vec<GenerationError>
where
    C: CrossCompileProgram,
{
    run_generation_pass_with(program, compiler, sink, &GenerationOptions::default())
}

/// Run a generation pass with the given options.
pub fn run_generation_pass_with<C>(
    program: &C::Program,
    compiler: &C,
    sink: &mut impl ArtifactSink,
    options: &GenerationOptions,
) -> Vec<GenerationError>
where
    C: CrossCompileProgram,
{
    let mut errors = Vec::new();
    for &backend in options.backends() {
        log::debug!("translating program for {backend}");
        let result = compiler.translate(program, backend);
        emit_backend(backend, result, sink, &mut errors);
    }
    errors
}

/// Run a generation pass, translating for every backend concurrently.
///
/// Artifacts are still emitted from the calling thread, in backend order.
pub fn run_generation_pass_parallel<C>(
    program: &C::Program,
    compiler: &C,
    sink: &mut impl ArtifactSink,
    options: &GenerationOptions,
) -> Vec<GenerationError>
where
    C: CrossCompileProgram + Sync,
    C::Program: Sync,
{
    let results: Vec<_> = options
        .backends()
        .par_iter()
        .map(|&backend| {
            log::debug!("translating program for {backend}");
            (backend, compiler.translate(program, backend))
        })
        .collect();

    let mut errors = Vec::new();
    for (backend, result) in results {
        emit_backend(backend, result, sink, &mut errors);
    }
    errors
}

fn emit_backend(
    backend: ShaderBackend,
    result: Result<Vec<ShaderSet>, ShaderCompileError>,
    sink: &mut impl ArtifactSink,
    errors: &mut Vec<GenerationError>,
) {
    let sets = match result {
        Ok(sets) => sets,
        Err(source) => {
            log::error!("{backend} backend failed: {source}");
            errors.push(GenerationError::AdapterFailure { backend, source });
            return;
        }
    };

    for set in &sets {
        if set.is_empty() {
            log::warn!("shader set {} has no stages for {backend}", set.name);
            continue;
        }

        for stage in ShaderStage::ALL {
            let Some(source) = set.stage(stage) else {
                continue;
            };
            if source.is_empty() {
                log::warn!("{stage} stage of {} is empty for {backend}", set.name);
                continue;
            }

            let artifact = Artifact::new(backend, &set.name, stage, source);
            let name = artifact.name.clone();
            log::debug!("emitting {name}");
            if let Err(source) = sink.add_artifact(artifact) {
                log::error!("failed to emit {name}: {source}");
                errors.push(GenerationError::EmitFailure {
                    backend,
                    definition: set.name.clone(),
                    name,
                    source,
                });
            }
        }
    }
}
