mod glsl;

use glsl::GlslStageOptions;
mod hlsl;
mod msl;

use crate::back::{CrossCompileProgram, ShaderSet};
use crate::error::ShaderCompileError;
use crate::front::SpirvProgram;
use shadergen_common::{ShaderBackend, ShaderStage};
use spirv_cross::spirv::{Ast, Module};

/// The GLSL version to output.
pub type GlslVersion = spirv_cross::glsl::Version;
/// The HLSL shader model to output.
pub type HlslShaderModel = spirv_cross::hlsl::ShaderModel;
/// The MSL language version to output.
pub type MslVersion = spirv_cross::msl::Version;

/// Compiler options for the spirv-cross backends.
#[derive(Debug, Clone)]
pub struct CrossOptions {
    /// The shader model HLSL is written for.
    pub hlsl_shader_model: HlslShaderModel,
    /// The Metal Shading Language version MSL is written for.
    pub msl_version: MslVersion,
}

impl Default for CrossOptions {
    fn default() -> Self {
        CrossOptions {
            hlsl_shader_model: HlslShaderModel::V5_0,
            msl_version: MslVersion::V2_0,
        }
    }
}

/// A single parsed SPIR-V stage, ready to be compiled for the target `T`.
pub(crate) struct CrossStage<T>
where
    T: spirv_cross::spirv::Target,
{
    stage: ShaderStage,
    ast: Ast<T>,
}

impl<T> CrossStage<T>
where
    T: spirv_cross::spirv::Target,
    Ast<T>: spirv_cross::spirv::Compile<T>,
    Ast<T>: spirv_cross::spirv::Parse<T>,
{
    pub(crate) fn parse(words: &[u32], stage: ShaderStage) -> Result<Self, ShaderCompileError> {
        let module = Module::from_words(words);
        let ast = Ast::parse(&module)?;
        Ok(CrossStage { stage, ast })
    }
}

/// Compile a parsed stage into the target shading language.
pub(crate) trait CompileStage {
    type Options;

    fn compile(self, options: Self::Options) -> Result<String, ShaderCompileError>;
}

/// Cross-compiles SPIR-V programs with spirv-cross.
///
/// A program is translated as a whole: if any stage of any definition fails for a backend,
/// no shader sets are returned for that backend. GLSL ES 3.00 has no compute shaders, so a
/// program containing a compute definition can not be translated to
/// [`ShaderBackend::GlslEs300`].
#[derive(Debug, Clone, Default)]
pub struct SpirvCross {
    options: CrossOptions,
}

impl SpirvCross {
    pub fn new(options: CrossOptions) -> Self {
        SpirvCross { options }
    }

    pub fn options(&self) -> &CrossOptions {
        &self.options
    }

    /// Cross-compile a single SPIR-V stage for the given backend.
    pub fn compile_stage(
        &self,
        words: &[u32],
        stage: ShaderStage,
        backend: ShaderBackend,
    ) -> Result<String, ShaderCompileError> {
        match backend {
            ShaderBackend::Hlsl => CrossStage::<spirv_cross::hlsl::Target>::parse(words, stage)?
                .compile(self.options.hlsl_shader_model.clone()),
            ShaderBackend::Glsl330 => Self::compile_glsl(words, stage, GlslVersion::V3_30, false),
            ShaderBackend::GlslEs300 => {
                Self::compile_glsl(words, stage, GlslVersion::V3_00Es, false)
            }
            ShaderBackend::Glsl450 => Self::compile_glsl(words, stage, GlslVersion::V4_50, true),
            ShaderBackend::Metal => CrossStage::<spirv_cross::msl::Target>::parse(words, stage)?
                .compile(self.options.msl_version.clone()),
        }
    }

    fn compile_glsl(
        words: &[u32],
        stage: ShaderStage,
        version: GlslVersion,
        varying_locations: bool,
    ) -> Result<String, ShaderCompileError> {
        CrossStage::<spirv_cross::glsl::Target>::parse(words, stage)?.compile(GlslStageOptions {
            version,
            varying_locations,
        })
    }
}

impl CrossCompileProgram for SpirvCross {
    type Program = SpirvProgram;

    fn translate(
        &self,
        program: &SpirvProgram,
        backend: ShaderBackend,
    ) -> Result<Vec<ShaderSet>, ShaderCompileError> {
        program
            .definitions()
            .iter()
            .map(|definition| {
                let mut set = ShaderSet::new(definition.name.as_str());
                for (stage, words) in definition.stages() {
                    log::debug!("cross-compiling {stage} stage of {} to {backend}", definition.name);
                    let source = self
                        .compile_stage(words, stage, backend)
                        .map_err(|e| ShaderCompileError::in_definition(&definition.name, stage, e))?;
                    set.set_stage(stage, source);
                }
                Ok(set)
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::back::cross::SpirvCross;
    use crate::back::CrossCompileProgram;
    use crate::front::SpirvProgram;
    use shadergen_common::{ShaderBackend, ShaderStage};
    use shadergen_preprocess::ShaderProgram;

    fn compile(paths: &[&str]) -> SpirvProgram {
        let program = ShaderProgram::load_files(paths).unwrap();
        SpirvProgram::compile(&program).unwrap()
    }

    #[test_log::test]
    pub fn translate_all_backends() {
        let spirv = compile(&["../test/basic.shader", "../test/textured.shader"]);
        let cross = SpirvCross::default();

        for backend in ShaderBackend::ALL {
            let sets = cross.translate(&spirv, backend).unwrap();
            assert_eq!(sets.len(), 2);

            let basic = &sets[0];
            assert_eq!(basic.name, "Basic");
            assert!(basic.vertex.is_none());
            assert!(basic.compute.is_none());
            assert!(!basic.fragment.as_deref().unwrap().is_empty());

            let textured = &sets[1];
            assert_eq!(textured.name, "Textured");
            assert!(textured.stage(ShaderStage::Vertex).is_some());
            assert!(textured.stage(ShaderStage::Fragment).is_some());
        }
    }

    #[test_log::test]
    pub fn glsl_versions() {
        let spirv = compile(&["../test/basic.shader"]);
        let cross = SpirvCross::default();

        let fragment = |backend| {
            cross.translate(&spirv, backend).unwrap()[0]
                .fragment
                .clone()
                .unwrap()
        };

        assert!(fragment(ShaderBackend::Glsl330).starts_with("#version 330"));
        assert!(fragment(ShaderBackend::GlslEs300).starts_with("#version 300 es"));
        assert!(fragment(ShaderBackend::Glsl450).starts_with("#version 450"));
        assert!(fragment(ShaderBackend::Metal).contains("#include <metal_stdlib>"));
    }

    #[test_log::test]
    pub fn translate_compute() {
        let spirv = compile(&["../test/compute/blur.shader"]);
        let cross = SpirvCross::default();

        for backend in [ShaderBackend::Hlsl, ShaderBackend::Glsl450, ShaderBackend::Metal] {
            let sets = cross.translate(&spirv, backend).unwrap();
            assert_eq!(sets[0].name, "blur");
            assert!(sets[0].compute.is_some());
            assert!(sets[0].vertex.is_none() && sets[0].fragment.is_none());
        }
    }

    #[test_log::test]
    pub fn empty_program() {
        let sets = SpirvCross::default()
            .translate(&SpirvProgram::default(), ShaderBackend::Hlsl)
            .unwrap();
        assert!(sets.is_empty());
    }

    #[test_log::test]
    pub fn invalid_spirv_names_definition() {
        let spirv = SpirvProgram::from_definitions(vec![crate::front::SpirvDefinition {
            name: String::from("Garbage"),
            vertex: Some(vec![0xdead_beef, 0, 0, 0, 0]),
            fragment: None,
            compute: None,
        }]);

        let error = SpirvCross::default()
            .translate(&spirv, ShaderBackend::Metal)
            .unwrap_err();
        assert_eq!(error.definition(), Some("Garbage"));
        assert_eq!(error.stage(), Some(ShaderStage::Vertex));
    }

    #[test_log::test]
    pub fn compute_fails_whole_program_for_glsl_es() {
        let spirv = compile(&["../test/basic.shader", "../test/compute/blur.shader"]);
        let cross = SpirvCross::default();

        let error = cross
            .translate(&spirv, ShaderBackend::GlslEs300)
            .unwrap_err();
        assert_eq!(error.definition(), Some("blur"));
        assert_eq!(error.stage(), Some(ShaderStage::Compute));

        // the same program still translates for desktop GLSL
        let sets = cross.translate(&spirv, ShaderBackend::Glsl450).unwrap();
        assert_eq!(sets.len(), 2);
    }
}
