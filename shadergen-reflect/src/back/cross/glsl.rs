use crate::back::cross::{CompileStage, CrossStage, GlslVersion};
use crate::error::ShaderCompileError;
use shadergen_common::ShaderStage;
use spirv_cross::glsl;
use spirv_cross::spirv::Decoration;

pub(crate) struct GlslStageOptions {
    pub(crate) version: GlslVersion,
    /// Whether the version can declare explicit locations on varyings.
    pub(crate) varying_locations: bool,
}

impl CompileStage for CrossStage<glsl::Target> {
    type Options = GlslStageOptions;

    fn compile(mut self, stage_options: Self::Options) -> Result<String, ShaderCompileError> {
        let mut options = glsl::CompilerOptions::default();
        options.version = stage_options.version;
        options.fragment.default_float_precision = glsl::Precision::High;
        options.fragment.default_int_precision = glsl::Precision::High;
        options.enable_420_pack_extension = false;

        self.ast.set_compiler_options(&options)?;

        if !stage_options.varying_locations {
            let resources = self.ast.get_shader_resources()?;
            // varyings are matched by name instead
            let varyings = match self.stage {
                ShaderStage::Vertex => resources.stage_outputs,
                ShaderStage::Fragment => resources.stage_inputs,
                ShaderStage::Compute => Vec::new(),
            };
            for res in varyings {
                self.ast.unset_decoration(res.id, Decoration::Location)?;
            }
        }

        Ok(self.ast.compile()?)
    }
}
