use crate::back::cross::{CompileStage, CrossStage, HlslShaderModel};
use crate::error::ShaderCompileError;
use spirv_cross::hlsl;

impl CompileStage for CrossStage<hlsl::Target> {
    type Options = HlslShaderModel;

    fn compile(mut self, shader_model: Self::Options) -> Result<String, ShaderCompileError> {
        let mut options = hlsl::CompilerOptions::default();
        options.shader_model = shader_model;

        self.ast.set_compiler_options(&options)?;
        Ok(self.ast.compile()?)
    }
}
