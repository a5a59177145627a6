use crate::back::cross::{CompileStage, CrossStage, MslVersion};
use crate::error::ShaderCompileError;
use spirv_cross::msl;

impl CompileStage for CrossStage<msl::Target> {
    type Options = MslVersion;

    fn compile(mut self, version: Self::Options) -> Result<String, ShaderCompileError> {
        let mut options = msl::CompilerOptions::default();
        options.version = version;

        self.ast.set_compiler_options(&options)?;
        Ok(self.ast.compile()?)
    }
}
