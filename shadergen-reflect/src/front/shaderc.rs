use crate::error::ShaderCompileError;
use shaderc::{CompileOptions, EnvVersion, ShaderKind, SourceLanguage, TargetEnv};
use shadergen_common::ShaderStage;
use shadergen_preprocess::{ShaderDefinition, ShaderProgram};

/// The SPIR-V modules of one shader definition.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SpirvDefinition {
    /// The name of the shader definition.
    pub name: String,
    pub vertex: Option<Vec<u32>>,
    pub fragment: Option<Vec<u32>>,
    pub compute: Option<Vec<u32>>,
}

impl SpirvDefinition {
    /// Get the SPIR-V words of the given stage, if the definition implements it.
    pub fn stage(&self, stage: ShaderStage) -> Option<&[u32]> {
        match stage {
            ShaderStage::Vertex => self.vertex.as_deref(),
            ShaderStage::Fragment => self.fragment.as_deref(),
            ShaderStage::Compute => self.compute.as_deref(),
        }
    }

    /// Iterate the implemented stages in vertex, fragment, compute order.
    pub fn stages(&self) -> impl Iterator<Item = (ShaderStage, &[u32])> {
        ShaderStage::ALL
            .into_iter()
            .filter_map(|stage| self.stage(stage).map(|words| (stage, words)))
    }
}

/// A shader program compiled to SPIR-V.
///
/// This is immutable once compiled and can be shared between backends.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SpirvProgram {
    definitions: Vec<SpirvDefinition>,
}

impl SpirvProgram {
    /// Tries to compile SPIR-V for every stage of every definition in the program.
    pub fn compile(program: &ShaderProgram) -> Result<Self, ShaderCompileError> {
        let compiler = shaderc::Compiler::new().ok_or(ShaderCompileError::ShaderCInitError)?;
        let options = get_shaderc_options()?;

        let definitions = program
            .definitions()
            .iter()
            .map(|definition| compile_definition(&compiler, &options, definition))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SpirvProgram { definitions })
    }

    /// Create a program from already compiled SPIR-V.
    pub fn from_definitions(definitions: Vec<SpirvDefinition>) -> Self {
        SpirvProgram { definitions }
    }

    /// The compiled definitions of this program.
    pub fn definitions(&self) -> &[SpirvDefinition] {
        &self.definitions
    }
}

impl TryFrom<&ShaderProgram> for SpirvProgram {
    type Error = ShaderCompileError;

    /// Tries to compile SPIR-V from the provided shader program.
    fn try_from(program: &ShaderProgram) -> Result<Self, Self::Error> {
        SpirvProgram::compile(program)
    }
}

fn get_shaderc_options() -> Result<CompileOptions<'static>, ShaderCompileError> {
    let mut options = CompileOptions::new().ok_or(ShaderCompileError::ShaderCInitError)?;
    options.set_include_callback(|_, _, _, _| {
        Err("shader definitions must already have includes be preprocessed".into())
    });
    options.set_source_language(SourceLanguage::GLSL);
    options.set_target_env(TargetEnv::Vulkan, EnvVersion::Vulkan1_0 as u32);
    Ok(options)
}

const fn shader_kind(stage: ShaderStage) -> ShaderKind {
    match stage {
        ShaderStage::Vertex => ShaderKind::Vertex,
        ShaderStage::Fragment => ShaderKind::Fragment,
        ShaderStage::Compute => ShaderKind::Compute,
    }
}

fn compile_definition(
    compiler: &shaderc::Compiler,
    options: &CompileOptions,
    definition: &ShaderDefinition,
) -> Result<SpirvDefinition, ShaderCompileError> {
    let compile = |stage: ShaderStage| -> Result<Option<Vec<u32>>, ShaderCompileError> {
        let Some(source) = definition.stage(stage) else {
            return Ok(None);
        };

        log::debug!("compiling {} stage of {} to SPIR-V", stage, definition.name);
        let file_name = format!("{}.{}", definition.name, stage);
        let artifact = compiler
            .compile_into_spirv(source, shader_kind(stage), &file_name, "main", Some(options))
            .map_err(|e| ShaderCompileError::in_definition(&definition.name, stage, e))?;
        Ok(Some(artifact.as_binary().to_vec()))
    };

    Ok(SpirvDefinition {
        name: definition.name.clone(),
        vertex: compile(ShaderStage::Vertex)?,
        fragment: compile(ShaderStage::Fragment)?,
        compute: compile(ShaderStage::Compute)?,
    })
}
