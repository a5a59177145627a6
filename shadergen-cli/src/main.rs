use anyhow::anyhow;
use clap::{Parser, Subcommand};
use shadergen::artifact::DirectorySink;
use shadergen::build::{build_shaders, BuildOptions};
use shadergen::generate::GenerationOptions;
use shadergen::preprocess::{ShaderDefinition, ShaderProgram};
use shadergen::reflect::{CrossOptions, HlslShaderModel, MslVersion, SpirvCross, SpirvProgram};
use shadergen::{ShaderBackend, ShaderStage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log every step of the pipeline.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate commented shader artifacts for every backend.
    Generate {
        /// A shader definition, or a directory to search for `*.shader` files.
        #[arg(short, long)]
        input: PathBuf,
        /// The directory to write artifacts into.
        #[arg(short, long)]
        out: PathBuf,
        /// The backends to generate, comma separated. Defaults to every backend.
        #[arg(value_enum, short, long, value_delimiter = ',', num_args = 1..)]
        backend: Option<Vec<Backend>>,
        /// Translate backends concurrently.
        #[arg(short, long)]
        parallel: bool,
        #[command(flatten)]
        cross: CrossArgs,
    },
    /// Get the preprocessed GLSL of a shader definition.
    Preprocess {
        /// The path to the shader definition.
        #[arg(short, long)]
        shader: PathBuf,
        /// The stage to output. Defaults to every stage the definition implements.
        #[arg(value_enum, short = 'o', long)]
        stage: Option<Stage>,
    },
    /// Transpile one stage of a shader definition, without commenting it out.
    Transpile {
        /// The path to the shader definition.
        #[arg(short, long)]
        shader: PathBuf,
        /// The shader stage to output.
        #[arg(value_enum, short = 'o', long)]
        stage: Stage,
        /// The backend to transpile to.
        #[arg(value_enum, short, long)]
        backend: Backend,
        #[command(flatten)]
        cross: CrossArgs,
    },
}

#[derive(clap::Args, Debug)]
struct CrossArgs {
    /// The HLSL shader model to write.
    #[arg(value_enum, long, default_value = "50")]
    shader_model: ShaderModel,
    /// The Metal Shading Language version to write.
    #[arg(value_enum, long, default_value = "2.0")]
    msl_version: MetalVersion,
}

impl From<CrossArgs> for CrossOptions {
    fn from(args: CrossArgs) -> Self {
        CrossOptions {
            hlsl_shader_model: args.shader_model.into(),
            msl_version: args.msl_version.into(),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Backend {
    #[clap(name = "hlsl")]
    Hlsl,
    #[clap(name = "glsl330")]
    Glsl330,
    #[clap(name = "glsles300")]
    GlslEs300,
    #[clap(name = "glsl450")]
    Glsl450,
    #[clap(name = "metal")]
    Metal,
}

impl From<Backend> for ShaderBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Hlsl => ShaderBackend::Hlsl,
            Backend::Glsl330 => ShaderBackend::Glsl330,
            Backend::GlslEs300 => ShaderBackend::GlslEs300,
            Backend::Glsl450 => ShaderBackend::Glsl450,
            Backend::Metal => ShaderBackend::Metal,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Stage {
    #[clap(name = "vertex")]
    Vertex,
    #[clap(name = "fragment")]
    Fragment,
    #[clap(name = "compute")]
    Compute,
}

impl From<Stage> for ShaderStage {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Vertex => ShaderStage::Vertex,
            Stage::Fragment => ShaderStage::Fragment,
            Stage::Compute => ShaderStage::Compute,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ShaderModel {
    #[clap(name = "50")]
    V5_0,
    #[clap(name = "51")]
    V5_1,
    #[clap(name = "60")]
    V6_0,
}

impl From<ShaderModel> for HlslShaderModel {
    fn from(model: ShaderModel) -> Self {
        match model {
            ShaderModel::V5_0 => HlslShaderModel::V5_0,
            ShaderModel::V5_1 => HlslShaderModel::V5_1,
            ShaderModel::V6_0 => HlslShaderModel::V6_0,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum MetalVersion {
    #[clap(name = "2.0")]
    V2_0,
    #[clap(name = "2.1")]
    V2_1,
    #[clap(name = "2.2")]
    V2_2,
}

impl From<MetalVersion> for MslVersion {
    fn from(version: MetalVersion) -> Self {
        match version {
            MetalVersion::V2_0 => MslVersion::V2_0,
            MetalVersion::V2_1 => MslVersion::V2_1,
            MetalVersion::V2_2 => MslVersion::V2_2,
        }
    }
}

pub fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match args.command {
        Commands::Generate {
            input,
            out,
            backend,
            parallel,
            cross,
        } => {
            let generation = match backend {
                Some(backends) => {
                    GenerationOptions::with_backends(backends.into_iter().map(ShaderBackend::from))
                }
                None => GenerationOptions::default(),
            };
            let options = BuildOptions {
                generation,
                cross: cross.into(),
                parallel,
            };

            let mut sink = DirectorySink::new(&out)?;
            let errors = build_shaders(&input, &mut sink, &options)?;
            for error in &errors {
                log::error!(
                    "{error} (backend {}, definition {})",
                    error.backend(),
                    error.definition().unwrap_or("unknown")
                );
            }
            if !errors.is_empty() {
                return Err(anyhow!("generation failed with {} errors", errors.len()));
            }
            log::info!("wrote artifacts to {}", out.display());
        }
        Commands::Preprocess { shader, stage } => {
            let definition = ShaderDefinition::load(&shader)?;
            match stage {
                Some(stage) => {
                    let stage = ShaderStage::from(stage);
                    let source = definition.stage(stage).ok_or_else(|| {
                        anyhow!("{} does not implement the {stage} stage", definition.name)
                    })?;
                    print!("{source}");
                }
                None => {
                    for (stage, source) in definition.stages() {
                        println!("// {} {stage}", definition.name);
                        print!("{source}");
                    }
                }
            }
        }
        Commands::Transpile {
            shader,
            stage,
            backend,
            cross,
        } => {
            let definition = ShaderDefinition::load(&shader)?;
            let stage = ShaderStage::from(stage);
            let backend = ShaderBackend::from(backend);
            if definition.stage(stage).is_none() {
                return Err(anyhow!(
                    "{} does not implement the {stage} stage",
                    definition.name
                ));
            }

            let program = ShaderProgram::new(vec![definition])?;
            let spirv = SpirvProgram::compile(&program)?;
            let words = spirv
                .definitions()
                .first()
                .and_then(|definition| definition.stage(stage))
                .ok_or_else(|| anyhow!("the {stage} stage was not compiled"))?;
            let output = SpirvCross::new(cross.into()).compile_stage(words, stage, backend)?;
            print!("{output}");
        }
    }

    Ok(())
}
