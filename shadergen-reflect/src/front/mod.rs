/// SPIR-V compilation via shaderc.
pub mod shaderc;

pub use self::shaderc::{SpirvDefinition, SpirvProgram};
