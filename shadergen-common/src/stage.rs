use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The pipeline role of a shader entry point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    /// All stages, in the order artifacts are emitted for a shader set.
    pub const ALL: [ShaderStage; 3] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Compute,
    ];

    /// The literal stage word.
    pub const fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown shader stage `{0}`")]
pub struct UnknownStage(pub String);

impl FromStr for ShaderStage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "vertex" => ShaderStage::Vertex,
            "fragment" => ShaderStage::Fragment,
            "compute" => ShaderStage::Compute,
            _ => return Err(UnknownStage(s.to_string())),
        })
    }
}
