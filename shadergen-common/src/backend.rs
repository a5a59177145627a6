use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A target shading language the pipeline translates into.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ShaderBackend {
    /// HLSL for Direct3D.
    Hlsl,
    /// Desktop GLSL 3.30.
    Glsl330,
    /// GLSL ES 3.00.
    GlslEs300,
    /// Desktop GLSL 4.50.
    Glsl450,
    /// Metal Shading Language.
    Metal,
}

impl ShaderBackend {
    /// Every backend a generation pass targets, in emission order.
    pub const ALL: [ShaderBackend; 5] = [
        ShaderBackend::Hlsl,
        ShaderBackend::Glsl330,
        ShaderBackend::GlslEs300,
        ShaderBackend::Glsl450,
        ShaderBackend::Metal,
    ];

    /// The file extension of artifacts written for this backend.
    ///
    /// Extensions are distinct per backend, so artifact names never collide across backends.
    pub const fn extension(self) -> &'static str {
        match self {
            ShaderBackend::Hlsl => "hlsl",
            ShaderBackend::Glsl330 => "330.glsl",
            ShaderBackend::GlslEs300 => "300.glsles",
            ShaderBackend::Glsl450 => "450.glsl",
            ShaderBackend::Metal => "metal",
        }
    }

    /// A stable identifier for this backend, used in logs and on the command line.
    pub const fn identifier(self) -> &'static str {
        match self {
            ShaderBackend::Hlsl => "hlsl",
            ShaderBackend::Glsl330 => "glsl330",
            ShaderBackend::GlslEs300 => "glsles300",
            ShaderBackend::Glsl450 => "glsl450",
            ShaderBackend::Metal => "metal",
        }
    }
}

impl Display for ShaderBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// The given string does not name a known backend.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown shader backend `{0}`")]
pub struct UnknownBackend(pub String);

impl FromStr for ShaderBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShaderBackend::ALL
            .into_iter()
            .find(|backend| backend.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBackend(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use crate::ShaderBackend;
    use std::collections::HashSet;

    #[test]
    fn extensions_are_distinct() {
        let extensions: HashSet<_> = ShaderBackend::ALL.iter().map(|b| b.extension()).collect();
        assert_eq!(extensions.len(), ShaderBackend::ALL.len());
        assert!(extensions.iter().all(|ext| !ext.is_empty()));
    }

    #[test]
    fn registry_order() {
        let extensions: Vec<_> = ShaderBackend::ALL.iter().map(|b| b.extension()).collect();
        assert_eq!(
            extensions,
            ["hlsl", "330.glsl", "300.glsles", "450.glsl", "metal"]
        );
    }

    #[test]
    fn parses_identifiers() {
        for backend in ShaderBackend::ALL {
            assert_eq!(backend, backend.to_string().parse().unwrap());
        }
        assert_eq!(ShaderBackend::GlslEs300, "GLSLES300".parse().unwrap());
        assert!("spirv".parse::<ShaderBackend>().is_err());
    }
}
