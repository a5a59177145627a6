use crate::{PreprocessError, ShaderDefinition};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// The file extension of shader definition sources.
pub const SHADER_DEFINITION_EXTENSION: &str = "shader";

/// An immutable set of shader definitions making up one translation unit.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ShaderProgram {
    definitions: Vec<ShaderDefinition>,
}

impl ShaderProgram {
    /// Create a program from the given definitions.
    ///
    /// Definition names must be unique within a program.
    pub fn new(definitions: Vec<ShaderDefinition>) -> Result<ShaderProgram, PreprocessError> {
        let mut seen = FxHashSet::default();
        for definition in &definitions {
            if !seen.insert(definition.name.as_str()) {
                return Err(PreprocessError::DuplicateDefinition(definition.name.clone()));
            }
        }
        Ok(ShaderProgram { definitions })
    }

    /// Load every `*.shader` file under `dir`, in path order.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<ShaderProgram, PreprocessError> {
        let dir = dir.as_ref();
        let pattern = format!(
            "{}/**/*.{SHADER_DEFINITION_EXTENSION}",
            glob::Pattern::escape(&dir.to_string_lossy())
        );

        let mut paths = glob::glob(&pattern)?
            .map(|entry| {
                entry.map_err(|e| PreprocessError::IOError(e.path().to_path_buf(), e.into_error()))
            })
            .collect::<Result<Vec<PathBuf>, PreprocessError>>()?;
        paths.sort();

        log::debug!("found {} shader definitions in {dir:?}", paths.len());
        Self::load_files(paths)
    }

    /// Load the given shader definition files, in order.
    pub fn load_files<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
    ) -> Result<ShaderProgram, PreprocessError> {
        let definitions = paths
            .into_iter()
            .map(ShaderDefinition::load)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(definitions)
    }

    /// The definitions of this program.
    pub fn definitions(&self) -> &[ShaderDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::{PreprocessError, ShaderDefinition, ShaderProgram};

    fn definition(name: &str) -> ShaderDefinition {
        ShaderDefinition {
            name: name.to_string(),
            vertex: None,
            fragment: Some(String::from("#version 450\nvoid main() {}\n")),
            compute: None,
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = ShaderProgram::new(vec![definition("A"), definition("B"), definition("A")]);
        assert!(matches!(result, Err(PreprocessError::DuplicateDefinition(n)) if n == "A"));
    }

    #[test]
    fn empty_program() {
        let program = ShaderProgram::new(Vec::new()).unwrap();
        assert!(program.is_empty());
    }
}
