use crate::naming;
use shadergen_common::{ShaderBackend, ShaderStage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The line comment marker shared by every target shading language.
pub const COMMENT_MARKER: &str = "//";

/// Comment out every line of `source`.
///
/// Each line, empty lines included, is prefixed with the comment marker and a space, and lines
/// are joined with `\n`. `\n`, `\r\n` and a lone `\r` are all accepted as line breaks. An
/// empty source yields a single commented empty line.
///
/// This is not idempotent: commenting already commented text prefixes it again.
pub fn to_commented(source: &str) -> String {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| line.split('\r'))
        .map(|line| format!("{COMMENT_MARKER} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A named unit of generated output.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Artifact {
    /// The unique name of the artifact within a generation pass.
    pub name: String,
    pub backend: ShaderBackend,
    pub stage: ShaderStage,
    /// The name of the shader set this artifact was generated from.
    pub set_name: String,
    /// The commented shader source.
    pub text: String,
}

impl Artifact {
    /// Create the artifact for one stage of a shader set, commenting out the raw source.
    pub fn new(backend: ShaderBackend, set_name: &str, stage: ShaderStage, source: &str) -> Self {
        Artifact {
            name: naming::resolve(backend, set_name, stage),
            backend,
            stage,
            set_name: set_name.to_string(),
            text: to_commented(source),
        }
    }
}

/// Receives the artifacts of a generation pass.
pub trait ArtifactSink {
    fn add_artifact(&mut self, artifact: Artifact) -> io::Result<()>;
}

impl ArtifactSink for Vec<Artifact> {
    fn add_artifact(&mut self, artifact: Artifact) -> io::Result<()> {
        self.push(artifact);
        Ok(())
    }
}

impl<S> ArtifactSink for &mut S
where
    S: ArtifactSink + ?Sized,
{
    fn add_artifact(&mut self, artifact: Artifact) -> io::Result<()> {
        (**self).add_artifact(artifact)
    }
}

/// Writes every artifact as a file named after the artifact into a directory.
///
/// In a build script, point this at `OUT_DIR` and pull artifacts in with `include_str!`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(DirectorySink { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    fn add_artifact(&mut self, artifact: Artifact) -> io::Result<()> {
        if artifact.name.contains(['/', '\\']) || artifact.name.starts_with('.') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("artifact name `{}` is not a plain file name", artifact.name),
            ));
        }

        let path = self.root.join(&artifact.name);
        log::debug!("writing {}", path.display());
        fs::write(path, artifact.text)
    }
}

#[cfg(test)]
mod test {
    use crate::artifact::{to_commented, Artifact, ArtifactSink, DirectorySink, COMMENT_MARKER};
    use shadergen_common::{ShaderBackend, ShaderStage};

    #[test]
    fn comments_every_line() {
        let source = "#version 330\n\nvoid main()\n{\n}";
        let commented = to_commented(source);
        assert_eq!(
            commented,
            "// #version 330\n// \n// void main()\n// {\n// }"
        );
    }

    #[test]
    fn preserves_line_count_and_content() {
        for source in ["a", "a\nb", "a\n", "\n\n", "  indented\n\ttabbed\n"] {
            let commented = to_commented(source);
            let lines: Vec<_> = commented.split('\n').collect();
            assert_eq!(lines.len(), source.split('\n').count());

            let prefix = format!("{COMMENT_MARKER} ");
            let recovered: Vec<_> = lines
                .iter()
                .map(|line| line.strip_prefix(prefix.as_str()).unwrap())
                .collect();
            assert_eq!(recovered.join("\n"), source);
        }
    }

    #[test]
    fn crlf_is_a_line_break() {
        assert_eq!(to_commented("a\r\nb"), to_commented("a\nb"));
    }

    #[test]
    fn lone_cr_is_a_line_break() {
        assert_eq!(to_commented("a\rb\r\nc"), "// a\n// b\n// c");
    }

    #[test]
    fn empty_source() {
        assert_eq!(to_commented(""), "// ");
    }

    #[test]
    fn not_idempotent() {
        assert_eq!(to_commented(&to_commented("x")), "// // x");
    }

    #[test]
    fn artifact_name_and_text() {
        let artifact = Artifact::new(ShaderBackend::Glsl330, "Foo", ShaderStage::Vertex, "x");
        assert_eq!(artifact.name, "Foo-vertex.330.glsl");
        assert_eq!(artifact.text, "// x");
        assert_eq!(artifact.set_name, "Foo");
    }

    #[test]
    fn directory_sink_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("out")).unwrap();
        sink.add_artifact(Artifact::new(
            ShaderBackend::Metal,
            "Foo",
            ShaderStage::Fragment,
            "fragment float4 main0() {}",
        ))
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/Foo-fragment.metal")).unwrap();
        assert_eq!(written, "// fragment float4 main0() {}");
    }

    #[test]
    fn directory_sink_rejects_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();
        let result = sink.add_artifact(Artifact::new(
            ShaderBackend::Hlsl,
            "../escape",
            ShaderStage::Vertex,
            "",
        ));
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::InvalidInput);
    }
}
